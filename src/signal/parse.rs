use crate::signal::{Signal, SignalError};
/// Parse comma separated sample text such as `"1, 2.5, -1"`.
///
/// Whitespace around tokens is ignored. Blank text is a degenerate input; empty tokens,
/// non-numeric tokens and non-finite values are rejected with their 1-based position.
pub fn parse_samples(text: &str) -> Result<Vec<f64>, SignalError> {
    if text.trim().is_empty() {
        return Err(SignalError::DegenerateInput);
    }
    text.split(',')
        .enumerate()
        .map(|(idx, raw)| parse_token(idx + 1, raw.trim()))
        .collect()
}
pub fn parse_signal(text: &str, start: i64) -> Result<Signal, SignalError> {
    Signal::new(parse_samples(text)?, start)
}
fn parse_token(position: usize, token: &str) -> Result<f64, SignalError> {
    if token.is_empty() {
        return Err(SignalError::EmptyToken { position });
    }
    let value: f64 = token.parse().map_err(|_| SignalError::InvalidNumber {
        position,
        token: token.to_owned(),
    })?;
    if !value.is_finite() {
        return Err(SignalError::NonFiniteSample {
            position,
            token: token.to_owned(),
        });
    }
    Ok(value)
}
