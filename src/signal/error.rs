use thiserror::Error;
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("signal has no samples")]
    DegenerateInput,
    #[error("token {position} is empty")]
    EmptyToken { position: usize },
    #[error("token {position} ({token:?}) is not a number")]
    InvalidNumber { position: usize, token: String },
    #[error("token {position} ({token:?}) is not a finite value")]
    NonFiniteSample { position: usize, token: String },
    #[error("{name}: {source}")]
    Input {
        name: String,
        #[source]
        source: Box<SignalError>,
    },
    #[error("failed to render plot: {0}")]
    Plot(String),
}
impl SignalError {
    pub fn for_input(name: &str, source: SignalError) -> Self {
        SignalError::Input {
            name: name.to_owned(),
            source: Box::new(source),
        }
    }
    /// Name of the input that failed, if the error came from parsing one.
    pub fn input_name(&self) -> Option<&str> {
        match self {
            SignalError::Input { name, .. } => Some(name),
            _ => None,
        }
    }
}
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for SignalError
{
    fn from(value: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        SignalError::Plot(format!("drawing stems: {value}"))
    }
}
impl From<image::ImageError> for SignalError {
    fn from(value: image::ImageError) -> Self {
        SignalError::Plot(format!("encoding png: {value}"))
    }
}
