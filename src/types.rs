// src/types.rs

/// Raw contents of one signal's input widgets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignalInput {
    pub text: String,
    pub start: i64,
}

impl Default for SignalInput {
    fn default() -> Self {
        Self {
            text: "1,2,1".to_owned(),
            start: 0,
        }
    }
}
