use thiserror::Error;

/// Failures at the language-chat boundary. Never propagated into the simulation.
#[derive(Debug, Error)]
pub enum ConverseError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("model response was empty or malformed")]
    EmptyReply,

    #[error("upstream returned {status}: {message}")]
    Upstream { status: u16, message: String },
}

impl ConverseError {
    /// Whether a retry could plausibly succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            ConverseError::Transport(_) => true,
            ConverseError::Upstream { status, .. } => *status >= 500 || *status == 429,
            ConverseError::EmptyReply => false,
        }
    }
}

impl From<reqwest::Error> for ConverseError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ConverseError::Upstream {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ConverseError::Transport(err.to_string()),
        }
    }
}
