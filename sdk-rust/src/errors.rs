use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The input could not be turned into a dispatchable request
    /// (e.g. a persisted token that is not a valid header value).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the backend failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-2xx status code. `detail` carries the
    /// server-provided error message when the body contained one.
    #[error("Status error: {status} ({})", .detail.as_deref().unwrap_or("no detail"))]
    Status {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
}

impl ApiError {
    /// The server-provided detail message, when this failure carried one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            Self::InvalidInput(_) | Self::Transport(_) => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
