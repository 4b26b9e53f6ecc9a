use reqwest::StatusCode;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("No credential available in the session store")]
    MissingCredential,

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Remote API returned status {status}: {message}")]
    ExternalApi { status: StatusCode, message: String },

    #[error("Invalid response payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AppError {
    /// Status code of a non-success response, if this error came from one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::ExternalApi { status, .. } => Some(*status),
            AppError::HttpClient(e) => e.status(),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
