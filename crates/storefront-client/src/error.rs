use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("request failed")]
    Transport(#[from] reqwest::Error),
    #[error("server answered {status}")]
    Status { status: StatusCode, body: String },
}

impl ClientError {
    /// Status code of a non-success response, if the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
