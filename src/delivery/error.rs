use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeliveryError>;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("failed to encode usage data: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to perform request with usage data ({body}), error: {message}")]
    Request { body: String, message: String },

    #[error("sending analytics data ({body}) failed with status code: {code}, response: {response}")]
    Status {
        code: u16,
        body: String,
        response: String,
    },
}

impl DeliveryError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}
