use thiserror::Error;

pub type Result<T> = std::result::Result<T, PayloadError>;

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("no input provided")]
    NoInput,

    #[error("failed to read plugin input: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse plugin input ({input}): {source}")]
    Parse {
        input: String,
        #[source]
        source: serde_json::Error,
    },
}

impl PayloadError {
    pub fn is_no_input(&self) -> bool {
        matches!(self, Self::NoInput)
    }
}
