use thiserror::Error;

pub type Result<T> = std::result::Result<T, PreferenceError>;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("plugin data directory is not set")]
    MissingDataDir,

    #[error("preference file I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
