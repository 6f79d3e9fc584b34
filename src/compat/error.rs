use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompatError>;

#[derive(Debug, Error)]
pub enum CompatError {
    #[error("failed to parse bitrise format version ({value}): {source}")]
    HostVersion {
        value: String,
        #[source]
        source: semver::Error,
    },

    #[error("failed to parse analytics plugin format version ({value}): {source}")]
    PluginVersion {
        value: String,
        #[source]
        source: semver::Error,
    },
}
