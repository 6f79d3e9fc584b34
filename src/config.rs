//! Process configuration, resolved from the environment once at start-up.

use std::path::PathBuf;

pub const PLUGIN_MODE_KEY: &str = "BITRISE_PLUGIN_INPUT_PLUGIN_MODE";
pub const FORMAT_VERSION_KEY: &str = "BITRISE_PLUGIN_INPUT_FORMAT_VERSION";
pub const HOST_VERSION_KEY: &str = "BITRISE_PLUGIN_INPUT_BITRISE_VERSION";
pub const DATA_DIR_KEY: &str = "BITRISE_PLUGIN_INPUT_DATA_DIR";
pub const PAYLOAD_KEY: &str = "BITRISE_PLUGIN_INPUT_PAYLOAD";
pub const CI_MODE_KEY: &str = "CI";

pub const STACK_ID_KEY: &str = "BITRISEIO_STACK_ID";
pub const APP_SLUG_KEY: &str = "BITRISE_APP_SLUG";
pub const BUILD_SLUG_KEY: &str = "BITRISE_BUILD_SLUG";
pub const REPOSITORY_SLUG_KEY: &str = "BITRISEIO_GIT_REPOSITORY_SLUG";
pub const WORKFLOW_NAME_KEY: &str = "BITRISE_TRIGGERED_WORKFLOW_TITLE";

pub const DEFAULT_COLLECTOR_URL: &str = "https://bitrise-step-analytics.herokuapp.com/metrics";

/// How the host invoked the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PluginMode {
    /// Post-build hook: submit analytics for the build that just finished.
    Trigger,
    /// Anything else, including a plain command-line invocation.
    #[default]
    Manual,
}

impl PluginMode {
    fn parse(value: &str) -> Self {
        if value == "trigger" {
            Self::Trigger
        } else {
            Self::Manual
        }
    }
}

/// Identifiers that tie a submission to a build on the CI side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Correlation {
    pub stack_id: String,
    pub app_slug: String,
    pub build_slug: String,
    pub repository_slug: String,
    pub workflow_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub plugin_mode: PluginMode,
    pub host_format_version: String,
    pub host_version: String,
    pub data_dir: Option<PathBuf>,
    pub ci_mode: bool,
    pub payload: String,
    pub correlation: Correlation,
    pub collector_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            plugin_mode: PluginMode::default(),
            host_format_version: String::new(),
            host_version: String::new(),
            data_dir: None,
            ci_mode: false,
            payload: String::new(),
            correlation: Correlation::default(),
            collector_url: DEFAULT_COLLECTOR_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Missing keys read as empty.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).unwrap_or_default();
        let data_dir = get(DATA_DIR_KEY);
        Self {
            plugin_mode: PluginMode::parse(&get(PLUGIN_MODE_KEY)),
            host_format_version: get(FORMAT_VERSION_KEY),
            host_version: get(HOST_VERSION_KEY),
            data_dir: (!data_dir.is_empty()).then(|| PathBuf::from(data_dir)),
            ci_mode: get(CI_MODE_KEY) == "true",
            payload: get(PAYLOAD_KEY),
            correlation: Correlation {
                stack_id: get(STACK_ID_KEY),
                app_slug: get(APP_SLUG_KEY),
                build_slug: get(BUILD_SLUG_KEY),
                repository_slug: get(REPOSITORY_SLUG_KEY),
                workflow_name: get(WORKFLOW_NAME_KEY),
            },
            ..Self::default()
        }
    }

    pub fn with_collector_url(mut self, url: impl Into<String>) -> Self {
        self.collector_url = url.into();
        self
    }

    pub fn is_trigger(&self) -> bool {
        self.plugin_mode == PluginMode::Trigger
    }
}
