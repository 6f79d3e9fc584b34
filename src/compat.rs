//! Format-version handshake between the host CLI and this plugin.

mod error;

use std::cmp::Ordering;

use semver::Version;

pub use error::{CompatError, Result};

/// Build report format this plugin understands.
pub const FORMAT_VERSION: &str = "11";

/// First host CLI release that hands build reports to plugins.
pub const MIN_HOST_VERSION: &str = "1.6.0";

/// Reasons to skip a submission without failing the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatWarning {
    MissingHostVersion,
    OutdatedPlugin,
    OutdatedHost,
}

impl std::fmt::Display for CompatWarning {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHostVersion => write!(
                formatter,
                "This analytics plugin version would need bitrise-cli version >= {MIN_HOST_VERSION} to submit analytics"
            ),
            Self::OutdatedPlugin => formatter.write_str(
                "Outdated analytics plugin, used format version is lower than host bitrise-cli's format version, please update the plugin",
            ),
            Self::OutdatedHost => formatter.write_str(
                "Outdated bitrise-cli, used format version is lower than the analytics plugin's format version, please update the bitrise-cli",
            ),
        }
    }
}

/// Compares the plugin's format version with the host's.
///
/// `Ok(None)` means both sides agree and the submission may go ahead. A warning
/// means the submission is skipped. Unparsable versions are errors.
pub fn check_format_version(
    plugin_version: &str,
    host_version: &str,
) -> Result<Option<CompatWarning>> {
    if host_version.is_empty() {
        return Ok(Some(CompatWarning::MissingHostVersion));
    }

    let host = parse_version(host_version).map_err(|source| CompatError::HostVersion {
        value: host_version.to_string(),
        source,
    })?;
    let plugin = parse_version(plugin_version).map_err(|source| CompatError::PluginVersion {
        value: plugin_version.to_string(),
        source,
    })?;

    Ok(match plugin.cmp_precedence(&host) {
        Ordering::Less => Some(CompatWarning::OutdatedPlugin),
        Ordering::Greater => Some(CompatWarning::OutdatedHost),
        Ordering::Equal => None,
    })
}

/// Accepts short forms such as `3`, `1.4` or `v2.0.1` by padding the numeric core.
fn parse_version(raw: &str) -> std::result::Result<Version, semver::Error> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    let core_end = trimmed.find(['-', '+']).unwrap_or(trimmed.len());
    let (core, suffix) = trimmed.split_at(core_end);
    let components = core.split('.').count();
    let padding = ".0".repeat(3_usize.saturating_sub(components));
    Version::parse(&format!("{core}{padding}{suffix}"))
}
