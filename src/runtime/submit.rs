use tracing::{debug, info, warn};

use crate::analytics::anonymize;
use crate::compat::{CompatWarning, FORMAT_VERSION, check_format_version};
use crate::payload::{PayloadError, PayloadSource, StreamProbe, select_source, source_for};

use super::{AppContext, Result};

const README_URL: &str =
    "https://github.com/bitrise-io/bitrise-plugins-analytics/blob/master/README.md";

/// How a submission ended when nothing went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user switched analytics off.
    Disabled,
    /// Host and plugin disagree on the report format.
    Skipped(CompatWarning),
    /// Neither stdin nor the environment carried a report.
    NoInput,
    Delivered,
}

/// Runs the whole submission, picking the input channel from `stdin`.
pub fn submit(app: &AppContext, stdin: &dyn StreamProbe) -> Result<Outcome> {
    if let Some(outcome) = precheck(app)? {
        return Ok(outcome);
    }

    let stream = stdin.probe().map_err(PayloadError::from)?;
    debug!(?stream, "probed standard input");
    let kind = match select_source(&stream, &app.config().payload) {
        Ok(kind) => kind,
        Err(PayloadError::NoInput) => return Ok(no_input()),
        Err(error) => return Err(error.into()),
    };
    let mut source = source_for(kind, app.config());
    deliver(app, source.as_mut())
}

/// Same as [`submit`], with the input channel already chosen.
pub fn submit_with_source(app: &AppContext, source: &mut dyn PayloadSource) -> Result<Outcome> {
    if let Some(outcome) = precheck(app)? {
        return Ok(outcome);
    }
    deliver(app, source)
}

fn precheck(app: &AppContext) -> Result<Option<Outcome>> {
    if !app.preferences().is_enabled()? {
        debug!("analytics turned off, nothing to submit");
        return Ok(Some(Outcome::Disabled));
    }

    let host_format_version = &app.config().host_format_version;
    if let Some(warning) = check_format_version(FORMAT_VERSION, host_format_version)? {
        warn!("{warning}");
        return Ok(Some(Outcome::Skipped(warning)));
    }
    Ok(None)
}

fn deliver(app: &AppContext, source: &mut dyn PayloadSource) -> Result<Outcome> {
    let results = match source.payload() {
        Ok(results) => results,
        Err(PayloadError::NoInput) => return Ok(no_input()),
        Err(error) => return Err(error.into()),
    };

    info!("");
    info!("Submitting anonymized usage information...");
    info!("For more information visit:");
    info!("{README_URL}");

    let analytics = anonymize(&results, app.config());
    debug!(
        steps = analytics.step_analytics.len(),
        status = ?analytics.status,
        "build analytics prepared"
    );
    app.delivery().send(&analytics)?;
    Ok(Outcome::Delivered)
}

fn no_input() -> Outcome {
    warn!("no build report on stdin or in the environment, nothing to submit");
    Outcome::NoInput
}
