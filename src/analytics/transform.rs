use std::time::Duration;

use crate::config::Config;
use crate::model::{BuildRunResults, StepRunResult};

use super::{BuildAnalytics, BuildStatus, StepAnalytics, filter_inputs};

/// Reduces a build report to the anonymized envelope. Never fails: missing
/// fields come through as empty values.
pub fn anonymize(results: &BuildRunResults, config: &Config) -> BuildAnalytics {
    let mut runtime = Duration::ZERO;
    let mut step_analytics = Vec::with_capacity(results.step_count());

    for result in results.ordered_results() {
        runtime = runtime.saturating_add(result.run_time);
        step_analytics.push(step_analytics_for(result));
    }

    let correlation = &config.correlation;
    BuildAnalytics {
        app_slug: correlation.app_slug.clone(),
        build_slug: correlation.build_slug.clone(),
        repository_id: correlation.repository_slug.clone(),
        stack_id: correlation.stack_id.clone(),
        platform: results.project_type.clone(),
        cli_version: config.host_version.clone(),
        workflow_name: correlation.workflow_name.clone(),
        status: BuildStatus::from_failed(results.is_build_failed()),
        runtime,
        start_time: results.start_time,
        step_analytics,
    }
}

fn step_analytics_for(result: &StepRunResult) -> StepAnalytics {
    let info = &result.step_info;
    StepAnalytics {
        step_id: info.id.clone(),
        step_title: info.step.title.clone().unwrap_or_default(),
        step_version: info.version.clone(),
        step_source: info.step.source_code_url.clone().unwrap_or_default(),
        step_inputs: filter_inputs(&info.id, &result.step_inputs),
        status: result.status(),
        start_time: result.start_time,
        runtime: result.run_time,
    }
}
