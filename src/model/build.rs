use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::StepRunResult;
use super::serde_util::null_as_default;

/// Report of one finished build, handed over by the host after the run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildRunResults {
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_as_default")]
    pub project_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stepman_updates: BTreeMap<String, i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub success_steps: Vec<StepRunResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub failed_steps: Vec<StepRunResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub failed_skippable_steps: Vec<StepRunResult>,
    #[serde(deserialize_with = "null_as_default")]
    pub skipped_steps: Vec<StepRunResult>,
}

impl BuildRunResults {
    /// Every step result in report order: success, failed, failed-skippable, skipped.
    /// Each group keeps its own order.
    pub fn ordered_results(&self) -> impl Iterator<Item = &StepRunResult> {
        self.success_steps
            .iter()
            .chain(&self.failed_steps)
            .chain(&self.failed_skippable_steps)
            .chain(&self.skipped_steps)
    }

    pub fn step_count(&self) -> usize {
        self.success_steps.len()
            + self.failed_steps.len()
            + self.failed_skippable_steps.len()
            + self.skipped_steps.len()
    }

    pub fn is_build_failed(&self) -> bool {
        !self.failed_steps.is_empty()
    }
}
