use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::StepStatus;
use super::serde_util::{nanos, null_as_default};

/// Human-facing details of a step, as listed in the step library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepDetails {
    pub title: Option<String>,
    pub source_code_url: Option<String>,
    pub support_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub library: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub latest_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub step: StepDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepRunResult {
    #[serde(deserialize_with = "null_as_default")]
    pub step_info: StepInfo,
    #[serde(alias = "inputs", deserialize_with = "null_as_default")]
    pub step_inputs: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub idx: i64,
    #[serde(with = "nanos")]
    pub run_time: Duration,
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(deserialize_with = "null_as_default")]
    pub error_str: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exit_code: i64,
}

impl StepRunResult {
    pub fn status(&self) -> StepStatus {
        StepStatus::from_code(self.status)
    }
}
