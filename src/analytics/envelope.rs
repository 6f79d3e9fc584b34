use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::model::StepStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStatus {
    Successful,
    Failed,
}

impl BuildStatus {
    pub fn from_failed(failed: bool) -> Self {
        if failed { Self::Failed } else { Self::Successful }
    }
}

/// What leaves the machine for one build. Built per send, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildAnalytics {
    pub app_slug: String,
    pub build_slug: String,
    #[serde(rename = "repo_id")]
    pub repository_id: String,
    pub stack_id: String,
    pub platform: String,
    pub cli_version: String,
    pub workflow_name: String,
    pub status: BuildStatus,
    #[serde(rename = "run_time", serialize_with = "serialize_nanos")]
    pub runtime: Duration,
    pub start_time: Option<DateTime<FixedOffset>>,
    pub step_analytics: Vec<StepAnalytics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepAnalytics {
    pub step_id: String,
    pub step_title: String,
    pub step_version: String,
    pub step_source: String,
    pub step_inputs: BTreeMap<String, String>,
    pub status: StepStatus,
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(rename = "run_time", serialize_with = "serialize_nanos")]
    pub runtime: Duration,
}

fn serialize_nanos<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
}
