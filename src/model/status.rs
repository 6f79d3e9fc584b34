use serde::Serialize;

/// Outcome of a single step as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Success,
    Failed,
    FailedSkippable,
    Skipped,
    #[serde(rename = "skipped_with_runif")]
    SkippedWithRunIf,
    Unknown,
}

impl StepStatus {
    pub const SUCCESS_CODE: i64 = 0;
    pub const FAILED_CODE: i64 = 1;
    pub const FAILED_SKIPPABLE_CODE: i64 = 2;
    pub const SKIPPED_CODE: i64 = 3;
    pub const SKIPPED_WITH_RUN_IF_CODE: i64 = 4;

    pub fn from_code(code: i64) -> Self {
        match code {
            Self::SUCCESS_CODE => Self::Success,
            Self::FAILED_CODE => Self::Failed,
            Self::FAILED_SKIPPABLE_CODE => Self::FailedSkippable,
            Self::SKIPPED_CODE => Self::Skipped,
            Self::SKIPPED_WITH_RUN_IF_CODE => Self::SkippedWithRunIf,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::FailedSkippable => "failed_skippable",
            Self::Skipped => "skipped",
            Self::SkippedWithRunIf => "skipped_with_runif",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for StepStatus {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}
