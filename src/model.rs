mod build;
mod serde_util;
mod status;
mod step;


pub use build::BuildRunResults;
pub use status::StepStatus;
pub use step::{StepDetails, StepInfo, StepRunResult};
