mod envelope;
mod transform;
mod whitelist;


pub use envelope::{BuildAnalytics, BuildStatus, StepAnalytics};
pub use transform::anonymize;
pub use whitelist::{filter_inputs, is_whitelisted};
