use crate::compat::CompatError;
use crate::delivery::DeliveryError;
use crate::payload::PayloadError;
use crate::preferences::PreferenceError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read analytics configuration: {0}")]
    Preferences(#[from] PreferenceError),

    #[error("{0}")]
    Compat(#[from] CompatError),

    #[error("{0}")]
    Payload(#[from] PayloadError),

    #[error("failed to send analytics: {0}")]
    Delivery(#[from] DeliveryError),
}
