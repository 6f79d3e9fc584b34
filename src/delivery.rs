mod client;
mod error;

#[cfg(test)]
mod tests;

pub use client::{DeliveryClient, REQUEST_TIMEOUT, accepts_status};
pub use error::{DeliveryError, Result};
