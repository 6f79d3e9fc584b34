use std::time::Duration;

use tracing::{debug, warn};
use ureq::{Agent, AgentBuilder, Response};

use crate::analytics::BuildAnalytics;
use crate::config::DEFAULT_COLLECTOR_URL;

use super::{DeliveryError, Result};

/// Covers connecting, sending the body and reading the response.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const ACCEPTED_STATUS: std::ops::RangeInclusive<u16> = 200..=210;

pub fn accepts_status(code: u16) -> bool {
    ACCEPTED_STATUS.contains(&code)
}

/// Posts one envelope to the collector. One attempt, no retries.
#[derive(Clone)]
pub struct DeliveryClient {
    endpoint: String,
    agent: Agent,
}

impl std::fmt::Debug for DeliveryClient {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DeliveryClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl DeliveryClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_COLLECTOR_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let agent = AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .redirects(0)
            .build();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn send(&self, analytics: &BuildAnalytics) -> Result<()> {
        let body = serde_json::to_string(analytics)?;
        debug!(endpoint = %self.endpoint, bytes = body.len(), "posting build analytics");

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_string(&body);

        let response = match response {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(DeliveryError::Request {
                    body,
                    message: transport.to_string(),
                });
            }
        };

        let code = response.status();
        let text = read_body(response);
        if accepts_status(code) {
            debug!(code, "build analytics accepted");
            return Ok(());
        }
        warn!(code, "collector rejected build analytics");
        Err(DeliveryError::Status {
            code,
            body,
            response: text,
        })
    }
}

impl Default for DeliveryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Drains and closes the response stream.
fn read_body(response: Response) -> String {
    match response.into_string() {
        Ok(text) => text,
        Err(error) => {
            warn!(%error, "failed to read collector response");
            String::new()
        }
    }
}
