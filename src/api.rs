//! Review API client: the production [`StatusSource`].

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::config::Config;
use crate::error::VigilError;
use crate::monitor::StatusSource;

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Build a blocking HTTP client with explicit connect and request timeouts so
/// a stalled remote can never wedge a poll cycle past one interval.
pub(crate) fn blocking_client(user_agent: &str) -> Result<Client, VigilError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent(user_agent)
        .build()
        .map_err(|e| VigilError::Transport(e.to_string()))
}

pub struct ReviewApi {
    client: Client,
    endpoint: String,
    token: String,
}

impl ReviewApi {
    pub fn new(config: &Config) -> Result<Self, VigilError> {
        Ok(ReviewApi {
            client: blocking_client("vigil")?,
            endpoint: config.endpoint.clone(),
            token: config.api_token.clone(),
        })
    }
}

impl StatusSource for ReviewApi {
    /// Fetch homework statuses submitted after `since`.
    ///
    /// Surfaces three distinguishable failure conditions: transport-level
    /// failure, non-success HTTP status, and an undecodable body.
    fn fetch(&self, since: i64) -> Result<Value, VigilError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", since)])
            .send()
            .map_err(|e| VigilError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VigilError::ApiStatus(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| VigilError::Transport(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }
}
