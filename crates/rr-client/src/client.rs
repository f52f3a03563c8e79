//! Blocking HTTP client for the routing backend.

use reqwest::blocking::Client;
use tracing::{info, warn};

use crate::{ClientConfig, ClientError, ClientResult, RouteQuery, RouteSet, parse_error_body, parse_response};

/// One-shot client: one request per query, no retries.
#[derive(Debug, Clone)]
pub struct RoutingClient {
    http:   Client,
    config: ClientConfig,
}

impl RoutingClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Client configured from the environment.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask the backend for candidate routes between the two free-text
    /// addresses in `query`.
    pub fn fetch_routes(&self, query: &RouteQuery) -> ClientResult<RouteSet> {
        let url = self.config.endpoint();
        info!(%url, origin = %query.origin, destination = %query.destination, "requesting routes");

        let response = self
            .http
            .post(&url)
            .json(query)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.bytes().map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = parse_error_body(&body);
            warn!(status = status.as_u16(), %message, "routing backend returned an error");
            return Err(ClientError::Status { status: status.as_u16(), message });
        }

        let set = parse_response(&body).inspect_err(|e| warn!(error = %e, "rejected routing response"))?;
        info!(routes = set.routes.len(), "routes received");
        Ok(set)
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            warn!(timeout = ?self.config.timeout, "routing request timed out");
            ClientError::Timeout(self.config.timeout)
        } else if err.is_decode() {
            ClientError::Malformed(err.to_string())
        } else {
            warn!(error = %err, "routing backend unreachable");
            ClientError::Unreachable(err.to_string())
        }
    }
}
