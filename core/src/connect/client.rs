use anki_today_common::config::Config;
use anki_today_common::error::GatewayError;
use anki_today_common::gateway::AnkiGateway;
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::connect::envelope::{Request, Response};

/// Blocking AnkiConnect client. One POST per call, no retries.
pub struct AnkiConnectClient {
    endpoint: String,
    http: Client,
}

impl AnkiConnectClient {
    pub fn new(cfg: &Config) -> Result<Self, GatewayError> {
        Self::with_endpoint(cfg.endpoint())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, GatewayError> {
        let http = Client::builder().build().map_err(transport)?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnkiGateway for AnkiConnectClient {
    fn call(&self, action: &str, params: Value) -> Result<Value, GatewayError> {
        debug!(action, endpoint = %self.endpoint, "calling AnkiConnect");

        let response: Response = self
            .http
            .post(&self.endpoint)
            .json(&Request::new(action, params))
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.json())
            .map_err(transport)?;

        response.into_result()
    }
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}
