use anki_today_common::error::GatewayError;
use anki_today_common::gateway::API_VERSION;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub action: &'a str,
    pub version: u8,
    pub params: Value,
}

impl<'a> Request<'a> {
    pub fn new(action: &'a str, params: Value) -> Self {
        Self {
            action,
            version: API_VERSION,
            params,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub result: Value,
    #[serde(default)]
    pub error: Option<Value>,
}

impl Response {
    /// Unwraps `result`, or surfaces a non-null `error` as [`GatewayError::Remote`].
    pub fn into_result(self) -> Result<Value, GatewayError> {
        match self.error {
            None | Some(Value::Null) => Ok(self.result),
            Some(Value::String(message)) => Err(GatewayError::Remote(message)),
            Some(other) => Err(GatewayError::Remote(other.to_string())),
        }
    }
}
