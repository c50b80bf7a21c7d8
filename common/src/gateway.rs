use serde_json::Value;

use crate::error::GatewayError;

/// Protocol version sent with every request.
pub const API_VERSION: u8 = 6;

/// Defines the contract for talking to the AnkiConnect automation API.
pub trait AnkiGateway {
    /// Performs exactly one call of `action` with `params`.
    ///
    /// # Returns
    /// * `Ok(Value)` - The unwrapped `result` payload (may be `null`).
    /// * `Err(GatewayError::Remote)` - The remote answered with a non-null `error`.
    /// * `Err(GatewayError::Transport)` - The call itself failed.
    fn call(&self, action: &str, params: Value) -> Result<Value, GatewayError>;
}
