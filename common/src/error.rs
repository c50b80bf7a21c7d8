use thiserror::Error;

/// Failure of a single call against the remote API.
#[derive(Clone, Debug, Error)]
pub enum GatewayError {
    /// The endpoint could not be reached or did not answer with a JSON envelope.
    #[error("failed to communicate with Anki: {0}")]
    Transport(String),

    /// The envelope carried a non-null `error`.
    #[error("AnkiConnect error: {0}")]
    Remote(String),
}

/// Failure of a query-layer operation.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The `result` payload did not have the JSON type the action promises.
    #[error("unexpected result for '{action}': {source}")]
    Shape {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl QueryError {
    /// Whether the failure means the endpoint itself is gone, as opposed to
    /// a problem scoped to a single request.
    pub fn is_transport(&self) -> bool {
        matches!(self, QueryError::Gateway(GatewayError::Transport(_)))
    }
}
