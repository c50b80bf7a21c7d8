//! # Query Layer
//!
//! Thin semantic operations on top of an [`AnkiGateway`]. Each operation is
//! one gateway call (or none); failures propagate without retry and the
//! caller decides whether they abort the run.

use anki_today_common::error::QueryError;
use anki_today_common::gateway::AnkiGateway;
use anki_today_common::models::RawCardRecord;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::warn;

/// Search matching a deck and all of its sub-decks.
///
/// Embedded double quotes in `deck` are not escaped.
pub fn deck_search(deck: &str) -> String {
    format!("deck:\"{deck}\"")
}

/// Search for the cards of `deck` that need attention today.
pub fn due_search(deck: &str, include_new: bool) -> String {
    if include_new {
        format!("{} (is:due OR is:new)", deck_search(deck))
    } else {
        format!("{} is:due", deck_search(deck))
    }
}

pub struct CardQuery {
    gateway: Box<dyn AnkiGateway>,
}

impl CardQuery {
    pub fn new(gateway: Box<dyn AnkiGateway>) -> Self {
        Self { gateway }
    }

    /// AnkiConnect protocol version. Doubles as a connectivity probe.
    pub fn version(&self) -> Result<u64, QueryError> {
        self.request("version", json!({}))
    }

    /// Every deck name, sub-decks included.
    pub fn list_decks(&self) -> Result<Vec<String>, QueryError> {
        self.request("deckNames", json!({}))
    }

    pub fn find_card_ids(&self, search: &str) -> Result<Vec<u64>, QueryError> {
        self.request("findCards", json!({ "query": search }))
    }

    pub fn find_due_card_ids(&self, deck: &str, include_new: bool) -> Result<Vec<u64>, QueryError> {
        self.find_card_ids(&due_search(deck, include_new))
    }

    /// Detail records for `ids`. An empty batch never reaches the gateway.
    ///
    /// Entries that cannot be read as a card record are dropped.
    pub fn card_details(&self, ids: &[u64]) -> Result<Vec<RawCardRecord>, QueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<Value> = self.request("cardsInfo", json!({ "cards": ids }))?;

        let records = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<RawCardRecord>(entry) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(error = %err, "ignoring unreadable card record");
                    None
                }
            })
            .collect();

        Ok(records)
    }

    /// Calls `action` and reads the result as `T`; a `null` result reads as `T::default()`.
    fn request<T>(&self, action: &'static str, params: Value) -> Result<T, QueryError>
    where
        T: DeserializeOwned + Default,
    {
        let result = self.gateway.call(action, params)?;
        if result.is_null() {
            return Ok(T::default());
        }
        serde_json::from_value(result).map_err(|source| QueryError::Shape { action, source })
    }
}
