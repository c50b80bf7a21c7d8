use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use anki_today_common::config::Config;
use anki_today_common::error::GatewayError;
use anki_today_common::gateway::AnkiGateway;
use anki_today_core::aggregator::ReviewAggregator;
use anki_today_core::classifier::ReviewClock;
use anki_today_core::query::{self, CardQuery};
use serde_json::{Value, json};

/// 2023-11-14T22:13:20Z
pub const NOW_MILLIS: i64 = 1_700_000_000_000;

pub fn clock() -> ReviewClock {
    ReviewClock::at_millis(NOW_MILLIS)
}

pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Answers AnkiConnect actions from canned data and records every call.
#[derive(Default)]
pub struct ScriptedGateway {
    decks: Vec<String>,
    deck_names_error: Option<GatewayError>,
    searches: HashMap<String, Result<Value, GatewayError>>,
    cards: HashMap<u64, Value>,
    failing_details: HashMap<u64, GatewayError>,
    calls: CallLog,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decks(mut self, decks: &[&str]) -> Self {
        self.decks = decks.iter().map(|deck| deck.to_string()).collect();
        self
    }

    pub fn deck_names_fail(mut self, err: GatewayError) -> Self {
        self.deck_names_error = Some(err);
        self
    }

    /// Registers the ids returned for a literal search string.
    pub fn search(mut self, search: impl Into<String>, ids: &[u64]) -> Self {
        self.searches.insert(search.into(), Ok(json!(ids)));
        self
    }

    /// Answers a literal search string with an arbitrary `findCards` result.
    pub fn search_reply(mut self, search: impl Into<String>, reply: Value) -> Self {
        self.searches.insert(search.into(), Ok(reply));
        self
    }

    /// Registers the ids the default due search of `deck` returns.
    pub fn due(self, deck: &str, ids: &[u64]) -> Self {
        self.search(query::due_search(deck, true), ids)
    }

    pub fn search_fails(mut self, search: impl Into<String>, err: GatewayError) -> Self {
        self.searches.insert(search.into(), Err(err));
        self
    }

    pub fn card(mut self, id: u64, record: Value) -> Self {
        self.cards.insert(id, record);
        self
    }

    /// Any `cardsInfo` batch containing `id` fails with `err`.
    pub fn details_fail_for(mut self, id: u64, err: GatewayError) -> Self {
        self.failing_details.insert(id, err);
        self
    }

    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }

    pub fn into_aggregator(self, cfg: &Config) -> ReviewAggregator {
        ReviewAggregator::new(CardQuery::new(Box::new(self)), cfg)
    }

    fn cards_info(&self, params: &Value) -> Result<Value, GatewayError> {
        let ids: Vec<u64> = params["cards"]
            .as_array()
            .map(|ids| ids.iter().filter_map(Value::as_u64).collect())
            .unwrap_or_default();

        if let Some(err) = ids.iter().find_map(|id| self.failing_details.get(id)) {
            return Err(err.clone());
        }

        let records: Vec<Value> = ids
            .iter()
            .map(|id| self.cards.get(id).cloned().unwrap_or_else(|| json!({})))
            .collect();
        Ok(Value::Array(records))
    }
}

impl AnkiGateway for ScriptedGateway {
    fn call(&self, action: &str, params: Value) -> Result<Value, GatewayError> {
        let logged = match params.get("query").and_then(Value::as_str) {
            Some(search) => format!("{action} {search}"),
            None => action.to_string(),
        };
        self.calls.borrow_mut().push(logged);

        match action {
            "version" => Ok(json!(6)),
            "deckNames" => match &self.deck_names_error {
                Some(err) => Err(err.clone()),
                None => Ok(json!(self.decks)),
            },
            "findCards" => {
                let search = params["query"].as_str().unwrap_or_default();
                match self.searches.get(search) {
                    Some(Ok(reply)) => Ok(reply.clone()),
                    Some(Err(err)) => Err(err.clone()),
                    None => Ok(json!([])),
                }
            }
            "cardsInfo" => self.cards_info(&params),
            other => Err(GatewayError::Remote(format!("unsupported action {other}"))),
        }
    }
}

fn fields(front: &str, back: &str) -> Value {
    json!({
        "Front": {"value": front, "order": 0},
        "Back": {"value": back, "order": 1}
    })
}

pub fn new_card(id: u64, deck: &str, front: &str, back: &str) -> Value {
    json!({
        "cardId": id, "deckName": deck, "queue": 0, "type": 0, "due": id,
        "fields": fields(front, back)
    })
}

pub fn learning_card(id: u64, deck: &str, due_millis: i64, front: &str) -> Value {
    json!({
        "cardId": id, "deckName": deck, "queue": 1, "type": 1, "due": due_millis,
        "fields": fields(front, "")
    })
}

pub fn review_card(id: u64, deck: &str, due_day: i64, odue: i64, front: &str) -> Value {
    json!({
        "cardId": id, "deckName": deck, "queue": 2, "type": 2, "due": due_day, "odue": odue,
        "fields": fields(front, "")
    })
}

/// Searches issued, in order.
pub fn searches(calls: &CallLog) -> Vec<String> {
    calls
        .borrow()
        .iter()
        .filter_map(|call| call.strip_prefix("findCards ").map(str::to_string))
        .collect()
}

pub fn count_calls(calls: &CallLog, action: &str) -> usize {
    calls
        .borrow()
        .iter()
        .filter(|call| call.split(' ').next() == Some(action))
        .count()
}

pub fn fronts(cards: &[anki_today_common::models::Card]) -> HashSet<String> {
    cards.iter().map(|card| card.front.clone()).collect()
}
