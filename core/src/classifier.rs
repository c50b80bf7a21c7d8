//! # Card Classifier
//!
//! Pure rules deciding which stage a raw card record is reported under, and
//! which of its fields make up the front and back text.
//!
//! Scheduler queues as AnkiConnect reports them:
//!
//! | queue | meaning      | `due` unit                        |
//! |-------|--------------|-----------------------------------|
//! | 0     | new          | position, ignored                 |
//! | 1, 3  | (re)learning | milliseconds since the Unix epoch |
//! | 2     | review       | day number                        |
//! | < 0   | suspended, buried | n/a                          |

use anki_today_common::config::FieldPairs;
use anki_today_common::models::{Card, CardStage, RawCardRecord};
use chrono::Utc;

const QUEUE_NEW: i64 = 0;
const QUEUE_LEARNING: i64 = 1;
const QUEUE_REVIEW: i64 = 2;
const QUEUE_DAY_LEARNING: i64 = 3;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// The instant a run classifies against, captured once so every card in the
/// run sees the same "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReviewClock {
    pub now_millis: i64,
    /// Unix day number (`now_millis / 86_400_000`, floored).
    pub today: i64,
}

impl ReviewClock {
    pub fn now() -> Self {
        Self::at_millis(Utc::now().timestamp_millis())
    }

    pub fn at_millis(now_millis: i64) -> Self {
        Self {
            now_millis,
            today: now_millis.div_euclid(MILLIS_PER_DAY),
        }
    }
}

/// Stage of a card that is actionable at `clock`, or `None` when it is not.
///
/// `type` stands in for a missing `queue`.
pub fn classify(record: &RawCardRecord, clock: &ReviewClock) -> Option<CardStage> {
    match record.queue.or(record.card_type)? {
        QUEUE_LEARNING | QUEUE_DAY_LEARNING => record
            .due
            .filter(|due| *due <= clock.now_millis)
            .map(|_| CardStage::Learning),
        QUEUE_NEW => Some(CardStage::New),
        QUEUE_REVIEW => review_due_day(record)
            .filter(|day| *day <= clock.today)
            .map(|_| CardStage::Review),
        _ => None,
    }
}

/// Stage of a card regardless of when it is due.
///
/// Suspended and buried cards are placed by their `type`.
pub fn lifecycle_stage(record: &RawCardRecord) -> Option<CardStage> {
    record
        .queue
        .and_then(stage_for_code)
        .or_else(|| record.card_type.and_then(stage_for_code))
}

fn stage_for_code(code: i64) -> Option<CardStage> {
    match code {
        QUEUE_NEW => Some(CardStage::New),
        QUEUE_LEARNING | QUEUE_DAY_LEARNING => Some(CardStage::Learning),
        QUEUE_REVIEW => Some(CardStage::Review),
        _ => None,
    }
}

/// `odue` wins while the card sits in a filtered deck.
fn review_due_day(record: &RawCardRecord) -> Option<i64> {
    record.odue.filter(|odue| *odue > 0).or(record.due)
}

/// Front text: the first pair whose front field is filled, else the first
/// field on the note, else `""`.
pub fn extract_front(record: &RawCardRecord, pairs: &FieldPairs) -> String {
    pairs
        .iter()
        .find_map(|pair| filled(record.field_value(&pair.front)))
        .or_else(|| filled(record.first_field_value()))
        .unwrap_or_default()
        .to_string()
}

/// Back text: the first pair whose back field is filled, else the first
/// field on the note.
pub fn extract_back(record: &RawCardRecord, pairs: &FieldPairs) -> Option<String> {
    pairs
        .iter()
        .find_map(|pair| filled(record.field_value(&pair.back)))
        .or_else(|| filled(record.first_field_value()))
        .map(str::to_string)
}

pub fn to_card(record: &RawCardRecord, pairs: &FieldPairs) -> Card {
    Card::new(extract_front(record, pairs), extract_back(record, pairs))
}

fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
