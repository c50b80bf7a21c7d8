//! # Domain Models
//!
//! * [`card::Card`]: Display projection of one flashcard.
//! * [`deck::DeckCards`]: One top-level deck's due cards, bucketed by stage.
//! * [`review::TodayReview`]: The full report handed to a presenter.
//! * [`record::RawCardRecord`]: A `cardsInfo` entry as the remote API sends it.

pub mod card;
pub mod deck;
pub mod record;
pub mod review;

pub use card::Card;
pub use deck::{CardStage, DeckCards};
pub use record::RawCardRecord;
pub use review::TodayReview;
