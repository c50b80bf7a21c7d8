//! # Anki Today Core
//!
//! The review-aggregation pipeline, leaf first:
//!
//! * **[`connect`]**: HTTP adapter implementing [`anki_today_common::gateway::AnkiGateway`].
//! * **[`query`]**: Semantic operations (decks, card ids, card details) on top of a gateway.
//! * **[`classifier`]**: Pure rules turning a raw card record into a stage and display text.
//! * **[`aggregator`]**: Walks the decks and assembles the [`anki_today_common::models::TodayReview`].

pub mod aggregator;
pub mod classifier;
pub mod connect;
pub mod query;
