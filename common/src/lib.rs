//! # Anki Today Common
//!
//! Shared vocabulary for every crate in the workspace.
//!
//! * **[`models`]**: The report entities ([`models::Card`], [`models::DeckCards`],
//!   [`models::TodayReview`]) and the untrusted [`models::RawCardRecord`] returned
//!   by the remote API.
//! * **[`gateway`]**: The port through which the application talks to AnkiConnect.
//! * **[`presenter`]**: The port through which a finished report is rendered.
//! * **[`error`]**: Failure taxonomy shared by the adapters and the aggregator.
//! * **[`config`]**: Run configuration assembled by the command line.

pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod presenter;
