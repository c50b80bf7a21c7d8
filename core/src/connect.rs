//! # AnkiConnect Adapter
//!
//! Concrete [`AnkiGateway`](anki_today_common::gateway::AnkiGateway) speaking the
//! AnkiConnect JSON protocol over HTTP. [`envelope`] holds the wire format,
//! [`client`] the transport.

pub mod client;
pub mod envelope;

pub use client::AnkiConnectClient;
