//! Core type definitions for live preview reconciliation.
//!
//! This crate defines the small, shape-agnostic types shared by the model,
//! the reconciler and the CLI harness:
//! - Entry identifiers as they appear in `sys.id` envelopes
//! - The outbound message contract spoken to the entry editor
//!
//! Content-type schemas, denormalized records and raw updates live in
//! `livepreview-model`, not here.

mod ids;
mod message;

pub use ids::EntryId;
pub use message::{EditorMessage, MessageAction};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or building preview inputs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid entry id: {0:?}")]
    InvalidId(String),

    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("configuration error: {0}")]
    Config(String),
}
