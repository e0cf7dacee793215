//! Live preview reconciliation for GraphQL responses.
//!
//! A preview page fetches an entry once through the content graph and then
//! receives a stream of raw updates from the entry editor. This crate folds
//! each update into the previously fetched, denormalized response so the
//! page can re-render without issuing the query again.
//!
//! ## Components
//!
//! - **Reconciler**: routes every schema field to its update strategy and
//!   produces a new record
//! - **Resolver**: turns raw link pointers into typed references using the
//!   reference context
//! - **Diagnostics**: reports schema fields the fetched record does not carry
//! - **Session**: keeps a record and its reference context across updates
//!
//! Nothing here performs I/O. References whose type is not yet known come
//! back as [`EditorMessage`](livepreview_types::EditorMessage)s for the
//! caller to deliver.
//!
//! # Example
//!
//! ```
//! use livepreview_graphql::reconcile;
//! use livepreview_model::{ContentTypeSchema, DenormalizedRecord, EntryUpdate, FieldDefinition, ReferenceMap};
//! use serde_json::json;
//!
//! let schema = ContentTypeSchema::new(vec![FieldDefinition::symbol("title")]);
//! let record = DenormalizedRecord::from_value(json!({ "sys": { "id": "e1" }, "title": "old" })).unwrap();
//! let update = EntryUpdate::new("e1").with_field("title", "en-US", json!("new"));
//!
//! let result = reconcile(&schema, &record, &update, "en-US", &ReferenceMap::new());
//! assert_eq!(result.record.get_str("/title"), Some("new"));
//! assert!(result.notifications.is_empty());
//! ```

mod config;
mod diagnostics;
mod reconciler;
mod resolver;
mod session;
mod typename;

pub use config::ReconcilerConfig;
pub use diagnostics::{MissingFieldsReporter, NoopReporter, TracingReporter};
pub use reconciler::{reconcile, Reconciler, Reconciliation};
pub use resolver::{resolve_reference, ReferenceResolution};
pub use session::PreviewSession;
pub use typename::typename_for;
