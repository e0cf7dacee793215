//! Data model for live preview reconciliation.
//!
//! Defines the shapes that flow into the reconciler:
//! - [`ContentTypeSchema`] — the content type's ordered field definitions
//! - [`FieldStrategy`] — which update strategy a field is routed to
//! - [`DenormalizedRecord`] — a query-shaped record with inlined references
//! - [`EntryUpdate`] — a raw, locale-keyed update from the entry editor
//! - [`ReferenceContext`] — the injected lookup used to type raw links
//!
//! Every shape mirrors its JSON form so it can be read straight off the
//! wire with `serde_json`.

mod context;
mod record;
mod schema;
mod strategy;
mod update;

pub use context::{ContentTypeLink, LinkSys, ReferenceContext, ReferenceMap, ReferencedEntity, ReferencedSys};
pub use record::DenormalizedRecord;
pub use schema::{ContentTypeSchema, FieldDefinition, FieldItems, FieldType, SchemaSys};
pub use strategy::FieldStrategy;
pub use update::{EntryUpdate, UpdateSys};
