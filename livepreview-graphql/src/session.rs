//! Preview session — one record kept current across many editor updates.
//!
//! The session is a pure state machine: it consumes updates and entity
//! metadata, and produces editor messages. Delivering those messages and
//! feeding the editor's answers back through [`PreviewSession::learn_entity`]
//! is up to the caller. A reference left unresolved by one pass resolves on
//! the first update applied after its entity has been learned.

use crate::{Reconciler, Reconciliation};
use livepreview_model::{ContentTypeSchema, DenormalizedRecord, EntryUpdate, ReferenceMap, ReferencedEntity};
use livepreview_types::{EditorMessage, EntryId};
use tracing::{debug, info};

/// A record under live preview together with everything needed to update it.
pub struct PreviewSession {
    schema: ContentTypeSchema,
    record: DenormalizedRecord,
    locale: String,
    references: ReferenceMap,
    reconciler: Reconciler,
    pending: Vec<EntryId>,
}

impl PreviewSession {
    /// Starts a session with the default reconciler.
    pub fn new(schema: ContentTypeSchema, record: DenormalizedRecord, locale: impl Into<String>) -> Self {
        Self::with_reconciler(schema, record, locale, Reconciler::default())
    }

    pub fn with_reconciler(
        schema: ContentTypeSchema,
        record: DenormalizedRecord,
        locale: impl Into<String>,
        reconciler: Reconciler,
    ) -> Self {
        let locale = locale.into();
        info!(
            entry_id = record.sys_id().unwrap_or("<none>"),
            locale = %locale,
            "Starting preview session"
        );
        Self {
            schema,
            record,
            locale,
            references: ReferenceMap::new(),
            reconciler,
            pending: Vec::new(),
        }
    }

    /// Seeds the reference context.
    pub fn with_references(mut self, references: ReferenceMap) -> Self {
        self.references = references;
        self
    }

    /// Applies an update and returns the messages to send to the editor.
    ///
    /// Updates for other entries leave the record and the pending set alone.
    pub fn apply(&mut self, update: &EntryUpdate) -> Vec<EditorMessage> {
        let Reconciliation {
            record,
            notifications,
            applied,
        } = self.reconciler.reconcile(
            &self.schema,
            &self.record,
            update,
            &self.locale,
            &self.references,
        );

        if applied {
            self.record = record;
            self.pending = notifications
                .iter()
                .map(|m| m.reference_entity_id().clone())
                .collect();
            debug!(pending = self.pending.len(), "Applied update");
        }
        notifications
    }

    /// Adds an entity to the reference context.
    pub fn learn_entity(&mut self, entity: ReferencedEntity) {
        debug!(entity_id = entity.id(), "Learned referenced entity");
        self.references.insert(entity);
    }

    pub fn learn_entities(&mut self, entities: impl IntoIterator<Item = ReferencedEntity>) {
        for entity in entities {
            self.learn_entity(entity);
        }
    }

    /// Switches the locale used by subsequent updates.
    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Entities requested by the last applied update.
    pub fn pending(&self) -> &[EntryId] {
        &self.pending
    }

    pub fn record(&self) -> &DenormalizedRecord {
        &self.record
    }

    pub fn references(&self) -> &ReferenceMap {
        &self.references
    }

    pub fn schema(&self) -> &ContentTypeSchema {
        &self.schema
    }

    pub fn into_record(self) -> DenormalizedRecord {
        self.record
    }
}
