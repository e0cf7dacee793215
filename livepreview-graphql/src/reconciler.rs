//! Reconciler - folds raw editor updates into denormalized records.
//!
//! Every schema field is routed to one of four strategies (scalar, rich
//! text, single reference, reference collection). Only keys the fetched
//! record already carries are written; the record's shape is owned by the
//! query that produced it.

use crate::diagnostics::{MissingFieldsReporter, TracingReporter};
use crate::resolver::{is_falsy, resolve_reference};
use crate::ReconcilerConfig;
use livepreview_model::{
    ContentTypeSchema, DenormalizedRecord, EntryUpdate, FieldDefinition, FieldStrategy,
    ReferenceContext,
};
use livepreview_types::EditorMessage;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

/// Result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// The updated record, or an unchanged copy when the update was for
    /// another entry.
    pub record: DenormalizedRecord,
    /// Requests for entities whose type could not be determined, one per
    /// entity, in the order they were met.
    pub notifications: Vec<EditorMessage>,
    /// Whether the update targeted this record.
    pub applied: bool,
}

/// Applies editor updates to denormalized records.
pub struct Reconciler {
    config: ReconcilerConfig,
    reporter: Arc<dyn MissingFieldsReporter>,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(ReconcilerConfig::default())
    }
}

impl Reconciler {
    /// Creates a reconciler that logs schema drift through `tracing`.
    pub fn new(config: ReconcilerConfig) -> Self {
        Self::with_reporter(config, Arc::new(TracingReporter))
    }

    /// Creates a reconciler with a custom missing-field reporter.
    pub fn with_reporter(config: ReconcilerConfig, reporter: Arc<dyn MissingFieldsReporter>) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Reconciles `update` into a copy of `record`.
    ///
    /// Neither input is modified. An update for a different entry yields an
    /// unchanged copy of the record.
    pub fn reconcile(
        &self,
        schema: &ContentTypeSchema,
        record: &DenormalizedRecord,
        update: &EntryUpdate,
        locale: &str,
        ctx: &dyn ReferenceContext,
    ) -> Reconciliation {
        self.report_missing_fields(schema, record);

        if record.sys_id() != Some(update.id()) {
            debug!(
                record_id = record.sys_id().unwrap_or("<none>"),
                update_id = update.id(),
                "Ignoring update for a different entry"
            );
            return Reconciliation {
                record: record.clone(),
                notifications: Vec::new(),
                applied: false,
            };
        }

        debug!(entry_id = update.id(), locale, fields = schema.fields.len(), "Reconciling entry");

        let mut pass = Pass {
            config: &self.config,
            record: record.clone(),
            update,
            locale,
            ctx,
            notifications: Vec::new(),
        };
        for field in &schema.fields {
            pass.apply_field(field);
        }

        Reconciliation {
            record: pass.record,
            notifications: pass.notifications,
            applied: true,
        }
    }

    fn report_missing_fields(&self, schema: &ContentTypeSchema, record: &DenormalizedRecord) {
        if !self.config.report_missing_fields {
            return;
        }
        let expected: Vec<String> = schema
            .fields
            .iter()
            .map(|field| self.record_key(field))
            .collect();
        let missing = record.missing_keys(expected.iter().map(String::as_str));
        if !missing.is_empty() {
            self.reporter
                .report_missing(schema.content_type_id(), &missing);
        }
    }

    /// The key a field occupies on the record.
    pub fn record_key(&self, field: &FieldDefinition) -> String {
        match field.strategy() {
            FieldStrategy::ReferenceCollection => self.config.collection_key(field.key()),
            _ => field.key().to_string(),
        }
    }
}

/// Reconciles with the default configuration.
pub fn reconcile(
    schema: &ContentTypeSchema,
    record: &DenormalizedRecord,
    update: &EntryUpdate,
    locale: &str,
    ctx: &dyn ReferenceContext,
) -> Reconciliation {
    Reconciler::default().reconcile(schema, record, update, locale, ctx)
}

/// State of a single reconciliation pass.
struct Pass<'a> {
    config: &'a ReconcilerConfig,
    record: DenormalizedRecord,
    update: &'a EntryUpdate,
    locale: &'a str,
    ctx: &'a dyn ReferenceContext,
    notifications: Vec<EditorMessage>,
}

impl Pass<'_> {
    fn apply_field(&mut self, field: &FieldDefinition) {
        let key = field.key();
        match field.strategy() {
            FieldStrategy::Scalar => self.update_scalar(key),
            FieldStrategy::RichText => self.update_rich_text(key),
            FieldStrategy::SingleReference => self.update_single_reference(key),
            FieldStrategy::ReferenceCollection => self.update_reference_collection(key),
            FieldStrategy::Unhandled { item_type } => {
                debug!(
                    field = key,
                    item_type = item_type.as_ref().map_or("<none>", |t| t.as_str()),
                    "Skipping array field without link items"
                );
            }
        }
    }

    fn localized(&self, key: &str) -> Value {
        self.update
            .localized(key, self.locale)
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn update_scalar(&mut self, key: &str) {
        if self.record.contains_key(key) {
            let value = self.localized(key);
            self.record.replace(key, value);
        }
    }

    fn update_rich_text(&mut self, key: &str) {
        let document = self.localized(key);
        let rich_text_key = self.config.rich_text_key.clone();
        let Some(container) = self.record.get_mut(key) else {
            return;
        };
        set_in_container(container, rich_text_key, document);
    }

    fn update_single_reference(&mut self, key: &str) {
        if !self.record.contains_key(key) {
            return;
        }
        let raw = self.localized(key);
        let resolved = self.resolve(&raw);
        self.record.replace(key, resolved);
    }

    fn update_reference_collection(&mut self, key: &str) {
        let collection_key = self.config.collection_key(key);
        if !self.record.contains_key(&collection_key) {
            return;
        }

        let update = self.update;
        let raw_items: &[Value] = match update.localized(key, self.locale) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                debug!(field = key, value = %other, "Reference collection update is not an array");
                &[]
            }
            None => &[],
        };
        let items: Vec<Value> = raw_items
            .iter()
            .map(|raw| self.resolve(raw))
            .filter(|item| !is_falsy(item))
            .collect();

        if let Some(container) = self.record.get_mut(&collection_key) {
            set_in_container(container, "items".to_string(), Value::Array(items));
        }
    }

    fn resolve(&mut self, raw: &Value) -> Value {
        let resolution = resolve_reference(raw, self.ctx);
        if let Some(message) = resolution.notification() {
            if !self.notifications.contains(&message) {
                self.notifications.push(message);
            }
        }
        resolution.into_value()
    }
}

/// Sets `key` inside an object container, replacing the container with a
/// fresh object when it is not one.
fn set_in_container(container: &mut Value, key: String, value: Value) {
    if !container.is_object() {
        *container = Value::Object(Map::new());
    }
    if let Value::Object(map) = container {
        map.insert(key, value);
    }
}
