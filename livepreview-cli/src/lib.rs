//! File loading and output types for the `livepreview` binary.

use anyhow::{Context, Result};
use livepreview_graphql::{Reconciler, ReconcilerConfig};
use livepreview_model::{ContentTypeSchema, DenormalizedRecord, EntryUpdate, ReferenceMap};
use livepreview_types::EditorMessage;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Paths and locale for one reconciliation run.
#[derive(Debug, Clone)]
pub struct PreviewInputs {
    pub schema: PathBuf,
    pub record: PathBuf,
    pub update: PathBuf,
    pub references: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub locale: String,
}

/// What the binary prints.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReconcileOutput {
    pub record: DenormalizedRecord,
    pub messages: Vec<EditorMessage>,
    pub applied: bool,
}

/// Reads and parses a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Loads every input and reconciles the update into the record.
pub fn run(inputs: &PreviewInputs) -> Result<ReconcileOutput> {
    let config = match &inputs.config {
        Some(path) => ReconcilerConfig::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ReconcilerConfig::default(),
    };

    let schema: ContentTypeSchema = load_json(&inputs.schema)?;
    let record: DenormalizedRecord = load_json(&inputs.record)?;
    let update: EntryUpdate = load_json(&inputs.update)?;
    let references: ReferenceMap = match &inputs.references {
        Some(path) => load_json(path)?,
        None => ReferenceMap::new(),
    };
    debug!(
        fields = schema.fields.len(),
        references = references.len(),
        "Loaded preview inputs"
    );

    let result = Reconciler::new(config).reconcile(&schema, &record, &update, &inputs.locale, &references);
    info!(
        entry_id = update.id(),
        applied = result.applied,
        messages = result.notifications.len(),
        "Reconciled update"
    );

    Ok(ReconcileOutput {
        record: result.record,
        messages: result.notifications,
        applied: result.applied,
    })
}
