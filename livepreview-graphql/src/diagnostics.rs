//! Schema drift reporting.
//!
//! The fetched record only carries the fields its query selected. When the
//! content type declares a field the record lacks, the reconciler cannot
//! update it; the reporter makes that visible without affecting the result.

use tracing::warn;

/// Receives the schema fields a record is missing.
pub trait MissingFieldsReporter: Send + Sync {
    /// Called once per reconciliation when `missing` is non-empty.
    fn report_missing(&self, content_type_id: Option<&str>, missing: &[String]);
}

/// Logs missing fields at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl MissingFieldsReporter for TracingReporter {
    fn report_missing(&self, content_type_id: Option<&str>, missing: &[String]) {
        warn!(
            content_type = content_type_id.unwrap_or("<unknown>"),
            missing = ?missing,
            "Record is missing fields declared by the content type; they will not be updated"
        );
    }
}

/// Discards reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl MissingFieldsReporter for NoopReporter {
    fn report_missing(&self, _content_type_id: Option<&str>, _missing: &[String]) {}
}
