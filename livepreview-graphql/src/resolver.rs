//! Reference resolution.
//!
//! The editor sends links as bare pointers (`{ "sys": { "id": ... } }`),
//! while the record expects typed objects carrying `__typename`. A pointer
//! can only be typed when the reference context knows the target's content
//! type. When it does not, the reference is hidden for this pass and the
//! editor is asked for the entity; the next update will resolve it.

use crate::typename_for;
use livepreview_model::ReferenceContext;
use livepreview_types::{EditorMessage, EntryId};
use serde_json::Value;
use tracing::{debug, warn};

const TYPENAME_KEY: &str = "__typename";

/// Outcome of resolving one raw link.
#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceResolution {
    /// The link was removed.
    Deleted,
    /// The link is typed and can be stored on the record.
    Resolved(Value),
    /// The target's content type is not known yet.
    Unknown { entity_id: EntryId },
    /// The value is neither null nor a link with a `sys.id`.
    Malformed,
}

impl ReferenceResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The `ENTITY_NOT_KNOWN` request for an unknown target.
    pub fn notification(&self) -> Option<EditorMessage> {
        match self {
            Self::Unknown { entity_id } => Some(EditorMessage::entity_not_known(entity_id.clone())),
            _ => None,
        }
    }

    /// The value to store on the record: the typed object, or `null`.
    pub fn into_value(self) -> Value {
        match self {
            Self::Resolved(value) => value,
            Self::Deleted | Self::Unknown { .. } | Self::Malformed => Value::Null,
        }
    }
}

/// Resolves a raw link against the reference context.
pub fn resolve_reference(raw: &Value, ctx: &dyn ReferenceContext) -> ReferenceResolution {
    if raw.is_null() {
        return ReferenceResolution::Deleted;
    }

    // Already shaped for the query layer.
    if raw.get(TYPENAME_KEY).is_some_and(is_truthy) {
        return ReferenceResolution::Resolved(raw.clone());
    }

    let Some(link) = raw.as_object() else {
        warn!(value = %raw, "Dropping reference that is not an object");
        return ReferenceResolution::Malformed;
    };
    let Some(entity_id) = link.get("sys").and_then(|sys| sys.get("id")).and_then(Value::as_str)
    else {
        warn!(value = %raw, "Dropping reference without sys.id");
        return ReferenceResolution::Malformed;
    };

    let typename = ctx
        .content_type_of(entity_id)
        .map(typename_for)
        .filter(|t| !t.is_empty());

    match typename {
        Some(typename) => {
            let mut typed = link.clone();
            typed.insert(TYPENAME_KEY.to_string(), Value::String(typename));
            ReferenceResolution::Resolved(Value::Object(typed))
        }
        None => {
            debug!(entity_id, "Reference target type unknown, requesting it from the editor");
            ReferenceResolution::Unknown {
                entity_id: EntryId::from(entity_id),
            }
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn is_falsy(value: &Value) -> bool {
    !is_truthy(value)
}
