//! Outbound messages sent back to the entry editor.
//!
//! The reconciler never performs I/O. When it meets a reference whose
//! content type it cannot determine, it produces an [`EditorMessage`] and
//! leaves delivery to the caller. The wire shape is flat: the `action` tag
//! sits next to the payload fields.

use crate::{EntryId, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The action tag of an [`EditorMessage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageAction {
    /// The preview met a reference to an entity it has no type info for.
    EntityNotKnown,
}

impl MessageAction {
    /// Returns the wire value of this action.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EntityNotKnown => "ENTITY_NOT_KNOWN",
        }
    }
}

impl fmt::Display for MessageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message for the entry editor.
///
/// Serializes as `{"action": "ENTITY_NOT_KNOWN", "referenceEntityId": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum EditorMessage {
    /// Asks the editor to supply content-type metadata for an entity so a
    /// later reconciliation pass can type the reference.
    #[serde(rename = "ENTITY_NOT_KNOWN")]
    EntityNotKnown {
        #[serde(rename = "referenceEntityId")]
        reference_entity_id: EntryId,
    },
}

impl EditorMessage {
    /// Creates an `ENTITY_NOT_KNOWN` message for the given entity.
    #[must_use]
    pub fn entity_not_known(reference_entity_id: impl Into<EntryId>) -> Self {
        Self::EntityNotKnown {
            reference_entity_id: reference_entity_id.into(),
        }
    }

    /// Returns the action tag of this message.
    #[must_use]
    pub const fn action(&self) -> MessageAction {
        match self {
            Self::EntityNotKnown { .. } => MessageAction::EntityNotKnown,
        }
    }

    /// Returns the entity this message is about.
    #[must_use]
    pub fn reference_entity_id(&self) -> &EntryId {
        match self {
            Self::EntityNotKnown { reference_entity_id } => reference_entity_id,
        }
    }

    /// Serializes the message to its JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a message from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
