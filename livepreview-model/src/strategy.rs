//! Routing of schema fields to update strategies.

use crate::{FieldDefinition, FieldType};

/// How the reconciler updates a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStrategy {
    /// Replace the value with the localized update value.
    Scalar,
    /// Replace the `json` payload inside the rich-text container.
    RichText,
    /// Resolve a single link into a typed reference.
    SingleReference,
    /// Resolve an array of links into `<key>Collection.items`.
    ReferenceCollection,
    /// An array whose items are not links. Nothing updates these yet.
    Unhandled { item_type: Option<FieldType> },
}

impl FieldStrategy {
    /// Whether this strategy writes anything to the record.
    pub fn is_handled(&self) -> bool {
        !matches!(self, Self::Unhandled { .. })
    }
}

impl FieldDefinition {
    /// Classifies this field.
    pub fn strategy(&self) -> FieldStrategy {
        match &self.field_type {
            FieldType::RichText => FieldStrategy::RichText,
            FieldType::Link => FieldStrategy::SingleReference,
            FieldType::Array => match self.items.as_ref().map(|i| &i.item_type) {
                Some(FieldType::Link) => FieldStrategy::ReferenceCollection,
                item_type => FieldStrategy::Unhandled {
                    item_type: item_type.cloned(),
                },
            },
            FieldType::Symbol
            | FieldType::Text
            | FieldType::Integer
            | FieldType::Number
            | FieldType::Date
            | FieldType::Boolean
            | FieldType::Location
            | FieldType::Object
            | FieldType::Other(_) => FieldStrategy::Scalar,
        }
    }
}
