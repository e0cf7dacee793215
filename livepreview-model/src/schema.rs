use livepreview_types::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A content type as delivered by the content-management side.
///
/// Only the parts the reconciler reads are modelled; any other keys in the
/// JSON are ignored on the way in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sys: Option<SchemaSys>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Field definitions in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

/// The `sys` envelope of a content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSys {
    pub id: String,
}

impl ContentTypeSchema {
    /// Creates an anonymous schema from its fields.
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self {
            sys: None,
            name: None,
            fields,
        }
    }

    /// Creates a schema carrying a content-type id.
    pub fn with_id(id: &str, fields: Vec<FieldDefinition>) -> Self {
        Self {
            sys: Some(SchemaSys { id: id.into() }),
            name: None,
            fields,
        }
    }

    /// Parses a content type from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the content-type id, if the schema carries one.
    pub fn content_type_id(&self) -> Option<&str> {
        self.sys.as_ref().map(|s| s.id.as_str())
    }

    /// Record keys this schema expects, in declaration order.
    pub fn field_keys(&self) -> Vec<&str> {
        self.fields.iter().map(FieldDefinition::key).collect()
    }
}

/// A single field of a content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name used by the query layer. Falls back to `name` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_name: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    /// Item definition. Only meaningful when the type is `Array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<FieldItems>,
    #[serde(default)]
    pub localized: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub omitted: bool,
}

/// Item definition of an `Array` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldItems {
    #[serde(rename = "type")]
    pub item_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

impl FieldDefinition {
    fn simple(name: &str, field_type: FieldType) -> Self {
        Self {
            id: None,
            api_name: None,
            name: name.into(),
            field_type,
            link_type: None,
            items: None,
            localized: false,
            disabled: false,
            omitted: false,
        }
    }

    /// Shorthand for a field of any non-array type.
    pub fn scalar(name: &str, field_type: FieldType) -> Self {
        Self::simple(name, field_type)
    }

    /// Shorthand for a short text field.
    pub fn symbol(name: &str) -> Self {
        Self::simple(name, FieldType::Symbol)
    }

    /// Shorthand for a rich-text field.
    pub fn rich_text(name: &str) -> Self {
        Self::simple(name, FieldType::RichText)
    }

    /// Shorthand for a single entry link.
    pub fn link(name: &str) -> Self {
        Self {
            link_type: Some("Entry".into()),
            ..Self::simple(name, FieldType::Link)
        }
    }

    /// Shorthand for an array of entry links.
    pub fn links(name: &str) -> Self {
        Self {
            items: Some(FieldItems {
                item_type: FieldType::Link,
                link_type: Some("Entry".into()),
            }),
            ..Self::simple(name, FieldType::Array)
        }
    }

    /// Shorthand for an array of non-link items.
    pub fn array(name: &str, item_type: FieldType) -> Self {
        Self {
            items: Some(FieldItems {
                item_type,
                link_type: None,
            }),
            ..Self::simple(name, FieldType::Array)
        }
    }

    /// Sets the name the query layer uses for this field.
    pub fn with_api_name(mut self, api_name: &str) -> Self {
        self.api_name = Some(api_name.into());
        self
    }

    /// Key used to look the field up in records and updates.
    pub fn key(&self) -> &str {
        self.api_name.as_deref().unwrap_or(&self.name)
    }
}

/// The management API type tag of a field.
///
/// Unrecognised tags are kept verbatim in [`FieldType::Other`] so that a
/// newer content type never fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Symbol,
    Text,
    Integer,
    Number,
    Date,
    Boolean,
    Location,
    Object,
    RichText,
    Link,
    Array,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Symbol => "Symbol",
            Self::Text => "Text",
            Self::Integer => "Integer",
            Self::Number => "Number",
            Self::Date => "Date",
            Self::Boolean => "Boolean",
            Self::Location => "Location",
            Self::Object => "Object",
            Self::RichText => "RichText",
            Self::Link => "Link",
            Self::Array => "Array",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Symbol" => Self::Symbol,
            "Text" => Self::Text,
            "Integer" => Self::Integer,
            "Number" => Self::Number,
            "Date" => Self::Date,
            "Boolean" => Self::Boolean,
            "Location" => Self::Location,
            "Object" => Self::Object,
            "RichText" => Self::RichText,
            "Link" => Self::Link,
            "Array" => Self::Array,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
