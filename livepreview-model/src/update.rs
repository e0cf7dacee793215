use livepreview_types::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A raw entry as sent by the entry editor on every change.
///
/// `fields` maps a field key to a map of locale code to value. Values are
/// kept as loose JSON so that a malformed field or locale map degrades to
/// "no value" rather than failing the whole update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryUpdate {
    pub sys: UpdateSys,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// The `sys` envelope of an [`EntryUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSys {
    pub id: String,
}

impl EntryUpdate {
    /// Creates an update with no fields.
    pub fn new(id: &str) -> Self {
        Self {
            sys: UpdateSys { id: id.into() },
            fields: Map::new(),
        }
    }

    /// Sets one localized value, creating the locale map if needed.
    pub fn with_field(mut self, key: &str, locale: &str, value: Value) -> Self {
        let locales = self
            .fields
            .entry(key)
            .or_insert_with(|| Value::Object(Map::new()));
        if !locales.is_object() {
            *locales = Value::Object(Map::new());
        }
        if let Value::Object(locales) = locales {
            locales.insert(locale.into(), value);
        }
        self
    }

    /// Parses an update from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// The value of `key` in `locale`.
    ///
    /// A missing field, a missing locale and an explicit JSON `null` are all
    /// reported as `None`.
    pub fn localized(&self, key: &str, locale: &str) -> Option<&Value> {
        self.fields
            .get(key)?
            .get(locale)
            .filter(|v| !v.is_null())
    }
}
