//! Reference-resolution context.
//!
//! The editor side keeps a growing set of entities it has told the preview
//! about. The reconciler only ever reads it, through [`ReferenceContext`],
//! to learn the content type of a raw link.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Minimal view of an entity known to the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencedEntity {
    pub sys: ReferencedSys,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencedSys {
    pub id: String,
    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentTypeLink>,
}

/// `{ "sys": { "id": "<content type id>" } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeLink {
    pub sys: LinkSys,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSys {
    pub id: String,
}

impl ReferencedEntity {
    pub fn new(id: &str, content_type_id: &str) -> Self {
        Self {
            sys: ReferencedSys {
                id: id.into(),
                content_type: Some(ContentTypeLink {
                    sys: LinkSys {
                        id: content_type_id.into(),
                    },
                }),
            },
        }
    }

    /// An entity the editor knows about but sent without type info.
    pub fn untyped(id: &str) -> Self {
        Self {
            sys: ReferencedSys {
                id: id.into(),
                content_type: None,
            },
        }
    }

    pub fn id(&self) -> &str {
        &self.sys.id
    }

    pub fn content_type_id(&self) -> Option<&str> {
        self.sys.content_type.as_ref().map(|ct| ct.sys.id.as_str())
    }
}

/// Read-only lookup of entities by id.
///
/// Implemented by [`ReferenceMap`] and the standard maps. Callers own how the
/// context is populated and when entries are evicted.
pub trait ReferenceContext {
    fn lookup(&self, entity_id: &str) -> Option<&ReferencedEntity>;

    /// Content-type id of an entity, when both the entity and its type are known.
    fn content_type_of(&self, entity_id: &str) -> Option<&str> {
        self.lookup(entity_id)?.content_type_id()
    }
}

impl ReferenceContext for HashMap<String, ReferencedEntity> {
    fn lookup(&self, entity_id: &str) -> Option<&ReferencedEntity> {
        self.get(entity_id)
    }
}

impl ReferenceContext for BTreeMap<String, ReferencedEntity> {
    fn lookup(&self, entity_id: &str) -> Option<&ReferencedEntity> {
        self.get(entity_id)
    }
}

impl<T: ReferenceContext + ?Sized> ReferenceContext for &T {
    fn lookup(&self, entity_id: &str) -> Option<&ReferencedEntity> {
        (**self).lookup(entity_id)
    }
}

/// Owned reference context keyed by entity id.
///
/// Deserializes from either a list of entities or an id-keyed object;
/// always serializes as a list sorted by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ReferenceMapRepr", into = "Vec<ReferencedEntity>")]
pub struct ReferenceMap {
    entities: HashMap<String, ReferencedEntity>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ReferenceMapRepr {
    List(Vec<ReferencedEntity>),
    Map(HashMap<String, ReferencedEntity>),
}

impl From<ReferenceMapRepr> for ReferenceMap {
    fn from(repr: ReferenceMapRepr) -> Self {
        match repr {
            ReferenceMapRepr::List(list) => list.into_iter().collect(),
            ReferenceMapRepr::Map(entities) => Self { entities },
        }
    }
}

impl From<ReferenceMap> for Vec<ReferencedEntity> {
    fn from(map: ReferenceMap) -> Self {
        let mut list: Vec<_> = map.entities.into_values().collect();
        list.sort_by(|a, b| a.sys.id.cmp(&b.sys.id));
        list
    }
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entity, keyed by its `sys.id`.
    pub fn insert(&mut self, entity: ReferencedEntity) -> Option<ReferencedEntity> {
        self.entities.insert(entity.sys.id.clone(), entity)
    }

    pub fn get(&self, entity_id: &str) -> Option<&ReferencedEntity> {
        self.entities.get(entity_id)
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.entities.contains_key(entity_id)
    }

    pub fn remove(&mut self, entity_id: &str) -> Option<ReferencedEntity> {
        self.entities.remove(entity_id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferencedEntity> {
        self.entities.values()
    }
}

impl ReferenceContext for ReferenceMap {
    fn lookup(&self, entity_id: &str) -> Option<&ReferencedEntity> {
        self.entities.get(entity_id)
    }
}

impl Extend<ReferencedEntity> for ReferenceMap {
    fn extend<I: IntoIterator<Item = ReferencedEntity>>(&mut self, iter: I) {
        for entity in iter {
            self.insert(entity);
        }
    }
}

impl FromIterator<ReferencedEntity> for ReferenceMap {
    fn from_iter<I: IntoIterator<Item = ReferencedEntity>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}
