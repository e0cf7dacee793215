use livepreview_graphql::{PreviewSession, Reconciler, ReconcilerConfig, NoopReporter};
use livepreview_model::{
    ContentTypeSchema, DenormalizedRecord, EntryUpdate, FieldDefinition, ReferenceMap,
    ReferencedEntity,
};
use livepreview_types::{EditorMessage, EntryId};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::sync::Arc;

fn schema() -> ContentTypeSchema {
    ContentTypeSchema::with_id(
        "blogPost",
        vec![
            FieldDefinition::symbol("title"),
            FieldDefinition::link("author"),
            FieldDefinition::links("related"),
        ],
    )
}

fn record() -> DenormalizedRecord {
    DenormalizedRecord::from_value(json!({
        "sys": { "id": "e1" },
        "title": "old",
        "author": null,
        "relatedCollection": { "items": [] }
    }))
    .unwrap()
}

fn update_with_author(author_id: &str) -> EntryUpdate {
    EntryUpdate::new("e1")
        .with_field("title", "en-US", json!("Hello"))
        .with_field("author", "en-US", json!({ "sys": { "id": author_id } }))
}

#[test]
fn new_session_holds_record() {
    let session = PreviewSession::new(schema(), record(), "en-US");
    assert_eq!(session.record(), &record());
    assert_eq!(session.locale(), "en-US");
    assert!(session.pending().is_empty());
    assert!(session.references().is_empty());
    assert_eq!(session.schema().content_type_id(), Some("blogPost"));
}

#[test]
fn unknown_reference_converges_after_learning() {
    let mut session = PreviewSession::new(schema(), record(), "en-US");

    let messages = session.apply(&update_with_author("a1"));
    assert_eq!(messages, vec![EditorMessage::entity_not_known("a1")]);
    assert_eq!(session.pending(), &[EntryId::from("a1")]);
    assert_eq!(session.record().get("author"), Some(&Value::Null));
    assert_eq!(session.record().get_str("/title"), Some("Hello"));

    session.learn_entity(ReferencedEntity::new("a1", "author"));
    let messages = session.apply(&update_with_author("a1"));
    assert!(messages.is_empty());
    assert!(session.pending().is_empty());
    assert_eq!(session.record().get_str("/author/__typename"), Some("Author"));
}

#[test]
fn repeated_unknown_reference_is_requested_again() {
    let mut session = PreviewSession::new(schema(), record(), "en-US");
    assert_eq!(session.apply(&update_with_author("a1")).len(), 1);
    assert_eq!(session.apply(&update_with_author("a1")).len(), 1);
}

#[test]
fn deleted_reference_stays_null_after_learning() {
    let mut session = PreviewSession::new(schema(), record(), "en-US")
        .with_references([ReferencedEntity::new("a1", "author")].into_iter().collect());
    session.apply(&update_with_author("a1"));
    assert_eq!(session.record().get_str("/author/__typename"), Some("Author"));

    let removed = EntryUpdate::new("e1").with_field("author", "en-US", json!(null));
    assert!(session.apply(&removed).is_empty());
    assert_eq!(session.record().get("author"), Some(&Value::Null));
}

#[test]
fn update_for_other_entry_keeps_state() {
    let mut session = PreviewSession::new(schema(), record(), "en-US");
    session.apply(&update_with_author("a1"));
    let before = session.record().clone();

    let foreign = EntryUpdate::new("e2").with_field("title", "en-US", json!("nope"));
    assert!(session.apply(&foreign).is_empty());
    assert_eq!(session.record(), &before);
    assert_eq!(session.pending(), &[EntryId::from("a1")]);
}

#[test]
fn learn_entities_extends_context() {
    let mut session = PreviewSession::new(schema(), record(), "en-US");
    session.learn_entities([
        ReferencedEntity::new("a1", "author"),
        ReferencedEntity::new("p1", "blogPost"),
    ]);
    assert_eq!(session.references().len(), 2);

    let u = EntryUpdate::new("e1").with_field(
        "related",
        "en-US",
        json!([{ "sys": { "id": "p1" } }, { "sys": { "id": "a1" } }]),
    );
    session.apply(&u);
    let typenames: Vec<&str> = session
        .record()
        .pointer("/relatedCollection/items")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["__typename"].as_str().unwrap())
        .collect();
    assert_eq!(typenames, vec!["BlogPost", "Author"]);
}

#[test]
fn locale_switch_applies_to_next_update() {
    let mut session = PreviewSession::new(schema(), record(), "en-US");
    let u = EntryUpdate::new("e1")
        .with_field("title", "en-US", json!("Hello"))
        .with_field("title", "de-DE", json!("Hallo"));
    session.apply(&u);
    assert_eq!(session.record().get_str("/title"), Some("Hello"));

    session.set_locale("de-DE");
    session.apply(&u);
    assert_eq!(session.record().get_str("/title"), Some("Hallo"));
}

#[test]
fn custom_reconciler_is_used() {
    let config = ReconcilerConfig {
        collection_suffix: "List".into(),
        ..Default::default()
    };
    let record = DenormalizedRecord::from_value(json!({
        "sys": { "id": "e1" },
        "relatedList": { "items": [] }
    }))
    .unwrap();
    let reconciler = Reconciler::with_reporter(config, Arc::new(NoopReporter));
    let mut session = PreviewSession::with_reconciler(schema(), record, "en-US", reconciler)
        .with_references(ReferenceMap::from_iter([ReferencedEntity::new("p1", "blogPost")]));

    session.apply(&EntryUpdate::new("e1").with_field("related", "en-US", json!([{ "sys": { "id": "p1" } }])));
    let record = session.into_record();
    assert_eq!(record.get_str("/relatedList/items/0/__typename"), Some("BlogPost"));
}
