use livepreview_graphql::{resolve_reference, ReferenceResolution};
use livepreview_model::{ReferenceMap, ReferencedEntity};
use livepreview_types::{EditorMessage, EntryId};
use pretty_assertions::assert_eq;
use serde_json::json;

fn context() -> ReferenceMap {
    [
        ReferencedEntity::new("r1", "author"),
        ReferencedEntity::untyped("r4"),
        ReferencedEntity::new("r5", ""),
    ]
    .into_iter()
    .collect()
}

#[test]
fn null_is_deleted() {
    let r = resolve_reference(&json!(null), &context());
    assert_eq!(r, ReferenceResolution::Deleted);
    assert_eq!(r.notification(), None);
    assert_eq!(r.into_value(), json!(null));
}

#[test]
fn typed_reference_passes_through_unchanged() {
    let raw = json!({ "sys": { "id": "zz" }, "__typename": "Tag", "name": "rust" });
    let r = resolve_reference(&raw, &ReferenceMap::new());
    assert_eq!(r, ReferenceResolution::Resolved(raw.clone()));
    assert_eq!(r.into_value(), raw);
}

#[test]
fn empty_typename_is_not_trusted() {
    let raw = json!({ "sys": { "id": "r1" }, "__typename": "" });
    let r = resolve_reference(&raw, &context());
    assert_eq!(r.into_value()["__typename"], "Author");
}

#[test]
fn known_entity_gets_typename() {
    let r = resolve_reference(&json!({ "sys": { "id": "r1" } }), &context());
    assert!(r.is_resolved());
    assert_eq!(r.into_value(), json!({ "sys": { "id": "r1" }, "__typename": "Author" }));
}

#[test]
fn link_fields_are_preserved() {
    let raw = json!({ "sys": { "id": "r1", "type": "Link", "linkType": "Entry" } });
    let value = resolve_reference(&raw, &context()).into_value();
    assert_eq!(
        value,
        json!({ "sys": { "id": "r1", "type": "Link", "linkType": "Entry" }, "__typename": "Author" })
    );
}

#[test]
fn unknown_entity_requests_it() {
    let r = resolve_reference(&json!({ "sys": { "id": "r2" } }), &context());
    assert_eq!(
        r,
        ReferenceResolution::Unknown {
            entity_id: EntryId::from("r2")
        }
    );
    assert_eq!(r.notification(), Some(EditorMessage::entity_not_known("r2")));
    assert_eq!(r.into_value(), json!(null));
}

#[test]
fn entity_without_content_type_is_unknown() {
    let r = resolve_reference(&json!({ "sys": { "id": "r4" } }), &context());
    assert_eq!(r.notification(), Some(EditorMessage::entity_not_known("r4")));
}

#[test]
fn entity_with_empty_content_type_is_unknown() {
    let r = resolve_reference(&json!({ "sys": { "id": "r5" } }), &context());
    assert!(matches!(r, ReferenceResolution::Unknown { .. }));
}

#[test]
fn link_without_id_is_malformed() {
    for raw in [json!({ "sys": {} }), json!({}), json!("r1"), json!(42), json!({ "sys": { "id": 1 } })] {
        let r = resolve_reference(&raw, &context());
        assert_eq!(r, ReferenceResolution::Malformed, "{raw}");
        assert_eq!(r.notification(), None);
        assert_eq!(r.into_value(), json!(null));
    }
}

#[test]
fn resolution_converges_once_context_is_populated() {
    let raw = json!({ "sys": { "id": "r2" } });
    let mut ctx = ReferenceMap::new();
    assert!(!resolve_reference(&raw, &ctx).is_resolved());

    ctx.insert(ReferencedEntity::new("r2", "category"));
    assert_eq!(
        resolve_reference(&raw, &ctx).into_value(),
        json!({ "sys": { "id": "r2" }, "__typename": "Category" })
    );
}
