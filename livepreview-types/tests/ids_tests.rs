use livepreview_types::{EntryId, Error};
use proptest::prelude::*;
use std::collections::HashSet;
use std::str::FromStr;

// ── EntryId ───────────────────────────────────────────────────────

#[test]
fn entry_id_display_matches_input() {
    let id = EntryId::new("5KsDBWseXY6QegucYAoacS");
    assert_eq!(id.to_string(), "5KsDBWseXY6QegucYAoacS");
    assert_eq!(id.as_str(), "5KsDBWseXY6QegucYAoacS");
}

#[test]
fn entry_id_parse_accepts_plain_id() {
    let id = EntryId::parse("author-1").unwrap();
    assert_eq!(id, EntryId::from("author-1"));
}

#[test]
fn entry_id_parse_rejects_empty() {
    assert!(matches!(EntryId::parse(""), Err(Error::InvalidId(_))));
}

#[test]
fn entry_id_parse_rejects_whitespace() {
    assert!(EntryId::parse("   ").is_err());
}

#[test]
fn entry_id_from_str_uses_parse() {
    assert!(EntryId::from_str("").is_err());
    let id: EntryId = "e1".parse().unwrap();
    assert_eq!(id.into_inner(), "e1");
}

#[test]
fn entry_id_from_string() {
    let id = EntryId::from(String::from("r1"));
    assert_eq!(id.as_ref(), "r1");
}

#[test]
fn entry_id_hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(EntryId::from("r1"));
    set.insert(EntryId::from("r1"));
    set.insert(EntryId::from("r2"));
    assert_eq!(set.len(), 2);
    assert!(set.contains("r1"));
}

#[test]
fn entry_id_serializes_as_bare_string() {
    let id = EntryId::from("r1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"r1\"");
    let parsed: EntryId = serde_json::from_str("\"r1\"").unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn entry_id_ordering_is_lexicographic() {
    let mut ids = vec![EntryId::from("b"), EntryId::from("a"), EntryId::from("c")];
    ids.sort();
    assert_eq!(ids, vec![EntryId::from("a"), EntryId::from("b"), EntryId::from("c")]);
}

proptest! {
    #[test]
    fn non_blank_ids_always_parse(s in "[a-zA-Z0-9_-]{1,32}") {
        let id = EntryId::parse(&s).unwrap();
        prop_assert_eq!(id.as_str(), s.as_str());
    }
}
