use livepreview_graphql::typename_for;

#[test]
fn capitalizes_first_character() {
    assert_eq!(typename_for("author"), "Author");
}

#[test]
fn keeps_camel_case_tail() {
    assert_eq!(typename_for("blogPost"), "BlogPost");
}

#[test]
fn already_capitalized_is_unchanged() {
    assert_eq!(typename_for("Author"), "Author");
}

#[test]
fn does_not_touch_separators() {
    assert_eq!(typename_for("landing_page"), "Landing_page");
    assert_eq!(typename_for("2col"), "2col");
}

#[test]
fn empty_stays_empty() {
    assert_eq!(typename_for(""), "");
}

#[test]
fn non_ascii_first_character() {
    assert_eq!(typename_for("éditorial"), "Éditorial");
}
