/// Derives the GraphQL type name of a content type.
///
/// Upper-cases the first character and keeps the rest as is, so `author`
/// becomes `Author` and `blogPost` becomes `BlogPost`. This assumes the
/// content graph names its types after content-type ids; a type renamed on
/// the graph side will not be found this way.
pub fn typename_for(content_type_id: &str) -> String {
    let mut chars = content_type_id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
