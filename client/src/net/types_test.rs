use super::*;

fn make_book(id: &str) -> Book {
    Book {
        id: id.to_owned(),
        title: "The Hobbit".to_owned(),
        author: "Tolkien".to_owned(),
        description: "There and back again.".to_owned(),
        image_url: "https://img.example.com/hobbit.jpg".to_owned(),
    }
}

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
}

#[test]
fn unknown_role_decodes_as_user() {
    let role: Role = serde_json::from_str("\"moderator\"").unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn known_roles_decode_and_default_is_user() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
    assert_eq!(Role::default(), Role::User);
}

#[test]
fn role_dashboard_paths() {
    assert_eq!(Role::Admin.dashboard_path(), "/admin/dashboard");
    assert_eq!(Role::User.dashboard_path(), "/dashboard");
}

// =============================================================
// Session / Book decoding
// =============================================================

#[test]
fn session_accepts_underscore_id() {
    let raw = r#"{"_id":"u1","username":"ann","role":"admin","token":"t0k"}"#;
    let session: Session = serde_json::from_str(raw).unwrap();
    assert_eq!(session.id, "u1");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.token, "t0k");
}

#[test]
fn book_decodes_camel_case_and_defaults() {
    let raw = r#"{"_id":"b1","title":"Dune","author":"Herbert"}"#;
    let book: Book = serde_json::from_str(raw).unwrap();
    assert_eq!(book.id, "b1");
    assert_eq!(book.description, "");
    assert_eq!(book.image_url, "");

    let raw = r#"{"id":"b2","title":"Emma","author":"Austen","description":"d","imageUrl":"u"}"#;
    let book: Book = serde_json::from_str(raw).unwrap();
    assert_eq!(book.image_url, "u");
}

#[test]
fn book_input_serializes_image_url_camel_case() {
    let input = BookInput::from_book(&make_book("b1"));
    let value = serde_json::to_value(&input).unwrap();
    assert_eq!(value["imageUrl"], "https://img.example.com/hobbit.jpg");
    assert_eq!(value["title"], "The Hobbit");
    assert!(value.get("id").is_none());
}

// =============================================================
// BookFilters
// =============================================================

#[test]
fn filters_from_blank_inputs_are_empty() {
    let filters = BookFilters::from_inputs("", "  ", "");
    assert_eq!(filters, BookFilters::default());
    assert!(filters.query_pairs().is_empty());
}

#[test]
fn filters_keep_only_author() {
    let filters = BookFilters::from_inputs("Tolkien", "", "");
    assert_eq!(filters, BookFilters { author: Some("Tolkien".to_owned()), title: None, description: None });
    assert_eq!(filters.query_pairs(), vec![("author", "Tolkien".to_owned())]);
}

#[test]
fn filters_trim_values_and_keep_order() {
    let filters = BookFilters::from_inputs(" Le Guin ", "", " wizard ");
    assert_eq!(
        filters.query_pairs(),
        vec![("author", "Le Guin".to_owned()), ("description", "wizard".to_owned())]
    );
}

#[test]
fn delete_ack_message_is_optional() {
    let ack: DeleteAck = serde_json::from_str(r#"{"message":"Book removed"}"#).unwrap();
    assert_eq!(ack.message.as_deref(), Some("Book removed"));
    let ack: DeleteAck = serde_json::from_str("{}").unwrap();
    assert_eq!(ack.message, None);
}
