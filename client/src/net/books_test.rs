use super::*;
use crate::util::storage::MemoryStorage;

fn client() -> ApiClient<MemoryStorage> {
    ApiClient::new("http://localhost:5000/api", MemoryStorage::new())
}

fn input() -> BookInput {
    BookInput {
        title: "Dune".to_owned(),
        author: "Frank Herbert".to_owned(),
        description: "Spice.".to_owned(),
        image_url: "https://img/dune.jpg".to_owned(),
    }
}

#[test]
fn all_books_with_empty_filters_sends_no_query() {
    let req = all_books_request(&client(), &BookFilters::default());
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(req.url, "http://localhost:5000/api/books");
    assert!(req.query.is_empty());

    let blank = BookFilters::from_inputs("", " ", "");
    assert!(all_books_request(&client(), &blank).query.is_empty());
}

#[test]
fn all_books_with_author_sends_only_author() {
    let filters = BookFilters::from_inputs("Tolkien", "", "");
    let req = all_books_request(&client(), &filters);
    assert_eq!(req.query, vec![("author", "Tolkien".to_owned())]);
}

#[test]
fn add_book_posts_camel_case_body() {
    let req = add_book_request(&client(), &input()).unwrap();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "http://localhost:5000/api/admin/books");
    assert_eq!(
        req.body,
        Some(serde_json::json!({
            "title": "Dune",
            "author": "Frank Herbert",
            "description": "Spice.",
            "imageUrl": "https://img/dune.jpg",
        }))
    );
}

#[test]
fn update_book_targets_id() {
    let req = update_book_request(&client(), "65f0c1", &input()).unwrap();
    assert_eq!(req.method, HttpMethod::Put);
    assert_eq!(req.url, "http://localhost:5000/api/admin/books/65f0c1");
}

#[test]
fn admin_book_path_formats_id() {
    assert_eq!(admin_book_path("x"), "/admin/books/x");
}

#[test]
fn parse_delete_ack_is_lenient() {
    assert_eq!(parse_delete_ack(r#"{"message":"Book removed"}"#).message.as_deref(), Some("Book removed"));
    assert_eq!(parse_delete_ack(""), DeleteAck::default());
    assert_eq!(parse_delete_ack("OK"), DeleteAck::default());
}
