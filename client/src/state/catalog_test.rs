use super::*;

fn book(id: &str, title: &str, author: &str) -> Book {
    Book {
        id: id.to_owned(),
        title: title.to_owned(),
        author: author.to_owned(),
        description: String::new(),
        image_url: String::new(),
    }
}

fn titles(books: &[Book]) -> Vec<&str> {
    books.iter().map(|b| b.title.as_str()).collect()
}

// =============================================================
// SortKey
// =============================================================

#[test]
fn title_sorts_both_directions() {
    let mut books = vec![book("1", "B", "x"), book("2", "A", "y")];
    sort_books(&mut books, SortKey::TitleAsc);
    assert_eq!(titles(&books), vec!["A", "B"]);
    sort_books(&mut books, SortKey::TitleDesc);
    assert_eq!(titles(&books), vec!["B", "A"]);
}

#[test]
fn author_sorts_both_directions() {
    let mut books = vec![book("1", "t1", "Tolkien"), book("2", "t2", "Austen"), book("3", "t3", "Herbert")];
    sort_books(&mut books, SortKey::AuthorAsc);
    assert_eq!(books.iter().map(|b| b.author.as_str()).collect::<Vec<_>>(), vec!["Austen", "Herbert", "Tolkien"]);
    sort_books(&mut books, SortKey::AuthorDesc);
    assert_eq!(books.iter().map(|b| b.author.as_str()).collect::<Vec<_>>(), vec!["Tolkien", "Herbert", "Austen"]);
}

#[test]
fn latest_sorts_by_descending_id() {
    let mut books = vec![
        book("65a000000000000000000001", "old", "a"),
        book("65a000000000000000000003", "new", "a"),
        book("65a000000000000000000002", "mid", "a"),
    ];
    sort_books(&mut books, SortKey::Latest);
    assert_eq!(titles(&books), vec!["new", "mid", "old"]);
}

#[test]
fn sort_comparison_is_lexicographic() {
    let mut books = vec![book("1", "apple", "a"), book("2", "Zebra", "a")];
    sort_books(&mut books, SortKey::TitleAsc);
    assert_eq!(titles(&books), vec!["Zebra", "apple"]);
}

#[test]
fn sort_key_parse_round_trips_and_defaults() {
    for key in SortKey::ALL {
        assert_eq!(SortKey::parse(key.as_str()), key);
    }
    assert_eq!(SortKey::parse("rating"), SortKey::Latest);
}

// =============================================================
// CatalogState loads
// =============================================================

#[test]
fn finish_load_sorts_by_current_key() {
    let mut state = CatalogState::default();
    let ticket = state.set_sort(SortKey::TitleAsc);
    assert!(state.finish_load(ticket.generation, Ok(vec![book("1", "B", "x"), book("2", "A", "y")])));
    assert!(!state.loading);
    assert_eq!(titles(&state.books), vec!["A", "B"]);
}

#[test]
fn stale_response_is_discarded() {
    let mut state = CatalogState::default();
    let first = state.set_filters(BookFilters::from_inputs("Tolkien", "", ""));
    let second = state.set_filters(BookFilters::default());
    assert!(second.generation > first.generation);
    assert_eq!(second.filters, BookFilters::default());

    assert!(state.finish_load(second.generation, Ok(vec![book("1", "All", "x")])));
    assert!(!state.finish_load(first.generation, Ok(vec![book("2", "Hobbit", "Tolkien")])));
    assert_eq!(titles(&state.books), vec!["All"]);
}

#[test]
fn stale_response_does_not_clear_loading() {
    let mut state = CatalogState::default();
    let first = state.begin_load();
    let _second = state.begin_load();
    assert!(!state.finish_load(first.generation, Ok(Vec::new())));
    assert!(state.loading);
}

#[test]
fn error_result_keeps_previous_books() {
    let mut state = CatalogState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket.generation, Ok(vec![book("1", "Kept", "x")]));

    let ticket = state.begin_load();
    assert_eq!(state.error, None);
    state.finish_load(ticket.generation, Err(ApiError::network("Error fetching books.")));
    assert_eq!(state.error.as_deref(), Some("Error fetching books."));
    assert_eq!(titles(&state.books), vec!["Kept"]);
}

#[test]
fn set_sort_resorts_current_page_immediately() {
    let mut state = CatalogState::default();
    let ticket = state.begin_load();
    state.finish_load(ticket.generation, Ok(vec![book("1", "A", "x"), book("2", "B", "y")]));
    let ticket = state.set_sort(SortKey::TitleDesc);
    assert_eq!(titles(&state.books), vec!["B", "A"]);
    assert_eq!(ticket.generation, state.generation);
}

#[test]
fn initial_loading_state_accepts_first_load() {
    let mut state = CatalogState::loading();
    assert!(state.loading);
    assert!(state.books.is_empty());
    assert_eq!(state.sort, SortKey::Latest);

    let ticket = state.begin_load();
    assert!(state.finish_load(ticket.generation, Ok(vec![book("1", "First", "x")])));
    assert!(!state.loading);
    assert_eq!(titles(&state.books), vec!["First"]);
}
