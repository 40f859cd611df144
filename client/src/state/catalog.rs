//! User dashboard catalog state: filters, sort key and the fetched page.
//!
//! DESIGN
//! ======
//! Any change to filters or sort starts a new load and bumps `generation`.
//! A response is applied only if it carries the current generation, so a slow
//! earlier fetch can never overwrite a newer one. Sorting happens in memory
//! over whatever the backend returned; there is no pagination.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::cmp::Ordering;

use crate::net::error::ApiError;
use crate::net::types::{Book, BookFilters};

/// Client-side ordering for the catalog grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Newest first, using descending id as the proxy.
    #[default]
    Latest,
    TitleAsc,
    TitleDesc,
    AuthorAsc,
    AuthorDesc,
}

impl SortKey {
    pub const ALL: [Self; 5] = [Self::Latest, Self::TitleAsc, Self::TitleDesc, Self::AuthorAsc, Self::AuthorDesc];

    /// Stable value used in the sort `<select>`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::AuthorAsc => "author-asc",
            Self::AuthorDesc => "author-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Latest => "Latest",
            Self::TitleAsc => "Title (A-Z)",
            Self::TitleDesc => "Title (Z-A)",
            Self::AuthorAsc => "Author (A-Z)",
            Self::AuthorDesc => "Author (Z-A)",
        }
    }

    /// Parse a `<select>` value; unknown values fall back to `Latest`.
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|k| k.as_str() == raw).unwrap_or_default()
    }

    fn compare(self, a: &Book, b: &Book) -> Ordering {
        match self {
            Self::Latest => b.id.cmp(&a.id),
            Self::TitleAsc => a.title.cmp(&b.title),
            Self::TitleDesc => b.title.cmp(&a.title),
            Self::AuthorAsc => a.author.cmp(&b.author),
            Self::AuthorDesc => b.author.cmp(&a.author),
        }
    }
}

/// Stable in-place sort by `key`.
pub fn sort_books(books: &mut [Book], key: SortKey) {
    books.sort_by(|a, b| key.compare(a, b));
}

/// Handle for one in-flight catalog load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub filters: BookFilters,
}

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    /// Fetched books, kept sorted by `sort`.
    pub books: Vec<Book>,
    pub filters: BookFilters,
    pub sort: SortKey,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl CatalogState {
    /// Initial state for a page whose first load is about to start.
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Start a load for the current filters, superseding any in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        LoadTicket { generation: self.generation, filters: self.filters.clone() }
    }

    /// Apply a load result. Returns `false` (and changes nothing) if a newer
    /// load has started since `generation` was issued.
    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<Book>, ApiError>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        match result {
            Ok(mut books) => {
                sort_books(&mut books, self.sort);
                self.books = books;
            }
            Err(e) => self.error = Some(e.message),
        }
        true
    }

    pub fn set_filters(&mut self, filters: BookFilters) -> LoadTicket {
        self.filters = filters;
        self.begin_load()
    }

    /// Change the sort key. The current page is re-sorted immediately and a
    /// fresh load is started.
    pub fn set_sort(&mut self, sort: SortKey) -> LoadTicket {
        self.sort = sort;
        sort_books(&mut self.books, sort);
        self.begin_load()
    }
}
