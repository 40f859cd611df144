//! Admin dashboard list state.
//!
//! DESIGN
//! ======
//! The visible list only ever changes by applying a server response: a fresh
//! load, a created book prepended, a deleted id removed, or an updated book
//! replacing its id in place. There is no optimistic merge.

#[cfg(test)]
#[path = "admin_books_test.rs"]
mod admin_books_test;

use crate::net::error::ApiError;
use crate::net::types::Book;

#[derive(Clone, Debug, Default)]
pub struct AdminBooksState {
    pub items: Vec<Book>,
    pub loading: bool,
    pub error: Option<String>,
    /// Book currently open in the edit modal.
    pub editing: Option<Book>,
}

impl AdminBooksState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the result of `GET /admin/books`.
    pub fn finish_load(&mut self, result: Result<Vec<Book>, ApiError>) {
        self.loading = false;
        match result {
            Ok(books) => self.items = books,
            Err(e) => self.error = Some(e.message),
        }
    }

    /// Put a newly created book at the head of the list.
    pub fn prepend(&mut self, book: Book) {
        self.items.retain(|b| b.id != book.id);
        self.items.insert(0, book);
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|b| b.id != id);
    }

    /// Swap in the server's copy of an updated book, keeping its position.
    /// Returns `false` if the id is not in the list.
    pub fn replace(&mut self, book: Book) -> bool {
        match self.items.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        }
    }

    pub fn open_editor(&mut self, book: Book) {
        self.editing = Some(book);
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    pub fn set_error(&mut self, error: &ApiError) {
        self.error = Some(error.message.clone());
    }
}
