//! Catalog card for a single book on the user dashboard.

use leptos::prelude::*;

use crate::net::types::Book;
use crate::util::text::excerpt;

/// Characters of description shown on a catalog card.
pub const CARD_EXCERPT_CHARS: usize = 150;

#[component]
pub fn BookCard(book: Book) -> impl IntoView {
    let blurb = excerpt(&book.description, CARD_EXCERPT_CHARS);
    let alt = book.title.clone();
    view! {
        <div class="book-card">
            <img class="book-card__image" src=book.image_url alt=alt/>
            <div class="book-card__content">
                <h3 class="book-card__title">{book.title}</h3>
                <p class="book-card__author">"by " {book.author}</p>
                <p class="book-card__description">{blurb}</p>
            </div>
        </div>
    }
}
