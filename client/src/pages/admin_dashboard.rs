//! Admin dashboard: add-book form plus the admin's own books.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind the admin guard. The list loads once on mount; create,
//! delete and edit each apply the server's response to the local list via
//! `AdminBooksState`. Errors from any action show above the list.

use leptos::prelude::*;

use crate::components::book_form::BookFormFields;
use crate::components::edit_book_modal::EditBookModal;
use crate::net::books;
use crate::net::client::ApiClient;
use crate::net::types::{Book, BookInput};
use crate::state::admin_books::AdminBooksState;
use crate::util::text::excerpt;

/// Characters of description shown in the admin list.
const LIST_EXCERPT_CHARS: usize = 100;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let state = RwSignal::new(AdminBooksState { loading: true, ..AdminBooksState::default() });
    let draft = RwSignal::new(BookInput::default());

    // Load own books once the page is live in the browser.
    Effect::new(move || {
        state.update(AdminBooksState::begin_load);
        leptos::task::spawn_local(async move {
            let result = books::get_my_books(&ApiClient::browser()).await;
            state.update(|s| s.finish_load(result));
        });
    });

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let input = draft.get_untracked();
        leptos::task::spawn_local(async move {
            match books::add_book(&ApiClient::browser(), &input).await {
                Ok(book) => {
                    state.update(|s| s.prepend(book));
                    draft.set(BookInput::default());
                }
                Err(e) => state.update(|s| s.set_error(&e)),
            }
        });
    };

    let on_delete = Callback::new(move |id: String| {
        leptos::task::spawn_local(async move {
            match books::delete_book(&ApiClient::browser(), &id).await {
                Ok(_) => state.update(|s| s.remove(&id)),
                Err(e) => state.update(|s| s.set_error(&e)),
            }
        });
    });
    let on_edit = Callback::new(move |book: Book| state.update(|s| s.open_editor(book)));
    let on_close = Callback::new(move |()| state.update(AdminBooksState::close_editor));
    let on_updated = Callback::new(move |book: Book| {
        state.update(|s| {
            s.replace(book);
        });
    });

    view! {
        <div class="admin-dashboard">
            <section class="admin-dashboard__form">
                <h2>"Add a New Book"</h2>
                <form class="book-form" on:submit=on_add>
                    <BookFormFields draft=draft id_prefix=""/>
                    <button class="btn btn--success" type="submit">
                        "Add Book"
                    </button>
                </form>
            </section>

            <section class="admin-dashboard__list">
                <h2>"My Added Books"</h2>
                <Show when=move || state.with(|s| s.loading)>
                    <p class="admin-dashboard__status">"Loading..."</p>
                </Show>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="form-error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show when=move || state.with(|s| !s.loading && s.error.is_none() && s.items.is_empty())>
                    <p class="admin-dashboard__empty">"You haven't added any books yet."</p>
                </Show>
                <div class="admin-dashboard__items">
                    {move || {
                        state
                            .get()
                            .items
                            .into_iter()
                            .map(|book| view! { <AdminBookRow book=book on_edit=on_edit on_delete=on_delete/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </section>

            {move || {
                state
                    .with(|s| s.editing.clone())
                    .map(|book| view! { <EditBookModal book=book on_close=on_close on_updated=on_updated/> })
            }}
        </div>
    }
}

#[component]
fn AdminBookRow(book: Book, on_edit: Callback<Book>, on_delete: Callback<String>) -> impl IntoView {
    let blurb = excerpt(&book.description, LIST_EXCERPT_CHARS);
    let id = book.id.clone();
    let alt = book.title.clone();
    let title = book.title.clone();
    let author = book.author.clone();
    let image_url = book.image_url.clone();

    view! {
        <div class="admin-book">
            <img class="admin-book__image" src=image_url alt=alt/>
            <div class="admin-book__info">
                <h3>{title}</h3>
                <p class="admin-book__author">"by " {author}</p>
                <p class="admin-book__description">{blurb}</p>
            </div>
            <div class="admin-book__actions">
                <button class="btn btn--primary" on:click=move |_| on_edit.run(book.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
