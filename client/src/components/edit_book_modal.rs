//! Modal for editing one of the admin's books.
//!
//! The draft is pre-filled from the selected book. On a successful save the
//! server's copy is handed back through `on_updated` and the modal closes.

use leptos::prelude::*;

use crate::components::book_form::BookFormFields;
use crate::net::books;
use crate::net::client::ApiClient;
use crate::net::types::{Book, BookInput};

#[component]
pub fn EditBookModal(book: Book, on_close: Callback<()>, on_updated: Callback<Book>) -> impl IntoView {
    let draft = RwSignal::new(BookInput::from_book(&book));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let book_id = book.id;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let id = book_id.clone();
        let input = draft.get_untracked();
        leptos::task::spawn_local(async move {
            match books::update_book(&ApiClient::browser(), &id, &input).await {
                Ok(updated) => {
                    on_updated.run(updated);
                    on_close.run(());
                }
                Err(e) => {
                    leptos::logging::warn!("update book {id} failed: {e}");
                    error.set(Some(e.message));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Book"</h2>
                <form class="book-form" on:submit=on_submit>
                    <BookFormFields draft=draft id_prefix="edit-"/>
                    <Show when=move || error.get().is_some()>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
