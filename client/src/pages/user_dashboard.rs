//! User dashboard: filterable, sortable catalog of every book.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every filter or sort change starts an explicit load through
//! `CatalogState`, which stamps it with a generation. Responses from older
//! generations are dropped, so out-of-order replies never overwrite the grid.

use leptos::prelude::*;

use crate::components::book_card::BookCard;
use crate::components::filter_sidebar::FilterSidebar;
use crate::net::books;
use crate::net::client::ApiClient;
use crate::net::types::BookFilters;
use crate::state::catalog::{CatalogState, LoadTicket, SortKey};

fn spawn_catalog_load(catalog: RwSignal<CatalogState>, ticket: LoadTicket) {
    leptos::task::spawn_local(async move {
        let result = books::get_all_books(&ApiClient::browser(), &ticket.filters).await;
        catalog.update(|c| {
            if !c.finish_load(ticket.generation, result) {
                leptos::logging::log!("dropped stale catalog response (generation {})", ticket.generation);
            }
        });
    });
}

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::loading());

    Effect::new(move || {
        if let Some(ticket) = catalog.try_update(CatalogState::begin_load) {
            spawn_catalog_load(catalog, ticket);
        }
    });

    let on_filters = Callback::new(move |filters: BookFilters| {
        if let Some(ticket) = catalog.try_update(|c| c.set_filters(filters)) {
            spawn_catalog_load(catalog, ticket);
        }
    });

    let on_sort = move |ev: leptos::ev::Event| {
        let key = SortKey::parse(&event_target_value(&ev));
        if let Some(ticket) = catalog.try_update(|c| c.set_sort(key)) {
            spawn_catalog_load(catalog, ticket);
        }
    };

    view! {
        <div class="user-dashboard">
            <FilterSidebar on_change=on_filters/>
            <section class="user-dashboard__listing">
                <header class="user-dashboard__header">
                    <h2>"All Books"</h2>
                    <label class="user-dashboard__sort">
                        "Sort by "
                        <select on:change=on_sort>
                            {SortKey::ALL
                                .into_iter()
                                .map(|key| {
                                    view! {
                                        <option
                                            value=key.as_str()
                                            selected=move || catalog.with(|c| c.sort) == key
                                        >
                                            {key.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </header>
                <Show when=move || catalog.with(|c| c.loading)>
                    <p class="user-dashboard__status">"Loading books..."</p>
                </Show>
                <Show when=move || catalog.with(|c| c.error.is_some())>
                    <p class="form-error">{move || catalog.with(|c| c.error.clone().unwrap_or_default())}</p>
                </Show>
                <Show when=move || catalog.with(|c| !c.loading && c.error.is_none())>
                    <Show when=move || catalog.with(|c| c.books.is_empty())>
                        <p class="user-dashboard__empty">"No books found."</p>
                    </Show>
                    <div class="user-dashboard__grid">
                        {move || {
                            catalog
                                .get()
                                .books
                                .into_iter()
                                .map(|book| view! { <BookCard book=book/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </section>
        </div>
    }
}
