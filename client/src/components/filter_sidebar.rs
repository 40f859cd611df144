//! Catalog filter inputs for the user dashboard.

#[cfg(test)]
#[path = "filter_sidebar_test.rs"]
mod filter_sidebar_test;

use leptos::prelude::*;

use crate::net::types::BookFilters;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FilterField {
    Author,
    Title,
    Description,
}

/// Raw text of the three filter boxes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct FilterInputs {
    author: String,
    title: String,
    description: String,
}

impl FilterInputs {
    fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Author => &self.author,
            FilterField::Title => &self.title,
            FilterField::Description => &self.description,
        }
    }

    fn set(&mut self, field: FilterField, value: String) {
        match field {
            FilterField::Author => self.author = value,
            FilterField::Title => self.title = value,
            FilterField::Description => self.description = value,
        }
    }

    /// Filters for "Apply": the non-empty subset of the inputs.
    fn filters(&self) -> BookFilters {
        BookFilters::from_inputs(&self.author, &self.title, &self.description)
    }

    /// Reset every input and return the filters to emit for "Clear".
    fn clear(&mut self) -> BookFilters {
        *self = Self::default();
        self.filters()
    }
}

/// "Apply" emits the non-empty subset of the inputs; "Clear" resets the
/// inputs and emits an empty filter set.
#[component]
pub fn FilterSidebar(on_change: Callback<BookFilters>) -> impl IntoView {
    let inputs = RwSignal::new(FilterInputs::default());

    let on_apply = move |_| {
        on_change.run(inputs.with_untracked(FilterInputs::filters));
    };

    let on_clear = move |_| {
        if let Some(filters) = inputs.try_update(FilterInputs::clear) {
            on_change.run(filters);
        }
    };

    view! {
        <aside class="filter-sidebar">
            <h3>"Filter Books"</h3>
            <FilterInput
                label="Author"
                id="filter-author"
                placeholder="Filter by author..."
                inputs=inputs
                field=FilterField::Author
            />
            <FilterInput
                label="Title"
                id="filter-title"
                placeholder="Filter by title..."
                inputs=inputs
                field=FilterField::Title
            />
            <FilterInput
                label="Description"
                id="filter-description"
                placeholder="Filter by description..."
                inputs=inputs
                field=FilterField::Description
            />
            <button class="btn btn--primary filter-sidebar__apply" on:click=on_apply>
                "Apply Filter"
            </button>
            <button class="btn filter-sidebar__clear" on:click=on_clear>
                "Clear Filter"
            </button>
        </aside>
    }
}

#[component]
fn FilterInput(
    label: &'static str,
    id: &'static str,
    placeholder: &'static str,
    inputs: RwSignal<FilterInputs>,
    field: FilterField,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label class="form-label" for=id>{label}</label>
            <input
                class="form-input"
                type="text"
                id=id
                placeholder=placeholder
                prop:value=move || inputs.with(|i| i.get(field).to_owned())
                on:input=move |ev| inputs.update(|i| i.set(field, event_target_value(&ev)))
            />
        </div>
    }
}
