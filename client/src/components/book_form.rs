//! Title/author/description/image inputs shared by the add form and the
//! edit modal.

use leptos::prelude::*;

use crate::net::types::BookInput;

/// Controlled inputs bound to `draft`. `id_prefix` keeps label targets unique
/// when the add form and the edit modal are on screen together.
#[component]
pub fn BookFormFields(draft: RwSignal<BookInput>, id_prefix: &'static str) -> impl IntoView {
    let title_id = format!("{id_prefix}title");
    let author_id = format!("{id_prefix}author");
    let description_id = format!("{id_prefix}description");
    let image_id = format!("{id_prefix}imageUrl");

    view! {
        <div class="form-group">
            <label class="form-label" for=title_id.clone()>"Title"</label>
            <input
                class="form-input"
                type="text"
                id=title_id
                required
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label class="form-label" for=author_id.clone()>"Author"</label>
            <input
                class="form-input"
                type="text"
                id=author_id
                required
                prop:value=move || draft.with(|d| d.author.clone())
                on:input=move |ev| draft.update(|d| d.author = event_target_value(&ev))
            />
        </div>
        <div class="form-group">
            <label class="form-label" for=description_id.clone()>"Description"</label>
            <textarea
                class="form-input form-input--textarea"
                id=description_id
                required
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
        </div>
        <div class="form-group">
            <label class="form-label" for=image_id.clone()>"Image URL"</label>
            <input
                class="form-input"
                type="text"
                id=image_id
                required
                prop:value=move || draft.with(|d| d.image_url.clone())
                on:input=move |ev| draft.update(|d| d.image_url = event_target_value(&ev))
            />
        </div>
    }
}
