use dioxus::prelude::*;
use store::RecipeDraft;

use crate::{CategoryOptions, StarRating};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Create/edit form bound to a draft signal.
///
/// The form only edits `draft`; sending it is up to `on_submit`.
#[component]
pub fn RecipeForm(
    draft: Signal<RecipeDraft>,
    heading: String,
    submit_label: String,
    /// Disables the submit button while a request is in flight.
    #[props(default)]
    submitting: bool,
    /// Message shown above the form, empty for none.
    #[props(default)]
    error: String,
    /// Show the rating picker and personal notes (edit only).
    #[props(default)]
    personal_fields: bool,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = draft;
    let current = draft();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page-narrow",
            h2 { class: "page-title", "{heading}" }

            if !error.is_empty() {
                div { class: "alert alert-danger", "{error}" }
            }

            form {
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_submit.call(());
                },

                div {
                    class: "form-group",
                    label { class: "form-label", r#for: "recipe-title", "Title" }
                    input {
                        id: "recipe-title",
                        class: "form-control",
                        r#type: "text",
                        required: true,
                        value: "{current.title}",
                        oninput: move |evt: FormEvent| draft.write().title = evt.value(),
                    }
                }

                div {
                    class: "form-group",
                    label { class: "form-label", r#for: "recipe-description", "Description" }
                    textarea {
                        id: "recipe-description",
                        class: "form-control",
                        rows: "2",
                        value: "{current.description}",
                        oninput: move |evt: FormEvent| draft.write().description = evt.value(),
                    }
                }

                div {
                    class: "form-group",
                    label { class: "form-label", r#for: "recipe-ingredients", "Ingredients" }
                    textarea {
                        id: "recipe-ingredients",
                        class: "form-control",
                        rows: "4",
                        required: true,
                        placeholder: "One ingredient per line",
                        value: "{current.ingredients}",
                        oninput: move |evt: FormEvent| draft.write().ingredients = evt.value(),
                    }
                }

                div {
                    class: "form-group",
                    label { class: "form-label", r#for: "recipe-steps", "Steps" }
                    textarea {
                        id: "recipe-steps",
                        class: "form-control",
                        rows: "5",
                        required: true,
                        placeholder: "One step per line",
                        value: "{current.steps}",
                        oninput: move |evt: FormEvent| draft.write().steps = evt.value(),
                    }
                }

                div {
                    class: "form-group",
                    label { class: "form-label", r#for: "recipe-image", "Image URL (optional)" }
                    input {
                        id: "recipe-image",
                        class: "form-control",
                        r#type: "url",
                        value: "{current.image_url}",
                        oninput: move |evt: FormEvent| draft.write().image_url = evt.value(),
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { class: "form-label", r#for: "recipe-category", "Category" }
                        select {
                            id: "recipe-category",
                            class: "form-select",
                            value: "{current.category}",
                            onchange: move |evt: FormEvent| draft.write().category = evt.value(),
                            CategoryOptions { placeholder: "Select category" }
                        }
                    }
                    div {
                        class: "form-group",
                        label { class: "form-label", r#for: "recipe-servings", "Servings" }
                        input {
                            id: "recipe-servings",
                            class: "form-control",
                            r#type: "number",
                            min: "0",
                            placeholder: "e.g., 4",
                            value: "{current.servings}",
                            oninput: move |evt: FormEvent| draft.write().servings = evt.value(),
                        }
                    }
                }

                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { class: "form-label", r#for: "recipe-prep", "Prep Time (minutes)" }
                        input {
                            id: "recipe-prep",
                            class: "form-control",
                            r#type: "number",
                            min: "0",
                            placeholder: "e.g., 15",
                            value: "{current.prep_time}",
                            oninput: move |evt: FormEvent| draft.write().prep_time = evt.value(),
                        }
                    }
                    div {
                        class: "form-group",
                        label { class: "form-label", r#for: "recipe-cook", "Cook Time (minutes)" }
                        input {
                            id: "recipe-cook",
                            class: "form-control",
                            r#type: "number",
                            min: "0",
                            placeholder: "e.g., 30",
                            value: "{current.cook_time}",
                            oninput: move |evt: FormEvent| draft.write().cook_time = evt.value(),
                        }
                    }
                }

                if personal_fields {
                    div {
                        class: "form-group",
                        label { class: "form-label", "Rating" }
                        StarRating {
                            value: current.rating,
                            on_change: move |star: u8| draft.write().set_rating(star),
                        }
                    }
                    div {
                        class: "form-group",
                        label { class: "form-label", r#for: "recipe-notes", "Personal Notes" }
                        textarea {
                            id: "recipe-notes",
                            class: "form-control",
                            rows: "3",
                            placeholder: "Add any personal notes or modifications...",
                            value: "{current.notes}",
                            oninput: move |evt: FormEvent| draft.write().notes = evt.value(),
                        }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting { "Saving..." } else { "{submit_label}" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
