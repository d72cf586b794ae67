use dioxus::prelude::*;
use store::{RecipeDraft, RecipeId};

use crate::{load_failure_message, use_session, LoadState, RecipeForm, SubmitState};

use super::check_required;

/// Edit form for one recipe, with rating and personal notes.
///
/// The draft is hydrated from `GET /recipes/{id}` and submitted whole with
/// `PUT`.
#[component]
pub fn EditRecipeView(
    id: RecipeId,
    on_saved: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut session = use_session();

    // re-run the loader when the route param changes
    let mut id_signal = use_signal(|| id.clone());
    if *id_signal.peek() != id {
        id_signal.set(id.clone());
    }

    let mut draft = use_signal(RecipeDraft::default);
    let mut loaded = use_signal(|| LoadState::<()>::Loading);
    let mut submit = use_signal(SubmitState::default);

    let _loader = use_resource(move || {
        let id = id_signal();
        async move {
            loaded.set(LoadState::Loading);
            match session.client().get_recipe(&id).await {
                Ok(recipe) => {
                    draft.set(RecipeDraft::from_recipe(&recipe));
                    loaded.set(LoadState::Ready(()));
                }
                Err(e) => {
                    session.report("Failed to load recipe", &e);
                    loaded.set(LoadState::Failed(load_failure_message(&e)));
                }
            }
        }
    });

    let handle_submit = move |_| {
        if !submit.write().begin() {
            return;
        }
        if let Err(message) = check_required(&draft.peek()) {
            submit.write().fail(message);
            return;
        }
        let id = id_signal.peek().clone();
        let payload = draft.peek().to_update_payload();
        spawn(async move {
            match session.client().update_recipe(&id, &payload).await {
                Ok(_) => {
                    submit.set(SubmitState::Idle);
                    on_saved.call(());
                }
                Err(e) => {
                    session.report("Failed to update recipe", &e);
                    submit.write().fail(e.user_message("Failed to update recipe"));
                }
            }
        });
    };

    match loaded() {
        LoadState::Loading => rsx! {
            div { class: "page-status", "Loading..." }
        },
        LoadState::Failed(message) => rsx! {
            div {
                class: "page-narrow",
                div { class: "alert alert-danger", "{message}" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_cancel.call(()),
                    "← Back"
                }
            }
        },
        LoadState::Ready(()) => rsx! {
            RecipeForm {
                draft,
                heading: "Edit Recipe",
                submit_label: "Update Recipe",
                submitting: submit.read().is_submitting(),
                error: submit.read().error().unwrap_or_default().to_string(),
                personal_fields: true,
                on_submit: handle_submit,
                on_cancel: move |_| on_cancel.call(()),
            }
        },
    }
}
