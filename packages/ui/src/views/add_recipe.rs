use dioxus::prelude::*;
use store::RecipeDraft;

use crate::{use_session, RecipeForm, SubmitState};

use super::check_required;

/// Create form. Navigates back to the listing on success.
#[component]
pub fn AddRecipeView(on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let mut session = use_session();
    let draft = use_signal(RecipeDraft::default);
    let mut submit = use_signal(SubmitState::default);

    let handle_submit = move |_| {
        if !submit.write().begin() {
            return;
        }
        if let Err(message) = check_required(&draft.peek()) {
            submit.write().fail(message);
            return;
        }
        let payload = draft.peek().to_create_payload();
        spawn(async move {
            match session.client().create_recipe(&payload).await {
                Ok(_) => {
                    submit.set(SubmitState::Idle);
                    on_saved.call(());
                }
                Err(e) => {
                    session.report("Failed to add recipe", &e);
                    submit.write().fail(e.user_message("Failed to add recipe"));
                }
            }
        });
    };

    rsx! {
        RecipeForm {
            draft,
            heading: "Add New Recipe",
            submit_label: "Add Recipe",
            submitting: submit.read().is_submitting(),
            error: submit.read().error().unwrap_or_default().to_string(),
            on_submit: handle_submit,
            on_cancel: move |_| on_cancel.call(()),
        }
    }
}
