//! Page state machines.
//!
//! Detail pages move `Loading → Ready | Failed`. Forms move
//! `Idle → Submitting → Failed`, leaving `Submitting` only on failure; success
//! navigates away.

use api::ApiError;

/// State of a page that fetches one thing on mount.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result<E>(result: Result<T, E>, message: impl FnOnce(E) -> String) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => LoadState::Failed(message(e)),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// What a recipe page shows when its fetch fails. Only a 404 means the
/// recipe is gone; anything else keeps the backend's reason when it gave one.
pub fn load_failure_message(err: &ApiError) -> String {
    if err.is_not_found() {
        "Recipe not found".to_string()
    } else {
        err.user_message("Failed to load recipe")
    }
}

/// State of a form submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl SubmitState {
    /// Enter `Submitting`. Returns `false` when a submission is already in
    /// flight, in which case the caller must not send another.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = SubmitState::Failed(message.into());
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_state_from_result() {
        let ok: LoadState<u32> = LoadState::from_result(Ok::<_, ()>(7), |_| "x".into());
        assert_eq!(ok.ready(), Some(&7));

        let failed: LoadState<u32> =
            LoadState::from_result(Err("boom"), |_| "Recipe not found".to_string());
        assert_eq!(failed, LoadState::Failed("Recipe not found".to_string()));
        assert!(!failed.is_loading());
    }

    #[test]
    fn test_load_failure_message_only_says_not_found_on_404() {
        assert_eq!(load_failure_message(&ApiError::NotFound), "Recipe not found");

        let backend = ApiError::Backend {
            status: 500,
            message: Some("Database unavailable".to_string()),
        };
        assert_eq!(load_failure_message(&backend), "Database unavailable");

        let silent = ApiError::Backend {
            status: 503,
            message: None,
        };
        assert_eq!(load_failure_message(&silent), "Failed to load recipe");
        assert_eq!(
            load_failure_message(&ApiError::Unauthorized),
            "Failed to load recipe"
        );
    }

    #[test]
    fn test_second_submit_is_ignored() {
        let mut state = SubmitState::default();
        assert!(state.begin());
        assert!(state.is_submitting());
        assert!(!state.begin());
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut state = SubmitState::default();
        state.begin();
        state.fail("Failed to add recipe");
        assert_eq!(state.error(), Some("Failed to add recipe"));
        assert!(state.begin());
        assert_eq!(state.error(), None);
    }
}
