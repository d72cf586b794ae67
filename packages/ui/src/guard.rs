use dioxus::prelude::*;
use store::Session;

use crate::use_session;

/// Outcome of the route guard for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    RedirectToLogin,
}

/// Presence of a non-empty credential is all that is checked.
pub fn access_for(session: Option<&Session>) -> Access {
    match session {
        Some(s) if !s.token.is_empty() => Access::Granted,
        _ => Access::RedirectToLogin,
    }
}

/// Renders `children` only while a session exists. Calls
/// `on_unauthenticated` whenever there is none, including after a sign-out.
#[component]
pub fn RequireSession(on_unauthenticated: EventHandler<()>, children: Element) -> Element {
    let session = use_session();

    use_effect(move || {
        if access_for(session.current().as_ref()) == Access::RedirectToLogin {
            on_unauthenticated.call(());
        }
    });

    match access_for(session.current().as_ref()) {
        Access::Granted => rsx! {
            {children}
        },
        Access::RedirectToLogin => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::UserProfile;

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user: UserProfile::default(),
        }
    }

    #[test]
    fn test_no_session_redirects() {
        assert_eq!(access_for(None), Access::RedirectToLogin);
    }

    #[test]
    fn test_empty_token_redirects() {
        assert_eq!(access_for(Some(&session(""))), Access::RedirectToLogin);
    }

    #[test]
    fn test_any_token_is_granted() {
        // no expiry or signature check
        assert_eq!(access_for(Some(&session("expired-but-present"))), Access::Granted);
    }
}
