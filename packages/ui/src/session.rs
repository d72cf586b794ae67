//! Session context and hooks for the UI.

use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use store::{AppConfig, KeyValueStorage, Session, SessionStore, UserProfile};

/// Create a platform-appropriate session store.
///
/// - **Web** (WASM + `web` feature): `window.localStorage`
/// - everything else: a process-wide in-memory map
pub fn make_session_store() -> SessionStore<impl KeyValueStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        SessionStore::new(store::MemoryStorage::shared())
    }
}

/// Handle to the signed-in session, the app config and the HTTP client.
///
/// `Copy`, so event handlers can capture it freely. Methods that change the
/// session take `&mut self`; bind it with `let mut session = use_session();`.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionContext {
    session: Signal<Option<Session>>,
    config: Signal<AppConfig>,
    client: Signal<ApiClient>,
}

impl SessionContext {
    /// Current session. Subscribes the caller to sign-in/out.
    pub fn current(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn brand(&self) -> String {
        self.config.read().ui.brand.clone()
    }

    /// A client carrying the current credential. Does not subscribe.
    pub fn client(&self) -> ApiClient {
        let credential = self.session.peek().as_ref().map(|s| s.token.clone());
        self.client.peek().clone().with_credential(credential)
    }

    /// Persist `session` and make it current.
    pub fn sign_in(&mut self, session: Session) {
        if let Err(e) = make_session_store().save(&session) {
            tracing::warn!("Failed to persist session: {}", e);
        }
        tracing::info!("Signed in as {}", session.user.display_name());
        self.session.set(Some(session));
    }

    /// Clear both stored keys and drop the current session.
    pub fn sign_out(&mut self) {
        make_session_store().clear();
        if self.session.peek().is_some() {
            tracing::info!("Signed out");
            self.session.set(None);
        }
    }

    /// Log a failed call. A rejected credential ends the session.
    pub fn report(&mut self, action: &str, err: &ApiError) {
        tracing::error!("{}: {}", action, err);
        if err.is_unauthorized() {
            self.sign_out();
        }
    }
}

/// Get the session context provided by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Provider component that restores the persisted session on mount.
/// Wrap the router with this component.
#[component]
pub fn SessionProvider(config: AppConfig, children: Element) -> Element {
    let session = use_signal(|| make_session_store().load());
    let client = use_signal(|| ApiClient::new(config.api.base_url.clone()));
    let config = use_signal(move || config);

    use_context_provider(|| SessionContext {
        session,
        config,
        client,
    });

    rsx! {
        {children}
    }
}
