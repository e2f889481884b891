//! Session context and hooks for the UI.

use api::{ApiClient, ApiConfig, ApiError, Session, TokenStorage};
use dioxus::prelude::*;

/// Session state for the application.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Session,
    /// Whether the persisted session is still being restored.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            loading: true,
        }
    }
}

/// Get the current session state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Service base URLs provided at the app root.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>()
}

/// An [`ApiClient`] carrying the current session token.
pub fn use_client() -> ApiClient {
    let config = use_api_config();
    let session = use_session();
    let token = session.read().session.token.clone();
    ApiClient::with_token(config, token)
}

fn token_storage() -> impl TokenStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        api::BrowserStorage::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        api::MemoryStorage::new()
    }
}

/// Provider component that manages session state.
/// Wrap your app with this component to enable sign-in.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut state = use_signal(SessionState::default);
    use_context_provider(ApiConfig::default);

    // Restore the persisted session on mount
    let _ = use_resource(move || async move {
        let session = Session::from_storage(&token_storage());
        state.set(SessionState {
            session,
            loading: false,
        });
    });

    use_context_provider(|| state);

    rsx! {
        {children}
    }
}

/// Exchange credentials for a token and establish the session.
/// On failure the previous state is left untouched.
pub async fn sign_in(
    mut state: Signal<SessionState>,
    client: ApiClient,
    email: String,
    password: String,
) -> Result<(), ApiError> {
    let response = client.login(&email, &password).await?;
    let session = Session::establish(response.token, &token_storage())?;
    state.set(SessionState {
        session,
        loading: false,
    });
    Ok(())
}

/// Drop the session and erase the persisted token.
pub fn sign_out(mut state: Signal<SessionState>) {
    let session = Session::clear(&token_storage());
    state.set(SessionState {
        session,
        loading: false,
    });
}
