use dioxus::prelude::*;
use ecoquest_core::Session;

use crate::context::{Backend, SignInReason};
use crate::pages::FeedPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the backend and session contexts, and restores a
/// session from a stored access token.
#[component]
pub fn App() -> Element {
    let backend: Signal<Backend> = use_signal(crate::backend);
    let mut session: Signal<Option<Session>> = use_signal(|| None);
    let mut auth_loading: Signal<bool> = use_signal(|| false);
    let prompt: Signal<Option<SignInReason>> = use_signal(|| None);

    use_context_provider(|| backend);
    use_context_provider(|| session);
    use_context_provider(|| auth_loading);
    use_context_provider(|| prompt);

    // Resolve the starting viewer once on mount
    use_effect(move || {
        let backend = backend.peek().clone();
        if backend.is_demo() {
            session.set(Some(Backend::demo_session()));
            return;
        }
        let (Some(auth), Some(token)) = (backend.auth, backend.initial_token) else {
            return;
        };

        auth_loading.set(true);
        spawn(async move {
            match auth.session_from_token(&token).await {
                Ok(restored) => {
                    tracing::info!(user_id = %restored.user_id, "Restored session");
                    session.set(Some(restored));
                }
                Err(e) => tracing::warn!(error = %e, "Stored access token was rejected"),
            }
            auth_loading.set(false);
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        FeedPage {}
    }
}
