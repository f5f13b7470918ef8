//! Sign-In Prompt Modal
//!
//! Opened when a signed-out viewer likes or comments, or from the header.
//! The OAuth flow runs in the system browser: the viewer copies the link,
//! signs in, then pastes the URL they were redirected to (or just the access
//! token) back here.

use dioxus::prelude::*;
use ecoquest_core::auth::DEFAULT_PROVIDER;
use ecoquest_ui::{Button, ButtonVariant, CloseButton};

use crate::context::{use_backend, use_session, use_sign_in_prompt, Backend};

/// Put `text` on the system clipboard
fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}

#[component]
pub fn SignInPrompt() -> Element {
    let mut prompt = use_sign_in_prompt();
    let mut confirmed = use_signal(|| false);

    let Some(reason) = prompt() else {
        return rsx! {};
    };

    let mut close = move || {
        prompt.set(None);
        confirmed.set(false);
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| close(),
            div {
                class: "modal modal--narrow",
                onclick: move |e| e.stop_propagation(),
                CloseButton { onclick: move |_| close() }

                match reason.question() {
                    Some(question) if !confirmed() => rsx! {
                        p { class: "modal__title", "Sign in" }
                        p { "{question}" }
                        div { class: "modal__actions",
                            Button {
                                variant: ButtonVariant::Ghost,
                                onclick: move |_| close(),
                                "Not now"
                            }
                            Button {
                                onclick: move |_| confirmed.set(true),
                                "Sign in"
                            }
                        }
                    },
                    _ => rsx! { SignInPanel { on_done: move |_| close() } },
                }
            }
        }
    }
}

/// The sign-in flow itself
#[component]
fn SignInPanel(on_done: EventHandler<()>) -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let mut pasted = use_signal(String::new);
    let mut error: Signal<Option<String>> = use_signal(|| None);
    let mut status: Signal<Option<&'static str>> = use_signal(|| None);
    let mut working = use_signal(|| false);

    if backend.read().is_demo() {
        return rsx! {
            div { class: "sign-in-panel",
                p { class: "modal__title", "Demo mode" }
                p { "Sample posts are stored in memory. Continue as the demo ranger to try likes and comments." }
                Button {
                    onclick: move |_| {
                        session.set(Some(Backend::demo_session()));
                        on_done.call(());
                    },
                    "Continue as Ranger Rowan"
                }
            }
        };
    }

    let link = {
        let backend = backend.read();
        backend.auth.as_ref().and_then(|auth| {
            auth.sign_in_url(DEFAULT_PROVIDER, backend.redirect_url.as_deref())
                .map_err(|e| tracing::error!(error = %e, "Could not build sign-in URL"))
                .ok()
        })
    };
    let Some(link) = link.map(|url| url.to_string()) else {
        return rsx! {
            div { class: "sign-in-panel",
                p { class: "sign-in-panel__error", "Sign-in is not available for this project." }
            }
        };
    };

    let copy_link = {
        let link = link.clone();
        move |_: ()| match copy_to_clipboard(&link) {
            Ok(()) => status.set(Some("Link copied. Open it in your browser.")),
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard unavailable");
                error.set(Some("Could not reach the clipboard; copy the link by hand.".to_string()));
            }
        }
    };

    let submit = move |_: ()| {
        if working() {
            return;
        }
        let Some(auth) = backend.read().auth.clone() else {
            return;
        };
        let redirect = pasted();
        working.set(true);
        error.set(None);
        spawn(async move {
            match auth.session_from_redirect(&redirect).await {
                Ok(signed_in) => {
                    tracing::info!(user_id = %signed_in.user_id, "Signed in");
                    session.set(Some(signed_in));
                    pasted.set(String::new());
                    on_done.call(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Sign-in failed");
                    error.set(Some(e.to_string()));
                }
            }
            working.set(false);
        });
    };

    let can_submit = !working() && !pasted.read().trim().is_empty();

    rsx! {
        div { class: "sign-in-panel",
            p { class: "modal__title", "Sign in with Google" }
            p { "1. Open this link in your browser and sign in:" }
            p { class: "sign-in-panel__link", "{link}" }
            Button {
                variant: ButtonVariant::Pill,
                onclick: copy_link,
                "Copy link"
            }
            p { "2. Paste the address you land on (or the access token):" }
            input {
                r#type: "text",
                placeholder: "http://localhost:3000/#access_token=...",
                value: "{pasted}",
                disabled: working(),
                oninput: move |e| pasted.set(e.value()),
            }
            if let Some(message) = status() {
                p { class: "sign-in-panel__status", "{message}" }
            }
            if let Some(message) = error() {
                p { class: "sign-in-panel__error", "{message}" }
            }
            div { class: "modal__actions",
                Button {
                    disabled: !can_submit,
                    onclick: submit,
                    if working() { "Signing in..." } else { "Continue" }
                }
            }
        }
    }
}
