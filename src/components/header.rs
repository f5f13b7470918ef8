//! App Header Component
//!
//! Title and tagline, the viewer's level progress once signed in, and the
//! auth control in the top-right corner.

use dioxus::prelude::*;
use ecoquest_core::UserStats;
use ecoquest_ui::format::{percent_label, thousands};
use ecoquest_ui::{Avatar, AvatarSize, Button, ButtonVariant, ProgressBar, ProgressTone};

use crate::context::{
    use_auth_loading, use_backend, use_session, use_sign_in_prompt, SignInReason,
};
use crate::theme::colors::level_gradient;

#[component]
pub fn Header(
    /// Viewer's level progress; hidden when `None`
    #[props(default)]
    stats: Option<UserStats>,
) -> Element {
    let session = use_session();

    rsx! {
        header { class: "app-header",
            div { class: "app-header__inner",
                h1 { class: "app-header__title", "EcoQuest Community" }
                p { class: "app-header__subtitle",
                    "Discover amazing species shared by our community"
                }

                if session.read().is_some() {
                    if let Some(stats) = stats {
                        LevelProgress { stats }
                    }
                }

                AuthControl {}
            }
        }
    }
}

/// Level badge with the bar towards the next level
#[component]
fn LevelProgress(stats: UserStats) -> Element {
    let tier = stats.tier();
    let tier_class = tier.class();
    let gradient = level_gradient(tier);
    let percent = stats.progress_percent();
    let percent_text = percent_label(percent);
    let next_level = stats.next_level();
    let exp = thousands(stats.exp);
    let exp_cap = thousands(stats.exp_cap);

    rsx! {
        div { class: "level-progress",
            div { class: "level-badge {tier_class}",
                div { class: "level-badge__inner",
                    span { "\u{26A1}" }
                    span { class: "level-badge__label", "Lvl" }
                    span {
                        class: "level-badge__value",
                        style: "background-image: linear-gradient(135deg, {gradient});",
                        "{stats.level}"
                    }
                }
            }

            div { class: "level-progress__body",
                div { class: "level-progress__row",
                    span { "Progress to Level {next_level}" }
                    span { class: "level-progress__percent", "{percent_text}" }
                }
                ProgressBar { percent, tone: ProgressTone::Experience }
                div { class: "level-progress__exp",
                    span { "{exp} XP" }
                    span { "{exp_cap} XP" }
                }
            }
        }
    }
}

/// Sign-in button, or the viewer's avatar with a profile menu
#[component]
fn AuthControl() -> Element {
    let backend = use_backend();
    let mut session = use_session();
    let auth_loading = use_auth_loading();
    let mut prompt = use_sign_in_prompt();
    let mut show_menu = use_signal(|| false);

    let sign_out = move |_| {
        show_menu.set(false);
        let Some(current) = session.write().take() else {
            return;
        };
        tracing::info!(user_id = %current.user_id, "Signing out");

        let auth = backend.read().auth.clone();
        if let Some(auth) = auth {
            spawn(async move {
                if let Err(e) = auth.sign_out(&current).await {
                    tracing::warn!(error = %e, "Sign-out request failed");
                }
            });
        }
    };

    if auth_loading() {
        return rsx! {
            div { class: "header-auth",
                div { class: "header-auth__loading" }
            }
        };
    }

    let viewer = session.read().clone();
    let viewer_name = viewer
        .as_ref()
        .map(|v| v.display_name().to_string())
        .unwrap_or_default();
    rsx! {
        div { class: "header-auth",
            if let Some(viewer) = viewer {
                button {
                    class: "header-auth__avatar",
                    title: "Profile",
                    onclick: move |_| show_menu.set(!show_menu()),
                    Avatar {
                        image_url: viewer.avatar_url.clone(),
                        name: viewer_name.clone(),
                        initial: viewer.initial(),
                        size: AvatarSize::Large,
                    }
                }

                if show_menu() {
                    div { class: "profile-menu",
                        div { class: "profile-menu__identity",
                            p { class: "profile-menu__name", "{viewer_name}" }
                            if let Some(email) = viewer.email.clone() {
                                p { class: "profile-menu__email", "{email}" }
                            }
                        }
                        button {
                            class: "profile-menu__signout",
                            onclick: sign_out,
                            "Sign out"
                        }
                    }
                }
            } else {
                Button {
                    variant: ButtonVariant::Pill,
                    onclick: move |_| prompt.set(Some(SignInReason::Header)),
                    "Sign in with Google"
                }
            }
        }
    }
}
