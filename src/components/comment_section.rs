//! Comment Section Component
//!
//! The thread under a post, oldest first, with an inline form for adding to
//! it.

use chrono::Utc;
use dioxus::prelude::*;
use ecoquest_core::{Comment, UserId};
use ecoquest_ui::format::time_ago;
use ecoquest_ui::{Button, ButtonVariant};

#[component]
pub fn CommentSection(
    /// Thread to show, oldest first
    comments: Vec<Comment>,
    /// Signed-in viewer, if any
    viewer: Option<UserId>,
    /// Text in the input; cleared by the owner once a comment posts
    draft: Signal<String>,
    /// A write is in flight
    #[props(default = false)]
    busy: bool,
    /// Called with the draft when the viewer submits
    on_submit: EventHandler<String>,
) -> Element {
    let mut draft = draft;
    let signed_in = viewer.is_some();
    let placeholder = if signed_in {
        "Add a comment..."
    } else {
        "Sign in to comment"
    };
    // Signed-out submits reach the owner, which opens the sign-in prompt
    let can_post = !busy && !draft.read().trim().is_empty();
    let now = Utc::now();

    let submit = move |_: ()| {
        if !can_post {
            return;
        }
        on_submit.call(draft());
    };

    let handle_keydown = move |e: KeyboardEvent| {
        if e.key() == Key::Enter && can_post {
            e.prevent_default();
            on_submit.call(draft());
        }
    };

    rsx! {
        div { class: "comment-section",
            div { class: "comment-list",
                for comment in comments.iter() {
                    CommentRow {
                        key: "{comment.id}",
                        comment: comment.clone(),
                        is_own: viewer.as_ref() == Some(&comment.user_id),
                        age: time_ago(comment.created_at, now),
                    }
                }
            }

            div { class: "comment-form",
                input {
                    r#type: "text",
                    placeholder: "{placeholder}",
                    value: "{draft}",
                    disabled: busy,
                    oninput: move |e| draft.set(e.value()),
                    onkeydown: handle_keydown,
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !can_post,
                    onclick: submit,
                    "Post"
                }
            }
        }
    }
}

#[component]
fn CommentRow(comment: Comment, is_own: bool, age: String) -> Element {
    let author = if is_own { "You" } else { "User" };

    rsx! {
        div { class: "comment",
            div { class: "comment__meta",
                p { class: "comment__author", "{author}" }
                p { class: "comment__time", "{age}" }
            }
            p { class: "comment__body", "{comment.content}" }
        }
    }
}
