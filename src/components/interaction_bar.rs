//! Interaction Bar Component
//!
//! Like and comment buttons under a post, plus the expandable comment
//! thread. Each card owns one bar and with it the post's interaction state.

use dioxus::prelude::*;
use ecoquest_core::{CommentOutcome, InteractionState, LikeOutcome, PostId};
use ecoquest_ui::{Button, ButtonVariant};

use crate::components::CommentSection;
use crate::context::{use_backend, use_session, use_sign_in_prompt, SignInReason};

#[component]
pub fn InteractionBar(post_id: PostId) -> Element {
    let backend = use_backend();
    let session = use_session();
    let mut prompt = use_sign_in_prompt();

    let mut state = use_signal(|| InteractionState::new(post_id.clone()));
    let mut show_comments = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let mut draft = use_signal(String::new);

    // Reload whenever the viewer changes; likes stay disabled until the
    // viewer's own like has been read
    let _loader = use_resource(move || {
        let controller = backend.read().interactions(session.read().as_ref());
        let post_id = post_id.clone();
        async move {
            state.set(InteractionState::new(post_id.clone()));
            let loaded = controller.load(&post_id).await;
            state.set(loaded);
        }
    });

    let on_like = move |_: ()| {
        if busy() || !state.read().loaded {
            return;
        }
        let controller = backend.read().interactions(session.read().as_ref());
        busy.set(true);
        spawn(async move {
            let mut next = state();
            match controller.toggle_like(&mut next).await {
                LikeOutcome::SignInRequired => prompt.set(Some(SignInReason::Like)),
                LikeOutcome::Liked | LikeOutcome::Unliked => state.set(next),
                LikeOutcome::Failed => {}
            }
            busy.set(false);
        });
    };

    let on_comment = move |text: String| {
        if busy() {
            return;
        }
        let controller = backend.read().interactions(session.read().as_ref());
        busy.set(true);
        spawn(async move {
            let mut next = state();
            match controller.submit_comment(&mut next, &text).await {
                CommentOutcome::Posted(_) => {
                    state.set(next);
                    draft.set(String::new());
                }
                CommentOutcome::SignInRequired => prompt.set(Some(SignInReason::Comment)),
                CommentOutcome::Empty | CommentOutcome::Failed => {}
            }
            busy.set(false);
        });
    };

    let current = state.read();
    let liked = current.is_liked();
    let likes = current.likes_count;
    let comment_count = current.comment_count();
    let loaded = current.loaded;
    let heart_fill = if liked { "currentColor" } else { "none" };
    drop(current);

    rsx! {
        div { class: "interaction-bar",
            Button {
                variant: ButtonVariant::Action,
                class: "like-button".to_string(),
                active: liked,
                disabled: busy() || !loaded,
                title: if liked { "Unlike".to_string() } else { "Like".to_string() },
                onclick: on_like,
                svg {
                    view_box: "0 0 24 24",
                    fill: "{heart_fill}",
                    stroke: "currentColor",
                    stroke_width: "2",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        d: "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z",
                    }
                }
                span { "{likes}" }
            }

            Button {
                variant: ButtonVariant::Action,
                class: "comment-button".to_string(),
                active: show_comments(),
                title: "Comments".to_string(),
                onclick: move |_| show_comments.set(!show_comments()),
                svg {
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        d: "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z",
                    }
                }
                span { "{comment_count}" }
            }
        }

        if show_comments() {
            CommentSection {
                comments: state.read().comments.clone(),
                viewer: session.read().as_ref().map(|s| s.user_id.clone()),
                draft,
                busy: busy(),
                on_submit: on_comment,
            }
        }
    }
}
