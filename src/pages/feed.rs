//! Community Feed Page
//!
//! Header, then the newest posts as cards. Fetches once on mount and again
//! whenever the viewer signs in or out.

use dioxus::prelude::*;

use crate::components::cards::PostCard;
use crate::components::{Header, SignInPrompt};
use crate::context::{use_backend, use_session};

#[component]
pub fn FeedPage() -> Element {
    let backend = use_backend();
    let session = use_session();

    let feed = use_resource(move || {
        let service = backend.read().feed(session.read().as_ref());
        async move { service.recent().await }
    });

    let stats = use_resource(move || {
        let backend = backend.read().clone();
        let viewer = session.read().clone();
        async move { backend.viewer_stats(viewer.as_ref()).await }
    });

    rsx! {
        div { class: "app-shell",
            Header { stats: stats().flatten() }

            main { class: "feed",
                match &*feed.read_unchecked() {
                    None => rsx! {
                        div { class: "feed-loading",
                            div { class: "spinner" }
                        }
                    },
                    Some(feed) if feed.is_empty() => rsx! { EmptyFeed {} },
                    Some(feed) => rsx! {
                        for post in feed.posts.iter() {
                            PostCard { key: "{post.id()}", post: post.clone() }
                        }
                    },
                }
            }

            SignInPrompt {}
        }
    }
}

/// Shown when the feed has no posts, or could not be fetched
#[component]
fn EmptyFeed() -> Element {
    rsx! {
        div { class: "feed-empty",
            p { class: "feed-empty__title", "No posts yet. Start sharing from the app!" }
            p { class: "feed-empty__hint", "Be the first to share your discoveries" }
        }
    }
}
