//! Post Author Component
//!
//! The avatar, name and "activity • age" line at the top of every card.

use chrono::Utc;
use dioxus::prelude::*;
use ecoquest_core::post::PostHeader;
use ecoquest_ui::format::time_ago;
use ecoquest_ui::Avatar;

#[component]
pub fn PostAuthor(
    header: PostHeader,
    /// What the author did, e.g. "Shared a discovery"
    activity: String,
) -> Element {
    let author = &header.author;
    let age = time_ago(header.created_at, Utc::now());

    rsx! {
        div { class: "post-author",
            Avatar {
                image_url: author.avatar_url.clone(),
                name: author.display_name.clone(),
                initial: author.initial(),
            }
            div {
                h3 { class: "post-author__name", "{author.display_name}" }
                p { class: "post-author__activity", "{activity} \u{2022} {age}" }
            }
        }
    }
}
