//! Species Post Card
//!
//! A single discovery: photo, common and scientific name, caption.

use dioxus::prelude::*;
use ecoquest_core::post::SpeciesPost;

use super::PostAuthor;
use crate::components::InteractionBar;

#[component]
pub fn SpeciesPostCard(post: SpeciesPost) -> Element {
    let image_alt = if post.species_name.is_empty() {
        "Species image".to_string()
    } else {
        post.species_name.clone()
    };

    rsx! {
        article { class: "post-card post-card--species",
            PostAuthor { header: post.header.clone(), activity: "Shared a discovery".to_string() }

            if !post.header.image_url.is_empty() {
                div { class: "post-image",
                    img { src: "{post.header.image_url}", alt: "{image_alt}" }
                }
            }

            div { class: "post-section post-section--highlight",
                p { class: "post-section__eyebrow", "Species :" }
                h2 { class: "post-section__title", "{post.species_name}" }
                if !post.scientific_name.is_empty() {
                    p { class: "scientific-name", "{post.scientific_name}" }
                }
                if !post.location.is_empty() {
                    p { class: "post-author__activity", "\u{1F4CD} {post.location}" }
                }
                if !post.header.caption.is_empty() {
                    p { class: "post-caption", "\"{post.header.caption}\"" }
                }
            }

            InteractionBar { post_id: post.header.id.clone() }
        }
    }
}
