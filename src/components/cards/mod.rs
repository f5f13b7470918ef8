//! Post cards, one per post variant.

mod post_author;
mod progress_post_card;
mod quest_post_card;
mod species_modal;
mod species_post_card;

pub use post_author::PostAuthor;
pub use progress_post_card::ProgressPostCard;
pub use quest_post_card::QuestPostCard;
pub use species_modal::SpeciesModal;
pub use species_post_card::SpeciesPostCard;

use dioxus::prelude::*;
use ecoquest_core::Post;

/// Render a post with the card for its variant
#[component]
pub fn PostCard(post: Post) -> Element {
    match post {
        Post::Species(species) => rsx! { SpeciesPostCard { post: species } },
        Post::Quest(quest) => rsx! { QuestPostCard { post: quest } },
        Post::Progress(progress) => rsx! { ProgressPostCard { post: progress } },
    }
}
