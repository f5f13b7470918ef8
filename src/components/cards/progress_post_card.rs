//! Progress Post Card
//!
//! A milestone: level and experience, with the author's achievement totals.

use dioxus::prelude::*;
use ecoquest_core::post::ProgressPost;
use ecoquest_ui::format::{short_date, thousands};
use ecoquest_ui::{ProgressBar, ProgressTone, StatAccent, StatTile};

use super::PostAuthor;
use crate::components::InteractionBar;

#[component]
pub fn ProgressPostCard(post: ProgressPost) -> Element {
    let stats = &post.stats;
    let shared_on = short_date(post.header.created_at);
    let exp_into_level = thousands(stats.exp_into_level);
    let exp_cap = thousands(stats.exp_cap);
    let total_exp = thousands(post.user_exp);

    rsx! {
        article { class: "post-card post-card--progress",
            PostAuthor { header: post.header.clone(), activity: "Achieved".to_string() }

            if !post.header.caption.is_empty() {
                p { class: "post-caption post-caption--centered", "\"{post.header.caption}\"" }
            }

            div { class: "post-section post-section--highlight",
                p { class: "post-section__eyebrow", "Level {post.user_level}" }
                ProgressBar { percent: stats.level_percent(), tone: ProgressTone::Experience }
                p { class: "progress-label", "{exp_into_level} / {exp_cap} XP \u{2022} {total_exp} XP total" }
            }

            div { class: "post-section",
                h4 { class: "post-section__heading",
                    span { "\u{1F3C6}" }
                    span { "Achievements" }
                }
                div { class: "achievements",
                    StatTile {
                        label: "Quests".to_string(),
                        value: thousands(u64::from(stats.quests_completed)),
                        caption: "Completed".to_string(),
                        icon: "\u{2714}".to_string(),
                        accent: StatAccent::Green,
                    }
                    StatTile {
                        label: "Species".to_string(),
                        value: thousands(u64::from(stats.species_discovered)),
                        caption: "Discovered".to_string(),
                        icon: "\u{1F4C8}".to_string(),
                        accent: StatAccent::Blue,
                    }
                    StatTile {
                        label: "Flora".to_string(),
                        value: thousands(u64::from(stats.flora_count)),
                        caption: "Captured".to_string(),
                        icon: "\u{1F33F}".to_string(),
                        accent: StatAccent::Amber,
                    }
                    StatTile {
                        label: "Fauna".to_string(),
                        value: thousands(u64::from(stats.fauna_count)),
                        caption: "Captured".to_string(),
                        icon: "\u{1F426}".to_string(),
                        accent: StatAccent::Purple,
                    }
                }
                div { class: "total-captures",
                    span { class: "total-captures__label", "Total Captures" }
                    span { class: "total-captures__value", "{stats.total_captures}" }
                }
            }

            div { class: "post-meta",
                span { "\u{1F4C5} Shared on {shared_on}" }
            }

            InteractionBar { post_id: post.header.id.clone() }
        }
    }
}
