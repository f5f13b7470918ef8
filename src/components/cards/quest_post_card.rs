//! Quest Post Card
//!
//! A completed quest: objectives, flora/fauna targets, the gallery of
//! captured species with a detail modal, and the author's reflection.

use dioxus::prelude::*;
use ecoquest_core::post::{CapturedSpecies, Objective, QuestPost};
use ecoquest_ui::format::{progress_percent, GALLERY_PREVIEW};
use ecoquest_ui::{Button, ButtonVariant, ProgressBar, ProgressTone};

use super::{PostAuthor, SpeciesModal};
use crate::components::InteractionBar;

/// Species to render in the gallery
pub fn visible_species(captured: &[CapturedSpecies], show_all: bool) -> &[CapturedSpecies] {
    if show_all {
        captured
    } else {
        &captured[..captured.len().min(GALLERY_PREVIEW)]
    }
}

/// "Saturday • 2025-03-01", or whichever half is present
pub fn day_and_date(day: &str, date: &str) -> Option<String> {
    match (day.is_empty(), date.is_empty()) {
        (true, true) => None,
        (false, true) => Some(day.to_string()),
        (true, false) => Some(date.to_string()),
        (false, false) => Some(format!("{day} \u{2022} {date}")),
    }
}

/// List key for an objective; ids may be missing or repeated
pub fn objective_key(objective: &Objective, index: usize) -> String {
    format!("{}-{}", objective.id, index)
}

#[component]
pub fn QuestPostCard(post: QuestPost) -> Element {
    let mut show_all = use_signal(|| false);
    let mut selected: Signal<Option<CapturedSpecies>> = use_signal(|| None);

    let stats = &post.stats;
    let captured_total = stats.species_captured.len();
    let gallery: Vec<CapturedSpecies> =
        visible_species(&stats.species_captured, show_all()).to_vec();
    let when = day_and_date(&stats.day, &stats.date);
    let objectives: Vec<(String, Objective)> = post
        .objectives
        .iter()
        .enumerate()
        .map(|(index, objective)| (objective_key(objective, index), objective.clone()))
        .collect();

    rsx! {
        article { class: "post-card post-card--quest",
            PostAuthor { header: post.header.clone(), activity: "Completed a quest".to_string() }

            div { class: "post-section post-section--highlight",
                p { class: "post-section__eyebrow", "Quest Title :" }
                h2 { class: "post-section__title", "{post.quest_name}" }
                if !post.quest_description.is_empty() {
                    p { "{post.quest_description}" }
                }
            }

            if !post.objectives.is_empty() {
                div { class: "post-section",
                    h4 { class: "post-section__heading",
                        span { "\u{2713}" }
                        span { "To do?" }
                    }
                    for (key, objective) in objectives {
                        ObjectiveRow { key: "{key}", objective }
                    }
                }
            }

            div { class: "post-section post-section--muted",
                h4 { class: "post-section__heading",
                    span { "\u{1F4CA}" }
                    span { "Progress" }
                }
                if stats.flora_target > 0 {
                    TargetCard {
                        label: "Flora".to_string(),
                        count: stats.flora_count,
                        target: stats.flora_target,
                        tone: ProgressTone::Flora,
                    }
                }
                if stats.fauna_target > 0 {
                    TargetCard {
                        label: "Fauna".to_string(),
                        count: stats.fauna_count,
                        target: stats.fauna_target,
                        tone: ProgressTone::Fauna,
                    }
                }
            }

            div { class: "post-section",
                h4 { class: "post-section__heading",
                    span { "\u{1F5BC}\u{FE0F}" }
                    span { "Species Gallery" }
                    span { class: "post-section__count", "({captured_total})" }
                }
                div { class: "species-gallery",
                    for (index, species) in gallery.into_iter().enumerate() {
                        SpeciesTile {
                            key: "{species.entry_id}-{index}",
                            species: species.clone(),
                            on_open: move |picked: CapturedSpecies| selected.set(Some(picked)),
                        }
                    }
                }
                if captured_total > GALLERY_PREVIEW && !show_all() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| show_all.set(true),
                        "View all {captured_total} species \u{2192}"
                    }
                }
            }

            if !post.quest_reflection.is_empty() {
                div { class: "post-section post-section--reflection",
                    h4 { class: "post-section__heading",
                        span { "\u{1F4AD}" }
                        span { "Reflection" }
                    }
                    p { class: "reflection-quote", "\"{post.quest_reflection}\"" }
                }
            }

            if !post.location.is_empty() || when.is_some() {
                div { class: "post-meta",
                    if !post.location.is_empty() {
                        span { "\u{1F4CD} {post.location}" }
                    }
                    if let Some(when) = when {
                        span { "\u{1F4C5} {when}" }
                    }
                }
            }

            InteractionBar { post_id: post.header.id.clone() }

            if let Some(species) = selected() {
                SpeciesModal {
                    species,
                    on_close: move |_| selected.set(None),
                }
            }
        }
    }
}

#[component]
fn ObjectiveRow(objective: Objective) -> Element {
    let (class, mark) = if objective.is_completed {
        ("objective objective--done", "\u{2714}")
    } else {
        ("objective", "\u{25CB}")
    };

    rsx! {
        div { class: "{class}",
            span { class: "objective__mark", "{mark}" }
            span { "{objective.text}" }
        }
    }
}

/// Count against target with a bar, for one of flora or fauna
#[component]
fn TargetCard(label: String, count: u32, target: u32, tone: ProgressTone) -> Element {
    let modifier = match tone {
        ProgressTone::Fauna => "target-card--fauna",
        _ => "target-card--flora",
    };

    rsx! {
        div { class: "target-card {modifier}",
            span { class: "target-card__label", "{label}" }
            p { class: "target-card__count",
                "{count} "
                span { class: "target-card__target", "/ {target}" }
            }
            ProgressBar { percent: progress_percent(count, target), tone, show_label: true }
        }
    }
}

#[component]
fn SpeciesTile(species: CapturedSpecies, on_open: EventHandler<CapturedSpecies>) -> Element {
    let picked = species.clone();

    rsx! {
        div {
            class: "species-tile",
            onclick: move |_| on_open.call(picked.clone()),
            if !species.image_url.is_empty() {
                img { src: "{species.image_url}", alt: "{species.name}" }
            }
            div { class: "species-tile__caption",
                p { "{species.name}" }
                p { class: "scientific-name", "{species.scientific_name}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(n: usize) -> Vec<CapturedSpecies> {
        (0..n)
            .map(|i| CapturedSpecies {
                name: format!("Species {i}"),
                entry_id: format!("e{i}"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_gallery_preview_is_capped() {
        let all = captured(9);
        assert_eq!(visible_species(&all, false).len(), GALLERY_PREVIEW);
        assert_eq!(visible_species(&all, true).len(), 9);
    }

    #[test]
    fn test_small_gallery_is_shown_whole() {
        let all = captured(3);
        assert_eq!(visible_species(&all, false).len(), 3);
        assert!(visible_species(&[], false).is_empty());
    }

    #[test]
    fn test_objective_keys_unique_without_ids() {
        let objectives = vec![Objective::default(), Objective::default()];
        let keys: Vec<String> = objectives
            .iter()
            .enumerate()
            .map(|(i, o)| objective_key(o, i))
            .collect();
        assert_ne!(keys[0], keys[1]);
    }

    #[test]
    fn test_day_and_date() {
        assert_eq!(
            day_and_date("Saturday", "2025-03-01").as_deref(),
            Some("Saturday \u{2022} 2025-03-01")
        );
        assert_eq!(day_and_date("", "2025-03-01").as_deref(), Some("2025-03-01"));
        assert_eq!(day_and_date("Sunday", "").as_deref(), Some("Sunday"));
        assert_eq!(day_and_date("", ""), None);
    }
}
