//! Species Detail Modal
//!
//! Full-size view of one species captured during a quest.

use dioxus::prelude::*;
use ecoquest_core::post::CapturedSpecies;
use ecoquest_ui::format::conservation_class;
use ecoquest_ui::CloseButton;

/// Identification confidence, stored either as a fraction or a percentage
fn confidence_label(confidence: f64) -> Option<String> {
    if !confidence.is_finite() || confidence <= 0.0 {
        return None;
    }
    let percent = if confidence <= 1.0 {
        confidence * 100.0
    } else {
        confidence.min(100.0)
    };
    Some(format!("{percent:.0}% match"))
}

#[component]
pub fn SpeciesModal(species: CapturedSpecies, on_close: EventHandler<()>) -> Element {
    let badge = conservation_class(&species.conservation_status);
    let confidence = confidence_label(species.confidence);
    let kind = [species.species_type.as_str(), species.category.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" \u{00B7} ");

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal__hero",
                    if !species.image_url.is_empty() {
                        img { src: "{species.image_url}", alt: "{species.name}" }
                    }
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
                div { class: "modal__body",
                    h3 { class: "modal__title", "{species.name}" }
                    p { class: "scientific-name", "{species.scientific_name}" }
                    if !species.conservation_status.is_empty() {
                        span { class: "conservation {badge}", "{species.conservation_status}" }
                    }
                    if !kind.is_empty() {
                        p { class: "post-author__activity", "{kind}" }
                    }
                    if let Some(confidence) = confidence {
                        p { class: "post-author__activity", "{confidence}" }
                    }
                    if !species.location.is_empty() {
                        p { class: "post-author__activity", "\u{1F4CD} {species.location}" }
                    }
                    if !species.capture_date.is_empty() {
                        p { class: "post-author__activity", "\u{1F4C5} {species.capture_date}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_label() {
        assert_eq!(confidence_label(0.0), None);
        assert_eq!(confidence_label(f64::NAN), None);
        assert_eq!(confidence_label(0.87).as_deref(), Some("87% match"));
        assert_eq!(confidence_label(92.4).as_deref(), Some("92% match"));
        assert_eq!(confidence_label(250.0).as_deref(), Some("100% match"));
    }
}
