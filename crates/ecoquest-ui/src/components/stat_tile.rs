//! Stat Tile Component
//!
//! One cell of the achievements grid on progress posts.

use dioxus::prelude::*;

/// Accent color of a stat tile
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum StatAccent {
    #[default]
    Green,
    Blue,
    Amber,
    Purple,
}

impl StatAccent {
    pub fn class(&self) -> &'static str {
        match self {
            StatAccent::Green => "stat-tile--green",
            StatAccent::Blue => "stat-tile--blue",
            StatAccent::Amber => "stat-tile--amber",
            StatAccent::Purple => "stat-tile--purple",
        }
    }
}

#[component]
pub fn StatTile(
    /// Uppercase label above the number
    label: String,
    /// The number itself, preformatted
    value: String,
    /// Small caption under the number
    caption: String,
    /// Emoji or glyph shown next to the label
    #[props(default = String::new())]
    icon: String,
    #[props(default)]
    accent: StatAccent,
) -> Element {
    let accent_class = accent.class();

    rsx! {
        div { class: "stat-tile {accent_class}",
            div { class: "stat-tile__head",
                if !icon.is_empty() {
                    span { class: "stat-tile__icon", "{icon}" }
                }
                span { class: "stat-tile__label", "{label}" }
            }
            p { class: "stat-tile__value", "{value}" }
            p { class: "stat-tile__caption", "{caption}" }
        }
    }
}
