//! Progress Bar Component
//!
//! Horizontal fill bar used for quest targets and experience.

use dioxus::prelude::*;

use crate::format::percent_label;

/// Fill color of a progress bar
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ProgressTone {
    /// Green, for flora targets
    #[default]
    Flora,
    /// Blue, for fauna targets
    Fauna,
    /// Shimmering amber, for experience
    Experience,
}

impl ProgressTone {
    pub fn class(&self) -> &'static str {
        match self {
            ProgressTone::Flora => "progress-fill--flora",
            ProgressTone::Fauna => "progress-fill--fauna",
            ProgressTone::Experience => "progress-fill--exp",
        }
    }
}

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Fill percentage; values outside 0..=100 are clamped
    pub percent: f64,
    #[props(default)]
    pub tone: ProgressTone,
    /// Show "NN% Complete" under the bar
    #[props(default = false)]
    pub show_label: bool,
}

/// Progress bar with an optional completion label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ProgressBar {
///         percent: progress_percent(stats.flora_count, stats.flora_target),
///         tone: ProgressTone::Flora,
///         show_label: true,
///     }
/// }
/// ```
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let percent = props.percent.clamp(0.0, 100.0);
    let tone_class = props.tone.class();

    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div {
                    class: "progress-fill {tone_class}",
                    style: "width: {percent}%;",
                }
            }
            if props.show_label {
                p { class: "progress-label", "{percent_label(percent)} Complete" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_tone_classes() {
        assert_eq!(ProgressTone::Flora.class(), "progress-fill--flora");
        assert_eq!(ProgressTone::Fauna.class(), "progress-fill--fauna");
        assert_eq!(ProgressTone::Experience.class(), "progress-fill--exp");
    }
}
