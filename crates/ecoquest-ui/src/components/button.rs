//! Buttons used across the feed: submit, like/comment actions, sign-in
//! pills, quiet secondary actions and the modal close cross.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Leaf-green fill, for submitting a comment or confirming
    #[default]
    Primary,
    /// Bare icon followed by a count, in a card's interaction row
    Action,
    /// Rounded white button with a soft shadow
    Pill,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Action => "btn-action",
            ButtonVariant::Pill => "btn-pill",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Space-separated class attribute; empty extras are skipped
pub fn class_list(base: &str, active: bool, extra: Option<&str>) -> String {
    let mut out = base.to_string();
    if active {
        out.push_str(" is-active");
    }
    if let Some(extra) = extra.map(str::trim).filter(|e| !e.is_empty()) {
        out.push(' ');
        out.push_str(extra);
    }
    out
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// Pressed state of a toggle, such as a liked heart
    #[props(default = false)]
    pub active: bool,
    /// Tooltip text
    #[props(default)]
    pub title: Option<String>,
    #[props(default)]
    pub class: Option<String>,
}

/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Action,
///         active: liked,
///         onclick: on_like,
///         span { "{likes}" }
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = class_list(props.variant.class(), props.active, props.class.as_deref());
    let title = props.title.clone().unwrap_or_default();
    let handler = props.onclick;

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: props.disabled,
            title: "{title}",
            onclick: move |_| {
                if let Some(handler) = handler {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Square button holding a single glyph
#[component]
pub fn IconButton(
    onclick: EventHandler<()>,
    /// Read out by screen readers in place of the glyph
    label: String,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let class = class_list("icon-btn", false, class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": "{label}",
            onclick: move |_| onclick.call(()),
            {children}
        }
    }
}

/// The cross in a modal's corner
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        IconButton {
            onclick,
            label: "Close".to_string(),
            class: "close-btn".to_string(),
            "\u{2715}"
        }
    }
}
