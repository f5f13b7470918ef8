//! Avatar Component
//!
//! Round profile picture, or the first letter of the name on a leaf gradient
//! when there is no picture.

use dioxus::prelude::*;

/// Rendered size of an avatar
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum AvatarSize {
    /// Comment rows and menus
    Small,
    /// Card headers
    #[default]
    Medium,
    /// Header auth button
    Large,
}

impl AvatarSize {
    pub fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar--sm",
            AvatarSize::Medium => "avatar--md",
            AvatarSize::Large => "avatar--lg",
        }
    }
}

/// Properties for the Avatar component
#[derive(Clone, PartialEq, Props)]
pub struct AvatarProps {
    /// Profile image URL, if the user has one
    #[props(default)]
    pub image_url: Option<String>,
    /// Name used for alt text
    pub name: String,
    /// Letter shown when there is no image
    pub initial: String,
    #[props(default)]
    pub size: AvatarSize,
}

/// Profile picture with a letter fallback
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Avatar {
///         image_url: author.avatar_url.clone(),
///         name: author.display_name.clone(),
///         initial: author.initial(),
///     }
/// }
/// ```
#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let size_class = props.size.class();

    rsx! {
        if let Some(url) = props.image_url.as_ref().filter(|u| !u.is_empty()) {
            img {
                class: "avatar avatar--image {size_class}",
                src: "{url}",
                alt: "{props.name}",
            }
        } else {
            div { class: "avatar avatar--initial {size_class}",
                span { "{props.initial}" }
            }
        }
    }
}
