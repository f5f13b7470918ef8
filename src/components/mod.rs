//! UI components for EcoQuest Community.

pub mod cards;
mod comment_section;
mod header;
mod interaction_bar;
mod sign_in_prompt;

pub use comment_section::CommentSection;
pub use header::Header;
pub use interaction_bar::InteractionBar;
pub use sign_in_prompt::SignInPrompt;
