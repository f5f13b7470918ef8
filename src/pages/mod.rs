//! Page components for EcoQuest Community.

mod feed;

pub use feed::FeedPage;
