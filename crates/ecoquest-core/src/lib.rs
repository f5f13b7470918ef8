//! EcoQuest Community Core Library
//!
//! Post normalization, like/comment bookkeeping and datastore access for the
//! EcoQuest community feed.
//!
//! ## Overview
//!
//! Posts (species sightings, completed quests, progress milestones) are
//! produced by the EcoQuest field app and stored in a hosted datastore. This
//! crate reads them back, shapes each loosely typed row into one of three
//! strict display variants, and appends likes and comments for the signed-in
//! viewer.
//!
//! All datastore access goes through [`CommunityStore`], with a REST
//! implementation for the hosted project and an in-memory one for tests and
//! offline browsing.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use ecoquest_core::{Config, FeedService, InteractionController, RestStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let store = Arc::new(RestStore::new(&config.backend)?);
//!
//!     let feed = FeedService::new(store.clone()).recent().await;
//!     let interactions = InteractionController::new(store, None);
//!
//!     for post in &feed.posts {
//!         let state = interactions.load(post.id()).await;
//!         println!("{}: {} likes", post.header().author.display_name, state.likes_count);
//!     }
//!     Ok(())
//! }
//! ```

pub mod age;
pub mod auth;
pub mod config;
pub mod error;
pub mod feed;
pub mod interactions;
pub mod logging;
pub mod normalize;
pub mod post;
pub mod store;
pub mod types;

// Re-exports
pub use auth::{AuthClient, Session};
pub use config::{BackendConfig, Config};
pub use error::{CommunityError, CommunityResult};
pub use feed::{Feed, FeedService, DEFAULT_FEED_LIMIT};
pub use interactions::{
    CommentOutcome, InteractionController, InteractionState, LikeOutcome, LikeStatus,
};
pub use normalize::{normalize_post, normalize_stats, ANONYMOUS_NAME};
pub use post::{Post, PostKind, RawPost};
pub use store::{CommunityStore, MemoryStore, RestStore, DEMO_VIEWER};
pub use types::*;
