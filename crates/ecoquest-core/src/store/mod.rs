//! Data access for the hosted community datastore.
//!
//! Everything the app reads or writes goes through [`CommunityStore`], so the
//! feed and the interaction controller can run against the hosted backend
//! ([`RestStore`]) or an in-process one ([`MemoryStore`]).

pub mod memory;
pub mod rest;

use async_trait::async_trait;

use crate::error::CommunityResult;
use crate::post::RawPost;
use crate::types::{Comment, NewComment, PostId, RawUserStats, UserId};

pub use memory::{MemoryStore, DEMO_VIEWER};
pub use rest::RestStore;

/// Table holding the posts
pub const POSTS_TABLE: &str = "community_posts";
/// Table holding one row per (post, user) like
pub const LIKES_TABLE: &str = "community_post_likes";
/// Table holding comments
pub const COMMENTS_TABLE: &str = "community_post_comments";
/// Table holding profile and level data
pub const USERS_TABLE: &str = "users";

/// Reads and appends against the posts, likes, comments and users tables.
#[async_trait]
pub trait CommunityStore: Send + Sync {
    /// Newest posts first, with the author's name and profile image joined in.
    async fn recent_posts(&self, limit: usize) -> CommunityResult<Vec<RawPost>>;

    /// Number of likes on a post.
    async fn like_count(&self, post_id: &PostId) -> CommunityResult<u64>;

    /// Whether `user_id` has a like on the post.
    async fn has_liked(&self, post_id: &PostId, user_id: &UserId) -> CommunityResult<bool>;

    async fn insert_like(&self, post_id: &PostId, user_id: &UserId) -> CommunityResult<()>;

    async fn delete_like(&self, post_id: &PostId, user_id: &UserId) -> CommunityResult<()>;

    /// Comments on a post, oldest first.
    async fn comments(&self, post_id: &PostId) -> CommunityResult<Vec<Comment>>;

    /// Append a comment and return the row the store created.
    async fn insert_comment(&self, comment: NewComment) -> CommunityResult<Comment>;

    /// The `users` row for a viewer, if one exists.
    async fn user_stats(&self, user_id: &UserId) -> CommunityResult<Option<RawUserStats>>;
}
