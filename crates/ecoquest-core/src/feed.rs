//! The community feed: newest posts, normalized for display.

use std::sync::Arc;

use crate::normalize::{normalize_posts, normalize_stats};
use crate::post::Post;
use crate::store::CommunityStore;
use crate::types::{UserId, UserStats};

/// Number of posts shown on the feed
pub const DEFAULT_FEED_LIMIT: usize = 20;

/// A fetched page of posts, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Feed {
    pub posts: Vec<Post>,
}

impl Feed {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }
}

/// One-shot reads backing the feed page and its header
#[derive(Clone)]
pub struct FeedService {
    store: Arc<dyn CommunityStore>,
    limit: usize,
}

impl FeedService {
    pub fn new(store: Arc<dyn CommunityStore>) -> Self {
        Self {
            store,
            limit: DEFAULT_FEED_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fetch and normalize the newest posts. A failed fetch yields an empty feed.
    pub async fn recent(&self) -> Feed {
        tracing::debug!(limit = self.limit, "fetching posts");
        match self.store.recent_posts(self.limit).await {
            Ok(rows) => {
                tracing::info!("Found {} posts", rows.len());
                Feed {
                    posts: normalize_posts(rows),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching posts");
                Feed::default()
            }
        }
    }

    /// Level progress for the header; `None` when the viewer has no stats row
    /// or the read fails.
    pub async fn viewer_stats(&self, user_id: &UserId) -> Option<UserStats> {
        match self.store.user_stats(user_id).await {
            Ok(row) => row.map(normalize_stats),
            Err(e) => {
                tracing::error!(%user_id, error = %e, "failed to fetch user stats");
                None
            }
        }
    }
}
