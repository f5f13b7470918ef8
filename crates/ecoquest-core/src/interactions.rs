//! Likes and comments for a single post card.
//!
//! [`InteractionState`] is plain data the UI can clone into a signal;
//! [`InteractionController`] performs the store calls and applies their
//! effects to a state. Counters are updated optimistically: a failed write is
//! logged and the local state is left as if it had succeeded.

use std::sync::Arc;

use crate::error::CommunityError;
use crate::store::CommunityStore;
use crate::types::{Comment, NewComment, PostId, UserId};

/// Whether the viewer has liked the post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikeStatus {
    /// Not loaded yet, or no signed-in viewer
    #[default]
    Unknown,
    Liked,
    NotLiked,
}

/// Local like/comment bookkeeping for one post
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    pub post_id: PostId,
    pub likes_count: u64,
    pub like: LikeStatus,
    pub comments: Vec<Comment>,
    pub loaded: bool,
}

impl InteractionState {
    pub fn new(post_id: PostId) -> Self {
        Self {
            post_id,
            likes_count: 0,
            like: LikeStatus::Unknown,
            comments: Vec::new(),
            loaded: false,
        }
    }

    pub fn is_liked(&self) -> bool {
        self.like == LikeStatus::Liked
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    fn record_like(&mut self) {
        self.like = LikeStatus::Liked;
        self.likes_count = self.likes_count.saturating_add(1);
    }

    fn record_unlike(&mut self) {
        self.like = LikeStatus::NotLiked;
        self.likes_count = self.likes_count.saturating_sub(1);
    }
}

/// Result of [`InteractionController::toggle_like`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked,
    Unliked,
    /// No viewer; nothing was written
    SignInRequired,
    /// The viewer's current like could not be read; nothing was written
    Failed,
}

/// Result of [`InteractionController::submit_comment`]
#[derive(Debug, Clone, PartialEq)]
pub enum CommentOutcome {
    /// The store accepted the comment; it has been appended locally
    Posted(Comment),
    /// Empty or whitespace-only text; nothing happened
    Empty,
    /// No viewer; nothing was written
    SignInRequired,
    /// The store rejected the write; local state is unchanged
    Failed,
}

/// Performs like/comment calls on behalf of the current viewer
#[derive(Clone)]
pub struct InteractionController {
    store: Arc<dyn CommunityStore>,
    viewer: Option<UserId>,
}

impl InteractionController {
    pub fn new(store: Arc<dyn CommunityStore>, viewer: Option<UserId>) -> Self {
        Self { store, viewer }
    }

    pub fn viewer(&self) -> Option<&UserId> {
        self.viewer.as_ref()
    }

    /// Fetch the like count, the viewer's like and the comment thread.
    ///
    /// Each read fails independently and falls back to its empty value.
    pub async fn load(&self, post_id: &PostId) -> InteractionState {
        let mut state = InteractionState::new(post_id.clone());

        state.likes_count = self.store.like_count(post_id).await.unwrap_or_else(|e| {
            tracing::error!(%post_id, error = %e, "failed to count likes");
            0
        });

        if let Some(viewer) = &self.viewer {
            state.like = match self.store.has_liked(post_id, viewer).await {
                Ok(true) => LikeStatus::Liked,
                Ok(false) => LikeStatus::NotLiked,
                Err(e) => {
                    tracing::error!(%post_id, error = %e, "failed to check viewer like");
                    LikeStatus::Unknown
                }
            };
        }

        state.comments = self.store.comments(post_id).await.unwrap_or_else(|e| {
            tracing::error!(%post_id, error = %e, "failed to fetch comments");
            Vec::new()
        });

        state.loaded = true;
        state
    }

    /// Flip the viewer's like, updating the counter without re-fetching.
    ///
    /// A state whose like status is still [`LikeStatus::Unknown`] is resolved
    /// against the store first; if that read fails nothing is written.
    pub async fn toggle_like(&self, state: &mut InteractionState) -> LikeOutcome {
        let Some(viewer) = &self.viewer else {
            return LikeOutcome::SignInRequired;
        };
        let post_id = state.post_id.clone();

        let liked = match state.like {
            LikeStatus::Liked => true,
            LikeStatus::NotLiked => false,
            LikeStatus::Unknown => match self.store.has_liked(&post_id, viewer).await {
                Ok(liked) => liked,
                Err(e) => {
                    tracing::error!(%post_id, error = %e, "failed to check viewer like");
                    return LikeOutcome::Failed;
                }
            },
        };

        if liked {
            if let Err(e) = self.store.delete_like(&post_id, viewer).await {
                tracing::error!(%post_id, error = %e, "failed to remove like");
            }
            state.record_unlike();
            return LikeOutcome::Unliked;
        }

        match self.store.insert_like(&post_id, viewer).await {
            Ok(()) => state.record_like(),
            // The row already exists, so the loaded count includes it
            Err(CommunityError::Status { status: 409, .. }) => {
                tracing::warn!(%post_id, "like already recorded");
                state.like = LikeStatus::Liked;
            }
            Err(e) => {
                tracing::error!(%post_id, error = %e, "failed to add like");
                state.record_like();
            }
        }
        LikeOutcome::Liked
    }

    /// Append a comment; empty text never reaches the store.
    pub async fn submit_comment(&self, state: &mut InteractionState, text: &str) -> CommentOutcome {
        if text.trim().is_empty() {
            return CommentOutcome::Empty;
        }
        let Some(viewer) = &self.viewer else {
            return CommentOutcome::SignInRequired;
        };

        let new_comment = NewComment {
            post_id: state.post_id.clone(),
            user_id: viewer.clone(),
            content: text.to_string(),
        };
        match self.store.insert_comment(new_comment).await {
            Ok(comment) => {
                state.comments.push(comment.clone());
                CommentOutcome::Posted(comment)
            }
            Err(e) => {
                tracing::error!(post_id = %state.post_id, error = %e, "failed to post comment");
                CommentOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn controller(store: Arc<MemoryStore>, viewer: Option<&str>) -> InteractionController {
        InteractionController::new(store, viewer.map(UserId::new))
    }

    #[tokio::test]
    async fn test_load_without_viewer_leaves_like_unknown() {
        let store = Arc::new(MemoryStore::new());
        let post = PostId::new("p");
        store.insert_like(&post, &UserId::new("someone")).await.unwrap();

        let state = controller(store, None).load(&post).await;
        assert!(state.loaded);
        assert_eq!(state.likes_count, 1);
        assert_eq!(state.like, LikeStatus::Unknown);
        assert!(state.comments.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let store = Arc::new(MemoryStore::new());
        let post = PostId::new("p");
        store.insert_like(&post, &UserId::new("someone")).await.unwrap();

        let ctrl = controller(store.clone(), Some("me"));
        let mut state = ctrl.load(&post).await;
        let before = state.clone();

        assert_eq!(ctrl.toggle_like(&mut state).await, LikeOutcome::Liked);
        assert_eq!(state.likes_count, 2);
        assert!(state.is_liked());

        assert_eq!(ctrl.toggle_like(&mut state).await, LikeOutcome::Unliked);
        assert_eq!(state.likes_count, before.likes_count);
        assert_eq!(state.like, LikeStatus::NotLiked);
        assert_eq!(store.like_count(&post).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_toggle_requires_viewer() {
        let store = Arc::new(MemoryStore::new());
        let ctrl = controller(store.clone(), None);
        let mut state = ctrl.load(&PostId::new("p")).await;

        assert_eq!(ctrl.toggle_like(&mut state).await, LikeOutcome::SignInRequired);
        assert_eq!(state.likes_count, 0);
        assert_eq!(store.total_likes(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_comment_is_noop() {
        let store = Arc::new(MemoryStore::new());
        let post = PostId::new("p");
        let ctrl = controller(store.clone(), Some("me"));
        let mut state = ctrl.load(&post).await;
        let before = state.clone();

        for text in ["", "   ", "\n\t "] {
            assert_eq!(ctrl.submit_comment(&mut state, text).await, CommentOutcome::Empty);
        }
        assert_eq!(state, before);
        assert!(store.comments(&post).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_comment_appends_server_row() {
        let store = Arc::new(MemoryStore::new());
        let post = PostId::new("p");
        let ctrl = controller(store, Some("me"));
        let mut state = ctrl.load(&post).await;

        let CommentOutcome::Posted(row) = ctrl.submit_comment(&mut state, "Lovely shot!").await
        else {
            panic!("expected comment to post");
        };
        assert_eq!(row.content, "Lovely shot!");
        assert_eq!(row.user_id, UserId::new("me"));
        assert_eq!(state.comments, vec![row]);
        assert_eq!(state.comment_count(), 1);
    }

    #[tokio::test]
    async fn test_comment_requires_viewer() {
        let store = Arc::new(MemoryStore::new());
        let ctrl = controller(store, None);
        let mut state = InteractionState::new(PostId::new("p"));
        assert_eq!(
            ctrl.submit_comment(&mut state, "hello").await,
            CommentOutcome::SignInRequired
        );
        assert!(state.comments.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_from_unknown_checks_existing_like() {
        let store = Arc::new(MemoryStore::new());
        let post = PostId::new("p");
        store.insert_like(&post, &UserId::new("me")).await.unwrap();

        // Loaded while signed out, then toggled after signing in
        let mut state = controller(store.clone(), None).load(&post).await;
        assert_eq!(state.like, LikeStatus::Unknown);
        assert_eq!(state.likes_count, 1);

        let ctrl = controller(store.clone(), Some("me"));
        assert_eq!(ctrl.toggle_like(&mut state).await, LikeOutcome::Unliked);
        assert_eq!(state.likes_count, 0);
        assert_eq!(state.like, LikeStatus::NotLiked);
        assert_eq!(store.like_count(&post).await.unwrap(), state.likes_count);
    }

    #[tokio::test]
    async fn test_duplicate_like_is_not_counted_twice() {
        let store = Arc::new(MemoryStore::new());
        let post = PostId::new("p");
        let ctrl = controller(store.clone(), Some("me"));
        let mut state = ctrl.load(&post).await;

        // Liked elsewhere after this card loaded
        store.insert_like(&post, &UserId::new("me")).await.unwrap();
        state.likes_count = 1;

        assert_eq!(ctrl.toggle_like(&mut state).await, LikeOutcome::Liked);
        assert!(state.is_liked());
        assert_eq!(state.likes_count, 1);
        assert_eq!(store.like_count(&post).await.unwrap(), 1);
    }

    #[test]
    fn test_unlike_never_goes_negative() {
        let mut state = InteractionState::new(PostId::new("p"));
        state.like = LikeStatus::Liked;
        state.record_unlike();
        assert_eq!(state.likes_count, 0);
    }
}
