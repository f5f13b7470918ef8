//! Shared state for EcoQuest Community.
//!
//! `App` provides the backend, the viewer's session and the sign-in prompt
//! as contexts; components reach them through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let backend = use_backend();
//! let session = use_session();
//!
//! let controller = backend.read().interactions(session.read().as_ref());
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use ecoquest_core::{
    AuthClient, CommunityResult, CommunityStore, Config, FeedService, InteractionController,
    MemoryStore, RestStore, Session, UserId, UserStats, DEMO_VIEWER,
};

/// Where posts, likes and comments are read from and written to.
#[derive(Clone)]
pub struct Backend {
    store: Arc<dyn CommunityStore>,
    /// Kept so a signed-in viewer gets a store carrying their token
    rest: Option<RestStore>,
    /// `None` in demo mode
    pub auth: Option<AuthClient>,
    pub feed_limit: usize,
    pub redirect_url: Option<String>,
    /// Token from the environment, resolved to a session at startup
    pub initial_token: Option<String>,
}

impl Backend {
    /// Connect to the hosted project described by `config`
    pub fn remote(config: &Config) -> CommunityResult<Self> {
        let rest = RestStore::new(&config.backend)?;
        Ok(Self {
            store: Arc::new(rest.clone()),
            rest: Some(rest),
            auth: Some(AuthClient::new(&config.backend)?),
            feed_limit: config.feed_limit,
            redirect_url: config.redirect_url.clone(),
            initial_token: config.access_token.clone(),
        })
    }

    /// Browse a seeded in-memory store
    pub fn demo(feed_limit: usize) -> Self {
        Self {
            store: Arc::new(MemoryStore::demo()),
            rest: None,
            auth: None,
            feed_limit,
            redirect_url: None,
            initial_token: None,
        }
    }

    pub fn is_demo(&self) -> bool {
        self.auth.is_none()
    }

    /// The session demo mode signs in as
    pub fn demo_session() -> Session {
        Session {
            user_id: UserId::new(DEMO_VIEWER),
            access_token: "demo".to_string(),
            email: Some("rowan@ecoquest.demo".to_string()),
            full_name: Some("Ranger Rowan".to_string()),
            avatar_url: None,
        }
    }

    /// Store that writes as the session's user, when there is one
    pub fn store_for(&self, session: Option<&Session>) -> Arc<dyn CommunityStore> {
        match (&self.rest, session) {
            (Some(rest), Some(session)) => Arc::new(rest.with_access_token(&session.access_token)),
            _ => self.store.clone(),
        }
    }

    pub fn feed(&self, session: Option<&Session>) -> FeedService {
        FeedService::new(self.store_for(session)).with_limit(self.feed_limit)
    }

    /// Header stats of the signed-in viewer, read with their token
    pub async fn viewer_stats(&self, session: Option<&Session>) -> Option<UserStats> {
        let session = session?;
        self.feed(Some(session)).viewer_stats(&session.user_id).await
    }

    pub fn interactions(&self, session: Option<&Session>) -> InteractionController {
        InteractionController::new(
            self.store_for(session),
            session.map(|s| s.user_id.clone()),
        )
    }
}

/// Why the sign-in prompt was opened
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInReason {
    /// A signed-out viewer pressed a like button
    Like,
    /// A signed-out viewer tried to comment
    Comment,
    /// The header's sign-in button
    Header,
}

impl SignInReason {
    /// Question shown before starting the sign-in flow, if any
    pub fn question(&self) -> Option<&'static str> {
        match self {
            SignInReason::Like => Some("You need to sign in to like posts. Sign in now?"),
            SignInReason::Comment => Some("You need to sign in to comment. Sign in now?"),
            SignInReason::Header => None,
        }
    }
}

/// Hook to access the backend.
pub fn use_backend() -> Signal<Backend> {
    use_context::<Signal<Backend>>()
}

/// Hook to access the viewer's session; `None` while signed out.
pub fn use_session() -> Signal<Option<Session>> {
    use_context::<Signal<Option<Session>>>()
}

/// Hook to check whether a stored session is still being resolved.
pub fn use_auth_loading() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to open or close the sign-in prompt.
pub fn use_sign_in_prompt() -> Signal<Option<SignInReason>> {
    use_context::<Signal<Option<SignInReason>>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoquest_core::{LikeOutcome, PostId};

    #[test]
    fn test_prompt_questions() {
        assert_eq!(
            SignInReason::Like.question(),
            Some("You need to sign in to like posts. Sign in now?")
        );
        assert_eq!(
            SignInReason::Comment.question(),
            Some("You need to sign in to comment. Sign in now?")
        );
        assert_eq!(SignInReason::Header.question(), None);
    }

    #[tokio::test]
    async fn test_demo_backend_likes_as_session_user() {
        let backend = Backend::demo(5);
        assert!(backend.is_demo());

        let session = Backend::demo_session();
        let ctrl = backend.interactions(Some(&session));
        assert_eq!(ctrl.viewer(), Some(&UserId::new(DEMO_VIEWER)));

        let mut state = ctrl.load(&PostId::new("demo-species")).await;
        assert_eq!(ctrl.toggle_like(&mut state).await, LikeOutcome::Liked);

        let anonymous = backend.interactions(None);
        let reloaded = anonymous.load(&PostId::new("demo-species")).await;
        assert_eq!(reloaded.likes_count, 1);
    }

    #[tokio::test]
    async fn test_viewer_stats_need_a_session() {
        let backend = Backend::demo(5);
        assert_eq!(backend.viewer_stats(None).await, None);

        let stats = backend
            .viewer_stats(Some(&Backend::demo_session()))
            .await
            .expect("demo ranger has stats");
        assert_eq!(stats.level, 7);
        assert_eq!(stats.exp, 40);
    }

    #[tokio::test]
    async fn test_like_after_sign_in_without_reload() {
        let backend = Backend::demo(5);
        let session = Backend::demo_session();
        let post = PostId::new("demo-species");

        let ctrl = backend.interactions(Some(&session));
        let mut fresh = ctrl.load(&post).await;
        assert_eq!(ctrl.toggle_like(&mut fresh).await, LikeOutcome::Liked);

        // Card loaded while signed out, clicked once signed in
        let mut stale = backend.interactions(None).load(&post).await;
        assert_eq!(stale.likes_count, 1);

        assert_eq!(ctrl.toggle_like(&mut stale).await, LikeOutcome::Unliked);
        assert_eq!(stale.likes_count, 0);
        assert_eq!(backend.interactions(None).load(&post).await.likes_count, 0);
    }

    #[tokio::test]
    async fn test_demo_feed_respects_limit() {
        let feed = Backend::demo(2).feed(None).recent().await;
        assert_eq!(feed.len(), 2);
    }
}
