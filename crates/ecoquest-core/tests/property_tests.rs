//! Property-based tests for normalization and interactions
//!
//! Uses proptest to check that normalization never fails and that the
//! interaction bookkeeping keeps its counters consistent.

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::json;

use ecoquest_core::{
    normalize_post, CommentOutcome, CommunityStore, InteractionController, MemoryStore, Post,
    PostId, PostKind, RawPost, UserId, ANONYMOUS_NAME,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any JSON scalar, including the wrong types for a column
fn json_scalar() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(|b| json!(b)),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(|f| json!(f)),
        ".{0,20}".prop_map(|s| json!(s)),
    ]
}

/// A posts row with arbitrary values in the loosely typed columns
fn raw_row() -> impl Strategy<Value = serde_json::Value> {
    (
        prop::option::of(prop_oneof![
            Just("species".to_string()),
            Just("quest".to_string()),
            Just("progress".to_string()),
            "[a-z]{0,10}",
        ]),
        json_scalar(),
        json_scalar(),
        json_scalar(),
        json_scalar(),
        json_scalar(),
    )
        .prop_map(|(tag, name, level, objectives, stats, created)| {
            json!({
                "id": "p",
                "user_id": "u",
                "post_type": tag,
                "user_name": name,
                "user_level": level,
                "objectives": objectives,
                "stats_data": stats,
                "created_at": created,
            })
        })
}

fn whitespace() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\r\n]{0,12}").expect("valid regex")
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any row the backend might hold normalizes without panicking
    #[test]
    fn normalize_never_fails(row in raw_row()) {
        let raw: RawPost = serde_json::from_value(row).unwrap();
        let tag = raw.post_type.clone();
        let post = normalize_post(raw);

        prop_assert_eq!(post.kind(), PostKind::from_tag(tag.as_deref()));
        prop_assert!(!post.header().author.display_name.is_empty());
        if let Post::Progress(progress) = &post {
            prop_assert!(progress.user_level >= 1);
            prop_assert!(progress.stats.exp_cap > 0);
        }
    }

    /// Empty display names always fall back to the anonymous name
    #[test]
    fn blank_name_is_anonymous(tag in prop::option::of("[a-z]{0,8}")) {
        let mut raw = RawPost::bare("p", "u");
        raw.post_type = tag;
        raw.user_name = Some(String::new());
        let post = normalize_post(raw);
        prop_assert_eq!(post.header().author.display_name.as_str(), ANONYMOUS_NAME);
    }

    /// Liking then unliking restores the loaded count and liked-state
    #[test]
    fn toggle_twice_is_identity(existing in 0usize..20, viewer_liked in any::<bool>()) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let store = Arc::new(MemoryStore::new());
            let post = PostId::new("p");
            for i in 0..existing {
                store.insert_like(&post, &UserId::new(format!("other-{i}"))).await.unwrap();
            }
            if viewer_liked {
                store.insert_like(&post, &UserId::new("me")).await.unwrap();
            }

            let ctrl = InteractionController::new(store.clone(), Some(UserId::new("me")));
            let mut state = ctrl.load(&post).await;
            let before = state.clone();

            ctrl.toggle_like(&mut state).await;
            ctrl.toggle_like(&mut state).await;

            assert_eq!(state.likes_count, before.likes_count);
            assert_eq!(state.like, before.like);
            assert_eq!(store.like_count(&post).await.unwrap(), before.likes_count);
        });
    }

    /// Whitespace-only comments never reach the store
    #[test]
    fn whitespace_comment_is_noop(text in whitespace()) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            let store = Arc::new(MemoryStore::new());
            let post = PostId::new("p");
            let ctrl = InteractionController::new(store.clone(), Some(UserId::new("me")));
            let mut state = ctrl.load(&post).await;

            assert_eq!(ctrl.submit_comment(&mut state, &text).await, CommentOutcome::Empty);
            assert!(state.comments.is_empty());
            assert!(store.comments(&post).await.unwrap().is_empty());
        });
    }
}
