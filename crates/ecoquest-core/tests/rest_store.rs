//! Wire-level tests for the REST store and auth client
//!
//! A local mock server stands in for the hosted project; each test checks
//! the request the client sends and how it reads the response.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ecoquest_core::{
    AuthClient, BackendConfig, CommunityError, CommunityStore, NewComment, PostId, RestStore,
    UserId,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn config(server: &MockServer) -> BackendConfig {
    BackendConfig {
        url: Url::parse(&server.uri()).unwrap(),
        anon_key: "anon-key".to_string(),
    }
}

fn store(server: &MockServer) -> RestStore {
    RestStore::new(&config(server)).unwrap()
}

// ============================================================================
// Read Tests
// ============================================================================

#[tokio::test]
async fn test_recent_posts_request_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/community_posts"))
        .and(query_param(
            "select",
            "*,users!community_posts_user_id_users_fkey(name,profile_image)",
        ))
        .and(query_param("order", "created_at.desc"))
        .and(query_param("limit", "20"))
        .and(header("apikey", "anon-key"))
        .and(header("authorization", "Bearer anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "p1",
                "user_id": "u1",
                "post_type": "quest",
                "created_at": "2025-03-01T10:00:00+00:00",
                "users": {"name": "Fern", "profile_image": null}
            },
            {"user_id": "missing-id"},
            {"id": "p2", "user_id": "u2", "latitude": "north"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = store(&server).recent_posts(20).await.unwrap();
    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2"]);
    assert_eq!(posts[0].users.as_ref().unwrap().name.as_deref(), Some("Fern"));
}

#[tokio::test]
async fn test_like_count_reads_content_range() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/rest/v1/community_post_likes"))
        .and(query_param("post_id", "eq.p1"))
        .and(header("prefer", "count=exact"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-range", "0-6/7"))
        .mount(&server)
        .await;

    let count = store(&server).like_count(&PostId::new("p1")).await.unwrap();
    assert_eq!(count, 7);
}

#[tokio::test]
async fn test_has_liked() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/community_post_likes"))
        .and(query_param("post_id", "eq.p1"))
        .and(query_param("user_id", "eq.me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 4}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/community_post_likes"))
        .and(query_param("post_id", "eq.p2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = store(&server);
    let me = UserId::new("me");
    assert!(store.has_liked(&PostId::new("p1"), &me).await.unwrap());
    assert!(!store.has_liked(&PostId::new("p2"), &me).await.unwrap());
}

#[tokio::test]
async fn test_comments_ordered_ascending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/community_post_comments"))
        .and(query_param("post_id", "eq.p1"))
        .and(query_param("order", "created_at.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "post_id": "p1", "user_id": "u", "content": "first", "created_at": "2025-03-01T10:00:00+00:00"},
            {"id": 2, "post_id": "p1", "user_id": "u", "content": "second", "created_at": "2025-03-01T11:00:00+00:00"}
        ])))
        .mount(&server)
        .await;

    let comments = store(&server).comments(&PostId::new("p1")).await.unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1].content, "second");
}

#[tokio::test]
async fn test_user_stats_missing_row() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/users"))
        .and(query_param("id", "eq.ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let stats = store(&server).user_stats(&UserId::new("ghost")).await.unwrap();
    assert!(stats.is_none());
}

// ============================================================================
// Write Tests
// ============================================================================

#[tokio::test]
async fn test_writes_use_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/community_post_likes"))
        .and(header("authorization", "Bearer viewer-jwt"))
        .and(header("apikey", "anon-key"))
        .and(body_json(json!({"post_id": "p1", "user_id": "me"})))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/community_post_likes"))
        .and(query_param("post_id", "eq.p1"))
        .and(query_param("user_id", "eq.me"))
        .and(header("authorization", "Bearer viewer-jwt"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let signed_in = store(&server).with_access_token("viewer-jwt");
    let post = PostId::new("p1");
    let me = UserId::new("me");
    signed_in.insert_like(&post, &me).await.unwrap();
    signed_in.delete_like(&post, &me).await.unwrap();
}

#[tokio::test]
async fn test_insert_comment_returns_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/community_post_comments"))
        .and(header("prefer", "return=representation"))
        .and(body_json(json!({"post_id": "p1", "user_id": "me", "content": "Nice!"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            {"id": 9, "post_id": "p1", "user_id": "me", "content": "Nice!", "created_at": "2025-03-01T10:00:00.5+00:00"}
        ])))
        .mount(&server)
        .await;

    let row = store(&server)
        .with_access_token("viewer-jwt")
        .insert_comment(NewComment {
            post_id: PostId::new("p1"),
            user_id: UserId::new("me"),
            content: "Nice!".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(row.id, 9);
    assert_eq!(row.content, "Nice!");
}

#[tokio::test]
async fn test_error_status_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/community_post_likes"))
        .respond_with(ResponseTemplate::new(409).set_body_string("duplicate key"))
        .mount(&server)
        .await;

    let err = store(&server)
        .insert_like(&PostId::new("p1"), &UserId::new("me"))
        .await
        .unwrap_err();
    match err {
        CommunityError::Status { status, body } => {
            assert_eq!(status, 409);
            assert_eq!(body, "duplicate key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_session_from_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .and(header("authorization", "Bearer tok123"))
        .and(header("apikey", "anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "user-1",
            "email": "fern@example.com",
            "user_metadata": {"full_name": "Fern Gully", "avatar_url": "https://img/f.png"}
        })))
        .mount(&server)
        .await;

    let auth = AuthClient::new(&config(&server)).unwrap();
    let session = auth
        .session_from_redirect("http://localhost:3000/#access_token=tok123&token_type=bearer")
        .await
        .unwrap();
    assert_eq!(session.user_id, UserId::new("user-1"));
    assert_eq!(session.access_token, "tok123");
    assert_eq!(session.display_name(), "Fern Gully");
    assert_eq!(session.avatar_url.as_deref(), Some("https://img/f.png"));
}

#[tokio::test]
async fn test_rejected_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid JWT"))
        .mount(&server)
        .await;

    let auth = AuthClient::new(&config(&server)).unwrap();
    let err = auth.session_from_token("expired").await.unwrap_err();
    assert!(matches!(err, CommunityError::Auth(_)));
}
