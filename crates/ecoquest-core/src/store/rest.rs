//! HTTP client for the hosted datastore's REST dialect.
//!
//! Filters are sent PostgREST-style (`column=eq.value`, `order=column.asc`),
//! authenticated with the project's anon key and, once a viewer signs in,
//! their access token.

use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_RANGE};
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use url::Url;

use super::{CommunityStore, COMMENTS_TABLE, LIKES_TABLE, POSTS_TABLE, USERS_TABLE};
use crate::config::BackendConfig;
use crate::error::{CommunityError, CommunityResult};
use crate::post::RawPost;
use crate::types::{Comment, NewComment, PostId, RawUserStats, UserId};

/// Embed of the author's profile through the posts → users foreign key
const AUTHOR_EMBED: &str = "*,users!community_posts_user_id_users_fkey(name,profile_image)";

#[derive(Serialize)]
struct LikeRow<'a> {
    post_id: &'a PostId,
    user_id: &'a UserId,
}

/// [`CommunityStore`] backed by the hosted REST endpoint
#[derive(Clone)]
pub struct RestStore {
    http: reqwest::Client,
    rest_url: Url,
    anon_key: String,
    access_token: Option<String>,
}

impl RestStore {
    /// Create a client for the project described by `config`
    pub fn new(config: &BackendConfig) -> CommunityResult<Self> {
        let rest_url = with_trailing_slash(config.url.clone()).join("rest/v1/")?;
        Ok(Self {
            http: reqwest::Client::new(),
            rest_url,
            anon_key: config.anon_key.clone(),
            access_token: None,
        })
    }

    /// A client that writes as the signed-in user
    pub fn with_access_token(&self, token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..self.clone()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    fn request(&self, method: Method, table: &str) -> CommunityResult<RequestBuilder> {
        let url = self.rest_url.join(table)?;
        let bearer = self.access_token.as_deref().unwrap_or(&self.anon_key);
        Ok(self
            .http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer))
    }

    async fn send(builder: RequestBuilder) -> CommunityResult<Response> {
        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CommunityError::Status { status, body });
        }
        Ok(response)
    }
}

#[async_trait]
impl CommunityStore for RestStore {
    async fn recent_posts(&self, limit: usize) -> CommunityResult<Vec<RawPost>> {
        let builder = self.request(Method::GET, POSTS_TABLE)?.query(&[
            ("select", AUTHOR_EMBED.to_string()),
            ("order", "created_at.desc".to_string()),
            ("limit", limit.to_string()),
        ]);
        let rows: Vec<serde_json::Value> = Self::send(builder).await?.json().await?;

        // A single undecodable row is dropped rather than blanking the feed
        let posts = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value::<RawPost>(row) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping undecodable post row");
                    None
                }
            })
            .collect();
        Ok(posts)
    }

    async fn like_count(&self, post_id: &PostId) -> CommunityResult<u64> {
        let builder = self
            .request(Method::HEAD, LIKES_TABLE)?
            .header("Prefer", "count=exact")
            .query(&[("select", "*".to_string()), ("post_id", eq(post_id))]);
        let response = Self::send(builder).await?;
        parse_content_range(response.headers().get(CONTENT_RANGE))
    }

    async fn has_liked(&self, post_id: &PostId, user_id: &UserId) -> CommunityResult<bool> {
        let builder = self.request(Method::GET, LIKES_TABLE)?.query(&[
            ("select", "id".to_string()),
            ("post_id", eq(post_id)),
            ("user_id", eq(user_id)),
            ("limit", "1".to_string()),
        ]);
        let rows: Vec<serde_json::Value> = Self::send(builder).await?.json().await?;
        Ok(!rows.is_empty())
    }

    async fn insert_like(&self, post_id: &PostId, user_id: &UserId) -> CommunityResult<()> {
        let builder = self
            .request(Method::POST, LIKES_TABLE)?
            .header("Prefer", "return=minimal")
            .json(&LikeRow { post_id, user_id });
        Self::send(builder).await?;
        Ok(())
    }

    async fn delete_like(&self, post_id: &PostId, user_id: &UserId) -> CommunityResult<()> {
        let builder = self
            .request(Method::DELETE, LIKES_TABLE)?
            .query(&[("post_id", eq(post_id)), ("user_id", eq(user_id))]);
        Self::send(builder).await?;
        Ok(())
    }

    async fn comments(&self, post_id: &PostId) -> CommunityResult<Vec<Comment>> {
        let builder = self.request(Method::GET, COMMENTS_TABLE)?.query(&[
            ("select", "*".to_string()),
            ("post_id", eq(post_id)),
            ("order", "created_at.asc".to_string()),
        ]);
        Ok(Self::send(builder).await?.json().await?)
    }

    async fn insert_comment(&self, comment: NewComment) -> CommunityResult<Comment> {
        let builder = self
            .request(Method::POST, COMMENTS_TABLE)?
            .header("Prefer", "return=representation")
            .json(&comment);
        let rows: Vec<Comment> = Self::send(builder).await?.json().await?;
        rows.into_iter().next().ok_or_else(|| {
            CommunityError::UnexpectedResponse("comment insert returned no row".to_string())
        })
    }

    async fn user_stats(&self, user_id: &UserId) -> CommunityResult<Option<RawUserStats>> {
        let builder = self.request(Method::GET, USERS_TABLE)?.query(&[
            ("select", "*".to_string()),
            ("id", eq(user_id)),
            ("limit", "1".to_string()),
        ]);
        let rows: Vec<RawUserStats> = Self::send(builder).await?.json().await?;
        Ok(rows.into_iter().next())
    }
}

fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{}", value)
}

/// Parse the total out of `Content-Range: 0-9/42` or `*/42`.
fn parse_content_range(header: Option<&HeaderValue>) -> CommunityResult<u64> {
    let raw = header
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| CommunityError::UnexpectedResponse("missing Content-Range".to_string()))?;
    raw.rsplit_once('/')
        .and_then(|(_, total)| total.trim().parse().ok())
        .ok_or_else(|| CommunityError::UnexpectedResponse(format!("bad Content-Range: {}", raw)))
}

pub(crate) fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_range() {
        let full = HeaderValue::from_static("0-4/5");
        assert_eq!(parse_content_range(Some(&full)).unwrap(), 5);

        let empty = HeaderValue::from_static("*/0");
        assert_eq!(parse_content_range(Some(&empty)).unwrap(), 0);

        let unknown = HeaderValue::from_static("0-4/*");
        assert!(parse_content_range(Some(&unknown)).is_err());
        assert!(parse_content_range(None).is_err());
    }

    #[test]
    fn test_rest_url_joins_under_project_path() {
        let config = BackendConfig {
            url: Url::parse("https://abc.example.co").unwrap(),
            anon_key: "anon".to_string(),
        };
        let store = RestStore::new(&config).unwrap();
        assert_eq!(store.rest_url.as_str(), "https://abc.example.co/rest/v1/");

        let proxied = BackendConfig {
            url: Url::parse("https://proxy.example/community").unwrap(),
            anon_key: "anon".to_string(),
        };
        let store = RestStore::new(&proxied).unwrap();
        assert_eq!(store.rest_url.as_str(), "https://proxy.example/community/rest/v1/");
    }

    #[test]
    fn test_with_access_token_keeps_anon_key() {
        let config = BackendConfig {
            url: Url::parse("https://abc.example.co").unwrap(),
            anon_key: "anon".to_string(),
        };
        let store = RestStore::new(&config).unwrap();
        assert!(!store.is_authenticated());
        let signed_in = store.with_access_token("jwt");
        assert!(signed_in.is_authenticated());
        assert_eq!(signed_in.anon_key, "anon");
    }
}
