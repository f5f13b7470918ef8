//! Session handoff with the hosted identity service.
//!
//! The app never handles credentials: it sends the viewer to the provider's
//! OAuth flow, then turns the access token the flow hands back into a
//! [`Session`] by asking the identity service who it belongs to.

use serde::Deserialize;
use url::Url;

use crate::config::BackendConfig;
use crate::error::{CommunityError, CommunityResult};
use crate::store::rest::with_trailing_slash;
use crate::types::UserId;

/// OAuth provider used by the sign-in button
pub const DEFAULT_PROVIDER: &str = "google";

/// A signed-in viewer
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: UserId,
    pub access_token: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
}

impl Session {
    /// Letter shown in the avatar bubble: full name, then email, then `U`
    pub fn initial(&self) -> String {
        self.full_name
            .as_deref()
            .and_then(|n| n.chars().next())
            .or_else(|| self.email.as_deref().and_then(|e| e.chars().next()))
            .unwrap_or('U')
            .to_uppercase()
            .collect()
    }

    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("User")
    }
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AuthUser {
    id: UserId,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: Option<UserMetadata>,
}

/// Client for the identity service's `/auth/v1` endpoints
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    auth_url: Url,
    anon_key: String,
}

impl AuthClient {
    pub fn new(config: &BackendConfig) -> CommunityResult<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            auth_url: with_trailing_slash(config.url.clone()).join("auth/v1/")?,
            anon_key: config.anon_key.clone(),
        })
    }

    /// URL that starts the OAuth flow for `provider`
    pub fn sign_in_url(&self, provider: &str, redirect_to: Option<&str>) -> CommunityResult<Url> {
        let mut url = self.auth_url.join("authorize")?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("provider", provider);
            if let Some(redirect) = redirect_to {
                query.append_pair("redirect_to", redirect);
            }
        }
        Ok(url)
    }

    /// Resolve an access token to the user it was issued for
    pub async fn session_from_token(&self, access_token: &str) -> CommunityResult<Session> {
        let url = self.auth_url.join("user")?;
        let response = self
            .http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CommunityError::Auth(format!(
                "token rejected ({}): {}",
                status, body
            )));
        }

        let user: AuthUser = response.json().await?;
        let metadata = user.user_metadata.unwrap_or_default();
        tracing::info!(user_id = %user.id, "session established");
        Ok(Session {
            user_id: user.id,
            access_token: access_token.to_string(),
            email: user.email,
            full_name: metadata.full_name,
            avatar_url: metadata.avatar_url,
        })
    }

    /// Resolve the URL the OAuth flow redirected to, or a bare access token
    pub async fn session_from_redirect(&self, redirect: &str) -> CommunityResult<Session> {
        let token = access_token_from_redirect(redirect).ok_or_else(|| {
            CommunityError::Auth("no access_token in the pasted redirect".to_string())
        })?;
        self.session_from_token(&token).await
    }

    /// Revoke the session's refresh tokens
    pub async fn sign_out(&self, session: &Session) -> CommunityResult<()> {
        let url = self.auth_url.join("logout")?;
        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(CommunityError::Status {
                status: response.status().as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }
        Ok(())
    }
}

/// Pull `access_token` out of an OAuth redirect.
///
/// The implicit flow puts it in the fragment; some proxies move it into the
/// query. Input without a scheme is taken to be the token itself.
pub fn access_token_from_redirect(redirect: &str) -> Option<String> {
    let trimmed = redirect.trim();
    if trimmed.is_empty() {
        return None;
    }

    let Ok(url) = Url::parse(trimmed) else {
        return (!trimmed.contains(char::is_whitespace)).then(|| trimmed.to_string());
    };

    let from_pairs = |pairs: url::form_urlencoded::Parse<'_>| {
        pairs
            .into_iter()
            .find(|(k, _)| k == "access_token")
            .map(|(_, v)| v.into_owned())
            .filter(|v| !v.is_empty())
    };

    url.fragment()
        .and_then(|fragment| from_pairs(url::form_urlencoded::parse(fragment.as_bytes())))
        .or_else(|| from_pairs(url.query_pairs()))
}
