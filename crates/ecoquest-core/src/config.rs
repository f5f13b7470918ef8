//! Configuration management for EcoQuest Community
//!
//! Loads configuration from environment variables. Binaries load a `.env`
//! file first, so the producing app's `NEXT_PUBLIC_*` variables work as-is.

use url::Url;

use crate::error::{CommunityError, CommunityResult};
use crate::feed::DEFAULT_FEED_LIMIT;

/// Connection settings for the hosted project
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    /// Project base URL (e.g. "https://abc.supabase.co")
    pub url: Url,
    /// Public anon key sent with every request
    pub anon_key: String,
}

/// Main application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub backend: BackendConfig,
    /// Access token of an already signed-in viewer
    pub access_token: Option<String>,
    /// Number of posts fetched for the feed
    pub feed_limit: usize,
    /// Where the OAuth provider sends the viewer back after sign-in
    pub redirect_url: Option<String>,
}

const URL_VARS: [&str; 2] = ["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"];
const KEY_VARS: [&str; 2] = ["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"];

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> CommunityResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from the environment, letting explicitly passed values win.
    ///
    /// Binaries pass their command line flags here keyed by the variable
    /// they stand in for; `None` falls through to the environment.
    pub fn from_env_with_overrides(overrides: &[(&str, Option<String>)]) -> CommunityResult<Self> {
        Self::from_lookup(|key| {
            overrides
                .iter()
                .find(|(name, value)| *name == key && value.is_some())
                .and_then(|(_, value)| value.clone())
                .or_else(|| std::env::var(key).ok())
        })
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CommunityResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |keys: &[&str]| {
            keys.iter()
                .find_map(|k| lookup(k).filter(|v| !v.trim().is_empty()))
        };

        let url = first(&URL_VARS[..]).ok_or_else(|| {
            CommunityError::Config(format!("set {} to the project URL", URL_VARS[0]))
        })?;
        let anon_key = first(&KEY_VARS[..]).ok_or_else(|| {
            CommunityError::Config(format!("set {} to the project's anon key", KEY_VARS[0]))
        })?;

        let feed_limit = match lookup("ECOQUEST_FEED_LIMIT") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                CommunityError::Config(format!("ECOQUEST_FEED_LIMIT is not a number: {}", raw))
            })?,
            None => DEFAULT_FEED_LIMIT,
        };

        Ok(Self {
            backend: BackendConfig {
                url: Url::parse(url.trim())?,
                anon_key,
            },
            access_token: first(&["ECOQUEST_ACCESS_TOKEN"][..]),
            feed_limit,
            redirect_url: first(&["ECOQUEST_REDIRECT_URL"][..]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_minimal_config() {
        let config = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();
        assert_eq!(config.backend.url.as_str(), "https://abc.supabase.co/");
        assert_eq!(config.backend.anon_key, "anon");
        assert_eq!(config.feed_limit, DEFAULT_FEED_LIMIT);
        assert_eq!(config.access_token, None);
    }

    #[test]
    fn test_next_public_names_are_accepted() {
        let config = Config::from_lookup(lookup(&[
            ("NEXT_PUBLIC_SUPABASE_URL", "https://abc.supabase.co"),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon"),
            ("ECOQUEST_FEED_LIMIT", "5"),
            ("ECOQUEST_ACCESS_TOKEN", "jwt"),
        ]))
        .unwrap();
        assert_eq!(config.feed_limit, 5);
        assert_eq!(config.access_token.as_deref(), Some("jwt"));
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_env_with_overrides(&[
            ("SUPABASE_URL", Some("https://override.example.co".to_string())),
            ("SUPABASE_ANON_KEY", Some("flag-key".to_string())),
            ("ECOQUEST_FEED_LIMIT", Some("3".to_string())),
            ("ECOQUEST_ACCESS_TOKEN", Some("flag-token".to_string())),
        ])
        .unwrap();
        assert_eq!(config.backend.url.host_str(), Some("override.example.co"));
        assert_eq!(config.backend.anon_key, "flag-key");
        assert_eq!(config.feed_limit, 3);
        assert_eq!(config.access_token.as_deref(), Some("flag-token"));
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = Config::from_lookup(lookup(&[("SUPABASE_URL", "https://abc.supabase.co")]))
            .unwrap_err();
        assert!(matches!(err, CommunityError::Config(_)));
    }

    #[test]
    fn test_bad_url_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, CommunityError::InvalidUrl(_)));
    }

    #[test]
    fn test_bad_limit_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("SUPABASE_URL", "https://abc.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("ECOQUEST_FEED_LIMIT", "lots"),
        ]))
        .unwrap_err();
        assert!(matches!(err, CommunityError::Config(_)));
    }
}
