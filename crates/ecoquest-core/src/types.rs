//! Core types for EcoQuest Community

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a community post
///
/// The backend stores post ids as UUID text; the client never parses them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a user (author, liker or commenter)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A like row: at most one per (post, user), enforced by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub id: i64,
    pub post_id: PostId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// A comment row as returned by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for appending a comment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
}

/// Row of the `users` table, as loosely typed as the backend allows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUserStats {
    #[serde(default, deserialize_with = "lenient")]
    pub level: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub exp: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub exp_cap: Option<i64>,
}

/// Viewer progress shown in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub level: u32,
    pub exp: u64,
    pub exp_cap: u64,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            level: 1,
            exp: 0,
            exp_cap: 100,
        }
    }
}

impl UserStats {
    /// Percentage towards the next level, capped at 100
    pub fn progress_percent(&self) -> f64 {
        if self.exp_cap == 0 {
            return 0.0;
        }
        (self.exp as f64 / self.exp_cap as f64 * 100.0).min(100.0)
    }

    pub fn next_level(&self) -> u32 {
        self.level.saturating_add(1)
    }

    pub fn tier(&self) -> LevelTier {
        LevelTier::for_level(self.level)
    }
}

/// Visual tier of a level badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelTier {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl LevelTier {
    pub fn for_level(level: u32) -> Self {
        match level {
            50.. => LevelTier::Legendary,
            30..=49 => LevelTier::Epic,
            15..=29 => LevelTier::Rare,
            _ => LevelTier::Common,
        }
    }

    /// CSS modifier for the badge ring
    pub fn class(&self) -> &'static str {
        match self {
            LevelTier::Common => "level-badge--common",
            LevelTier::Rare => "level-badge--rare",
            LevelTier::Epic => "level-badge--epic",
            LevelTier::Legendary => "level-badge--legendary",
        }
    }
}

/// Deserialize an optional field, treating a type mismatch the same as absence.
///
/// The posts table is written by a separate app and its columns drift; a
/// string where a number was expected must not sink the whole feed.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// Like [`lenient`], for fields that carry their default instead of `None`.
pub(crate) fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_transparently() {
        let id = PostId::new("2f9c");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"2f9c\"");
        let user: UserId = serde_json::from_str("\"u-1\"").unwrap();
        assert_eq!(user.to_string(), "u-1");
    }

    #[test]
    fn test_progress_percent_caps_at_100() {
        let stats = UserStats {
            level: 3,
            exp: 250,
            exp_cap: 100,
        };
        assert_eq!(stats.progress_percent(), 100.0);

        let half = UserStats {
            level: 3,
            exp: 50,
            exp_cap: 100,
        };
        assert_eq!(half.progress_percent(), 50.0);
    }

    #[test]
    fn test_progress_percent_zero_cap() {
        let stats = UserStats {
            level: 1,
            exp: 10,
            exp_cap: 0,
        };
        assert_eq!(stats.progress_percent(), 0.0);
    }

    #[test]
    fn test_level_tiers() {
        assert_eq!(LevelTier::for_level(1), LevelTier::Common);
        assert_eq!(LevelTier::for_level(14), LevelTier::Common);
        assert_eq!(LevelTier::for_level(15), LevelTier::Rare);
        assert_eq!(LevelTier::for_level(30), LevelTier::Epic);
        assert_eq!(LevelTier::for_level(49), LevelTier::Epic);
        assert_eq!(LevelTier::for_level(50), LevelTier::Legendary);
    }

    #[test]
    fn test_raw_stats_tolerates_wrong_types() {
        let raw: RawUserStats =
            serde_json::from_str(r#"{"level": "seven", "exp": 40, "extra": true}"#).unwrap();
        assert_eq!(raw.level, None);
        assert_eq!(raw.exp, Some(40));
        assert_eq!(raw.exp_cap, None);
    }
}
