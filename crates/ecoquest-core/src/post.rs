//! Community post records.
//!
//! [`RawPost`] mirrors a `community_posts` row exactly as the backend hands it
//! over: every column may be missing, null or of an unexpected type. [`Post`]
//! is the strict shape the display layer renders, produced by
//! [`crate::normalize::normalize_post`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{lenient, lenient_or_default, PostId, UserId};

/// Author columns embedded through the `users` foreign key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAuthor {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub profile_image: Option<String>,
}

/// A `community_posts` row with the author join
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    pub id: PostId,
    pub user_id: UserId,
    #[serde(default, deserialize_with = "lenient")]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub caption: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub post_type: Option<String>,

    // Species sighting
    #[serde(default, deserialize_with = "lenient")]
    pub species_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub species_scientific_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub species_category: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub species_type: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub longitude: Option<f64>,

    // Quest completion
    #[serde(default, deserialize_with = "lenient")]
    pub quest_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub quest_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub quest_description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub quest_reflection: Option<String>,
    #[serde(default)]
    pub objectives: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub notes: Option<String>,
    #[serde(default)]
    pub stats_data: Option<serde_json::Value>,

    // Progress milestone
    #[serde(default, deserialize_with = "lenient")]
    pub user_level: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_exp: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub user_points: Option<i64>,

    #[serde(default, deserialize_with = "lenient")]
    pub users: Option<RawAuthor>,
}

impl RawPost {
    /// A row with only the required columns set
    pub fn bare(id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id: PostId::new(id),
            user_id: UserId::new(user_id),
            user_name: None,
            user_avatar_url: None,
            caption: None,
            image_url: None,
            created_at: None,
            post_type: None,
            species_name: None,
            species_scientific_name: None,
            species_category: None,
            species_type: None,
            location: None,
            latitude: None,
            longitude: None,
            quest_id: None,
            quest_name: None,
            quest_description: None,
            quest_reflection: None,
            objectives: None,
            notes: None,
            stats_data: None,
            user_level: None,
            user_exp: None,
            user_points: None,
            users: None,
        }
    }
}

/// Which display variant a post renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    Species,
    Quest,
    Progress,
}

impl PostKind {
    /// Resolve the `post_type` tag; anything unrecognized is a species sighting.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("quest") => PostKind::Quest,
            Some("progress") => PostKind::Progress,
            _ => PostKind::Species,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostKind::Species => "species",
            PostKind::Quest => "quest",
            PostKind::Progress => "progress",
        }
    }
}

/// Author identity as displayed on a card
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: UserId,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl Author {
    /// First letter of the display name, uppercased, for the avatar fallback
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "A".to_string())
    }
}

/// Fields every post variant carries
#[derive(Debug, Clone, PartialEq)]
pub struct PostHeader {
    pub id: PostId,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub caption: String,
    pub image_url: String,
}

/// A normalized post, ready to render
#[derive(Debug, Clone, PartialEq)]
pub enum Post {
    Species(SpeciesPost),
    Quest(QuestPost),
    Progress(ProgressPost),
}

impl Post {
    pub fn kind(&self) -> PostKind {
        match self {
            Post::Species(_) => PostKind::Species,
            Post::Quest(_) => PostKind::Quest,
            Post::Progress(_) => PostKind::Progress,
        }
    }

    pub fn header(&self) -> &PostHeader {
        match self {
            Post::Species(p) => &p.header,
            Post::Quest(p) => &p.header,
            Post::Progress(p) => &p.header,
        }
    }

    pub fn id(&self) -> &PostId {
        &self.header().id
    }
}

/// A species sighting
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesPost {
    pub header: PostHeader,
    pub species_name: String,
    pub scientific_name: String,
    pub category: String,
    pub species_type: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// A completed quest with its gallery of captures
#[derive(Debug, Clone, PartialEq)]
pub struct QuestPost {
    pub header: PostHeader,
    pub quest_id: String,
    pub quest_name: String,
    pub quest_description: String,
    pub quest_reflection: String,
    pub objectives: Vec<Objective>,
    pub notes: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub stats: QuestStats,
}

/// One checklist item of a quest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub text: String,
    #[serde(
        default,
        rename = "isCompleted",
        alias = "is_completed",
        deserialize_with = "lenient_or_default"
    )]
    pub is_completed: bool,
}

/// A species captured while completing a quest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapturedSpecies {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub scientific_name: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_or_default")]
    pub species_type: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub entry_id: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub conservation_status: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub confidence: f64,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub capture_date: String,
}

/// `stats_data` of a quest post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestStats {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub flora_count: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub fauna_count: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub total_species: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub flora_target: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub fauna_target: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub species_captured: Vec<CapturedSpecies>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub quest_category: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub is_completed: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub completed_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub day: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub total_unique_species: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub duplicate_captures: u32,
}

/// A level/experience milestone
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressPost {
    pub header: PostHeader,
    pub user_level: u32,
    pub user_exp: u64,
    pub user_points: u64,
    pub stats: ProgressStats,
}

/// `stats_data` of a progress post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub quests_completed: u32,
    #[serde(default, deserialize_with = "lenient")]
    pub active_quests: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_quests: Option<u32>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub species_discovered: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub flora_count: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub fauna_count: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub total_captures: u32,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub exp_into_level: u64,
    #[serde(default = "default_exp_cap", deserialize_with = "exp_cap_or_default")]
    pub exp_cap: u64,
}

impl Default for ProgressStats {
    fn default() -> Self {
        Self {
            quests_completed: 0,
            active_quests: None,
            total_quests: None,
            species_discovered: 0,
            flora_count: 0,
            fauna_count: 0,
            total_captures: 0,
            exp_into_level: 0,
            exp_cap: default_exp_cap(),
        }
    }
}

impl ProgressStats {
    /// Percentage of the current level already earned, capped at 100
    pub fn level_percent(&self) -> f64 {
        if self.exp_cap == 0 {
            return 0.0;
        }
        (self.exp_into_level as f64 / self.exp_cap as f64 * 100.0).min(100.0)
    }
}

pub(crate) fn default_exp_cap() -> u64 {
    100
}

fn exp_cap_or_default<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let cap: Option<u64> = lenient(deserializer)?;
    Ok(cap.filter(|cap| *cap > 0).unwrap_or_else(default_exp_cap))
}
