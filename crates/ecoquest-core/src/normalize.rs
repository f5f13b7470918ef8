//! Post normalization.
//!
//! Maps loosely typed backend rows onto the strict display shapes. Nothing in
//! here fails: an absent, null, empty or mistyped field always means "use the
//! default".

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::post::{
    Author, Objective, Post, PostHeader, PostKind, ProgressPost, ProgressStats, QuestPost,
    QuestStats, RawPost, SpeciesPost,
};
use crate::types::{RawUserStats, UserStats};

/// Display name used when neither the joined profile nor the post carries one
pub const ANONYMOUS_NAME: &str = "Anonymous User";

/// Normalize a raw row into the variant its `post_type` tag selects.
pub fn normalize_post(raw: RawPost) -> Post {
    let kind = PostKind::from_tag(raw.post_type.as_deref());
    if kind == PostKind::Species {
        if let Some(tag) = raw.post_type.as_deref().filter(|t| *t != "species") {
            tracing::debug!(post_id = %raw.id, tag, "unrecognized post_type, rendering as species");
        }
    }

    match kind {
        PostKind::Species => Post::Species(species(raw)),
        PostKind::Quest => Post::Quest(quest(raw)),
        PostKind::Progress => Post::Progress(progress(raw)),
    }
}

/// Normalize a batch of rows, preserving order.
pub fn normalize_posts(rows: impl IntoIterator<Item = RawPost>) -> Vec<Post> {
    rows.into_iter().map(normalize_post).collect()
}

/// Normalize a `users` row for the header.
pub fn normalize_stats(raw: RawUserStats) -> UserStats {
    let defaults = UserStats::default();
    UserStats {
        level: positive(raw.level).map_or(defaults.level, clamp_u32),
        exp: raw.exp.filter(|e| *e > 0).map_or(defaults.exp, |e| e as u64),
        exp_cap: positive(raw.exp_cap).map_or(defaults.exp_cap, |c| c as u64),
    }
}

fn header(raw: &mut RawPost) -> PostHeader {
    let joined = raw.users.take().unwrap_or_default();
    let display_name = non_empty(joined.name)
        .or_else(|| non_empty(raw.user_name.take()))
        .unwrap_or_else(|| ANONYMOUS_NAME.to_string());
    let avatar_url = non_empty(joined.profile_image).or_else(|| non_empty(raw.user_avatar_url.take()));

    PostHeader {
        id: raw.id.clone(),
        author: Author {
            id: raw.user_id.clone(),
            display_name,
            avatar_url,
        },
        created_at: parse_timestamp(raw.created_at.as_deref()),
        caption: text(raw.caption.take()),
        image_url: text(raw.image_url.take()),
    }
}

fn species(mut raw: RawPost) -> SpeciesPost {
    let header = header(&mut raw);
    SpeciesPost {
        header,
        species_name: text(raw.species_name),
        scientific_name: text(raw.species_scientific_name),
        category: text(raw.species_category),
        species_type: text(raw.species_type),
        location: text(raw.location),
        latitude: raw.latitude,
        longitude: raw.longitude,
    }
}

fn quest(mut raw: RawPost) -> QuestPost {
    let header = header(&mut raw);
    let objectives: Vec<Objective> = payload(raw.objectives.take(), &header, "objectives");
    let stats: QuestStats = payload(raw.stats_data.take(), &header, "stats_data");

    QuestPost {
        header,
        quest_id: text(raw.quest_id),
        quest_name: text(raw.quest_name),
        quest_description: text(raw.quest_description),
        quest_reflection: text(raw.quest_reflection),
        objectives,
        notes: text(raw.notes),
        location: text(raw.location),
        latitude: raw.latitude,
        longitude: raw.longitude,
        stats,
    }
}

fn progress(mut raw: RawPost) -> ProgressPost {
    let header = header(&mut raw);
    let stats: ProgressStats = payload(raw.stats_data.take(), &header, "stats_data");

    ProgressPost {
        header,
        user_level: positive(raw.user_level).map_or(1, clamp_u32),
        user_exp: raw.user_exp.filter(|e| *e > 0).map_or(0, |e| e as u64),
        user_points: raw.user_points.filter(|p| *p > 0).map_or(0, |p| p as u64),
        stats,
    }
}

/// Decode a JSON payload column, falling back to the type's default.
fn payload<T>(value: Option<serde_json::Value>, header: &PostHeader, column: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match value {
        None | Some(serde_json::Value::Null) => T::default(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!(post_id = %header.id, column, error = %e, "malformed payload, using defaults");
            T::default()
        }),
    }
}

fn parse_timestamp(value: Option<&str>) -> DateTime<Utc> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

fn text(value: Option<String>) -> String {
    value.unwrap_or_default()
}

fn positive(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v > 0)
}

fn clamp_u32(value: i64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::RawAuthor;
    use serde_json::json;

    fn raw(kind: Option<&str>) -> RawPost {
        let mut raw = RawPost::bare("p1", "u1");
        raw.post_type = kind.map(str::to_string);
        raw
    }

    #[test]
    fn test_species_defaults() {
        let post = normalize_post(raw(None));
        let Post::Species(species) = post else {
            panic!("expected species post");
        };
        assert_eq!(species.header.author.display_name, ANONYMOUS_NAME);
        assert_eq!(species.header.author.avatar_url, None);
        assert_eq!(species.header.caption, "");
        assert_eq!(species.header.image_url, "");
        assert_eq!(species.header.created_at, DateTime::<Utc>::UNIX_EPOCH);
        assert_eq!(species.species_name, "");
        assert_eq!(species.scientific_name, "");
        assert_eq!(species.location, "");
        assert_eq!(species.latitude, None);
    }

    #[test]
    fn test_quest_defaults() {
        let Post::Quest(quest) = normalize_post(raw(Some("quest"))) else {
            panic!("expected quest post");
        };
        assert_eq!(quest.quest_id, "");
        assert_eq!(quest.quest_name, "");
        assert_eq!(quest.quest_description, "");
        assert_eq!(quest.quest_reflection, "");
        assert!(quest.objectives.is_empty());
        assert_eq!(quest.notes, "");
        assert_eq!(quest.stats, QuestStats::default());
        assert!(quest.stats.species_captured.is_empty());
        assert!(!quest.stats.is_completed);
    }

    #[test]
    fn test_progress_defaults() {
        let Post::Progress(progress) = normalize_post(raw(Some("progress"))) else {
            panic!("expected progress post");
        };
        assert_eq!(progress.user_level, 1);
        assert_eq!(progress.user_exp, 0);
        assert_eq!(progress.user_points, 0);
        assert_eq!(progress.stats.exp_cap, 100);
        assert_eq!(progress.stats.quests_completed, 0);
        assert_eq!(progress.stats.active_quests, None);
    }

    #[test]
    fn test_zero_level_is_treated_as_absent() {
        let mut row = raw(Some("progress"));
        row.user_level = Some(0);
        let Post::Progress(progress) = normalize_post(row) else {
            panic!("expected progress post");
        };
        assert_eq!(progress.user_level, 1);
    }

    #[test]
    fn test_display_name_precedence() {
        let mut row = raw(None);
        row.user_name = Some("Post Name".to_string());
        row.users = Some(RawAuthor {
            name: Some("Profile Name".to_string()),
            profile_image: None,
        });
        assert_eq!(normalize_post(row.clone()).header().author.display_name, "Profile Name");

        row.users = Some(RawAuthor {
            name: Some(String::new()),
            profile_image: None,
        });
        assert_eq!(normalize_post(row.clone()).header().author.display_name, "Post Name");

        row.user_name = Some(String::new());
        assert_eq!(normalize_post(row).header().author.display_name, ANONYMOUS_NAME);
    }

    #[test]
    fn test_avatar_precedence() {
        let mut row = raw(None);
        row.user_avatar_url = Some("https://cdn/post.png".to_string());
        assert_eq!(
            normalize_post(row.clone()).header().author.avatar_url.as_deref(),
            Some("https://cdn/post.png")
        );

        row.users = Some(RawAuthor {
            name: None,
            profile_image: Some("https://cdn/profile.png".to_string()),
        });
        assert_eq!(
            normalize_post(row).header().author.avatar_url.as_deref(),
            Some("https://cdn/profile.png")
        );
    }

    #[test]
    fn test_unknown_tag_falls_back_to_species() {
        assert_eq!(normalize_post(raw(Some("milestone"))).kind(), PostKind::Species);
        assert_eq!(normalize_post(raw(Some(""))).kind(), PostKind::Species);
    }

    #[test]
    fn test_quest_payloads_decode() {
        let mut row = raw(Some("quest"));
        row.quest_name = Some("Pond Life".to_string());
        row.objectives = Some(json!([
            {"id": "1", "text": "Spot a frog", "isCompleted": true},
            {"id": "2", "text": "Spot a newt"}
        ]));
        row.stats_data = Some(json!({
            "flora_count": 2,
            "flora_target": 4,
            "species_captured": [
                {"name": "Common frog", "scientific_name": "Rana temporaria", "entry_id": "e1"}
            ],
            "day": "Saturday",
            "date": "2025-03-01"
        }));

        let Post::Quest(quest) = normalize_post(row) else {
            panic!("expected quest post");
        };
        assert_eq!(quest.quest_name, "Pond Life");
        assert_eq!(quest.objectives.len(), 2);
        assert!(quest.objectives[0].is_completed);
        assert!(!quest.objectives[1].is_completed);
        assert_eq!(quest.stats.flora_count, 2);
        assert_eq!(quest.stats.fauna_target, 0);
        assert_eq!(quest.stats.species_captured[0].scientific_name, "Rana temporaria");
        assert_eq!(quest.stats.day, "Saturday");
    }

    #[test]
    fn test_malformed_payloads_use_defaults() {
        let mut row = raw(Some("quest"));
        row.objectives = Some(json!({"not": "a list"}));
        row.stats_data = Some(json!("garbage"));
        let Post::Quest(quest) = normalize_post(row) else {
            panic!("expected quest post");
        };
        assert!(quest.objectives.is_empty());
        assert_eq!(quest.stats, QuestStats::default());
    }

    #[test]
    fn test_timestamp_parsing() {
        let mut row = raw(None);
        row.created_at = Some("2025-03-01T10:00:00.123456+00:00".to_string());
        let created = normalize_post(row).header().created_at;
        assert_eq!(created.to_rfc3339(), "2025-03-01T10:00:00.123456+00:00");
    }

    #[test]
    fn test_normalize_stats_defaults() {
        assert_eq!(normalize_stats(RawUserStats::default()), UserStats::default());

        let stats = normalize_stats(RawUserStats {
            level: Some(12),
            exp: Some(340),
            exp_cap: Some(0),
        });
        assert_eq!(stats.level, 12);
        assert_eq!(stats.exp, 340);
        assert_eq!(stats.exp_cap, 100);
    }
}
