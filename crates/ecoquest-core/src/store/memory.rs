//! In-process [`CommunityStore`].
//!
//! Behaves like the hosted tables as far as this app can observe: likes are
//! unique per (post, user), ids ascend, comments come back oldest first.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde_json::json;

use super::CommunityStore;
use crate::error::{CommunityError, CommunityResult};
use crate::post::{RawAuthor, RawPost};
use crate::types::{Comment, Like, NewComment, PostId, RawUserStats, UserId};

/// Author of the demo store's species and progress posts
pub const DEMO_VIEWER: &str = "demo-ranger";

#[derive(Default)]
struct Tables {
    posts: Vec<RawPost>,
    likes: Vec<Like>,
    comments: Vec<Comment>,
    users: HashMap<UserId, RawUserStats>,
    next_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Thread-safe in-memory tables
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_post(&self, post: RawPost) {
        self.tables.write().posts.push(post);
    }

    pub fn insert_user(&self, user_id: UserId, stats: RawUserStats) {
        self.tables.write().users.insert(user_id, stats);
    }

    /// Number of like rows currently stored, across all posts
    pub fn total_likes(&self) -> usize {
        self.tables.read().likes.len()
    }

    /// A store seeded with one post of each variant, for offline browsing
    pub fn demo() -> Self {
        let store = Self::new();
        let now = Utc::now();
        let stamp = |minutes: i64| (now - Duration::minutes(minutes)).to_rfc3339();

        let mut species = RawPost::bare("demo-species", DEMO_VIEWER);
        species.post_type = Some("species".to_string());
        species.created_at = Some(stamp(5));
        species.caption = Some("Found this by the creek at dawn".to_string());
        species.species_name = Some("Common Kingfisher".to_string());
        species.species_scientific_name = Some("Alcedo atthis".to_string());
        species.species_category = Some("fauna".to_string());
        species.users = Some(RawAuthor {
            name: Some("Ranger Rowan".to_string()),
            profile_image: None,
        });
        store.insert_post(species);

        let mut quest = RawPost::bare("demo-quest", "demo-walker");
        quest.post_type = Some("quest".to_string());
        quest.created_at = Some(stamp(90));
        quest.user_name = Some("Wren Walker".to_string());
        quest.quest_name = Some("Wetland Wanderer".to_string());
        quest.quest_description = Some("Log plants and animals living around the pond".to_string());
        quest.quest_reflection = Some("The dragonflies stole the show".to_string());
        quest.location = Some("Mill Pond".to_string());
        quest.objectives = Some(json!([
            {"id": "1", "text": "Capture 2 flora species", "isCompleted": true},
            {"id": "2", "text": "Capture 1 fauna species", "isCompleted": true}
        ]));
        quest.stats_data = Some(json!({
            "flora_count": 2,
            "fauna_count": 1,
            "total_species": 3,
            "flora_target": 2,
            "fauna_target": 1,
            "species_captured": [
                {"name": "Yellow Iris", "scientific_name": "Iris pseudacorus", "type": "flora", "entry_id": "e1", "conservation_status": "Least Concern"},
                {"name": "Water Mint", "scientific_name": "Mentha aquatica", "type": "flora", "entry_id": "e2"},
                {"name": "Emperor Dragonfly", "scientific_name": "Anax imperator", "type": "fauna", "entry_id": "e3"}
            ],
            "quest_category": "wetland",
            "is_completed": true,
            "day": "Saturday",
            "date": now.format("%Y-%m-%d").to_string(),
            "total_unique_species": 3,
            "duplicate_captures": 0
        }));
        store.insert_post(quest);

        let mut progress = RawPost::bare("demo-progress", DEMO_VIEWER);
        progress.post_type = Some("progress".to_string());
        progress.created_at = Some(stamp(60 * 26));
        progress.caption = Some("Level 7 reached!".to_string());
        progress.user_level = Some(7);
        progress.user_exp = Some(640);
        progress.stats_data = Some(json!({
            "quests_completed": 12,
            "species_discovered": 41,
            "flora_count": 25,
            "fauna_count": 16,
            "total_captures": 58,
            "exp_into_level": 40,
            "exp_cap": 100
        }));
        progress.users = Some(RawAuthor {
            name: Some("Ranger Rowan".to_string()),
            profile_image: None,
        });
        store.insert_post(progress);

        store.insert_user(
            UserId::new(DEMO_VIEWER),
            RawUserStats {
                level: Some(7),
                exp: Some(40),
                exp_cap: Some(100),
            },
        );
        store
    }
}

fn created_at(post: &RawPost) -> DateTime<Utc> {
    post.created_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

#[async_trait]
impl CommunityStore for MemoryStore {
    async fn recent_posts(&self, limit: usize) -> CommunityResult<Vec<RawPost>> {
        let mut posts = self.tables.read().posts.clone();
        posts.sort_by_key(|p| std::cmp::Reverse(created_at(p)));
        posts.truncate(limit);
        Ok(posts)
    }

    async fn like_count(&self, post_id: &PostId) -> CommunityResult<u64> {
        let tables = self.tables.read();
        Ok(tables.likes.iter().filter(|l| &l.post_id == post_id).count() as u64)
    }

    async fn has_liked(&self, post_id: &PostId, user_id: &UserId) -> CommunityResult<bool> {
        let tables = self.tables.read();
        Ok(tables
            .likes
            .iter()
            .any(|l| &l.post_id == post_id && &l.user_id == user_id))
    }

    async fn insert_like(&self, post_id: &PostId, user_id: &UserId) -> CommunityResult<()> {
        let mut tables = self.tables.write();
        if tables
            .likes
            .iter()
            .any(|l| &l.post_id == post_id && &l.user_id == user_id)
        {
            return Err(CommunityError::Status {
                status: 409,
                body: "duplicate key value violates unique constraint".to_string(),
            });
        }
        let id = tables.next_id();
        tables.likes.push(Like {
            id,
            post_id: post_id.clone(),
            user_id: user_id.clone(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn delete_like(&self, post_id: &PostId, user_id: &UserId) -> CommunityResult<()> {
        self.tables
            .write()
            .likes
            .retain(|l| !(&l.post_id == post_id && &l.user_id == user_id));
        Ok(())
    }

    async fn comments(&self, post_id: &PostId) -> CommunityResult<Vec<Comment>> {
        let tables = self.tables.read();
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| &c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }

    async fn insert_comment(&self, comment: NewComment) -> CommunityResult<Comment> {
        let mut tables = self.tables.write();
        let row = Comment {
            id: tables.next_id(),
            post_id: comment.post_id,
            user_id: comment.user_id,
            content: comment.content,
            created_at: Utc::now(),
        };
        tables.comments.push(row.clone());
        Ok(row)
    }

    async fn user_stats(&self, user_id: &UserId) -> CommunityResult<Option<RawUserStats>> {
        Ok(self.tables.read().users.get(user_id).cloned())
    }
}
