//! # Domain Models
//!
//! These structs represent the entities of the tribuna site. Each one
//! serializes with camelCase field names and ISO-8601 timestamps,
//! which is the exact shape persisted under its collection key.
//!
//! Ids are time-derived monotonic integers assigned by the store;
//! `0` marks a record that has not been stored yet.

use crate::traits::{FieldValue, Fields, Record};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Unique within a collection, immutable once assigned.
pub type RecordId = i64;

/// Bookkeeping timestamps shared by every record. `created_at` is set
/// once on insert; `updated_at` moves on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordMeta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for RecordMeta {
    fn default() -> Self {
        Self {
            created_at: DateTime::UNIX_EPOCH,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }
}

impl RecordMeta {
    /// Meta for a record freshly created at `instant`.
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self {
            created_at: instant,
            updated_at: instant,
        }
    }
}

/// What a session is allowed to see. The original site knew exactly two
/// kinds of visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

/// Moderation state of a post. New posts wait in `Pending` until an
/// admin approves or rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Pending,
    Published,
    Rejected,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Pending => "pending",
            PostStatus::Published => "published",
            PostStatus::Rejected => "rejected",
        }
    }
}

/// A registered visitor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    /// End of the user's ban, if any. "Is banned" is derived from this
    /// at read time, never stored as a boolean.
    #[serde(default)]
    pub banned_until: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl User {
    /// A user is banned when `banned_until` exists and lies strictly
    /// after the probe instant.
    pub fn is_banned_at(&self, instant: DateTime<Utc>) -> bool {
        self.banned_until.map(|until| until > instant).unwrap_or(false)
    }
}

/// A content category (Goals, Tactics, History, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub post_count: i64,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

/// One World Cup tournament as shown on the stats page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldCup {
    #[serde(default)]
    pub id: RecordId,
    pub year: i64,
    pub host: String,
    #[serde(default)]
    pub stadium: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub champion: String,
    #[serde(default)]
    pub runner_up: String,
    #[serde(default)]
    pub matches: i64,
    #[serde(default)]
    pub goals: i64,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

/// A published or pending publication on the site.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Year of the tournament the post is about, if any.
    #[serde(default)]
    pub world_cup: Option<i64>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub status: PostStatus,
    /// Reviewer note attached on rejection.
    #[serde(default)]
    pub moderation_note: Option<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub comments: i64,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

/// An unpublished draft saved from the profile page's editor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(flatten)]
    pub meta: RecordMeta,
}

macro_rules! impl_record {
    ($entity:ty, $collection:literal) => {
        impl Record for $entity {
            const COLLECTION: &'static str = $collection;

            fn id(&self) -> RecordId {
                self.id
            }

            fn assign_id(&mut self, id: RecordId) {
                self.id = id;
            }

            fn meta(&self) -> &RecordMeta {
                &self.meta
            }

            fn meta_mut(&mut self) -> &mut RecordMeta {
                &mut self.meta
            }
        }
    };
}

impl_record!(User, "users");
impl_record!(Category, "categories");
impl_record!(WorldCup, "world-cups");
impl_record!(Post, "posts");
impl_record!(Draft, "drafts");

fn opt_text(value: &Option<String>) -> FieldValue {
    match value {
        Some(s) => FieldValue::Text(s.clone()),
        None => FieldValue::Missing,
    }
}

fn meta_field(meta: &RecordMeta, name: &str) -> FieldValue {
    match name {
        "createdAt" => FieldValue::Timestamp(meta.created_at),
        "updatedAt" => FieldValue::Timestamp(meta.updated_at),
        _ => FieldValue::Missing,
    }
}

impl Fields for User {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Int(self.id),
            "name" => FieldValue::Text(self.name.clone()),
            "username" => FieldValue::Text(self.username.clone()),
            "email" => FieldValue::Text(self.email.clone()),
            "role" => FieldValue::Text(self.role.as_str().to_string()),
            "country" => opt_text(&self.country),
            "bannedUntil" => match self.banned_until {
                Some(until) => FieldValue::Timestamp(until),
                None => FieldValue::Missing,
            },
            other => meta_field(&self.meta, other),
        }
    }
}

impl Fields for Category {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Int(self.id),
            "name" => FieldValue::Text(self.name.clone()),
            "icon" => FieldValue::Text(self.icon.clone()),
            "description" => FieldValue::Text(self.description.clone()),
            "color" => FieldValue::Text(self.color.clone()),
            "postCount" => FieldValue::Int(self.post_count),
            other => meta_field(&self.meta, other),
        }
    }
}

impl Fields for WorldCup {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Int(self.id),
            "year" => FieldValue::Int(self.year),
            "host" => FieldValue::Text(self.host.clone()),
            "stadium" => FieldValue::Text(self.stadium.clone()),
            "image" => FieldValue::Text(self.image.clone()),
            "description" => FieldValue::Text(self.description.clone()),
            "champion" => FieldValue::Text(self.champion.clone()),
            "runnerUp" => FieldValue::Text(self.runner_up.clone()),
            "matches" => FieldValue::Int(self.matches),
            "goals" => FieldValue::Int(self.goals),
            other => meta_field(&self.meta, other),
        }
    }
}

impl Fields for Post {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Int(self.id),
            "title" => FieldValue::Text(self.title.clone()),
            "description" => FieldValue::Text(self.description.clone()),
            "category" => FieldValue::Text(self.category.clone()),
            "worldCup" => match self.world_cup {
                Some(year) => FieldValue::Int(year),
                None => FieldValue::Missing,
            },
            "author" => FieldValue::Text(self.author.clone()),
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            "moderationNote" => opt_text(&self.moderation_note),
            "likes" => FieldValue::Int(self.likes),
            "comments" => FieldValue::Int(self.comments),
            "views" => FieldValue::Int(self.views),
            other => meta_field(&self.meta, other),
        }
    }
}

impl Fields for Draft {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::Int(self.id),
            "title" => FieldValue::Text(self.title.clone()),
            "description" => FieldValue::Text(self.description.clone()),
            "category" => FieldValue::Text(self.category.clone()),
            "content" => FieldValue::Text(self.content.clone()),
            other => meta_field(&self.meta, other),
        }
    }
}
