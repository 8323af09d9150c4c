/*
 * Responsibility
 * - BlogPost (backend が返すレコード) と BlogPostPayload (作成/更新で送る形)
 * - 「正しい投稿」の検証ルール (必須テキスト、tags の正規形)
 * - 表示用の日付/読了時間フォーマット
 *
 * id / slug / views / read_time / publish_date / author は backend が決める。
 * ここではそれらを書き換えない。
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Category;

/// SEO guidance for `meta_description`. Exceeding it is a warning, never an error.
pub const META_DESCRIPTION_SOFT_LIMIT: usize = 160;

/// A payload that breaks the post rules. Raised before anything is sent to the backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("tags must be trimmed and non-empty")]
    MalformedTags,
}

pub fn meta_description_over_limit(meta_description: &str) -> bool {
    meta_description.chars().count() > META_DESCRIPTION_SOFT_LIMIT
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    #[default]
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "draft",
            PostStatus::Published => "published",
        }
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub meta_description: String,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_title: String,
    #[serde(with = "publish_date")]
    pub publish_date: DateTime<Utc>,
    #[serde(default)]
    pub read_time: u32,
    #[serde(default)]
    pub views: u64,
}

impl BlogPost {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// `January 5, 2025`
    pub fn long_publish_date(&self) -> String {
        self.publish_date.format("%B %-d, %Y").to_string()
    }

    /// `Jan 5, 2025`
    pub fn short_publish_date(&self) -> String {
        self.publish_date.format("%b %-d, %Y").to_string()
    }

    pub fn read_time_label(&self) -> String {
        format!("{} min read", self.read_time)
    }
}

/// Create/update body sent to the backend. Server-assigned fields are absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostPayload {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub meta_description: String,
    pub featured_image: Option<String>,
    pub status: PostStatus,
}

impl BlogPostPayload {
    /// Required text must be non-blank; tags must already be normalized.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("title", &self.title),
            ("excerpt", &self.excerpt),
            ("content", &self.content),
            ("meta_description", &self.meta_description),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        if self.tags.iter().any(|t| t.is_empty() || t.trim() != t) {
            return Err(ValidationError::MalformedTags);
        }
        Ok(())
    }

    pub fn meta_description_over_limit(&self) -> bool {
        meta_description_over_limit(&self.meta_description)
    }
}

impl From<&BlogPost> for BlogPostPayload {
    fn from(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            category: post.category,
            tags: post.tags.clone(),
            meta_description: post.meta_description.clone(),
            featured_image: post.featured_image.clone(),
            status: post.status,
        }
    }
}

// The backend may emit timestamps with or without an offset; naive values are read as UTC.
mod publish_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid publish_date: {raw}")))
    }

    pub(super) fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(naive.and_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    }
}
