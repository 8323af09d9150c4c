/*
 * Responsibility
 * - 公開側 (一覧 / 詳細) の request/response DTO
 * - 表示用の整形済み値 (日付、読了時間、ボタンラベル) もここで詰める
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BlogPost, Category, PostStatus};
use crate::services::listing::{BlogListing, CategoryFilter};

#[derive(Debug, Default, Deserialize)]
pub struct BlogListQuery {
    pub category: Option<String>,
}

impl BlogListQuery {
    pub fn filter(&self) -> Result<CategoryFilter, &'static str> {
        match self.category.as_deref() {
            None | Some("") => Ok(CategoryFilter::All),
            Some(raw) => raw.parse().map_err(|_| "unknown category"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryOptionResponse {
    pub value: CategoryFilter,
    pub label: String,
    pub selected: bool,
}

/// Listing card.
#[derive(Debug, Serialize)]
pub struct BlogCardResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub featured_image: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub publish_date_display: String,
    pub read_time: u32,
    pub read_time_label: String,
}

impl From<&BlogPost> for BlogCardResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            category: post.category,
            tags: post.tags.clone(),
            featured_image: post.featured_image.clone(),
            publish_date: post.publish_date,
            publish_date_display: post.long_publish_date(),
            read_time: post.read_time,
            read_time_label: post.read_time_label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub selected_category: CategoryFilter,
    pub categories: Vec<CategoryOptionResponse>,
    pub posts: Vec<BlogCardResponse>,
    pub total: usize,
}

impl From<&BlogListing> for BlogListResponse {
    fn from(listing: &BlogListing) -> Self {
        let selected = listing.selected();
        let posts: Vec<BlogCardResponse> = listing
            .visible()
            .into_iter()
            .map(BlogCardResponse::from)
            .collect();

        Self {
            selected_category: selected,
            categories: listing
                .chooser()
                .iter()
                .map(|option| CategoryOptionResponse {
                    value: *option,
                    label: option.label(),
                    selected: *option == selected,
                })
                .collect(),
            total: posts.len(),
            posts,
        }
    }
}

/// Full article. `content` is passed through as stored.
#[derive(Debug, Serialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub meta_description: String,
    pub featured_image: Option<String>,
    pub status: PostStatus,
    pub author: String,
    pub author_title: String,
    pub publish_date: DateTime<Utc>,
    pub publish_date_display: String,
    pub read_time: u32,
    pub read_time_label: String,
    pub views: u64,
}

impl From<&BlogPost> for BlogPostResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.clone(),
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            category: post.category,
            tags: post.tags.clone(),
            meta_description: post.meta_description.clone(),
            featured_image: post.featured_image.clone(),
            status: post.status,
            author: post.author.clone(),
            author_title: post.author_title.clone(),
            publish_date: post.publish_date,
            publish_date_display: post.long_publish_date(),
            read_time: post.read_time,
            read_time_label: post.read_time_label(),
            views: post.views,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogDetailResponse {
    pub post: BlogPostResponse,
    pub related: Vec<BlogCardResponse>,
}
