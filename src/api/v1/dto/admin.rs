/*
 * Responsibility
 * - 管理画面の request/response DTO
 * - request body は PostDraft (フォームの生の値) をそのまま受ける
 */
use serde::Serialize;

use crate::api::v1::dto::blog::BlogPostResponse;
use crate::models::{BlogPost, Category, META_DESCRIPTION_SOFT_LIMIT, PostStatus};
use crate::services::editor::{EditorMode, PostDraft};

#[derive(Debug, Serialize)]
pub struct AdminPostRow {
    pub slug: String,
    pub title: String,
    pub category: Category,
    pub status: PostStatus,
    pub publish_date_display: String,
    pub views: u64,
}

impl From<&BlogPost> for AdminPostRow {
    fn from(post: &BlogPost) -> Self {
        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            category: post.category,
            status: post.status,
            publish_date_display: post.short_publish_date(),
            views: post.views,
        }
    }
}

pub fn rows(posts: &[BlogPost]) -> Vec<AdminPostRow> {
    posts.iter().map(AdminPostRow::from).collect()
}

#[derive(Debug, Serialize)]
pub struct AdminListResponse {
    pub posts: Vec<AdminPostRow>,
}

/// Editor form state as shown to the admin.
#[derive(Debug, Serialize)]
pub struct EditorResponse {
    #[serde(flatten)]
    pub mode: EditorMode,
    pub draft: PostDraft,
    pub categories: Vec<Category>,
    pub meta_description_chars: usize,
    pub meta_description_limit: usize,
    pub warnings: Vec<String>,
}

impl EditorResponse {
    pub fn new(mode: EditorMode, draft: PostDraft) -> Self {
        Self {
            mode,
            categories: Category::ALL.to_vec(),
            meta_description_chars: draft.meta_description_chars(),
            meta_description_limit: META_DESCRIPTION_SOFT_LIMIT,
            warnings: draft.warnings(),
            draft,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<BlogPostResponse>,
    pub warnings: Vec<String>,
    pub posts: Vec<AdminPostRow>,
}
