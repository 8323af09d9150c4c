//! Backend client interface consumed by the view controllers.
use async_trait::async_trait;

use super::BackendResult;
use crate::models::{BlogPost, BlogPostPayload, Category, PostStatus};

/// Filters for `GET /blogs`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub status: Option<PostStatus>,
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Every post regardless of status (admin listing).
    pub fn all() -> Self {
        Self::default()
    }

    pub fn published() -> Self {
        Self {
            status: Some(PostStatus::Published),
            limit: None,
        }
    }

    /// The most recent `limit` published posts.
    pub fn recent_published(limit: usize) -> Self {
        Self {
            status: Some(PostStatus::Published),
            limit: Some(limit),
        }
    }
}

/// The blog REST contract.
///
/// Every method issues exactly one request; nothing here retries.
#[async_trait]
pub trait BlogBackend: Send + Sync + 'static {
    // Backend name (for logging).
    fn backend_name(&self) -> &'static str;

    // GET /blogs[?status=..][&limit=..]
    async fn list_posts(&self, query: ListQuery) -> BackendResult<Vec<BlogPost>>;

    // GET /blogs/{slug}
    //
    // Returns `Ok(None)` when the slug is unknown.
    async fn get_post(&self, slug: &str) -> BackendResult<Option<BlogPost>>;

    // GET /blog-categories
    async fn list_categories(&self) -> BackendResult<Vec<Category>>;

    // POST /blogs
    async fn create_post(&self, payload: &BlogPostPayload) -> BackendResult<BlogPost>;

    // PUT /blogs/{slug}
    async fn update_post(&self, slug: &str, payload: &BlogPostPayload) -> BackendResult<BlogPost>;

    // DELETE /blogs/{slug}
    async fn delete_post(&self, slug: &str) -> BackendResult<()>;
}
