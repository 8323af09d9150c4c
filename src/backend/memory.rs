//! In-process implementation of the blog REST contract.
//!
//! Used for local runs (`BLOG_BACKEND_URL=memory`) and for tests. It assigns
//! the server-owned fields (`id`, `slug`, `publish_date`, `read_time`, `views`)
//! the way the real backend does, and keeps posts newest-first.
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BackendError, BackendResult, BlogBackend, ListQuery};
use crate::models::{BlogPost, BlogPostPayload, Category};

const DEFAULT_AUTHOR: &str = "Weight Management Institute";
const DEFAULT_AUTHOR_TITLE: &str = "Medical Team";
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    posts: RwLock<Vec<BlogPost>>,
    unavailable: AtomicBool,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store. `posts` is taken as already newest-first.
    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self {
            posts: RwLock::new(posts),
            unavailable: AtomicBool::new(false),
        }
    }

    /// While set, every call fails as if the backend rejected the request.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> BackendResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(BackendError::Status {
                status: 503,
                body: "backend unavailable".to_string(),
            });
        }
        Ok(())
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        slug.push_str("post");
    }
    slug
}

fn unique_slug(title: &str, taken: &[BlogPost]) -> String {
    let base = slugify(title);
    let exists = |candidate: &str| taken.iter().any(|p| p.slug == candidate);
    if !exists(&base) {
        return base;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{base}-{n}");
        if !exists(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn read_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

#[async_trait]
impl BlogBackend for InMemoryBackend {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list_posts(&self, query: ListQuery) -> BackendResult<Vec<BlogPost>> {
        self.check_available()?;
        let posts = self.posts.read().await;
        let matching = posts
            .iter()
            .filter(|p| query.status.is_none_or(|s| p.status == s))
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn get_post(&self, slug: &str) -> BackendResult<Option<BlogPost>> {
        self.check_available()?;
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_categories(&self) -> BackendResult<Vec<Category>> {
        self.check_available()?;
        let posts = self.posts.read().await;
        let mut categories: Vec<Category> = Vec::new();
        for post in posts.iter().filter(|p| p.is_published()) {
            if !categories.contains(&post.category) {
                categories.push(post.category);
            }
        }
        Ok(categories)
    }

    async fn create_post(&self, payload: &BlogPostPayload) -> BackendResult<BlogPost> {
        self.check_available()?;
        let mut posts = self.posts.write().await;
        let post = BlogPost {
            id: Uuid::new_v4().to_string(),
            slug: unique_slug(&payload.title, &posts),
            title: payload.title.clone(),
            excerpt: payload.excerpt.clone(),
            content: payload.content.clone(),
            category: payload.category,
            tags: payload.tags.clone(),
            meta_description: payload.meta_description.clone(),
            featured_image: payload.featured_image.clone(),
            status: payload.status,
            author: DEFAULT_AUTHOR.to_string(),
            author_title: DEFAULT_AUTHOR_TITLE.to_string(),
            publish_date: Utc::now(),
            read_time: read_time_minutes(&payload.content),
            views: 0,
        };
        posts.insert(0, post.clone());
        Ok(post)
    }

    async fn update_post(&self, slug: &str, payload: &BlogPostPayload) -> BackendResult<BlogPost> {
        self.check_available()?;
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or(BackendError::NotFound)?;

        post.title = payload.title.clone();
        post.excerpt = payload.excerpt.clone();
        post.content = payload.content.clone();
        post.category = payload.category;
        post.tags = payload.tags.clone();
        post.meta_description = payload.meta_description.clone();
        post.featured_image = payload.featured_image.clone();
        post.status = payload.status;
        post.read_time = read_time_minutes(&payload.content);

        Ok(post.clone())
    }

    async fn delete_post(&self, slug: &str) -> BackendResult<()> {
        self.check_available()?;
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.slug != slug);
        if posts.len() == before {
            return Err(BackendError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostStatus;

    fn payload(title: &str, category: Category, status: PostStatus) -> BlogPostPayload {
        BlogPostPayload {
            title: title.to_string(),
            excerpt: "excerpt".to_string(),
            content: "<p>body</p>".to_string(),
            category,
            tags: vec!["health".to_string()],
            meta_description: "meta".to_string(),
            featured_image: None,
            status,
        }
    }

    #[test]
    fn slugify_keeps_ascii_words() {
        assert_eq!(slugify("PCOS & Insulin: 5 Facts!"), "pcos-insulin-5-facts");
        assert_eq!(slugify("  Leading spaces"), "leading-spaces");
        assert_eq!(slugify("???"), "post");
    }

    #[test]
    fn read_time_rounds_up_with_minimum_of_one() {
        assert_eq!(read_time_minutes(""), 1);
        assert_eq!(read_time_minutes(&"word ".repeat(200)), 1);
        assert_eq!(read_time_minutes(&"word ".repeat(201)), 2);
    }

    #[tokio::test]
    async fn create_assigns_server_fields_and_unique_slugs() {
        let backend = InMemoryBackend::new();
        let a = backend
            .create_post(&payload("Thyroid basics", Category::Thyroid, PostStatus::Published))
            .await
            .unwrap();
        let b = backend
            .create_post(&payload("Thyroid basics", Category::Thyroid, PostStatus::Published))
            .await
            .unwrap();

        assert_eq!(a.slug, "thyroid-basics");
        assert_eq!(b.slug, "thyroid-basics-2");
        assert_ne!(a.id, b.id);
        assert_eq!(a.views, 0);
        assert_eq!(a.read_time, 1);
    }

    #[tokio::test]
    async fn drafts_are_excluded_from_published_listing() {
        let backend = InMemoryBackend::new();
        backend
            .create_post(&payload("Live", Category::Nutrition, PostStatus::Published))
            .await
            .unwrap();
        let draft = backend
            .create_post(&payload("Hidden", Category::Lifestyle, PostStatus::Draft))
            .await
            .unwrap();

        let published = backend.list_posts(ListQuery::published()).await.unwrap();
        assert!(published.iter().all(|p| p.slug != draft.slug));
        assert_eq!(backend.list_posts(ListQuery::all()).await.unwrap().len(), 2);
        assert_eq!(
            backend.list_categories().await.unwrap(),
            vec![Category::Nutrition]
        );
    }

    #[tokio::test]
    async fn listing_is_newest_first_and_honors_limit() {
        let backend = InMemoryBackend::new();
        for title in ["one", "two", "three"] {
            backend
                .create_post(&payload(title, Category::Diabetes, PostStatus::Published))
                .await
                .unwrap();
        }
        let recent = backend
            .list_posts(ListQuery::recent_published(2))
            .await
            .unwrap();
        let slugs: Vec<_> = recent.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["three", "two"]);
    }

    #[tokio::test]
    async fn update_keeps_slug_and_delete_removes_it() {
        let backend = InMemoryBackend::new();
        let post = backend
            .create_post(&payload("Original", Category::Pcos, PostStatus::Published))
            .await
            .unwrap();

        let updated = backend
            .update_post(&post.slug, &payload("Renamed", Category::Pcos, PostStatus::Draft))
            .await
            .unwrap();
        assert_eq!(updated.slug, post.slug);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.status, PostStatus::Draft);

        backend.delete_post(&post.slug).await.unwrap();
        assert!(backend.get_post(&post.slug).await.unwrap().is_none());
        assert!(matches!(
            backend.delete_post(&post.slug).await,
            Err(BackendError::NotFound)
        ));
    }

    #[tokio::test]
    async fn outage_fails_every_call() {
        let backend = InMemoryBackend::new();
        backend.set_unavailable(true);
        assert!(matches!(
            backend.list_posts(ListQuery::all()).await,
            Err(BackendError::Status { status: 503, .. })
        ));
        backend.set_unavailable(false);
        assert!(backend.list_posts(ListQuery::all()).await.is_ok());
    }
}
