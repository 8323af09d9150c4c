/*
 * Responsibility
 * - 公開側の一覧 / 詳細を backend から組み立てる
 * - 関連記事の取得は本体の取得が成功してから (カテゴリが必要なため)
 */
use tracing::warn;

use crate::backend::{BackendResult, BlogBackend, ListQuery};
use crate::models::BlogPost;
use crate::services::{
    listing::{BlogListing, CategoryFilter, build_category_chooser},
    related::select_related,
};

#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: BlogPost,
    pub related: Vec<BlogPost>,
}

/// Published posts plus the category chooser, with `selected` applied.
///
/// A failing category lookup leaves the chooser empty; a failing post lookup is an error.
pub async fn load_listing(
    backend: &dyn BlogBackend,
    selected: CategoryFilter,
) -> BackendResult<BlogListing> {
    let posts = backend.list_posts(ListQuery::published()).await?;

    let chooser = match backend.list_categories().await {
        Ok(categories) => build_category_chooser(&categories),
        Err(e) => {
            warn!(error = %e, "fetching blog categories failed");
            Vec::new()
        }
    };

    let mut listing = BlogListing::new(posts, chooser);
    listing.select(selected);
    Ok(listing)
}

/// `Ok(None)` when the slug is unknown or the post is not published.
pub async fn load_detail(
    backend: &dyn BlogBackend,
    slug: &str,
    related_pool_limit: usize,
) -> BackendResult<Option<PostDetail>> {
    let Some(post) = backend.get_post(slug).await? else {
        return Ok(None);
    };
    if !post.is_published() {
        return Ok(None);
    }

    // TODO: the pool is only the most recent `related_pool_limit` posts, so older
    // same-category posts are never candidates. Needs a category filter on the backend.
    let related = match backend
        .list_posts(ListQuery::recent_published(related_pool_limit))
        .await
    {
        Ok(pool) => select_related(&post.slug, post.category, &pool)
            .into_iter()
            .cloned()
            .collect(),
        Err(e) => {
            warn!(error = %e, %slug, "fetching related blogs failed");
            Vec::new()
        }
    };

    Ok(Some(PostDetail { post, related }))
}
