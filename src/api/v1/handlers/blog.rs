/*
 * Responsibility
 * - 公開側: GET /blog (カテゴリ絞り込み), GET /blog/{slug} (詳細 + 関連記事)
 * - 未公開 / 存在しない slug は 404 (not found 状態)
 */
use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    api::v1::dto::blog::{BlogCardResponse, BlogDetailResponse, BlogListQuery, BlogListResponse},
    error::AppError,
    services::blog_view,
    state::AppState,
};

pub async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> Result<Json<BlogListResponse>, AppError> {
    let selected = query
        .filter()
        .map_err(|msg| AppError::bad_request("INVALID_CATEGORY", msg))?;

    let listing = blog_view::load_listing(state.backend.as_ref(), selected).await?;

    Ok(Json(BlogListResponse::from(&listing)))
}

pub async fn get_blog(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogDetailResponse>, AppError> {
    let detail = blog_view::load_detail(state.backend.as_ref(), &slug, state.related_pool_limit)
        .await?
        .ok_or(AppError::not_found("blog"))?;

    Ok(Json(BlogDetailResponse {
        post: (&detail.post).into(),
        related: detail.related.iter().map(BlogCardResponse::from).collect(),
    }))
}
