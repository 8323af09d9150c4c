/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - 公開側 /blog と管理画面 /admin/blogs を分けて束ねる
 */
use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

use crate::api::v1::handlers::{admin, blog, health::health};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/blog", get(blog::list_blogs))
        .route("/blog/{slug}", get(blog::get_blog))
        .route(
            "/admin/blogs",
            get(admin::list_blogs).post(admin::create_blog),
        )
        .route(
            "/admin/blogs/{slug}",
            put(admin::update_blog).delete(admin::delete_blog),
        )
        .route("/admin/blogs/{slug}/edit", get(admin::edit_blog_form))
        .route("/admin/editor/new", get(admin::new_blog_form))
}
