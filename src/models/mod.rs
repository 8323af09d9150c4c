/*
 * Responsibility
 * - BlogPost エンティティと、その周辺の値型 (Category / PostStatus)
 * - backend との契約に載る形そのもの (serde で wire 形式を固定する)
 */
mod blog_post;
mod category;

pub use blog_post::{
    BlogPost, BlogPostPayload, META_DESCRIPTION_SOFT_LIMIT, PostStatus, ValidationError,
    meta_description_over_limit,
};
pub use category::{Category, UnknownCategory};
