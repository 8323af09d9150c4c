mod common;

use axum::http::StatusCode;
use serde_json::json;
use wmi_blog::models::{Category, PostStatus};

use common::{app_with, get, post, slugs};

fn seeded() -> Vec<wmi_blog::models::BlogPost> {
    vec![
        post("a", Category::Pcos, PostStatus::Published),
        post("b", Category::Pcos, PostStatus::Published),
        post("c", Category::Diabetes, PostStatus::Published),
        post("draft-pcos", Category::Pcos, PostStatus::Draft),
        post("d", Category::Pcos, PostStatus::Published),
    ]
}

#[tokio::test]
async fn health_is_ok() {
    let (app, _) = app_with(vec![]);
    let (status, body) = get(&app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn listing_shows_published_posts_with_chooser() {
    let (app, _) = app_with(seeded());
    let (status, body) = get(&app, "/api/v1/blog").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_category"], "all");
    assert_eq!(slugs(&body["posts"]), vec!["a", "b", "c", "d"]);
    assert_eq!(body["total"], 4);

    let values: Vec<_> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["value"].as_str().unwrap())
        .collect();
    assert_eq!(values, vec!["all", "PCOS", "Diabetes"]);
    assert_eq!(body["categories"][0]["label"], "All");
    assert_eq!(body["categories"][0]["selected"], true);

    let card = &body["posts"][0];
    assert_eq!(card["publish_date_display"], "January 5, 2025");
    assert_eq!(card["read_time_label"], "5 min read");
    assert!(card.get("content").is_none());
}

#[tokio::test]
async fn listing_filters_by_category() {
    let (app, _) = app_with(seeded());
    let (status, body) = get(&app, "/api/v1/blog?category=Diabetes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected_category"], "Diabetes");
    assert_eq!(slugs(&body["posts"]), vec!["c"]);

    let (_, body) = get(&app, "/api/v1/blog?category=Weight%20Loss").await;
    assert_eq!(body["posts"], json!([]));
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let (app, _) = app_with(seeded());
    let (status, body) = get(&app, "/api/v1/blog?category=Cardiology").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_CATEGORY");
}

#[tokio::test]
async fn listing_reports_backend_outage() {
    let (app, backend) = app_with(seeded());
    backend.set_unavailable(true);
    let (status, body) = get(&app, "/api/v1/blog").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn detail_includes_related_from_recent_pool() {
    let (app, _) = app_with(seeded());
    let (status, body) = get(&app, "/api/v1/blog/a").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["post"]["slug"], "a");
    assert_eq!(body["post"]["content"], "<p>Evidence-based content.</p>");
    assert_eq!(body["post"]["author"], "Dr. Patel");
    assert_eq!(slugs(&body["related"]), vec!["b", "d"]);
}

#[tokio::test]
async fn draft_and_missing_posts_are_not_found() {
    let (app, _) = app_with(seeded());

    let (status, body) = get(&app, "/api/v1/blog/draft-pcos").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");

    let (status, _) = get(&app, "/api/v1/blog/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
