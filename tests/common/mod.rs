#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use wmi_blog::{
    app::build_router,
    backend::InMemoryBackend,
    models::{BlogPost, Category, PostStatus},
    state::AppState,
};

pub fn post(slug: &str, category: Category, status: PostStatus) -> BlogPost {
    BlogPost {
        id: format!("id-{slug}"),
        slug: slug.to_string(),
        title: format!("Title {slug}"),
        excerpt: format!("Excerpt {slug}"),
        content: "<p>Evidence-based content.</p>".to_string(),
        category,
        tags: vec!["health".to_string()],
        meta_description: format!("Meta {slug}"),
        featured_image: None,
        status,
        author: "Dr. Patel".to_string(),
        author_title: "Obesity Medicine Specialist".to_string(),
        publish_date: Utc.with_ymd_and_hms(2025, 1, 5, 8, 0, 0).unwrap(),
        read_time: 5,
        views: 12,
    }
}

pub fn app_with(posts: Vec<BlogPost>) -> (Router, Arc<InMemoryBackend>) {
    let backend = Arc::new(InMemoryBackend::with_posts(posts));
    let state = AppState::new(backend.clone(), 4);
    (build_router(state), backend)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub fn slugs(posts: &Value) -> Vec<String> {
    posts
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap().to_string())
        .collect()
}
