/*
 * Responsibility
 * - /admin/blogs 系 CRUD handler
 * - body は PostDraft (フォームの生の値)。検証と tags 正規化は AdminPanel 経由
 * - 変更が成功したら一覧を取り直して返す
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::v1::dto::admin::{AdminListResponse, EditorResponse, MutationResponse, rows},
    error::AppError,
    services::{
        admin::AdminPanel,
        editor::{EditorMode, PostDraft},
    },
    state::AppState,
};

pub async fn list_blogs(State(state): State<AppState>) -> Result<Json<AdminListResponse>, AppError> {
    let mut panel = AdminPanel::new();
    panel.refresh(state.backend.as_ref()).await?;

    Ok(Json(AdminListResponse {
        posts: rows(panel.posts()),
    }))
}

pub async fn new_blog_form() -> Json<EditorResponse> {
    Json(EditorResponse::new(EditorMode::Create, PostDraft::blank()))
}

pub async fn edit_blog_form(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<EditorResponse>, AppError> {
    let post = state
        .backend
        .get_post(&slug)
        .await?
        .ok_or(AppError::not_found("blog"))?;

    let mut panel = AdminPanel::new();
    let session = panel.open_edit(&post);

    Ok(Json(EditorResponse::new(
        session.mode.clone(),
        session.draft.clone(),
    )))
}

pub async fn create_blog(
    State(state): State<AppState>,
    Json(draft): Json<PostDraft>,
) -> Result<(StatusCode, Json<MutationResponse>), AppError> {
    let mut panel = AdminPanel::new();
    panel.open(EditorMode::Create, draft);

    let response = submit(&mut panel, &state).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_blog(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(draft): Json<PostDraft>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut panel = AdminPanel::new();
    panel.open(EditorMode::Edit { slug }, draft);

    Ok(Json(submit(&mut panel, &state).await?))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<MutationResponse>, AppError> {
    let mut panel = AdminPanel::new();
    let message = panel.delete(state.backend.as_ref(), &slug).await?;

    Ok(Json(MutationResponse {
        message,
        post: None,
        warnings: Vec::new(),
        posts: rows(panel.posts()),
    }))
}

async fn submit(panel: &mut AdminPanel, state: &AppState) -> Result<MutationResponse, AppError> {
    let warnings = panel
        .editor()
        .map(|session| session.draft.warnings())
        .unwrap_or_default();

    let outcome = panel.submit(state.backend.as_ref()).await?;

    Ok(MutationResponse {
        message: outcome.message,
        post: Some((&outcome.post).into()),
        warnings,
        posts: rows(panel.posts()),
    })
}
