/*
 * Responsibility
 * - 管理画面の状態 (一覧 / 開いているフォーム) を明示的に持つ controller
 * - 作成・更新・削除は backend へ 1 リクエスト。成功したら一覧を取り直す
 * - 失敗時は一覧もフォームも変更しない (楽観的更新はしない)
 */
use thiserror::Error;
use tracing::{info, warn};

use crate::backend::{BackendError, BlogBackend, ListQuery};
use crate::models::{BlogPost, ValidationError};
use crate::services::editor::{EditorMode, PostDraft};

pub const CREATED_MESSAGE: &str = "Blog created successfully!";
pub const UPDATED_MESSAGE: &str = "Blog updated successfully!";
pub const DELETED_MESSAGE: &str = "Blog deleted successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Error saving blog. Please try again.";
pub const DELETE_FAILED_MESSAGE: &str = "Error deleting blog. Please try again.";

#[derive(Debug, Error)]
pub enum AdminError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("no editor is open")]
    NoOpenEditor,
    #[error("{message}")]
    Backend {
        message: &'static str,
        #[source]
        source: BackendError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    pub mode: EditorMode,
    pub draft: PostDraft,
}

/// Result of a successful create/update.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub message: &'static str,
    pub post: BlogPost,
}

#[derive(Debug, Default)]
pub struct AdminPanel {
    posts: Vec<BlogPost>,
    editor: Option<EditorSession>,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn editor(&self) -> Option<&EditorSession> {
        self.editor.as_ref()
    }

    /// Replaces the list with `GET /blogs` (all statuses).
    pub async fn refresh(&mut self, backend: &dyn BlogBackend) -> Result<(), BackendError> {
        self.posts = backend.list_posts(ListQuery::all()).await?;
        Ok(())
    }

    /// Opens the editor with an arbitrary draft, replacing any open one.
    pub fn open(&mut self, mode: EditorMode, draft: PostDraft) -> &mut EditorSession {
        self.editor.insert(EditorSession { mode, draft })
    }

    pub fn open_create(&mut self) -> &mut EditorSession {
        self.open(EditorMode::Create, PostDraft::blank())
    }

    pub fn open_edit(&mut self, post: &BlogPost) -> &mut EditorSession {
        let mode = EditorMode::Edit {
            slug: post.slug.clone(),
        };
        self.open(mode, PostDraft::from_post(post))
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Submits the open editor. Local validation runs before any request is sent.
    pub async fn submit(&mut self, backend: &dyn BlogBackend) -> Result<SaveOutcome, AdminError> {
        let session = self.editor.as_ref().ok_or(AdminError::NoOpenEditor)?;
        let payload = session.draft.to_payload()?;

        let saved = match &session.mode {
            EditorMode::Create => backend.create_post(&payload).await,
            EditorMode::Edit { slug } => backend.update_post(slug, &payload).await,
        };
        let post = saved.map_err(|source| {
            warn!(error = %source, "saving blog failed");
            AdminError::Backend {
                message: SAVE_FAILED_MESSAGE,
                source,
            }
        })?;

        let message = match session.mode {
            EditorMode::Create => CREATED_MESSAGE,
            EditorMode::Edit { .. } => UPDATED_MESSAGE,
        };
        info!(slug = %post.slug, status = %post.status, "{message}");

        self.close_editor();
        self.refresh_after_mutation(backend).await;

        Ok(SaveOutcome { message, post })
    }

    pub async fn delete(
        &mut self,
        backend: &dyn BlogBackend,
        slug: &str,
    ) -> Result<&'static str, AdminError> {
        backend.delete_post(slug).await.map_err(|source| {
            warn!(error = %source, %slug, "deleting blog failed");
            AdminError::Backend {
                message: DELETE_FAILED_MESSAGE,
                source,
            }
        })?;
        info!(%slug, "{DELETED_MESSAGE}");

        self.refresh_after_mutation(backend).await;
        Ok(DELETED_MESSAGE)
    }

    // The mutation already succeeded; a failed refetch keeps the previous list.
    async fn refresh_after_mutation(&mut self, backend: &dyn BlogBackend) {
        if let Err(e) = self.refresh(backend).await {
            warn!(error = %e, "refreshing blog list failed");
        }
    }
}
