/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - backend: 外部ブログ API クライアント
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::backend::BlogBackend;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn BlogBackend>,
    pub related_pool_limit: usize,
}

impl AppState {
    pub fn new(backend: Arc<dyn BlogBackend>, related_pool_limit: usize) -> Self {
        Self {
            backend,
            related_pool_limit,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.backend.backend_name())
            .field("related_pool_limit", &self.related_pool_limit)
            .finish()
    }
}
