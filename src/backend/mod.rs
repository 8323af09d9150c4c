/*
 * Responsibility
 * - 外部ブログ backend (REST, base path /api) との契約
 * - 実装の差し替え点 (HTTP / in-memory) を trait で切る
 */
mod client;
mod error;
mod http;
mod memory;

pub use client::{BlogBackend, ListQuery};
pub use error::{BackendError, BackendResult};
pub use http::HttpBlogBackend;
pub use memory::InMemoryBackend;
