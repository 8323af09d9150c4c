/*
 * Responsibility
 * - middleware の公開インターフェース
 * - pub fn http::apply(...), cors::apply(...) など
 */
pub mod cors;
pub mod http;
pub mod security_headers;
