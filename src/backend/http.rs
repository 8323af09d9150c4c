//! reqwest-backed client for the blog REST backend.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;

use super::{BackendError, BackendResult, BlogBackend, ListQuery};
use crate::models::{BlogPost, BlogPostPayload, Category};

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    categories: Vec<Category>,
}

#[derive(Clone, Debug)]
pub struct HttpBlogBackend {
    client: Client,
    api_base: Url,
}

impl HttpBlogBackend {
    /// `backend_url` is the backend origin; requests go to `{backend_url}/api/...`.
    pub fn new(backend_url: &str, timeout: Duration) -> BackendResult<Self> {
        let mut api_base =
            Url::parse(backend_url).map_err(|e| BackendError::InvalidBaseUrl(e.to_string()))?;
        if api_base.cannot_be_a_base() {
            return Err(BackendError::InvalidBaseUrl(backend_url.to_string()));
        }
        api_base
            .path_segments_mut()
            .map_err(|_| BackendError::InvalidBaseUrl(backend_url.to_string()))?
            .pop_if_empty()
            .push("api");

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, api_base })
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    fn endpoint(&self, segments: &[&str]) -> BackendResult<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| BackendError::InvalidBaseUrl(self.api_base.to_string()))?
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> BackendResult<reqwest::Response> {
        let response = request.send().await.map_err(|e| {
            warn!(error = %e, "backend request failed");
            BackendError::from(e)
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BackendError::NotFound);
        }
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(status = status.as_u16(), error = %e, "reading backend error body failed");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), %body, "backend rejected request");
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> BackendResult<T> {
        let bytes = self.send(request).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

pub(crate) fn list_query_pairs(query: &ListQuery) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(status) = query.status {
        pairs.push(("status", status.as_str().to_string()));
    }
    if let Some(limit) = query.limit {
        pairs.push(("limit", limit.to_string()));
    }
    pairs
}

#[async_trait]
impl BlogBackend for HttpBlogBackend {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn list_posts(&self, query: ListQuery) -> BackendResult<Vec<BlogPost>> {
        let url = self.endpoint(&["blogs"])?;
        debug!(%url, ?query, "GET blogs");
        self.send_json(self.client.get(url).query(&list_query_pairs(&query)))
            .await
    }

    async fn get_post(&self, slug: &str) -> BackendResult<Option<BlogPost>> {
        let url = self.endpoint(&["blogs", slug])?;
        debug!(%url, "GET blog");
        match self.send_json(self.client.get(url)).await {
            Ok(post) => Ok(Some(post)),
            Err(BackendError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn list_categories(&self) -> BackendResult<Vec<Category>> {
        let url = self.endpoint(&["blog-categories"])?;
        debug!(%url, "GET blog-categories");
        let res: CategoriesResponse = self.send_json(self.client.get(url)).await?;
        Ok(res.categories)
    }

    async fn create_post(&self, payload: &BlogPostPayload) -> BackendResult<BlogPost> {
        let url = self.endpoint(&["blogs"])?;
        debug!(%url, "POST blogs");
        self.send_json(self.client.post(url).json(payload)).await
    }

    async fn update_post(&self, slug: &str, payload: &BlogPostPayload) -> BackendResult<BlogPost> {
        let url = self.endpoint(&["blogs", slug])?;
        debug!(%url, "PUT blog");
        self.send_json(self.client.put(url).json(payload)).await
    }

    async fn delete_post(&self, slug: &str) -> BackendResult<()> {
        let url = self.endpoint(&["blogs", slug])?;
        debug!(%url, "DELETE blog");
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PostStatus;

    fn backend(url: &str) -> HttpBlogBackend {
        HttpBlogBackend::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn appends_api_to_origin() {
        assert_eq!(
            backend("http://localhost:8001").api_base().as_str(),
            "http://localhost:8001/api"
        );
        assert_eq!(
            backend("http://localhost:8001/").api_base().as_str(),
            "http://localhost:8001/api"
        );
        assert_eq!(
            backend("https://example.org/cms").api_base().as_str(),
            "https://example.org/cms/api"
        );
    }

    #[test]
    fn slug_is_a_single_escaped_segment() {
        let b = backend("http://localhost:8001");
        let url = b.endpoint(&["blogs", "a/b c"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8001/api/blogs/a%2Fb%20c");
    }

    #[test]
    fn rejects_non_base_urls() {
        assert!(HttpBlogBackend::new("not a url", Duration::from_secs(1)).is_err());
        assert!(HttpBlogBackend::new("mailto:ops@example.org", Duration::from_secs(1)).is_err());
    }

    #[test]
    fn list_query_encodes_status_and_limit() {
        assert!(list_query_pairs(&ListQuery::all()).is_empty());
        assert_eq!(
            list_query_pairs(&ListQuery::recent_published(4)),
            vec![
                ("status", PostStatus::Published.as_str().to_string()),
                ("limit", "4".to_string())
            ]
        );
    }

    #[test]
    fn decodes_categories_envelope() {
        let res: CategoriesResponse =
            serde_json::from_str(r#"{"categories":["PCOS","Diabetes"]}"#).unwrap();
        assert_eq!(res.categories, vec![Category::Pcos, Category::Diabetes]);
    }
}
