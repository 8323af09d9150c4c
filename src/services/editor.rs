/*
 * Responsibility
 * - 管理画面フォームの下書き (PostDraft) と BlogPostPayload の相互変換
 * - tags は「カンマ区切り文字列」⇔「Vec<String>」の変換をこの境界だけで行う
 * - 送信前のローカル検証は BlogPostPayload::validate に任せる
 */
use serde::{Deserialize, Serialize};

use crate::models::{
    BlogPost, BlogPostPayload, Category, META_DESCRIPTION_SOFT_LIMIT, PostStatus, ValidationError,
    meta_description_over_limit,
};

/// Splits the editor's tag string on `,`, trims each piece, drops empties.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Renders tags for the editor's single-line input.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum EditorMode {
    Create,
    Edit { slug: String },
}

/// Editable form state. `tags` and `featured_image` are raw input strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub tags: String,
    pub meta_description: String,
    pub featured_image: String,
    pub status: PostStatus,
}

impl Default for PostDraft {
    // New-post template.
    fn default() -> Self {
        Self {
            title: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: Category::MedicalEducation,
            tags: String::new(),
            meta_description: String::new(),
            featured_image: String::new(),
            status: PostStatus::Published,
        }
    }
}

impl PostDraft {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_post(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            category: post.category,
            tags: join_tags(&post.tags),
            meta_description: post.meta_description.clone(),
            featured_image: post.featured_image.clone().unwrap_or_default(),
            status: post.status,
        }
    }

    pub fn meta_description_chars(&self) -> usize {
        self.meta_description.chars().count()
    }

    /// Non-blocking notices shown next to the form.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if meta_description_over_limit(&self.meta_description) {
            let chars = self.meta_description_chars();
            warnings.push(format!(
                "meta_description is {chars} characters; {META_DESCRIPTION_SOFT_LIMIT} or fewer is recommended"
            ));
        }
        warnings
    }

    /// Converts to the backend payload and validates it. Text fields pass through untouched.
    pub fn to_payload(&self) -> Result<BlogPostPayload, ValidationError> {
        let featured_image = match self.featured_image.trim() {
            "" => None,
            url => Some(url.to_string()),
        };

        let payload = BlogPostPayload {
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            category: self.category,
            tags: normalize_tags(&self.tags),
            meta_description: self.meta_description.clone(),
            featured_image,
            status: self.status,
        };
        payload.validate()?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::listing::tests::post;

    fn filled() -> PostDraft {
        PostDraft {
            title: "Metabolism myths".to_string(),
            excerpt: "Five myths.".to_string(),
            content: "<h2>Myth 1</h2>".to_string(),
            category: Category::MetabolicHealth,
            tags: "metabolism, myths".to_string(),
            meta_description: "Common metabolism myths.".to_string(),
            featured_image: String::new(),
            status: PostStatus::Draft,
        }
    }

    #[test]
    fn normalizes_messy_tag_string() {
        assert_eq!(
            normalize_tags(" weight loss ,  metabolism,,health "),
            vec!["weight loss", "metabolism", "health"]
        );
    }

    #[test]
    fn normalized_tags_are_clean() {
        for raw in ["", ",", " , ,", "a,,b", "  x  ", "\ttab\t, new\nline ,"] {
            for tag in normalize_tags(raw) {
                assert!(!tag.is_empty());
                assert_eq!(tag.trim(), tag);
            }
        }
    }

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(normalize_tags("b, a, b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn join_then_normalize_round_trips() {
        let cases: Vec<Vec<String>> = vec![
            vec![],
            vec!["pcos".to_string()],
            vec!["weight loss".to_string(), "metabolism".to_string()],
            vec!["a".to_string(), "a".to_string(), "b c".to_string()],
        ];
        for tags in cases {
            assert_eq!(normalize_tags(&join_tags(&tags)), tags);
        }
    }

    #[test]
    fn blank_template_defaults() {
        let draft = PostDraft::blank();
        assert!(draft.title.is_empty());
        assert!(draft.tags.is_empty());
        assert!(draft.featured_image.is_empty());
        assert_eq!(draft.category, Category::MedicalEducation);
        assert_eq!(draft.status, PostStatus::Published);
    }

    #[test]
    fn loads_existing_post_for_edit() {
        let mut existing = post("x", Category::Pcos);
        existing.tags = vec!["pcos".to_string(), "insulin".to_string()];
        existing.featured_image = Some("https://cdn.example.org/x.jpg".to_string());

        let draft = PostDraft::from_post(&existing);
        assert_eq!(draft.tags, "pcos, insulin");
        assert_eq!(draft.featured_image, "https://cdn.example.org/x.jpg");
        assert_eq!(draft.category, Category::Pcos);

        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.tags, existing.tags);
        assert_eq!(payload.featured_image, existing.featured_image);
    }

    #[test]
    fn rejects_blank_required_fields() {
        let mut draft = filled();
        draft.content = "  \n ".to_string();
        assert_eq!(
            draft.to_payload(),
            Err(ValidationError::MissingField("content"))
        );

        assert_eq!(
            PostDraft::blank().to_payload(),
            Err(ValidationError::MissingField("title"))
        );
    }

    #[test]
    fn tags_are_optional_and_empty_image_is_absent() {
        let mut draft = filled();
        draft.tags = " , ".to_string();
        draft.featured_image = "   ".to_string();
        let payload = draft.to_payload().unwrap();
        assert!(payload.tags.is_empty());
        assert_eq!(payload.featured_image, None);
        assert_eq!(payload.status, PostStatus::Draft);
    }

    #[test]
    fn long_meta_description_warns_without_blocking() {
        let mut draft = filled();
        draft.meta_description = "m".repeat(161);
        assert_eq!(draft.meta_description_chars(), 161);
        assert_eq!(draft.warnings().len(), 1);
        assert_eq!(draft.to_payload().unwrap().meta_description.len(), 161);

        draft.meta_description = "m".repeat(160);
        assert!(draft.warnings().is_empty());
    }

    #[test]
    fn draft_follows_payload_rules() {
        let mut draft = filled();
        draft.meta_description = "é".repeat(161);
        let payload = draft.to_payload().unwrap();
        assert!(payload.meta_description_over_limit());
        assert_eq!(draft.warnings().len(), 1);

        let mut blank_excerpt = payload.clone();
        blank_excerpt.excerpt = " ".to_string();
        draft.excerpt = " ".to_string();
        assert_eq!(
            draft.to_payload().unwrap_err(),
            blank_excerpt.validate().unwrap_err()
        );
    }

    #[test]
    fn mode_serializes_with_tag() {
        let json = serde_json::to_value(EditorMode::Edit {
            slug: "x".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"mode": "edit", "slug": "x"}));
    }
}
