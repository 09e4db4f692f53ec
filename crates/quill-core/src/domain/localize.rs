//! Read-time localization of published posts.
//!
//! Resolution is per-field: a post with a translated title and an
//! untranslated body yields the translated title alongside the base body.
//! The projection is computed on read and never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::published::PublishedPost;

/// Site languages. English is the base language; only Spanish has stored
/// field variants, so Turkish resolves to base fields throughout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Tr,
}

/// The per-language projection of a published post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedPost {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub featured_image_url: Option<String>,
    pub author_name: String,
    pub author_bio: Option<String>,
    pub published_at: DateTime<Utc>,
    pub view_count: i64,
    pub is_featured: bool,
}

fn pick(variant: Option<&str>, base: &str, language: Language) -> String {
    match language {
        Language::Es => match variant {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => base.to_string(),
        },
        Language::En | Language::Tr => base.to_string(),
    }
}

/// Project a stored post into `language`, falling back field-by-field to
/// the base text where no non-empty variant exists.
pub fn localize(post: &PublishedPost, language: Language) -> LocalizedPost {
    LocalizedPost {
        id: post.id,
        slug: post.slug.clone(),
        title: pick(post.title_es.as_deref(), &post.title, language),
        excerpt: pick(post.excerpt_es.as_deref(), &post.excerpt, language),
        content: pick(post.content_es.as_deref(), &post.content, language),
        category: pick(post.category_es.as_deref(), &post.category, language),
        tags: post.tags.clone(),
        featured_image_url: post.featured_image_url.clone(),
        author_name: post.author_name.clone(),
        author_bio: post.author_bio.clone(),
        published_at: post.published_at,
        view_count: post.view_count,
        is_featured: post.is_featured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::published::NewPublishedPost;

    fn post() -> PublishedPost {
        PublishedPost::new(
            Uuid::new_v4(),
            NewPublishedPost {
                slug: "hello".to_string(),
                title: "Hello".to_string(),
                excerpt: "An excerpt".to_string(),
                content: "The content".to_string(),
                title_es: Some("Hola".to_string()),
                excerpt_es: None,
                content_es: Some(String::new()),
                category_es: Some("IA".to_string()),
                category: "AI".to_string(),
                tags: vec!["intro".to_string()],
                featured_image_url: None,
                author_name: "Ana".to_string(),
                author_bio: None,
                published_at: None,
                is_featured: false,
            },
        )
    }

    #[test]
    fn spanish_falls_back_per_field() {
        let localized = localize(&post(), Language::Es);
        assert_eq!(localized.title, "Hola");
        // no variant stored
        assert_eq!(localized.excerpt, "An excerpt");
        // empty variant counts as absent
        assert_eq!(localized.content, "The content");
        assert_eq!(localized.category, "IA");
    }

    #[test]
    fn base_language_ignores_variants() {
        let localized = localize(&post(), Language::En);
        assert_eq!(localized.title, "Hello");
        assert_eq!(localized.category, "AI");
    }

    #[test]
    fn language_without_variants_resolves_to_base() {
        let localized = localize(&post(), Language::Tr);
        assert_eq!(localized.title, "Hello");
        assert_eq!(localized.content, "The content");
    }
}
