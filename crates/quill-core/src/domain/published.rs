use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// PublishedPost entity - a publicly readable blog post.
///
/// The slug is the public routing key and is unique across all published
/// posts. The `*_es` fields are optional Spanish variants resolved at read
/// time by [`crate::domain::localize`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedPost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub title_es: Option<String>,
    pub excerpt_es: Option<String>,
    pub content_es: Option<String>,
    pub category_es: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub featured_image_url: Option<String>,
    pub author_name: String,
    pub author_bio: Option<String>,
    pub published_at: DateTime<Utc>,
    pub view_count: i64,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for publishing a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPublishedPost {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub title_es: Option<String>,
    pub excerpt_es: Option<String>,
    pub content_es: Option<String>,
    pub category_es: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub featured_image_url: Option<String>,
    #[serde(default)]
    pub author_name: String,
    pub author_bio: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_featured: bool,
}

impl NewPublishedPost {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if self.slug.trim().is_empty() {
            return Err(DomainError::Validation("slug must not be empty".into()));
        }
        if self
            .slug
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && c != '-')
        {
            return Err(DomainError::Validation(format!(
                "slug must be URL-safe (lowercase alphanumerics and hyphens): {}",
                self.slug
            )));
        }
        Ok(())
    }
}

impl PublishedPost {
    pub fn new(user_id: Uuid, input: NewPublishedPost) -> Self {
        let now = Utc::now();
        let mut tags = input.tags;
        tags.sort();
        tags.dedup();
        Self {
            id: Uuid::new_v4(),
            user_id,
            slug: input.slug,
            title: input.title,
            excerpt: input.excerpt,
            content: input.content,
            title_es: input.title_es,
            excerpt_es: input.excerpt_es,
            content_es: input.content_es,
            category_es: input.category_es,
            category: input.category,
            tags,
            featured_image_url: input.featured_image_url,
            author_name: input.author_name,
            author_bio: input.author_bio,
            published_at: input.published_at.unwrap_or(now),
            view_count: 0,
            is_featured: input.is_featured,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. `view_count` and ownership are not
    /// client-settable and stay untouched.
    pub fn apply(&mut self, patch: PublishedPatch) {
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(title_es) = patch.title_es {
            self.title_es = title_es;
        }
        if let Some(excerpt_es) = patch.excerpt_es {
            self.excerpt_es = excerpt_es;
        }
        if let Some(content_es) = patch.content_es {
            self.content_es = content_es;
        }
        if let Some(category_es) = patch.category_es {
            self.category_es = category_es;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(mut tags) = patch.tags {
            tags.sort();
            tags.dedup();
            self.tags = tags;
        }
        if let Some(url) = patch.featured_image_url {
            self.featured_image_url = url;
        }
        if let Some(author_name) = patch.author_name {
            self.author_name = author_name;
        }
        if let Some(author_bio) = patch.author_bio {
            self.author_bio = author_bio;
        }
        if let Some(published_at) = patch.published_at {
            self.published_at = published_at;
        }
        if let Some(is_featured) = patch.is_featured {
            self.is_featured = is_featured;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a published post. Nested `Option`s distinguish
/// "leave untouched" from "clear the field".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishedPatch {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub title_es: Option<Option<String>>,
    pub excerpt_es: Option<Option<String>>,
    pub content_es: Option<Option<String>>,
    pub category_es: Option<Option<String>>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured_image_url: Option<Option<String>>,
    pub author_name: Option<String>,
    pub author_bio: Option<Option<String>>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_featured: Option<bool>,
}

/// Narrowing criteria for the public listing.
///
/// `offset` requires `limit`; the pagination window is
/// `[offset, offset + limit - 1]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishedFilters {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl PublishedFilters {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.offset.is_some() && self.limit.is_none() {
            return Err(DomainError::Validation(
                "offset requires a limit".into(),
            ));
        }
        Ok(())
    }
}

/// Estimated reading time at 200 words per minute, rounded up.
pub fn reading_time_minutes(content: &str) -> u32 {
    const WORDS_PER_MINUTE: u32 = 200;
    let words = content.split_whitespace().count() as u32;
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
