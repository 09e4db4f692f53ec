use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Editorial priority of a planned post. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(DomainError::Validation(format!(
                "unknown priority: {other}"
            ))),
        }
    }
}

/// Editorial pipeline stage of a planned post. Closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Idea,
    Outline,
    Draft,
    #[serde(rename = "Ready to Publish")]
    ReadyToPublish,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Idea => "Idea",
            Status::Outline => "Outline",
            Status::Draft => "Draft",
            Status::ReadyToPublish => "Ready to Publish",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Status {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Idea" => Ok(Status::Idea),
            "Outline" => Ok(Status::Outline),
            "Draft" => Ok(Status::Draft),
            "Ready to Publish" => Ok(Status::ReadyToPublish),
            other => Err(DomainError::Validation(format!("unknown status: {other}"))),
        }
    }
}

/// DraftPost entity - an internal blog-post planning record.
/// Never publicly readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPost {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub target_publication_date: Option<NaiveDate>,
    pub category: String,
    pub priority: Priority,
    pub status: Status,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a draft post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_publication_date: Option<NaiveDate>,
    #[serde(default)]
    pub category: String,
    pub priority: Priority,
    pub status: Status,
    #[serde(default)]
    pub author: String,
}

impl NewDraft {
    /// Single validation boundary, applied at submit time.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        Ok(())
    }
}

impl DraftPost {
    /// Materialize a validated input as a new entity owned by `user_id`.
    pub fn new(user_id: Uuid, input: NewDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: input.title,
            description: input.description,
            target_publication_date: input.target_publication_date,
            category: input.category,
            priority: input.priority,
            status: input.status,
            author: input.author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update. Only supplied fields change;
    /// `updated_at` is assigned here rather than left to the store default.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.target_publication_date {
            self.target_publication_date = date;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update for a draft post. `None` leaves the field untouched.
/// The nested `Option` on the date distinguishes "leave" from "clear".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_publication_date: Option<Option<NaiveDate>>,
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub author: Option<String>,
}

/// Sortable columns of the draft listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Title,
    TargetPublicationDate,
    Priority,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Requested ordering for the draft listing.
#[derive(Debug, Clone, Copy)]
pub struct DraftSort {
    pub field: SortField,
    pub order: SortOrder,
}

impl Default for DraftSort {
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            order: SortOrder::Desc,
        }
    }
}

/// Narrowing criteria for draft listings. Empty criteria match everything;
/// non-empty criteria combine with logical AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftFilters {
    pub search: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

impl DraftFilters {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().is_none_or(str::is_empty)
            && self.status.is_none()
            && self.priority.is_none()
            && self.category.as_deref().is_none_or(str::is_empty)
    }

    /// Whether a single post satisfies every non-empty criterion.
    pub fn matches(&self, post: &DraftPost) -> bool {
        if let Some(query) = self.search.as_deref().filter(|q| !q.is_empty()) {
            let query = query.to_lowercase();
            if !post.title.to_lowercase().contains(&query)
                && !post.description.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        if self.status.is_some_and(|status| post.status != status) {
            return false;
        }
        if self.priority.is_some_and(|priority| post.priority != priority) {
            return false;
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if post.category != category {
                return false;
            }
        }
        true
    }
}

/// Local filter pass over an already-fetched collection. No I/O; re-run
/// whenever filter state or the source collection changes.
pub fn apply_filters(posts: &[DraftPost], filters: &DraftFilters) -> Vec<DraftPost> {
    posts
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}

/// Dashboard tallies over a draft collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub total: usize,
    pub idea: usize,
    pub outline: usize,
    pub draft: usize,
    pub ready: usize,
}

pub fn status_counts(posts: &[DraftPost]) -> StatusCounts {
    let tally = |s: Status| posts.iter().filter(|p| p.status == s).count();
    StatusCounts {
        total: posts.len(),
        idea: tally(Status::Idea),
        outline: tally(Status::Outline),
        draft: tally(Status::Draft),
        ready: tally(Status::ReadyToPublish),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, status: Status, priority: Priority, category: &str) -> DraftPost {
        DraftPost::new(
            Uuid::new_v4(),
            NewDraft {
                title: title.to_string(),
                description: format!("notes about {title}"),
                target_publication_date: None,
                category: category.to_string(),
                priority,
                status,
                author: "Ana".to_string(),
            },
        )
    }

    #[test]
    fn empty_filters_return_collection_unchanged() {
        let posts = vec![
            draft("Rust tips", Status::Idea, Priority::Low, "Dev"),
            draft("AI roundup", Status::Draft, Priority::High, "AI"),
        ];
        let out = apply_filters(&posts, &DraftFilters::default());
        assert_eq!(out.len(), posts.len());
    }

    #[test]
    fn status_filter_selects_exact_matches() {
        let posts = vec![
            draft("a", Status::Draft, Priority::Low, ""),
            draft("b", Status::Draft, Priority::High, ""),
            draft("c", Status::Idea, Priority::High, ""),
            draft("d", Status::ReadyToPublish, Priority::High, ""),
        ];
        let filters = DraftFilters {
            status: Some(Status::Draft),
            ..Default::default()
        };
        let out = apply_filters(&posts, &filters);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|p| p.status == Status::Draft));
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let posts = vec![
            draft("Scaling Postgres", Status::Idea, Priority::Low, "Dev"),
            draft("Weekly notes", Status::Idea, Priority::Low, "Dev"),
        ];
        let filters = DraftFilters {
            search: Some("POSTGRES".to_string()),
            ..Default::default()
        };
        let out = apply_filters(&posts, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Scaling Postgres");

        // matches description too
        let filters = DraftFilters {
            search: Some("notes about".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_filters(&posts, &filters).len(), 2);
    }

    #[test]
    fn criteria_combine_with_logical_and() {
        let posts = vec![
            draft("a", Status::Draft, Priority::High, "AI"),
            draft("b", Status::Draft, Priority::Low, "AI"),
            draft("c", Status::Idea, Priority::High, "AI"),
        ];
        let filters = DraftFilters {
            status: Some(Status::Draft),
            priority: Some(Priority::High),
            category: Some("AI".to_string()),
            ..Default::default()
        };
        let out = apply_filters(&posts, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "a");
    }

    #[test]
    fn filtering_is_idempotent() {
        let posts = vec![
            draft("a", Status::Draft, Priority::High, "AI"),
            draft("b", Status::Idea, Priority::Low, "Web"),
            draft("c", Status::Draft, Priority::Low, "AI"),
        ];
        let filters = DraftFilters {
            category: Some("AI".to_string()),
            ..Default::default()
        };
        let once = apply_filters(&posts, &filters);
        let twice = apply_filters(&once, &filters);
        let ids_once: Vec<_> = once.iter().map(|p| p.id).collect();
        let ids_twice: Vec<_> = twice.iter().map(|p| p.id).collect();
        assert_eq!(ids_once, ids_twice);
    }

    #[test]
    fn patch_changes_only_supplied_fields() {
        let mut post = draft("Original", Status::Idea, Priority::Low, "Dev");
        let before = post.clone();
        post.apply(DraftPatch {
            status: Some(Status::Outline),
            ..Default::default()
        });
        assert_eq!(post.status, Status::Outline);
        assert_eq!(post.title, before.title);
        assert_eq!(post.priority, before.priority);
        assert!(post.updated_at >= before.updated_at);
    }

    #[test]
    fn patch_can_clear_target_date() {
        let mut post = draft("a", Status::Idea, Priority::Low, "");
        post.target_publication_date = NaiveDate::from_ymd_opt(2026, 1, 15);
        post.apply(DraftPatch {
            target_publication_date: Some(None),
            ..Default::default()
        });
        assert_eq!(post.target_publication_date, None);
    }

    #[test]
    fn empty_title_fails_validation() {
        let input = NewDraft {
            title: "   ".to_string(),
            description: String::new(),
            target_publication_date: None,
            category: String::new(),
            priority: Priority::Medium,
            status: Status::Idea,
            author: String::new(),
        };
        assert!(matches!(
            input.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn status_round_trips_through_display_and_from_str() {
        for status in [
            Status::Idea,
            Status::Outline,
            Status::Draft,
            Status::ReadyToPublish,
        ] {
            let parsed: Status = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("Published".parse::<Status>().is_err());
        assert!("Urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn status_counts_tally_each_stage() {
        let posts = vec![
            draft("a", Status::Idea, Priority::Low, ""),
            draft("b", Status::Draft, Priority::Low, ""),
            draft("c", Status::Draft, Priority::Low, ""),
            draft("d", Status::ReadyToPublish, Priority::Low, ""),
        ];
        let counts = status_counts(&posts);
        assert_eq!(counts.total, 4);
        assert_eq!(counts.idea, 1);
        assert_eq!(counts.outline, 0);
        assert_eq!(counts.draft, 2);
        assert_eq!(counts.ready, 1);
    }
}
