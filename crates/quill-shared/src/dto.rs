//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use quill_core::domain::{
    Language, LocalizedPost, Priority, SortField, SortOrder, Status, StatusCounts,
};

/// Request to register a new author account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Query string of the public post listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListQuery {
    pub category: Option<String>,
    pub tag: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    #[serde(default)]
    pub lang: Language,
}

/// Query string shared by the featured/latest selections.
#[derive(Debug, Clone, Deserialize)]
pub struct HighlightQuery {
    pub limit: Option<u64>,
    #[serde(default)]
    pub lang: Language,
}

/// Query string of the detail route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostDetailQuery {
    #[serde(default)]
    pub lang: Language,
}

/// Detail-page payload: the localized post, up to three related reads,
/// and the estimated reading time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub post: LocalizedPost,
    pub related: Vec<LocalizedPost>,
    pub reading_time_minutes: u32,
}

/// Query string of the draft listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DraftListQuery {
    pub sort: Option<SortField>,
    pub order: Option<SortOrder>,
    pub search: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub category: Option<String>,
}

/// Draft listing payload with the dashboard tallies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftListResponse {
    pub drafts: Vec<quill_core::domain::DraftPost>,
    pub counts: StatusCounts,
}
