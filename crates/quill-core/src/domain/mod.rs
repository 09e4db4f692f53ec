//! Domain entities - the core business objects.

mod draft;
mod localize;
mod published;
mod user;

pub use draft::{
    DraftFilters, DraftPatch, DraftPost, DraftSort, NewDraft, Priority, SortField, SortOrder,
    Status, StatusCounts, apply_filters, status_counts,
};
pub use localize::{Language, LocalizedPost, localize};
pub use published::{
    NewPublishedPost, PublishedFilters, PublishedPatch, PublishedPost, reading_time_minutes,
};
pub use user::User;
