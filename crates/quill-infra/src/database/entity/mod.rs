//! SeaORM entities mirroring the content-store schema.

pub mod draft_post;
pub mod published_post;
pub mod user;
