//! Blog service layer - sole mediator between transport and the content
//! store. Enforces the write-side authentication contract, the validation
//! boundary, and query shape.

mod drafts;
mod published;

pub use drafts::DraftService;
pub use published::PublishedService;

use uuid::Uuid;

/// The authenticated actor behind a write. Reads never need one.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub user_id: Uuid,
}
