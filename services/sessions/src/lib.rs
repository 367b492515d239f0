//! Session authoring lifecycle
//!
//! A session is created as a draft, edited in place through repeated
//! save-draft calls, and made publicly visible by publishing it. Saving a
//! published session puts it back into draft. Only the owner can read or
//! change a session through the owner-scoped operations; anyone can list
//! published sessions.

pub mod error;
pub mod lifecycle;
pub mod listing;
pub mod models;
pub mod repositories;

pub use error::SessionError;
pub use lifecycle::SessionLifecycleService;
pub use listing::PublicListingService;
pub use models::{DraftContent, PublishInput, SaveDraftInput, Session, SessionStatus, parse_session_id};
pub use repositories::{InMemorySessionRepository, PgSessionRepository, SessionRepository};
