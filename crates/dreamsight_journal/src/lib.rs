//! In-memory bookkeeping for analyzed dreams.
//!
//! Nothing here is persisted: a [`DreamArchive`] lives as long as the
//! session that owns it.

mod archive;
mod community;
mod error;
pub mod format;
mod journal;

pub use archive::{submit_dream, DreamArchive};
pub use community::{Comment, CommunityFeed};
pub use error::JournalError;
pub use journal::{Journal, JournalQuery, SortOrder};
