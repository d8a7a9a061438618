use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalError {
    #[error("dream description is empty")]
    EmptyDescription,

    #[error("select at least one emotion before analyzing")]
    NoEmotions,

    #[error("no shared dream with id {0}")]
    UnknownEntry(Uuid),
}
