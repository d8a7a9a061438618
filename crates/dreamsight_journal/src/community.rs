use crate::error::JournalError;
use chrono::{DateTime, Utc};
use dreamsight_core::DreamEntry;
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: Uuid,
    pub dream_id: Uuid,
    pub text: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Dreams the user chose to share, with the local user's likes and comments.
#[derive(Debug, Clone)]
pub struct CommunityFeed {
    shared: Vec<DreamEntry>,
    liked: HashSet<Uuid>,
    comments: Vec<Comment>,
    author: String,
}

impl CommunityFeed {
    pub fn new(author: impl Into<String>) -> Self {
        Self {
            shared: Vec::new(),
            liked: HashSet::new(),
            comments: Vec::new(),
            author: author.into(),
        }
    }

    pub fn share(&mut self, entry: DreamEntry) {
        self.shared.insert(0, entry);
    }

    /// Shared dreams, newest first.
    pub fn entries(&self) -> &[DreamEntry] {
        &self.shared
    }

    pub fn get(&self, id: Uuid) -> Option<&DreamEntry> {
        self.shared.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.shared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.is_empty()
    }

    /// Flip the like on a shared dream; returns whether it is now liked.
    pub fn toggle_like(&mut self, dream_id: Uuid) -> Result<bool, JournalError> {
        self.ensure_shared(dream_id)?;
        if self.liked.remove(&dream_id) {
            Ok(false)
        } else {
            self.liked.insert(dream_id);
            Ok(true)
        }
    }

    pub fn is_liked(&self, dream_id: Uuid) -> bool {
        self.liked.contains(&dream_id)
    }

    /// Number of shared dreams currently liked.
    pub fn like_count(&self) -> usize {
        self.liked.len()
    }

    /// Attach a comment to a shared dream. Blank text is ignored (`Ok(None)`).
    pub fn add_comment(
        &mut self,
        dream_id: Uuid,
        text: &str,
    ) -> Result<Option<Comment>, JournalError> {
        self.ensure_shared(dream_id)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let comment = Comment {
            id: Uuid::new_v4(),
            dream_id,
            text: text.to_string(),
            author: self.author.clone(),
            created_at: Utc::now(),
        };
        self.comments.push(comment.clone());
        tracing::debug!(%dream_id, "comment added");
        Ok(Some(comment))
    }

    /// Comments on one dream, oldest first.
    pub fn comments_for(&self, dream_id: Uuid) -> Vec<&Comment> {
        self.comments
            .iter()
            .filter(|c| c.dream_id == dream_id)
            .collect()
    }

    fn ensure_shared(&self, dream_id: Uuid) -> Result<(), JournalError> {
        match self.get(dream_id) {
            Some(_) => Ok(()),
            None => Err(JournalError::UnknownEntry(dream_id)),
        }
    }
}

impl Default for CommunityFeed {
    fn default() -> Self {
        Self::new(dreamsight_core::CommunityConfig::default().comment_author)
    }
}
