use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - a remark left on exactly one post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: String,
    pub text: String,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new, unedited comment on `post_id` authored by `user_id`.
    pub fn new(post_id: Uuid, user_id: impl Into<String>, text: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            post_id,
            user_id: user_id.into(),
            text,
            is_edited: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_authored_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Replace the text and mark the comment as edited.
    pub fn apply_edit(&mut self, text: String) {
        self.text = text;
        self.is_edited = true;
        self.updated_at = Utc::now().max(self.updated_at);
    }
}
