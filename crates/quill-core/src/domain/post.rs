use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Comment;

/// Post entity - a user-authored post together with its comment thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub is_edited: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a new, unedited post owned by `user_id`.
    pub fn new(user_id: impl Into<String>, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            title,
            content,
            is_edited: false,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Replace title and content and mark the post as edited.
    ///
    /// `is_edited` only ever moves from false to true.
    pub fn apply_edit(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.is_edited = true;
        self.touch();
    }

    /// Sort the comment thread newest first.
    pub fn sort_comments(&mut self) {
        sort_newest_first(&mut self.comments, |c| c.created_at);
    }

    fn touch(&mut self) {
        // Keep updated_at monotonic even if the wall clock steps backwards.
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

/// Order posts newest first, and every post's comments newest first.
///
/// The sort is stable: entries sharing a timestamp keep the order the
/// repository returned them in.
pub fn order_newest_first(posts: &mut [Post]) {
    sort_newest_first(posts, |p| p.created_at);
    for post in posts.iter_mut() {
        post.sort_comments();
    }
}

fn sort_newest_first<T>(items: &mut [T], created_at: impl Fn(&T) -> DateTime<Utc>) {
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
}
