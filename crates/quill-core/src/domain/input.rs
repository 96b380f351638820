//! Inputs accepted by the post/comment operations and their length rules.
//!
//! The HTTP layer validates requests first; these checks run again inside
//! the service so nothing out of bounds is ever written.

use crate::error::DomainError;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const CONTENT_MIN_CHARS: usize = 10;
pub const COMMENT_TEXT_MIN_CHARS: usize = 1;

/// Title and content for creating or updating a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

impl PostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let title_len = self.title.chars().count();
        if !(TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&title_len) {
            return Err(DomainError::Validation(format!(
                "title must be between {TITLE_MIN_CHARS} and {TITLE_MAX_CHARS} characters"
            )));
        }

        if self.content.chars().count() < CONTENT_MIN_CHARS {
            return Err(DomainError::Validation(format!(
                "content must be at least {CONTENT_MIN_CHARS} characters"
            )));
        }

        Ok(())
    }
}

/// Text for adding or editing a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentInput {
    pub text: String,
}

impl CommentInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.text.chars().count() < COMMENT_TEXT_MIN_CHARS {
            return Err(DomainError::Validation(
                "text must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
