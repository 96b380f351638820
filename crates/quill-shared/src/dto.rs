//! Data Transfer Objects - request/response types for the API.
//!
//! Responses are shaped field by field from the domain entities; nothing
//! reaches the wire unless it is listed here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Request body for creating or updating a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PostRequest {
    /// The title of the post.
    #[validate(length(min = 3, max = 100, message = "title must be between 3 and 100 characters"))]
    #[schema(min_length = 3, max_length = 100, example = "Hello World")]
    pub title: String,

    /// The content of the post. Supports rich text formatting.
    #[validate(length(min = 10, message = "content must be at least 10 characters"))]
    #[schema(min_length = 10, example = "This is a test post")]
    pub content: String,
}

/// Request body for adding or editing a comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CommentRequest {
    /// The comment text.
    #[validate(length(min = 1, message = "text must not be empty"))]
    #[schema(min_length = 1, example = "Nice!")]
    pub text: String,
}

/// A comment as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// ID of the user who wrote the comment.
    pub user_id: String,
    pub is_edited: bool,
    /// ID of the post this comment belongs to.
    pub post_id: Uuid,
}

/// A post, with its comments newest first, as exposed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// ID of the user who created the post.
    pub user_id: String,
    pub is_edited: bool,
    pub comments: Vec<CommentResponse>,
}
