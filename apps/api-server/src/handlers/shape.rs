//! Response shaping - the only place domain entities become wire types.

use quill_core::domain::{Comment, Post};
use quill_shared::dto::{CommentResponse, PostResponse};

pub fn comment_response(comment: &Comment) -> CommentResponse {
    CommentResponse {
        id: comment.id,
        text: comment.text.clone(),
        created_at: comment.created_at,
        updated_at: comment.updated_at,
        user_id: comment.user_id.clone(),
        is_edited: comment.is_edited,
        post_id: comment.post_id,
    }
}

pub fn post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title.clone(),
        content: post.content.clone(),
        created_at: post.created_at,
        updated_at: post.updated_at,
        user_id: post.user_id.clone(),
        is_edited: post.is_edited,
        comments: post.comments.iter().map(comment_response).collect(),
    }
}
