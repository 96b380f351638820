//! Comment handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;
use validator::Validate;

use quill_core::domain::CommentInput;
use quill_shared::ErrorResponse;
use quill_shared::dto::{CommentRequest, CommentResponse};

use super::shape::comment_response;
use crate::middleware::error::AppResult;
use crate::observability::traced;
use crate::state::AppState;

/// POST /api/users/{user_id}/posts/{post_id}/comments
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/posts/{post_id}/comments",
    params(
        ("user_id" = String, Path, description = "Acting user, who must own the post"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment added", body = CommentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 403, description = "Post belongs to another user", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "comments"
)]
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let comment = traced(
        "add_comment",
        &user_id,
        state
            .posts
            .add_comment(post_id, CommentInput::new(req.text), &user_id),
    )
    .await?;

    Ok(HttpResponse::Created().json(comment_response(&comment)))
}

/// PUT /api/users/{user_id}/posts/{post_id}/comments/{comment_id}
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/posts/{post_id}/comments/{comment_id}",
    params(
        ("user_id" = String, Path, description = "Acting user, who must have written the comment"),
        ("post_id" = Uuid, Path, description = "Post the comment belongs to"),
        ("comment_id" = Uuid, Path, description = "Comment id")
    ),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = CommentResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 403, description = "Comment written by another user", body = ErrorResponse),
        (status = 404, description = "No such comment on this post", body = ErrorResponse)
    ),
    tag = "comments"
)]
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<(String, Uuid, Uuid)>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id, comment_id) = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let comment = traced(
        "update_comment",
        &user_id,
        state.posts.update_comment(
            post_id,
            comment_id,
            &user_id,
            CommentInput::new(req.text),
        ),
    )
    .await?;

    Ok(HttpResponse::Ok().json(comment_response(&comment)))
}
