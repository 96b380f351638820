//! Post handlers.
//!
//! `{user_id}` in every path is the acting user, already authenticated
//! upstream.

use actix_web::{HttpResponse, web};
use uuid::Uuid;
use validator::Validate;

use quill_core::domain::PostInput;
use quill_shared::ErrorResponse;
use quill_shared::dto::{PostRequest, PostResponse};

use super::shape::post_response;
use crate::middleware::error::AppResult;
use crate::observability::traced;
use crate::state::AppState;

/// POST /api/users/{user_id}/posts
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/posts",
    params(("user_id" = String, Path, description = "Acting user")),
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn create_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let post = traced(
        "create_post",
        &user_id,
        state
            .posts
            .create_post(PostInput::new(req.title, req.content), &user_id),
    )
    .await?;

    Ok(HttpResponse::Created().json(post_response(&post)))
}

/// GET /api/users/{user_id}/posts
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/posts",
    params(("user_id" = String, Path, description = "Acting user")),
    responses(
        (status = 200, description = "Posts owned by the user, newest first", body = [PostResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn list_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();

    let posts = traced("list_posts", &user_id, state.posts.list_posts(&user_id)).await?;

    let body: Vec<PostResponse> = posts.iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/users/{user_id}/posts/{post_id}
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/posts/{post_id}",
    params(
        ("user_id" = String, Path, description = "Acting user"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "The post with its comments", body = PostResponse),
        (status = 400, description = "Malformed post id", body = ErrorResponse),
        (status = 403, description = "Post belongs to another user", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();

    let post = traced("get_post", &user_id, state.posts.get_post(post_id, &user_id)).await?;

    Ok(HttpResponse::Ok().json(post_response(&post)))
}

/// PUT /api/users/{user_id}/posts/{post_id}
#[utoipa::path(
    put,
    path = "/api/users/{user_id}/posts/{post_id}",
    params(
        ("user_id" = String, Path, description = "Acting user"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post updated", body = PostResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 403, description = "Post belongs to another user", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();
    let req = body.into_inner();
    req.validate()?;

    let post = traced(
        "update_post",
        &user_id,
        state
            .posts
            .update_post(post_id, &user_id, PostInput::new(req.title, req.content)),
    )
    .await?;

    Ok(HttpResponse::Ok().json(post_response(&post)))
}

/// DELETE /api/users/{user_id}/posts/{post_id}
#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/posts/{post_id}",
    params(
        ("user_id" = String, Path, description = "Acting user"),
        ("post_id" = Uuid, Path, description = "Post id")
    ),
    responses(
        (status = 204, description = "Post and its comments deleted"),
        (status = 400, description = "Malformed post id", body = ErrorResponse),
        (status = 403, description = "Post belongs to another user", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse)
    ),
    tag = "posts"
)]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
) -> AppResult<HttpResponse> {
    let (user_id, post_id) = path.into_inner();

    traced("delete_post", &user_id, state.posts.delete_post(post_id, &user_id)).await?;

    Ok(HttpResponse::NoContent().finish())
}
