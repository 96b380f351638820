//! OpenAPI documentation for the REST API.

use utoipa::OpenApi;

use crate::handlers::health::HealthResponse;
use quill_shared::ErrorResponse;
use quill_shared::dto::{CommentRequest, CommentResponse, PostRequest, PostResponse};

/// OpenAPI document served at `/api/openapi.json`, with Swagger UI at
/// `/api/docs/`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quill Posts API",
        description = "User-authored posts and their comment threads."
    ),
    paths(
        crate::handlers::posts::create_post,
        crate::handlers::posts::list_posts,
        crate::handlers::posts::get_post,
        crate::handlers::posts::update_post,
        crate::handlers::posts::delete_post,
        crate::handlers::comments::add_comment,
        crate::handlers::comments::update_comment,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        PostRequest,
        CommentRequest,
        PostResponse,
        CommentResponse,
        ErrorResponse,
        HealthResponse
    )),
    tags(
        (name = "posts", description = "Posts owned by the acting user"),
        (name = "comments", description = "Comments on a post"),
        (name = "health", description = "Liveness")
    )
)]
pub struct ApiDoc;
