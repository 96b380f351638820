//! HTTP handlers and route configuration.

pub(crate) mod comments;
pub(crate) mod health;
pub(crate) mod posts;
mod shape;

#[cfg(test)]
mod tests;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;
use crate::middleware::error::{json_config, path_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        // Registered ahead of the /api scope, which would otherwise swallow these paths.
        .service(
            SwaggerUi::new("/api/docs/{_:.*}").url("/api/openapi.json", ApiDoc::openapi()),
        )
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Posts and their comments, scoped to the acting user
                .service(
                    web::scope("/users/{user_id}/posts")
                        .route("", web::post().to(posts::create_post))
                        .route("", web::get().to(posts::list_posts))
                        .route("/{post_id}", web::get().to(posts::get_post))
                        .route("/{post_id}", web::put().to(posts::update_post))
                        .route("/{post_id}", web::delete().to(posts::delete_post))
                        .route(
                            "/{post_id}/comments",
                            web::post().to(comments::add_comment),
                        )
                        .route(
                            "/{post_id}/comments/{comment_id}",
                            web::put().to(comments::update_comment),
                        ),
                ),
        );
}
