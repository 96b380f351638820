use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};

use quill_core::domain::Comment;
use quill_core::ports::PostRepository;
use quill_infra::InMemoryPostRepository;

use super::configure_routes;
use crate::state::{AppState, Storage};

fn memory_state() -> (AppState, Arc<InMemoryPostRepository>) {
    let repo = Arc::new(InMemoryPostRepository::new());
    let state = AppState::with_repository(repo.clone(), Storage::Memory);
    (state, repo)
}

fn hello_world() -> Value {
    json!({ "title": "Hello World", "content": "This is a test post" })
}

#[actix_web::test]
async fn test_post_and_comment_lifecycle() {
    let (state, repo) = memory_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    // U1 creates a post
    let req = test::TestRequest::post()
        .uri("/api/users/U1/posts")
        .set_json(hello_world())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: Value = test::read_body_json(resp).await;
    assert_eq!(post["isEdited"], false);
    assert_eq!(post["userId"], "U1");
    assert_eq!(post["title"], "Hello World");
    let post_id = post["id"].as_str().unwrap().to_string();

    // U1 comments on it
    let req = test::TestRequest::post()
        .uri(&format!("/api/users/U1/posts/{post_id}/comments"))
        .set_json(json!({ "text": "Nice!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let comment: Value = test::read_body_json(resp).await;
    assert_eq!(comment["userId"], "U1");
    assert_eq!(comment["postId"], post_id.as_str());
    assert_eq!(comment["isEdited"], false);
    let comment_id = comment["id"].as_str().unwrap().to_string();

    // U2 may not edit U1's comment
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/U2/posts/{post_id}/comments/{comment_id}"))
        .set_json(json!({ "text": "Hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // U1 edits the post
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/U1/posts/{post_id}"))
        .set_json(json!({ "title": "Hello Again", "content": "This is a test post" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["isEdited"], true);
    assert_eq!(updated["title"], "Hello Again");
    assert_eq!(updated["comments"].as_array().unwrap().len(), 1);

    // U2 may not delete it
    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/U2/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // U1 can
    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/U1/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/U1/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // The comment went with the post
    assert_eq!(repo.comment_count().await, 0);
}

#[actix_web::test]
async fn test_second_edit_keeps_post_edited() {
    let (state, _repo) = memory_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/users/U1/posts")
        .set_json(hello_world())
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let post_id = post["id"].as_str().unwrap().to_string();

    for title in ["First edit", "Second edit"] {
        let req = test::TestRequest::put()
            .uri(&format!("/api/users/U1/posts/{post_id}"))
            .set_json(json!({ "title": title, "content": "This is a test post" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/U1/posts/{post_id}"))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["isEdited"], true);
    assert_eq!(fetched["title"], "Second edit");
}

#[actix_web::test]
async fn test_list_posts_newest_first_with_comments_newest_first() {
    let (state, _repo) = memory_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let mut created = Vec::new();
    for title in ["First post", "Second post", "Third post"] {
        let req = test::TestRequest::post()
            .uri("/api/users/U1/posts")
            .set_json(json!({ "title": title, "content": "Some content for the post" }))
            .to_request();
        let post: Value = test::call_and_read_body_json(&app, req).await;
        created.push(post["id"].as_str().unwrap().to_string());
    }

    // Someone else's post must not show up
    let req = test::TestRequest::post()
        .uri("/api/users/U2/posts")
        .set_json(hello_world())
        .to_request();
    test::call_service(&app, req).await;

    let first = &created[0];
    for text in ["older", "newer"] {
        let req = test::TestRequest::post()
            .uri(&format!("/api/users/U1/posts/{first}/comments"))
            .set_json(json!({ "text": text }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/users/U1/posts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let posts: Value = test::read_body_json(resp).await;
    let posts = posts.as_array().unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Third post", "Second post", "First post"]);

    let texts: Vec<&str> = posts[2]["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["newer", "older"]);
}

#[actix_web::test]
async fn test_get_post_ownership_and_existence() {
    let (state, _repo) = memory_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/users/U1/posts")
        .set_json(hello_world())
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let post_id = post["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/users/U2/posts/{post_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(problem["status"], 403);
    assert!(problem.get("detail").is_none());

    // Only the owner may comment
    let req = test::TestRequest::post()
        .uri(&format!("/api/users/U2/posts/{post_id}/comments"))
        .set_json(json!({ "text": "Drive-by" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let unknown = uuid::Uuid::new_v4();
    let req = test::TestRequest::get()
        .uri(&format!("/api/users/U1/posts/{unknown}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/users/U1/posts/{unknown}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_comment_author_not_post_owner_decides_edits() {
    let (state, repo) = memory_state();
    let service = state.posts.clone();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let post = service
        .create_post(
            quill_core::domain::PostInput::new("Hello World", "This is a test post"),
            "U1",
        )
        .await
        .unwrap();
    // A comment by U2 seeded straight into storage
    let foreign = repo
        .create_comment(Comment::new(post.id, "U2", "Nice!".to_string()))
        .await
        .unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/U1/posts/{}/comments/{}", post.id, foreign.id))
        .set_json(json!({ "text": "Owner rewrites it" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::put()
        .uri(&format!("/api/users/U2/posts/{}/comments/{}", post.id, foreign.id))
        .set_json(json!({ "text": "Author rewrites it" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let edited: Value = test::read_body_json(resp).await;
    assert_eq!(edited["isEdited"], true);
    assert_eq!(edited["text"], "Author rewrites it");

    // Wrong post in the path
    let other = service
        .create_post(
            quill_core::domain::PostInput::new("Other post", "Another test post"),
            "U1",
        )
        .await
        .unwrap();
    let req = test::TestRequest::put()
        .uri(&format!("/api/users/U2/posts/{}/comments/{}", other.id, foreign.id))
        .set_json(json!({ "text": "Wrong thread" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_requests_are_rejected_without_writes() {
    let (state, _repo) = memory_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let invalid_bodies = [
        json!({ "title": "Hi", "content": "This is a test post" }),
        json!({ "title": "x".repeat(101), "content": "This is a test post" }),
        json!({ "title": "Hello World", "content": "too short" }),
        json!({ "title": "Hello World" }),
        json!({ "title": "Hello World", "content": "This is a test post", "userId": "U2" }),
    ];
    for body in invalid_bodies {
        let req = test::TestRequest::post()
            .uri("/api/users/U1/posts")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    let req = test::TestRequest::get().uri("/api/users/U1/posts").to_request();
    let posts: Value = test::call_and_read_body_json(&app, req).await;
    assert!(posts.as_array().unwrap().is_empty());

    let req = test::TestRequest::get()
        .uri("/api/users/U1/posts/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/users/U1/posts")
        .set_json(hello_world())
        .to_request();
    let post: Value = test::call_and_read_body_json(&app, req).await;
    let post_id = post["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/users/U1/posts/{post_id}/comments"))
        .set_json(json!({ "text": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let problem: Value = test::read_body_json(resp).await;
    assert_eq!(problem["detail"], "text must not be empty");
}

#[actix_web::test]
async fn test_health_and_openapi() {
    let (state, _repo) = memory_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "ok");
    assert_eq!(health["storage"], "memory");

    let req = test::TestRequest::get().uri("/api/openapi.json").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = test::read_body_json(resp).await;
    assert!(doc["paths"].get("/api/users/{user_id}/posts").is_some());
}
