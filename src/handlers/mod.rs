/// HTTP handlers for posts-service
///
/// Thin adapters over `PostsService`: deserialize and shape-check the
/// request, call one service operation, translate the outcome to a response.
/// Domain errors map to status codes through `AppError`'s `ResponseError`
/// impl.
pub mod comments;
pub mod likes;
pub mod posts;

pub use comments::{add_comment, list_comments};
pub use likes::{like_post, unlike_post};
pub use posts::{create_post, delete_post, get_post, list_posts};

use crate::error::AppError;
use actix_web::{web, HttpResponse};

async fn welcome() -> HttpResponse {
    HttpResponse::Ok().body("Welcome to the Social Network Application!")
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// Register the full route tree on an actix app
///
/// Shared between `main` and the integration tests so both serve the same
/// surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // malformed ids and bodies are 400s, with the same error shape as
    // domain failures
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::Validation(err.to_string()).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(err.to_string()).into()
    }))
    .route("/", web::get().to(welcome))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api/v1/posts")
                .service(
                    web::resource("")
                        .route(web::post().to(posts::create_post))
                        .route(web::get().to(posts::list_posts)),
                )
                .service(
                    web::resource("/{post_id}")
                        .route(web::get().to(posts::get_post))
                        .route(web::delete().to(posts::delete_post)),
                )
                .service(web::resource("/{post_id}/like").route(web::post().to(likes::like_post)))
                .service(
                    web::resource("/{post_id}/like/{user_id}")
                        .route(web::delete().to(likes::unlike_post)),
                )
                .service(
                    web::resource("/{post_id}/comment")
                        .route(web::post().to(comments::add_comment)),
                )
                .service(
                    web::resource("/{post_id}/comments")
                        .route(web::get().to(comments::list_comments)),
                ),
        );
}
