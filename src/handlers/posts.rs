/// Post handlers - HTTP endpoints for post operations
use crate::error::Result;
use crate::services::PostsService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, max = 1000))]
    pub description: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostRequest {
    /// Requester id; must match the post owner
    pub user_id: Uuid,
}

/// Create a new post
pub async fn create_post(
    service: web::Data<PostsService>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let post = service.create_post(req.user_id, req.description.clone()).await;
    Ok(HttpResponse::Created().json(post))
}

/// List all posts, newest first
pub async fn list_posts(service: web::Data<PostsService>) -> Result<HttpResponse> {
    let posts = service.list_posts().await;
    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by ID
pub async fn get_post(
    service: web::Data<PostsService>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post = service.get_post(*post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post (owner only)
pub async fn delete_post(
    service: web::Data<PostsService>,
    post_id: web::Path<Uuid>,
    req: web::Json<DeletePostRequest>,
) -> Result<HttpResponse> {
    service.delete_post(*post_id, req.user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
