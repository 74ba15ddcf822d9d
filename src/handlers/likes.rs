/// Like handlers - HTTP endpoints for liking and unliking posts
use crate::error::Result;
use crate::services::PostsService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikePostRequest {
    pub user_id: Uuid,
}

/// Like a post
///
/// A repeated like from the same user responds 409.
pub async fn like_post(
    service: web::Data<PostsService>,
    post_id: web::Path<Uuid>,
    req: web::Json<LikePostRequest>,
) -> Result<HttpResponse> {
    let like = service.like_post(*post_id, req.user_id).await?;
    Ok(HttpResponse::Created().json(like))
}

/// Remove a user's like from a post
///
/// Idempotent: unliking a post the user never liked responds 204.
pub async fn unlike_post(
    service: web::Data<PostsService>,
    path: web::Path<(Uuid, Uuid)>,
) -> Result<HttpResponse> {
    let (post_id, user_id) = path.into_inner();
    service.unlike_post(post_id, user_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
