/// Comment handlers - HTTP endpoints for comment operations
use crate::error::Result;
use crate::services::PostsService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub user_id: Uuid,
    #[validate(length(min = 1, max = 500))]
    pub text: String,
}

/// Add a comment to a post
pub async fn add_comment(
    service: web::Data<PostsService>,
    post_id: web::Path<Uuid>,
    req: web::Json<AddCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let comment = service
        .add_comment(*post_id, req.user_id, req.text.clone())
        .await?;
    Ok(HttpResponse::Created().json(comment))
}

/// List comments on a post
pub async fn list_comments(
    service: web::Data<PostsService>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let comments = service.list_comments(*post_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}
