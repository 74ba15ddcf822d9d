/// Data models for posts-service
///
/// Field names serialize in camelCase to match the public API.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a user's post with derived like/comment counters
///
/// `like_count` is a cache of the Like Store's count for this post and is
/// recomputed from the store on every like/unlike. `comment_count` is a
/// running counter; comments are never retracted in this design.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub like_count: u64,
    pub comment_count: u64,
}

/// Comment entity - a comment on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Like entity - a user liking a post
///
/// Identified by the (post_id, user_id) pair; there is no separate id because
/// at most one like per user exists for a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}
