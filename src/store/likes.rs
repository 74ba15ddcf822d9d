/// Like store - owns deduplicated Like facts keyed by (post, user)
use crate::models::Like;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store for Like facts
///
/// At most one like per (post, user) pair exists at any time; likes are kept
/// per post keyed by user id. `count` is the source of truth for a post's
/// like count - the Post's stored counter is a cache of this value.
#[derive(Clone, Default)]
pub struct LikeStore {
    likes_by_post: Arc<RwLock<HashMap<Uuid, HashMap<Uuid, Like>>>>,
}

impl LikeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a like for (post, user)
    ///
    /// Idempotent: if the pair is already liked, the existing fact is
    /// returned unchanged and its timestamp is not refreshed. The service
    /// rejects duplicates before calling this, so callers of the service see
    /// a Conflict rather than this silent no-op.
    pub async fn add(&self, post_id: Uuid, user_id: Uuid) -> Like {
        let mut likes = self.likes_by_post.write().await;
        let post_likes = likes.entry(post_id).or_default();

        if let Some(existing) = post_likes.get(&user_id) {
            return existing.clone();
        }

        let like = Like {
            post_id,
            user_id,
            created_at: Utc::now(),
        };
        post_likes.insert(user_id, like.clone());
        like
    }

    /// Whether (post, user) is currently liked
    pub async fn has(&self, post_id: Uuid, user_id: Uuid) -> bool {
        self.likes_by_post
            .read()
            .await
            .get(&post_id)
            .is_some_and(|post_likes| post_likes.contains_key(&user_id))
    }

    /// Number of distinct users who like the post
    pub async fn count(&self, post_id: Uuid) -> u64 {
        self.likes_by_post
            .read()
            .await
            .get(&post_id)
            .map_or(0, |post_likes| post_likes.len() as u64)
    }

    /// Remove a like; removing a non-existent like is a silent no-op
    pub async fn remove(&self, post_id: Uuid, user_id: Uuid) {
        if let Some(post_likes) = self.likes_by_post.write().await.get_mut(&post_id) {
            post_likes.remove(&user_id);
        }
    }
}
