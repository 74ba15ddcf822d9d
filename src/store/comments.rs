/// Comment store - owns Comment records
use crate::models::Comment;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store for Comment records
///
/// Does not verify that the referenced post exists; that check belongs to the
/// service layer and happens before `add` is called.
#[derive(Clone, Default)]
pub struct CommentStore {
    comments: Arc<RwLock<HashMap<Uuid, Comment>>>,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a comment with a fresh id and the current timestamp
    pub async fn add(&self, post_id: Uuid, user_id: Uuid, text: String) -> Comment {
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            user_id,
            text,
            created_at: Utc::now(),
        };

        self.comments
            .write()
            .await
            .insert(comment.id, comment.clone());
        comment
    }

    /// All comments for a post; order is stable for a given store state but
    /// not otherwise guaranteed
    pub async fn list_by_post(&self, post_id: Uuid) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .comments
            .read()
            .await
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by_key(|c| c.created_at);
        comments
    }

    /// Remove a comment; removing a non-existent id is a no-op
    pub async fn delete(&self, comment_id: Uuid) {
        self.comments.write().await.remove(&comment_id);
    }
}
