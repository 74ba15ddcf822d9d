/// Post store - owns Post aggregates
use crate::models::Post;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store for Post aggregates
///
/// Thread-safe via `Arc<RwLock<>>`; individual operations are atomic, but
/// read-modify-write sequences across `get_by_id`/`update` must be serialized
/// by the caller (the service holds a per-post lock for this).
#[derive(Clone, Default)]
pub struct PostStore {
    posts: Arc<RwLock<HashMap<Uuid, Post>>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new post with a fresh id, current timestamps, and zeroed counters
    pub async fn create(&self, user_id: Uuid, description: String) -> Post {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            user_id,
            description,
            created_at: now,
            updated_at: now,
            like_count: 0,
            comment_count: 0,
        };

        self.posts.write().await.insert(post.id, post.clone());
        post
    }

    /// Look up a post by id
    pub async fn get_by_id(&self, post_id: Uuid) -> Option<Post> {
        self.posts.read().await.get(&post_id).cloned()
    }

    /// All posts ordered by creation time, newest first
    ///
    /// The sort is stable, so posts with equal timestamps keep their relative
    /// order; that order is not contractual.
    pub async fn list(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Replace the stored record for this post's id wholesale
    pub async fn update(&self, post: Post) {
        self.posts.write().await.insert(post.id, post);
    }

    /// Remove a post; deleting a non-existent id is a no-op
    pub async fn delete(&self, post_id: Uuid) {
        self.posts.write().await.remove(&post_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_initializes_counters_and_timestamps() {
        let store = PostStore::new();
        let user_id = Uuid::new_v4();

        let post = store.create(user_id, "hello".to_string()).await;

        assert_eq!(post.user_id, user_id);
        assert_eq!(post.like_count, 0);
        assert_eq!(post.comment_count, 0);
        assert_eq!(post.created_at, post.updated_at);

        let fetched = store.get_by_id(post.id).await.unwrap();
        assert_eq!(fetched.description, "hello");
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_id() {
        let store = PostStore::new();
        assert!(store.get_by_id(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn list_orders_newest_first() {
        let store = PostStore::new();
        let user_id = Uuid::new_v4();

        let first = store.create(user_id, "first".to_string()).await;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = store.create(user_id, "second".to_string()).await;

        let posts = store.list().await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, second.id);
        assert_eq!(posts[1].id, first.id);
    }

    #[tokio::test]
    async fn update_replaces_record() {
        let store = PostStore::new();
        let mut post = store.create(Uuid::new_v4(), "original".to_string()).await;

        post.like_count = 3;
        store.update(post.clone()).await;

        let fetched = store.get_by_id(post.id).await.unwrap();
        assert_eq!(fetched.like_count, 3);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = PostStore::new();
        let post = store.create(Uuid::new_v4(), "gone".to_string()).await;

        store.delete(post.id).await;
        assert!(store.get_by_id(post.id).await.is_none());

        // second delete is a no-op
        store.delete(post.id).await;
    }
}
