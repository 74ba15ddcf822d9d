/// Posts service - orchestrates the post, comment, and like stores
///
/// Enforces the invariants the stores cannot see on their own: referenced
/// posts must exist, only the owner may delete a post, a user may not like a
/// post twice, and a post's derived counters stay consistent with the
/// underlying facts.
use crate::error::{AppError, Result};
use crate::models::{Comment, Like, Post};
use crate::store::{CommentStore, LikeStore, PostStore};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Service over the three aggregate stores
///
/// Mutations of a post run as fetch -> mutate -> write-back; the per-post
/// lock registry serializes those sequences so two concurrent likes on the
/// same post cannot overwrite each other's counter write.
#[derive(Clone)]
pub struct PostsService {
    posts: PostStore,
    comments: CommentStore,
    likes: LikeStore,
    post_locks: Arc<DashMap<Uuid, Arc<Mutex<()>>>>,
}

impl PostsService {
    pub fn new(posts: PostStore, comments: CommentStore, likes: LikeStore) -> Self {
        Self {
            posts,
            comments,
            likes,
            post_locks: Arc::new(DashMap::new()),
        }
    }

    fn post_lock(&self, post_id: Uuid) -> Arc<Mutex<()>> {
        self.post_locks
            .entry(post_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drop the lock entry unless another caller still holds a handle to it
    ///
    /// `remove_if` and `post_lock`'s entry access serialize on the map shard,
    /// so the strong count cannot change between the check and the removal.
    fn drop_lock_if_unused(&self, post_id: Uuid) {
        self.post_locks
            .remove_if(&post_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Acquire the per-post lock, then fetch the post under it
    ///
    /// On NotFound the lock entry is discarded again, so ids that never
    /// existed do not accumulate in the registry.
    async fn lock_and_fetch(&self, post_id: Uuid) -> Result<(OwnedMutexGuard<()>, Post)> {
        let guard = self.post_lock(post_id).lock_owned().await;
        match self.posts.get_by_id(post_id).await {
            Some(post) => Ok((guard, post)),
            None => {
                drop(guard);
                self.drop_lock_if_unused(post_id);
                Err(AppError::NotFound("Post not found".to_string()))
            }
        }
    }

    async fn get_post_or_not_found(&self, post_id: Uuid) -> Result<Post> {
        self.posts
            .get_by_id(post_id)
            .await
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))
    }

    /// Create a new post
    ///
    /// Input shape (well-formed ids, bounded description) is the boundary
    /// layer's responsibility.
    pub async fn create_post(&self, user_id: Uuid, description: String) -> Post {
        self.posts.create(user_id, description).await
    }

    /// Get a post by id
    pub async fn get_post(&self, post_id: Uuid) -> Result<Post> {
        self.get_post_or_not_found(post_id).await
    }

    /// All posts, newest first
    pub async fn list_posts(&self) -> Vec<Post> {
        self.posts.list().await
    }

    /// Delete a post; only its owner may do so
    ///
    /// Comments and likes referencing the post are left behind. They are
    /// unreachable through the service (every path checks post existence
    /// first) but not reclaimed.
    pub async fn delete_post(&self, post_id: Uuid, requester_id: Uuid) -> Result<()> {
        let (guard, post) = self.lock_and_fetch(post_id).await?;
        if post.user_id != requester_id {
            return Err(AppError::Validation(
                "Only the post owner can delete the post".to_string(),
            ));
        }

        self.posts.delete(post_id).await;
        drop(guard);
        self.post_locks.remove(&post_id);
        Ok(())
    }

    /// Like a post
    ///
    /// A second like from the same user is a Conflict; the duplicate check
    /// runs before the store's idempotent `add`, so a duplicate attempt is
    /// observable as an error rather than a silent no-op. The post's like
    /// count is re-read from the Like Store rather than incremented locally.
    pub async fn like_post(&self, post_id: Uuid, user_id: Uuid) -> Result<Like> {
        let (_guard, mut post) = self.lock_and_fetch(post_id).await?;

        if self.likes.has(post_id, user_id).await {
            return Err(AppError::Conflict(
                "User already liked this post".to_string(),
            ));
        }

        let like = self.likes.add(post_id, user_id).await;
        post.like_count = self.likes.count(post_id).await;
        post.updated_at = Utc::now();
        self.posts.update(post).await;

        Ok(like)
    }

    /// Remove a user's like from a post
    ///
    /// Idempotent: if no like exists for the pair, this succeeds with no
    /// state change.
    pub async fn unlike_post(&self, post_id: Uuid, user_id: Uuid) -> Result<()> {
        let (_guard, mut post) = self.lock_and_fetch(post_id).await?;

        if !self.likes.has(post_id, user_id).await {
            return Ok(());
        }

        self.likes.remove(post_id, user_id).await;
        post.like_count = self.likes.count(post_id).await;
        post.updated_at = Utc::now();
        self.posts.update(post).await;

        Ok(())
    }

    /// Add a comment to a post
    ///
    /// The comment counter is incremented rather than recomputed: comments
    /// have no retraction path, so the running counter cannot drift.
    pub async fn add_comment(&self, post_id: Uuid, user_id: Uuid, text: String) -> Result<Comment> {
        let (_guard, mut post) = self.lock_and_fetch(post_id).await?;

        let comment = self.comments.add(post_id, user_id, text).await;
        post.comment_count += 1;
        post.updated_at = Utc::now();
        self.posts.update(post).await;

        Ok(comment)
    }

    /// All comments on a post
    pub async fn list_comments(&self, post_id: Uuid) -> Result<Vec<Comment>> {
        self.get_post_or_not_found(post_id).await?;
        Ok(self.comments.list_by_post(post_id).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_service() -> PostsService {
        PostsService::new(PostStore::new(), CommentStore::new(), LikeStore::new())
    }

    #[tokio::test]
    async fn like_count_never_drifts_from_like_store() {
        let svc = make_service();
        let post = svc.create_post(Uuid::new_v4(), "drift check".to_string()).await;
        let users: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();

        for user in &users {
            svc.like_post(post.id, *user).await.unwrap();
        }
        assert_eq!(svc.get_post(post.id).await.unwrap().like_count, 5);

        svc.unlike_post(post.id, users[0]).await.unwrap();
        svc.unlike_post(post.id, users[1]).await.unwrap();
        assert_eq!(svc.get_post(post.id).await.unwrap().like_count, 3);
    }

    #[tokio::test]
    async fn like_bumps_updated_at() {
        let svc = make_service();
        let post = svc.create_post(Uuid::new_v4(), "bump".to_string()).await;
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;

        svc.like_post(post.id, Uuid::new_v4()).await.unwrap();

        let after = svc.get_post(post.id).await.unwrap();
        assert!(after.updated_at > post.updated_at);
        assert_eq!(after.created_at, post.created_at);
    }

    #[tokio::test]
    async fn concurrent_likes_on_one_post_all_land() {
        let svc = make_service();
        let post = svc.create_post(Uuid::new_v4(), "race".to_string()).await;

        let mut handles = Vec::new();
        for _ in 0..16 {
            let svc = svc.clone();
            let post_id = post.id;
            handles.push(tokio::spawn(async move {
                svc.like_post(post_id, Uuid::new_v4()).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(svc.get_post(post.id).await.unwrap().like_count, 16);
    }

    #[tokio::test]
    async fn lock_registry_does_not_retain_missing_post_ids() {
        let svc = make_service();
        let user = Uuid::new_v4();

        for _ in 0..100 {
            assert!(svc.like_post(Uuid::new_v4(), user).await.is_err());
        }
        assert!(svc.unlike_post(Uuid::new_v4(), user).await.is_err());
        assert!(svc
            .add_comment(Uuid::new_v4(), user, "x".to_string())
            .await
            .is_err());
        assert!(svc.delete_post(Uuid::new_v4(), user).await.is_err());

        assert!(svc.post_locks.is_empty());
    }

    #[tokio::test]
    async fn lock_registry_is_cleared_when_a_post_is_deleted() {
        let svc = make_service();
        let owner = Uuid::new_v4();
        let post = svc.create_post(owner, "short-lived".to_string()).await;

        svc.like_post(post.id, Uuid::new_v4()).await.unwrap();
        svc.delete_post(post.id, owner).await.unwrap();

        assert!(svc.post_locks.is_empty());
    }

    #[tokio::test]
    async fn missing_post_is_not_found_everywhere() {
        let svc = make_service();
        let missing = Uuid::new_v4();
        let user = Uuid::new_v4();

        assert!(matches!(
            svc.get_post(missing).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.like_post(missing, user).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.unlike_post(missing, user).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.add_comment(missing, user, "x".to_string()).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.list_comments(missing).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            svc.delete_post(missing, user).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn comments_and_likes_are_orphaned_after_delete() {
        // Known gap: deleting a post does not cascade to its comments and
        // likes.
        let svc = make_service();
        let owner = Uuid::new_v4();
        let commenter = Uuid::new_v4();
        let post = svc.create_post(owner, "soon gone".to_string()).await;

        svc.add_comment(post.id, commenter, "hi".to_string())
            .await
            .unwrap();
        svc.like_post(post.id, commenter).await.unwrap();
        svc.delete_post(post.id, owner).await.unwrap();

        // orphans are unreachable through the service
        assert!(matches!(
            svc.list_comments(post.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
