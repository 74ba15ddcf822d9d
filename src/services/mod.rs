/// Business logic layer for posts-service
///
/// `PostsService` is the sole entry point for business logic and the only
/// component that coordinates across the post, comment, and like stores.
pub mod posts;

pub use posts::PostsService;
