/// In-memory stores for posts-service aggregates
///
/// Each store exclusively owns the lifetime of its entities and has no
/// dependency on the service or on the other stores. All stores are `Clone`
/// and share state behind `Arc<RwLock<..>>`, so one store set can be wired
/// into the application and cloned into handlers.
///
/// Data lives for the process lifetime only.
pub mod comments;
pub mod likes;
pub mod posts;

pub use comments::CommentStore;
pub use likes::LikeStore;
pub use posts::PostStore;
