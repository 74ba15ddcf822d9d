/// Posts Service Library
///
/// In-memory social backend exposing posts, comments, and likes over HTTP.
/// The service layer is the only component allowed to coordinate across the
/// three stores; the HTTP layer is a thin adapter that maps domain errors to
/// status codes.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and request/response types
/// - `models`: Data structures for posts, comments, likes
/// - `services`: Business logic layer (`PostsService`)
/// - `store`: In-memory stores for each aggregate
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod store;

pub use config::Config;
pub use error::{AppError, Result};
pub use services::PostsService;
