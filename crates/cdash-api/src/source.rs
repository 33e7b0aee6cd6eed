//! Data source trait shared by the HTTP client and test doubles

use cdash_core::{ApiError, Post, User};

/// Read operations the dashboard needs from the remote API
///
/// Implement [`DataSource`] (the `Send` variant) so fetches can run on
/// spawned tasks.
#[trait_variant::make(DataSource: Send)]
pub trait LocalDataSource {
    /// `GET /users`
    async fn fetch_users(&self) -> Result<Vec<User>, ApiError>;

    /// `GET /users/{id}`
    async fn fetch_user_by_id(&self, id: u32) -> Result<User, ApiError>;

    /// `GET /posts`
    async fn fetch_all_posts(&self) -> Result<Vec<Post>, ApiError>;

    /// `GET /posts?userId={user_id}`
    async fn fetch_posts_by_user(&self, user_id: u32) -> Result<Vec<Post>, ApiError>;
}
