/// Recommendation service transport abstraction
///
/// The client talks to the recommendation service only through this trait, so
/// the HTTP implementation can be swapped for a mock in tests. Each method is a
/// single request/response round trip with no caching and no retry.
use crate::{
    error::AppResult,
    models::{
        BandCatalog, NewUserRequest, RegisteredUser, SimilarBands, UserCount, UserIdInput,
        UserRecommendations,
    },
};

pub mod http;
pub mod request_id;

pub use http::HttpRecommendationApi;
pub use request_id::{RequestId, REQUEST_ID_HEADER};

/// Trait for recommendation service transports
///
/// A body carrying an `error` field resolves to `ClientError::Api`, whatever
/// the HTTP status.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationApi: Send + Sync {
    /// Fetch every known band (`GET band/`)
    async fn list_bands(&self) -> AppResult<BandCatalog>;

    /// Fetch bands similar to `band` (`GET band/{name}`)
    ///
    /// The name is sent as a single percent-encoded path segment.
    async fn similar_bands(&self, band: &str) -> AppResult<SimilarBands>;

    /// Fetch recommendations for a user (`GET user/{id}`)
    ///
    /// The id is sent exactly as parsed, `NaN` included. `limit` is forwarded
    /// as a query parameter when given; the service defaults to ten.
    async fn user_recommendations(
        &self,
        user: UserIdInput,
        limit: Option<u32>,
    ) -> AppResult<UserRecommendations>;

    /// Register a new user from a set of liked bands (`POST user/`)
    async fn register_user(&self, request: &NewUserRequest) -> AppResult<RegisteredUser>;

    /// Number of users known to the service (`GET user/`)
    async fn user_count(&self) -> AppResult<UserCount>;

    /// Transport name for logging and debugging
    fn name(&self) -> &'static str;
}
