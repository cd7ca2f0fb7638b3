use serde::Deserialize;

use crate::error::{AppResult, ClientError};

pub mod band;
pub mod user;

pub use band::{BandCatalog, BandListResponse, SimilarBands};
pub use user::{
    NewUserRequest, RegisteredUser, UserCount, UserIdInput, UserRecommendations,
};

// ============================================================================
// Response envelope
// ============================================================================

/// Body shape shared by every endpoint of the recommendation service
///
/// Any body carrying a string `error` field is a service-reported failure,
/// whatever else it contains. Everything else must match the endpoint's
/// success type.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ApiEnvelope<T> {
    Failure { error: String },
    Success(T),
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> AppResult<T> {
        match self {
            ApiEnvelope::Failure { error } => Err(ClientError::Api(error)),
            ApiEnvelope::Success(value) => Ok(value),
        }
    }
}
