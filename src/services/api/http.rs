/// HTTP transport for the recommendation service
///
/// Endpoints are resolved relative to the configured base URL:
/// - `band/` and `band/{name}` for the catalog and similarity lookups
/// - `user/` and `user/{id}` for registration, user count and recommendations
///
/// The service reports "not found" with status 404 and a JSON `error` body, and
/// rejected registrations with status 200 and the same shape, so the body is
/// inspected before the status.
use crate::{
    config::Config,
    error::{AppResult, ClientError},
    models::{
        ApiEnvelope, BandCatalog, BandListResponse, NewUserRequest, RegisteredUser, SimilarBands,
        UserCount, UserIdInput, UserRecommendations,
    },
    services::api::{
        request_id::{make_request_span, RequestId, REQUEST_ID_HEADER},
        RecommendationApi,
    },
};
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::Instrument;

#[derive(Clone)]
pub struct HttpRecommendationApi {
    http_client: HttpClient,
    base_url: Url,
}

impl HttpRecommendationApi {
    pub fn new(config: &Config) -> AppResult<Self> {
        let base_url = Url::parse(&config.api_url).map_err(|e| {
            ClientError::InvalidInput(format!("Invalid API URL {}: {}", config.api_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidInput(format!(
                "API URL {} cannot be used as a base",
                config.api_url
            )));
        }

        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Appends path segments to the base URL, percent-encoding each one
    ///
    /// An empty final segment produces a trailing slash (`band/`).
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a request tagged with a fresh request ID and decodes the envelope
    async fn execute<T: DeserializeOwned>(
        &self,
        method: &str,
        url: Url,
        request: RequestBuilder,
    ) -> AppResult<T> {
        let request_id = RequestId::new();
        let span = make_request_span(method, &url, &request_id);

        async move {
            let response = request
                .header(REQUEST_ID_HEADER, request_id.as_str())
                .send()
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Request to recommendation API failed");
                    ClientError::HttpClient(e)
                })?;

            let status = response.status();
            let body = response.text().await?;
            tracing::debug!(status = %status, response = %body, "Raw recommendation API response");

            interpret_body(status, &body)
        }
        .instrument(span)
        .await
    }
}

/// Maps a status and body onto the client's result
fn interpret_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> AppResult<T> {
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(ApiEnvelope::Failure { error }) => {
            tracing::debug!(status = %status, error = %error, "Recommendation API reported an error");
            Err(ClientError::Api(error))
        }
        _ if !status.is_success() => {
            tracing::warn!(status = %status, "Unexpected status from recommendation API");
            Err(ClientError::ExternalApi(format!(
                "API returned status {}: {}",
                status, body
            )))
        }
        Ok(ApiEnvelope::Success(value)) => Ok(value),
        Err(e) => {
            tracing::error!(error = %e, response = %body, "Failed to deserialize API response");
            Err(ClientError::InvalidResponse(format!(
                "Failed to parse recommendation API response: {}",
                e
            )))
        }
    }
}

#[async_trait::async_trait]
impl RecommendationApi for HttpRecommendationApi {
    async fn list_bands(&self) -> AppResult<BandCatalog> {
        let url = self.endpoint(&["band", ""]);
        let request = self.http_client.get(url.clone());
        let response: BandListResponse = self.execute("GET", url, request).await?;

        let catalog = BandCatalog::from(response);
        tracing::info!(bands = catalog.len(), "Band catalog fetched");
        Ok(catalog)
    }

    async fn similar_bands(&self, band: &str) -> AppResult<SimilarBands> {
        let url = self.endpoint(&["band", band]);
        let request = self.http_client.get(url.clone());
        let similar: SimilarBands = self.execute("GET", url, request).await?;

        tracing::info!(band = %band, results = similar.similar.len(), "Similar bands fetched");
        Ok(similar)
    }

    async fn user_recommendations(
        &self,
        user: UserIdInput,
        limit: Option<u32>,
    ) -> AppResult<UserRecommendations> {
        let user_segment = user.to_string();
        let mut url = self.endpoint(&["user", user_segment.as_str()]);
        if let Some(limit) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }

        let request = self.http_client.get(url.clone());
        let recommendations: UserRecommendations = self.execute("GET", url, request).await?;

        tracing::info!(
            user_id = %user,
            likes = recommendations.likes.len(),
            results = recommendations.recommendations.len(),
            "User recommendations fetched"
        );
        Ok(recommendations)
    }

    async fn register_user(&self, request: &NewUserRequest) -> AppResult<RegisteredUser> {
        let url = self.endpoint(&["user", ""]);
        let builder = self.http_client.post(url.clone()).json(request);
        let registered: RegisteredUser = self.execute("POST", url, builder).await?;

        tracing::info!(
            user_id = registered.user_id,
            likes = request.likes.len(),
            "User registered"
        );
        Ok(registered)
    }

    async fn user_count(&self) -> AppResult<UserCount> {
        let url = self.endpoint(&["user", ""]);
        let request = self.http_client.get(url.clone());
        let count: UserCount = self.execute("GET", url, request).await?;

        tracing::info!(users = count.num_of_users, "User count fetched");
        Ok(count)
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
