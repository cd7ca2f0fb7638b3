use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::{OnceCell, RwLock};

use crate::{
    error::{AppResult, ClientError},
    models::{BandCatalog, NewUserRequest, UserIdInput},
    page::{EventOutcome, FormSubmission, Page, RenderOutcome, UiEvent, WidgetRefresher},
    services::{
        api::RecommendationApi,
        sequencer::{RenderTarget, RequestSequencer, Ticket},
    },
};

/// Number of entries rendered from any similarity or recommendation list
pub const MAX_DISPLAYED: usize = 5;

/// Turns user gestures into recommendation API calls and renders the results
///
/// The client owns no result state: each gesture issues exactly one request
/// and replaces what is displayed. The band catalog is the only thing kept,
/// and it is loaded at most once.
pub struct RecommendationClient {
    api: Arc<dyn RecommendationApi>,
    refresher: Arc<dyn WidgetRefresher>,
    page: Arc<RwLock<Page>>,
    sequencer: RequestSequencer,
    catalog: OnceCell<BandCatalog>,
    catalog_requested: AtomicBool,
}

impl RecommendationClient {
    pub fn new(
        api: Arc<dyn RecommendationApi>,
        refresher: Arc<dyn WidgetRefresher>,
        page: Arc<RwLock<Page>>,
    ) -> Self {
        Self {
            api,
            refresher,
            page,
            sequencer: RequestSequencer::new(),
            catalog: OnceCell::new(),
            catalog_requested: AtomicBool::new(false),
        }
    }

    pub fn page(&self) -> Arc<RwLock<Page>> {
        Arc::clone(&self.page)
    }

    /// The band catalog, once it has been loaded
    pub fn catalog(&self) -> Option<&BandCatalog> {
        self.catalog.get()
    }

    /// Loads the band catalog into both selection widgets
    ///
    /// Only the first call issues a request, even if it fails.
    pub async fn load_catalog(&self) -> AppResult<RenderOutcome> {
        if self.catalog_requested.swap(true, Ordering::SeqCst) {
            tracing::debug!("Band catalog already requested");
            return Ok(RenderOutcome::Skipped);
        }

        let result = self.api.list_bands().await;
        let catalog = self.surface_failure(result, None).await?;

        {
            let mut page = self.page.write().await;
            for band in catalog.bands() {
                page.band_select.append_option(band.as_str());
                page.likes_select.append_option(band.as_str());
            }
            self.refresher.refresh(&page.band_select);
            self.refresher.refresh(&page.likes_select);
        }

        tracing::info!(bands = catalog.len(), api = self.api.name(), "Band catalog loaded");
        // Only this call gets past the swap above, so the cell is still empty
        let _ = self.catalog.set(catalog);
        Ok(RenderOutcome::Rendered)
    }

    /// Handler for the "find similar" button: looks up the band picker's selection
    pub async fn find_similar(&self) -> AppResult<RenderOutcome> {
        let band = {
            let page = self.page.read().await;
            page.band_select.selected_value().map(str::to_string)
        };

        match band {
            Some(band) => self.get_similar_bands(&band).await,
            None => Err(ClientError::InvalidInput(
                "Select a band before looking up similar bands".to_string(),
            )),
        }
    }

    /// Fetches bands similar to `band` and renders the first five
    pub async fn get_similar_bands(&self, band: &str) -> AppResult<RenderOutcome> {
        let ticket = self.sequencer.issue(RenderTarget::SimilarList);

        let result = self.api.similar_bands(band).await;
        let similar = match self.surface_failure(result, Some(ticket)).await {
            Ok(similar) => similar,
            Err(ClientError::Api(error)) => {
                tracing::error!(band = %band, error = %error, "Similar band lookup rejected");
                return Err(ClientError::Api(error));
            }
            Err(e) => return Err(e),
        };

        tracing::info!(band = %band, results = similar.similar.len(), "Received similar bands");
        self.render(ticket, |page| {
            page.similar_list.replace_with(similar.similar, MAX_DISPLAYED)
        })
        .await
    }

    /// Fetches recommendations for a user and renders the first five
    pub async fn get_user_recommendations(&self, user: UserIdInput) -> AppResult<RenderOutcome> {
        self.get_user_recommendations_with_limit(user, None).await
    }

    /// Like `get_user_recommendations`, asking the service for `limit` entries
    ///
    /// Rendering still stops at five.
    pub async fn get_user_recommendations_with_limit(
        &self,
        user: UserIdInput,
        limit: Option<u32>,
    ) -> AppResult<RenderOutcome> {
        let ticket = self.sequencer.issue(RenderTarget::UserList);

        let result = self.api.user_recommendations(user.clone(), limit).await;
        let recommendations = match self.surface_failure(result, Some(ticket)).await {
            Ok(recommendations) => recommendations,
            Err(ClientError::Api(error)) => {
                tracing::error!(user_id = %user, error = %error, "User recommendation lookup rejected");
                return Err(ClientError::Api(error));
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            user_id = %user,
            likes = ?recommendations.likes,
            results = recommendations.recommendations.len(),
            "Received user recommendations"
        );
        self.render(ticket, |page| {
            page.user_list
                .replace_with(recommendations.recommendations, MAX_DISPLAYED)
        })
        .await
    }

    /// Handler for the "recommend for user" form
    ///
    /// The form's default navigation is suppressed before anything else, so it
    /// stays suppressed whatever the request does. A limit carried by the form
    /// is forwarded to the service.
    pub async fn submit_recommendation_form(
        &self,
        form: &mut FormSubmission,
    ) -> AppResult<RenderOutcome> {
        form.prevent_default();
        let user = UserIdInput::parse(&form.raw_input);
        tracing::debug!(raw_input = %form.raw_input, user_id = %user, "Recommendation form submitted");
        self.get_user_recommendations_with_limit(user, form.limit).await
    }

    /// Registers a new user from the likes picker's selection
    pub async fn register_user(&self) -> AppResult<RenderOutcome> {
        let likes = {
            let page = self.page.read().await;
            page.likes_select.selected_values()
        };
        let request = NewUserRequest::new(likes);
        let ticket = self.sequencer.issue(RenderTarget::Registration);

        let result = self.api.register_user(&request).await;
        let registered = match self.surface_failure(result, Some(ticket)).await {
            Ok(registered) => registered,
            Err(ClientError::Api(error)) => {
                tracing::error!(likes = ?request.likes, error = %error, "User registration rejected");
                return Err(ClientError::Api(error));
            }
            Err(e) => return Err(e),
        };

        tracing::info!(user_id = registered.user_id, "User added");
        self.render(ticket, |page| page.registration.set_text(registered.confirmation()))
            .await
    }

    /// Number of users known to the service
    pub async fn user_count(&self) -> AppResult<u64> {
        let result = self.api.user_count().await;
        let count = self.surface_failure(result, None).await?;
        Ok(count.num_of_users)
    }

    /// Routes a user gesture to its operation
    pub async fn dispatch(&self, event: UiEvent) -> EventOutcome {
        match event {
            UiEvent::PageReady => EventOutcome::new(self.load_catalog().await),
            UiEvent::FindSimilarClicked => EventOutcome::new(self.find_similar().await),
            UiEvent::RecommendFormSubmitted { raw_input, limit } => {
                let mut form = FormSubmission::new(raw_input).with_limit(limit);
                let result = self.submit_recommendation_form(&mut form).await;
                EventOutcome {
                    default_prevented: form.default_prevented(),
                    result,
                }
            }
            UiEvent::RegisterClicked => EventOutcome::new(self.register_user().await),
        }
    }

    /// Applies a render if no newer request for the same region was issued
    async fn render<F>(&self, ticket: Ticket, apply: F) -> AppResult<RenderOutcome>
    where
        F: FnOnce(&mut Page),
    {
        let mut page = self.page.write().await;
        if !self.sequencer.is_current(ticket) {
            tracing::debug!(target_region = ?ticket.target(), "Dropping superseded response");
            return Ok(RenderOutcome::Superseded);
        }
        apply(&mut *page);
        page.status.clear();
        Ok(RenderOutcome::Rendered)
    }

    /// Shows transport and parse failures on the status line
    ///
    /// Service-reported errors pass through untouched; callers log them. A
    /// failure whose ticket was superseded leaves the status line alone, so it
    /// cannot contradict a newer render.
    async fn surface_failure<T>(
        &self,
        result: AppResult<T>,
        ticket: Option<Ticket>,
    ) -> AppResult<T> {
        if let Err(e) = &result {
            if e.is_user_visible() {
                let mut page = self.page.write().await;
                if ticket.is_some_and(|t| !self.sequencer.is_current(t)) {
                    tracing::debug!(error = %e, "Dropping superseded failure");
                } else {
                    tracing::error!(error = %e, api = self.api.name(), "Request failed");
                    page.status.set_text(format!("Request failed: {}", e));
                }
            }
        }
        result
    }
}
