use crate::error::AppResult;

/// User gestures the client reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The page finished loading; triggers the one-time catalog load
    PageReady,
    /// "Find similar" button for the band picker
    FindSimilarClicked,
    /// "Recommend for user" form with the raw text of its id field
    RecommendFormSubmitted {
        raw_input: String,
        limit: Option<u32>,
    },
    /// "Register user" button for the likes picker
    RegisterClicked,
}

/// What happened to a response once it arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The response replaced the region's content
    Rendered,
    /// A newer request for the same region was issued first; dropped
    Superseded,
    /// Nothing was requested, e.g. the catalog was already loaded
    Skipped,
}

/// A form submission whose default navigation can be suppressed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub raw_input: String,
    /// Number of recommendations to ask the service for
    pub limit: Option<u32>,
    default_prevented: bool,
}

impl FormSubmission {
    pub fn new(raw_input: impl Into<String>) -> Self {
        Self {
            raw_input: raw_input.into(),
            limit: None,
            default_prevented: false,
        }
    }

    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Result of dispatching one `UiEvent`
#[derive(Debug)]
pub struct EventOutcome {
    pub default_prevented: bool,
    pub result: AppResult<RenderOutcome>,
}

impl EventOutcome {
    pub fn new(result: AppResult<RenderOutcome>) -> Self {
        Self {
            default_prevented: false,
            result,
        }
    }
}
