/// Client-level errors
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The service answered with an `error` field in its JSON body
    #[error("Service error: {0}")]
    Api(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ClientError {
    /// Whether the failure should be shown to the user on the status line.
    ///
    /// Service-reported errors are only logged; everything that prevented the
    /// request from resolving normally is surfaced.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, ClientError::Api(_))
    }
}

pub type AppResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_errors_are_not_user_visible() {
        assert!(!ClientError::Api("Band x not found".to_string()).is_user_visible());
        assert!(ClientError::ExternalApi("status 500".to_string()).is_user_visible());
        assert!(ClientError::InvalidResponse("not json".to_string()).is_user_visible());
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::Api("User 7 not found".to_string());
        assert_eq!(err.to_string(), "Service error: User 7 not found");
    }
}
