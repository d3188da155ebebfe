//! Poll API port
//!
//! Defines the interface to the polling backend. Adapters live in the
//! infrastructure layer; every caller in this crate treats a failure as a
//! reason to fall back to demo data rather than an error to surface.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use votestream_domain::{NewPoll, Poll, PollId, PollResults, ThemeCatalog, ThemeKey};

/// Errors surfaced by the polling backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// Status 429
    #[error("Rate limited")]
    RateLimited,

    /// The response body was not the expected JSON
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status that signals rate limiting
    pub const RATE_LIMIT_STATUS: u16 = 429;

    /// Classify an HTTP status code; `None` for 2xx.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            Self::RATE_LIMIT_STATUS => Some(ApiError::RateLimited),
            status => Some(ApiError::Http { status }),
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, ApiError::RateLimited)
    }
}

/// Gateway to the polling backend
#[async_trait]
pub trait PollApi: Send + Sync {
    /// `GET /themes`
    async fn list_themes(&self) -> Result<ThemeCatalog, ApiError>;

    /// `GET /themes/{key}/polls`
    async fn theme_polls(&self, theme: &ThemeKey) -> Result<Vec<Poll>, ApiError>;

    /// `GET /polls`
    async fn list_polls(&self) -> Result<Vec<Poll>, ApiError>;

    /// `GET /polls/{id}`
    async fn get_poll(&self, id: PollId) -> Result<Poll, ApiError>;

    /// `POST /polls`
    async fn create_poll(&self, poll: &NewPoll) -> Result<Poll, ApiError>;

    /// `POST /polls/{id}/vote` with the option index as `choice`
    async fn vote(&self, id: PollId, choice: usize) -> Result<(), ApiError>;

    /// `GET /polls/{id}/results`
    async fn results(&self, id: PollId) -> Result<PollResults, ApiError>;
}

#[async_trait]
impl<T: PollApi + ?Sized> PollApi for Arc<T> {
    async fn list_themes(&self) -> Result<ThemeCatalog, ApiError> {
        (**self).list_themes().await
    }

    async fn theme_polls(&self, theme: &ThemeKey) -> Result<Vec<Poll>, ApiError> {
        (**self).theme_polls(theme).await
    }

    async fn list_polls(&self) -> Result<Vec<Poll>, ApiError> {
        (**self).list_polls().await
    }

    async fn get_poll(&self, id: PollId) -> Result<Poll, ApiError> {
        (**self).get_poll(id).await
    }

    async fn create_poll(&self, poll: &NewPoll) -> Result<Poll, ApiError> {
        (**self).create_poll(poll).await
    }

    async fn vote(&self, id: PollId, choice: usize) -> Result<(), ApiError> {
        (**self).vote(id, choice).await
    }

    async fn results(&self, id: PollId) -> Result<PollResults, ApiError> {
        (**self).results(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(200), None);
        assert_eq!(ApiError::from_status(201), None);
        assert_eq!(ApiError::from_status(429), Some(ApiError::RateLimited));
        assert_eq!(
            ApiError::from_status(404),
            Some(ApiError::Http { status: 404 })
        );
        assert_eq!(
            ApiError::from_status(503),
            Some(ApiError::Http { status: 503 })
        );
        assert_eq!(
            ApiError::from_status(302),
            Some(ApiError::Http { status: 302 })
        );
    }

    #[test]
    fn test_rate_limited_flag() {
        assert!(ApiError::RateLimited.is_rate_limited());
        assert!(!ApiError::Http { status: 500 }.is_rate_limited());
        assert!(!ApiError::Network("refused".into()).is_rate_limited());
    }
}
