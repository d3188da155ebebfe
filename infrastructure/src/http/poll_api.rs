//! reqwest adapter for the polling backend.

use super::endpoint::{endpoint, parse_base_url};
use super::HttpSetupError;
use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::debug;
use url::Url;
use votestream_application::{ApiError, PollApi};
use votestream_domain::{NewPoll, Poll, PollId, PollResults, ThemeCatalog, ThemeKey};

/// JSON-over-HTTP [`PollApi`] implementation
pub struct HttpPollApi {
    client: Client,
    base: Url,
}

impl HttpPollApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpSetupError> {
        let base = parse_base_url(base_url).map_err(HttpSetupError::InvalidBaseUrl)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("votestream/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let url = endpoint(&self.base, segments);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }
}

/// Map status to [`ApiError`], then parse the JSON body
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if let Some(err) = ApiError::from_status(response.status().as_u16()) {
        return Err(err);
    }
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl PollApi for HttpPollApi {
    async fn list_themes(&self) -> Result<ThemeCatalog, ApiError> {
        self.request(Method::GET, &["themes"], None).await
    }

    async fn theme_polls(&self, theme: &ThemeKey) -> Result<Vec<Poll>, ApiError> {
        self.request(Method::GET, &["themes", theme.as_str(), "polls"], None)
            .await
    }

    async fn list_polls(&self) -> Result<Vec<Poll>, ApiError> {
        self.request(Method::GET, &["polls"], None).await
    }

    async fn get_poll(&self, id: PollId) -> Result<Poll, ApiError> {
        let id = id.to_string();
        self.request(Method::GET, &["polls", &id], None).await
    }

    async fn create_poll(&self, poll: &NewPoll) -> Result<Poll, ApiError> {
        let body = serde_json::to_value(poll).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.request(Method::POST, &["polls"], Some(body)).await
    }

    async fn vote(&self, id: PollId, choice: usize) -> Result<(), ApiError> {
        let id = id.to_string();
        let _: serde_json::Value = self
            .request(
                Method::POST,
                &["polls", &id, "vote"],
                Some(json!({ "choice": choice })),
            )
            .await?;
        Ok(())
    }

    async fn results(&self, id: PollId) -> Result<PollResults, ApiError> {
        let id = id.to_string();
        self.request(Method::GET, &["polls", &id, "results"], None)
            .await
    }
}
