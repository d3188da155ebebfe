//! reqwest adapter for the load-test vote endpoint.

use super::endpoint::{endpoint, parse_base_url};
use super::HttpSetupError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::{Duration, Instant};
use url::Url;
use votestream_application::LoadTarget;
use votestream_domain::{PollId, VoteProbe};

/// Timed `POST /polls/{id}/vote` for virtual users
pub struct HttpLoadTarget {
    client: Client,
    base: Url,
}

impl HttpLoadTarget {
    /// `pool_size` idle connections are kept per host, one per VU at peak
    pub fn new(base_url: &str, timeout: Duration, pool_size: usize) -> Result<Self, HttpSetupError> {
        let base = parse_base_url(base_url).map_err(HttpSetupError::InvalidBaseUrl)?;
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(pool_size)
            .user_agent(concat!("votestream-load/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, base })
    }
}

#[async_trait]
impl LoadTarget for HttpLoadTarget {
    async fn send_vote(&self, poll_id: PollId, choice: usize) -> VoteProbe {
        let id = poll_id.to_string();
        let url = endpoint(&self.base, &["polls", &id, "vote"]);
        let started = Instant::now();

        let response = match self
            .client
            .post(url)
            .json(&json!({ "choice": choice }))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return VoteProbe::failed(None, e.to_string(), started.elapsed()),
        };

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        VoteProbe::response(status, body, started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connection_failure_is_a_failed_probe() {
        let target = HttpLoadTarget::new("http://127.0.0.1:9", Duration::from_secs(2), 4).unwrap();
        let probe = target.send_vote(PollId(1), 0).await;
        assert_eq!(probe.status, None);
        assert!(!probe.passed_checks());
    }
}
