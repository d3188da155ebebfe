//! Poll data with demo fallback.
//!
//! [`PollSource`] is the single place where a failed backend call turns into
//! demo data. Callers get a [`Sourced`] value tagged with where it came from
//! and never see an [`ApiError`](crate::ports::poll_api::ApiError).

use super::demo_store::DemoStore;
use crate::ports::poll_api::PollApi;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use votestream_domain::{DomainError, Poll, PollId, PollResults, Theme, ThemeKey};

/// Where a piece of data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Remote,
    Demo,
}

impl DataOrigin {
    pub fn is_demo(self) -> bool {
        self == DataOrigin::Demo
    }
}

impl fmt::Display for DataOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOrigin::Remote => write!(f, "remote"),
            DataOrigin::Demo => write!(f, "demo"),
        }
    }
}

/// A value and its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub value: T,
    pub origin: DataOrigin,
}

impl<T> Sourced<T> {
    pub fn remote(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Remote,
        }
    }

    pub fn demo(value: T) -> Self {
        Self {
            value,
            origin: DataOrigin::Demo,
        }
    }
}

/// Polls of one theme
#[derive(Debug, Clone, PartialEq)]
pub struct ThemePolls {
    pub theme: Theme,
    pub polls: Vec<Poll>,
}

/// Outcome of a vote submission
#[derive(Debug, Clone, PartialEq)]
pub struct VoteOutcome {
    /// Remote when the backend accepted the vote, Demo when it was simulated
    pub origin: DataOrigin,
    /// Results after the vote
    pub results: Sourced<PollResults>,
}

/// Backend access with demo fallback on every read and on voting.
pub struct PollSource<A: PollApi> {
    api: Arc<A>,
    demo: Arc<DemoStore>,
}

impl<A: PollApi> Clone for PollSource<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            demo: self.demo.clone(),
        }
    }
}

impl<A: PollApi> PollSource<A> {
    pub fn new(api: Arc<A>, demo: Arc<DemoStore>) -> Self {
        Self { api, demo }
    }

    pub fn api(&self) -> &Arc<A> {
        &self.api
    }

    pub fn demo(&self) -> &DemoStore {
        &self.demo
    }

    pub async fn themes(&self) -> Sourced<Vec<Theme>> {
        match self.api.list_themes().await {
            Ok(catalog) => Sourced::remote(catalog.into_themes()),
            Err(e) => {
                info!("Backend not available, using demo themes: {}", e);
                Sourced::demo(self.demo.themes().to_vec())
            }
        }
    }

    /// Theme metadata plus its polls; `None` when the theme is unknown
    /// both remotely and in the demo data.
    pub async fn theme_polls(&self, key: &ThemeKey) -> Option<Sourced<ThemePolls>> {
        let remote = async {
            let polls = self.api.theme_polls(key).await?;
            let catalog = self.api.list_themes().await?;
            Ok::<_, crate::ports::poll_api::ApiError>((polls, catalog))
        };
        match remote.await {
            Ok((polls, catalog)) => {
                let theme = catalog
                    .get(key)
                    .or_else(|| self.demo.theme(key).cloned())?;
                Some(Sourced::remote(ThemePolls { theme, polls }))
            }
            Err(e) => {
                info!("Backend not available, using demo polls: {}", e);
                let theme = self.demo.theme(key)?.clone();
                let polls = theme.polls.clone();
                Some(Sourced::demo(ThemePolls { theme, polls }))
            }
        }
    }

    /// Legacy flat poll list
    pub async fn polls(&self) -> Sourced<Vec<Poll>> {
        match self.api.list_polls().await {
            Ok(polls) => Sourced::remote(polls),
            Err(e) => {
                info!("Backend not available, using demo polls: {}", e);
                Sourced::demo(self.demo.polls())
            }
        }
    }

    pub async fn poll(&self, id: PollId) -> Option<Sourced<Poll>> {
        match self.api.get_poll(id).await {
            Ok(poll) => Some(Sourced::remote(poll)),
            Err(e) => {
                info!("Backend not available, looking up poll {} in demo data: {}", id, e);
                self.demo.poll(id).map(Sourced::demo)
            }
        }
    }

    /// Theme a poll belongs to, from the poll's own tag or the demo data
    pub fn theme_for(&self, poll: &Poll) -> Option<Theme> {
        poll.theme
            .as_ref()
            .and_then(|key| self.demo.theme(key))
            .or_else(|| self.demo.theme_of(poll.id))
            .cloned()
    }

    pub async fn results(&self, id: PollId) -> Sourced<PollResults> {
        match self.api.results(id).await {
            Ok(results) => Sourced::remote(results),
            Err(e) => {
                debug!("Results for poll {} unavailable, using demo results: {}", id, e);
                Sourced::demo(self.demo.results(id))
            }
        }
    }

    /// Submit a vote, simulating it in the demo store when the backend
    /// rejects or cannot be reached.
    ///
    /// Fails only when `choice` is not an option of `poll`.
    pub async fn vote(&self, poll: &Poll, choice: usize) -> Result<VoteOutcome, DomainError> {
        poll.option(choice)?;
        match self.api.vote(poll.id, choice).await {
            Ok(()) => Ok(VoteOutcome {
                origin: DataOrigin::Remote,
                results: self.results(poll.id).await,
            }),
            Err(e) => {
                info!("Backend not available, simulating vote on poll {}: {}", poll.id, e);
                let results = self.demo.record_vote(poll, choice)?;
                Ok(VoteOutcome {
                    origin: DataOrigin::Demo,
                    results: Sourced::demo(results),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::test_support::{MockApi, demo_store};
    use crate::ports::poll_api::ApiError;

    fn source(api: MockApi) -> PollSource<MockApi> {
        PollSource::new(Arc::new(api), Arc::new(demo_store()))
    }

    #[tokio::test]
    async fn test_themes_remote_and_demo() {
        let remote = source(MockApi::online()).themes().await;
        assert_eq!(remote.origin, DataOrigin::Remote);
        assert_eq!(remote.value[0].key, ThemeKey::new("tech"));

        let demo = source(MockApi::offline()).themes().await;
        assert_eq!(demo.origin, DataOrigin::Demo);
        assert_eq!(demo.value.len(), 1);
    }

    #[tokio::test]
    async fn test_theme_polls_fallback_and_unknown() {
        let offline = source(MockApi::offline());
        let sourced = offline.theme_polls(&ThemeKey::new("tech")).await.unwrap();
        assert!(sourced.origin.is_demo());
        assert_eq!(sourced.value.polls.len(), 2);

        assert!(offline.theme_polls(&ThemeKey::new("nope")).await.is_none());
    }

    #[tokio::test]
    async fn test_poll_not_found_offline() {
        let offline = source(MockApi::offline());
        assert!(offline.poll(PollId(2)).await.is_some());
        assert!(offline.poll(PollId(42)).await.is_none());
    }

    #[tokio::test]
    async fn test_remote_vote_refreshes_results() {
        let src = source(MockApi::online());
        let poll = src.demo().poll(PollId(1)).unwrap();
        let outcome = src.vote(&poll, 0).await.unwrap();
        assert_eq!(outcome.origin, DataOrigin::Remote);
        assert_eq!(outcome.results.value.count("React"), 3);
        assert_eq!(src.api().vote_count(), 1);
        // demo table untouched
        assert_eq!(src.demo().results(PollId(1)).count("React"), 25);
    }

    #[tokio::test]
    async fn test_demo_vote_increments_demo_results() {
        let src = source(MockApi::offline());
        let poll = src.demo().poll(PollId(1)).unwrap();
        let outcome = src.vote(&poll, 1).await.unwrap();
        assert_eq!(outcome.origin, DataOrigin::Demo);
        assert_eq!(outcome.results.value.count("Vue.js"), 19);
        assert_eq!(src.results(PollId(1)).await.value.count("Vue.js"), 19);
    }

    #[tokio::test]
    async fn test_vote_rejects_out_of_range_choice() {
        let src = source(MockApi::online());
        let poll = src.demo().poll(PollId(2)).unwrap();
        assert!(src.vote(&poll, 2).await.is_err());
        assert_eq!(src.api().vote_count(), 0);
    }

    #[tokio::test]
    async fn test_rate_limited_results_fall_back() {
        let api = MockApi::online();
        api.script_results(vec![Err(ApiError::RateLimited)]);
        let src = source(api);
        let results = src.results(PollId(1)).await;
        assert!(results.origin.is_demo());
        assert_eq!(results.value.total(), 55);
    }
}
