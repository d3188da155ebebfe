//! Shared fakes for application tests.

use crate::fallback::DemoStore;
use crate::ports::poll_api::{ApiError, PollApi};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use votestream_domain::{
    NewPoll, Poll, PollId, PollResults, Theme, ThemeCatalog, ThemeKey,
};

pub(crate) fn tech_theme() -> Theme {
    let mut theme = Theme::new("tech", "Tech");
    theme.color = "#ff6b6b".into();
    theme.polls = vec![
        Poll::new(1, "Best framework?", &["React", "Vue.js", "Angular"]).with_theme("tech"),
        Poll::new(2, "Tabs or spaces?", &["Tabs", "Spaces"]).with_theme("tech"),
    ];
    theme
}

pub(crate) fn demo_store() -> DemoStore {
    DemoStore::new(
        vec![tech_theme()],
        [(
            PollId(1),
            PollResults::from_pairs([("React", 25), ("Vue.js", 18), ("Angular", 12)]),
        )],
    )
}

/// Scripted backend. Offline mode fails every call with a network error.
pub(crate) struct MockApi {
    online: AtomicBool,
    themes: Vec<Theme>,
    scripted_results: Mutex<VecDeque<Result<PollResults, ApiError>>>,
    default_results: PollResults,
    vote_delay: Duration,
    pub votes: Mutex<Vec<(PollId, usize)>>,
    pub created: Mutex<Vec<NewPoll>>,
    pub results_calls: AtomicUsize,
}

impl MockApi {
    pub(crate) fn online() -> Self {
        Self {
            online: AtomicBool::new(true),
            themes: vec![tech_theme()],
            scripted_results: Mutex::new(VecDeque::new()),
            default_results: PollResults::from_pairs([("React", 3), ("Vue.js", 1)]),
            vote_delay: Duration::ZERO,
            votes: Mutex::new(Vec::new()),
            created: Mutex::new(Vec::new()),
            results_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn offline() -> Self {
        let api = Self::online();
        api.online.store(false, Ordering::SeqCst);
        api
    }

    pub(crate) fn with_vote_delay(mut self, delay: Duration) -> Self {
        self.vote_delay = delay;
        self
    }

    pub(crate) fn script_results(&self, responses: Vec<Result<PollResults, ApiError>>) {
        self.scripted_results.lock().unwrap().extend(responses);
    }

    pub(crate) fn vote_count(&self) -> usize {
        self.votes.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), ApiError> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ApiError::Network("connection refused".into()))
        }
    }
}

#[async_trait]
impl PollApi for MockApi {
    async fn list_themes(&self) -> Result<ThemeCatalog, ApiError> {
        self.check()?;
        Ok(ThemeCatalog::new(self.themes.clone()))
    }

    async fn theme_polls(&self, theme: &ThemeKey) -> Result<Vec<Poll>, ApiError> {
        self.check()?;
        self.themes
            .iter()
            .find(|t| &t.key == theme)
            .map(|t| t.polls.clone())
            .ok_or(ApiError::Http { status: 404 })
    }

    async fn list_polls(&self) -> Result<Vec<Poll>, ApiError> {
        self.check()?;
        Ok(self.themes.iter().flat_map(|t| t.polls.clone()).collect())
    }

    async fn get_poll(&self, id: PollId) -> Result<Poll, ApiError> {
        self.check()?;
        self.themes
            .iter()
            .flat_map(|t| t.polls.iter())
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::Http { status: 404 })
    }

    async fn create_poll(&self, poll: &NewPoll) -> Result<Poll, ApiError> {
        self.check()?;
        self.created.lock().unwrap().push(poll.clone());
        let options: Vec<&str> = poll.options.iter().map(|o| o.text.as_str()).collect();
        Ok(Poll::new(100, poll.question.clone(), &options).with_theme(poll.theme.clone()))
    }

    async fn vote(&self, id: PollId, choice: usize) -> Result<(), ApiError> {
        if !self.vote_delay.is_zero() {
            tokio::time::sleep(self.vote_delay).await;
        }
        self.check()?;
        self.votes.lock().unwrap().push((id, choice));
        Ok(())
    }

    async fn results(&self, _id: PollId) -> Result<PollResults, ApiError> {
        self.results_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(scripted) = self.scripted_results.lock().unwrap().pop_front() {
            return scripted;
        }
        self.check()?;
        Ok(self.default_results.clone())
    }
}
