//! In-memory demo data used when the backend is unreachable.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use votestream_domain::{DomainError, Poll, PollId, PollResults, Theme, ThemeKey};

/// Static themes and polls plus a mutable results table.
///
/// Demo votes are written into the results table, so results fetched after a
/// demo vote include it. Each mutation happens under one lock acquisition.
#[derive(Debug)]
pub struct DemoStore {
    themes: Vec<Theme>,
    results: Mutex<HashMap<PollId, PollResults>>,
}

impl DemoStore {
    pub fn new(
        themes: Vec<Theme>,
        results: impl IntoIterator<Item = (PollId, PollResults)>,
    ) -> Self {
        Self {
            themes,
            results: Mutex::new(results.into_iter().collect()),
        }
    }

    fn table(&self) -> MutexGuard<'_, HashMap<PollId, PollResults>> {
        self.results.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn theme(&self, key: &ThemeKey) -> Option<&Theme> {
        self.themes.iter().find(|t| &t.key == key)
    }

    /// Theme whose embedded polls include `id`
    pub fn theme_of(&self, id: PollId) -> Option<&Theme> {
        self.themes.iter().find(|t| t.contains_poll(id))
    }

    /// All polls across themes, in theme order
    pub fn polls(&self) -> Vec<Poll> {
        self.themes
            .iter()
            .flat_map(|theme| theme.polls.iter().map(|p| Self::tagged(theme, p)))
            .collect()
    }

    pub fn poll(&self, id: PollId) -> Option<Poll> {
        self.themes.iter().find_map(|theme| {
            theme
                .polls
                .iter()
                .find(|p| p.id == id)
                .map(|p| Self::tagged(theme, p))
        })
    }

    fn tagged(theme: &Theme, poll: &Poll) -> Poll {
        let mut poll = poll.clone();
        if poll.theme.is_none() {
            poll.theme = Some(theme.key.clone());
        }
        poll
    }

    /// Results for a poll; empty when nothing was ever recorded
    pub fn results(&self, id: PollId) -> PollResults {
        self.table().get(&id).cloned().unwrap_or_default()
    }

    /// Count a vote for `choice`, returning the updated results.
    ///
    /// A poll missing from the table starts at `{option text: 1}`.
    pub fn record_vote(&self, poll: &Poll, choice: usize) -> Result<PollResults, DomainError> {
        let mut table = self.table();
        let results = table.entry(poll.id).or_default();
        results.record_choice(poll, choice)?;
        Ok(results.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DemoStore {
        let mut tech = Theme::new("tech", "Tech");
        tech.polls = vec![
            Poll::new(1, "Best framework?", &["React", "Vue.js", "Angular"]),
            Poll::new(2, "Tabs or spaces?", &["Tabs", "Spaces"]),
        ];
        let mut food = Theme::new("food", "Food");
        food.polls = vec![Poll::new(7, "Pineapple on pizza?", &["Yes", "No"])];
        DemoStore::new(
            vec![tech, food],
            [(
                PollId(1),
                PollResults::from_pairs([("React", 25), ("Vue.js", 18), ("Angular", 12)]),
            )],
        )
    }

    #[test]
    fn test_lookup() {
        let store = store();
        assert_eq!(store.polls().len(), 3);
        assert_eq!(store.theme_of(PollId(7)).unwrap().name, "Food");
        assert!(store.theme_of(PollId(99)).is_none());

        let poll = store.poll(PollId(2)).unwrap();
        assert_eq!(poll.theme, Some(ThemeKey::new("tech")));
        assert!(store.poll(PollId(99)).is_none());
        assert_eq!(store.themes().len(), 2);
    }

    #[test]
    fn test_first_vote_initializes_tally() {
        let store = store();
        let poll = store.poll(PollId(2)).unwrap();
        assert!(store.results(PollId(2)).is_empty());

        let results = store.record_vote(&poll, 1).unwrap();
        assert_eq!(results, PollResults::from_pairs([("Spaces", 1)]));
        assert_eq!(store.results(PollId(2)).count("Spaces"), 1);
    }

    #[test]
    fn test_vote_increments_existing() {
        let store = store();
        let poll = store.poll(PollId(1)).unwrap();
        let results = store.record_vote(&poll, 0).unwrap();
        assert_eq!(results.count("React"), 26);
        assert_eq!(results.total(), 56);
    }

    #[test]
    fn test_vote_rejects_unknown_option() {
        let store = store();
        let poll = store.poll(PollId(2)).unwrap();
        assert!(store.record_vote(&poll, 5).is_err());
        assert!(store.results(PollId(2)).is_empty());
    }
}
