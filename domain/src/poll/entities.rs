//! Theme and poll entities as exchanged with the polling API.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric poll identifier assigned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PollId(pub u64);

impl PollId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PollId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PollId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Theme identity (the key of the `/themes` object, e.g. `"OnTrend"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeKey(String);

impl ThemeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// A single answer of a poll.
///
/// Options have no identity of their own: the position inside
/// [`Poll::options`] is what gets sent as the vote `choice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
}

impl PollOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A question with an ordered list of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub question: String,
    #[serde(default)]
    pub options: Vec<PollOption>,
    /// Theme the poll belongs to, when the backend reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeKey>,
}

impl Poll {
    pub fn new(id: impl Into<PollId>, question: impl Into<String>, options: &[&str]) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            options: options.iter().map(|text| PollOption::new(*text)).collect(),
            theme: None,
        }
    }

    pub fn with_theme(mut self, theme: impl Into<ThemeKey>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Option at a wire `choice` index
    pub fn option(&self, choice: usize) -> Result<&PollOption, DomainError> {
        self.options.get(choice).ok_or(DomainError::UnknownOption {
            poll_id: self.id.get(),
            choice,
        })
    }
}

/// Display letter for an option position: 0 → `A`, 1 → `B`, …
///
/// Positions past `Z` fall back to the 1-based number.
pub fn option_letter(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        (index + 1).to_string()
    }
}

/// A named category grouping related polls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Filled from the enclosing object key on the wire
    #[serde(default, skip_serializing)]
    pub key: ThemeKey,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub polls: Vec<Poll>,
    /// Count reported by the API when polls are not embedded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll_count: Option<usize>,
}

impl Theme {
    pub fn new(key: impl Into<ThemeKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            slug: String::new(),
            description: String::new(),
            color: String::new(),
            icon: String::new(),
            polls: Vec::new(),
            poll_count: None,
        }
    }

    /// Number of active polls to advertise on the theme card
    pub fn active_poll_count(&self) -> usize {
        self.poll_count.unwrap_or(self.polls.len())
    }

    pub fn contains_poll(&self, id: PollId) -> bool {
        self.polls.iter().any(|p| p.id == id)
    }
}

/// The `/themes` response: theme key → theme, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeCatalog {
    #[serde(with = "super::ordered_map")]
    entries: Vec<(ThemeKey, Theme)>,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<Theme>) -> Self {
        Self {
            entries: themes.into_iter().map(|t| (t.key.clone(), t)).collect(),
        }
    }

    /// Themes in order, each with its `key` populated from the object key
    pub fn into_themes(self) -> Vec<Theme> {
        self.entries
            .into_iter()
            .map(|(key, mut theme)| {
                theme.key = key;
                theme
            })
            .collect()
    }

    pub fn get(&self, key: &ThemeKey) -> Option<Theme> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(k, theme)| {
                let mut theme = theme.clone();
                theme.key = k.clone();
                theme
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Body of `POST /polls`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPoll {
    pub question: String,
    pub theme: ThemeKey,
    pub options: Vec<PollOption>,
}

impl NewPoll {
    /// Minimum number of options a new poll must offer
    pub const MIN_OPTIONS: usize = 2;

    /// Build a validated poll creation request.
    ///
    /// Text is trimmed; the question, theme and every option are required.
    pub fn new(
        question: &str,
        theme: &str,
        options: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, DomainError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DomainError::InvalidPoll("Question is required".into()));
        }
        let theme = theme.trim();
        if theme.is_empty() {
            return Err(DomainError::InvalidPoll(
                "Select a theme for the poll".into(),
            ));
        }

        let mut parsed = Vec::new();
        for (i, option) in options.into_iter().enumerate() {
            let text = option.as_ref().trim();
            if text.is_empty() {
                return Err(DomainError::InvalidPoll(format!(
                    "Option {} is required",
                    i + 1
                )));
            }
            parsed.push(PollOption::new(text));
        }
        if parsed.len() < Self::MIN_OPTIONS {
            return Err(DomainError::InvalidPoll(format!(
                "A poll needs at least {} options",
                Self::MIN_OPTIONS
            )));
        }

        Ok(Self {
            question: question.to_string(),
            theme: ThemeKey::new(theme),
            options: parsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_deserializes_backend_shape() {
        let json = r#"{
            "id": 4,
            "question": "Tabs or spaces?",
            "options": [{"id": 10, "text": "Tabs"}, {"id": 11, "text": "Spaces"}],
            "created_at": "2024-01-01T00:00:00",
            "is_active": true
        }"#;
        let poll: Poll = serde_json::from_str(json).unwrap();
        assert_eq!(poll.id, PollId(4));
        assert_eq!(poll.options.len(), 2);
        assert_eq!(poll.option(1).unwrap().text, "Spaces");
        assert!(poll.theme.is_none());
    }

    #[test]
    fn test_option_out_of_range() {
        let poll = Poll::new(1, "Q?", &["a", "b"]);
        assert_eq!(
            poll.option(2),
            Err(DomainError::UnknownOption {
                poll_id: 1,
                choice: 2
            })
        );
    }

    #[test]
    fn test_option_letters() {
        assert_eq!(option_letter(0), "A");
        assert_eq!(option_letter(2), "C");
        assert_eq!(option_letter(25), "Z");
        assert_eq!(option_letter(26), "27");
    }

    #[test]
    fn test_catalog_fills_keys_in_order() {
        let json = r##"{
            "Sports": {"name": "Sports", "color": "#45b7d1", "poll_count": 3},
            "OnTrend": {"name": "#OnTrend", "polls": [{"id": 1, "question": "Q", "options": []}]}
        }"##;
        let catalog: ThemeCatalog = serde_json::from_str(json).unwrap();
        let themes = catalog.clone().into_themes();
        assert_eq!(themes[0].key.as_str(), "Sports");
        assert_eq!(themes[1].key.as_str(), "OnTrend");
        assert_eq!(themes[0].active_poll_count(), 3);
        assert_eq!(themes[1].active_poll_count(), 1);

        let on_trend = catalog.get(&ThemeKey::from("OnTrend")).unwrap();
        assert!(on_trend.contains_poll(PollId(1)));
        assert!(catalog.get(&ThemeKey::from("Nope")).is_none());
    }

    #[test]
    fn test_new_poll_trims_and_validates() {
        let poll = NewPoll::new("  Best editor? ", "OnTrend", ["vim ", " emacs"]).unwrap();
        assert_eq!(poll.question, "Best editor?");
        assert_eq!(poll.options[0].text, "vim");
        assert_eq!(poll.options[1].text, "emacs");

        let json = serde_json::to_value(&poll).unwrap();
        assert_eq!(json["theme"], "OnTrend");
        assert_eq!(json["options"][1]["text"], "emacs");
    }

    #[test]
    fn test_new_poll_rejections() {
        assert!(matches!(
            NewPoll::new("", "OnTrend", ["a", "b"]),
            Err(DomainError::InvalidPoll(msg)) if msg == "Question is required"
        ));
        assert!(matches!(
            NewPoll::new("Q", " ", ["a", "b"]),
            Err(DomainError::InvalidPoll(msg)) if msg == "Select a theme for the poll"
        ));
        assert!(matches!(
            NewPoll::new("Q", "OnTrend", ["a", ""]),
            Err(DomainError::InvalidPoll(msg)) if msg == "Option 2 is required"
        ));
        assert!(NewPoll::new("Q", "OnTrend", ["only"]).is_err());
    }
}
