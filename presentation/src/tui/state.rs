//! TUI state: the current view model, selection, create form and toast

use super::form::CreateForm;
use super::keys::FormAction;
use std::time::{Duration, Instant};
use votestream_application::{ControllerCommand, DataOrigin, UiEvent, ViewModel};
use votestream_domain::Notice;

/// Everything the TUI renders from
#[derive(Debug, Default)]
pub struct TuiState {
    /// `None` until the controller delivers the first view
    pub view: Option<ViewModel>,
    /// Highlighted row in the current view
    pub selected: usize,
    /// Open create-poll overlay; it takes all key input while shown
    pub form: Option<CreateForm>,
    pub toast: Option<(Notice, Instant)>,
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an event from the controller
    pub fn apply(&mut self, event: UiEvent, now: Instant) {
        match event {
            UiEvent::ViewChanged(view) => {
                self.selected = match &view {
                    ViewModel::Voting { voted_choice, .. } => voted_choice.unwrap_or(0),
                    _ => 0,
                };
                self.view = Some(view);
            }
            UiEvent::ResultsUpdated {
                poll_id,
                results: fresh,
                origin: _,
            } => {
                // late results for a poll we already left are dropped
                if let Some(ViewModel::Voting { poll, results, .. }) = &mut self.view
                    && poll.id == poll_id
                {
                    *results = fresh;
                }
            }
            UiEvent::VoteMarked { poll_id, choice } => {
                if let Some(ViewModel::Voting {
                    poll, voted_choice, ..
                }) = &mut self.view
                    && poll.id == poll_id
                {
                    *voted_choice = Some(choice);
                }
            }
            UiEvent::Notice(notice) => self.toast = Some((notice, now)),
            UiEvent::Exit => self.should_quit = true,
        }
    }

    /// Drop the toast once it is older than `max_age`
    pub fn expire_toast(&mut self, now: Instant, max_age: Duration) {
        if let Some((_, shown)) = &self.toast
            && now.saturating_duration_since(*shown) >= max_age
        {
            self.toast = None;
        }
    }

    pub fn origin(&self) -> Option<DataOrigin> {
        self.view.as_ref().map(ViewModel::origin)
    }

    /// Number of selectable rows in the current view
    pub fn item_count(&self) -> usize {
        match &self.view {
            Some(ViewModel::Themes { themes, .. }) => themes.len(),
            Some(ViewModel::ThemePolls { polls, .. }) => polls.len(),
            Some(ViewModel::Voting { poll, .. }) => poll.options.len(),
            None => 0,
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.item_count() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Command for activating the highlighted row
    pub fn activate(&self) -> Option<ControllerCommand> {
        match self.view.as_ref()? {
            ViewModel::Themes { themes, .. } => themes
                .get(self.selected)
                .map(|t| ControllerCommand::OpenTheme(t.key.clone())),
            ViewModel::ThemePolls { polls, .. } => polls
                .get(self.selected)
                .map(|p| ControllerCommand::OpenPoll(p.id)),
            ViewModel::Voting { .. } => self.vote(self.selected),
        }
    }

    /// Vote command for an option position, when the voting view has it
    pub fn vote(&self, choice: usize) -> Option<ControllerCommand> {
        match self.view.as_ref()? {
            ViewModel::Voting { poll, .. } if choice < poll.options.len() => {
                Some(ControllerCommand::Vote {
                    poll_id: poll.id,
                    choice,
                })
            }
            _ => None,
        }
    }

    pub fn is_voting(&self) -> bool {
        matches!(self.view, Some(ViewModel::Voting { .. }))
    }

    /// Open the create form with the theme in context pre-filled
    pub fn open_form(&mut self) {
        let theme = match &self.view {
            Some(ViewModel::Themes { themes, .. }) => themes.get(self.selected).map(|t| &t.key),
            Some(ViewModel::ThemePolls { theme, .. }) => Some(&theme.key),
            Some(ViewModel::Voting { theme, .. }) => theme.as_ref().map(|t| &t.key),
            None => None,
        };
        let theme = theme.map(|k| k.as_str()).unwrap_or_default();
        self.form = Some(CreateForm::new(theme));
    }

    /// Apply a key to the open form; a valid submission closes it
    pub fn form_input(&mut self, action: FormAction, now: Instant) -> Option<ControllerCommand> {
        let form = self.form.as_mut()?;
        match action {
            FormAction::Input(c) => form.push(c),
            FormAction::Backspace => form.backspace(),
            FormAction::NextField => form.next_field(),
            FormAction::PreviousField => form.previous_field(),
            FormAction::Confirm if !form.on_last_field() => form.next_field(),
            FormAction::Confirm => match form.submit() {
                Ok(new_poll) => {
                    self.form = None;
                    return Some(ControllerCommand::CreatePoll(new_poll));
                }
                Err(e) => self.toast = Some((Notice::error(e.to_string()), now)),
            },
            FormAction::Cancel => self.form = None,
            FormAction::Ignore => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use votestream_domain::{Poll, PollId, PollResults, Theme};

    fn voting_view(id: u64, voted_choice: Option<usize>) -> ViewModel {
        ViewModel::Voting {
            poll: Poll::new(id, "Tabs or spaces?", &["Tabs", "Spaces", "Both"]),
            theme: None,
            results: PollResults::new(),
            voted_choice,
            origin: DataOrigin::Remote,
        }
    }

    fn themes_view() -> ViewModel {
        ViewModel::Themes {
            themes: vec![Theme::new("tech", "Technology"), Theme::new("food", "Food")],
            origin: DataOrigin::Demo,
        }
    }

    #[test]
    fn test_view_change_resets_selection() {
        let mut state = TuiState::new();
        state.apply(UiEvent::ViewChanged(themes_view()), Instant::now());
        state.select_next();
        assert_eq!(state.selected, 1);

        state.apply(UiEvent::ViewChanged(voting_view(1, None)), Instant::now());
        assert_eq!(state.selected, 0);

        state.apply(UiEvent::ViewChanged(voting_view(1, Some(2))), Instant::now());
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut state = TuiState::new();
        state.select_next();
        assert_eq!(state.selected, 0);

        state.apply(UiEvent::ViewChanged(themes_view()), Instant::now());
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 1);
        state.select_previous();
        state.select_previous();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_stale_results_are_ignored() {
        let mut state = TuiState::new();
        state.apply(UiEvent::ViewChanged(voting_view(1, None)), Instant::now());

        state.apply(
            UiEvent::ResultsUpdated {
                poll_id: PollId(2),
                results: PollResults::from_pairs([("Tabs", 9)]),
                origin: DataOrigin::Remote,
            },
            Instant::now(),
        );
        let Some(ViewModel::Voting { results, .. }) = &state.view else {
            panic!("expected voting view");
        };
        assert!(results.is_empty());

        state.apply(
            UiEvent::ResultsUpdated {
                poll_id: PollId(1),
                results: PollResults::from_pairs([("Tabs", 3)]),
                origin: DataOrigin::Remote,
            },
            Instant::now(),
        );
        let Some(ViewModel::Voting { results, .. }) = &state.view else {
            panic!("expected voting view");
        };
        assert_eq!(results.count("Tabs"), 3);
    }

    #[test]
    fn test_vote_marked_only_for_current_poll() {
        let mut state = TuiState::new();
        state.apply(UiEvent::ViewChanged(voting_view(1, None)), Instant::now());
        state.apply(
            UiEvent::VoteMarked {
                poll_id: PollId(5),
                choice: 1,
            },
            Instant::now(),
        );
        assert!(matches!(
            state.view,
            Some(ViewModel::Voting {
                voted_choice: None,
                ..
            })
        ));

        state.apply(
            UiEvent::VoteMarked {
                poll_id: PollId(1),
                choice: 1,
            },
            Instant::now(),
        );
        assert!(matches!(
            state.view,
            Some(ViewModel::Voting {
                voted_choice: Some(1),
                ..
            })
        ));
    }

    #[test]
    fn test_toast_expires() {
        let mut state = TuiState::new();
        let shown = Instant::now();
        state.apply(UiEvent::Notice(Notice::success("Vote registered!")), shown);

        state.expire_toast(shown + Duration::from_millis(1999), Duration::from_secs(2));
        assert!(state.toast.is_some());

        state.expire_toast(shown + Duration::from_secs(2), Duration::from_secs(2));
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_activate_per_view() {
        let mut state = TuiState::new();
        assert!(state.activate().is_none());

        state.apply(UiEvent::ViewChanged(themes_view()), Instant::now());
        state.select_next();
        assert!(matches!(
            state.activate(),
            Some(ControllerCommand::OpenTheme(key)) if key.as_str() == "food"
        ));

        state.apply(UiEvent::ViewChanged(voting_view(7, None)), Instant::now());
        state.select_next();
        assert!(matches!(
            state.activate(),
            Some(ControllerCommand::Vote { poll_id: PollId(7), choice: 1 })
        ));
        assert!(state.vote(3).is_none());
    }

    fn type_text(state: &mut TuiState, text: &str) {
        for c in text.chars() {
            state.form_input(FormAction::Input(c), Instant::now());
        }
    }

    #[test]
    fn test_form_prefills_selected_theme() {
        let mut state = TuiState::new();
        state.apply(UiEvent::ViewChanged(themes_view()), Instant::now());
        state.select_next();
        state.open_form();
        let form = state.form.as_ref().unwrap();
        assert_eq!(form.value(crate::tui::form::FormField::Theme), "food");
    }

    #[test]
    fn test_form_submits_create_command() {
        let mut state = TuiState::new();
        state.apply(UiEvent::ViewChanged(themes_view()), Instant::now());
        state.open_form();

        type_text(&mut state, "Best editor?");
        assert!(state.form_input(FormAction::Confirm, Instant::now()).is_none());
        assert!(state.form_input(FormAction::Confirm, Instant::now()).is_none());
        type_text(&mut state, "Vim,Emacs");

        let command = state.form_input(FormAction::Confirm, Instant::now());
        assert!(matches!(
            command,
            Some(ControllerCommand::CreatePoll(poll))
                if poll.question == "Best editor?" && poll.theme.as_str() == "tech"
        ));
        assert!(state.form.is_none());
    }

    #[test]
    fn test_invalid_form_stays_open_with_error() {
        let mut state = TuiState::new();
        state.open_form();
        state.form_input(FormAction::PreviousField, Instant::now());
        type_text(&mut state, "only one");

        assert!(state.form_input(FormAction::Confirm, Instant::now()).is_none());
        assert!(state.form.is_some());
        let (notice, _) = state.toast.as_ref().unwrap();
        assert_eq!(notice.message, "Invalid poll: Question is required");

        state.form_input(FormAction::Cancel, Instant::now());
        assert!(state.form.is_none());
    }

    #[test]
    fn test_exit_quits() {
        let mut state = TuiState::new();
        state.apply(UiEvent::Exit, Instant::now());
        assert!(state.should_quit);
    }
}
