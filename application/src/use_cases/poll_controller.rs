//! Poll Controller
//!
//! The single-instance owner of client state: navigation, the vote guard,
//! the vote debounce timer and the results poller. Runs as an actor: the
//! presentation layer sends [`ControllerCommand`]s and renders the
//! [`UiEvent`]s that come back.

use crate::config::ClientBehavior;
use crate::fallback::{DataOrigin, PollSource, VoteOutcome};
use crate::ports::poll_api::PollApi;
use crate::ports::ui_event::{UiEvent, ViewModel};
use crate::use_cases::results_poller::ResultsPoller;
use crate::voting::{Debouncer, VoteGuard};
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};
use votestream_domain::{DomainError, Navigation, NewPoll, Notice, Poll, PollId, ThemeKey, View};

/// Commands accepted by the controller
#[derive(Debug, Clone)]
pub enum ControllerCommand {
    OpenTheme(ThemeKey),
    OpenPoll(PollId),
    Back,
    /// Debounced; only the last vote in a burst is submitted
    Vote { poll_id: PollId, choice: usize },
    CreatePoll(NewPoll),
    /// Reload the current view
    Refresh,
    Shutdown,
}

/// Result of handling a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    Continue,
    Exit,
}

/// Report of a finished vote submission task
#[derive(Debug)]
pub struct VoteCompletion {
    pub poll_id: PollId,
    pub choice: usize,
    pub outcome: Result<VoteOutcome, DomainError>,
}

/// Controller owning all mutable client state
pub struct PollController<A: PollApi + 'static> {
    source: PollSource<A>,
    behavior: ClientBehavior,
    navigation: Navigation,
    guard: VoteGuard,
    debouncer: Debouncer<(PollId, usize)>,
    /// Timer handle for the open voting view
    poller: Option<ResultsPoller>,
    /// Poll shown by the voting view
    current_poll: Option<Poll>,
    /// Channel sender for UI events
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl<A: PollApi + 'static> PollController<A> {
    pub fn new(
        source: PollSource<A>,
        behavior: ClientBehavior,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            source,
            guard: VoteGuard::new(behavior.vote_cooldown),
            debouncer: Debouncer::new(behavior.vote_debounce),
            behavior,
            navigation: Navigation::new(),
            poller: None,
            current_poll: None,
            tx,
        }
    }

    fn emit(&self, event: UiEvent) {
        // A closed channel means the UI is gone; run() notices on recv
        let _ = self.tx.send(event);
    }

    fn notify(&self, notice: Notice) {
        self.emit(UiEvent::Notice(notice));
    }

    /// Tear down everything tied to the voting view.
    ///
    /// A pending debounced vote survives navigation and is submitted when its
    /// timer fires.
    fn leave_voting(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.stop();
        }
        self.current_poll = None;
    }

    // ==================== Navigation ====================

    pub async fn show_themes(&mut self) {
        let themes = self.source.themes().await;
        self.leave_voting();
        self.navigation.show_themes();
        self.emit(UiEvent::ViewChanged(ViewModel::Themes {
            themes: themes.value,
            origin: themes.origin,
        }));
    }

    pub async fn open_theme(&mut self, key: ThemeKey) {
        let Some(sourced) = self.source.theme_polls(&key).await else {
            warn!("Theme '{}' not found", key);
            self.notify(Notice::error("Theme not found"));
            return;
        };
        self.leave_voting();
        self.navigation.enter_theme(key);
        self.emit(UiEvent::ViewChanged(ViewModel::ThemePolls {
            theme: sourced.value.theme,
            polls: sourced.value.polls,
            origin: sourced.origin,
        }));
    }

    pub async fn open_poll(&mut self, id: PollId) {
        let Some(sourced) = self.source.poll(id).await else {
            warn!("Poll {} not found", id);
            self.notify(Notice::error("Poll not found"));
            return;
        };
        self.leave_voting();

        let poll = sourced.value;
        let theme = self.source.theme_for(&poll);
        let results = self.source.results(poll.id).await;
        self.navigation.enter_poll(poll.id);
        self.current_poll = Some(poll.clone());

        self.emit(UiEvent::ViewChanged(ViewModel::Voting {
            voted_choice: self.guard.voted_choice(poll.id),
            poll,
            theme,
            results: results.value,
            origin: sourced.origin,
        }));

        self.poller = Some(ResultsPoller::start(
            self.source.api().clone(),
            id,
            self.behavior.results_poll_interval,
            self.tx.clone(),
        ));
    }

    pub async fn back(&mut self) {
        let target = self.navigation.back_target();
        self.load_view(target).await;
    }

    pub async fn refresh(&mut self) {
        let current = self.navigation.current().clone();
        self.load_view(current).await;
    }

    async fn load_view(&mut self, view: View) {
        match view {
            View::Themes => self.show_themes().await,
            View::ThemePolls(key) => self.open_theme(key).await,
            View::Voting(id) => self.open_poll(id).await,
        }
    }

    // ==================== Poll creation ====================

    pub async fn create_poll(&mut self, new_poll: NewPoll) {
        match self.source.api().create_poll(&new_poll).await {
            Ok(poll) => {
                info!("Created poll {} in theme '{}'", poll.id, new_poll.theme);
                self.notify(Notice::success("Poll created successfully!"));
                if self.navigation.is_viewing_theme(&new_poll.theme) {
                    self.open_theme(new_poll.theme).await;
                } else {
                    self.show_themes().await;
                }
            }
            Err(e) => {
                warn!("Error creating poll: {}", e);
                self.notify(Notice::error("Error creating poll"));
            }
        }
    }

    // ==================== Voting ====================

    /// Debounced vote entry point
    pub fn request_vote(&mut self, poll_id: PollId, choice: usize) {
        self.debouncer.call((poll_id, choice), Instant::now());
    }

    /// Run the guards and, if admitted, spawn the submission
    fn submit_vote(&mut self, poll_id: PollId, choice: usize, votes: &mut JoinSet<VoteCompletion>) {
        if let Err(rejection) = self.guard.try_admit(poll_id, Instant::now()) {
            debug!("Vote on poll {} rejected: {:?}", poll_id, rejection);
            if let Some(notice) = rejection.notice() {
                self.notify(notice);
            }
            return;
        }

        let known = self.current_poll.clone().filter(|p| p.id == poll_id);
        let source = self.source.clone();
        votes.spawn(async move {
            let poll = match known {
                Some(poll) => Some(poll),
                None => source.poll(poll_id).await.map(|s| s.value),
            };
            let outcome = match poll {
                Some(poll) => source.vote(&poll, choice).await,
                None => Err(DomainError::UnknownPoll(poll_id.get())),
            };
            VoteCompletion {
                poll_id,
                choice,
                outcome,
            }
        });
    }

    /// Route a finished submission back into controller state
    pub fn finish_vote(&mut self, completion: VoteCompletion) {
        let VoteCompletion {
            poll_id,
            choice,
            outcome,
        } = completion;

        match outcome {
            Ok(outcome) => {
                self.guard.finish(poll_id, choice, true);
                let message = match outcome.origin {
                    DataOrigin::Remote => "Vote registered!",
                    DataOrigin::Demo => "Vote registered! (demo mode)",
                };
                self.notify(Notice::success(message));
                self.emit(UiEvent::VoteMarked { poll_id, choice });
                if self.navigation.is_voting_on(poll_id) {
                    self.emit(UiEvent::ResultsUpdated {
                        poll_id,
                        results: outcome.results.value,
                        origin: outcome.results.origin,
                    });
                }
            }
            Err(e) => {
                self.guard.finish(poll_id, choice, false);
                warn!("Vote on poll {} failed: {}", poll_id, e);
                let message = match e {
                    DomainError::UnknownPoll(_) => "Poll not found".to_string(),
                    other => other.to_string(),
                };
                self.notify(Notice::error(message));
            }
        }
    }

    // ==================== Actor loop ====================

    pub async fn handle(&mut self, command: ControllerCommand) -> CommandAction {
        match command {
            ControllerCommand::OpenTheme(key) => self.open_theme(key).await,
            ControllerCommand::OpenPoll(id) => self.open_poll(id).await,
            ControllerCommand::Back => self.back().await,
            ControllerCommand::Vote { poll_id, choice } => self.request_vote(poll_id, choice),
            ControllerCommand::CreatePoll(new_poll) => self.create_poll(new_poll).await,
            ControllerCommand::Refresh => self.refresh().await,
            ControllerCommand::Shutdown => return CommandAction::Exit,
        }
        CommandAction::Continue
    }

    /// Process commands until `Shutdown` or the sender is dropped.
    ///
    /// Loads the themes view first. All timers are cancelled on exit.
    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<ControllerCommand>) {
        self.show_themes().await;

        let mut votes: JoinSet<VoteCompletion> = JoinSet::new();

        loop {
            let deadline = self.debouncer.deadline();

            tokio::select! {
                biased;

                // Completed vote submissions
                Some(res) = votes.join_next() => {
                    match res {
                        Ok(completion) => self.finish_vote(completion),
                        Err(e) => {
                            if !e.is_cancelled() {
                                warn!("Vote task failed: {}", e);
                            }
                            self.guard.abandon();
                        }
                    }
                }

                // Debounce timer
                _ = sleep_until(deadline) => {
                    if let Some((poll_id, choice)) = self.debouncer.take_due(Instant::now()) {
                        self.submit_vote(poll_id, choice, &mut votes);
                    }
                }

                cmd = rx.recv() => {
                    let Some(cmd) = cmd else { break };
                    if self.handle(cmd).await == CommandAction::Exit {
                        break;
                    }
                }
            }
        }

        self.leave_voting();
        self.debouncer.cancel();
        votes.abort_all();
        self.emit(UiEvent::Exit);
    }
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::test_support::{MockApi, demo_store};
    use std::sync::Arc;
    use std::time::Duration;
    use votestream_domain::NoticeLevel;

    struct Harness {
        tx: mpsc::UnboundedSender<ControllerCommand>,
        rx: mpsc::UnboundedReceiver<UiEvent>,
        api: Arc<MockApi>,
    }

    impl Harness {
        fn start(api: MockApi) -> Self {
            let api = Arc::new(api);
            let (ui_tx, ui_rx) = mpsc::unbounded_channel();
            let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
            let source = PollSource::new(api.clone(), Arc::new(demo_store()));
            let controller = PollController::new(source, ClientBehavior::default(), ui_tx);
            tokio::spawn(controller.run(cmd_rx));
            Self {
                tx: cmd_tx,
                rx: ui_rx,
                api,
            }
        }

        fn send(&self, cmd: ControllerCommand) {
            self.tx.send(cmd).unwrap();
        }

        fn vote(&self, poll_id: u64, choice: usize) {
            self.send(ControllerCommand::Vote {
                poll_id: PollId(poll_id),
                choice,
            });
        }

        async fn next_view(&mut self) -> ViewModel {
            loop {
                match self.rx.recv().await.unwrap() {
                    UiEvent::ViewChanged(view) => return view,
                    _ => continue,
                }
            }
        }

        async fn next_notice(&mut self) -> Notice {
            loop {
                match self.rx.recv().await.unwrap() {
                    UiEvent::Notice(notice) => return notice,
                    _ => continue,
                }
            }
        }

        fn drain_notices(&mut self) -> Vec<Notice> {
            let mut notices = Vec::new();
            while let Ok(event) = self.rx.try_recv() {
                if let UiEvent::Notice(notice) = event {
                    notices.push(notice);
                }
            }
            notices
        }

        async fn open_poll(&mut self, id: u64) {
            self.send(ControllerCommand::OpenPoll(PollId(id)));
            assert!(matches!(self.next_view().await, ViewModel::Voting { .. }));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_flow() {
        let mut h = Harness::start(MockApi::online());
        assert!(matches!(h.next_view().await, ViewModel::Themes { .. }));

        h.send(ControllerCommand::OpenTheme(ThemeKey::new("tech")));
        match h.next_view().await {
            ViewModel::ThemePolls { theme, polls, origin } => {
                assert_eq!(theme.name, "Tech");
                assert_eq!(polls.len(), 2);
                assert_eq!(origin, DataOrigin::Remote);
            }
            other => panic!("unexpected view: {:?}", other),
        }

        h.send(ControllerCommand::OpenPoll(PollId(1)));
        match h.next_view().await {
            ViewModel::Voting {
                poll,
                theme,
                results,
                voted_choice,
                ..
            } => {
                assert_eq!(poll.id, PollId(1));
                assert_eq!(theme.unwrap().name, "Tech");
                assert_eq!(results.total(), 4);
                assert_eq!(voted_choice, None);
            }
            other => panic!("unexpected view: {:?}", other),
        }

        h.send(ControllerCommand::Back);
        assert!(matches!(h.next_view().await, ViewModel::ThemePolls { .. }));
        h.send(ControllerCommand::Back);
        assert!(matches!(h.next_view().await, ViewModel::Themes { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_offline_falls_back_to_demo() {
        let mut h = Harness::start(MockApi::offline());
        let view = h.next_view().await;
        assert_eq!(view.origin(), DataOrigin::Demo);

        h.send(ControllerCommand::OpenPoll(PollId(42)));
        let notice = h.next_notice().await;
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Poll not found");

        h.send(ControllerCommand::OpenTheme(ThemeKey::new("missing")));
        assert_eq!(h.next_notice().await.message, "Theme not found");
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_vote_then_already_voted() {
        let mut h = Harness::start(MockApi::offline());
        h.next_view().await;
        h.open_poll(2).await;

        h.vote(2, 0);
        assert_eq!(h.next_notice().await.message, "Vote registered! (demo mode)");

        tokio::time::sleep(Duration::from_secs(2)).await;
        h.vote(2, 1);
        let notice = h.next_notice().await;
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "You have already voted on this poll");
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_vote_initializes_missing_tally() {
        let mut h = Harness::start(MockApi::offline());
        h.next_view().await;
        h.open_poll(2).await;

        h.vote(2, 1);
        loop {
            if let UiEvent::ResultsUpdated { results, origin, .. } = h.rx.recv().await.unwrap() {
                assert_eq!(origin, DataOrigin::Demo);
                assert_eq!(results.iter().collect::<Vec<_>>(), vec![("Spaces", 1)]);
                break;
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_vote_within_cooldown_warns() {
        let mut h = Harness::start(MockApi::online());
        h.next_view().await;
        h.open_poll(1).await;

        h.vote(1, 0);
        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(h.next_notice().await.message, "Vote registered!");

        h.vote(2, 1);
        assert_eq!(
            h.next_notice().await.message,
            "Wait a moment before voting again"
        );
        assert_eq!(h.api.vote_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_votes_are_debounced() {
        let mut h = Harness::start(MockApi::online());
        h.next_view().await;
        h.open_poll(1).await;

        h.vote(1, 0);
        tokio::time::sleep(Duration::from_millis(100)).await;
        h.vote(1, 1);
        tokio::time::sleep(Duration::from_millis(100)).await;
        h.vote(1, 2);
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(*h.api.votes.lock().unwrap(), vec![(PollId(1), 2)]);
        assert_eq!(h.drain_notices(), vec![Notice::success("Vote registered!")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_vote_in_flight_is_silent() {
        let mut h = Harness::start(MockApi::online().with_vote_delay(Duration::from_secs(2)));
        h.next_view().await;
        h.open_poll(1).await;

        h.vote(1, 0);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        h.vote(2, 0);
        tokio::time::sleep(Duration::from_secs(3)).await;

        assert_eq!(h.api.vote_count(), 1);
        assert_eq!(h.drain_notices(), vec![Notice::success("Vote registered!")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_vote_survives_navigation() {
        let mut h = Harness::start(MockApi::online());
        h.next_view().await;
        h.open_poll(1).await;

        h.vote(1, 0);
        tokio::time::sleep(Duration::from_millis(100)).await;
        h.send(ControllerCommand::Back);
        h.next_view().await;
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(*h.api.votes.lock().unwrap(), vec![(PollId(1), 0)]);
        assert_eq!(h.drain_notices(), vec![Notice::success("Vote registered!")]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_cancelled_on_navigation() {
        let mut h = Harness::start(MockApi::online());
        h.next_view().await;
        h.open_poll(1).await;
        let after_open = h.api.results_calls.load(std::sync::atomic::Ordering::SeqCst);

        h.send(ControllerCommand::Back);
        h.next_view().await;
        tokio::time::sleep(Duration::from_secs(35)).await;
        assert_eq!(
            h.api.results_calls.load(std::sync::atomic::Ordering::SeqCst),
            after_open
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_poll_notices() {
        let new_poll = NewPoll::new("Best editor?", "tech", ["Vim", "Emacs"]).unwrap();

        let mut online = Harness::start(MockApi::online());
        online.next_view().await;
        online.send(ControllerCommand::CreatePoll(new_poll.clone()));
        assert_eq!(
            online.next_notice().await.message,
            "Poll created successfully!"
        );
        assert!(matches!(online.next_view().await, ViewModel::Themes { .. }));
        assert_eq!(online.api.created.lock().unwrap().len(), 1);

        let mut offline = Harness::start(MockApi::offline());
        offline.next_view().await;
        offline.send(ControllerCommand::CreatePoll(new_poll));
        let notice = offline.next_notice().await;
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Error creating poll");
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_poll_reloads_current_theme() {
        let mut h = Harness::start(MockApi::online());
        h.next_view().await;
        h.send(ControllerCommand::OpenTheme(ThemeKey::new("tech")));
        assert!(matches!(h.next_view().await, ViewModel::ThemePolls { .. }));

        let new_poll = NewPoll::new("Best editor?", "tech", ["Vim", "Emacs"]).unwrap();
        h.send(ControllerCommand::CreatePoll(new_poll));
        assert_eq!(h.next_notice().await.message, "Poll created successfully!");
        match h.next_view().await {
            ViewModel::ThemePolls { theme, .. } => assert_eq!(theme.key, ThemeKey::new("tech")),
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_emits_exit() {
        let mut h = Harness::start(MockApi::online());
        h.next_view().await;
        h.send(ControllerCommand::Shutdown);
        loop {
            if let UiEvent::Exit = h.rx.recv().await.unwrap() {
                break;
            }
        }
    }
}
