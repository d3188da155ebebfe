//! TUI application: main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 PollController::run (tokio::spawn)
//!   ├─ crossterm EventStream              ├─ cmd_rx.recv()
//!   ├─ ui_rx (UiEvent from controller)    ├─ vote debounce timer
//!   └─ tick_interval (toast expiry)       └─ vote tasks / results poller
//!        └── cmd_tx ──────────────────>──┘
//! ```

use super::keys::{KeyAction, map_form_key, map_key};
use super::state::TuiState;
use super::widgets::{
    MainLayout, body::BodyWidget, create_form::CreateFormWidget, header::HeaderWidget,
    status_bar::StatusBarWidget,
};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, warn};
use votestream_application::{
    ClientBehavior, ControllerCommand, PollApi, PollController, PollSource, UiEvent,
};

/// How long shutdown waits for the controller to cancel its timers
const SHUTDOWN_GRACE: Duration = Duration::from_secs(1);

/// Main TUI application
pub struct TuiApp {
    cmd_tx: mpsc::UnboundedSender<ControllerCommand>,
    ui_rx: mpsc::UnboundedReceiver<UiEvent>,
    toast_duration: Duration,
    controller_handle: Option<tokio::task::JoinHandle<()>>,
}

impl TuiApp {
    /// Create a new TUI application wired to a freshly spawned controller
    pub fn new<A: PollApi + 'static>(source: PollSource<A>, behavior: ClientBehavior) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<ControllerCommand>();
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();

        let controller = PollController::new(source, behavior, ui_tx);
        let controller_handle = tokio::spawn(controller.run(cmd_rx));

        Self {
            cmd_tx,
            ui_rx,
            toast_duration: behavior.toast_duration,
            controller_handle: Some(controller_handle),
        }
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal even when the loop failed
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        self.shutdown().await;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = TuiState::new();
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| Self::render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                term_event = event_stream.next() => {
                    match term_event {
                        Some(Ok(Event::Key(key))) if state.form.is_some() => {
                            let command = state.form_input(map_form_key(key), Instant::now());
                            self.send(command);
                        }
                        Some(Ok(Event::Key(key))) => {
                            let action = map_key(key, state.is_voting());
                            self.handle_key(&mut state, action);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e),
                        None => break,
                    }
                }

                // UiEvents from the controller
                ui_event = self.ui_rx.recv() => {
                    match ui_event {
                        Some(event) => state.apply(event, Instant::now()),
                        None => {
                            warn!("Controller stopped unexpectedly");
                            break;
                        }
                    }
                }

                // Tick for toast expiry
                _ = tick.tick() => {
                    state.expire_toast(Instant::now(), self.toast_duration);
                }
            }
        }

        Ok(())
    }

    fn handle_key(&self, state: &mut TuiState, action: KeyAction) {
        let command = match action {
            KeyAction::Up => {
                state.select_previous();
                None
            }
            KeyAction::Down => {
                state.select_next();
                None
            }
            KeyAction::Activate => state.activate(),
            KeyAction::Vote(choice) => {
                state.selected = choice.min(state.item_count().saturating_sub(1));
                state.vote(choice)
            }
            KeyAction::Back => Some(ControllerCommand::Back),
            KeyAction::Refresh => Some(ControllerCommand::Refresh),
            KeyAction::NewPoll => {
                state.open_form();
                None
            }
            KeyAction::Quit => {
                state.should_quit = true;
                None
            }
            KeyAction::Ignore => None,
        };
        self.send(command);
    }

    fn send(&self, command: Option<ControllerCommand>) {
        if let Some(command) = command {
            debug!("Sending {:?}", command);
            let _ = self.cmd_tx.send(command);
        }
    }

    /// Stop the controller and wait briefly for its timers to be cancelled
    async fn shutdown(&mut self) {
        let _ = self.cmd_tx.send(ControllerCommand::Shutdown);
        if let Some(handle) = self.controller_handle.take()
            && tokio::time::timeout(SHUTDOWN_GRACE, handle).await.is_err()
        {
            warn!("Controller did not stop within {:?}", SHUTDOWN_GRACE);
        }
    }

    /// Render all widgets
    fn render(frame: &mut ratatui::Frame, state: &TuiState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(BodyWidget::new(state), layout.body);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        if let Some(form) = &state.form {
            let area = MainLayout::centered_overlay(60, 60, layout.body);
            frame.render_widget(CreateFormWidget::new(form), area);
        }
    }
}
