//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! The runtime uses an "inbox" pattern for async event collection:
//! - Handlers send `UiEvent`s directly to `inbox_tx`
//! - Runtime drains `inbox_rx` each frame to collect results
//! - This eliminates per-operation receivers and simplifies event collection

mod handlers;

use std::future::Future;
use std::io::Stdout;

use anyhow::{Context, Result};
use credvault_core::api::ApiClient;
use credvault_core::config::Config;
use credvault_core::session::Session;
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate while tasks are in flight (60fps = ~16ms per frame).
pub const FRAME_DURATION: std::time::Duration = std::time::Duration::from_millis(16);

/// Poll duration when idle (no requests running, no pending timers).
/// Longer timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: std::time::Duration = std::time::Duration::from_millis(100);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Owns the terminal, the state, and the API client. Runs the event loop
/// and executes effects. Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: ApiClient,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    last_tick: std::time::Instant,
    last_terminal_event: std::time::Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    pub fn new(config: Config, session: Session) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        let base_url = config.resolve_base_url()?;
        let api = ApiClient::new(base_url);

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let state = AppState::new(config, session);
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        let now = std::time::Instant::now();
        Ok(Self {
            terminal,
            state,
            api,
            inbox_tx,
            inbox_rx,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        // A resumed session lands on the dashboard; start its fetches.
        if self.state.tui.session.is_authenticated() {
            let effects = update::home_refresh_effects(&mut self.state.tui);
            self.execute_effects(effects);
        }

        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Track terminal activity for fast tick mode
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = std::time::Instant::now();
                }

                // Only Tick triggers render - this caps frame rate at tick cadence
                if matches!(&event, UiEvent::Tick) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects events from the terminal and the inbox, plus the Tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling while requests are in flight or the user is typing,
        // slow polling otherwise to save CPU.
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = self.state.tui.tasks.is_any_running() || recent_terminal_activity;
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Block until the next tick is due unless events are already queued
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            std::time::Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(std::time::Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = std::time::Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, cancelable: bool, f: F)
    where
        F: FnOnce(Option<CancellationToken>) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = cancelable.then(CancellationToken::new);
        let started = TaskStarted {
            id,
            cancel: cancel.clone(),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// Token for authenticated operations. Effects that need one are
    /// ignored when it is missing; the route guard keeps that from
    /// happening in practice.
    fn auth_token(&self) -> Option<String> {
        self.state.tui.session.token.clone()
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }

            UiEffect::SaveSession => {
                // Errors are silently ignored - the in-memory session is
                // already authoritative for this run
                let _ = self.state.tui.session.save();
            }
            UiEffect::ClearSession => {
                let _ = Session::clear();
            }

            UiEffect::CancelTask { token, .. } => {
                if let Some(cancel) = token {
                    cancel.cancel();
                }
            }

            UiEffect::SubmitLogin {
                task,
                username,
                password,
            } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.api.clone();
                self.spawn_task(TaskKind::Login, task, false, move |_| {
                    handlers::login(client, username, password)
                });
            }
            UiEffect::SubmitRegister {
                task,
                username,
                password,
            } => {
                let Some(task) = task else {
                    return;
                };
                let client = self.api.clone();
                self.spawn_task(TaskKind::Register, task, false, move |_| {
                    handlers::register(client, username, password)
                });
            }

            UiEffect::FetchCredentials { task } => {
                let Some(task) = task else {
                    return;
                };
                let Some(token) = self.auth_token() else {
                    return;
                };
                let client = self.api.clone();
                self.spawn_task(TaskKind::FetchCredentials, task, true, move |cancel| {
                    handlers::fetch_credentials(client, token, cancel)
                });
            }
            UiEffect::FetchOus { task } => {
                let Some(task) = task else {
                    return;
                };
                let Some(token) = self.auth_token() else {
                    return;
                };
                let client = self.api.clone();
                self.spawn_task(TaskKind::FetchOus, task, true, move |cancel| {
                    handlers::fetch_ous(client, token, cancel)
                });
            }
            UiEffect::FetchRoles { task } => {
                let Some(task) = task else {
                    return;
                };
                let Some(token) = self.auth_token() else {
                    return;
                };
                let client = self.api.clone();
                self.spawn_task(TaskKind::FetchRoles, task, true, move |cancel| {
                    handlers::fetch_roles(client, token, cancel)
                });
            }

            UiEffect::AddCredential { task, draft } => {
                let Some(task) = task else {
                    return;
                };
                let Some(token) = self.auth_token() else {
                    return;
                };
                let client = self.api.clone();
                self.spawn_task(TaskKind::AddCredential, task, false, move |_| {
                    handlers::add_credential(client, token, draft)
                });
            }
            UiEffect::UpdatePassword { task, new_password } => {
                let Some(task) = task else {
                    return;
                };
                let Some(token) = self.auth_token() else {
                    return;
                };
                let client = self.api.clone();
                self.spawn_task(TaskKind::UpdatePassword, task, false, move |_| {
                    handlers::update_password(client, token, new_password)
                });
            }
            UiEffect::AssignDivision { task, division_id } => {
                let Some(task) = task else {
                    return;
                };
                let Some(token) = self.auth_token() else {
                    return;
                };
                let client = self.api.clone();
                self.spawn_task(TaskKind::AssignDivision, task, false, move |_| {
                    handlers::assign_division(client, token, division_id)
                });
            }
            UiEffect::ChangeRole { task, new_role } => {
                let Some(task) = task else {
                    return;
                };
                let Some(token) = self.auth_token() else {
                    return;
                };
                let user_id = self.state.tui.session.user_id.clone();
                let client = self.api.clone();
                self.spawn_task(TaskKind::ChangeRole, task, false, move |_| {
                    handlers::change_role(client, token, user_id, new_role)
                });
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
