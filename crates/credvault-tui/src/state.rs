//! Application state composition.
//!
//! `AppState` wraps `TuiState`, which owns the active screen, the session,
//! notices, and async task bookkeeping. All mutation happens in the reducer;
//! the runtime only reads state for rendering and effect execution.

use credvault_core::config::Config;
use credvault_core::session::Session;

use crate::common::{NoticeState, TaskSeq, Tasks};
use crate::screens::{HomeScreen, LoginScreen, Screen};

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
}

impl AppState {
    /// Creates the initial state. A persisted token lands directly on the
    /// dashboard; anything else starts at the sign-in form.
    pub fn new(config: Config, session: Session) -> Self {
        let screen = if session.is_authenticated() {
            Screen::Home(HomeScreen::new())
        } else {
            Screen::Login(LoginScreen::new())
        };
        Self {
            tui: TuiState {
                should_quit: false,
                config,
                session,
                screen,
                notice: NoticeState::default(),
                task_seq: TaskSeq::default(),
                tasks: Tasks::default(),
                spinner_frame: 0,
            },
        }
    }
}

/// TUI application state.
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Resolved configuration (server base URL).
    pub config: Config,
    /// Current session; `token: Some` means authenticated.
    pub session: Session,
    /// The mounted screen.
    pub screen: Screen,
    /// Transient status notice shown in the footer.
    pub notice: NoticeState,
    /// Async task id generator.
    pub task_seq: TaskSeq,
    /// Task lifecycle state per operation kind.
    pub tasks: Tasks,
    /// Advances on Tick while tasks run; drives the busy indicator.
    pub spinner_frame: u8,
}
