//! UI event types.
//!
//! Events are inputs to the reducer: terminal input, the frame tick, task
//! lifecycle notifications, and operation results arriving from handlers
//! via the inbox channel. Results carry the structured `ApiError` so the
//! reducer can classify failures by kind and status code.

use credvault_core::api::{ApiError, Credential, OrgUnit};

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; drives notice expiry and the busy spinner.
    Tick,
    /// Raw terminal input.
    Terminal(crossterm::event::Event),
    /// An async task started.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// An async task finished; `result` is the inner event to apply if the
    /// task is still the active one for its kind.
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },

    /// Login finished; Ok carries the bearer token.
    LoginResult(Result<String, ApiError>),
    /// Registration finished; Ok carries the server's confirmation message.
    RegisterResult(Result<String, ApiError>),
    /// Credentials list fetch finished.
    CredentialsLoaded(Result<Vec<Credential>, ApiError>),
    /// Division list fetch finished.
    OusLoaded(Result<Vec<OrgUnit>, ApiError>),
    /// Role list fetch finished.
    RolesLoaded(Result<Vec<String>, ApiError>),
    /// Add-credential finished; Ok carries the stored record to append.
    CredentialAdded(Result<Credential, ApiError>),
    /// Own-password update finished.
    PasswordUpdated(Result<(), ApiError>),
    /// Division assignment finished.
    DivisionAssigned(Result<(), ApiError>),
    /// Role change finished.
    RoleChanged(Result<(), ApiError>),
}
