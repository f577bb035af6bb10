//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer never performs
//! I/O or spawns tasks directly.
//!
//! Cancellation follows the same split: the reducer emits `CancelTask`
//! with the stored token, the runtime calls `cancel()` on it.

use credvault_core::api::CredentialDraft;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind};

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn the login request.
    SubmitLogin {
        task: Option<TaskId>,
        username: String,
        password: String,
    },

    /// Spawn the registration request.
    SubmitRegister {
        task: Option<TaskId>,
        username: String,
        password: String,
    },

    /// Fetch the division credentials list.
    FetchCredentials { task: Option<TaskId> },

    /// Fetch the division list.
    FetchOus { task: Option<TaskId> },

    /// Fetch the role list.
    FetchRoles { task: Option<TaskId> },

    /// Submit a new division credential.
    AddCredential {
        task: Option<TaskId>,
        draft: CredentialDraft,
    },

    /// Update the caller's own password.
    UpdatePassword {
        task: Option<TaskId>,
        new_password: String,
    },

    /// Assign the caller to a division.
    AssignDivision {
        task: Option<TaskId>,
        division_id: String,
    },

    /// Change the caller's role.
    ChangeRole {
        task: Option<TaskId>,
        new_role: String,
    },

    /// Persist the current session to disk.
    SaveSession,

    /// Remove the persisted session (sign out).
    ClearSession,

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },
}
