use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Login,
    Register,
    FetchCredentials,
    FetchOus,
    FetchRoles,
    AddCredential,
    UpdatePassword,
    AssignDivision,
    ChangeRole,
}

impl TaskKind {
    pub const ALL: [TaskKind; 9] = [
        TaskKind::Login,
        TaskKind::Register,
        TaskKind::FetchCredentials,
        TaskKind::FetchOus,
        TaskKind::FetchRoles,
        TaskKind::AddCredential,
        TaskKind::UpdatePassword,
        TaskKind::AssignDivision,
        TaskKind::ChangeRole,
    ];
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Task lifecycle state (stored in AppState, mutated only by reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    /// Clears the slot if `id` is the active task. Returns false for stale
    /// completions, which the reducer drops without touching state.
    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.cancel = None;
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub login: TaskState,
    pub register: TaskState,
    pub fetch_credentials: TaskState,
    pub fetch_ous: TaskState,
    pub fetch_roles: TaskState,
    pub add_credential: TaskState,
    pub update_password: TaskState,
    pub assign_division: TaskState,
    pub change_role: TaskState,
}

impl Tasks {
    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::Login => &mut self.login,
            TaskKind::Register => &mut self.register,
            TaskKind::FetchCredentials => &mut self.fetch_credentials,
            TaskKind::FetchOus => &mut self.fetch_ous,
            TaskKind::FetchRoles => &mut self.fetch_roles,
            TaskKind::AddCredential => &mut self.add_credential,
            TaskKind::UpdatePassword => &mut self.update_password,
            TaskKind::AssignDivision => &mut self.assign_division,
            TaskKind::ChangeRole => &mut self.change_role,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.login.is_running()
            || self.register.is_running()
            || self.fetch_credentials.is_running()
            || self.fetch_ous.is_running()
            || self.fetch_roles.is_running()
            || self.add_credential.is_running()
            || self.assign_division.is_running()
            || self.update_password.is_running()
            || self.change_role.is_running()
    }
}
