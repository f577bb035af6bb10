//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! Task completions are routed through `finish_if_active`: a completion
//! whose id no longer matches the active task for its kind is dropped
//! whole, so results from a screen the user already left never touch
//! state.

use credvault_core::api::ApiError;
use credvault_core::session::Session;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::screens::{HomeScreen, LoginScreen, RegisterScreen, Screen, home, login, register};
use crate::state::{AppState, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            if app.tui.tasks.is_any_running() {
                app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            }
            app.tui.notice.check_timeout();
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tui.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tui.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                // Stale result from a superseded or cancelled task.
                vec![]
            }
        }
        UiEvent::LoginResult(result) => handle_login_result(app, result),
        UiEvent::RegisterResult(result) => handle_register_result(app, result),
        UiEvent::CredentialsLoaded(result) => {
            if let Screen::Home(home) = &mut app.tui.screen {
                home.credentials.resolve(result.map_err(|e| e.to_string()));
            }
            vec![]
        }
        UiEvent::OusLoaded(result) => {
            if let Screen::Home(home) = &mut app.tui.screen {
                home.ous.resolve(result.map_err(|e| e.to_string()));
                home.clamp_selections();
            }
            vec![]
        }
        UiEvent::RolesLoaded(result) => {
            if let Screen::Home(home) = &mut app.tui.screen {
                home.roles.resolve(result.map_err(|e| e.to_string()));
                home.clamp_selections();
            }
            vec![]
        }
        UiEvent::CredentialAdded(result) => handle_credential_added(app, result),
        UiEvent::PasswordUpdated(result) => match result {
            Ok(()) => {
                if let Screen::Home(home) = &mut app.tui.screen {
                    home.new_password.clear();
                }
                app.tui.notice.success("Password updated");
                refetch_credentials(&mut app.tui)
            }
            Err(error) => {
                app.tui.notice.error(error.to_string());
                vec![]
            }
        },
        UiEvent::DivisionAssigned(result) => match result {
            Ok(()) => {
                app.tui.notice.success("Division assigned");
                refetch_credentials(&mut app.tui)
            }
            Err(error) => {
                app.tui.notice.error(error.to_string());
                vec![]
            }
        },
        UiEvent::RoleChanged(result) => match result {
            Ok(()) => {
                app.tui.notice.success("Role changed");
                refetch_credentials(&mut app.tui)
            }
            Err(error) => {
                app.tui.notice.error(error.to_string());
                vec![]
            }
        },
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    let Event::Key(key) = event else {
        return vec![];
    };
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    // Global shortcuts, regardless of screen
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return vec![UiEffect::Quit];
    }

    handle_key(app, key)
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match &mut app.tui.screen {
        Screen::Login(screen) => match login::handle_key(screen, key) {
            login::LoginAction::None => vec![],
            login::LoginAction::Quit => vec![UiEffect::Quit],
            login::LoginAction::SwitchToRegister => {
                app.tui.screen = Screen::Register(RegisterScreen::new());
                vec![]
            }
            login::LoginAction::Submit { username, password } => {
                screen.submitting = true;
                let task = app.tui.task_seq.next_id();
                vec![UiEffect::SubmitLogin {
                    task: Some(task),
                    username,
                    password,
                }]
            }
        },
        Screen::Register(screen) => match register::handle_key(screen, key) {
            register::RegisterAction::None => vec![],
            register::RegisterAction::SwitchToLogin => {
                app.tui.screen = Screen::Login(LoginScreen::new());
                vec![]
            }
            register::RegisterAction::Submit { username, password } => {
                screen.submitting = true;
                let task = app.tui.task_seq.next_id();
                vec![UiEffect::SubmitRegister {
                    task: Some(task),
                    username,
                    password,
                }]
            }
        },
        Screen::Home(screen) => match home::handle_key(screen, key) {
            home::HomeAction::None => vec![],
            home::HomeAction::Invalid(message) => {
                app.tui.notice.error(message);
                vec![]
            }
            home::HomeAction::Refresh => home_refresh_effects(&mut app.tui),
            home::HomeAction::Logout => logout(&mut app.tui),
            home::HomeAction::AddCredential { draft } => {
                let task = app.tui.task_seq.next_id();
                vec![UiEffect::AddCredential {
                    task: Some(task),
                    draft,
                }]
            }
            home::HomeAction::UpdatePassword { new_password } => {
                let task = app.tui.task_seq.next_id();
                vec![UiEffect::UpdatePassword {
                    task: Some(task),
                    new_password,
                }]
            }
            home::HomeAction::AssignDivision { division_id } => {
                let task = app.tui.task_seq.next_id();
                vec![UiEffect::AssignDivision {
                    task: Some(task),
                    division_id,
                }]
            }
            home::HomeAction::ChangeRole { new_role } => {
                let task = app.tui.task_seq.next_id();
                vec![UiEffect::ChangeRole {
                    task: Some(task),
                    new_role,
                }]
            }
        },
    }
}

fn handle_login_result(app: &mut AppState, result: Result<String, ApiError>) -> Vec<UiEffect> {
    match result {
        Ok(token) => {
            app.tui.session.token = Some(token);
            app.tui.notice.success("Signed in");
            let mut effects = vec![UiEffect::SaveSession];
            effects.extend(goto_home(&mut app.tui));
            effects
        }
        Err(error) => {
            // Keep the username for another attempt, drop the password.
            if let Screen::Login(screen) = &mut app.tui.screen {
                screen.submitting = false;
                screen.password.clear();
                screen.error = Some(error.to_string());
            }
            vec![]
        }
    }
}

fn handle_register_result(app: &mut AppState, result: Result<String, ApiError>) -> Vec<UiEffect> {
    match result {
        Ok(message) => {
            // Stay on the form; the user signs in when they choose to.
            if let Screen::Register(screen) = &mut app.tui.screen {
                screen.submitting = false;
            }
            app.tui.notice.success(message);
            vec![]
        }
        Err(error) => {
            if let Screen::Register(screen) = &mut app.tui.screen {
                screen.submitting = false;
                screen.error = Some(error.to_string());
            }
            vec![]
        }
    }
}

fn handle_credential_added(
    app: &mut AppState,
    result: Result<credvault_core::api::Credential, ApiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(credential) => {
            // Append locally; the server already confirmed the record.
            if let Screen::Home(home) = &mut app.tui.screen {
                home.credentials.items.push(credential);
                home.clear_add_form();
            }
            app.tui.notice.success("Credential added");
        }
        Err(error) => {
            let message = match error.status_code() {
                Some(404) => "Division not found".to_string(),
                Some(403) => "Not authorized to manage this division".to_string(),
                _ => error.to_string(),
            };
            app.tui.notice.error(message);
        }
    }
    vec![]
}

/// Navigates to the dashboard, falling back to the sign-in form when no
/// token is present.
pub(crate) fn goto_home(tui: &mut TuiState) -> Vec<UiEffect> {
    if !tui.session.is_authenticated() {
        tui.screen = Screen::Login(LoginScreen::new());
        tui.notice.error("Sign in to continue");
        return vec![];
    }
    tui.screen = Screen::Home(HomeScreen::new());
    home_refresh_effects(tui)
}

/// Kicks off the three independent dashboard fetches.
pub fn home_refresh_effects(tui: &mut TuiState) -> Vec<UiEffect> {
    vec![
        UiEffect::FetchCredentials {
            task: Some(tui.task_seq.next_id()),
        },
        UiEffect::FetchOus {
            task: Some(tui.task_seq.next_id()),
        },
        UiEffect::FetchRoles {
            task: Some(tui.task_seq.next_id()),
        },
    ]
}

fn refetch_credentials(tui: &mut TuiState) -> Vec<UiEffect> {
    vec![UiEffect::FetchCredentials {
        task: Some(tui.task_seq.next_id()),
    }]
}

fn logout(tui: &mut TuiState) -> Vec<UiEffect> {
    let mut effects = vec![UiEffect::ClearSession];

    // Cancel whatever is still in flight; cleared slots also guarantee
    // late completions are dropped as stale.
    for kind in TaskKind::ALL {
        let state = tui.tasks.state_mut(kind);
        if state.is_running() {
            effects.push(UiEffect::CancelTask {
                kind,
                token: state.cancel.clone(),
            });
            state.clear();
        }
    }

    tui.session = Session::default();
    tui.screen = Screen::Login(LoginScreen::new());
    tui.notice.info("Signed out");
    effects
}

#[cfg(test)]
mod tests {
    use credvault_core::api::{ApiError, Credential, OrgUnit};
    use credvault_core::config::Config;
    use crossterm::event::{Event, KeyEvent};

    use super::*;
    use crate::common::{NoticeKind, TaskCompleted, TaskId, TaskStarted};

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl(c: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(c),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_str(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key(KeyCode::Char(c)));
        }
    }

    fn login_app() -> AppState {
        AppState::new(Config::default(), Session::default())
    }

    fn home_app() -> AppState {
        AppState::new(
            Config::default(),
            Session {
                token: Some("tok".to_string()),
                user_id: None,
            },
        )
    }

    fn started(kind: TaskKind, id: u64) -> UiEvent {
        UiEvent::TaskStarted {
            kind,
            started: TaskStarted {
                id: TaskId(id),
                cancel: None,
            },
        }
    }

    fn completed(kind: TaskKind, id: u64, inner: UiEvent) -> UiEvent {
        UiEvent::TaskCompleted {
            kind,
            completed: TaskCompleted {
                id: TaskId(id),
                result: Box::new(inner),
            },
        }
    }

    fn credential(system: &str) -> Credential {
        Credential {
            system: system.to_string(),
            login: "svc".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_typing_fills_login_fields() {
        let mut app = login_app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");

        let Screen::Login(screen) = &app.tui.screen else {
            panic!("expected login screen");
        };
        assert_eq!(screen.username.value(), "alice");
        assert_eq!(screen.password.value(), "secret");
    }

    #[test]
    fn test_login_submit_emits_task() {
        let mut app = login_app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "secret");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::SubmitLogin {
                task: Some(_),
                username,
                password,
            }] if username == "alice" && password == "secret"
        ));
        let Screen::Login(screen) = &app.tui.screen else {
            panic!("expected login screen");
        };
        assert!(screen.submitting);
    }

    #[test]
    fn test_login_submit_requires_both_fields() {
        let mut app = login_app();
        type_str(&mut app, "alice");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(effects.is_empty());
        let Screen::Login(screen) = &app.tui.screen else {
            panic!("expected login screen");
        };
        assert!(screen.error.is_some());
    }

    #[test]
    fn test_login_success_navigates_home_and_fetches() {
        let mut app = login_app();
        let effects = update(&mut app, UiEvent::LoginResult(Ok("tok".to_string())));

        assert!(app.tui.session.is_authenticated());
        assert!(matches!(app.tui.screen, Screen::Home(_)));
        assert!(matches!(effects[0], UiEffect::SaveSession));
        assert!(effects
            .iter()
            .any(|e| matches!(e, UiEffect::FetchCredentials { task: Some(_) })));
        assert!(effects
            .iter()
            .any(|e| matches!(e, UiEffect::FetchOus { task: Some(_) })));
        assert!(effects
            .iter()
            .any(|e| matches!(e, UiEffect::FetchRoles { task: Some(_) })));
    }

    #[test]
    fn test_login_failure_retains_username_clears_password() {
        let mut app = login_app();
        type_str(&mut app, "alice");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "wrong");
        update(&mut app, key(KeyCode::Enter));

        let error = ApiError::status(401, r#"{"message":"Invalid credentials"}"#);
        update(&mut app, UiEvent::LoginResult(Err(error)));

        let Screen::Login(screen) = &app.tui.screen else {
            panic!("expected login screen");
        };
        assert_eq!(screen.username.value(), "alice");
        assert!(screen.password.is_empty());
        assert!(!screen.submitting);
        assert_eq!(screen.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_register_success_stays_on_form_with_notice() {
        let mut app = login_app();
        update(&mut app, ctrl('r'));
        assert!(matches!(app.tui.screen, Screen::Register(_)));

        type_str(&mut app, "bob");
        update(&mut app, UiEvent::RegisterResult(Ok("User created".to_string())));

        // No auto-navigation; fields stay put for the user to act on.
        let Screen::Register(screen) = &app.tui.screen else {
            panic!("expected register screen");
        };
        assert_eq!(screen.username.value(), "bob");
        assert!(!screen.submitting);
        let notice = app.tui.notice.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.text, "User created");
    }

    #[test]
    fn test_register_password_mismatch_blocks_submit() {
        let mut app = login_app();
        update(&mut app, ctrl('r'));
        type_str(&mut app, "bob");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "one");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "two");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(effects.is_empty());
        let Screen::Register(screen) = &app.tui.screen else {
            panic!("expected register screen");
        };
        assert_eq!(screen.error.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn test_list_errors_are_independent() {
        let mut app = home_app();
        update(
            &mut app,
            UiEvent::CredentialsLoaded(Err(ApiError::network("connection refused"))),
        );
        update(
            &mut app,
            UiEvent::OusLoaded(Ok(vec![OrgUnit {
                id: "ou-1".to_string(),
                name: "Finance".to_string(),
            }])),
        );

        let Screen::Home(screen) = &app.tui.screen else {
            panic!("expected home screen");
        };
        assert!(screen.credentials.error.is_some());
        assert!(screen.credentials.loaded);
        assert!(screen.ous.error.is_none());
        assert_eq!(screen.ous.items.len(), 1);
        assert!(!screen.roles.loaded);
    }

    #[test]
    fn test_add_credential_appends_without_refetch() {
        let mut app = home_app();
        update(&mut app, UiEvent::CredentialsLoaded(Ok(vec![credential("AD")])));

        let effects = update(&mut app, UiEvent::CredentialAdded(Ok(credential("VPN"))));

        assert!(effects.is_empty());
        let Screen::Home(screen) = &app.tui.screen else {
            panic!("expected home screen");
        };
        assert_eq!(screen.credentials.items.len(), 2);
        assert_eq!(screen.credentials.items[1].system, "VPN");
    }

    #[test]
    fn test_add_credential_submits_typed_division_id() {
        // The division id is typed directly, so a failed OU fetch does not
        // block the form.
        let mut app = home_app();
        type_str(&mut app, "AD");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "svc");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "pw");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "div-7");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::AddCredential {
                task: Some(_),
                draft,
            }] if draft.system == "AD" && draft.division_id == "div-7"
        ));
    }

    #[test]
    fn test_add_credential_requires_division_id() {
        let mut app = home_app();
        type_str(&mut app, "AD");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "svc");
        update(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "pw");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(effects.is_empty());
        let notice = app.tui.notice.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_assign_division_typed_id_wins_over_selection() {
        let mut app = home_app();
        update(
            &mut app,
            UiEvent::OusLoaded(Ok(vec![OrgUnit {
                id: "ou-1".to_string(),
                name: "Finance".to_string(),
            }])),
        );
        {
            let Screen::Home(screen) = &mut app.tui.screen else {
                panic!("expected home screen");
            };
            screen.focus = home::HomeFocus::AssignDivisionId;
        }
        type_str(&mut app, "div-9");
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::AssignDivision {
                task: Some(_),
                division_id,
            }] if division_id == "div-9"
        ));
    }

    #[test]
    fn test_assign_division_uses_selection_without_typed_id() {
        let mut app = home_app();
        update(
            &mut app,
            UiEvent::OusLoaded(Ok(vec![OrgUnit {
                id: "ou-1".to_string(),
                name: "Finance".to_string(),
            }])),
        );
        {
            let Screen::Home(screen) = &mut app.tui.screen else {
                panic!("expected home screen");
            };
            screen.focus = home::HomeFocus::AssignDivision;
        }
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(matches!(
            effects.as_slice(),
            [UiEffect::AssignDivision {
                task: Some(_),
                division_id,
            }] if division_id == "ou-1"
        ));
    }

    #[test]
    fn test_add_credential_unknown_division_notice() {
        let mut app = home_app();
        let error = ApiError::status(404, r#"{"message":"no such division"}"#);
        update(&mut app, UiEvent::CredentialAdded(Err(error)));

        let notice = app.tui.notice.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.text, "Division not found");
    }

    #[test]
    fn test_add_credential_forbidden_division_notice() {
        let mut app = home_app();
        let error = ApiError::status(403, "{}");
        update(&mut app, UiEvent::CredentialAdded(Err(error)));

        let notice = app.tui.notice.current().unwrap();
        assert_eq!(notice.text, "Not authorized to manage this division");
    }

    #[test]
    fn test_password_update_triggers_refetch() {
        let mut app = home_app();
        let effects = update(&mut app, UiEvent::PasswordUpdated(Ok(())));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::FetchCredentials { task: Some(_) }]
        ));
    }

    #[test]
    fn test_division_assignment_triggers_refetch() {
        let mut app = home_app();
        let effects = update(&mut app, UiEvent::DivisionAssigned(Ok(())));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::FetchCredentials { task: Some(_) }]
        ));
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = home_app();
        update(&mut app, started(TaskKind::FetchCredentials, 0));
        update(&mut app, ctrl('l'));
        assert!(matches!(app.tui.screen, Screen::Login(_)));

        // The fetch finishes after sign-out; its payload must not apply.
        let effects = update(
            &mut app,
            completed(
                TaskKind::FetchCredentials,
                0,
                UiEvent::CredentialsLoaded(Ok(vec![credential("AD")])),
            ),
        );
        assert!(effects.is_empty());
        assert!(matches!(app.tui.screen, Screen::Login(_)));
    }

    #[test]
    fn test_superseded_fetch_is_dropped() {
        let mut app = home_app();
        update(&mut app, started(TaskKind::FetchCredentials, 0));
        update(&mut app, started(TaskKind::FetchCredentials, 1));

        update(
            &mut app,
            completed(
                TaskKind::FetchCredentials,
                0,
                UiEvent::CredentialsLoaded(Ok(vec![credential("OLD")])),
            ),
        );
        update(
            &mut app,
            completed(
                TaskKind::FetchCredentials,
                1,
                UiEvent::CredentialsLoaded(Ok(vec![credential("NEW")])),
            ),
        );

        let Screen::Home(screen) = &app.tui.screen else {
            panic!("expected home screen");
        };
        assert_eq!(screen.credentials.items.len(), 1);
        assert_eq!(screen.credentials.items[0].system, "NEW");
    }

    #[test]
    fn test_logout_clears_session_and_cancels_tasks() {
        let mut app = home_app();
        update(&mut app, started(TaskKind::FetchCredentials, 0));
        let effects = update(&mut app, ctrl('l'));

        assert!(matches!(effects[0], UiEffect::ClearSession));
        assert!(effects.iter().any(|e| matches!(
            e,
            UiEffect::CancelTask {
                kind: TaskKind::FetchCredentials,
                ..
            }
        )));
        assert!(!app.tui.session.is_authenticated());
        assert!(!app.tui.tasks.is_any_running());
        assert!(matches!(app.tui.screen, Screen::Login(_)));
    }

    #[test]
    fn test_reveal_toggle() {
        let mut app = home_app();
        update(&mut app, ctrl('p'));
        let Screen::Home(screen) = &app.tui.screen else {
            panic!("expected home screen");
        };
        assert!(screen.reveal_passwords);

        update(&mut app, ctrl('p'));
        let Screen::Home(screen) = &app.tui.screen else {
            panic!("expected home screen");
        };
        assert!(!screen.reveal_passwords);
    }

    #[test]
    fn test_home_without_token_falls_back_to_login() {
        let mut app = login_app();
        let effects = goto_home(&mut app.tui);

        assert!(effects.is_empty());
        assert!(matches!(app.tui.screen, Screen::Login(_)));
        let notice = app.tui.notice.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let mut app = login_app();
        let effects = update(&mut app, ctrl('c'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));

        let mut app = home_app();
        let effects = update(&mut app, ctrl('c'));
        assert!(matches!(effects.as_slice(), [UiEffect::Quit]));
    }

    #[test]
    fn test_ou_refresh_clamps_selection() {
        let mut app = home_app();
        update(
            &mut app,
            UiEvent::OusLoaded(Ok(vec![
                OrgUnit {
                    id: "ou-1".to_string(),
                    name: "Finance".to_string(),
                },
                OrgUnit {
                    id: "ou-2".to_string(),
                    name: "Engineering".to_string(),
                },
            ])),
        );

        // Move the assignment selector to the second entry, then shrink the list.
        {
            let Screen::Home(screen) = &mut app.tui.screen else {
                panic!("expected home screen");
            };
            screen.focus = home::HomeFocus::AssignDivision;
        }
        update(&mut app, key(KeyCode::Right));

        update(
            &mut app,
            UiEvent::OusLoaded(Ok(vec![OrgUnit {
                id: "ou-1".to_string(),
                name: "Finance".to_string(),
            }])),
        );
        let Screen::Home(screen) = &app.tui.screen else {
            panic!("expected home screen");
        };
        assert_eq!(screen.assign_division, 0);
    }
}
