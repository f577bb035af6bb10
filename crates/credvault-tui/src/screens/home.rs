//! Post-login dashboard: credential table, division and role lists, and
//! the four mutation forms.

use credvault_core::api::{Credential, CredentialDraft, OrgUnit};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table};

use crate::common::TextField;
use crate::screens::{form_field_line, select_field_line, set_form_cursor};

/// One independently fetched list. A failed fetch fills `error` without
/// touching the other slots; previously loaded items stay visible.
#[derive(Debug, Clone)]
pub struct ListSlot<T> {
    pub items: Vec<T>,
    pub error: Option<String>,
    pub loaded: bool,
}

impl<T> Default for ListSlot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            loaded: false,
        }
    }
}

impl<T> ListSlot<T> {
    pub fn resolve(&mut self, result: Result<Vec<T>, String>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
        self.loaded = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    AddSystem,
    AddLogin,
    AddPassword,
    AddDivisionId,
    NewPassword,
    AssignDivision,
    AssignDivisionId,
    ChangeRole,
}

impl HomeFocus {
    fn next(self) -> Self {
        match self {
            HomeFocus::AddSystem => HomeFocus::AddLogin,
            HomeFocus::AddLogin => HomeFocus::AddPassword,
            HomeFocus::AddPassword => HomeFocus::AddDivisionId,
            HomeFocus::AddDivisionId => HomeFocus::NewPassword,
            HomeFocus::NewPassword => HomeFocus::AssignDivision,
            HomeFocus::AssignDivision => HomeFocus::AssignDivisionId,
            HomeFocus::AssignDivisionId => HomeFocus::ChangeRole,
            HomeFocus::ChangeRole => HomeFocus::AddSystem,
        }
    }

    fn prev(self) -> Self {
        match self {
            HomeFocus::AddSystem => HomeFocus::ChangeRole,
            HomeFocus::AddLogin => HomeFocus::AddSystem,
            HomeFocus::AddPassword => HomeFocus::AddLogin,
            HomeFocus::AddDivisionId => HomeFocus::AddPassword,
            HomeFocus::NewPassword => HomeFocus::AddDivisionId,
            HomeFocus::AssignDivision => HomeFocus::NewPassword,
            HomeFocus::AssignDivisionId => HomeFocus::AssignDivision,
            HomeFocus::ChangeRole => HomeFocus::AssignDivisionId,
        }
    }
}

#[derive(Debug)]
pub struct HomeScreen {
    pub credentials: ListSlot<Credential>,
    pub ous: ListSlot<OrgUnit>,
    pub roles: ListSlot<String>,
    /// Stored passwords are bulleted until toggled visible.
    pub reveal_passwords: bool,
    pub focus: HomeFocus,
    pub add_system: TextField,
    pub add_login: TextField,
    pub add_password: TextField,
    /// Target division id, typed directly. Divisions are not always OUs,
    /// so the id is never restricted to the fetched list.
    pub add_division_id: TextField,
    pub new_password: TextField,
    pub assign_division: usize,
    /// Typed division id for assignment; wins over the OU selection.
    pub assign_division_id: TextField,
    pub change_role: usize,
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            credentials: ListSlot::default(),
            ous: ListSlot::default(),
            roles: ListSlot::default(),
            reveal_passwords: false,
            focus: HomeFocus::AddSystem,
            add_system: TextField::new(),
            add_login: TextField::new(),
            add_password: TextField::masked(),
            add_division_id: TextField::new(),
            new_password: TextField::masked(),
            assign_division: 0,
            assign_division_id: TextField::new(),
            change_role: 0,
        }
    }

    pub fn clear_add_form(&mut self) {
        self.add_system.clear();
        self.add_login.clear();
        self.add_password.clear();
        self.add_division_id.clear();
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            HomeFocus::AddSystem => Some(&mut self.add_system),
            HomeFocus::AddLogin => Some(&mut self.add_login),
            HomeFocus::AddPassword => Some(&mut self.add_password),
            HomeFocus::AddDivisionId => Some(&mut self.add_division_id),
            HomeFocus::NewPassword => Some(&mut self.new_password),
            HomeFocus::AssignDivisionId => Some(&mut self.assign_division_id),
            HomeFocus::AssignDivision | HomeFocus::ChangeRole => None,
        }
    }

    /// The select index for the focused option field, with its option count.
    fn focused_select(&mut self) -> Option<(&mut usize, usize)> {
        match self.focus {
            HomeFocus::AssignDivision => Some((&mut self.assign_division, self.ous.items.len())),
            HomeFocus::ChangeRole => Some((&mut self.change_role, self.roles.items.len())),
            _ => None,
        }
    }

    /// Clamps select indexes after a list refresh shrinks its options.
    pub fn clamp_selections(&mut self) {
        self.assign_division = self
            .assign_division
            .min(self.ous.items.len().saturating_sub(1));
        self.change_role = self.change_role.min(self.roles.items.len().saturating_sub(1));
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum HomeAction {
    None,
    AddCredential { draft: CredentialDraft },
    UpdatePassword { new_password: String },
    AssignDivision { division_id: String },
    ChangeRole { new_role: String },
    Refresh,
    Logout,
    Invalid(String),
}

pub fn handle_key(screen: &mut HomeScreen, key: KeyEvent) -> HomeAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('p') => {
                screen.reveal_passwords = !screen.reveal_passwords;
                HomeAction::None
            }
            KeyCode::Char('l') => HomeAction::Logout,
            KeyCode::Char('r') => HomeAction::Refresh,
            _ => HomeAction::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            screen.focus = screen.focus.next();
            HomeAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus = screen.focus.prev();
            HomeAction::None
        }
        KeyCode::Enter => submit(screen),
        KeyCode::Left => {
            if let Some((index, _)) = screen.focused_select() {
                *index = index.saturating_sub(1);
            } else if let Some(field) = screen.focused_field() {
                field.move_left();
            }
            HomeAction::None
        }
        KeyCode::Right => {
            if let Some((index, len)) = screen.focused_select() {
                if *index + 1 < len {
                    *index += 1;
                }
            } else if let Some(field) = screen.focused_field() {
                field.move_right();
            }
            HomeAction::None
        }
        KeyCode::Char(c) => {
            if let Some(field) = screen.focused_field() {
                field.insert(c);
            }
            HomeAction::None
        }
        KeyCode::Backspace => {
            if let Some(field) = screen.focused_field() {
                field.backspace();
            }
            HomeAction::None
        }
        KeyCode::Delete => {
            if let Some(field) = screen.focused_field() {
                field.delete();
            }
            HomeAction::None
        }
        KeyCode::Home => {
            if let Some(field) = screen.focused_field() {
                field.move_home();
            }
            HomeAction::None
        }
        KeyCode::End => {
            if let Some(field) = screen.focused_field() {
                field.move_end();
            }
            HomeAction::None
        }
        _ => HomeAction::None,
    }
}

fn submit(screen: &mut HomeScreen) -> HomeAction {
    match screen.focus {
        HomeFocus::AddSystem
        | HomeFocus::AddLogin
        | HomeFocus::AddPassword
        | HomeFocus::AddDivisionId => {
            if screen.add_system.is_empty()
                || screen.add_login.is_empty()
                || screen.add_password.is_empty()
                || screen.add_division_id.is_empty()
            {
                return HomeAction::Invalid(
                    "System, login, password and division ID are required".to_string(),
                );
            }
            HomeAction::AddCredential {
                draft: CredentialDraft {
                    system: screen.add_system.value().to_string(),
                    login: screen.add_login.value().to_string(),
                    password: screen.add_password.value().to_string(),
                    division_id: screen.add_division_id.value().to_string(),
                },
            }
        }
        HomeFocus::NewPassword => {
            if screen.new_password.is_empty() {
                return HomeAction::Invalid("New password is required".to_string());
            }
            HomeAction::UpdatePassword {
                new_password: screen.new_password.value().to_string(),
            }
        }
        HomeFocus::AssignDivision | HomeFocus::AssignDivisionId => {
            // A typed id wins; the OU select is a convenience over it.
            if !screen.assign_division_id.is_empty() {
                return HomeAction::AssignDivision {
                    division_id: screen.assign_division_id.value().to_string(),
                };
            }
            let Some(division) = screen.ous.items.get(screen.assign_division) else {
                return HomeAction::Invalid("No division selected".to_string());
            };
            HomeAction::AssignDivision {
                division_id: division.id.clone(),
            }
        }
        HomeFocus::ChangeRole => {
            let Some(role) = screen.roles.items.get(screen.change_role) else {
                return HomeAction::Invalid("No role available".to_string());
            };
            HomeAction::ChangeRole {
                new_role: role.clone(),
            }
        }
    }
}

pub fn render(screen: &HomeScreen, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(8)])
        .split(area);

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    render_credentials(screen, frame, lists[0]);
    render_ous(screen, frame, lists[1]);
    render_roles(screen, frame, lists[2]);

    let forms = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_add_form(screen, frame, forms[0]);
    render_account_form(screen, frame, forms[1]);
}

fn render_credentials(screen: &HomeScreen, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Division credentials ")
        .borders(Borders::ALL);

    if let Some(text) = slot_placeholder(&screen.credentials) {
        frame.render_widget(text.block(block), area);
        return;
    }

    let rows: Vec<Row> = screen
        .credentials
        .items
        .iter()
        .map(|credential| {
            Row::new(vec![
                Cell::from(credential.system.clone()),
                Cell::from(credential.login.clone()),
                Cell::from(display_password(credential, screen.reveal_passwords)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ],
    )
    .header(
        Row::new(vec!["System", "Login", "Password"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block);

    frame.render_widget(table, area);
}

fn display_password(credential: &Credential, reveal: bool) -> String {
    if reveal {
        credential.password.clone()
    } else {
        "\u{2022}".repeat(credential.password.chars().count())
    }
}

fn render_ous(screen: &HomeScreen, frame: &mut Frame, area: Rect) {
    let block = Block::default().title(" Divisions ").borders(Borders::ALL);

    if let Some(text) = slot_placeholder(&screen.ous) {
        frame.render_widget(text.block(block), area);
        return;
    }

    let items: Vec<ListItem> = screen
        .ous
        .items
        .iter()
        .map(|ou| ListItem::new(ou.name.clone()))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

fn render_roles(screen: &HomeScreen, frame: &mut Frame, area: Rect) {
    let block = Block::default().title(" Roles ").borders(Borders::ALL);

    if let Some(text) = slot_placeholder(&screen.roles) {
        frame.render_widget(text.block(block), area);
        return;
    }

    let items: Vec<ListItem> = screen
        .roles
        .items
        .iter()
        .map(|role| ListItem::new(role.clone()))
        .collect();
    frame.render_widget(List::new(items).block(block), area);
}

/// Placeholder paragraph for a slot that is loading, failed, or empty.
fn slot_placeholder<T>(slot: &ListSlot<T>) -> Option<Paragraph<'static>> {
    if !slot.loaded {
        return Some(Paragraph::new(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        )));
    }
    if let Some(error) = &slot.error
        && slot.items.is_empty()
    {
        return Some(Paragraph::new(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    }
    if slot.items.is_empty() {
        return Some(Paragraph::new(Span::styled(
            "Nothing here yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    None
}

fn render_add_form(screen: &HomeScreen, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Add credential ")
        .borders(Borders::ALL);

    let lines = vec![
        form_field_line(
            "System  ",
            &screen.add_system.display(false),
            screen.focus == HomeFocus::AddSystem,
        ),
        form_field_line(
            "Login   ",
            &screen.add_login.display(false),
            screen.focus == HomeFocus::AddLogin,
        ),
        form_field_line(
            "Password",
            &screen.add_password.display(screen.reveal_passwords),
            screen.focus == HomeFocus::AddPassword,
        ),
        form_field_line(
            "Division",
            &screen.add_division_id.display(false),
            screen.focus == HomeFocus::AddDivisionId,
        ),
        Line::default(),
        Line::from(Span::styled(
            "Enter on any field submits",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);

    let focused = match screen.focus {
        HomeFocus::AddSystem => Some((0, "System  ", &screen.add_system)),
        HomeFocus::AddLogin => Some((1, "Login   ", &screen.add_login)),
        HomeFocus::AddPassword => Some((2, "Password", &screen.add_password)),
        HomeFocus::AddDivisionId => Some((3, "Division", &screen.add_division_id)),
        _ => None,
    };
    if let Some((row, label, field)) = focused {
        set_form_cursor(frame, area, row, label, field, screen.reveal_passwords);
    }
}

fn render_account_form(screen: &HomeScreen, frame: &mut Frame, area: Rect) {
    let block = Block::default().title(" Account ").borders(Borders::ALL);

    let assign = screen
        .ous
        .items
        .get(screen.assign_division)
        .map_or("-", |ou| ou.name.as_str());
    let role = screen
        .roles
        .items
        .get(screen.change_role)
        .map_or("-", |role| role.as_str());

    let lines = vec![
        form_field_line(
            "New password",
            &screen.new_password.display(screen.reveal_passwords),
            screen.focus == HomeFocus::NewPassword,
        ),
        select_field_line("My division ", assign, screen.focus == HomeFocus::AssignDivision),
        form_field_line(
            "Division ID ",
            &screen.assign_division_id.display(false),
            screen.focus == HomeFocus::AssignDivisionId,
        ),
        select_field_line("My role     ", role, screen.focus == HomeFocus::ChangeRole),
        Line::default(),
        Line::from(Span::styled(
            "Ctrl+P reveal · Ctrl+R refresh · Ctrl+L sign out",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);

    let focused = match screen.focus {
        HomeFocus::NewPassword => Some((0, "New password", &screen.new_password)),
        HomeFocus::AssignDivisionId => Some((2, "Division ID ", &screen.assign_division_id)),
        _ => None,
    };
    if let Some((row, label, field)) = focused {
        set_form_cursor(frame, area, row, label, field, screen.reveal_passwords);
    }
}
