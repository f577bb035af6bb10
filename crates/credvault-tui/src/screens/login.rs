//! Login screen: username/password form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::TextField;
use crate::screens::{form_field_line, form_rect, set_form_cursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug)]
pub struct LoginScreen {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
    /// Inline form error from the last failed attempt.
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            username: TextField::new(),
            password: TextField::masked(),
            focus: LoginField::Username,
            error: None,
            submitting: false,
        }
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

/// What the reducer should do after a login key press.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginAction {
    None,
    Submit { username: String, password: String },
    SwitchToRegister,
    Quit,
}

pub fn handle_key(screen: &mut LoginScreen, key: KeyEvent) -> LoginAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('r') => LoginAction::SwitchToRegister,
            _ => LoginAction::None,
        };
    }

    match key.code {
        KeyCode::Esc => LoginAction::Quit,
        KeyCode::Tab | KeyCode::Down => {
            screen.focus = match screen.focus {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
            LoginAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus = match screen.focus {
                LoginField::Username => LoginField::Password,
                LoginField::Password => LoginField::Username,
            };
            LoginAction::None
        }
        KeyCode::Enter => {
            if screen.submitting {
                return LoginAction::None;
            }
            if screen.username.is_empty() || screen.password.is_empty() {
                screen.error = Some("Username and password are required".to_string());
                return LoginAction::None;
            }
            screen.error = None;
            LoginAction::Submit {
                username: screen.username.value().to_string(),
                password: screen.password.value().to_string(),
            }
        }
        KeyCode::Char(c) => {
            screen.focused_field().insert(c);
            LoginAction::None
        }
        KeyCode::Backspace => {
            screen.focused_field().backspace();
            LoginAction::None
        }
        KeyCode::Delete => {
            screen.focused_field().delete();
            LoginAction::None
        }
        KeyCode::Left => {
            screen.focused_field().move_left();
            LoginAction::None
        }
        KeyCode::Right => {
            screen.focused_field().move_right();
            LoginAction::None
        }
        KeyCode::Home => {
            screen.focused_field().move_home();
            LoginAction::None
        }
        KeyCode::End => {
            screen.focused_field().move_end();
            LoginAction::None
        }
        _ => LoginAction::None,
    }
}

pub fn render(screen: &LoginScreen, frame: &mut Frame, area: Rect) {
    let rect = form_rect(area, 44, 9);

    let block = Block::default()
        .title(" Sign in ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        form_field_line(
            "Username",
            &screen.username.display(false),
            screen.focus == LoginField::Username,
        ),
        form_field_line(
            "Password",
            &screen.password.display(false),
            screen.focus == LoginField::Password,
        ),
        Line::default(),
    ];

    if screen.submitting {
        lines.push(Line::from(Span::styled(
            "Signing in...",
            Style::default().fg(Color::Yellow),
        )));
    } else if let Some(error) = &screen.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::default());
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Enter sign in · Ctrl+R register · Esc quit",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), rect);

    if !screen.submitting {
        let (row, label, field) = match screen.focus {
            LoginField::Username => (0, "Username", &screen.username),
            LoginField::Password => (1, "Password", &screen.password),
        };
        set_form_cursor(frame, rect, row, label, field, false);
    }
}
