//! Registration screen: create a new account.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::TextField;
use crate::screens::{form_field_line, form_rect, set_form_cursor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Username,
    Password,
    Confirm,
}

#[derive(Debug)]
pub struct RegisterScreen {
    pub username: TextField,
    pub password: TextField,
    pub confirm: TextField,
    pub focus: RegisterField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for RegisterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterScreen {
    pub fn new() -> Self {
        Self {
            username: TextField::new(),
            password: TextField::masked(),
            confirm: TextField::masked(),
            focus: RegisterField::Username,
            error: None,
            submitting: false,
        }
    }

    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            RegisterField::Username => &mut self.username,
            RegisterField::Password => &mut self.password,
            RegisterField::Confirm => &mut self.confirm,
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            RegisterField::Username => RegisterField::Password,
            RegisterField::Password => RegisterField::Confirm,
            RegisterField::Confirm => RegisterField::Username,
        };
    }

    fn focus_prev(&mut self) {
        self.focus = match self.focus {
            RegisterField::Username => RegisterField::Confirm,
            RegisterField::Password => RegisterField::Username,
            RegisterField::Confirm => RegisterField::Password,
        };
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum RegisterAction {
    None,
    Submit { username: String, password: String },
    SwitchToLogin,
}

pub fn handle_key(screen: &mut RegisterScreen, key: KeyEvent) -> RegisterAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return RegisterAction::None;
    }

    match key.code {
        KeyCode::Esc => RegisterAction::SwitchToLogin,
        KeyCode::Tab | KeyCode::Down => {
            screen.focus_next();
            RegisterAction::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus_prev();
            RegisterAction::None
        }
        KeyCode::Enter => {
            if screen.submitting {
                return RegisterAction::None;
            }
            if screen.username.is_empty() || screen.password.is_empty() {
                screen.error = Some("Username and password are required".to_string());
                return RegisterAction::None;
            }
            if screen.password.value() != screen.confirm.value() {
                screen.error = Some("Passwords do not match".to_string());
                return RegisterAction::None;
            }
            screen.error = None;
            RegisterAction::Submit {
                username: screen.username.value().to_string(),
                password: screen.password.value().to_string(),
            }
        }
        KeyCode::Char(c) => {
            screen.focused_field().insert(c);
            RegisterAction::None
        }
        KeyCode::Backspace => {
            screen.focused_field().backspace();
            RegisterAction::None
        }
        KeyCode::Delete => {
            screen.focused_field().delete();
            RegisterAction::None
        }
        KeyCode::Left => {
            screen.focused_field().move_left();
            RegisterAction::None
        }
        KeyCode::Right => {
            screen.focused_field().move_right();
            RegisterAction::None
        }
        KeyCode::Home => {
            screen.focused_field().move_home();
            RegisterAction::None
        }
        KeyCode::End => {
            screen.focused_field().move_end();
            RegisterAction::None
        }
        _ => RegisterAction::None,
    }
}

pub fn render(screen: &RegisterScreen, frame: &mut Frame, area: Rect) {
    let rect = form_rect(area, 44, 10);

    let block = Block::default()
        .title(" Create account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![
        form_field_line(
            "Username",
            &screen.username.display(false),
            screen.focus == RegisterField::Username,
        ),
        form_field_line(
            "Password",
            &screen.password.display(false),
            screen.focus == RegisterField::Password,
        ),
        form_field_line(
            "Confirm ",
            &screen.confirm.display(false),
            screen.focus == RegisterField::Confirm,
        ),
        Line::default(),
    ];

    if screen.submitting {
        lines.push(Line::from(Span::styled(
            "Creating account...",
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
        "Enter create · Esc back to sign in",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), rect);

    if !screen.submitting {
        let (row, label, field) = match screen.focus {
            RegisterField::Username => (0, "Username", &screen.username),
            RegisterField::Password => (1, "Password", &screen.password),
            RegisterField::Confirm => (2, "Confirm ", &screen.confirm),
        };
        set_form_cursor(frame, rect, row, label, field, false);
    }
}
