//! Screen state, key handling and rendering.

pub mod home;
pub mod login;
pub mod register;

pub use home::HomeScreen;
pub use login::LoginScreen;
pub use register::RegisterScreen;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::common::TextField;

/// The active screen. Which screen is mounted decides which events are
/// meaningful; results for a screen that was left are dropped.
#[derive(Debug)]
pub enum Screen {
    Login(LoginScreen),
    Register(RegisterScreen),
    Home(HomeScreen),
}

/// Centers a fixed-size form inside the available area.
pub(crate) fn form_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A labeled text input line with a focus marker.
pub(crate) fn form_field_line<'a>(label: &'a str, value: &str, focused: bool) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), value_style),
    ])
}

/// Places the hardware cursor inside the focused form field. `row` is the
/// field's line offset within the bordered block at `rect`.
pub(crate) fn set_form_cursor(
    frame: &mut Frame,
    rect: Rect,
    row: u16,
    label: &str,
    field: &TextField,
    reveal: bool,
) {
    let x = rect.x + 1 + 2 + label.width() as u16 + 2 + field.cursor_col(reveal);
    let y = rect.y + 1 + row;
    frame.set_cursor_position((x, y));
}

/// A labeled option selector line, navigated with Left/Right.
pub(crate) fn select_field_line<'a>(label: &'a str, value: &str, focused: bool) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(format!("\u{25c2} {value} \u{25b8}"), value_style),
    ])
}
