//! Top-level rendering: title bar, active screen, footer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::NoticeKind;
use crate::screens::{Screen, home, login, register};
use crate::state::AppState;

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Renders the whole frame from state.
pub fn render(app: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(app, frame, chunks[0]);

    match &app.tui.screen {
        Screen::Login(screen) => login::render(screen, frame, chunks[1]),
        Screen::Register(screen) => register::render(screen, frame, chunks[1]),
        Screen::Home(screen) => home::render(screen, frame, chunks[1]),
    }

    render_footer(app, frame, chunks[2]);
}

fn render_title(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " CredVault ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            app.tui.config.base_url.clone(),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if app.tui.tasks.is_any_running() {
        let spinner = SPINNER_FRAMES[app.tui.spinner_frame as usize % SPINNER_FRAMES.len()];
        spans.push(Span::raw("  "));
        spans.push(Span::styled(spinner, Style::default().fg(Color::Yellow)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    if let Some(notice) = app.tui.notice.current() {
        let color = match notice.kind {
            NoticeKind::Info => Color::Cyan,
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        let line = Line::from(Span::styled(
            format!(" {}", notice.text),
            Style::default().fg(color),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hint = match &app.tui.screen {
        Screen::Login(_) => " Tab next field · Enter sign in · Ctrl+R register · Ctrl+C quit",
        Screen::Register(_) => " Tab next field · Enter create · Esc back · Ctrl+C quit",
        Screen::Home(_) => " Tab next field · Enter submit · Left/Right choose · Ctrl+C quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}
