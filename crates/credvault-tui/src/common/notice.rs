//! Transient status notices shown at the bottom of the screen.
//!
//! Replaces toast popups: one notice at a time, newest wins, errors stick
//! around longer than confirmations. The reducer expires notices on Tick.

use std::time::{Duration, Instant};

const INFO_TTL: Duration = Duration::from_secs(4);
const ERROR_TTL: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct NoticeState {
    current: Option<(Notice, Instant)>,
}

impl NoticeState {
    pub fn info(&mut self, text: impl Into<String>) {
        self.set(NoticeKind::Info, text.into(), INFO_TTL);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.set(NoticeKind::Success, text.into(), INFO_TTL);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.set(NoticeKind::Error, text.into(), ERROR_TTL);
    }

    fn set(&mut self, kind: NoticeKind, text: String, ttl: Duration) {
        self.current = Some((Notice { kind, text }, Instant::now() + ttl));
    }

    /// Drops the notice once its deadline passes. Called on Tick.
    pub fn check_timeout(&mut self) {
        if let Some((_, deadline)) = &self.current
            && Instant::now() >= *deadline
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
