//! Debug trace helpers for raw request/response capture.
//!
//! Enabled via CREDVAULT_DEBUG_TRACE: "1"/"true" writes under the system
//! temp dir, any other non-empty value names the target directory. The
//! TUI owns the terminal, so wire diagnostics go to files, never stdout.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TRACE_COUNTER: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone)]
pub struct DebugTrace {
    id: String,
    dir: PathBuf,
}

impl DebugTrace {
    pub fn from_env(op: &str) -> Option<Self> {
        let raw = std::env::var("CREDVAULT_DEBUG_TRACE").ok()?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let dir = if trimmed == "1" || trimmed.eq_ignore_ascii_case("true") {
            std::env::temp_dir().join("credvault-trace")
        } else {
            PathBuf::from(trimmed)
        };

        if fs::create_dir_all(&dir).is_err() {
            return None;
        }

        let safe: String = op
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();

        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let counter = TRACE_COUNTER.fetch_add(1, Ordering::Relaxed);
        let id = format!("{safe}_{ts}_{counter}");

        Some(Self { id, dir })
    }

    pub fn write_request(&self, body: &[u8]) {
        if let Ok(mut file) = File::create(self.dir.join(format!("{}_request.json", self.id))) {
            let _ = file.write_all(body);
            let _ = file.flush();
        }
    }

    pub fn write_response(&self, status: u16, body: &str) {
        if let Ok(mut file) = File::create(self.dir.join(format!("{}_response.json", self.id))) {
            let _ = writeln!(file, "HTTP {status}");
            let _ = file.write_all(body.as_bytes());
            let _ = file.flush();
        }
    }
}
