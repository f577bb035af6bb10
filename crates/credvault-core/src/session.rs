//! Session token storage and retrieval.
//!
//! Stores the bearer token in `<home>/session.json` with restricted
//! permissions (0600). The token is opaque: it is never parsed, validated,
//! or logged. Its presence is the only authenticated/unauthenticated signal
//! the client has; an expired token is discovered when the server rejects
//! a request.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Persisted session state.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token from a successful login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Out-of-band user identifier, sent with change-role requests.
    /// The login flow does not populate this; it is written externally.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Session {
    /// Returns the default session file path.
    pub fn session_path() -> PathBuf {
        paths::session_path()
    }

    /// Loads the session from the default path.
    /// Returns an empty session if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::session_path())
    }

    /// Loads the session from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))
    }

    /// Saves the session to the default path with restricted permissions.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::session_path())
    }

    /// Saves the session to a specific path with restricted permissions (0600).
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }

    /// Removes the session file at the default path (logout).
    pub fn clear() -> Result<()> {
        Self::clear_at(&Self::session_path())
    }

    /// Removes the session file at a specific path. Missing file is fine.
    pub fn clear_at(path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove session file {}", path.display()))?;
        }
        Ok(())
    }

    /// Returns true if a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
