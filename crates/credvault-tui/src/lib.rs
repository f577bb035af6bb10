//! Full-screen TUI for CredVault.

pub mod common;
pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod screens;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
use credvault_core::config::Config;
use credvault_core::session::Session;
pub use runtime::TuiRuntime;

/// Runs the interactive credential manager.
pub async fn run(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "CredVault requires a terminal.\n\
             Use `credvault logout` or `credvault config` for non-interactive use."
        );
    }

    let session = Session::load()?;

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "CredVault")?;
    writeln!(err, "Server: {}", config.resolve_base_url()?)?;
    if session.is_authenticated() {
        writeln!(err, "Resuming saved session")?;
    }
    err.flush()?;

    let mut runtime = TuiRuntime::new(config.clone(), session)?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
