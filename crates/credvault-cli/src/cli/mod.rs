//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use credvault_core::config::{self, Config};
use credvault_core::session::Session;

#[derive(Parser)]
#[command(name = "credvault")]
#[command(version)]
#[command(about = "Terminal client for the division credential service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the API base URL for this run
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Clear the saved session token (sign out)
    Logout,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Persist the API base URL to the config file
    SetUrl {
        /// Base origin, e.g. http://localhost:3030
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = Config::load().context("load config")?;

    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    // default to the interactive TUI
    let Some(command) = cli.command else {
        return credvault_tui::run(&config).await;
    };

    match command {
        Commands::Logout => {
            Session::clear().context("clear session")?;
            println!("Signed out.");
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                println!("{}", config::paths::config_path().display());
                Ok(())
            }
            ConfigCommands::Init => {
                let path = config::paths::config_path();
                if Config::init_at(&path)? {
                    println!("Created config at {}", path.display());
                    Ok(())
                } else {
                    anyhow::bail!("Config already exists at {}", path.display());
                }
            }
            ConfigCommands::SetUrl { url } => {
                let path = config::paths::config_path();
                Config::save_base_url_to(&path, &url)
                    .with_context(|| format!("save base_url to {}", path.display()))?;
                println!("base_url set to {url}");
                Ok(())
            }
        },
    }
}
