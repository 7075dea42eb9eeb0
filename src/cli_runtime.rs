use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use guestbook::model::ClientConfig;

use crate::Commands;

#[derive(Parser)]
#[command(name = "guestbook")]
#[command(about = "Browse and manage audio guestbook recordings", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to <config dir>/.guestbook/config.json)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Server URL, overriding the config file
    #[arg(long, value_name = "URL", global = true)]
    url: Option<String>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// What every command gets: the resolved config and where it lives.
pub(crate) struct CliContext {
    pub(crate) config_path: PathBuf,
    pub(crate) config: ClientConfig,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { "debug" } else { "warn" };

    // The TUI owns the terminal, so it logs to a file instead.
    if matches!(cli.command, Commands::Tui) {
        guestbook::logging::init_file(None, if cli.verbose { "debug" } else { "info" })
            .context("init logging")?;
    } else {
        guestbook::logging::init_stderr(level).context("init logging")?;
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => guestbook::app_dirs::config_path().context("locate config file")?,
    };
    let mut config = ClientConfig::load(&config_path)?;
    if let Some(url) = cli.url {
        config.base_url = url;
    }
    tracing::debug!(path = %config_path.display(), url = %config.base_url, "config resolved");

    crate::cli_exec::handle_command(
        CliContext {
            config_path,
            config,
        },
        cli.command,
    )
}
