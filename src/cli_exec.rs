use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use guestbook::catalog::{Catalog, NoticeLevel, driver};
use guestbook::remote::RemoteClient;

use crate::Commands;
use crate::cli_runtime::CliContext;

mod config;
mod dispatch;
mod recordings;

pub(crate) fn handle_command(ctx: CliContext, command: Commands) -> Result<()> {
    dispatch::handle_command(ctx, command)
}

/// A client plus a freshly loaded catalog.
struct Session {
    client: RemoteClient,
    catalog: Catalog,
}

fn connect(ctx: &CliContext, out: Option<PathBuf>) -> Result<Session> {
    let mut client = RemoteClient::new(&ctx.config)?;
    if let Some(dir) = out {
        client = client.with_download_dir(dir);
    }
    let mut catalog = Catalog::new(ctx.config.reconcile);
    driver::reload(&mut catalog, &client);
    report(&mut catalog).with_context(|| format!("load recordings from {}", client.base_url()))?;
    Ok(Session { client, catalog })
}

/// Print what the catalog has to say. Errors end the command.
fn report(catalog: &mut Catalog) -> Result<()> {
    let mut failure = None;
    for notice in catalog.take_notices() {
        match notice.level {
            NoticeLevel::Info | NoticeLevel::Success => println!("{}", notice.text),
            NoticeLevel::Warning => eprintln!("warning: {}", notice.text),
            NoticeLevel::Error => {
                if failure.is_none() {
                    failure = Some(notice.text);
                }
            }
        }
    }
    match failure {
        Some(text) => Err(anyhow::anyhow!(text)),
        None => Ok(()),
    }
}

fn locate(catalog: &Catalog, filename: &str) -> Result<usize> {
    catalog
        .position(filename)
        .ok_or_else(|| anyhow::anyhow!("no recording named {}", filename))
}

/// Ask before destroying anything. `--yes` skips the question; without a
/// terminal there is nobody to ask, so the answer is no.
fn confirm(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        anyhow::bail!("{} (pass --yes to confirm without a terminal)", prompt);
    }
    print!("{} [y/N] ", prompt);
    io::stdout().flush().context("flush stdout")?;
    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
