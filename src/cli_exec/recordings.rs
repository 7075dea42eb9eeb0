use std::path::PathBuf;

use serde::Serialize;

use guestbook::catalog::{CatalogView, DeleteOrigin, Placeholder};

use super::*;

#[derive(Serialize)]
struct ListedRecording {
    filename: String,
    /// Empty when the filename carries no timestamp.
    recorded: String,
    url: Option<String>,
}

pub(super) fn handle_list_command(ctx: &CliContext, json: bool) -> Result<()> {
    let session = connect(ctx, None)?;
    let rows = match session.catalog.render(session.client.base_url()) {
        CatalogView::Rows { rows, .. } => rows,
        CatalogView::Placeholder(Placeholder::Failed { message }) => anyhow::bail!(message),
        CatalogView::Placeholder(_) => Vec::new(),
    };

    if json {
        let listed: Vec<ListedRecording> = rows
            .into_iter()
            .map(|row| ListedRecording {
                filename: row.filename,
                recorded: row.timestamp,
                url: row.audio_url,
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&listed).context("serialize recordings json")?
        );
        return Ok(());
    }

    if rows.is_empty() {
        println!("No recordings found");
        return Ok(());
    }
    let width = rows.iter().map(|r| r.filename.len()).max().unwrap_or(0);
    for row in &rows {
        println!("{:<width$}  {}", row.filename, row.timestamp, width = width);
    }
    println!("{} recording(s)", rows.len());
    Ok(())
}

pub(super) fn handle_rename_command(ctx: &CliContext, old: &str, new: &str) -> Result<()> {
    let Session {
        client,
        mut catalog,
    } = connect(ctx, None)?;
    let idx = locate(&catalog, old)?;
    catalog.edit_name(idx, new);
    match catalog.commit_name(idx, new) {
        Some(job) => {
            driver::run_until_settled(&mut catalog, &client, job);
        }
        None => {
            if catalog.last_notice().is_none() {
                println!("{} already has that name", old);
            }
        }
    }
    report(&mut catalog)
}

pub(super) fn handle_delete_command(ctx: &CliContext, filename: &str, yes: bool) -> Result<()> {
    let Session {
        client,
        mut catalog,
    } = connect(ctx, None)?;
    let idx = locate(&catalog, filename)?;
    let Some(confirmation) = catalog.request_delete(idx, DeleteOrigin::Button) else {
        anyhow::bail!("no recording named {}", filename);
    };
    if !confirm(&confirmation.prompt(), yes)? {
        catalog.decline_delete(confirmation);
        println!("Cancelled");
        return Ok(());
    }
    let job = catalog.confirm_delete(confirmation);
    driver::run_until_settled(&mut catalog, &client, job);
    report(&mut catalog)
}

pub(super) fn handle_delete_selected_command(
    ctx: &CliContext,
    filenames: &[String],
    yes: bool,
) -> Result<()> {
    let Session {
        client,
        mut catalog,
    } = connect(ctx, None)?;
    select_known(&mut catalog, filenames)?;
    let confirmation = match catalog.request_delete_selected() {
        Ok(confirmation) => confirmation,
        Err(_) => return report(&mut catalog),
    };
    if !confirm(&confirmation.prompt(), yes)? {
        println!("Cancelled");
        return Ok(());
    }
    let job = catalog.confirm_delete_selected(confirmation);
    driver::run_until_settled(&mut catalog, &client, job);
    report(&mut catalog)
}

pub(super) fn handle_download_command(
    ctx: &CliContext,
    filenames: &[String],
    out: Option<PathBuf>,
) -> Result<()> {
    let Session {
        client,
        mut catalog,
    } = connect(ctx, out)?;
    select_known(&mut catalog, filenames)?;
    let job = match catalog.request_download_selected() {
        Ok(job) => job,
        Err(_) => return report(&mut catalog),
    };
    driver::run_until_settled(&mut catalog, &client, job);
    report(&mut catalog)
}

pub(super) fn handle_download_all_command(ctx: &CliContext, out: Option<PathBuf>) -> Result<()> {
    let mut client = RemoteClient::new(&ctx.config)?;
    if let Some(dir) = out {
        client = client.with_download_dir(dir);
    }
    let path = client.download_all().context("download all recordings")?;
    println!("Saved all recordings to {}", path.display());
    Ok(())
}

/// Unknown names abort before anything is sent.
fn select_known(catalog: &mut Catalog, filenames: &[String]) -> Result<()> {
    let unknown = catalog.select_filenames(filenames);
    if !unknown.is_empty() {
        anyhow::bail!("no recording named {}", unknown.join(", "));
    }
    Ok(())
}
