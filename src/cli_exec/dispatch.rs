use super::config::handle_config_command;
use super::recordings::{
    handle_delete_command, handle_delete_selected_command, handle_download_all_command,
    handle_download_command, handle_list_command, handle_rename_command,
};
use super::*;

pub(super) fn handle_command(ctx: CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Tui => {
            guestbook::tui::run(guestbook::tui::TuiRunOptions::new(ctx.config))?;
        }
        Commands::List(args) => handle_list_command(&ctx, args.json)?,
        Commands::Rename(args) => handle_rename_command(&ctx, &args.old, &args.new)?,
        Commands::Delete(args) => handle_delete_command(&ctx, &args.filename, args.yes)?,
        Commands::DeleteSelected(args) => {
            handle_delete_selected_command(&ctx, &args.filenames, args.yes)?
        }
        Commands::Download(args) => handle_download_command(&ctx, &args.filenames, args.out)?,
        Commands::DownloadAll(args) => handle_download_all_command(&ctx, args.out)?,
        Commands::Config { command } => handle_config_command(ctx, command)?,
    }
    Ok(())
}
