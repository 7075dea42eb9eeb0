use clap::Subcommand;

use crate::ConfigCommands;

pub(crate) mod recordings;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Browse recordings interactively
    Tui,

    /// List recordings, newest first
    List(recordings::ListArgs),

    /// Rename a recording
    Rename(recordings::RenameArgs),

    /// Delete one recording
    Delete(recordings::DeleteArgs),

    /// Delete several recordings in one request
    DeleteSelected(recordings::DeleteSelectedArgs),

    /// Download recordings as a zip archive
    Download(recordings::DownloadArgs),

    /// Download every recording as a zip archive
    DownloadAll(recordings::DownloadAllArgs),

    /// Show or change the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
