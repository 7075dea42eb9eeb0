use std::path::PathBuf;

use clap::Args;

#[derive(Args)]
pub(crate) struct ListArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct RenameArgs {
    pub(crate) old: String,
    pub(crate) new: String,
}

#[derive(Args)]
pub(crate) struct DeleteArgs {
    pub(crate) filename: String,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub(crate) yes: bool,
}

#[derive(Args)]
pub(crate) struct DeleteSelectedArgs {
    #[arg(required = true, num_args = 1..)]
    pub(crate) filenames: Vec<String>,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub(crate) yes: bool,
}

#[derive(Args)]
pub(crate) struct DownloadArgs {
    #[arg(required = true, num_args = 1..)]
    pub(crate) filenames: Vec<String>,
    /// Directory to save the archive in (defaults to the configured download dir)
    #[arg(long, value_name = "DIR")]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct DownloadAllArgs {
    /// Directory to save the archive in (defaults to the configured download dir)
    #[arg(long, value_name = "DIR")]
    pub(crate) out: Option<PathBuf>,
}
