use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};
use guestbook::model::{GestureMode, ReconcileMode};

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Show the effective configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update the config file
    Set {
        /// Server URL
        #[arg(long)]
        url: Option<String>,
        /// How reloads treat selection
        #[arg(long, value_enum)]
        reconcile: Option<ReconcileArg>,
        /// Swipe-to-delete in the TUI
        #[arg(long, value_enum)]
        gestures: Option<GestureArg>,
        /// Where downloaded archives are written
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ReconcileArg {
    /// Keep selection on rows that survive a reload
    Keyed,
    /// Rebuild every row unselected
    Rebuild,
}

impl From<ReconcileArg> for ReconcileMode {
    fn from(arg: ReconcileArg) -> Self {
        match arg {
            ReconcileArg::Keyed => ReconcileMode::Keyed,
            ReconcileArg::Rebuild => ReconcileMode::Rebuild,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum GestureArg {
    Auto,
    On,
    Off,
}

impl From<GestureArg> for GestureMode {
    fn from(arg: GestureArg) -> Self {
        match arg {
            GestureArg::Auto => GestureMode::Auto,
            GestureArg::On => GestureMode::On,
            GestureArg::Off => GestureMode::Off,
        }
    }
}
