pub mod app_dirs;
pub mod catalog;
pub mod logging;
pub mod model;
pub mod remote;
pub mod tui;

mod tui_shell;
