use anyhow::Result;

mod app;

mod input;
mod modal;
mod view;
mod views;
mod worker;

// Core TUI types shared by the submodules via `super::...`.
use app::{App, Modal, ModalKind};
use view::{RenderCtx, point_in_rect, render_view_chrome_with_header};

pub fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
