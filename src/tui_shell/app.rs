use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use url::Url;

use crate::catalog::{
    Catalog, DeviceProfile, GestureHandler, Job, Notice, NoticeLevel, RowTarget,
    SelectionSummary,
};

use super::modal;
use super::view::RenderCtx;
use super::views::RecordingsView;
use super::worker::{Outcome, Task, Worker};

mod actions;
mod event_loop;
mod lifecycle;
mod modal_types;
mod mouse;
mod render;
mod runtime;

pub(super) use self::modal_types::{Modal, ModalKind};
pub(super) use self::runtime::run;

/// A left press that has not been released yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingClick {
    row: usize,
    target: RowTarget,
}

pub(super) struct App {
    catalog: Catalog,
    base_url: Url,
    view: RecordingsView,
    modal: Option<Modal>,
    gestures: GestureHandler,
    pending_click: Option<PendingClick>,
    worker: Worker,

    // Most recent notice; shown on the status line until replaced.
    status: Option<Notice>,
    quit: bool,
}

impl App {
    pub(super) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    pub(super) fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub(super) fn close_modal(&mut self) {
        self.modal = None;
    }

    fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
