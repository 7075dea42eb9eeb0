use super::*;

impl App {
    pub(in crate::tui_shell) fn new(
        catalog: Catalog,
        base_url: Url,
        device: DeviceProfile,
        worker: Worker,
    ) -> Self {
        Self {
            catalog,
            base_url,
            view: RecordingsView::default(),
            modal: None,
            gestures: GestureHandler::new(device),
            pending_click: None,
            worker,
            status: None,
            quit: false,
        }
    }

    pub(in crate::tui_shell) fn dispatch(&mut self, job: Job) {
        tracing::debug!(job = job.label(), "queued");
        if !self.worker.submit(Task::Run(job)) {
            self.set_status(NoticeLevel::Error, "background worker stopped; restart the app");
        }
    }

    pub(in crate::tui_shell) fn reload(&mut self) {
        let job = self.catalog.begin_load();
        self.dispatch(job);
    }

    /// Apply every result the worker has produced so far.
    pub(in crate::tui_shell) fn pump(&mut self) {
        while let Some(outcome) = self.worker.try_recv() {
            self.absorb(outcome);
        }
    }

    pub(in crate::tui_shell) fn absorb(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Completed(completion) => {
                for job in self.catalog.apply(completion) {
                    self.dispatch(job);
                }
            }
            Outcome::DownloadedAll(Ok(path)) => {
                tracing::info!(path = %path.display(), "archive of all recordings saved");
                self.set_status(
                    NoticeLevel::Success,
                    format!("Saved all recordings to {}", path.display()),
                );
            }
            Outcome::DownloadedAll(Err(err)) => {
                tracing::warn!(error = %err, "download all failed");
                self.set_status(
                    NoticeLevel::Error,
                    format!("Error downloading recordings: {err}"),
                );
            }
        }
        self.collect_notices();
        self.view.clamp(self.catalog.len());
    }

    pub(in crate::tui_shell) fn collect_notices(&mut self) {
        for notice in self.catalog.take_notices() {
            self.status = Some(notice);
        }
    }

    pub(super) fn set_status(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.status = Some(Notice {
            level,
            text: text.into(),
            retry: false,
        });
    }
}
