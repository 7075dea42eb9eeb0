//! Background thread that owns the HTTP client. Jobs run one at a time, in
//! submission order; results come back over a channel and are applied by the
//! event loop between input events.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
#[cfg(test)]
use std::time::Duration;

use anyhow::{Context, Result};

use crate::catalog::{CatalogBackend, CatalogError, Completion, Job, driver};
use crate::remote::RemoteClient;

pub(super) trait WorkerBackend: CatalogBackend + Send + 'static {
    fn download_all(&self) -> Result<PathBuf, CatalogError>;
}

impl WorkerBackend for RemoteClient {
    fn download_all(&self) -> Result<PathBuf, CatalogError> {
        RemoteClient::download_all(self)
    }
}

#[derive(Debug)]
pub(super) enum Task {
    Run(Job),
    DownloadAll,
}

#[derive(Debug)]
pub(super) enum Outcome {
    Completed(Completion),
    DownloadedAll(Result<PathBuf, CatalogError>),
}

pub(super) struct Worker {
    tx: Sender<Task>,
    rx: Receiver<Outcome>,
    in_flight: usize,
    _handle: JoinHandle<()>,
}

impl Worker {
    pub(super) fn spawn<B: WorkerBackend>(backend: B) -> Result<Self> {
        let (task_tx, task_rx) = mpsc::channel::<Task>();
        let (outcome_tx, outcome_rx) = mpsc::channel::<Outcome>();

        let handle = thread::Builder::new()
            .name("guestbook-worker".to_string())
            .spawn(move || {
                while let Ok(task) = task_rx.recv() {
                    let outcome = match task {
                        Task::Run(job) => Outcome::Completed(driver::execute(&backend, job)),
                        Task::DownloadAll => Outcome::DownloadedAll(backend.download_all()),
                    };
                    if outcome_tx.send(outcome).is_err() {
                        break;
                    }
                }
                tracing::debug!("worker stopped");
            })
            .context("spawn worker thread")?;

        Ok(Self {
            tx: task_tx,
            rx: outcome_rx,
            in_flight: 0,
            _handle: handle,
        })
    }

    /// False once the worker thread is gone.
    pub(super) fn submit(&mut self, task: Task) -> bool {
        if self.tx.send(task).is_err() {
            return false;
        }
        self.in_flight += 1;
        true
    }

    pub(super) fn try_recv(&mut self) -> Option<Outcome> {
        let outcome = self.rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(outcome)
    }

    /// Blocking receive used by tests to wait for the background thread.
    #[cfg(test)]
    pub(super) fn recv_timeout(&mut self, timeout: Duration) -> Option<Outcome> {
        let outcome = self.rx.recv_timeout(timeout).ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(outcome)
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight
    }
}
