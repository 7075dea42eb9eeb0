//! Blocking execution of catalog jobs, for the CLI, the TUI worker thread
//! and tests.

use std::collections::VecDeque;

use super::{Catalog, CatalogBackend, Completion, Job};

/// Run one job against the backend and package the result.
pub fn execute(backend: &dyn CatalogBackend, job: Job) -> Completion {
    tracing::debug!(job = job.label(), "executing");
    match job {
        Job::Load(ticket) => Completion::Loaded {
            ticket,
            result: backend.list_recordings(),
        },
        Job::Rename { from, to } => {
            let result = backend.rename_recording(&from, &to);
            Completion::Renamed { from, to, result }
        }
        Job::DeleteOne { filename } => {
            let result = backend.delete_recording(&filename);
            Completion::DeletedOne { filename, result }
        }
        Job::DeleteSelected { ids } => {
            let result = backend.delete_recordings(&ids);
            Completion::DeletedSelected { ids, result }
        }
        Job::DownloadSelected { files } => {
            let result = backend.download_selected(&files);
            Completion::DownloadedSelected {
                count: files.len(),
                result,
            }
        }
    }
}

/// Run `job` and every follow-up it triggers, in order. Returns how many
/// requests were sent.
pub fn run_until_settled(catalog: &mut Catalog, backend: &dyn CatalogBackend, job: Job) -> usize {
    let mut queue = VecDeque::from([job]);
    let mut sent = 0;
    while let Some(job) = queue.pop_front() {
        sent += 1;
        let completion = execute(backend, job);
        queue.extend(catalog.apply(completion));
    }
    sent
}

/// Issue a load and wait for it.
pub fn reload(catalog: &mut Catalog, backend: &dyn CatalogBackend) -> usize {
    let job = catalog.begin_load();
    run_until_settled(catalog, backend, job)
}

#[cfg(test)]
#[path = "../tests/catalog/driver_tests.rs"]
mod tests;
