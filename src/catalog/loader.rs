use std::collections::HashMap;

use crate::model::{Recording, ReconcileMode};

use super::{Catalog, CatalogError, Job, LoadStatus, Notice, NoticeLevel, Row};

/// Identifies one issued load. Only the most recently issued ticket may
/// change the rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied { rows: usize },
    /// A newer load was issued after this one; the response was dropped.
    Stale,
    Failed,
}

impl Catalog {
    /// Issue a reload. Any load issued earlier becomes stale.
    pub fn begin_load(&mut self) -> Job {
        self.generation += 1;
        self.loads_in_flight += 1;
        tracing::debug!(generation = self.generation, "catalog load issued");
        Job::Load(LoadTicket {
            generation: self.generation,
        })
    }

    pub fn apply_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<String>, CatalogError>,
    ) -> LoadOutcome {
        self.loads_in_flight = self.loads_in_flight.saturating_sub(1);
        if ticket.generation != self.generation {
            tracing::debug!(
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale catalog load"
            );
            return LoadOutcome::Stale;
        }

        match result {
            Ok(files) => {
                self.reconcile_rows(files);
                self.status = LoadStatus::Ready;
                tracing::info!(rows = self.rows.len(), "catalog loaded");
                LoadOutcome::Applied {
                    rows: self.rows.len(),
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog load failed");
                let message = err.to_string();
                self.status = LoadStatus::Failed {
                    message: message.clone(),
                };
                self.notices.push_back(Notice {
                    level: NoticeLevel::Error,
                    text: format!("Failed to load recordings: {message}"),
                    retry: true,
                });
                LoadOutcome::Failed
            }
        }
    }

    /// Replace the rows with `files`, in order. Draft names and slide offsets
    /// never survive; selection survives only in keyed mode.
    fn reconcile_rows(&mut self, files: Vec<String>) {
        let mut previous: HashMap<String, bool> = match self.reconcile {
            ReconcileMode::Keyed => self
                .rows
                .drain(..)
                .map(|row| (row.recording.filename().to_string(), row.selected))
                .collect(),
            ReconcileMode::Rebuild => {
                self.rows.clear();
                HashMap::new()
            }
        };

        self.rows = files
            .into_iter()
            .map(|filename| {
                let selected = previous.remove(&filename).unwrap_or(false);
                let mut row = Row::new(Recording::new(filename));
                row.selected = selected;
                row
            })
            .collect();
    }
}

#[cfg(test)]
#[path = "../tests/catalog/loader_tests.rs"]
mod tests;
