//! Session state for one directory view.
//!
//! A [`Directory`] owns the canonical record set and the current [`Query`].
//! Each mutation recomputes the filtered results from the canonical set and
//! publishes a fresh [`DirectoryView`] to every subscriber.

use tokio::sync::watch;

use crate::facility::{FacilityRecord, FacilityStatus};
use crate::search::{Query, SearchField};

/// Progress of the dataset load backing a [`Directory`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Snapshot published after every change to a [`Directory`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryView {
    pub state: LoadState,
    pub query: Query,
    pub results: Vec<FacilityRecord>,
}

pub struct Directory {
    records: Vec<FacilityRecord>,
    query: Query,
    state: LoadState,
    tx: watch::Sender<DirectoryView>,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// Creates an empty directory in the [`LoadState::Loading`] state.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(DirectoryView::default());
        Self {
            records: Vec::new(),
            query: Query::default(),
            state: LoadState::Loading,
            tx,
        }
    }

    /// Returns a receiver that observes every published view, starting with
    /// the current one.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<DirectoryView> {
        self.tx.subscribe()
    }

    /// The most recently published view.
    #[must_use]
    pub fn view(&self) -> DirectoryView {
        self.tx.borrow().clone()
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// The canonical set from the last successful load.
    #[must_use]
    pub fn records(&self) -> &[FacilityRecord] {
        &self.records
    }

    /// Marks a reload as in flight. Records from an earlier load stay in
    /// place until [`Directory::apply_load`] replaces them.
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
        self.publish();
    }

    /// Settles a load. On success the canonical set is replaced wholesale; on
    /// failure the error message is recorded and the previous set is kept.
    pub fn apply_load<E>(&mut self, outcome: Result<Vec<FacilityRecord>, E>)
    where
        E: std::fmt::Display,
    {
        match outcome {
            Ok(records) => {
                tracing::debug!(count = records.len(), "directory records replaced");
                self.records = records;
                self.state = LoadState::Ready;
            }
            Err(error) => {
                tracing::warn!(%error, "directory load failed; keeping previous records");
                self.state = LoadState::Failed(error.to_string());
            }
        }
        self.publish();
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.search_term = term.into();
        self.publish();
    }

    pub fn set_search_field(&mut self, field: SearchField) {
        self.query.search_field = field;
        self.publish();
    }

    pub fn set_status_filter(&mut self, status: Option<FacilityStatus>) {
        self.query.status_filter = status;
        self.publish();
    }

    pub fn set_query(&mut self, query: Query) {
        self.query = query;
        self.publish();
    }

    /// Resets the term, status filter, and field selector to their defaults.
    pub fn clear_filters(&mut self) {
        self.set_query(Query::default());
    }

    /// `true` when a search term or status filter is narrowing the view.
    /// The field selector alone does not count.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.query.search_term.is_empty() || self.query.status_filter.is_some()
    }

    fn publish(&self) {
        let results = self
            .query
            .apply(&self.records)
            .into_iter()
            .cloned()
            .collect();
        let view = DirectoryView {
            state: self.state.clone(),
            query: self.query.clone(),
            results,
        };
        self.tx.send_replace(view);
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
