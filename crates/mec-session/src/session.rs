//! The search-session state machine.
//!
//! One `SearchSession` backs every presentation adapter: keystrokes go in
//! through `input`, the event loop drives `tick`, and taps on results or
//! chips arrive as `select`/`deselect`. All state lives behind `&mut self`
//! on the event-processing context; there is no shared mutation.

use std::time::Instant;

use mec_model::{ConditionDetail, EligibilityChart};
use tracing::debug;

use crate::debounce::QueryDebouncer;
use crate::search::{MIN_QUERY_LEN, filter_conditions};
use crate::selection::SelectionSet;

/// Presentation state of the search UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No results presentation open.
    Idle,
    /// User is typing; the query is still below the minimum length, so the
    /// presentation shows a hint instead of results.
    Searching,
    /// A settled query of sufficient length has produced a (possibly empty)
    /// result list.
    ResultsShown,
}

/// Shared state-and-logic core consumed by the platform views.
#[derive(Debug)]
pub struct SearchSession {
    chart: EligibilityChart,
    query: String,
    results: Vec<String>,
    selection: SelectionSet,
    debouncer: QueryDebouncer,
    state: SearchState,
}

impl SearchSession {
    pub fn new(chart: EligibilityChart) -> Self {
        Self {
            chart,
            query: String::new(),
            results: Vec::new(),
            selection: SelectionSet::new(),
            debouncer: QueryDebouncer::default(),
            state: SearchState::Idle,
        }
    }

    /// Record a keystroke now.
    pub fn input(&mut self, text: impl Into<String>) {
        self.input_at(text, Instant::now());
    }

    /// Record a keystroke at `now`. Opens the results presentation when
    /// idle and schedules the debounced filter run.
    pub fn input_at(&mut self, text: impl Into<String>, now: Instant) {
        self.query = text.into();
        if self.state == SearchState::Idle {
            self.state = SearchState::Searching;
        }
        self.debouncer.note_at(self.query.clone(), now);
    }

    /// Drive the debouncer now. See [`SearchSession::tick_at`].
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    /// Drive the debouncer at `now`. When the query has settled, run the
    /// filter with the current selection as the exclusion set. Returns
    /// whether a recomputation happened.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        let Some(settled) = self.debouncer.fire_at(now) else {
            return false;
        };
        if settled.chars().count() >= MIN_QUERY_LEN {
            self.results = filter_conditions(&settled, &self.chart, &self.selection)
                .into_iter()
                .map(str::to_string)
                .collect();
            self.state = SearchState::ResultsShown;
        } else {
            self.results.clear();
            if self.state != SearchState::Idle {
                self.state = SearchState::Searching;
            }
        }
        debug!(query = %settled, results = self.results.len(), "search settled");
        true
    }

    /// Select a condition from the results. Adds to the selection
    /// (idempotent), clears the active search, and closes the presentation.
    /// Returns whether the selection grew.
    pub fn select(&mut self, name: impl Into<String>) -> bool {
        let added = self.selection.add(name);
        self.reset_search();
        added
    }

    /// Remove a selected condition (exact name, chip close). No-op when
    /// absent.
    pub fn deselect(&mut self, name: &str) -> bool {
        self.selection.remove(name)
    }

    /// Explicit dismissal of the results presentation.
    pub fn dismiss(&mut self) {
        self.reset_search();
    }

    fn reset_search(&mut self) {
        self.query.clear();
        self.results.clear();
        self.debouncer.cancel();
        self.state = SearchState::Idle;
    }

    /// Detail views for the current selection, in selection order. Selected
    /// names resolve case-insensitively against the chart; names the chart
    /// does not know yield no entry.
    pub fn details(&self) -> Vec<ConditionDetail> {
        self.selection
            .iter()
            .filter_map(|name| ConditionDetail::lookup(&self.chart, name))
            .collect()
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn chart(&self) -> &EligibilityChart {
        &self.chart
    }
}
