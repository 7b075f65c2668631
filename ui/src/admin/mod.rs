mod fetch;
pub use fetch::{fetch_results, load_error_message, FetchOutcome};

mod table;
pub use table::ResultsTable;

mod view;
pub use view::AdminResultsView;

mod utils;
pub use utils::*;

use api::TestResultRecord;

/// Which of the three screens the admin view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Loaded,
    Failed,
}

/// Everything the admin view renders from: the fetched snapshot, the loading
/// flag and the user-facing error, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminResultsState {
    pub records: Vec<TestResultRecord>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for AdminResultsState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl AdminResultsState {
    /// Mark a fetch as in flight. A previous error is only cleared here.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Settle the in-flight fetch. On failure the previous records are kept.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(records) => {
                self.records = records;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.loading = false;
    }

    pub fn phase(&self) -> ViewPhase {
        if self.loading {
            ViewPhase::Loading
        } else if self.error.is_some() {
            ViewPhase::Failed
        } else {
            ViewPhase::Loaded
        }
    }
}
