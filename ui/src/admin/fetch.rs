use api::{ResultsStore, TestResultRecord};

use crate::t;

/// Records on success, the user-facing message on failure.
pub type FetchOutcome = Result<Vec<TestResultRecord>, String>;

/// The one message users see, whatever went wrong.
pub fn load_error_message() -> String {
    t!("admin-error-load")
}

/// Query the store once. The underlying error only goes to the log.
pub async fn fetch_results(store: &dyn ResultsStore) -> FetchOutcome {
    tracing::debug!("fetching admin results");

    match store.fetch_results().await {
        Ok(records) => {
            tracing::debug!(count = records.len(), "admin results loaded");
            Ok(records)
        }
        Err(err) => {
            tracing::error!(
                error = %err,
                permission_denied = err.is_permission_denied(),
                "error fetching results"
            );
            Err(load_error_message())
        }
    }
}
