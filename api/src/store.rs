//! The narrow seam between views and whatever backs the results table.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use futures::future::{self, LocalBoxFuture};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::TestResultRecord;
use crate::rest::RestResultsStore;

/// Read access to typing-test results.
pub trait ResultsStore {
    /// Every result, newest first, with the owner's profile joined in.
    fn fetch_results(&self) -> LocalBoxFuture<'_, Result<Vec<TestResultRecord>, StoreError>>;
}

/// Cheaply clonable, shareable store used as a Dioxus prop / context value.
#[derive(Clone)]
pub struct StoreHandle(Rc<dyn ResultsStore>);

impl StoreHandle {
    pub fn new(store: impl ResultsStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// Build the REST store from environment settings. A missing or invalid
    /// configuration yields a store whose every call fails with
    /// [`StoreError::Config`], so the app still starts and reports the problem.
    pub fn from_env() -> Self {
        match StoreConfig::from_env() {
            Ok(config) => {
                tracing::debug!(base_url = config.base_url(), "results store configured");
                Self::new(RestResultsStore::new(config))
            }
            Err(err) => {
                tracing::warn!(error = %err, "results store unavailable");
                Self::new(UnconfiguredStore::new(err.to_string()))
            }
        }
    }
}

impl Deref for StoreHandle {
    type Target = dyn ResultsStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoreHandle").finish_non_exhaustive()
    }
}

/// Stand-in used when no store settings are available.
#[derive(Debug, Clone)]
pub struct UnconfiguredStore {
    reason: String,
}

impl UnconfiguredStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl ResultsStore for UnconfiguredStore {
    fn fetch_results(&self) -> LocalBoxFuture<'_, Result<Vec<TestResultRecord>, StoreError>> {
        Box::pin(future::ready(Err(StoreError::Config(self.reason.clone()))))
    }
}
