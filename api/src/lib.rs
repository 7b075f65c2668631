//! Results store client for Keyscore.
//!
//! Views only see [`ResultsStore`] / [`StoreHandle`]; the PostgREST client in
//! [`rest`] is one implementation of it.

pub mod config;
pub mod error;
pub mod model;
pub mod rest;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use model::{Difficulty, Profile, TestResultRecord};
pub use rest::RestResultsStore;
pub use store::{ResultsStore, StoreHandle, UnconfiguredStore};
