use thiserror::Error;

/// Failure modes of a results store call.
///
/// These are operator-facing; views collapse every variant into a single
/// user-visible message.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store is not configured: {0}")]
    Config(String),

    #[error("request to store failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store answered {status}{}: {message}", .code.as_deref().map(|c| format!(" ({c})")).unwrap_or_default())]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("store returned a malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the store refused the query (RLS denial or bad credentials).
    pub fn is_permission_denied(&self) -> bool {
        match self {
            StoreError::Api { status, code, .. } => {
                matches!(status, 401 | 403) || code.as_deref() == Some("42501")
            }
            _ => false,
        }
    }
}
