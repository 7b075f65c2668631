//! PostgREST (Supabase REST) implementation of [`ResultsStore`].

use futures::future::LocalBoxFuture;
use reqwest::header::ACCEPT;
use reqwest::{Client, Request};
use serde::Deserialize;

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::model::TestResultRecord;
use crate::store::ResultsStore;

pub const RESULTS_TABLE: &str = "typing_test_results";
/// Every result column plus the owner's profile via the `profiles` foreign key.
pub const RESULTS_SELECT: &str = "*,profiles(full_name,email,matricula,cpf)";
pub const RESULTS_ORDER: &str = "created_at.desc";

#[derive(Debug, Clone)]
pub struct RestResultsStore {
    client: Client,
    config: StoreConfig,
}

impl RestResultsStore {
    pub fn new(config: StoreConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The single read issued per view mount. No row limit is applied.
    pub fn results_request(&self) -> Result<Request, StoreError> {
        let request = self
            .client
            .get(self.config.table_url(RESULTS_TABLE))
            .query(&[("select", RESULTS_SELECT), ("order", RESULTS_ORDER)])
            .header("apikey", self.config.anon_key())
            .header(ACCEPT, "application/json")
            .bearer_auth(self.config.bearer())
            .build()?;
        Ok(request)
    }

    async fn load_results(&self) -> Result<Vec<TestResultRecord>, StoreError> {
        let request = self.results_request()?;
        tracing::debug!(url = %request.url(), "querying results");

        let response = self.client.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        let records = decode_results(status, &body)?;
        tracing::debug!(count = records.len(), "results received");
        Ok(records)
    }
}

impl ResultsStore for RestResultsStore {
    fn fetch_results(&self) -> LocalBoxFuture<'_, Result<Vec<TestResultRecord>, StoreError>> {
        Box::pin(self.load_results())
    }
}

/// Error body PostgREST sends with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

/// Turn a raw response into records. A `null` body counts as no rows.
pub fn decode_results(status: u16, body: &str) -> Result<Vec<TestResultRecord>, StoreError> {
    if !(200..300).contains(&status) {
        return Err(api_error(status, body));
    }
    let records: Option<Vec<TestResultRecord>> = serde_json::from_str(body)?;
    Ok(records.unwrap_or_default())
}

fn api_error(status: u16, body: &str) -> StoreError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();

    let mut message = parsed
        .message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.trim().to_string());
    if message.is_empty() {
        message = "empty response body".to_string();
    }
    if let Some(details) = parsed.details.filter(|d| !d.is_empty()) {
        message.push_str(&format!(" ({details})"));
    }
    if let Some(hint) = parsed.hint.filter(|h| !h.is_empty()) {
        message.push_str(&format!(" hint: {hint}"));
    }

    StoreError::Api {
        status,
        code: parsed.code,
        message,
    }
}
