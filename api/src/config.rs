//! Store connection settings.

use std::fmt;

use reqwest::Url;

use crate::error::StoreError;

pub const URL_VAR: &str = "KEYSCORE_STORE_URL";
pub const ANON_KEY_VAR: &str = "KEYSCORE_STORE_ANON_KEY";
pub const ACCESS_TOKEN_VAR: &str = "KEYSCORE_STORE_ACCESS_TOKEN";

/// Where the results store lives and how to authenticate against it.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
}

impl StoreConfig {
    pub fn new(base_url: &str, anon_key: impl Into<String>) -> Result<Self, StoreError> {
        let parsed = Url::parse(base_url.trim())
            .map_err(|err| StoreError::Config(format!("invalid {URL_VAR} `{base_url}`: {err}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(StoreError::Config(format!(
                "{URL_VAR} must be http(s), got `{}`",
                parsed.scheme()
            )));
        }

        let anon_key = anon_key.into();
        if anon_key.trim().is_empty() {
            return Err(StoreError::Config(format!("{ANON_KEY_VAR} is empty")));
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            anon_key,
            access_token: None,
        })
    }

    /// Authenticate as a signed-in user instead of the anonymous role.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.access_token = (!token.trim().is_empty()).then_some(token);
        self
    }

    /// Read settings from the process environment, falling back to values baked
    /// in at compile time (the only option on wasm).
    pub fn from_env() -> Result<Self, StoreError> {
        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| compiled_var(key)))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StoreError> {
        let url = lookup(URL_VAR).ok_or_else(|| StoreError::Config(format!("{URL_VAR} is not set")))?;
        let key =
            lookup(ANON_KEY_VAR).ok_or_else(|| StoreError::Config(format!("{ANON_KEY_VAR} is not set")))?;

        let config = Self::new(&url, key)?;
        Ok(match lookup(ACCESS_TOKEN_VAR) {
            Some(token) => config.with_access_token(token),
            None => config,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Token sent as the bearer credential.
    pub fn bearer(&self) -> &str {
        self.access_token.as_deref().unwrap_or(&self.anon_key)
    }

    /// REST endpoint for a table.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }
}

fn compiled_var(key: &str) -> Option<String> {
    let value = match key {
        URL_VAR => option_env!("KEYSCORE_STORE_URL"),
        ANON_KEY_VAR => option_env!("KEYSCORE_STORE_ANON_KEY"),
        ACCESS_TOKEN_VAR => option_env!("KEYSCORE_STORE_ACCESS_TOKEN"),
        _ => None,
    };
    value.map(str::to_string)
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("base_url", &self.base_url)
            .field("anon_key", &"<redacted>")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
