//! Smartsheet REST API source
//!
//! Fetches a sheet with a blocking client and converts it like a saved
//! snapshot. The access token is supplied by the caller (normally read from
//! an environment variable); it is never logged.

use crate::schema::SheetPayload;
use crate::{Error, Result, RowSource};
use pcfgen_types::Sheet;
use reqwest::blocking::Client;
use std::time::Duration;

/// Public Smartsheet API root
pub const DEFAULT_API_BASE: &str = "https://api.smartsheet.com/2.0";

/// Environment variable holding the access token unless configured otherwise
pub const DEFAULT_TOKEN_ENV: &str = "SMARTSHEET_ACCESS_TOKEN";

/// Default timeout for sheet requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const USER_AGENT: &str = concat!("pcfgen/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SmartsheetSource {
    sheet_id: String,
    token: String,
    api_base: String,
    timeout: Duration,
}

impl SmartsheetSource {
    pub fn new(sheet_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            sheet_id: sheet_id.into(),
            token: token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the token from `token_env`; a missing or empty variable is a
    /// configuration error.
    pub fn from_env(sheet_id: impl Into<String>, token_env: &str) -> Result<Self> {
        match std::env::var(token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(sheet_id, token.trim())),
            _ => Err(Error::Source(format!(
                "Smartsheet access token not found: set the {} environment variable",
                token_env
            ))),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn sheet_url(&self) -> String {
        format!(
            "{}/sheets/{}",
            self.api_base.trim_end_matches('/'),
            self.sheet_id
        )
    }

    fn build_client(&self) -> Result<Client> {
        Ok(Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?)
    }
}

impl RowSource for SmartsheetSource {
    fn id(&self) -> &'static str {
        "smartsheet"
    }

    fn describe(&self) -> String {
        format!("smartsheet sheet {}", self.sheet_id)
    }

    fn load(&self) -> Result<Sheet> {
        let url = self.sheet_url();
        log::info!("Fetching {}", url);

        let response = self
            .build_client()?
            .get(&url)
            .bearer_auth(&self.token)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let payload: SheetPayload = response.json()?;
        log::debug!(
            "Sheet {:?}: {} columns, {} rows",
            payload.name,
            payload.columns.len(),
            payload.rows.len()
        );
        Ok(payload.into_sheet())
    }
}
