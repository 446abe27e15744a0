//! OpenBioMaps platform client
//!
//! Implements the small slice of the OBM data API the generator needs:
//! session setup, token authentication and `get_data` queries. The session is
//! an explicit value handed to the generator through the [`DataSource`] trait,
//! so tests can substitute a double and no global connection state exists.

use crate::models::RemoteTable;
use serde::Deserialize;
use std::time::Duration;

/// Default platform URL.
pub const DEFAULT_URL: &str = "https://openbiomaps.org";
/// Default project slug.
pub const DEFAULT_PROJECT: &str = "sex_ratio_evolution";
/// Default database schema queried for tables.
pub const DEFAULT_SCHEMA: &str = "sex_ratio_evolution";
/// Data API version the client speaks.
pub const DEFAULT_API_VERSION: &str = "2.3";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for platform operations
#[derive(Debug, thiserror::Error)]
pub enum ObmError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Authentication error: {0}")]
    Auth(String),
    #[error("Query error: {0}")]
    Query(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Source of rectangular table data.
///
/// The only seam between the generator and the platform. [`ObmSession`] is
/// the production implementation; tests provide fixed-response doubles.
pub trait DataSource {
    /// Fetch `projection` (normally `"*"`) for a schema-qualified table.
    fn get_data(&self, projection: &str, table: &str) -> Result<RemoteTable, ObmError>;
}

#[derive(Debug, Deserialize)]
struct GetDataResponse {
    columns: Vec<String>,
    #[serde(default)]
    data: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// An authenticated-or-not connection to one OBM project.
pub struct ObmSession {
    project: String,
    base_url: String,
    api_version: String,
    client: reqwest::blocking::Client,
    token: Option<String>,
}

impl ObmSession {
    /// Open a session against `url` for `project`, verifying the platform is
    /// reachable. Uses the default request timeout.
    pub fn init(
        project: impl Into<String>,
        url: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self, ObmError> {
        Self::init_with_timeout(project, url, api_version, DEFAULT_TIMEOUT)
    }

    /// Like [`ObmSession::init`] with an explicit request timeout.
    pub fn init_with_timeout(
        project: impl Into<String>,
        url: impl Into<String>,
        api_version: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ObmError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ObmError::Connection(format!("Failed to build HTTP client: {}", e)))?;

        let base_url: String = url.into();
        let session = Self {
            project: project.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: api_version.into(),
            client,
            token: None,
        };

        let response = session
            .client
            .head(session.project_url(""))
            .send()
            .map_err(|e| ObmError::Connection(format!("Platform unreachable: {}", e)))?;
        if !response.status().is_success() {
            return Err(ObmError::Connection(format!(
                "Project endpoint returned {}",
                response.status()
            )));
        }

        Ok(session)
    }

    /// Obtain an access token for subsequent queries.
    pub fn authenticate(&mut self) -> Result<(), ObmError> {
        let response = self
            .client
            .post(format!("{}/oauth/token.php", self.base_url))
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.project.as_str()),
            ])
            .send()
            .map_err(|e| ObmError::Auth(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ObmError::Auth(format!(
                "Token request rejected: {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .map_err(|e| ObmError::Auth(format!("Failed to parse token response: {}", e)))?;
        self.token = Some(token.access_token);
        Ok(())
    }

    fn project_url(&self, path: &str) -> String {
        format!(
            "{}/projects/{}/{}",
            self.base_url,
            urlencoding::encode(&self.project),
            path
        )
    }
}

impl DataSource for ObmSession {
    fn get_data(&self, projection: &str, table: &str) -> Result<RemoteTable, ObmError> {
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| ObmError::Auth("Session is not authenticated".to_string()))?;

        let response = self
            .client
            .post(self.project_url("pds.php"))
            .bearer_auth(token)
            .form(&[
                ("scope", "get_data"),
                ("value", projection),
                ("table", table),
                ("api_version", self.api_version.as_str()),
            ])
            .send()
            .map_err(|e| ObmError::Connection(format!("Failed to reach platform: {}", e)))?;

        if !response.status().is_success() {
            return Err(ObmError::Query(format!(
                "Query for {} rejected: {}",
                table,
                response.status()
            )));
        }

        let payload: GetDataResponse = response
            .json()
            .map_err(|e| ObmError::Serialization(format!("Failed to parse query response: {}", e)))?;

        Ok(RemoteTable::new(payload.columns, payload.data))
    }
}
