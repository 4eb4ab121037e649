//! Transaction and settlement report resource.

use serde_json::Value;

use crate::{adapters::ApiResponse, error::Result, rest::Client};

const SUB_PATH: &str = "/v1/reports";

/// Interface to the gateway's Reports API.
///
/// Report endpoints use a report-scoped API key distinct from the client's
/// default, so this resource carries its own. The key is threaded through
/// each call as an override; the client's stored credentials are never
/// touched, and calls made by other resources on the same client keep using
/// the default key.
#[derive(Debug, Clone)]
pub struct ReportResource<'a> {
    client: &'a Client,
    api_key: String,
}

impl<'a> ReportResource<'a> {
    /// Creates an interface to the Reports API backed by `client`, using
    /// `api_key` for report authentication.
    #[must_use]
    pub fn new(client: &'a Client, api_key: impl Into<String>) -> Self {
        Self { client, api_key: api_key.into() }
    }

    /// Queries transactions by date range and optional search criteria.
    ///
    /// Issues `POST /v1/reports` with `search_query_data` as the JSON body
    /// (`name`, `start_date`, `end_date`, `start_row`, `end_row`,
    /// `criteria[]`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn post(&self, search_query_data: &Value) -> Result<ApiResponse> {
        self.client.post(SUB_PATH, Some(search_query_data), Some(&self.api_key)).await
    }

    /// Fetches the settlement report for a date range.
    ///
    /// Issues `GET /v1/reports/settlement` with `search_query` encoded as
    /// query parameters (`start_date`, `end_date`).
    ///
    /// # Errors
    ///
    /// Returns an error for invalid query parameters or transport failure.
    pub async fn settlement(&self, search_query: &Value) -> Result<ApiResponse> {
        self.client
            .get(&format!("{SUB_PATH}/settlement"), Some(search_query), Some(&self.api_key))
            .await
    }
}
