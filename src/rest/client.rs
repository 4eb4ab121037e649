//! Gateway client: one network call per verb, decoded through an adapter.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, instrument};

use crate::{
    adapters::{ApiResponse, JsonAdapter, RawResponse, ResponseAdapter},
    config::Config,
    error::{BamboraError, Result},
    rest::request::{ApiRequest, Credentials, Method, build_request},
};

/// Client for the Bambora gateway REST API.
///
/// Orchestrates the request builder, the HTTP transport (reqwest), and a
/// response adapter. Each verb performs exactly one network call with no
/// implicit retries; retry and backoff policy, if desired, belong to the
/// caller.
///
/// The client is immutable after construction: credentials and base URL are
/// fixed, so a single instance may be shared by concurrent callers without
/// coordination.
///
/// # Examples
///
/// ```rust,no_run
/// use bambora_client::{Client, Config};
/// use serde_json::json;
///
/// # async fn example() -> bambora_client::Result<()> {
/// let client = Client::new(Config {
///     base_url: "https://api.na.bambora.com".to_owned(),
///     api_key: "fakekey".to_owned(),
///     merchant_id: "1".to_owned(),
///     sub_merchant_id: None,
///     timeout_secs: 30,
/// })?;
///
/// let response = client
///     .get("/v1/reports/settlement", Some(&json!({"start_date": "", "end_date": ""})), None)
///     .await?;
/// println!("{response:?}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl Client {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or if the HTTP
    /// transport cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(BamboraError::HttpError)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            credentials: Credentials {
                api_key: config.api_key,
                merchant_id: config.merchant_id,
                sub_merchant_id: config.sub_merchant_id,
            },
        })
    }

    /// Returns the configured gateway base URL (trailing slash trimmed).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET request decoded through the JSON adapter.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid query parameters or a transport failure.
    /// A response body that fails to parse is *not* an error; it comes back
    /// as [`ApiResponse::Failure`].
    pub async fn get(
        &self,
        path: &str,
        params: Option<&Value>,
        api_key: Option<&str>,
    ) -> Result<ApiResponse> {
        self.get_with(&JsonAdapter, path, params, api_key).await
    }

    /// Issues a GET request decoded through the supplied adapter.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn get_with<A: ResponseAdapter>(
        &self,
        adapter: &A,
        path: &str,
        params: Option<&Value>,
        api_key: Option<&str>,
    ) -> Result<ApiResponse> {
        let request =
            build_request(&self.credentials, Method::Get, path, None, params, api_key)?;
        Ok(adapter.decode(self.execute(request).await?))
    }

    /// Issues a POST request decoded through the JSON adapter.
    ///
    /// # Errors
    ///
    /// Returns an error for an unserializable body or a transport failure.
    pub async fn post(
        &self,
        path: &str,
        body: Option<&Value>,
        api_key: Option<&str>,
    ) -> Result<ApiResponse> {
        self.post_with(&JsonAdapter, path, body, api_key).await
    }

    /// Issues a POST request decoded through the supplied adapter.
    ///
    /// # Errors
    ///
    /// Same as [`post`](Self::post).
    pub async fn post_with<A: ResponseAdapter>(
        &self,
        adapter: &A,
        path: &str,
        body: Option<&Value>,
        api_key: Option<&str>,
    ) -> Result<ApiResponse> {
        let request =
            build_request(&self.credentials, Method::Post, path, body, None, api_key)?;
        Ok(adapter.decode(self.execute(request).await?))
    }

    /// Issues a DELETE request decoded through the JSON adapter.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn delete(&self, path: &str, api_key: Option<&str>) -> Result<ApiResponse> {
        self.delete_with(&JsonAdapter, path, api_key).await
    }

    /// Issues a DELETE request decoded through the supplied adapter.
    ///
    /// # Errors
    ///
    /// Same as [`delete`](Self::delete).
    pub async fn delete_with<A: ResponseAdapter>(
        &self,
        adapter: &A,
        path: &str,
        api_key: Option<&str>,
    ) -> Result<ApiResponse> {
        let request =
            build_request(&self.credentials, Method::Delete, path, None, None, api_key)?;
        Ok(adapter.decode(self.execute(request).await?))
    }

    /// Dispatches one request and collects the raw response.
    ///
    /// HTTP statuses are not inspected here: the adapter decides between
    /// success and failure purely on whether the body parses.
    #[instrument(
        skip(self, request),
        fields(method = request.method.as_str(), path = %request.path)
    )]
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut url = format!("{}{}", self.base_url, request.path);
        if let Some(query) = &request.query
            && !query.is_empty()
        {
            url.push('?');
            url.push_str(query);
        }

        let mut builder = match request.method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
            Method::Delete => self.http.delete(&url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        debug!(url = %url, "dispatching gateway request");
        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| (name.to_string(), header_value_string(value)))
            .collect();
        let body = response.text().await.map_err(BamboraError::HttpError)?;

        debug!(status, body_len = body.len(), "gateway responded");
        Ok(RawResponse { status, headers, body })
    }
}

/// Header values are bytes on the wire; non-UTF-8 values are converted
/// lossily rather than dropped.
fn header_value_string(value: &reqwest::header::HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn config() -> Config {
        Config {
            base_url: "https://api.na.bambora.com".to_owned(),
            api_key: "fakekey".to_owned(),
            merchant_id: "1".to_owned(),
            sub_merchant_id: None,
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_client_new_valid_config() {
        let client = Client::new(config());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_new_trims_trailing_slash() {
        let client = Client::new(Config {
            base_url: "https://api.na.bambora.com/".to_owned(),
            ..config()
        })
        .unwrap();

        assert_eq!(client.base_url(), "https://api.na.bambora.com");
    }

    #[test]
    fn test_client_new_rejects_malformed_base_url() {
        let result = Client::new(Config { base_url: "not-a-url".to_owned(), ..config() });
        assert!(matches!(result, Err(BamboraError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_client_new_rejects_empty_credentials() {
        let result = Client::new(Config { api_key: String::new(), ..config() });
        assert!(matches!(result, Err(BamboraError::ConfigError(_))));
    }

    #[test]
    fn test_header_value_string_utf8_passes_through() {
        let value = HeaderValue::from_static("application/json");
        assert_eq!(header_value_string(&value), "application/json");
    }

    #[test]
    fn test_header_value_string_non_utf8_is_lossy_not_blank() {
        // 0xE9 is valid obs-text in a header but not valid UTF-8 on its own.
        let value = HeaderValue::from_bytes(b"caf\xe9").unwrap();
        let converted = header_value_string(&value);

        assert!(converted.starts_with("caf"));
        assert!(converted.contains('\u{FFFD}'));
    }

    #[test]
    fn test_client_debug_format_exists() {
        let client = Client::new(config()).unwrap();
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("Client"));
    }
}
