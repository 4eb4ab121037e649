//! Payment profile resource.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;

use crate::{adapters::ApiResponse, error::Result, rest::Client};

const SUB_PATH: &str = "/v1/profiles";

/// Everything but unreserved characters is encoded, so a customer code
/// containing `/` or `?` cannot change the route.
const PATH_SEGMENT: &AsciiSet =
    &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Interface to the gateway's Payment Profiles API.
///
/// # Examples
///
/// ```rust,no_run
/// use bambora_client::{Client, Config, v1::ProfileResource};
/// use serde_json::json;
///
/// # async fn example() -> bambora_client::Result<()> {
/// # let config = Config {
/// #     base_url: "https://api.na.bambora.com".to_owned(),
/// #     api_key: "fakekey".to_owned(),
/// #     merchant_id: "1".to_owned(),
/// #     sub_merchant_id: None,
/// #     timeout_secs: 30,
/// # };
/// let client = Client::new(config)?;
/// let profiles = ProfileResource::new(&client);
///
/// let response = profiles
///     .create(&json!({
///         "language": "en",
///         "card": {
///             "name": "Hup Podling",
///             "number": "4030000010001234",
///             "expiry_month": "12",
///             "expiry_year": "23",
///             "cvd": "123",
///         },
///     }))
///     .await?;
/// // => Success({"code": 1, "message": "Operation Successful", "customer_code": "..."})
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProfileResource<'a> {
    client: &'a Client,
}

impl<'a> ProfileResource<'a> {
    /// Creates an interface to the Profiles API backed by `client`.
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Creates a payment profile from card or profile data.
    ///
    /// Issues `POST /v1/profiles` with `card_data` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure; gateway-side rejection
    /// surfaces as a decoded [`ApiResponse`], not an error.
    pub async fn create(&self, card_data: &Value) -> Result<ApiResponse> {
        self.client.post(SUB_PATH, Some(card_data), None).await
    }

    /// Deletes the payment profile identified by `customer_code`.
    ///
    /// Issues `DELETE /v1/profiles/{customer_code}`, percent-encoding the
    /// code as a single path segment.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure.
    pub async fn delete(&self, customer_code: &str) -> Result<ApiResponse> {
        let code = utf8_percent_encode(customer_code, PATH_SEGMENT);
        self.client.delete(&format!("{SUB_PATH}/{code}"), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(code: &str) -> String {
        utf8_percent_encode(code, PATH_SEGMENT).to_string()
    }

    #[test]
    fn test_path_segment_leaves_plain_codes_untouched() {
        assert_eq!(encode("02355E2e58Bf488EAB4EaFAD7083dB6A"), "02355E2e58Bf488EAB4EaFAD7083dB6A");
        assert_eq!(encode("code-1_2.3~"), "code-1_2.3~");
    }

    #[test]
    fn test_path_segment_encodes_route_changing_characters() {
        assert_eq!(encode("a/b"), "a%2Fb");
        assert_eq!(encode("a?b=c"), "a%3Fb%3Dc");
        assert_eq!(encode("a b#c"), "a%20b%23c");
    }
}
