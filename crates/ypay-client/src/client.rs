//! HTTP client for the Y-Pay merchant registry (`getYpay`) on the public
//! data portal.
//!
//! One call is one GET: no retries, no caching. Transport failures are split
//! into [`YpayError::Timeout`] and [`YpayError::Transport`], any status other
//! than 200 becomes [`YpayError::Http`], and a non-zero `resultCode` in an
//! otherwise successful body becomes [`YpayError::Api`].

use std::error::Error as _;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use ypay_core::app_config::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use ypay_core::AppConfig;

use crate::error::YpayError;
use crate::query::MerchantQuery;
use crate::types::{lenient_i64, MerchantEnvelope, MerchantPage, MerchantRecord};

/// Client for the Y-Pay merchant API.
///
/// Use [`YpayClient::new`] for production or [`YpayClient::with_base_url`]
/// to point at a mock server in tests.
pub struct YpayClient {
    client: Client,
    service_key: String,
    base_url: Url,
    timeout_secs: u64,
}

impl YpayClient {
    /// Creates a client pointed at the production endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`YpayError::ClientBuild`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(service_key: &str, timeout_secs: u64) -> Result<Self, YpayError> {
        Self::with_base_url(service_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom endpoint URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YpayError::ClientBuild`] if the `reqwest::Client` cannot be
    /// constructed, or [`YpayError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL.
    pub fn with_base_url(
        service_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YpayError> {
        Self::build(service_key, timeout_secs, base_url, DEFAULT_USER_AGENT)
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`YpayError::MissingServiceKey`] if no key is configured,
    /// otherwise the same errors as [`YpayClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, YpayError> {
        let service_key = config
            .api_key
            .as_deref()
            .ok_or(YpayError::MissingServiceKey)?;
        Self::build(
            service_key,
            config.request_timeout_secs,
            &config.base_url,
            &config.user_agent,
        )
    }

    fn build(
        service_key: &str,
        timeout_secs: u64,
        base_url: &str,
        user_agent: &str,
    ) -> Result<Self, YpayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(YpayError::ClientBuild)?;

        let parsed = Url::parse(base_url).map_err(|e| YpayError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(YpayError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client,
            service_key: service_key.to_owned(),
            base_url: parsed,
            timeout_secs,
        })
    }

    /// Fetches one page of merchants.
    ///
    /// # Errors
    ///
    /// - [`YpayError::InvalidQuery`] if the page number or size is zero.
    /// - [`YpayError::Timeout`] if the request exceeds the client timeout.
    /// - [`YpayError::Transport`] on any other network failure.
    /// - [`YpayError::Http`] on a non-200 status.
    /// - [`YpayError::Api`] if `resultCode` is not `0`.
    /// - [`YpayError::Deserialize`] if the body does not match the expected shape.
    pub async fn fetch_page(&self, query: &MerchantQuery) -> Result<MerchantPage, YpayError> {
        query.validate()?;

        let url = self.build_url(query);
        tracing::debug!(
            page_no = query.page_no,
            num_of_rows = query.num_of_rows,
            field = query.field.as_deref(),
            name = query.name.as_deref(),
            "requesting merchant page"
        );

        let context = format!("getYpay(pageNo={})", query.page_no);
        let body = self.request_json(&url, &context).await?;
        Self::check_result_code(&body)?;

        let envelope: MerchantEnvelope =
            serde_json::from_value(body).map_err(|e| YpayError::Deserialize { context, source: e })?;
        let page = envelope.into_page();

        if page.records.len() > query.num_of_rows as usize {
            tracing::warn!(
                returned = page.records.len(),
                num_of_rows = query.num_of_rows,
                "API returned more rows than requested"
            );
        }

        Ok(page)
    }

    /// Looks up merchants by exact name with a single request.
    ///
    /// Filtering is done server-side; all matches are assumed to fit on the
    /// first page. Returns the records and the server-declared total.
    ///
    /// # Errors
    ///
    /// Returns [`YpayError::InvalidQuery`] for a blank name, otherwise any
    /// error from [`YpayClient::fetch_page`].
    pub async fn lookup_by_name(
        &self,
        name: &str,
    ) -> Result<(Vec<MerchantRecord>, u64), YpayError> {
        if name.trim().is_empty() {
            return Err(YpayError::InvalidQuery(
                "merchant name must not be empty".to_string(),
            ));
        }

        let page = self.fetch_page(&MerchantQuery::page(1).with_name(name)).await?;
        Ok((page.records, page.total_count))
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &MerchantQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("serviceKey", &self.service_key);
            for (k, v) in query.params() {
                pairs.append_pair(k, &v);
            }
        }
        url
    }

    /// Sends a GET request, requires a 200 status, and parses the body as JSON.
    ///
    /// `context` names the call in deserialization errors; the URL itself is
    /// never used because it carries the service key.
    async fn request_json(&self, url: &Url, context: &str) -> Result<serde_json::Value, YpayError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(YpayError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_str(&body).map_err(|e| YpayError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Classifies a `reqwest` failure. The URL is stripped so the service key
    /// never reaches an error message.
    fn transport_error(&self, err: reqwest::Error) -> YpayError {
        if err.is_timeout() {
            return YpayError::Timeout {
                timeout_secs: self.timeout_secs,
            };
        }

        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        YpayError::Transport(message)
    }

    /// Checks the top-level `resultCode`; anything other than `0` (including
    /// a missing code) is an API failure.
    fn check_result_code(body: &serde_json::Value) -> Result<(), YpayError> {
        let code = body.get("resultCode").and_then(lenient_i64);
        if code == Some(0) {
            return Ok(());
        }

        let message = body
            .get("resultMsg")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("unknown error")
            .to_string();
        Err(YpayError::Api { code, message })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
