//! HTTP client for json-server style list endpoints

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use reqwest::header::HeaderMap;
use url::Url;

use crate::controller::FetchRequest;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Row;
use crate::page::FetchResult;
use crate::query::QueryParams;
use crate::source::RowSource;

/// Response header carrying the total number of matching records.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Client for a REST list resource such as `https://host/posts`.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks.
///
/// # Example
///
/// ```ignore
/// use listview_lib::{ListClient, ListConfig, ListView};
///
/// let client = ListClient::builder()
///     .url("https://jsonplaceholder.typicode.com/posts")
///     .build()?;
///
/// let view = ListView::spawn(client, ListConfig::default());
/// view.search_changed("dolor")?;
/// ```
#[derive(Clone)]
pub struct ListClient {
    inner: Arc<ListClientInner>,
}

struct ListClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ListClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ListClientBuilder<Missing> {
        ListClientBuilder::new()
    }

    /// Returns the list resource URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the full request URL for the given parameters.
    pub fn request_url(&self, params: &QueryParams) -> Url {
        let mut url = self.inner.base_url.clone();
        params.apply_to(&mut url);
        url
    }

    /// Fetches one page.
    ///
    /// Non-2xx statuses become [`ApiError::Http`]. If the total count header is
    /// missing or malformed, the total falls back to the number of rows up to
    /// and including this page.
    pub async fn fetch_page(&self, request: &FetchRequest) -> Result<FetchResult, Error> {
        let url = self.request_url(request.params());
        log::debug!("GET {} (request #{})", url, request.seq());

        let mut http_request = self
            .inner
            .http_client
            .get(url)
            .header(ACCEPT, "application/json");

        if let Some(timeout) = self.inner.timeout {
            http_request = http_request.timeout(timeout);
        }

        let response = http_request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status.as_u16(), body).into());
        }

        let total_count = parse_total_count(response.headers());
        let body = response.text().await.map_err(ApiError::from)?;
        let rows: Vec<Row> = serde_json::from_str(&body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body.as_str()))?;

        let total_count = total_count.unwrap_or_else(|| {
            let fallback = request.state().pagination().offset().saturating_add(rows.len());
            log::warn!(
                "Missing or invalid {} header, assuming {} records",
                TOTAL_COUNT_HEADER,
                fallback
            );
            fallback
        });

        Ok(FetchResult::new(rows, total_count))
    }
}

#[async_trait]
impl RowSource for ListClient {
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResult, Error> {
        self.fetch_page(request).await
    }
}

/// Reads the total count header as a non-negative integer.
pub fn parse_total_count(headers: &HeaderMap) -> Option<usize> {
    headers
        .get(TOTAL_COUNT_HEADER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`ListClient`].
///
/// Uses the typestate pattern so `build` is only available once the resource
/// URL has been set.
///
/// # Example
///
/// ```ignore
/// let client = ListClient::builder()
///     .url("http://localhost:3000/posts")
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub struct ListClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl ListClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the list resource URL.
    pub fn url(self, url: impl Into<String>) -> ListClientBuilder<Set<String>> {
        ListClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for ListClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ListClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl ListClientBuilder<Set<String>> {
    /// Builds the [`ListClient`].
    pub fn build(self) -> Result<ListClient, Error> {
        let base_url = Url::parse(&self.url.0)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.url.0, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(self.url.0).into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(ListClient {
            inner: Arc::new(ListClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;
    use crate::query::encode;
    use crate::state::ViewState;

    #[test]
    fn test_request_url() {
        let client = ListClient::builder()
            .url("http://localhost:3000/posts")
            .build()
            .unwrap();
        let url = client.request_url(&encode(&ViewState::default().with_search("eum")));
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/posts?_limit=10&_page=1&q=eum&title_like="
        );
    }

    #[test]
    fn test_invalid_url() {
        let err = ListClient::builder().url("not a url").build().err().unwrap();
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));

        let err = ListClient::builder().url("mailto:a@b.c").build().err().unwrap();
        assert!(matches!(err, Error::Api(ApiError::InvalidUrl(_))));
    }

    #[test]
    fn test_parse_total_count() {
        let mut headers = HeaderMap::new();
        assert_eq!(parse_total_count(&headers), None);

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("95"));
        assert_eq!(parse_total_count(&headers), Some(95));

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("-1"));
        assert_eq!(parse_total_count(&headers), None);

        headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from_static("lots"));
        assert_eq!(parse_total_count(&headers), None);
    }
}
