/*
[INPUT]:  HTTP configuration (base URL, timeout, credentials, diagnostic sink)
[OUTPUT]: Signed requests and parsed JSON responses
[POS]:    HTTP layer - core client implementation
[UPDATE]: When changing signing flow, headers, or transport behavior
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use tracing::debug;

use crate::diag::{DiagnosticEvent, DiagnosticSink};
use crate::http::{AdapterError, QueryParams, RequestSigner, Result};

/// Testnet base URL for Binance Futures (USDT-M)
const DEFAULT_BASE_URL: &str = "https://testnet.binancefuture.com";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_RECV_WINDOW: u64 = 5000;
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub recv_window: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            recv_window: DEFAULT_RECV_WINDOW,
        }
    }
}

/// API credentials for signed requests.
///
/// The key is transmitted as a request header; the secret is only ever used
/// as HMAC key material.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    /// Create credentials, rejecting empty key or secret at construction
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(AdapterError::Config(
                "API key and secret must both be provided".to_string(),
            ));
        }
        Ok(Self {
            api_key,
            api_secret,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Signed HTTP client for the futures REST API
pub struct FuturesClient {
    http: Client,
    base_url: Url,
    recv_window: u64,
    signer: RequestSigner,
    sink: Arc<dyn DiagnosticSink>,
}

impl FuturesClient {
    /// Create a new client.
    ///
    /// The API key is installed as a default header on the underlying HTTP
    /// session and marked sensitive so it never appears in debug output.
    pub fn new(
        credentials: Credentials,
        config: ClientConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self> {
        let signer = RequestSigner::new(&credentials.api_secret)?;

        let mut api_key = HeaderValue::from_str(&credentials.api_key).map_err(|_| {
            AdapterError::Config("API key contains invalid header characters".to_string())
        })?;
        api_key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, api_key);

        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| AdapterError::Config(format!("failed to build HTTP client: {e}")))?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/'))
            .map_err(|e| AdapterError::Config(format!("invalid base URL: {e}")))?;

        Ok(Self {
            http,
            base_url,
            recv_window: config.recv_window,
            signer,
            sink,
        })
    }

    /// Send a signed request.
    ///
    /// Injects `timestamp` and `recvWindow`, signs the canonical query
    /// string, and appends `signature` as the last parameter. All parameters
    /// travel in the URL query string, even for POST. The diagnostic sink
    /// receives the request line without the signature value.
    pub async fn signed_send(
        &self,
        method: Method,
        path: &str,
        mut params: QueryParams,
    ) -> Result<Value> {
        params.push_u64("timestamp", Utc::now().timestamp_millis() as u64);
        params.push_u64("recvWindow", self.recv_window);

        let canonical = params.encode();
        let signature = self.signer.sign(&canonical);

        self.sink
            .record(DiagnosticEvent::request(method.as_str(), path, &canonical));
        debug!(%method, path, query = %canonical, "sending signed request");

        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| AdapterError::Config(format!("invalid request path {path}: {e}")))?;
        url.set_query(Some(&format!("{canonical}&signature={signature}")));

        let response = self
            .http
            .request(method, url)
            .send()
            .await
            .map_err(AdapterError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(AdapterError::Transport)?;

        self.sink
            .record(DiagnosticEvent::response(status.as_u16(), &body));
        debug!(status = status.as_u16(), body = %body, "received response");

        if !status.is_success() {
            return Err(AdapterError::RequestFailed { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl fmt::Debug for FuturesClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuturesClient")
            .field("base_url", &self.base_url.as_str())
            .field("recv_window", &self.recv_window)
            .finish_non_exhaustive()
    }
}
