//! Production transport over reqwest.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Sent with every request built by [`ReqwestHttpClient::with_timeout`].
pub const USER_AGENT: &str = concat!("pokedex/", env!("CARGO_PKG_VERSION"));

/// [`HttpClient`] backed by a shared `reqwest::Client`.
///
/// ```ignore
/// use pokedex::adapters::ReqwestHttpClient;
/// use pokedex::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::with_timeout(Duration::from_secs(30))?;
/// let response = client.get("https://pokeapi.co/api/v2/pokemon/25", &Headers::new()).await?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Client with reqwest defaults and no timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Client whose requests give up after `timeout`, connect phase included.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(message)
        } else if err.is_builder() {
            HttpError::InvalidUrl(message)
        } else if err.is_body() || err.is_decode() {
            HttpError::Io(message)
        } else {
            HttpError::Other(message)
        }
    }
}

fn collect_headers(map: &reqwest::header::HeaderMap) -> Headers {
    map.iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect()
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| {
                request.header(name.as_str(), value.as_str())
            });

        let response = request.send().await?;
        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());
        let body = response.bytes().await?;
        tracing::trace!(url, status, bytes = body.len(), "response received");

        Ok(Response::with_headers(status, headers, body))
    }
}
