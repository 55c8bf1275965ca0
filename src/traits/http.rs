//! Transport seam under the catalogue client.
//!
//! The catalogue is read-only, so a GET is all that is needed. Non-2xx
//! statuses come back as ordinary [`Response`]s; only failures to get any
//! answer at all are [`HttpError`]s.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Header name to value.
pub type Headers = HashMap<String, String>;

#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self::with_headers(status, Headers::new(), body)
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    #[error("could not connect: {0}")]
    ConnectionFailed(String),
    #[error("timed out: {0}")]
    Timeout(String),
    /// The status line arrived but the body could not be read.
    #[error("body read failed: {0}")]
    Io(String),
    #[error("bad url: {0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Other(String),
}

/// GET-only HTTP client.
///
/// Implemented by [`ReqwestHttpClient`](crate::adapters::ReqwestHttpClient)
/// and by [`MockHttpClient`](crate::adapters::mock::MockHttpClient) in tests.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(Response::new(200, Bytes::new()).is_success());
        assert!(Response::new(204, Bytes::new()).is_success());
        assert!(!Response::new(301, Bytes::new()).is_success());

        let missing = Response::new(404, Bytes::from("Not Found"));
        assert!(!missing.is_success());
        assert!(missing.is_not_found());
        assert!(!Response::new(500, Bytes::new()).is_not_found());
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let mut headers = Headers::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        let response = Response::with_headers(200, headers, Bytes::from("{}"));
        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("etag"), None);
    }

    #[test]
    fn test_json_body() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Named {
            name: String,
        }

        let response = Response::new(200, Bytes::from(r#"{"name":"pikachu","id":25}"#));
        let named: Named = response.json().unwrap();
        assert_eq!(named.name, "pikachu");

        let broken = Response::new(200, Bytes::from("<html>"));
        assert!(broken.json::<Named>().is_err());
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "could not connect: refused"
        );
        assert_eq!(HttpError::Timeout("30s".to_string()).to_string(), "timed out: 30s");
    }
}
