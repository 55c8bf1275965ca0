//! Catalogue client for the public PokeAPI, over any [`HttpClient`].

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{DexError, DexResult, NetworkError};
use crate::models::wire::{AbilityPayload, DetailsPayload, ListPayload};
use crate::models::{EntryRecord, Page, PageCursor};
use crate::traits::{CatalogueApi, Headers, HttpClient, Response};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default number of entries per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Clone)]
pub struct PokeApiClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    page_size: u32,
    headers: Headers,
}

impl PokeApiClient {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            headers,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the first list page.
    pub fn first_page_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url, self.page_size)
    }

    /// URL of the primary record for a (case-insensitive) name or id.
    pub fn details_url(&self, name_or_id: &str) -> String {
        let key = name_or_id.trim().to_lowercase();
        format!("{}/pokemon/{}", self.base_url, urlencoding::encode(&key))
    }

    async fn fetch(&self, url: &str) -> Result<Response, NetworkError> {
        tracing::debug!(url, "GET");
        self.http
            .get(url, &self.headers)
            .await
            .map_err(|err| NetworkError::from_http(err, url))
    }

    fn decode<T: serde::de::DeserializeOwned>(response: &Response, url: &str) -> DexResult<T> {
        response.json().map_err(|err| {
            NetworkError::InvalidResponse {
                url: url.to_string(),
                message: err.to_string(),
            }
            .into()
        })
    }

    fn ensure_success(response: &Response, url: &str) -> DexResult<()> {
        if response.is_success() {
            Ok(())
        } else {
            Err(NetworkError::HttpStatus {
                status: response.status,
                url: url.to_string(),
            }
            .into())
        }
    }
}

impl std::fmt::Debug for PokeApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeApiClient")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .finish()
    }
}

#[async_trait]
impl CatalogueApi for PokeApiClient {
    async fn list_page(&self, cursor: Option<&PageCursor>) -> DexResult<Page> {
        let url = match cursor {
            Some(cursor) => cursor.as_str().to_string(),
            None => self.first_page_url(),
        };
        let response = self.fetch(&url).await?;
        Self::ensure_success(&response, &url)?;
        let payload: ListPayload = Self::decode(&response, &url)?;
        Ok(payload.into())
    }

    async fn get_details(&self, name_or_id: &str) -> DexResult<EntryRecord> {
        let url = self.details_url(name_or_id);
        let response = self.fetch(&url).await?;
        if response.is_not_found() {
            return Err(DexError::not_found(name_or_id.trim()));
        }
        Self::ensure_success(&response, &url)?;
        let payload: DetailsPayload = Self::decode(&response, &url)?;
        Ok(payload.into())
    }

    async fn get_localized_name(
        &self,
        reference: &str,
        language: &str,
    ) -> DexResult<Option<String>> {
        let response = self.fetch(reference).await?;
        Self::ensure_success(&response, reference)?;
        let payload: AbilityPayload = Self::decode(&response, reference)?;
        Ok(payload.name_in(language).map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::error::ErrorCategory;
    use crate::traits::HttpError;

    fn client(http: &MockHttpClient) -> PokeApiClient {
        PokeApiClient::new(Arc::new(http.clone())).with_base_url("https://api.test/v2/")
    }

    #[test]
    fn test_urls() {
        let http = MockHttpClient::new();
        let api = client(&http).with_page_size(50);
        assert_eq!(api.first_page_url(), "https://api.test/v2/pokemon?limit=50");
        assert_eq!(api.details_url(" Pikachu "), "https://api.test/v2/pokemon/pikachu");
        assert_eq!(api.details_url("mr mime"), "https://api.test/v2/pokemon/mr%20mime");
    }

    #[tokio::test]
    async fn test_list_page_threads_cursor_url() {
        let http = MockHttpClient::new();
        http.respond(
            "https://api.test/v2/pokemon?limit=20",
            200,
            r#"{"results":[{"name":"bulbasaur","url":"https://api.test/v2/pokemon/1/"}],
                "next":"https://api.test/v2/pokemon?offset=20&limit=20"}"#,
        );
        http.respond(
            "https://api.test/v2/pokemon?offset=20&limit=20",
            200,
            r#"{"results":[{"name":"spearow","url":"https://api.test/v2/pokemon/21/"}],"next":null}"#,
        );
        let api = client(&http);

        let first = api.list_page(None).await.unwrap();
        assert_eq!(first.items[0].name, "bulbasaur");
        let second = api.list_page(first.next_cursor.as_ref()).await.unwrap();
        assert_eq!(second.items[0].id(), Some(21));
        assert!(second.next_cursor.is_none());

        assert_eq!(
            http.requested_urls(),
            vec![
                "https://api.test/v2/pokemon?limit=20",
                "https://api.test/v2/pokemon?offset=20&limit=20"
            ]
        );
    }

    #[tokio::test]
    async fn test_details_404_is_not_found() {
        let http = MockHttpClient::new();
        http.respond("https://api.test/v2/pokemon/missingno", 404, "Not Found");
        let err = client(&http).get_details("MissingNo").await.unwrap_err();
        assert_eq!(err, DexError::not_found("MissingNo"));
        let headers = http.last_headers().unwrap();
        assert_eq!(headers.get("Accept").map(String::as_str), Some("application/json"));
    }

    #[tokio::test]
    async fn test_details_500_is_network_error() {
        let http = MockHttpClient::new();
        http.respond("https://api.test/v2/pokemon/25", 503, "");
        let err = client(&http).get_details("25").await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_garbage_body_is_invalid_response() {
        let http = MockHttpClient::new();
        http.respond_to_all(200, "<html>");
        let err = client(&http).list_page(None).await.unwrap_err();
        assert!(matches!(
            err,
            DexError::Network(NetworkError::InvalidResponse { .. })
        ));
    }

    #[tokio::test]
    async fn test_transport_error_keeps_url() {
        let http = MockHttpClient::new();
        http.fail_all(HttpError::Timeout("30s".to_string()));
        let err = client(&http).list_page(None).await.unwrap_err();
        assert_eq!(
            err,
            DexError::Network(NetworkError::Timeout {
                url: "https://api.test/v2/pokemon?limit=20".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_localized_name_lookup() {
        let http = MockHttpClient::new();
        http.respond(
            "https://api.test/v2/ability/9/",
            200,
            r#"{"names":[{"name":"Static","language":{"name":"en"}},
                         {"name":"Estática","language":{"name":"pt"}}]}"#,
        );
        let api = client(&http);
        assert_eq!(
            api.get_localized_name("https://api.test/v2/ability/9/", "pt")
                .await
                .unwrap()
                .as_deref(),
            Some("Estática")
        );
        assert_eq!(
            api.get_localized_name("https://api.test/v2/ability/9/", "ko")
                .await
                .unwrap(),
            None
        );
    }
}
