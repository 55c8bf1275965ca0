//! Details lookups through the real HTTP stack against a local server.

mod common;

use std::sync::Arc;

use common::{ability_json, pikachu_json};
use pokedex::adapters::{PokeApiClient, ReqwestHttpClient};
use pokedex::error::ErrorCategory;
use pokedex::state::{DetailsFetchCoordinator, DetailsState};
use tokio::sync::watch;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn coordinator(server: &MockServer, language: &str) -> DetailsFetchCoordinator {
    let api = PokeApiClient::new(Arc::new(ReqwestHttpClient::new())).with_base_url(server.uri());
    DetailsFetchCoordinator::new(Arc::new(api), language)
}

async fn mount_pikachu(server: &MockServer) {
    let base = server.uri();
    Mock::given(method("GET"))
        .and(path("/pokemon/25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu_json(&base)))
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ability/9/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ability_json(&[("en", "Static"), ("pt", "Estática")])),
        )
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ability/31/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(server)
        .await;
}

/// Every state published until the first one that is no longer loading.
async fn record_until_settled(mut observer: watch::Receiver<DetailsState>) -> Vec<DetailsState> {
    let mut published = Vec::new();
    while observer.changed().await.is_ok() {
        let state = observer.borrow_and_update().clone();
        let settled = !state.loading;
        published.push(state);
        if settled {
            break;
        }
    }
    published
}

#[tokio::test]
async fn test_lookup_by_number_localizes_and_falls_back() {
    let server = MockServer::start().await;
    mount_pikachu(&server).await;
    let details = coordinator(&server, "pt");
    let mut observer = details.subscribe();
    let recorder = tokio::spawn(record_until_settled(details.subscribe()));

    let entry = details.fetch_details("25").await.unwrap();

    let published = recorder.await.unwrap();
    let loading: Vec<bool> = published.iter().map(|state| state.loading).collect();
    assert_eq!(loading, vec![true, false]);
    assert!(published[0].entry.is_none());
    assert_eq!(published[1].entry.as_ref(), Some(&entry));

    assert_eq!(entry.id, 25);
    assert_eq!(entry.name, "pikachu");
    assert_eq!(entry.ability_names, vec!["Estática", "lightning-rod"]);
    assert_eq!(entry.types, vec!["electric"]);
    assert_eq!(entry.image_uri.as_deref(), Some("https://artwork/25.png"));

    assert!(observer.has_changed().unwrap());
    let state = observer.borrow_and_update().clone();
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.key.as_deref(), Some("25"));
    assert_eq!(state.entry, Some(entry));
}

#[tokio::test]
async fn test_language_without_translation_uses_default_names() {
    let server = MockServer::start().await;
    mount_pikachu(&server).await;
    let details = coordinator(&server, "ja");

    let entry = details.fetch_details(" 25 ").await.unwrap();

    assert_eq!(entry.ability_names, vec!["static", "lightning-rod"]);
}

#[tokio::test]
async fn test_unknown_name_publishes_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/missingno"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;
    let details = coordinator(&server, "pt");

    let err = details.fetch_details("MissingNo").await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::NotFound);
    let state = details.state();
    assert!(!state.loading);
    assert!(state.entry.is_none());
    assert!(state.error.is_some());
}

#[tokio::test]
async fn test_server_error_on_primary_is_retryable_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/25"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let details = coordinator(&server, "pt");

    let err = details.fetch_details("25").await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Network);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_blank_query_issues_no_request() {
    let server = MockServer::start().await;
    let details = coordinator(&server, "pt");

    let err = details.fetch_details("   ").await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Client);
    assert_eq!(details.state().key, None);
    assert!(server.received_requests().await.unwrap().is_empty());
}
