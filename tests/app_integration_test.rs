//! The production wiring end to end: reqwest against a local server and the
//! file store in a temp directory.

mod common;

use common::{ability_json, pikachu_json};
use pokedex::app::App;
use pokedex::cli::{run_command, CliCommand};
use pokedex::config::AppConfig;
use pokedex::state::FetchOutcome;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_catalogue(server: &MockServer) {
    let base = server.uri();
    // Continuation links are followed verbatim, whatever their shape.
    Mock::given(method("GET"))
        .and(path("/pokemon/continued"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": null,
            "results": [{"name": "venusaur", "url": format!("{}/pokemon/3/", base)}]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 3,
            "next": format!("{}/pokemon/continued?offset=2&limit=2", base),
            "results": [
                {"name": "bulbasaur", "url": format!("{}/pokemon/1/", base)},
                {"name": "ivysaur", "url": format!("{}/pokemon/2/", base)}
            ]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pikachu_json(&base)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ability/9/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ability_json(&[("pt", "Estática")])),
        )
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ability/31/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(ability_json(&[("pt", "Para-raios")])),
        )
        .mount(server)
        .await;
}

fn config(server: &MockServer, dir: &TempDir) -> AppConfig {
    AppConfig::new()
        .with_api_base_url(server.uri())
        .with_page_size(2)
        .with_data_dir(dir.path())
}

async fn run(app: &App, command: CliCommand) -> String {
    let mut out = Vec::new();
    run_command(app, command, &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_list_follows_next_links() {
    let server = MockServer::start().await;
    mount_catalogue(&server).await;
    let dir = TempDir::new().unwrap();
    let app = App::from_config(config(&server, &dir)).await.unwrap();

    let cache = app.list_cache();
    assert_eq!(cache.fetch_next().await.unwrap(), FetchOutcome::Appended(2));
    assert_eq!(cache.fetch_next().await.unwrap(), FetchOutcome::Appended(1));
    assert_eq!(cache.fetch_next().await.unwrap(), FetchOutcome::Exhausted);

    let names: Vec<String> = cache.state().items.into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
}

#[tokio::test]
async fn test_show_and_favorite_survive_restart() {
    let server = MockServer::start().await;
    mount_catalogue(&server).await;
    let dir = TempDir::new().unwrap();

    {
        let app = App::from_config(config(&server, &dir)).await.unwrap();
        let shown = run(&app, CliCommand::Show { query: "Pikachu".to_string() }).await;
        assert!(shown.contains("abilities: Estática, Para-raios"));

        let added = run(&app, CliCommand::FavAdd { query: "pikachu".to_string() }).await;
        assert_eq!(added, "added #025 Pikachu\n");
        app.favorites.flush().await;
    }

    let app = App::from_config(config(&server, &dir)).await.unwrap();
    assert!(app.favorites.is_favorite(25));
    let listed = run(&app, CliCommand::FavList).await;
    assert_eq!(listed, " #025  Pikachu  [electric]\n");

    let shown = run(&app, CliCommand::Show { query: "pikachu".to_string() }).await;
    assert!(shown.starts_with("#025 Pikachu *\n"));
}

#[tokio::test]
async fn test_missing_data_dir_is_storage_error() {
    let mut config = AppConfig::new();
    config.data_dir = None;

    let err = App::from_config(config).await.unwrap_err();

    assert_eq!(err.error_code(), "E_STORE_NODIR");
}
