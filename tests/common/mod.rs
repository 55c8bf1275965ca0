//! Common test utilities for integration tests.
//!
//! Fixtures for catalogue records and payloads, plus builders for an [`App`]
//! wired to mocks or to a local HTTP server.

#![allow(dead_code)]

use std::sync::Arc;

use pokedex::adapters::mock::{InMemoryStore, MockCatalogue};
use pokedex::app::App;
use pokedex::config::AppConfig;
use pokedex::models::{Entry, EntryRecord, ListEntry, NamedResource, Page, PageCursor};
use serde_json::{json, Value};

pub const STATIC_REF: &str = "https://pokeapi.co/api/v2/ability/9/";
pub const LIGHTNING_ROD_REF: &str = "https://pokeapi.co/api/v2/ability/31/";

pub fn list_entry(id: u32, name: &str) -> ListEntry {
    ListEntry::new(name, format!("https://pokeapi.co/api/v2/pokemon/{}/", id))
}

/// A page holding `ids`, named `mon-<id>`.
pub fn page(ids: std::ops::RangeInclusive<u32>, next: Option<&str>) -> Page {
    Page::new(
        ids.map(|id| list_entry(id, &format!("mon-{}", id))).collect(),
        next.map(PageCursor::new),
    )
}

pub fn pikachu_record() -> EntryRecord {
    EntryRecord {
        id: 25,
        name: "pikachu".to_string(),
        abilities: vec![
            NamedResource::new("static", STATIC_REF),
            NamedResource::new("lightning-rod", LIGHTNING_ROD_REF),
        ],
        types: vec!["electric".to_string()],
        image_uri: Some("https://artwork/25.png".to_string()),
    }
}

pub fn entry(id: u32, name: &str) -> Entry {
    Entry {
        id,
        name: name.to_string(),
        ability_names: vec!["overgrow".to_string()],
        types: vec!["grass".to_string()],
        image_uri: None,
    }
}

/// An app over scripted collaborators, in the default (Portuguese) language.
pub async fn mock_app(catalogue: &MockCatalogue, store: &InMemoryStore) -> App {
    App::new(
        AppConfig::new(),
        Arc::new(catalogue.clone()),
        Arc::new(store.clone()),
    )
    .await
}

/// Detail payload in the catalogue's JSON shape, with abilities served from
/// `base`.
pub fn pikachu_json(base: &str) -> Value {
    json!({
        "id": 25,
        "name": "pikachu",
        "abilities": [
            {"ability": {"name": "static", "url": format!("{}/ability/9/", base)}, "slot": 1},
            {"ability": {"name": "lightning-rod", "url": format!("{}/ability/31/", base)}, "slot": 3}
        ],
        "types": [{"slot": 1, "type": {"name": "electric", "url": format!("{}/type/13/", base)}}],
        "sprites": {
            "front_default": "https://sprites/25.png",
            "other": {"official-artwork": {"front_default": "https://artwork/25.png"}}
        }
    })
}

pub fn ability_json(names: &[(&str, &str)]) -> Value {
    json!({
        "names": names
            .iter()
            .map(|(language, name)| json!({"name": name, "language": {"name": language}}))
            .collect::<Vec<_>>()
    })
}
