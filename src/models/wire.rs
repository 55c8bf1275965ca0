//! Remote payload shapes.
//!
//! Only the fields the state layer consumes are declared; everything else in
//! the catalogue's JSON is ignored.

use serde::Deserialize;

use super::entry::{EntryRecord, ListEntry, NamedResource};
use super::page::{Page, PageCursor};

#[derive(Debug, Deserialize)]
pub struct ListPayload {
    #[serde(default)]
    pub results: Vec<ListEntry>,
    pub next: Option<String>,
}

impl From<ListPayload> for Page {
    fn from(payload: ListPayload) -> Self {
        Page::new(payload.results, payload.next.map(PageCursor::new))
    }
}

#[derive(Debug, Deserialize)]
pub struct DetailsPayload {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Option<Sprites>,
}

#[derive(Debug, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: TypeName,
}

#[derive(Debug, Deserialize)]
pub struct TypeName {
    pub name: String,
}

/// Image fields; any level may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl From<DetailsPayload> for EntryRecord {
    fn from(payload: DetailsPayload) -> Self {
        let sprites = payload.sprites.unwrap_or_default();
        let image_uri = sprites
            .other
            .and_then(|other| other.official_artwork)
            .and_then(|artwork| artwork.front_default)
            .or(sprites.front_default);
        EntryRecord {
            id: payload.id,
            name: payload.name,
            abilities: payload.abilities.into_iter().map(|slot| slot.ability).collect(),
            types: payload.types.into_iter().map(|slot| slot.kind.name).collect(),
            image_uri,
        }
    }
}

/// An ability resource; only its per-language names are read.
#[derive(Debug, Deserialize)]
pub struct AbilityPayload {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
}

#[derive(Debug, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: LanguageRef,
}

#[derive(Debug, Deserialize)]
pub struct LanguageRef {
    pub name: String,
}

impl AbilityPayload {
    /// Name for `language`, if the resource carries one.
    pub fn name_in(&self, language: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.name.as_str())
    }
}
