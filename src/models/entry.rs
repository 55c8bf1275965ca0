use serde::{Deserialize, Serialize};

/// Base URL of the official artwork sprites, keyed by numeric id.
const ARTWORK_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// A lightweight pointer into the remote catalogue, as returned by a list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub name: String,
    /// Resource URI; its last path segment is the numeric id.
    #[serde(rename = "url")]
    pub reference: String,
}

impl ListEntry {
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }

    /// Numeric id encoded in the last non-empty path segment of `reference`.
    pub fn id(&self) -> Option<u32> {
        id_from_reference(&self.reference)
    }

    /// Official artwork URI for this entry, when the id can be recovered.
    pub fn artwork_uri(&self) -> Option<String> {
        self.id()
            .map(|id| format!("{}/{}.png", ARTWORK_BASE_URL, id))
    }
}

/// Parse the trailing numeric path segment of a resource URI.
///
/// `https://pokeapi.co/api/v2/pokemon/25/` and `.../pokemon/25` both yield 25.
pub fn id_from_reference(reference: &str) -> Option<u32> {
    reference
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

/// A named sub-resource of a detail record (an ability, for instance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(rename = "url")]
    pub reference: String,
}

impl NamedResource {
    pub fn new(name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
        }
    }
}

/// Primary record returned by a detail lookup, before ability names are
/// localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRecord {
    pub id: u32,
    pub name: String,
    pub abilities: Vec<NamedResource>,
    pub types: Vec<String>,
    pub image_uri: Option<String>,
}

impl EntryRecord {
    /// Merge resolved ability display names into a full entry.
    ///
    /// `ability_names` is expected in the same order as `self.abilities`.
    pub fn into_entry(self, ability_names: Vec<String>) -> Entry {
        Entry {
            id: self.id,
            name: self.name,
            ability_names,
            types: self.types,
            image_uri: self.image_uri,
        }
    }
}

/// Full detail record for one catalogue item. Immutable once built.
///
/// `id` is the only identity key; names are not reliable identities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub ability_names: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub image_uri: Option<String>,
}

impl Entry {
    /// Rebuild the `/pokemon/{id}/` resource URI under `base_url`.
    pub fn reference(&self, base_url: &str) -> String {
        format!("{}/pokemon/{}/", base_url.trim_end_matches('/'), self.id)
    }

    /// The list pointer for this entry, as shown in the favorites grid.
    pub fn to_list_entry(&self, base_url: &str) -> ListEntry {
        ListEntry::new(self.name.clone(), self.reference(base_url))
    }

    /// First type, used to pick the details background.
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}
