//! Remote catalogue trait abstraction.

use async_trait::async_trait;

use crate::error::DexResult;
use crate::models::{EntryRecord, Page, PageCursor};

/// The remote collaborator consumed by the state layer.
///
/// Implementations are [`PokeApiClient`](crate::adapters::PokeApiClient) and
/// [`MockCatalogue`](crate::adapters::mock::MockCatalogue) for tests.
#[async_trait]
pub trait CatalogueApi: Send + Sync {
    /// Fetch one page. `None` requests the first page.
    ///
    /// Cursors partition the listing disjointly, so consecutive pages never
    /// overlap.
    async fn list_page(&self, cursor: Option<&PageCursor>) -> DexResult<Page>;

    /// Fetch the primary record for a name or numeric id.
    ///
    /// An unknown identifier yields [`DexError::NotFound`](crate::error::DexError::NotFound).
    async fn get_details(&self, name_or_id: &str) -> DexResult<EntryRecord>;

    /// Resolve the display name of `reference` in `language`.
    ///
    /// `Ok(None)` means the resource has no name in that language.
    async fn get_localized_name(&self, reference: &str, language: &str)
        -> DexResult<Option<String>>;
}
