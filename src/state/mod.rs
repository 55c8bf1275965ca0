//! Client-side synchronized state.
//!
//! - [`FavoritesStore`]: persisted favorites with serialized, coalesced writes
//! - [`PaginatedListCache`]: cursor-driven list accumulation, one fetch at a time
//! - [`DetailsFetchCoordinator`]: detail fetch with localized-name fan-out/fan-in
//!
//! Each store keeps its state in a `tokio::sync::watch` channel: mutations
//! publish a new snapshot and `subscribe()` hands out receivers. State is never
//! borrowed across an await, so ordering is decided by where each operation
//! resumes, not by locks.

pub mod details;
pub mod favorites;
pub mod pagination;

pub use details::{DetailsFetchCoordinator, DetailsState};
pub use favorites::{FavoriteSet, FavoritesStore, FAVORITES_KEY};
pub use pagination::{FetchOutcome, ListPhase, ListState, PaginatedListCache};
