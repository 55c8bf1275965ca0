//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET transport
//! - [`KeyValueStore`] - persistence collaborator for the favorites blob
//! - [`CatalogueApi`] - remote list, detail and localized-name lookups

pub mod catalogue;
pub mod http;
pub mod storage;

pub use catalogue::CatalogueApi;
pub use http::{Headers, HttpClient, HttpError, Response};
pub use storage::KeyValueStore;
