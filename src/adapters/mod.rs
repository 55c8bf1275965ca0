//! Concrete implementations of the trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`PokeApiClient`] - catalogue client over any [`HttpClient`](crate::traits::HttpClient)
//! - [`FileKeyValueStore`] - one file per key under the data directory
//!
//! The [`mock`] submodule provides test doubles.

pub mod file_store;
pub mod mock;
pub mod pokeapi;
pub mod reqwest_http;

pub use file_store::FileKeyValueStore;
pub use pokeapi::{PokeApiClient, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use reqwest_http::ReqwestHttpClient;
