//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryStore`] - key-value store with failure injection
//! - [`MockCatalogue`] - scripted catalogue with gated calls
//! - [`Gate`] - latch for holding a mocked call mid-flight

pub mod catalogue;
pub mod gate;
pub mod http;
pub mod store;

pub use catalogue::MockCatalogue;
pub use gate::Gate;
pub use http::MockHttpClient;
pub use store::InMemoryStore;
