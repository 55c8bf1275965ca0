//! Error handling for the catalogue state layer.
//!
//! | Category | Source | Surfaced |
//! |----------|--------|----------|
//! | Network | list page or detail fetch | yes, with retry |
//! | NotFound | primary detail lookup | yes, distinct message |
//! | Storage | key-value read/write | no, recovered locally |
//! | Parse | undecodable payload | yes |
//!
//! Secondary (per-ability) lookup failures never become errors at all; the
//! details coordinator substitutes the default name.

mod category;
mod dex_error;
mod network;
mod storage;

pub use category::ErrorCategory;
pub use dex_error::DexError;
pub use network::NetworkError;
pub use storage::StorageError;

/// Type alias for Results using DexError.
pub type DexResult<T> = Result<T, DexError>;
