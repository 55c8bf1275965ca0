//! Pokedex - synchronized client state for browsing a public creature catalogue
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod theme;
pub mod traits;
