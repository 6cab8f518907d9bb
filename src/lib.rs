//! Garaged - a tiny HTTP daemon for a garage door relay
//!
//! Persists a single boolean "door open/closed" flag to non-volatile
//! storage and exposes it over a small authenticated HTTP surface:
//! - secret-gated commands that flip the flag and drive the relay,
//! - a plain-text status projection,
//! - the embedded control panel page and its assets.

pub mod api;
pub mod assets;
pub mod config;
pub mod error;
pub mod relay;
pub mod storage;
pub mod store;
pub mod types;

pub use error::{Error, Result};
