//! Configuration types
//!
//! Board-agnostic face configuration stored as postcard binary data.

pub mod types;

pub use types::*;
