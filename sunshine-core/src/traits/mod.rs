//! Rendering abstraction traits
//!
//! These traits define the interface between layout composition and the
//! crate that owns fonts and icon art.

pub mod render;

pub use render::{IconSource, TextMeasure, TextRole};
