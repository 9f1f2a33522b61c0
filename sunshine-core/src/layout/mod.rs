//! Face layout
//!
//! Turns a display state snapshot into a positioned, coloured scene. No
//! drawing happens here; the display crate paints the result.

pub mod compose;
pub mod scene;

pub use compose::compose;
pub use scene::{IconOp, LineOp, Scene, TextOp, WeatherRegion, TEXT_LEN};
