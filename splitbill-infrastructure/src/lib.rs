#![warn(clippy::uninlined_format_args)]

pub mod json_store;
pub mod svg_renderer;

pub use json_store::JsonFileStore;
pub use svg_renderer::{PngSummaryRenderer, svg_to_png};
