/// Configuration, types, and shared structures for textel.
///
/// This crate contains the error taxonomy, render configuration, glyph
/// palette, and luminance grid shared across the textel workspace.

pub mod config;
pub mod error;
pub mod grid;
pub mod palette;

pub use config::RenderConfig;
pub use error::RenderError;
pub use grid::LumaGrid;
pub use palette::{GlyphLut, Palette};
