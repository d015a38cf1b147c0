use std::path::Path;

use tx_ascii::{render_text, tone_map};
use tx_core::config::RenderConfig;
use tx_core::error::RenderError;
use tx_core::palette::{GlyphLut, Palette};
use tx_source::{load_luma, resize_grid, target_height};

/// Convertit une image en ASCII-art.
///
/// Pipeline: decode → BT.709 grayscale → aspect-correct resize to
/// `config.width` columns → contrast/brightness tone mapping → glyph
/// quantization. The returned string has `target_height` rows of exactly
/// `config.width` characters, newline-joined, no trailing newline.
///
/// Validation order is part of the contract: the whole config is checked
/// eagerly, then path existence, then decode. A misconfigured call performs
/// no I/O. No state survives the call; two calls with identical inputs
/// produce byte-identical output.
///
/// # Errors
/// `Config` for invalid width/palette/contrast/brightness, `FileNotFound`
/// for a missing path, `Decode` for an unreadable image.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use tx_app::pipeline::render;
/// use tx_core::config::RenderConfig;
///
/// let art = render(Path::new("photo.jpg"), &RenderConfig::default()).unwrap();
/// println!("{art}");
/// ```
pub fn render(path: &Path, config: &RenderConfig) -> Result<String, RenderError> {
    config.validate()?;
    let palette = Palette::new(&config.palette)?;
    let lut = GlyphLut::new(&palette);

    let native = load_luma(path)?;
    let height = target_height(native.width, native.height, config.width, config.cell_aspect);
    let resized = resize_grid(&native, config.width, height)?;
    let toned = tone_map(&resized, config.contrast, config.brightness);

    Ok(render_text(&toned, &lut))
}
