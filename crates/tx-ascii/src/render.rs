use tx_core::grid::LumaGrid;
use tx_core::palette::GlyphLut;

/// Assemble la grille de luminance en texte, un glyphe par échantillon.
///
/// Rows are concatenated left to right with no separator and joined top to
/// bottom by a single `'\n'`. No trailing newline after the last row.
///
/// # Example
/// ```
/// use tx_core::grid::LumaGrid;
/// use tx_core::palette::{GlyphLut, Palette};
/// use tx_ascii::render::render_text;
/// let palette = Palette::new("@ ").unwrap();
/// let lut = GlyphLut::new(&palette);
/// let grid = LumaGrid::filled(3, 2, 0);
/// assert_eq!(render_text(&grid, &lut), "@@@\n@@@");
/// ```
#[must_use]
pub fn render_text(grid: &LumaGrid, lut: &GlyphLut) -> String {
    let width = grid.width as usize;
    let height = grid.height as usize;
    // Glyphs may be multi-byte; reserve for the common ASCII case.
    let mut out = String::with_capacity(height * (width + 1));

    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        for &v in row {
            out.push(lut.map(v));
        }
    }

    out
}
