use tx_core::grid::LumaGrid;

/// Apply contrast and brightness to a single luminance sample.
///
/// Contrast scales the deviation from mid-gray (128); brightness scales the
/// re-centered midpoint, so 1.0/1.0 is an exact identity. Clamped to
/// [0, 255], then truncated toward zero.
#[inline(always)]
#[must_use]
pub fn adjust(v: u8, contrast: f32, brightness: f32) -> u8 {
    let adjusted = (f32::from(v) - 128.0) * contrast + 128.0 * brightness;
    adjusted.clamp(0.0, 255.0) as u8
}

/// Grille ajustée, même forme que l'entrée.
///
/// Positivity of `contrast`/`brightness` is enforced upstream by
/// `RenderConfig::validate` before any sample is touched.
///
/// # Example
/// ```
/// use tx_core::grid::LumaGrid;
/// use tx_ascii::tone::tone_map;
/// let grid = LumaGrid::filled(4, 2, 100);
/// let toned = tone_map(&grid, 2.0, 1.0);
/// assert_eq!(toned.get(0, 0), 72);
/// ```
#[must_use]
pub fn tone_map(grid: &LumaGrid, contrast: f32, brightness: f32) -> LumaGrid {
    let data = grid
        .data
        .iter()
        .map(|&v| adjust(v, contrast, brightness))
        .collect();
    LumaGrid::from_raw(grid.width, grid.height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_settings_are_identity() {
        for v in 0..=255u8 {
            assert_eq!(adjust(v, 1.0, 1.0), v);
        }
    }

    #[test]
    fn contrast_expands_around_midgray() {
        assert_eq!(adjust(128, 2.0, 1.0), 128);
        assert_eq!(adjust(100, 2.0, 1.0), 72);
        assert_eq!(adjust(156, 2.0, 1.0), 184);
    }

    #[test]
    fn clamps_at_both_ends() {
        assert_eq!(adjust(10, 5.0, 1.0), 0);
        assert_eq!(adjust(250, 5.0, 1.0), 255);
    }

    #[test]
    fn brightness_scales_the_midpoint() {
        assert_eq!(adjust(128, 1.0, 1.5), 192);
        assert_eq!(adjust(128, 1.0, 0.5), 64);
    }

    #[test]
    fn fractional_results_truncate_toward_zero() {
        // (101 − 128) · 0.5 + 128 = 114.5 → 114.
        assert_eq!(adjust(101, 0.5, 1.0), 114);
    }

    #[test]
    fn tone_map_preserves_shape() {
        let grid = LumaGrid::filled(7, 3, 200);
        let toned = tone_map(&grid, 1.3, 0.9);
        assert_eq!((toned.width, toned.height), (7, 3));
        assert_eq!(toned.data.len(), 21);
    }
}
