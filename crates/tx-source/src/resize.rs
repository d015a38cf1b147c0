use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer as FirResizer};
use tx_core::error::RenderError;
use tx_core::grid::LumaGrid;

/// Hauteur de la grille de caractères pour une largeur cible donnée.
///
/// `round(target_width · native_height/native_width · cell_aspect)`, half
/// away from zero, floored at 1 so extreme aspect ratios still yield a row.
///
/// # Example
/// ```
/// use tx_source::resize::target_height;
/// // Source 2:1, largeur 100, correction 0.55 → round(27.5) = 28.
/// assert_eq!(target_height(200, 100, 100, 0.55), 28);
/// ```
#[must_use]
pub fn target_height(
    native_width: u32,
    native_height: u32,
    target_width: u32,
    cell_aspect: f32,
) -> u32 {
    let ratio = native_height as f32 / native_width as f32;
    let height = (target_width as f32 * ratio * cell_aspect).round() as u32;
    height.max(1)
}

/// Resizer réutilisable wrappant fast_image_resize, un canal de luminance.
///
/// # Example
/// ```
/// use tx_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source; fast_image_resize wants `&mut` on it.
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new(),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// Deterministic for fixed inputs; samples stay in [0, 255] because the
    /// destination stores `u8`.
    ///
    /// # Errors
    /// Returns `InvalidDimensions` if either grid cannot be handed to the
    /// resampler.
    ///
    /// # Example
    /// ```
    /// use tx_core::grid::LumaGrid;
    /// use tx_source::resize::Resizer;
    /// let mut r = Resizer::new();
    /// let src = LumaGrid::filled(100, 100, 0);
    /// let mut dst = LumaGrid::filled(50, 50, 0);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &LumaGrid, dst: &mut LumaGrid) -> Result<(), RenderError> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image = Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8)
            .map_err(|_| RenderError::InvalidDimensions {
                width: src.width,
                height: src.height,
            })?;

        let mut dst_image = Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8)
            .map_err(|_| RenderError::InvalidDimensions {
                width: dst.width,
                height: dst.height,
            })?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|_| RenderError::InvalidDimensions {
                width: dst.width,
                height: dst.height,
            })?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenance one-shot : nouvelle grille aux dimensions demandées.
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use tx_core::grid::LumaGrid;
/// use tx_source::resize::resize_grid;
/// let src = LumaGrid::filled(100, 100, 0);
/// let dst = resize_grid(&src, 50, 28).unwrap();
/// assert_eq!((dst.width, dst.height), (50, 28));
/// ```
pub fn resize_grid(src: &LumaGrid, width: u32, height: u32) -> Result<LumaGrid, RenderError> {
    let mut dst = LumaGrid::filled(width, height, 0);
    let mut resizer = Resizer::new();
    resizer.resize_into(src, &mut dst)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_scenario_is_pinned() {
        // 200×100 source at width 100: 100 · 0.5 · 0.55 = 27.5 → 28.
        assert_eq!(target_height(200, 100, 100, 0.55), 28);
    }

    #[test]
    fn square_source_default_correction() {
        assert_eq!(target_height(100, 100, 100, 0.55), 55);
        assert_eq!(target_height(640, 480, 80, 0.55), 33);
    }

    #[test]
    fn height_is_floored_at_one() {
        assert_eq!(target_height(1000, 1, 50, 0.55), 1);
        assert_eq!(target_height(10_000, 2, 10, 0.55), 1);
    }

    #[test]
    fn uniform_grid_stays_uniform_at_extremes() {
        for value in [0u8, 255] {
            let src = LumaGrid::filled(64, 64, value);
            let dst = resize_grid(&src, 16, 9).unwrap();
            assert!(dst.data.iter().all(|&v| v == value));
        }
    }

    #[test]
    fn same_dimensions_copy_through() {
        let src = LumaGrid::from_raw(2, 2, vec![10, 20, 30, 40]);
        let dst = resize_grid(&src, 2, 2).unwrap();
        assert_eq!(dst.data, src.data);
    }

    #[test]
    fn output_has_requested_shape() {
        let src = LumaGrid::filled(200, 100, 128);
        let dst = resize_grid(&src, 100, 28).unwrap();
        assert_eq!((dst.width, dst.height), (100, 28));
        assert_eq!(dst.data.len(), 100 * 28);
    }

    #[test]
    fn resize_is_deterministic() {
        let data: Vec<u8> = (0..64 * 64).map(|i| (i % 251) as u8).collect();
        let src = LumaGrid::from_raw(64, 64, data);
        let a = resize_grid(&src, 31, 17).unwrap();
        let b = resize_grid(&src, 31, 17).unwrap();
        assert_eq!(a.data, b.data);
    }
}
