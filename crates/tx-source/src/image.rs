use std::io::ErrorKind;
use std::path::Path;

use image::ImageError;
use tx_core::error::RenderError;
use tx_core::grid::{LumaGrid, bt709_luma};

/// Charge une image et la convertit en grille de luminance BT.709.
///
/// The decoder handle lives only inside this call; nothing is retained
/// after return, on success or failure.
///
/// # Errors
/// `FileNotFound` if the path does not exist; `Decode` if the file exists
/// but cannot be interpreted as a raster image.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use tx_source::image::load_luma;
/// let grid = load_luma(Path::new("photo.png")).unwrap();
/// assert!(grid.width > 0);
/// ```
pub fn load_luma(path: &Path) -> Result<LumaGrid, RenderError> {
    if !path.exists() {
        return Err(RenderError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| match e {
        // The file can still vanish between the existence check and open.
        ImageError::IoError(ref io) if io.kind() == ErrorKind::NotFound => {
            RenderError::FileNotFound {
                path: path.to_path_buf(),
            }
        }
        other => RenderError::Decode {
            path: path.to_path_buf(),
            detail: other.to_string(),
        },
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = Vec::with_capacity((width as usize) * (height as usize));
    for px in rgba.pixels() {
        let [r, g, b, _] = px.0;
        data.push(bt709_luma(r, g, b));
    }

    Ok(LumaGrid::from_raw(width, height, data))
}
