/// Image acquisition for textel: decode to a luminance grid, resample to
/// the character grid.

pub mod image;
pub mod resize;

pub use image::load_luma;
pub use resize::{Resizer, resize_grid, target_height};
