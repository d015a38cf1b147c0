use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the rendering pipeline.
///
/// Every failure is terminal for the call that produced it; nothing is
/// retried. `Config` is raised before any I/O, `FileNotFound` before any
/// decode attempt.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Invalid configuration value (width, palette, contrast, brightness).
    #[error("configuration invalide : {0}")]
    Config(String),

    /// Referenced image file does not exist.
    #[error("fichier introuvable : {}", path.display())]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// File exists but could not be decoded as a raster image.
    #[error("décodage impossible de {} : {detail}", path.display())]
    Decode {
        /// Path of the offending file.
        path: PathBuf,
        /// Decoder diagnostic.
        detail: String,
    },

    /// Width/height pair the resampler cannot produce.
    #[error("dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_and_decode_are_distinct() {
        let nf = RenderError::FileNotFound {
            path: PathBuf::from("a.png"),
        };
        let de = RenderError::Decode {
            path: PathBuf::from("a.png"),
            detail: "truncated header".into(),
        };
        assert!(matches!(nf, RenderError::FileNotFound { .. }));
        assert!(matches!(de, RenderError::Decode { .. }));
    }

    #[test]
    fn config_message_names_offender() {
        let err = RenderError::Config("contrast doit être > 0 (reçu -1)".into());
        assert!(err.to_string().contains("contrast"));
    }
}
