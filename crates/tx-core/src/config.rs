use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;
use crate::palette::PALETTE_DEFAULT;

/// Correction d'aspect des cellules terminal (plus hautes que larges).
///
/// Without it the output looks vertically stretched. Tunable per font via
/// `RenderConfig::cell_aspect`; 0.55 matches common monospace metrics.
pub const DEFAULT_CELL_ASPECT: f32 = 0.55;

/// Configuration complète d'un rendu.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
/// Out-of-range values are rejected by [`RenderConfig::validate`], never
/// silently corrected.
///
/// # Example
/// ```
/// use tx_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.width, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Largeur cible en caractères.
    pub width: u32,
    /// Palette de glyphes, du plus sombre au plus clair.
    pub palette: String,
    /// Contraste (0, ∞). 1.0 = neutre.
    pub contrast: f32,
    /// Luminosité (0, ∞). 1.0 = neutre.
    pub brightness: f32,
    /// Correction d'aspect des cellules. Défaut 0.55.
    pub cell_aspect: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 100,
            palette: PALETTE_DEFAULT.to_string(),
            contrast: 1.0,
            brightness: 1.0,
            cell_aspect: DEFAULT_CELL_ASPECT,
        }
    }
}

impl RenderConfig {
    /// Reject every out-of-range field before any pixel work or I/O.
    ///
    /// # Errors
    /// Returns `RenderError::Config` naming the offending parameter.
    ///
    /// # Example
    /// ```
    /// use tx_core::config::RenderConfig;
    /// let config = RenderConfig { width: 0, ..RenderConfig::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 {
            return Err(RenderError::Config("width doit être > 0 (reçu 0)".into()));
        }
        if self.palette.chars().next().is_none() {
            return Err(RenderError::Config(
                "palette vide : au moins un glyphe est requis".into(),
            ));
        }
        if self.contrast <= 0.0 || self.contrast.is_nan() {
            return Err(RenderError::Config(format!(
                "contrast doit être > 0 (reçu {})",
                self.contrast
            )));
        }
        if self.brightness <= 0.0 || self.brightness.is_nan() {
            return Err(RenderError::Config(format!(
                "brightness doit être > 0 (reçu {})",
                self.brightness
            )));
        }
        if self.cell_aspect <= 0.0 || self.cell_aspect.is_nan() {
            return Err(RenderError::Config(format!(
                "cell_aspect doit être > 0 (reçu {})",
                self.cell_aspect
            )));
        }
        Ok(())
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: RenderSection,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    width: Option<u32>,
    palette: Option<String>,
    contrast: Option<f32>,
    brightness: Option<f32>,
    cell_aspect: Option<f32>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns `RenderError::Config` if the file cannot be read or parsed, or if
/// a merged value fails [`RenderConfig::validate`].
///
/// # Example
/// ```no_run
/// use tx_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("textel.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig, RenderError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| RenderError::Config(format!("impossible de lire {} : {e}", path.display())))?;

    let file: ConfigFile = toml::from_str(&content).map_err(|e| {
        RenderError::Config(format!("erreur de parsing TOML dans {} : {e}", path.display()))
    })?;

    let mut config = RenderConfig::default();

    let r = file.render;
    if let Some(v) = r.width {
        config.width = v;
    }
    if let Some(v) = r.palette {
        config.palette = v;
    }
    if let Some(v) = r.contrast {
        config.contrast = v;
    }
    if let Some(v) = r.brightness {
        config.brightness = v;
    }
    if let Some(v) = r.cell_aspect {
        config.cell_aspect = v;
    }

    config.validate()?;
    Ok(config)
}
