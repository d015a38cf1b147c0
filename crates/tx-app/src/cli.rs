use std::path::PathBuf;

use clap::Parser;
use tx_core::config::RenderConfig;

/// textel — image vers ASCII-art.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image à convertir (PNG, JPEG, BMP, GIF).
    pub image: PathBuf,

    /// Largeur cible en caractères.
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Palette de glyphes, du plus sombre au plus clair.
    #[arg(long)]
    pub palette: Option<String>,

    /// Contraste (> 0). 1.0 = neutre.
    #[arg(long)]
    pub contrast: Option<f32>,

    /// Luminosité (> 0). 1.0 = neutre.
    #[arg(long)]
    pub brightness: Option<f32>,

    /// Correction d'aspect des cellules terminal. Défaut 0.55.
    #[arg(long)]
    pub cell_aspect: Option<f32>,

    /// Fichier de configuration TOML (section [render]).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Écrire le résultat dans un fichier au lieu de stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply flag overrides on top of file/default values.
    ///
    /// Flags win over the config file, which wins over defaults. Validation
    /// happens afterwards, in the pipeline.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(ref v) = self.palette {
            config.palette = v.clone();
        }
        if let Some(v) = self.contrast {
            config.contrast = v;
        }
        if let Some(v) = self.brightness {
            config.brightness = v;
        }
        if let Some(v) = self.cell_aspect {
            config.cell_aspect = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "textel",
            "photo.png",
            "--width",
            "80",
            "--palette",
            "@ ",
            "--contrast",
            "1.4",
        ])
        .unwrap();

        let mut config = RenderConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.width, 80);
        assert_eq!(config.palette, "@ ");
        assert_eq!(config.contrast, 1.4);
        assert_eq!(config.brightness, 1.0);
    }

    #[test]
    fn absent_flags_leave_config_untouched() {
        let cli = Cli::try_parse_from(["textel", "photo.png"]).unwrap();
        let mut config = RenderConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.width, 100);
        assert_eq!(config.palette, tx_core::palette::PALETTE_DEFAULT);
    }
}
