use anyhow::{Context, Result};
use clap::Parser;
use tx_app::cli::Cli;
use tx_app::pipeline::render;
use tx_core::config::RenderConfig;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre la config : fichier → flags → validation dans le pipeline
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);

    // 4. Rendu
    log::debug!(
        "rendu de {} en largeur {}",
        cli.image.display(),
        config.width
    );
    let art = render(&cli.image, &config)?;

    // 5. Sortie
    match cli.output {
        Some(ref path) => std::fs::write(path, &art)
            .with_context(|| format!("impossible d'écrire {}", path.display()))?,
        None => println!("{art}"),
    }

    Ok(())
}

/// Config file if given, defaults otherwise. Flag overrides come after.
fn resolve_config(cli: &Cli) -> Result<RenderConfig> {
    match cli.config {
        Some(ref path) => Ok(tx_core::config::load_config(path)?),
        None => Ok(RenderConfig::default()),
    }
}
