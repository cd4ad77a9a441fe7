use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use im_core::config::{load_config, AspectPolicy, ConvertConfig};
use im_core::ramp::RAMP_EXTENDED;
use im_core::PixelGrid;
use im_render::font::{FontCatalog, Platform};
use im_render::Renderer;

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config
    let mut config = resolve_config(&cli)?;

    // 4. Appliquer les overrides CLI
    apply_overrides(&mut config, &cli);
    config.clamp_all();

    // 5. Encoder l'image en ASCII coloré
    let art = im_ascii::encode_image(&cli.image, &config)
        .with_context(|| format!("Échec de l'encodage de {}", cli.image.display()))?;

    // 6. Sortie texte
    match cli.text_out {
        Some(ref path) => {
            std::fs::write(path, &art.text)
                .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
            log::info!("Texte écrit : {}", path.display());
        }
        None => println!("{}", art.text),
    }

    // 7. Rendu raster optionnel
    if let Some(ref out) = cli.out {
        let catalog = FontCatalog::for_platform(Platform::current());
        let renderer = Renderer::new(&config, &catalog)?;
        let canvas = renderer.render(&art, &config)?;
        save_canvas(&canvas, out)?;
        log::info!("Rendu écrit : {}", out.display());
    }

    Ok(())
}

/// Resolve config from --config, falling back to defaults when absent.
fn resolve_config(cli: &cli::Cli) -> Result<ConvertConfig> {
    if cli.config.exists() {
        load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(ConvertConfig::default())
    }
}

/// Apply CLI flags on top of the loaded config.
fn apply_overrides(config: &mut ConvertConfig, cli: &cli::Cli) {
    if let Some(width) = cli.width {
        config.width = width;
    }
    if cli.extended {
        config.charset = RAMP_EXTENDED.to_string();
    }
    if let Some(ref charset) = cli.charset {
        config.charset = charset.clone();
    }
    if let Some(ref aspect) = cli.aspect {
        config.aspect = match aspect.as_str() {
            "default" => AspectPolicy::DefaultCorrection,
            "original" => AspectPolicy::PreserveOriginalAspect,
            _ => {
                log::warn!("Aspect inconnu '{aspect}', utilisation du défaut.");
                config.aspect
            }
        };
    }
    if let Some(ref font) = cli.font {
        config.font_path = Some(font.clone());
    }
    if let Some(size) = cli.font_size {
        config.font_size = size;
    }
    if let Some(ref bg) = cli.bg {
        match im_core::color::parse_rgb(bg) {
            Some(rgb) => config.bg = rgb,
            None => log::warn!("Couleur de fond invalide '{bg}', attendu \"R,G,B\"."),
        }
    }
}

/// Écrit le canevas RGB au format déduit de l'extension.
fn save_canvas(canvas: &PixelGrid, path: &Path) -> Result<()> {
    let buffer: image::RgbImage =
        image::ImageBuffer::from_raw(canvas.width, canvas.height, canvas.data.clone())
            .context("Dimensions de canevas incohérentes")?;
    buffer
        .save(path)
        .with_context(|| format!("Impossible d'écrire {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> cli::Cli {
        cli::Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn overrides_take_precedence_over_defaults() {
        let cli = parse(&[
            "imascii",
            "--image",
            "x.png",
            "--width",
            "42",
            "--charset",
            "#. ",
            "--aspect",
            "original",
            "--font-size",
            "24",
            "--bg",
            "10,20,30",
        ]);
        let mut config = ConvertConfig::default();
        apply_overrides(&mut config, &cli);

        assert_eq!(config.width, 42);
        assert_eq!(config.charset, "#. ");
        assert_eq!(config.aspect, AspectPolicy::PreserveOriginalAspect);
        assert_eq!(config.font_size, 24.0);
        assert_eq!(config.bg, (10, 20, 30));
    }

    #[test]
    fn unknown_aspect_keeps_previous_policy() {
        let cli = parse(&["imascii", "--image", "x.png", "--aspect", "stretched"]);
        let mut config = ConvertConfig::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.aspect, AspectPolicy::DefaultCorrection);
    }

    #[test]
    fn invalid_bg_keeps_previous_color() {
        let cli = parse(&["imascii", "--image", "x.png", "--bg", "rouge"]);
        let mut config = ConvertConfig::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.bg, (0, 0, 0));
    }

    #[test]
    fn extended_flag_installs_extended_ramp() {
        let cli = parse(&["imascii", "--image", "x.png", "--extended"]);
        let mut config = ConvertConfig::default();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.charset, RAMP_EXTENDED);
    }
}
