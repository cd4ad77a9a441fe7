use std::path::PathBuf;

use clap::Parser;

/// imascii — Convertisseur image vers ASCII art coloré.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image d'entrée (PNG, JPEG, BMP, GIF, WebP).
    #[arg(long)]
    pub image: PathBuf,

    /// Largeur cible en caractères (1 minimum).
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,

    /// Rampe de glyphes personnalisée, du plus dense au plus clair.
    #[arg(long)]
    pub charset: Option<String>,

    /// Utiliser la rampe étendue de 70 glyphes.
    #[arg(long, default_value_t = false, conflicts_with = "charset")]
    pub extended: bool,

    /// Politique d'aspect du rendu : "default" ou "original".
    #[arg(long)]
    pub aspect: Option<String>,

    /// Chemin explicite d'une police monospace (TTF/OTF).
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Taille de police en pixels.
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Couleur de fond du rendu, au format "R,G,B".
    #[arg(long)]
    pub bg: Option<String>,

    /// Image de sortie du rendu raster (format selon l'extension).
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Écrire le texte ASCII dans ce fichier au lieu de stdout.
    #[arg(long)]
    pub text_out: Option<PathBuf>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_coherent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn minimal_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["imascii", "--image", "photo.png"]).unwrap();
        assert_eq!(cli.image, PathBuf::from("photo.png"));
        assert_eq!(cli.width, None);
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn zero_width_is_rejected_at_parse() {
        let result = Cli::try_parse_from(["imascii", "--image", "x.png", "--width", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn extended_conflicts_with_custom_charset() {
        let result = Cli::try_parse_from([
            "imascii",
            "--image",
            "x.png",
            "--extended",
            "--charset",
            "@ ",
        ]);
        assert!(result.is_err());
    }
}
