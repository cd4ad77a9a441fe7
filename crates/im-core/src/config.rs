use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::frame::Rgb;
use crate::ramp::RAMP_CLASSIC;

/// Politique de correction d'aspect lors du rendu raster.
///
/// # Example
/// ```
/// use im_core::config::AspectPolicy;
/// assert!(matches!(AspectPolicy::default(), AspectPolicy::DefaultCorrection));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum AspectPolicy {
    /// Correction empirique : hauteur de cellule = hauteur de glyphe × 1.8.
    #[default]
    DefaultCorrection,
    /// Reproduit le ratio d'aspect de l'image d'origine dans le bitmap final.
    PreserveOriginalAspect,
}

/// Configuration complète de la conversion, sérialisable en TOML.
///
/// Chaque champ a une valeur par défaut saine ; un fichier de configuration
/// ne surcharge que ce qu'il nomme.
///
/// # Example
/// ```
/// use im_core::config::ConvertConfig;
/// let config = ConvertConfig::default();
/// assert_eq!(config.width, 100);
/// assert_eq!(config.font_size, 10.0);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConvertConfig {
    // === Encodage ===
    /// Largeur cible en caractères.
    pub width: u32,
    /// Rampe de glyphes (dense→clair). Vide = rampe par défaut.
    pub charset: String,

    // === Rendu ===
    /// Taille de police en pixels.
    pub font_size: f32,
    /// Chemin explicite d'une police monospace. None = sondage plateforme.
    pub font_path: Option<PathBuf>,
    /// Couleur de fond RGB du canevas.
    pub bg: Rgb,
    /// Politique d'aspect du rendu.
    pub aspect: AspectPolicy,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            width: 100,
            charset: RAMP_CLASSIC.to_string(),
            font_size: 10.0,
            font_path: None,
            bg: (0, 0, 0),
            aspect: AspectPolicy::DefaultCorrection,
        }
    }
}

impl ConvertConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.width = self.width.clamp(1, 4096);
        self.font_size = self.font_size.clamp(1.0, 512.0);
        if !self.font_size.is_finite() {
            self.font_size = 10.0;
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    encode: Option<EncodeSection>,
    render: Option<RenderSection>,
}

/// Encode section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct EncodeSection {
    width: Option<u32>,
    charset: Option<String>,
}

/// Render section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct RenderSection {
    font_size: Option<f32>,
    font_path: Option<PathBuf>,
    bg: Option<Rgb>,
    aspect: Option<AspectPolicy>,
}

fn apply(file: ConfigFile, config: &mut ConvertConfig) {
    if let Some(e) = file.encode {
        if let Some(v) = e.width {
            config.width = v;
        }
        if let Some(v) = e.charset {
            config.charset = v;
        }
    }
    if let Some(r) = file.render {
        if let Some(v) = r.font_size {
            config.font_size = v;
        }
        if let Some(v) = r.font_path {
            config.font_path = Some(v);
        }
        if let Some(v) = r.bg {
            config.bg = v;
        }
        if let Some(v) = r.aspect {
            config.aspect = v;
        }
    }
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use im_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<ConvertConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = ConvertConfig::default();
    apply(file, &mut config);
    config.clamp_all();
    Ok(config)
}
