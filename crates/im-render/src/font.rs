use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontVec, PxScale, ScaleFont};
use im_core::CoreError;

/// Famille de plateforme, pour le choix des chemins de sondage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
    Other,
}

impl Platform {
    /// Plateforme de compilation.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else if cfg!(unix) {
            Self::Unix
        } else {
            Self::Other
        }
    }
}

/// Catalogue des polices monospace candidates.
///
/// Deux niveaux : les chemins de sondage propres à la plateforme, puis un
/// registre de noms génériques ("monospace", "Consolas") résolus vers des
/// emplacements connus. Le premier fichier lisible et parsable gagne.
pub struct FontCatalog {
    probe_paths: Vec<PathBuf>,
    named: Vec<(String, Vec<PathBuf>)>,
}

impl FontCatalog {
    /// Catalogue standard pour une plateforme donnée.
    ///
    /// # Example
    /// ```
    /// use im_render::font::{FontCatalog, Platform};
    /// let catalog = FontCatalog::for_platform(Platform::Unix);
    /// assert!(catalog.named_candidates("monospace").is_some());
    /// ```
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        let probe_paths = match platform {
            Platform::Windows => vec![
                PathBuf::from("C:/Windows/Fonts/consola.ttf"),
                PathBuf::from("C:/Windows/Fonts/msgothic.ttc"),
                PathBuf::from("C:/Windows/Fonts/cour.ttf"),
            ],
            Platform::Unix => vec![
                PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"),
                PathBuf::from("/Library/Fonts/Andale Mono.ttf"),
                PathBuf::from("/System/Library/Fonts/Menlo.ttc"),
                PathBuf::from("/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf"),
            ],
            Platform::Other => Vec::new(),
        };

        let named = vec![
            (
                "monospace".to_string(),
                vec![
                    PathBuf::from("/usr/share/fonts/TTF/DejaVuSansMono.ttf"),
                    PathBuf::from("/usr/share/fonts/dejavu/DejaVuSansMono.ttf"),
                    PathBuf::from("/usr/share/fonts/gnu-free/FreeMono.otf"),
                ],
            ),
            (
                "Consolas".to_string(),
                vec![PathBuf::from("C:/Windows/Fonts/consola.ttf")],
            ),
        ];

        Self { probe_paths, named }
    }

    /// Catalogue vide — aucune police ne sera trouvée sans chemin explicite.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            probe_paths: Vec::new(),
            named: Vec::new(),
        }
    }

    /// Candidats enregistrés pour un nom générique, si le nom est connu.
    #[must_use]
    pub fn named_candidates(&self, name: &str) -> Option<&[PathBuf]> {
        self.named
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, candidates)| candidates.as_slice())
    }
}

/// Dimensions en pixels d'un glyphe de référence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Largeur de cellule.
    pub width: u32,
    /// Hauteur de glyphe avant correction verticale.
    pub height: u32,
}

/// Police chargée en mémoire, avec son échelle.
pub struct LoadedFont {
    pub(crate) font: FontVec,
    pub(crate) scale: PxScale,
    /// Taille demandée en pixels.
    pub size: f32,
}

/// Police résolue, séparée selon sa capacité de mesure.
///
/// Une police `Scalable` fournit des contours exploitables pour la mesure
/// exacte. Une police `Fixed` se charge mais n'expose pas de contour pour le
/// glyphe de référence (strike bitmap embarqué) : la mesure passe alors par
/// les avances, puis par l'heuristique de taille.
pub enum FontHandle {
    Scalable(LoadedFont),
    Fixed(LoadedFont),
}

impl FontHandle {
    pub(crate) fn loaded(&self) -> &LoadedFont {
        match self {
            Self::Scalable(l) | Self::Fixed(l) => l,
        }
    }

    /// Vrai si la police expose des contours vectoriels.
    #[must_use]
    pub fn is_scalable(&self) -> bool {
        matches!(self, Self::Scalable(_))
    }

    /// Mesure un glyphe, en trois niveaux de repli.
    ///
    /// 1. Boîte englobante du contour (polices vectorielles seulement) ;
    /// 2. avance horizontale × (ascendante − descendante) ;
    /// 3. heuristique depuis la taille : `(0.6 × taille, taille)`, bornée
    ///    à 1 par dimension.
    ///
    /// Un niveau n'est retenu que s'il donne deux dimensions non nulles ;
    /// le dernier ne peut pas échouer.
    #[must_use]
    pub fn measure_glyph(&self, ch: char) -> GlyphMetrics {
        let loaded = self.loaded();

        if let Self::Scalable(l) = self {
            let glyph = l
                .font
                .glyph_id(ch)
                .with_scale_and_position(l.scale, point(0.0, 0.0));
            if let Some(outline) = l.font.outline_glyph(glyph) {
                let bounds = outline.px_bounds();
                let width = bounds.width().ceil() as u32;
                let height = bounds.height().ceil() as u32;
                if width > 0 && height > 0 {
                    return GlyphMetrics { width, height };
                }
            }
        }

        let scaled = loaded.font.as_scaled(loaded.scale);
        let advance = scaled.h_advance(loaded.font.glyph_id(ch)).round();
        let line = (scaled.ascent() - scaled.descent()).round();
        if advance >= 1.0 && line >= 1.0 {
            return GlyphMetrics {
                width: advance as u32,
                height: line as u32,
            };
        }

        GlyphMetrics {
            width: ((0.6 * loaded.size).floor() as u32).max(1),
            height: (loaded.size.round() as u32).max(1),
        }
    }
}

/// Résout une police monospace utilisable.
///
/// Ordre : chemin explicite s'il est donné (échec → avertissement et
/// poursuite), puis chemins de sondage de la plateforme, puis registre de
/// noms génériques.
///
/// # Errors
/// [`CoreError::FontUnavailable`] quand toute la chaîne de repli échoue.
///
/// # Example
/// ```
/// use im_render::font::{resolve_font, FontCatalog};
/// let err = resolve_font(None, 12.0, &FontCatalog::empty()).err().unwrap();
/// assert!(err.to_string().contains("auto"));
/// ```
pub fn resolve_font(
    explicit: Option<&Path>,
    size: f32,
    catalog: &FontCatalog,
) -> Result<FontHandle, CoreError> {
    if let Some(path) = explicit {
        if let Some(handle) = load_font(path, size) {
            log::info!("Police : {} ({size}px)", path.display());
            return Ok(handle);
        }
        log::warn!(
            "Police demandée illisible : {}, repli sur le sondage plateforme",
            path.display()
        );
    }

    for path in &catalog.probe_paths {
        if let Some(handle) = load_font(path, size) {
            log::info!("Police : {} ({size}px)", path.display());
            return Ok(handle);
        }
    }

    for (name, candidates) in &catalog.named {
        for path in candidates {
            if let Some(handle) = load_font(path, size) {
                log::info!("Police : {} via « {name} » ({size}px)", path.display());
                return Ok(handle);
            }
        }
    }

    Err(CoreError::FontUnavailable {
        requested: explicit.map_or_else(|| "auto".to_string(), |p| p.display().to_string()),
        size,
    })
}

/// Tente de charger un fichier de police et classe sa capacité.
fn load_font(path: &Path, size: f32) -> Option<FontHandle> {
    if !path.is_file() {
        return None;
    }

    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            log::debug!("Lecture impossible de {} : {e}", path.display());
            return None;
        }
    };
    let font = match FontVec::try_from_vec(bytes) {
        Ok(f) => f,
        Err(e) => {
            log::debug!("Police invalide {} : {e}", path.display());
            return None;
        }
    };

    let scale = PxScale::from(size);
    let loaded = LoadedFont { font, scale, size };

    // Capacité : un contour pour le glyphe de référence classe la police.
    let probe = loaded.font.glyph_id('A').with_scale(scale);
    if loaded.font.outline_glyph(probe).is_some() {
        Some(FontHandle::Scalable(loaded))
    } else {
        Some(FontHandle::Fixed(loaded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_probe_order_starts_with_consolas() {
        let catalog = FontCatalog::for_platform(Platform::Windows);
        assert!(catalog.probe_paths[0].ends_with("consola.ttf"));
        assert_eq!(catalog.probe_paths.len(), 3);
    }

    #[test]
    fn unix_probe_covers_linux_and_mac_locations() {
        let catalog = FontCatalog::for_platform(Platform::Unix);
        assert!(catalog.probe_paths[0].ends_with("DejaVuSansMono.ttf"));
        assert!(catalog
            .probe_paths
            .iter()
            .any(|p| p.starts_with("/System/Library/Fonts")));
    }

    #[test]
    fn named_registry_knows_generic_names() {
        let catalog = FontCatalog::for_platform(Platform::Other);
        assert!(catalog.named_candidates("monospace").is_some());
        let consolas = catalog.named_candidates("Consolas").unwrap();
        assert!(consolas[0].ends_with("consola.ttf"));
        assert!(catalog.named_candidates("Papyrus").is_none());
    }

    #[test]
    fn empty_catalog_reports_auto_request() {
        let err = resolve_font(None, 14.0, &FontCatalog::empty()).err().unwrap();
        match err {
            CoreError::FontUnavailable { requested, size } => {
                assert_eq!(requested, "auto");
                assert!((size - 14.0).abs() < f32::EPSILON);
            }
            other => panic!("variante inattendue : {other}"),
        }
    }

    #[test]
    fn unreadable_explicit_path_falls_through_to_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("not-a-font.ttf");
        std::fs::write(&bogus, b"junk bytes, no font here").unwrap();

        let err = resolve_font(Some(&bogus), 12.0, &FontCatalog::empty())
            .err()
            .unwrap();
        match err {
            CoreError::FontUnavailable { requested, .. } => {
                assert!(requested.contains("not-a-font.ttf"));
            }
            other => panic!("variante inattendue : {other}"),
        }
    }
}
