use im_core::{AspectPolicy, CoreError};

use crate::font::GlyphMetrics;

/// Borne par dimension du canevas de sortie, en pixels.
pub const MAX_CANVAS_DIM: u32 = 16_384;

/// Correction verticale empirique : une ligne de texte occupe environ
/// 1.8 fois la hauteur du glyphe pour retrouver les proportions de l'image.
pub const VERTICAL_CORRECTION: f32 = 1.8;

/// Estimations par glyphe quand aucune métrique n'est mesurable.
const FALLBACK_GLYPH_W: u32 = 6;
const FALLBACK_GLYPH_H: u32 = 10;

/// Plan de canevas : dimensions totales et dimensions de cellule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasPlan {
    /// Largeur totale en pixels.
    pub width: u32,
    /// Hauteur totale en pixels.
    pub height: u32,
    /// Largeur d'une cellule de caractère.
    pub cell_width: u32,
    /// Hauteur d'une cellule de caractère, correction comprise.
    pub cell_height: u32,
}

/// Hauteur de cellule selon la politique d'aspect.
///
/// `DefaultCorrection` applique la correction verticale fixe ;
/// `PreserveOriginalAspect` dérive la hauteur du ratio de l'image source.
/// Un ratio inapplicable (source dégénérée, largeur de glyphe nulle, aucune
/// ligne) retombe sur la correction fixe derrière un avertissement.
///
/// # Example
/// ```
/// use im_core::AspectPolicy;
/// use im_render::font::GlyphMetrics;
/// use im_render::layout::compute_cell_height;
///
/// let metrics = GlyphMetrics { width: 6, height: 7 };
/// let h = compute_cell_height(metrics, AspectPolicy::DefaultCorrection, (0, 0), 80, 24);
/// assert_eq!(h, 13); // 7 × 1.8 = 12.6, arrondi
/// ```
#[must_use]
pub fn compute_cell_height(
    metrics: GlyphMetrics,
    policy: AspectPolicy,
    source_size: (u32, u32),
    chars_wide: u32,
    lines_high: u32,
) -> u32 {
    match policy {
        AspectPolicy::DefaultCorrection => {
            let corrected = (metrics.height as f32 * VERTICAL_CORRECTION).round() as u32;
            corrected.max(1)
        }
        AspectPolicy::PreserveOriginalAspect => {
            let (src_w, src_h) = source_size;
            if src_w == 0 || src_h == 0 || metrics.width == 0 || lines_high == 0 {
                log::warn!("Ratio source indisponible, correction verticale par défaut");
                return compute_cell_height(
                    metrics,
                    AspectPolicy::DefaultCorrection,
                    source_size,
                    chars_wide,
                    lines_high,
                );
            }
            let target = f64::from(metrics.width) * f64::from(chars_wide)
                * (f64::from(src_h) / f64::from(src_w))
                / f64::from(lines_high);
            (target as u32).max(1)
        }
    }
}

/// Planifie le canevas pour une grille de texte donnée.
///
/// Les produits se calculent en 64 bits puis se comparent à
/// [`MAX_CANVAS_DIM`] avant toute allocation. Une dimension nulle déclenche
/// la récupération : estimations bitmap par glyphe pour une police `Fixed`,
/// plancher de 100 px pour une police vectorielle.
///
/// # Errors
/// [`CoreError::OutputTooLarge`] si une dimension dépasse la borne.
///
/// # Example
/// ```
/// use im_core::AspectPolicy;
/// use im_render::font::GlyphMetrics;
/// use im_render::layout::plan_canvas;
///
/// let metrics = GlyphMetrics { width: 6, height: 7 };
/// let plan = plan_canvas(metrics, true, AspectPolicy::DefaultCorrection, (0, 0), 80, 24).unwrap();
/// assert_eq!((plan.width, plan.height), (480, 312));
/// ```
pub fn plan_canvas(
    metrics: GlyphMetrics,
    scalable: bool,
    policy: AspectPolicy,
    source_size: (u32, u32),
    chars_wide: u32,
    lines_high: u32,
) -> Result<CanvasPlan, CoreError> {
    let mut cell_width = metrics.width;
    let mut cell_height = compute_cell_height(metrics, policy, source_size, chars_wide, lines_high);

    let mut width = u64::from(cell_width) * u64::from(chars_wide);
    let mut height = u64::from(cell_height) * u64::from(lines_high);

    if width == 0 || height == 0 {
        if scalable {
            log::warn!("Canevas calculé dégénéré ({width}×{height}), plancher à 100 px");
            width = width.max(100);
            height = height.max(100);
        } else {
            cell_width = FALLBACK_GLYPH_W;
            cell_height = match policy {
                AspectPolicy::DefaultCorrection => {
                    (FALLBACK_GLYPH_H as f32 * VERTICAL_CORRECTION).round() as u32
                }
                AspectPolicy::PreserveOriginalAspect => FALLBACK_GLYPH_H,
            };
            width = (u64::from(cell_width) * u64::from(chars_wide)).max(1);
            height = (u64::from(cell_height) * u64::from(lines_high)).max(1);
            log::warn!("Métriques indisponibles, estimations bitmap {cell_width}×{cell_height}");
        }
    }

    if width > u64::from(MAX_CANVAS_DIM) || height > u64::from(MAX_CANVAS_DIM) {
        return Err(CoreError::OutputTooLarge {
            width,
            height,
            max: MAX_CANVAS_DIM,
        });
    }

    Ok(CanvasPlan {
        width: width as u32,
        height: height as u32,
        cell_width,
        cell_height,
    })
}
