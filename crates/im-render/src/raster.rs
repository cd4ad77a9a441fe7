use std::collections::HashMap;

use ab_glyph::{point, Font, ScaleFont};
use im_core::{color, AsciiArt, ConvertConfig, CoreError, PixelGrid};
use rayon::prelude::*;

use crate::font::{resolve_font, FontCatalog, FontHandle, LoadedFont};
use crate::layout::plan_canvas;

/// Glyphe mesuré pour dimensionner les cellules.
const REFERENCE_GLYPH: char = 'A';

/// Couverture minimale pour encrer un pixel (0.3 sur [0, 1]).
///
/// Au-dessus du seuil, le pixel reçoit la couleur pleine de la cellule,
/// jamais un mélange : les couleurs du canevas restent exactement celles de
/// la grille d'entrée.
const INK_THRESHOLD: u8 = 77;

/// Rendu raster d'un art ASCII coloré.
///
/// # Example
/// ```no_run
/// use im_core::ConvertConfig;
/// use im_render::font::{FontCatalog, Platform};
/// use im_render::raster::Renderer;
///
/// let config = ConvertConfig::default();
/// let catalog = FontCatalog::for_platform(Platform::current());
/// let renderer = Renderer::new(&config, &catalog).unwrap();
/// ```
pub struct Renderer {
    handle: FontHandle,
}

impl Renderer {
    /// Résout la police d'après la configuration et construit le renderer.
    ///
    /// # Errors
    /// [`CoreError::FontUnavailable`] si aucune police n'est utilisable.
    pub fn new(config: &ConvertConfig, catalog: &FontCatalog) -> Result<Self, CoreError> {
        let handle = resolve_font(config.font_path.as_deref(), config.font_size, catalog)?;
        Ok(Self { handle })
    }

    /// Construit le renderer autour d'une police déjà résolue.
    #[must_use]
    pub fn with_handle(handle: FontHandle) -> Self {
        Self { handle }
    }

    /// Dessine le texte sur un canevas RGB, cellule par cellule.
    ///
    /// Un texte vide, ou sans aucun caractère hors sauts de ligne, donne un
    /// canevas 1×1 de la couleur de fond. Chaque cellule encre ses pixels
    /// avec la couleur de la grille à ses coordonnées ; une coordonnée hors
    /// grille encre en blanc opaque. Les lignes sont rasterisées en parallèle
    /// par bandes.
    ///
    /// # Errors
    /// [`CoreError::OutputTooLarge`] si le canevas dépasse la borne par
    /// dimension.
    pub fn render(&self, art: &AsciiArt, config: &ConvertConfig) -> Result<PixelGrid, CoreError> {
        let lines: Vec<&str> = art.text.split('\n').collect();
        let chars_wide = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
        let lines_high = lines.len() as u32;
        if chars_wide == 0 || lines_high == 0 {
            let mut canvas = PixelGrid::new(1, 1);
            fill_background(&mut canvas, config.bg);
            return Ok(canvas);
        }

        let metrics = self.handle.measure_glyph(REFERENCE_GLYPH);
        let plan = plan_canvas(
            metrics,
            self.handle.is_scalable(),
            config.aspect,
            art.source_size,
            chars_wide,
            lines_high,
        )?;
        log::debug!(
            "Canevas {}×{} px, cellule {}×{}, grille {chars_wide}×{lines_high}",
            plan.width,
            plan.height,
            plan.cell_width,
            plan.cell_height
        );

        let mut canvas = PixelGrid::new(plan.width, plan.height);
        fill_background(&mut canvas, config.bg);

        let cache = self.build_glyph_cache(&lines, plan.cell_width, plan.cell_height);
        let stride = (plan.width * 3) as usize;
        let band_size = stride * plan.cell_height as usize;
        if band_size == 0 || cache.is_empty() {
            return Ok(canvas);
        }

        let cell_w = plan.cell_width as usize;
        let canvas_w = plan.width as usize;
        canvas
            .data
            .par_chunks_mut(band_size)
            .enumerate()
            .for_each(|(gy, band)| {
                let Some(line) = lines.get(gy) else { return };
                let rows_in_band = band.len() / stride;

                for (gx, ch) in line.chars().enumerate() {
                    let Some(alpha) = cache.get(&ch) else { continue };
                    let (cr, cg, cb) = art
                        .colors
                        .get(gx as u32, gy as u32)
                        .unwrap_or(color::WHITE);
                    let x0 = gx * cell_w;

                    for cy in 0..rows_in_band {
                        let row_off = cy * stride;
                        for cx in 0..cell_w {
                            let px = x0 + cx;
                            if px >= canvas_w {
                                break;
                            }
                            if alpha[cy * cell_w + cx] >= INK_THRESHOLD {
                                let idx = row_off + px * 3;
                                band[idx] = cr;
                                band[idx + 1] = cg;
                                band[idx + 2] = cb;
                            }
                        }
                    }
                }
            });

        Ok(canvas)
    }

    /// Rasterise une fois chaque glyphe distinct du texte.
    fn build_glyph_cache(
        &self,
        lines: &[&str],
        cell_width: u32,
        cell_height: u32,
    ) -> HashMap<char, Vec<u8>> {
        let mut cache = HashMap::new();
        if cell_width == 0 || cell_height == 0 {
            return cache;
        }
        let loaded = self.handle.loaded();
        for line in lines {
            for ch in line.chars() {
                cache
                    .entry(ch)
                    .or_insert_with(|| rasterize_glyph(loaded, ch, cell_width, cell_height));
            }
        }
        cache
    }
}

fn fill_background(canvas: &mut PixelGrid, bg: (u8, u8, u8)) {
    if bg == (0, 0, 0) {
        return;
    }
    for p in canvas.data.chunks_exact_mut(3) {
        p[0] = bg.0;
        p[1] = bg.1;
        p[2] = bg.2;
    }
}

/// Tampon de couverture d'un glyphe, aligné en haut à gauche de la cellule.
fn rasterize_glyph(loaded: &LoadedFont, ch: char, cell_width: u32, cell_height: u32) -> Vec<u8> {
    let mut buffer = vec![0u8; (cell_width * cell_height) as usize];

    let scaled = loaded.font.as_scaled(loaded.scale);
    let ascent = scaled.ascent();
    let glyph = loaded
        .font
        .glyph_id(ch)
        .with_scale_and_position(loaded.scale, point(0.0, ascent));

    if let Some(outline) = loaded.font.outline_glyph(glyph) {
        let bounds = outline.px_bounds();
        #[allow(clippy::cast_possible_wrap)]
        outline.draw(|x, y, v| {
            let px = (x as i32 + bounds.min.x as i32).max(0) as u32;
            let py = (y as i32 + bounds.min.y as i32).max(0) as u32;
            if px < cell_width && py < cell_height {
                let idx = (py * cell_width + px) as usize;
                buffer[idx] = buffer[idx].max((v * 255.0).round() as u8);
            }
        });
    }
    buffer
}
