use std::path::Path;

use im_core::{AsciiArt, ColorGrid, ConvertConfig, CoreError, GrayGrid, PixelGrid, Ramp};
use im_source::{load_rgb, resample, to_grayscale};

/// Convertit une paire (pixels, gris) déjà échantillonnée en art ASCII.
///
/// Parcours ligne par ligne : chaque cellule reçoit le glyphe de sa
/// luminosité et la couleur du pixel correspondant. Le texte final est
/// débarrassé des blancs en tête et en queue de bloc ; la grille de
/// couleurs, elle, garde toujours les dimensions de l'échantillon.
///
/// # Example
/// ```
/// use im_core::{PixelGrid, Ramp};
/// use im_ascii::encode::convert;
/// use im_source::to_grayscale;
///
/// let pixels = PixelGrid::new(4, 2);
/// let gray = to_grayscale(&pixels);
/// let ramp = Ramp::new("@ ");
/// let art = convert(&pixels, &gray, &ramp, (4, 2));
/// assert_eq!(art.text, "@@@@\n@@@@");
/// assert_eq!(art.colors.dimensions(), (4, 2));
/// ```
#[must_use]
pub fn convert(
    pixels: &PixelGrid,
    gray: &GrayGrid,
    ramp: &Ramp,
    source_size: (u32, u32),
) -> AsciiArt {
    debug_assert_eq!((pixels.width, pixels.height), (gray.width, gray.height));

    let mut colors = ColorGrid::new(gray.width, gray.height);
    let mut rows = Vec::with_capacity(gray.height as usize);
    for y in 0..gray.height {
        let mut row = String::with_capacity(gray.width as usize);
        for x in 0..gray.width {
            row.push(ramp.glyph_for(gray.luma(x, y)));
            colors.set(x, y, pixels.pixel(x, y));
        }
        rows.push(row);
    }

    let text = rows.join("\n").trim().to_string();
    AsciiArt {
        text,
        colors,
        source_size,
    }
}

/// Encode une image du disque en art ASCII coloré.
///
/// Pipeline complet : décodage, rééchantillonnage à `config.width`
/// colonnes, conversion en gris, mapping glyphes + couleurs.
///
/// # Errors
/// Propage [`CoreError::ImageNotFound`], [`CoreError::Decode`] et
/// [`CoreError::InvalidDimensions`] des étapes amont.
///
/// # Example
/// ```no_run
/// use im_ascii::encode::encode_image;
/// use im_core::ConvertConfig;
/// use std::path::Path;
///
/// let config = ConvertConfig::default();
/// let art = encode_image(Path::new("photo.png"), &config).unwrap();
/// println!("{}", art.text);
/// ```
pub fn encode_image(path: &Path, config: &ConvertConfig) -> Result<AsciiArt, CoreError> {
    let ramp = Ramp::new(&config.charset);
    let source = load_rgb(path)?;
    let source_size = (source.width, source.height);

    let sampled = resample(&source, config.width)?;
    let gray = to_grayscale(&sampled);
    log::info!(
        "Encodage : {}×{} → grille {}×{} ({} glyphes)",
        source.width,
        source.height,
        sampled.width,
        sampled.height,
        ramp.len()
    );

    Ok(convert(&sampled, &gray, &ramp, source_size))
}
