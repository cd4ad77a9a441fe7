use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer as FirResizer};
use im_core::{CoreError, PixelGrid};

/// Ratio hauteur/largeur d'une cellule de caractère en console.
///
/// Les glyphes monospace sont plus hauts que larges ; diviser la hauteur
/// échantillonnée par ce facteur évite un rendu vertical étiré.
pub const CHAR_ASPECT: f64 = 1.65;

/// Hauteur d'échantillonnage pour une largeur cible donnée.
///
/// Calcule `target_width × (h/w) / 1.65`, arrondie puis bornée à 1.
/// Une source dégénérée (dimension nulle) retombe sur `target_width / 2`.
///
/// # Example
/// ```
/// use im_source::resize::sampling_height;
/// assert_eq!(sampling_height(330, 330, 100), 61);
/// assert_eq!(sampling_height(1000, 1, 50), 1);
/// assert_eq!(sampling_height(0, 240, 100), 50);
/// ```
#[must_use]
pub fn sampling_height(src_width: u32, src_height: u32, target_width: u32) -> u32 {
    if src_width == 0 || src_height == 0 {
        return (target_width / 2).max(1);
    }
    let ratio = f64::from(src_height) / f64::from(src_width);
    let height = (f64::from(target_width) * ratio / CHAR_ASPECT).round() as u32;
    height.max(1)
}

/// Resizer réutilisable wrappant fast_image_resize.
///
/// Pré-alloue le scratch buffer pour limiter les allocations en usage batch.
///
/// # Example
/// ```
/// use im_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch image for source (owned buffer to avoid the mut borrow issue).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new(),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` to the exact dimensions `width × height`.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDimensions`] if either dimension is zero
    /// or if the underlying resize rejects the buffers.
    ///
    /// # Example
    /// ```
    /// use im_source::resize::Resizer;
    /// use im_core::PixelGrid;
    /// let mut r = Resizer::new();
    /// let src = PixelGrid::new(100, 100);
    /// let dst = r.resize(&src, 50, 25).unwrap();
    /// assert_eq!((dst.width, dst.height), (50, 25));
    /// ```
    pub fn resize(
        &mut self,
        src: &PixelGrid,
        width: u32,
        height: u32,
    ) -> Result<PixelGrid, CoreError> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }

        let mut dst = PixelGrid::new(width, height);
        if src.width == width && src.height == height {
            dst.data.copy_from_slice(&src.data);
            return Ok(dst);
        }

        // Copie forcée : fast_image_resize exige &mut sur la source.
        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x3)
                .map_err(|_| CoreError::InvalidDimensions {
                    width: src.width,
                    height: src.height,
                })?;

        let mut dst_image = Image::from_slice_u8(width, height, &mut dst.data, PixelType::U8x3)
            .map_err(|_| CoreError::InvalidDimensions { width, height })?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .map_err(|_| CoreError::InvalidDimensions { width, height })?;

        Ok(dst)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Rééchantillonne une image à la grille de caractères cible.
///
/// La hauteur sort de [`sampling_height`]. Une source sans pixels donne une
/// grille noire aux dimensions cibles : rien à échantillonner.
///
/// # Errors
/// Returns [`CoreError::InvalidDimensions`] if `target_width` is zero or the
/// resize itself fails.
///
/// # Example
/// ```
/// use im_source::resize::resample;
/// use im_core::PixelGrid;
/// let src = PixelGrid::new(330, 330);
/// let dst = resample(&src, 100).unwrap();
/// assert_eq!((dst.width, dst.height), (100, 61));
/// ```
pub fn resample(src: &PixelGrid, target_width: u32) -> Result<PixelGrid, CoreError> {
    if target_width == 0 {
        return Err(CoreError::InvalidDimensions {
            width: 0,
            height: 0,
        });
    }

    let height = sampling_height(src.width, src.height, target_width);
    if src.width == 0 || src.height == 0 {
        return Ok(PixelGrid::new(target_width, height));
    }

    let mut resizer = Resizer::new();
    resizer.resize(src, target_width, height)
}
