/// Triple RGB, 0–255 par canal.
pub type Rgb = (u8, u8, u8);

/// Grille de pixels source. Construite à la frontière (décodage), jamais
/// mutée par le cœur de conversion.
///
/// Stocke les pixels en RGB row-major, 3 bytes par pixel.
///
/// # Example
/// ```
/// use im_core::frame::PixelGrid;
/// let grid = PixelGrid::new(10, 10);
/// assert_eq!(grid.data.len(), 300);
/// ```
#[derive(Clone)]
pub struct PixelGrid {
    /// Pixels RGB, row-major, 3 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelGrid {
    /// Crée une grille noire aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use im_core::frame::PixelGrid;
    /// let grid = PixelGrid::new(100, 50);
    /// assert_eq!(grid.width, 100);
    /// assert_eq!(grid.height, 50);
    /// assert_eq!(grid.data.len(), 100 * 50 * 3);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Accès au pixel (x, y) → (r, g, b).
    ///
    /// # Example
    /// ```
    /// use im_core::frame::PixelGrid;
    /// let grid = PixelGrid::new(10, 10);
    /// assert_eq!(grid.pixel(0, 0), (0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        if idx + 2 >= self.data.len() {
            return (0, 0, 0);
        }
        (self.data[idx], self.data[idx + 1], self.data[idx + 2])
    }

    /// Luminance Rec. 601, poids entiers 299/587/114.
    ///
    /// # Example
    /// ```
    /// use im_core::frame::PixelGrid;
    /// let mut grid = PixelGrid::new(1, 1);
    /// grid.data.copy_from_slice(&[255, 255, 255]);
    /// assert_eq!(grid.luminance(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(&self, x: u32, y: u32) -> u8 {
        let (r, g, b) = self.pixel(x, y);
        ((u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000) as u8
    }
}

/// Plan de luminance dérivé d'une `PixelGrid`, aligné pixel à pixel.
///
/// # Example
/// ```
/// use im_core::frame::GrayGrid;
/// let gray = GrayGrid::new(4, 2);
/// assert_eq!(gray.data.len(), 8);
/// ```
#[derive(Clone)]
pub struct GrayGrid {
    /// Luma 0–255, row-major, 1 byte par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl GrayGrid {
    /// Crée un plan de luminance noir.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Luma du pixel (x, y).
    #[inline(always)]
    #[must_use]
    pub fn luma(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "luma out of bounds");
        let idx = y as usize * self.width as usize + x as usize;
        if idx >= self.data.len() {
            return 0;
        }
        self.data[idx]
    }
}

/// Grille de couleurs, une entrée RGB par cellule de la grille ASCII.
///
/// Produite une seule fois par l'encodeur, transmise telle quelle au
/// rendu — jamais mutée, jamais réduite (contrairement au texte, dont le
/// bloc est débarrassé de ses blancs de tête et de queue).
///
/// # Example
/// ```
/// use im_core::frame::ColorGrid;
/// let mut colors = ColorGrid::new(8, 4);
/// colors.set(2, 1, (255, 0, 0));
/// assert_eq!(colors.get(2, 1), Some((255, 0, 0)));
/// assert_eq!(colors.get(8, 1), None);
/// ```
#[derive(Clone)]
pub struct ColorGrid {
    /// Flat array of cells, row-major.
    pub cells: Vec<Rgb>,
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
}

impl ColorGrid {
    /// Crée une grille pré-remplie de noir.
    ///
    /// # Example
    /// ```
    /// use im_core::frame::ColorGrid;
    /// let colors = ColorGrid::new(80, 24);
    /// assert_eq!(colors.cells.len(), 80 * 24);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![(0, 0, 0); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Écrit la couleur de la cellule (x, y).
    #[inline(always)]
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        debug_assert!(x < self.width && y < self.height, "cell out of bounds");
        let idx = y as usize * self.width as usize + x as usize;
        if let Some(cell) = self.cells.get_mut(idx) {
            *cell = color;
        }
    }

    /// Couleur de la cellule (x, y), `None` hors grille.
    ///
    /// Le rendu substitue du blanc opaque à tout `None` — une colonne au-delà
    /// de la longueur d'une ligne n'est jamais une erreur.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Dimensions (width, height) en cellules.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Sortie complète de l'encodeur : texte et couleurs, créés ensemble et
/// régénérés en bloc à chaque conversion.
///
/// # Example
/// ```
/// use im_core::frame::{AsciiArt, ColorGrid};
/// let art = AsciiArt {
///     text: "@@\n..".to_string(),
///     colors: ColorGrid::new(2, 2),
///     source_size: (200, 100),
/// };
/// assert_eq!(art.text.lines().count(), 2);
/// ```
#[derive(Clone)]
pub struct AsciiArt {
    /// Grille de caractères jointe par `\n`, bloc entier trimé.
    pub text: String,
    /// Couleur source de chaque cellule pré-trim.
    pub colors: ColorGrid,
    /// Taille native (w, h) de l'image d'origine, pour la politique
    /// `PreserveOriginalAspect` du rendu.
    pub source_size: (u32, u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_grid_reads_back_raw_data() {
        let mut grid = PixelGrid::new(2, 1);
        grid.data.copy_from_slice(&[10, 20, 30, 40, 50, 60]);
        assert_eq!(grid.pixel(0, 0), (10, 20, 30));
        assert_eq!(grid.pixel(1, 0), (40, 50, 60));
    }

    #[test]
    fn luminance_uses_rec601_weights() {
        let mut grid = PixelGrid::new(3, 1);
        grid.data.copy_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 255]);
        assert_eq!(grid.luminance(0, 0), 76); // 255*299/1000
        assert_eq!(grid.luminance(1, 0), 149); // 255*587/1000
        assert_eq!(grid.luminance(2, 0), 29); // 255*114/1000
    }

    #[test]
    fn color_grid_out_of_range_is_none() {
        let colors = ColorGrid::new(4, 3);
        assert_eq!(colors.get(3, 2), Some((0, 0, 0)));
        assert_eq!(colors.get(4, 0), None);
        assert_eq!(colors.get(0, 3), None);
    }

    #[test]
    fn color_grid_set_then_get_round_trips() {
        let mut colors = ColorGrid::new(4, 3);
        colors.set(0, 0, (1, 2, 3));
        colors.set(3, 2, (200, 100, 50));
        assert_eq!(colors.get(0, 0), Some((1, 2, 3)));
        assert_eq!(colors.get(3, 2), Some((200, 100, 50)));
    }
}
