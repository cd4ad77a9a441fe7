/// Rampe par défaut — 10 glyphes, du plus dense au plus clair.
pub const RAMP_CLASSIC: &str = "@%#*+=-:. ";

/// 70 glyphes — Paul Bourke, résolution maximale (dense→clair).
pub const RAMP_EXTENDED: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Rampe de glyphes ordonnée, indexée par luminosité.
///
/// La convention est dense→clair mais la rampe est traitée comme une
/// séquence opaque : l'index est `luminosité × longueur / 256`, borné à
/// `longueur - 1`. Une table de 256 entrées est pré-calculée pour un coût
/// O(1) par pixel.
///
/// # Example
/// ```
/// use im_core::ramp::Ramp;
/// let ramp = Ramp::new("@%#*+=-:. ");
/// assert_eq!(ramp.glyph_for(0), '@');
/// assert_eq!(ramp.glyph_for(255), ' ');
/// ```
pub struct Ramp {
    glyphs: Vec<char>,
    lut: [char; 256],
}

impl Ramp {
    /// Construit une rampe à partir d'une chaîne de glyphes.
    ///
    /// Une chaîne vide retombe sur [`RAMP_CLASSIC`].
    ///
    /// # Example
    /// ```
    /// use im_core::ramp::Ramp;
    /// let ramp = Ramp::new("");
    /// assert_eq!(ramp.len(), 10);
    /// ```
    #[must_use]
    pub fn new(charset: &str) -> Self {
        let glyphs: Vec<char> = charset.chars().collect();
        if glyphs.is_empty() {
            return Self::new(RAMP_CLASSIC);
        }
        let mut lut = [' '; 256];
        for (brightness, slot) in lut.iter_mut().enumerate() {
            let idx = (brightness * glyphs.len() / 256).min(glyphs.len() - 1);
            *slot = glyphs[idx];
        }
        Self { glyphs, lut }
    }

    /// Nombre de glyphes de la rampe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Toujours faux — une rampe vide retombe sur la rampe par défaut.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Index de rampe pour une luminosité [0..255].
    ///
    /// Monotone croissant en luminosité, toujours dans `[0, len - 1]` —
    /// la borne protège le cas 255 sous division entière.
    ///
    /// # Example
    /// ```
    /// use im_core::ramp::Ramp;
    /// let ramp = Ramp::new("@%#*+=-:. ");
    /// assert_eq!(ramp.index_for(255), 9);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn index_for(&self, brightness: u8) -> usize {
        (brightness as usize * self.glyphs.len() / 256).min(self.glyphs.len() - 1)
    }

    /// Glyphe pour une luminosité [0..255] (table pré-calculée).
    ///
    /// # Example
    /// ```
    /// use im_core::ramp::Ramp;
    /// let ramp = Ramp::new("@%#*+=-:. ");
    /// assert_eq!(ramp.glyph_for(128), '=');
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn glyph_for(&self, brightness: u8) -> char {
        self.lut[brightness as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_extremes_of_classic_ramp() {
        let ramp = Ramp::new(RAMP_CLASSIC);
        assert_eq!(ramp.glyph_for(0), '@');
        assert_eq!(ramp.glyph_for(255), ' ');
    }

    #[test]
    fn brightness_255_stays_in_range() {
        // 255 * 10 / 256 == 9 : la borne est là pour les rampes dont la
        // division entière déborderait, jamais déclenchée pour 10 glyphes.
        let ramp = Ramp::new(RAMP_CLASSIC);
        assert_eq!(ramp.index_for(255), 9);
        for b in 0..=255u8 {
            assert!(ramp.index_for(b) < ramp.len());
        }
    }

    #[test]
    fn index_is_monotonic_in_brightness() {
        let ramp = Ramp::new(RAMP_CLASSIC);
        let mut prev = 0usize;
        for b in 0..=255u8 {
            let idx = ramp.index_for(b);
            assert!(idx >= prev, "index non monotone à la luminosité {b}");
            prev = idx;
        }
    }

    #[test]
    fn lut_agrees_with_index_formula() {
        let ramp = Ramp::new(RAMP_EXTENDED);
        let glyphs: Vec<char> = RAMP_EXTENDED.chars().collect();
        for b in 0..=255u8 {
            assert_eq!(ramp.glyph_for(b), glyphs[ramp.index_for(b)]);
        }
    }

    #[test]
    fn empty_charset_falls_back_to_classic() {
        let ramp = Ramp::new("");
        assert_eq!(ramp.len(), RAMP_CLASSIC.chars().count());
        assert!(!ramp.is_empty());
    }

    #[test]
    fn single_glyph_ramp_is_valid() {
        let ramp = Ramp::new("#");
        assert_eq!(ramp.glyph_for(0), '#');
        assert_eq!(ramp.glyph_for(255), '#');
    }
}
