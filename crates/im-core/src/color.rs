use crate::frame::Rgb;

/// Blanc opaque — couleur de secours pour toute cellule hors grille.
pub const WHITE: Rgb = (255, 255, 255);

/// Noir opaque — fond par défaut du rendu.
pub const BLACK: Rgb = (0, 0, 0);

/// Parse une couleur "R,G,B" décimale (ex. "255,128,0").
///
/// # Example
/// ```
/// use im_core::color::parse_rgb;
/// assert_eq!(parse_rgb("255,128,0"), Some((255, 128, 0)));
/// assert_eq!(parse_rgb(" 0 , 0 , 0 "), Some((0, 0, 0)));
/// assert_eq!(parse_rgb("300,0,0"), None);
/// assert_eq!(parse_rgb("1,2"), None);
/// ```
#[must_use]
pub fn parse_rgb(s: &str) -> Option<Rgb> {
    let mut parts = s.split(',').map(|part| part.trim().parse::<u8>().ok());
    let r = parts.next()??;
    let g = parts.next()??;
    let b = parts.next()??;
    if parts.next().is_some() {
        return None;
    }
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_extra_components() {
        assert_eq!(parse_rgb("1,2,3,4"), None);
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(parse_rgb("rouge,0,0"), None);
        assert_eq!(parse_rgb(""), None);
    }

    #[test]
    fn accepts_bounds() {
        assert_eq!(parse_rgb("0,0,0"), Some(BLACK));
        assert_eq!(parse_rgb("255,255,255"), Some(WHITE));
    }
}
