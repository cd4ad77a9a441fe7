use im_core::{GrayGrid, PixelGrid};

/// Conversion RGB → niveaux de gris, pondération Rec. 601 entière.
///
/// Même arithmétique que [`PixelGrid::luminance`], appliquée à toute la
/// grille en un seul passage.
///
/// # Example
/// ```
/// use im_core::PixelGrid;
/// use im_source::gray::to_grayscale;
/// let mut grid = PixelGrid::new(2, 1);
/// grid.data.copy_from_slice(&[255, 0, 0, 0, 255, 0]);
/// let gray = to_grayscale(&grid);
/// assert_eq!(gray.data, vec![76, 149]);
/// ```
#[must_use]
pub fn to_grayscale(src: &PixelGrid) -> GrayGrid {
    let data = src
        .data
        .chunks_exact(3)
        .map(|p| {
            let lum =
                (u32::from(p[0]) * 299 + u32::from(p[1]) * 587 + u32::from(p[2]) * 114) / 1000;
            lum as u8
        })
        .collect();

    GrayGrid {
        data,
        width: src.width,
        height: src.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_weights_match_rec601() {
        let mut grid = PixelGrid::new(3, 1);
        grid.data.copy_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 255]);
        let gray = to_grayscale(&grid);
        assert_eq!(gray.data, vec![76, 149, 29]);
    }

    #[test]
    fn extremes_map_to_extremes() {
        let mut grid = PixelGrid::new(2, 1);
        grid.data.copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        let gray = to_grayscale(&grid);
        assert_eq!(gray.luma(0, 0), 0);
        assert_eq!(gray.luma(1, 0), 255);
    }

    #[test]
    fn agrees_with_per_pixel_luminance() {
        let mut grid = PixelGrid::new(4, 3);
        for (i, b) in grid.data.iter_mut().enumerate() {
            *b = (i * 17 % 256) as u8;
        }
        let gray = to_grayscale(&grid);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(gray.luma(x, y), grid.luminance(x, y));
            }
        }
    }
}
