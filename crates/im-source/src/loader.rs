use std::path::Path;

use im_core::{CoreError, PixelGrid};

/// Charge une image depuis le disque et la convertit en RGB 8 bits.
///
/// Les formats acceptés sont ceux activés sur la crate `image`
/// (PNG, JPEG, BMP, GIF, WebP). L'alpha éventuel est aplati par `to_rgb8`.
///
/// # Errors
/// [`CoreError::ImageNotFound`] si le chemin ne pointe vers aucun fichier,
/// [`CoreError::Decode`] si les octets ne forment pas une image valide.
///
/// # Example
/// ```no_run
/// use im_source::loader::load_rgb;
/// use std::path::Path;
/// let grid = load_rgb(Path::new("photo.png")).unwrap();
/// assert!(grid.width > 0);
/// ```
pub fn load_rgb(path: &Path) -> Result<PixelGrid, CoreError> {
    if !path.is_file() {
        return Err(CoreError::ImageNotFound {
            path: path.display().to_string(),
        });
    }

    let img = image::open(path).map_err(|e| CoreError::Decode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    log::debug!("Image décodée : {}×{} ({})", width, height, path.display());

    Ok(PixelGrid {
        data: rgb.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_reports_not_found() {
        let err = load_rgb(Path::new("/nonexistent/photo.png")).err().unwrap();
        assert!(matches!(err, CoreError::ImageNotFound { .. }));
        assert!(err.to_string().contains("photo.png"));
    }

    #[test]
    fn garbage_bytes_report_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"definitely not an image").unwrap();
        drop(f);

        assert!(matches!(load_rgb(&path), Err(CoreError::Decode { .. })));
    }

    #[test]
    fn png_round_trips_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.png");
        let img = image::RgbImage::from_fn(4, 2, |x, y| {
            image::Rgb([x as u8 * 10, y as u8 * 20, 200])
        });
        img.save(&path).unwrap();

        let grid = load_rgb(&path).unwrap();
        assert_eq!((grid.width, grid.height), (4, 2));
        assert_eq!(grid.pixel(3, 1), (30, 20, 200));
        assert_eq!(grid.pixel(0, 0), (0, 0, 200));
    }
}
