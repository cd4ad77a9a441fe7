use thiserror::Error;

/// Errors originating from the conversion core.
///
/// Transient problems (unsupported metric query, missing preferred font,
/// degenerate computed size) are recovered locally behind warnings and never
/// reach this enum; only structural failures do.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Input image path does not resolve to a readable file.
    #[error("Image introuvable : {path}")]
    ImageNotFound {
        /// Path that was not found.
        path: String,
    },

    /// Image bytes could not be decoded.
    #[error("Décodage impossible de {path} : {reason}")]
    Decode {
        /// Path of the offending file.
        path: String,
        /// Underlying decoder failure.
        reason: String,
    },

    /// No usable monospace font after the whole fallback chain.
    #[error("Aucune police utilisable (demandée : {requested}, taille {size}px)")]
    FontUnavailable {
        /// Explicit path asked for, or "auto" when probing.
        requested: String,
        /// Requested pixel size.
        size: f32,
    },

    /// Rendered output would exceed the canvas dimension bound.
    #[error("Image générée trop grande : {width}×{height} (maximum {max})")]
    OutputTooLarge {
        /// Computed canvas width in pixels.
        width: u64,
        /// Computed canvas height in pixels.
        height: u64,
        /// Per-dimension bound.
        max: u32,
    },

    /// Unexpected drawing-collaborator failure.
    #[error("Échec du rendu : {0}")]
    Render(String),

    /// Invalid width/height reported by a collaborator.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },
}
