/// Raster re-rendering of colored ASCII art (font discovery, layout, drawing).

pub mod font;
pub mod layout;
pub mod raster;

pub use font::{resolve_font, FontCatalog, FontHandle, GlyphMetrics, Platform};
pub use layout::{compute_cell_height, plan_canvas, CanvasPlan, MAX_CANVAS_DIM};
pub use raster::Renderer;
