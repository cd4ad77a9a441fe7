/// Configuration, types, and shared structures for imascii.
///
/// This crate contains all shared types, error taxonomy and configuration
/// logic used across the imascii workspace.

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod ramp;

pub use config::{AspectPolicy, ConvertConfig};
pub use error::CoreError;
pub use frame::{AsciiArt, ColorGrid, GrayGrid, PixelGrid, Rgb};
pub use ramp::Ramp;
