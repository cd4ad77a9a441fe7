/// Luminance-to-glyph encoding for imascii.

pub mod encode;

pub use encode::{convert, encode_image};
