/// Image acquisition and preprocessing for imascii (decode, resample, grayscale).

pub mod gray;
pub mod loader;
pub mod resize;

pub use gray::to_grayscale;
pub use loader::load_rgb;
pub use resize::{resample, sampling_height, Resizer};
