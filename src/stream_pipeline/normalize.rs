//! Image normalization module
//!
//! Center-crops a raster image to a square and resizes it to the fixed target
//! resolution expected by the hardware pipeline.

mod normalizer;
mod resize;

pub use normalizer::{Normalizer, TARGET_SIZE};
