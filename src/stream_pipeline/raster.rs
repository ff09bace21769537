//! Raster image loading module
//!
//! This module provides format-agnostic raster image loading capabilities.

mod reader;
mod image_reader;
pub mod types;

pub use reader::RasterReader;
pub use image_reader::ImageCrateReader;
pub use types::{RasterImage, NormalizedImage};
