//! Raster reader implementation using the image library.
//!
//! This module provides support for reading common compressed image formats
//! (PNG, JPEG, BMP, GIF, ...) using the image library. Decoded pixels are
//! reordered into the blue-green-red channel layout that the bitstream record
//! format was defined against.

use tracing::debug;

use crate::stream_pipeline::common::error::{CodecError, Result};
use crate::stream_pipeline::raster::reader::RasterReader;
use crate::stream_pipeline::raster::types::{RasterImage, REQUIRED_CHANNELS};

/// Raster reader that uses the image library for decoding.
///
/// Supports any format the image library can decode. The alpha channel, if
/// present, is dropped; the remaining three channels are stored B,G,R.
pub struct ImageCrateReader;

impl RasterReader for ImageCrateReader {
    fn read_raster(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding raster image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| CodecError::DecodeError(e.to_string()))?;

        let rgb = decoded.to_rgb8();
        let width = rgb.width() as usize;
        let height = rgb.height() as usize;

        debug!("Decoded image: {}x{}", width, height);

        // Interleave as B,G,R to match the loader-native convention.
        let mut samples = Vec::with_capacity(height * width * REQUIRED_CHANNELS);
        for pixel in rgb.pixels() {
            let [r, g, b] = pixel.0;
            samples.push(b);
            samples.push(g);
            samples.push(r);
        }

        RasterImage::from_samples(height, width, REQUIRED_CHANNELS, samples)
    }
}
