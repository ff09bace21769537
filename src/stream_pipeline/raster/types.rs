//! Raster image data types

use crate::stream_pipeline::common::error::{CodecError, Result};

/// Number of channels the hardware pipeline expects.
pub const REQUIRED_CHANNELS: usize = 3;

/// Represents a decoded raster image.
///
/// Samples are stored interleaved in row-major order with the loader-native
/// channel order (blue, green, red), matching the convention the bitstream
/// record format was defined against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Height of the image in pixels
    pub height: usize,
    /// Width of the image in pixels
    pub width: usize,
    /// Number of channels per pixel
    pub channels: usize,
    /// Interleaved pixel samples, `height * width * channels` values
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Builds a raster image from interleaved samples.
    ///
    /// Returns `InvalidDimensions` when the sample count does not match the
    /// declared shape.
    pub fn from_samples(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<u8>,
    ) -> Result<Self> {
        if data.len() != height * width * channels {
            return Err(CodecError::InvalidDimensions(width, height));
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Returns the sample at `(row, col, channel)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates are out of bounds.
    #[inline]
    pub fn sample(&self, row: usize, col: usize, channel: usize) -> u8 {
        self.data[(row * self.width + col) * self.channels + channel]
    }
}

/// A raster image normalized to the fixed square target resolution.
///
/// Only the normalizer constructs this type, so holding one guarantees the
/// shape invariant `height == width == TARGET_SIZE` without re-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImage {
    image: RasterImage,
}

impl NormalizedImage {
    pub(crate) fn new_unchecked(image: RasterImage) -> Self {
        Self { image }
    }

    /// The underlying raster data.
    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    /// Side length of the square image.
    pub fn size(&self) -> usize {
        self.image.height
    }
}
