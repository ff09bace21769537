use tracing::debug;

use crate::stream_pipeline::common::error::{CodecError, Result};
use crate::stream_pipeline::normalize::resize::resize_area;
use crate::stream_pipeline::raster::types::{NormalizedImage, RasterImage, REQUIRED_CHANNELS};

/// Fixed square resolution all images are normalized to before encoding.
pub const TARGET_SIZE: usize = 64;

/// Normalizes arbitrary raster images to `TARGET_SIZE x TARGET_SIZE`.
///
/// The crop is centered on the integer bisectors of the long axis, so the
/// cropped side is `2 * floor(short_side / 2)` and can be one sample shorter
/// than the short side when that side is odd. The hardware golden files were
/// produced with exactly this rule, so it is kept as-is rather than rounded
/// up.
pub struct Normalizer;

impl Normalizer {
    pub fn normalize(&self, source: &RasterImage) -> Result<NormalizedImage> {
        if source.channels != REQUIRED_CHANNELS {
            return Err(CodecError::ChannelCountError(source.channels));
        }
        if source.height == 0 || source.width == 0 {
            return Err(CodecError::InvalidDimensions(source.width, source.height));
        }

        let (row_range, col_range) = crop_bounds(source.height, source.width);
        // A short side of 1 has bisector 0, leaving nothing to crop; resizing
        // an empty window would fabricate samples out of thin air.
        if row_range.0 == row_range.1 || col_range.0 == col_range.1 {
            return Err(CodecError::InvalidDimensions(source.width, source.height));
        }
        debug!(
            "Cropping {}x{} to rows [{}, {}), cols [{}, {})",
            source.height, source.width, row_range.0, row_range.1, col_range.0, col_range.1,
        );

        let cropped = crop(source, row_range, col_range);
        let resized = resize_area(&cropped, TARGET_SIZE, TARGET_SIZE);

        Ok(NormalizedImage::new_unchecked(resized))
    }
}

/// Computes the centered crop window as half-open `(start, end)` ranges for
/// rows and columns.
pub(crate) fn crop_bounds(height: usize, width: usize) -> ((usize, usize), (usize, usize)) {
    let half_h = height / 2;
    let half_w = width / 2;
    if height > width {
        ((half_h - half_w, half_h + half_w), (0, width))
    } else {
        ((0, height), (half_w - half_h, half_w + half_h))
    }
}

fn crop(source: &RasterImage, rows: (usize, usize), cols: (usize, usize)) -> RasterImage {
    let height = rows.1 - rows.0;
    let width = cols.1 - cols.0;
    let channels = source.channels;

    let mut data = Vec::with_capacity(height * width * channels);
    for row in rows.0..rows.1 {
        let start = (row * source.width + cols.0) * channels;
        let end = (row * source.width + cols.1) * channels;
        data.extend_from_slice(&source.data[start..end]);
    }

    RasterImage {
        height,
        width,
        channels,
        data,
    }
}
