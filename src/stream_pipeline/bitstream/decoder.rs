//! Bitstream decoder.
//!
//! Reconstructs a normalized floating-point image from a record stream, for
//! comparing what the hardware simulation produced against the golden input.
//! The decoder is a best-effort verification tool: one corrupt record must
//! not abort an otherwise useful comparison, so malformed tokens are
//! substituted with `1.0` and reported rather than treated as fatal.

use std::path::Path;

use tracing::{debug, warn};

use crate::stream_pipeline::bitstream::types::DECODE_CHANNEL_ORDER;
use crate::stream_pipeline::common::error::{CodecError, Result};
use crate::stream_pipeline::raster::types::REQUIRED_CHANNELS;

/// Coordinates of a single sample within an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleCoord {
    pub row: usize,
    pub col: usize,
    pub channel: usize,
}

/// A decoded image with samples normalized to `[0.0, 1.0]`.
///
/// `malformed` lists every sample whose record failed to parse and was
/// substituted with `1.0`; an empty list means the stream decoded cleanly.
#[derive(Debug, Clone)]
pub struct ReconstructedImage {
    pub height: usize,
    pub width: usize,
    /// Interleaved samples, `height * width * 3` values
    pub data: Vec<f64>,
    /// Coordinates of substituted samples, in stream order
    pub malformed: Vec<SampleCoord>,
}

impl ReconstructedImage {
    /// Returns the sample at `(row, col, channel)`.
    ///
    /// # Panics
    ///
    /// Panics when the coordinates are out of bounds.
    #[inline]
    pub fn sample(&self, row: usize, col: usize, channel: usize) -> f64 {
        self.data[(row * self.width + col) * REQUIRED_CHANNELS + channel]
    }
}

/// Decodes a record stream into a `(height, width, 3)` image.
///
/// Tokens are whitespace-delimited; fewer than `height * width * 3` of them
/// is a fatal [`CodecError::StreamLengthMismatch`], while surplus tokens are
/// ignored. Within a pixel, tokens map to channels per
/// [`DECODE_CHANNEL_ORDER`] (stream order); see the note on that constant for
/// the asymmetry with the encoder.
pub fn decode_bitstream(stream: &str, height: usize, width: usize) -> Result<ReconstructedImage> {
    let tokens: Vec<&str> = stream.split_whitespace().collect();
    let expected = height * width * REQUIRED_CHANNELS;
    if tokens.len() < expected {
        return Err(CodecError::StreamLengthMismatch {
            expected,
            actual: tokens.len(),
        });
    }

    debug!("Decoding {} records into {}x{}x3", expected, height, width);

    let mut data = vec![0.0; expected];
    let mut malformed = Vec::new();

    for row in 0..height {
        for col in 0..width {
            for position in 0..REQUIRED_CHANNELS {
                let channel = DECODE_CHANNEL_ORDER.storage_index(position, REQUIRED_CHANNELS);
                let token = tokens[REQUIRED_CHANNELS * (row * width + col) + position];
                let value = match u32::from_str_radix(token, 2) {
                    Ok(raw) => raw as f64 / 255.0,
                    Err(_) => {
                        warn!(row, col, channel, token, "Malformed record, substituting 1.0");
                        malformed.push(SampleCoord { row, col, channel });
                        1.0
                    }
                };
                data[(row * width + col) * REQUIRED_CHANNELS + channel] = value;
            }
        }
    }

    if !malformed.is_empty() {
        warn!("{} malformed records substituted", malformed.len());
    }

    Ok(ReconstructedImage {
        height,
        width,
        data,
        malformed,
    })
}

/// Reads a bitstream artifact from disk and decodes it.
pub fn decode_bitstream_file<P: AsRef<Path>>(
    path: P,
    height: usize,
    width: usize,
) -> Result<ReconstructedImage> {
    let path = path.as_ref();
    let stream = std::fs::read_to_string(path)
        .map_err(|e| CodecError::InputReadError(format!("{}: {}", path.display(), e)))?;
    decode_bitstream(&stream, height, width)
}
