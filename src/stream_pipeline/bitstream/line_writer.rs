use std::fmt::Write as _;
use std::io::Write;

use tracing::debug;

use crate::stream_pipeline::bitstream::types::{ENCODE_CHANNEL_ORDER, RECORD_BITS};
use crate::stream_pipeline::bitstream::writer::BitstreamWriter;
use crate::stream_pipeline::common::error::Result;
use crate::stream_pipeline::raster::types::NormalizedImage;

/// Encodes a normalized image as newline-delimited binary records.
///
/// Pixels are traversed row-major; within a pixel, samples are emitted per
/// [`ENCODE_CHANNEL_ORDER`], converting B,G,R storage into R,G,B records.
/// The whole stream is rendered into one buffer before anything is written,
/// so an I/O failure never leaves a short artifact that parses as a valid
/// smaller image.
pub struct LineRecordWriter;

impl LineRecordWriter {
    /// Renders the bitstream to a string, one record per line.
    pub fn encode_to_string(&self, image: &NormalizedImage) -> String {
        let raster = image.image();
        // RECORD_BITS characters plus the newline.
        let mut buffer =
            String::with_capacity(raster.data.len() * (RECORD_BITS + 1));

        for row in 0..raster.height {
            for col in 0..raster.width {
                for position in 0..raster.channels {
                    let channel = ENCODE_CHANNEL_ORDER.storage_index(position, raster.channels);
                    let sample = raster.sample(row, col, channel);
                    // Infallible: writing to a String cannot fail.
                    let _ = writeln!(buffer, "{sample:08b}");
                }
            }
        }

        buffer
    }
}

impl BitstreamWriter for LineRecordWriter {
    fn write_bitstream(&self, image: &NormalizedImage, output: &mut dyn Write) -> Result<()> {
        let raster = image.image();
        debug!(
            "Encoding bitstream: {}x{}x{}",
            raster.height, raster.width, raster.channels
        );

        let buffer = self.encode_to_string(image);
        output.write_all(buffer.as_bytes())?;

        debug!("Bitstream encoding complete, {} records", raster.data.len());
        Ok(())
    }
}
