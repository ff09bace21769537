use std::io::Write;

use crate::stream_pipeline::common::error::Result;
use crate::stream_pipeline::raster::types::NormalizedImage;

pub trait BitstreamWriter {
    fn write_bitstream(&self, image: &NormalizedImage, output: &mut dyn Write) -> Result<()>;
}
