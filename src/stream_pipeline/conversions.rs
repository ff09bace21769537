//! Pipeline conversions module
//!
//! This module contains orchestration logic for turning source images into
//! test-bench artifacts.

mod raster_to_bitstream;
#[cfg(test)]
mod tests;

pub use raster_to_bitstream::{GeneratedArtifacts, RasterToBitstreamPipeline};
