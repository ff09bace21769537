//! Bitstream encoding and decoding module
//!
//! The interchange format with the hardware test bench: one 8-bit sample per
//! line, rendered as a zero-padded binary token, `height * width * 3` lines
//! per image in row-major pixel order.

mod writer;
mod line_writer;
mod decoder;
pub mod types;

pub use writer::BitstreamWriter;
pub use line_writer::LineRecordWriter;
pub use decoder::{ReconstructedImage, SampleCoord, decode_bitstream, decode_bitstream_file};
pub use types::{
    ChannelOrder, CodecConfig, CodecConfigBuilder, DECODE_CHANNEL_ORDER, ENCODE_CHANNEL_ORDER,
    RECORD_BITS,
};
