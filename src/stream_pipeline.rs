//! Image-to-bitstream pipeline module
//!
//! This module provides a structured approach to test-image generation for the
//! hardware pipeline, with separate modules for raster loading, normalization,
//! bitstream encoding/decoding, and conversion orchestration.

pub mod raster;
pub mod normalize;
pub mod bitstream;
pub mod conversions;
pub mod testbench;
pub mod common;

pub use common::{
    CodecError,
    Result,
};

pub use raster::{
    RasterImage,
    NormalizedImage,
    RasterReader,
    ImageCrateReader,
};

pub use normalize::{
    Normalizer,
    TARGET_SIZE,
};

pub use bitstream::{
    ChannelOrder,
    CodecConfig,
    CodecConfigBuilder,
    BitstreamWriter,
    LineRecordWriter,
    ReconstructedImage,
    SampleCoord,
    ENCODE_CHANNEL_ORDER,
    DECODE_CHANNEL_ORDER,
    RECORD_BITS,
    decode_bitstream,
    decode_bitstream_file,
};

pub use conversions::{
    RasterToBitstreamPipeline,
    GeneratedArtifacts,
};

pub use testbench::{
    TestbenchConfig,
    CompareReport,
    DEFAULT_TOLERANCE,
    compare_streams,
    compare_stream_files,
};
