use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode raster image: {0}")]
    DecodeError(String),

    #[error("Failed to encode PNG image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Expected a 3-channel image, got {0} channels")]
    ChannelCountError(usize),

    #[error("Bitstream too short: expected {expected} records, found {actual}")]
    StreamLengthMismatch { expected: usize, actual: usize },

    #[error("Image shapes differ: {0}x{1} vs {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;
