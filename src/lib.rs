//! Pixel-to-bitstream codec for the piximatrix LED matrix test bench.
//!
//! Normalizes raster images to a fixed 64x64 resolution and serializes every
//! sample as line-oriented 8-bit binary records for consumption by an external
//! VHDL simulation, plus the inverse transform used to compare golden and
//! simulated streams.

pub mod logger;
pub mod stream_pipeline;
