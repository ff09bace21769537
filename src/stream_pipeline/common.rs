//! Common utilities module
//!
//! This module contains shared utilities used across the stream pipeline.

pub mod error;

pub use error::{CodecError, Result};
