//! Hardware test-bench collaboration module
//!
//! The simulation runner itself is external; this module only packages the
//! configuration it needs (as the flat generics string its VHDL side parses)
//! and compares the stream it produces against the golden input.

mod config;
mod compare;

pub use config::TestbenchConfig;
pub use compare::{CompareReport, DEFAULT_TOLERANCE, compare_stream_files, compare_streams};
