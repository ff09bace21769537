//! Golden-versus-simulated stream comparison

use std::path::Path;

use tracing::{info, warn};

use crate::stream_pipeline::bitstream::{
    ReconstructedImage, SampleCoord, decode_bitstream_file,
};
use crate::stream_pipeline::common::error::{CodecError, Result};

/// Default absolute tolerance for sample comparison.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Outcome of comparing two reconstructed images.
#[derive(Debug, Clone)]
pub struct CompareReport {
    /// First sample exceeding the tolerance, with golden and simulated values
    pub first_mismatch: Option<(SampleCoord, f64, f64)>,
    /// Malformed-record coordinates found in the golden stream
    pub golden_malformed: Vec<SampleCoord>,
    /// Malformed-record coordinates found in the simulated stream
    pub simulated_malformed: Vec<SampleCoord>,
}

impl CompareReport {
    /// True when every sample matched within tolerance.
    pub fn matches(&self) -> bool {
        self.first_mismatch.is_none()
    }
}

/// Compares two reconstructed images sample by sample.
///
/// Returns `ShapeMismatch` when the two images disagree on height or width;
/// a sample-by-sample comparison of differently shaped images would misindex
/// rather than report anything meaningful.
pub fn compare_streams(
    golden: &ReconstructedImage,
    simulated: &ReconstructedImage,
    tolerance: f64,
) -> Result<CompareReport> {
    if golden.height != simulated.height || golden.width != simulated.width {
        return Err(CodecError::ShapeMismatch(
            golden.height,
            golden.width,
            simulated.height,
            simulated.width,
        ));
    }

    let mut first_mismatch = None;
    'rows: for row in 0..golden.height {
        for col in 0..golden.width {
            for channel in 0..3 {
                let g = golden.sample(row, col, channel);
                let s = simulated.sample(row, col, channel);
                if (g - s).abs() > tolerance {
                    first_mismatch = Some((SampleCoord { row, col, channel }, g, s));
                    break 'rows;
                }
            }
        }
    }

    Ok(CompareReport {
        first_mismatch,
        golden_malformed: golden.malformed.clone(),
        simulated_malformed: simulated.malformed.clone(),
    })
}

/// Decodes a golden and a simulated bitstream artifact and compares them.
pub fn compare_stream_files<P: AsRef<Path>, Q: AsRef<Path>>(
    golden_path: P,
    simulated_path: Q,
    height: usize,
    width: usize,
    tolerance: f64,
) -> Result<CompareReport> {
    let golden = decode_bitstream_file(golden_path.as_ref(), height, width)?;
    let simulated = decode_bitstream_file(simulated_path.as_ref(), height, width)?;

    let report = compare_streams(&golden, &simulated, tolerance)?;
    match &report.first_mismatch {
        None => info!("Streams match within tolerance {}", tolerance),
        Some((coord, g, s)) => warn!(
            row = coord.row,
            col = coord.col,
            channel = coord.channel,
            golden = g,
            simulated = s,
            "Streams differ"
        ),
    }

    Ok(report)
}
