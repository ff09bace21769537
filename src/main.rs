//! Test-image generator and stream verifier for the piximatrix test bench.
//!
//! Three modes:
//! 1. **generate:** Normalize a source image to 64x64 and write its PNG copy
//!    and bitstream artifacts next to it.
//! 2. **decode:** Reconstruct an image from a bitstream and report any
//!    malformed records.
//! 3. **compare:** Check a simulated stream against its golden input.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use piximatrix_codec::logger;
use piximatrix_codec::stream_pipeline::{
    CodecConfig, DEFAULT_TOLERANCE, RasterToBitstreamPipeline, TARGET_SIZE, TestbenchConfig,
    compare_stream_files, decode_bitstream_file,
};

#[derive(Parser, Debug)]
#[command(
    name = "piximatrix-codec",
    version,
    about = "Pixel-to-bitstream codec for the piximatrix hardware test bench",
    long_about = "Normalizes raster images to 64x64 and converts them to/from the \
line-oriented binary record streams the VHDL simulation exchanges.\n\nExamples:\n  \
piximatrix-codec generate python/lena.jpg\n  \
piximatrix-codec decode python/lena_post.txt\n  \
piximatrix-codec compare python/lena.txt python/lena_post.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize an image and write its bitstream and PNG artifacts.
    Generate {
        /// Source image (PNG, JPEG, BMP, ...).
        image: PathBuf,

        /// Skip the visual PNG copy.
        #[arg(long)]
        no_png: bool,

        /// Suffix for the PNG copy's file stem.
        #[arg(long, default_value = "64x64")]
        png_suffix: String,
    },

    /// Reconstruct an image from a bitstream and report malformed records.
    Decode {
        /// Bitstream artifact to decode.
        stream: PathBuf,

        /// Image height in pixels.
        #[arg(long, default_value_t = TARGET_SIZE)]
        height: usize,

        /// Image width in pixels.
        #[arg(long, default_value_t = TARGET_SIZE)]
        width: usize,
    },

    /// Compare a simulated bitstream against the golden input.
    Compare {
        /// Golden bitstream (what went into the simulation).
        golden: PathBuf,

        /// Simulated bitstream (what came out).
        simulated: PathBuf,

        /// Image height in pixels.
        #[arg(long, default_value_t = TARGET_SIZE)]
        height: usize,

        /// Image width in pixels.
        #[arg(long, default_value_t = TARGET_SIZE)]
        width: usize,

        /// Absolute per-sample tolerance.
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            image,
            no_png,
            png_suffix,
        } => {
            let config = CodecConfig::builder()
                .write_png(!no_png)
                .png_suffix(png_suffix)
                .build();
            let pipeline = RasterToBitstreamPipeline::new(config);

            let artifacts = pipeline
                .generate_file(&image)
                .with_context(|| format!("generating artifacts for {}", image.display()))?;

            info!("Bitstream written to {}", artifacts.bitstream_path.display());
            if let Some(png) = &artifacts.png_path {
                info!("Normalized PNG written to {}", png.display());
            }

            // Generics string for driving the test bench against this stream.
            let stem = artifacts
                .bitstream_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("stream");
            let expected_path = artifacts
                .bitstream_path
                .with_file_name(format!("{stem}_post.txt"));
            let tb_config = TestbenchConfig::new(&artifacts.bitstream_path, &expected_path);
            info!("Test-bench generics: {}", tb_config.encode_generics());
        }

        Commands::Decode {
            stream,
            height,
            width,
        } => {
            let image = decode_bitstream_file(&stream, height, width)
                .with_context(|| format!("decoding {}", stream.display()))?;

            info!(
                "Decoded {}x{}x3 image from {}",
                image.height,
                image.width,
                stream.display()
            );
            for coord in &image.malformed {
                warn!(
                    "Malformed record at row={} col={} channel={}",
                    coord.row, coord.col, coord.channel
                );
            }
            if !image.malformed.is_empty() {
                warn!("{} records were substituted with 1.0", image.malformed.len());
            }
        }

        Commands::Compare {
            golden,
            simulated,
            height,
            width,
            tolerance,
        } => {
            let report = compare_stream_files(&golden, &simulated, height, width, tolerance)
                .context("comparing streams")?;

            if let Some((coord, g, s)) = report.first_mismatch {
                error!(
                    "Mismatch at row={} col={} channel={}: golden={} simulated={}",
                    coord.row, coord.col, coord.channel, g, s
                );
                process::exit(1);
            }
            info!("All post tests passed.");
        }
    }

    Ok(())
}
