use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::stream_pipeline::{
    bitstream::{BitstreamWriter, LineRecordWriter, types::CodecConfig},
    common::error::{CodecError, Result},
    normalize::Normalizer,
    raster::{ImageCrateReader, RasterReader, types::NormalizedImage},
};

/// Orchestrates image loading, normalization, and bitstream encoding.
pub struct RasterToBitstreamPipeline<R: RasterReader, W: BitstreamWriter> {
    reader: R,
    writer: W,
    config: CodecConfig,
}

/// Paths of the artifacts written next to a source image.
#[derive(Debug, Clone)]
pub struct GeneratedArtifacts {
    /// The newline-delimited record stream handed to the simulator
    pub bitstream_path: PathBuf,
    /// The visual PNG copy of the normalized image, when enabled
    pub png_path: Option<PathBuf>,
}

impl RasterToBitstreamPipeline<ImageCrateReader, LineRecordWriter> {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            reader: ImageCrateReader,
            writer: LineRecordWriter,
            config,
        }
    }
}

impl<R: RasterReader, W: BitstreamWriter> RasterToBitstreamPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: CodecConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(CodecError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    /// Decodes `input_data`, normalizes it, and writes the record stream to
    /// `output`. Returns the normalized image for further use (PNG copy,
    /// golden comparison).
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<NormalizedImage> {
        info!("Starting image to bitstream conversion");

        let raster = {
            let _span = tracing::info_span!("decode_raster").entered();
            self.reader.read_raster(input_data)?
        };

        {
            let _span = tracing::info_span!(
                "validate_dimensions",
                width = raster.width,
                height = raster.height
            )
            .entered();
            self.validate_dimensions(raster.width, raster.height)?;
        }

        let normalized = {
            let _span = tracing::info_span!("normalize").entered();
            Normalizer.normalize(&raster)?
        };

        {
            let _span = tracing::info_span!("encode_bitstream").entered();
            self.writer.write_bitstream(&normalized, output)?;
        }

        info!(
            source_width = raster.width,
            source_height = raster.height,
            size = normalized.size(),
            "Conversion complete"
        );
        Ok(normalized)
    }

    /// Generates the sibling artifacts for a source image: `<stem>.txt` with
    /// the bitstream and, when enabled, `<stem><suffix>.png` with the
    /// normalized image.
    #[instrument(skip(self, input_path))]
    pub fn generate_file<P: AsRef<Path>>(&self, input_path: P) -> Result<GeneratedArtifacts> {
        let input_path = input_path.as_ref();
        let (bitstream_path, png_path) = self.artifact_paths(input_path)?;

        info!(
            input = %input_path.display(),
            bitstream = %bitstream_path.display(),
            "Generating test-bench artifacts"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                CodecError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let normalized = {
            let mut output_file = std::fs::File::create(&bitstream_path).map_err(|e| {
                CodecError::OutputWriteError(format!("{}: {}", bitstream_path.display(), e))
            })?;
            self.convert(&input_data, &mut output_file)?
        };

        let png_path = if self.config.write_png {
            let path = png_path;
            let _span = tracing::info_span!("write_png_copy").entered();
            write_png(&normalized, &path)?;
            Some(path)
        } else {
            None
        };

        Ok(GeneratedArtifacts {
            bitstream_path,
            png_path,
        })
    }

    fn artifact_paths(&self, input_path: &Path) -> Result<(PathBuf, PathBuf)> {
        let stem = input_path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                CodecError::InputReadError(format!(
                    "{}: no usable file stem",
                    input_path.display()
                ))
            })?;
        let dir = input_path.parent().unwrap_or_else(|| Path::new(""));

        let bitstream_path = dir.join(format!("{stem}.txt"));
        let png_path = dir.join(format!("{stem}{}.png", self.config.png_suffix));
        Ok((bitstream_path, png_path))
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: CodecConfig) {
        self.config = config;
    }
}

/// Writes the normalized image as a PNG, swapping the B,G,R storage back to
/// R,G,B for the encoder.
fn write_png(image: &NormalizedImage, path: &Path) -> Result<()> {
    let raster = image.image();
    let size = raster.height as u32;

    let mut rgb = Vec::with_capacity(raster.data.len());
    for pixel in raster.data.chunks_exact(raster.channels) {
        rgb.push(pixel[2]);
        rgb.push(pixel[1]);
        rgb.push(pixel[0]);
    }

    let buffer = image::RgbImage::from_raw(size, size, rgb)
        .ok_or_else(|| CodecError::EncodeError("PNG buffer size mismatch".to_string()))?;
    buffer
        .save(path)
        .map_err(|e| CodecError::EncodeError(format!("{}: {}", path.display(), e)))?;

    Ok(())
}
