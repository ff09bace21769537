use std::io::{Cursor, Write};

use crate::stream_pipeline::bitstream::types::CodecConfig;
use crate::stream_pipeline::bitstream::{BitstreamWriter, decode_bitstream_file};
use crate::stream_pipeline::common::error::{CodecError, Result};
use crate::stream_pipeline::conversions::RasterToBitstreamPipeline;
use crate::stream_pipeline::normalize::TARGET_SIZE;
use crate::stream_pipeline::raster::RasterReader;
use crate::stream_pipeline::raster::types::{NormalizedImage, RasterImage};

struct MockReader {
    should_fail: bool,
    mock_data: Option<RasterImage>,
}

impl RasterReader for MockReader {
    fn read_raster(&self, _data: &[u8]) -> Result<RasterImage> {
        if self.should_fail {
            return Err(CodecError::DecodeError("Mock decode error".to_string()));
        }
        Ok(self.mock_data.clone().unwrap_or(
            RasterImage::from_samples(100, 100, 3, vec![0u8; 100 * 100 * 3]).unwrap(),
        ))
    }
}

struct MockWriter {
    should_fail: bool,
    written_data: std::sync::Arc<std::sync::Mutex<Vec<NormalizedImage>>>,
}

impl BitstreamWriter for MockWriter {
    fn write_bitstream(&self, image: &NormalizedImage, _output: &mut dyn Write) -> Result<()> {
        if self.should_fail {
            return Err(CodecError::OutputWriteError("Mock write error".to_string()));
        }
        self.written_data.lock().unwrap().push(image.clone());
        Ok(())
    }
}

#[test]
fn test_successful_conversion() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = RasterToBitstreamPipeline::with_custom(
        reader,
        writer,
        CodecConfig::default(),
    );

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(result.is_ok());
    let written = written.lock().unwrap();
    assert_eq!(written.len(), 1);
    assert_eq!(written[0].size(), TARGET_SIZE);
}

#[test]
fn test_reader_failure() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: true, mock_data: None };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = RasterToBitstreamPipeline::with_custom(
        reader,
        writer,
        CodecConfig::default(),
    );

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), CodecError::DecodeError(_)));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false, mock_data: None };
    let writer = MockWriter { should_fail: true, written_data: written };

    let pipeline = RasterToBitstreamPipeline::with_custom(
        reader,
        writer,
        CodecConfig::default(),
    );

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), CodecError::OutputWriteError(_)));
}

#[test]
fn test_channel_count_failure() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_data: Some(RasterImage::from_samples(10, 10, 4, vec![0u8; 10 * 10 * 4]).unwrap()),
    };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = RasterToBitstreamPipeline::with_custom(
        reader,
        writer,
        CodecConfig::default(),
    );

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(matches!(result, Err(CodecError::ChannelCountError(4))));
    // Fails fast: nothing reaches the writer.
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_dimension_validation_failure() {
    let written = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let reader = MockReader {
        should_fail: false,
        mock_data: Some(RasterImage::from_samples(0, 10, 3, vec![]).unwrap()),
    };
    let writer = MockWriter { should_fail: false, written_data: written };

    let pipeline = RasterToBitstreamPipeline::with_custom(
        reader,
        writer,
        CodecConfig::default(),
    );

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake image data", &mut output);

    assert!(matches!(result, Err(CodecError::InvalidDimensions(10, 0))));
}

#[test]
fn test_generate_file_writes_sibling_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("fixture.png");

    // A 100x50 all-black source exercises the tall-crop branch end to end.
    let source = image::RgbImage::from_pixel(50, 100, image::Rgb([0, 0, 0]));
    source.save(&input_path).unwrap();

    let pipeline = RasterToBitstreamPipeline::new(CodecConfig::default());
    let artifacts = pipeline.generate_file(&input_path).unwrap();

    assert_eq!(artifacts.bitstream_path, dir.path().join("fixture.txt"));
    assert_eq!(
        artifacts.png_path.as_deref(),
        Some(dir.path().join("fixture64x64.png").as_path())
    );
    assert!(artifacts.png_path.as_ref().unwrap().exists());

    let stream = std::fs::read_to_string(&artifacts.bitstream_path).unwrap();
    assert_eq!(stream.lines().count(), TARGET_SIZE * TARGET_SIZE * 3);
    assert!(stream.lines().all(|line| line == "00000000"));

    let decoded =
        decode_bitstream_file(&artifacts.bitstream_path, TARGET_SIZE, TARGET_SIZE).unwrap();
    assert!(decoded.data.iter().all(|&s| s == 0.0));
}

#[test]
fn test_generate_file_skips_png_when_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("fixture.png");
    let source = image::RgbImage::from_pixel(8, 8, image::Rgb([128, 64, 32]));
    source.save(&input_path).unwrap();

    let config = CodecConfig::builder().write_png(false).build();
    let pipeline = RasterToBitstreamPipeline::new(config);
    let artifacts = pipeline.generate_file(&input_path).unwrap();

    assert!(artifacts.png_path.is_none());
    assert!(!dir.path().join("fixture64x64.png").exists());
    assert!(artifacts.bitstream_path.exists());
}

#[test]
fn test_round_trip_matches_encode_reversal() {
    // Native B,G,R storage [10, 20, 30] for every pixel.
    let mut data = Vec::new();
    for _ in 0..100 * 100 {
        data.extend_from_slice(&[10, 20, 30]);
    }
    let reader = MockReader {
        should_fail: false,
        mock_data: Some(RasterImage::from_samples(100, 100, 3, data).unwrap()),
    };

    let pipeline = RasterToBitstreamPipeline::with_custom(
        reader,
        crate::stream_pipeline::bitstream::LineRecordWriter,
        CodecConfig::default(),
    );

    let mut output = Cursor::new(Vec::new());
    let _ = pipeline.convert(b"fake image data", &mut output).unwrap();

    let stream = String::from_utf8(output.into_inner()).unwrap();
    let decoded =
        crate::stream_pipeline::bitstream::decode_bitstream(&stream, TARGET_SIZE, TARGET_SIZE)
            .unwrap();

    // The decoder assigns in stream order, so storage channel c of the source
    // lands at reconstructed channel 2 - c.
    for (channel, &source_value) in [10u8, 20, 30].iter().enumerate() {
        let expected = source_value as f64 / 255.0;
        let actual = decoded.sample(32, 32, 2 - channel);
        assert!((actual - expected).abs() < 1e-6);
    }
}
