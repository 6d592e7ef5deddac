use crate::codecs::codec_for;
use crate::config::{CodecKind, PipelineConfig};
use crate::error::LzhError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageStats {
	pub codec: CodecKind,
	pub input_size: usize,
	pub output_size: usize,
}

#[derive(Debug)]
pub struct CompressionStats {
	pub original_size: u64,
	pub compressed_size: u64,
	pub ratio: f64,
	pub elapsed: Duration,
	pub stages: Vec<StageStats>,
}

#[derive(Debug)]
pub struct RoundTripReport {
	pub compression: CompressionStats,
	pub decompression: Vec<StageStats>,
	pub restored_size: u64,
	/// Offset of the first differing byte, or the shorter length if one side is a prefix.
	pub mismatch: Option<usize>,
}

impl RoundTripReport {
	pub fn is_success(&self) -> bool {
		self.mismatch.is_none()
	}
}

fn stage_bar(stages: usize, enabled: bool) -> ProgressBar {
	if !enabled {
		return ProgressBar::hidden();
	}
	let pb = ProgressBar::new(stages as u64);
	if let Ok(style) = ProgressStyle::default_bar()
		.template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] Stage {pos}/{len} {msg}")
	{
		pb.set_style(style.progress_chars("#>-"));
	}
	pb
}

fn run_stages<'a, I>(
	data: &[u8],
	codecs: I,
	pb: &ProgressBar,
	decompress: bool,
) -> Result<(Vec<u8>, Vec<StageStats>), LzhError>
where
	I: Iterator<Item = &'a CodecKind>,
{
	let mut current = data.to_vec();
	let mut stages = Vec::new();

	for &kind in codecs {
		pb.set_message(kind.to_string());
		let codec = codec_for(kind);
		let output = if decompress { codec.decompress(&current)? } else { codec.compress(&current)? };
		log::debug!("{} {}: {} -> {} bytes", if decompress { "-" } else { "+" }, kind, current.len(), output.len());
		stages.push(StageStats { codec: kind, input_size: current.len(), output_size: output.len() });
		current = output;
		pb.inc(1);
	}
	Ok((current, stages))
}

/// Apply the configured codecs in order.
pub fn compress(data: &[u8], config: &PipelineConfig) -> Result<(Vec<u8>, CompressionStats), LzhError> {
	config.validate()?;
	let start = Instant::now();
	let pb = stage_bar(config.codecs.len(), config.progress);

	let (compressed, stages) = run_stages(data, config.codecs.iter(), &pb, false)?;
	pb.finish_with_message("Compression finished");

	let original_size = data.len() as u64;
	let compressed_size = compressed.len() as u64;
	let ratio = if compressed_size > 0 { original_size as f64 / compressed_size as f64 } else { 0.0 };

	let stats = CompressionStats { original_size, compressed_size, ratio, elapsed: start.elapsed(), stages };
	Ok((compressed, stats))
}

/// Undo [`compress`]: the configured codecs are applied in reverse order.
pub fn decompress(data: &[u8], config: &PipelineConfig) -> Result<(Vec<u8>, Vec<StageStats>), LzhError> {
	config.validate()?;
	let pb = stage_bar(config.codecs.len(), config.progress);

	let result = run_stages(data, config.codecs.iter().rev(), &pb, true)?;
	pb.finish_with_message("Decompression finished");
	Ok(result)
}

/// Compress, decompress and compare against the input.
pub fn roundtrip(data: &[u8], config: &PipelineConfig) -> Result<RoundTripReport, LzhError> {
	let (compressed, compression) = compress(data, config)?;
	let (restored, decompression) = decompress(&compressed, config)?;

	let mismatch = first_mismatch(data, &restored);
	if let Some(offset) = mismatch {
		log::warn!("round trip mismatch at offset {}", offset);
	}

	Ok(RoundTripReport { compression, decompression, restored_size: restored.len() as u64, mismatch })
}

fn first_mismatch(expected: &[u8], actual: &[u8]) -> Option<usize> {
	match expected.iter().zip(actual).position(|(a, b)| a != b) {
		Some(offset) => Some(offset),
		None if expected.len() != actual.len() => Some(expected.len().min(actual.len())),
		None => None,
	}
}
