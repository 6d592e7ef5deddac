use thiserror::Error;

#[derive(Error, Debug)]
pub enum LzhError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Data integrity check failed: checksum mismatch")]
	ChecksumMismatch,

	#[error("Invalid container format: {0}")]
	InvalidFormat(String),

	#[error("Compression failed: {0}")]
	CompressionError(String),

	#[error("Decode error: {0}")]
	DecodeError(String),

	#[error("Configuration error: {0}")]
	ConfigError(String),
}

pub type Result<T> = std::result::Result<T, LzhError>;
