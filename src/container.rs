use crate::config::CodecKind;
use crate::error::LzhError;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

const MAGIC_NUMBER: &[u8; 4] = b"LZH1";
const VERSION: u8 = 1;

/// A compressed file: the codec chain that produced the payload plus enough
/// about the original to check the restored bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
	pub codecs: Vec<CodecKind>,
	pub original_size: u64,
	pub original_checksum: u32,
	pub payload: Vec<u8>,
}

impl Container {
	pub fn new(codecs: Vec<CodecKind>, original: &[u8], payload: Vec<u8>) -> Self {
		Self {
			codecs,
			original_size: original.len() as u64,
			original_checksum: crc32fast::hash(original),
			payload,
		}
	}

	/// Check decompressed bytes against the recorded size and CRC32.
	pub fn verify(&self, restored: &[u8]) -> Result<(), LzhError> {
		if restored.len() as u64 != self.original_size {
			return Err(LzhError::DecodeError(format!(
				"Decompressed size {} does not match original size {}",
				restored.len(),
				self.original_size
			)));
		}
		if crc32fast::hash(restored) != self.original_checksum {
			return Err(LzhError::ChecksumMismatch);
		}
		Ok(())
	}
}

pub fn write_container<W: Write>(writer: &mut W, container: &Container) -> Result<u64, LzhError> {
	if container.codecs.is_empty() || container.codecs.len() > u8::MAX as usize {
		return Err(LzhError::InvalidFormat(format!("Unsupported stage count: {}", container.codecs.len())));
	}

	writer.write_all(MAGIC_NUMBER)?;
	writer.write_u8(VERSION)?;
	writer.write_u8(container.codecs.len() as u8)?;
	for codec in &container.codecs {
		writer.write_u8(codec.id())?;
	}
	writer.write_u64::<LittleEndian>(container.original_size)?;
	writer.write_u32::<LittleEndian>(container.original_checksum)?;
	writer.write_all(&container.payload)?;

	let header = 4 + 1 + 1 + container.codecs.len() as u64 + 8 + 4;
	Ok(header + container.payload.len() as u64)
}

pub fn read_container<R: Read>(reader: &mut R) -> Result<Container, LzhError> {
	let mut magic = [0u8; 4];
	reader.read_exact(&mut magic)?;
	if magic != *MAGIC_NUMBER { return Err(LzhError::InvalidFormat("Invalid magic number".to_string())); }

	let version = reader.read_u8()?;
	if version != VERSION { return Err(LzhError::InvalidFormat(format!("Unsupported version: {}", version))); }

	let stage_count = reader.read_u8()?;
	if stage_count == 0 { return Err(LzhError::InvalidFormat("Empty codec chain".to_string())); }
	let codecs = (0..stage_count)
		.map(|_| CodecKind::from_id(reader.read_u8()?))
		.collect::<Result<Vec<_>, LzhError>>()?;

	let original_size = reader.read_u64::<LittleEndian>()?;
	let original_checksum = reader.read_u32::<LittleEndian>()?;
	let mut payload = Vec::new();
	reader.read_to_end(&mut payload)?;

	Ok(Container { codecs, original_size, original_checksum, payload })
}
