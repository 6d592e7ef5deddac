use crate::error::LzhError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecKind {
    Lzw,
    Huffman,
}

impl CodecKind {
    /// Stage identifier used in the container header.
    pub fn id(self) -> u8 {
        match self {
            CodecKind::Lzw => 0,
            CodecKind::Huffman => 1,
        }
    }

    pub fn from_id(id: u8) -> Result<Self, LzhError> {
        match id {
            0 => Ok(CodecKind::Lzw),
            1 => Ok(CodecKind::Huffman),
            _ => Err(LzhError::InvalidFormat(format!("Unknown codec id: {}", id))),
        }
    }
}

impl FromStr for CodecKind {
    type Err = LzhError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lzw" => Ok(CodecKind::Lzw),
            "huffman" => Ok(CodecKind::Huffman),
            _ => Err(LzhError::ConfigError(format!("Invalid codec: {}", s))),
        }
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecKind::Lzw => write!(f, "LZW"),
            CodecKind::Huffman => write!(f, "Huffman"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Codecs in compression order. Decompression walks them in reverse.
    pub codecs: Vec<CodecKind>,
    pub progress: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            codecs: vec![CodecKind::Lzw],
            progress: false,
        }
    }
}

impl PipelineConfig {
    pub fn with_codecs(mut self, codecs: Vec<CodecKind>) -> Self {
        self.codecs = codecs;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn validate(&self) -> Result<(), LzhError> {
        if self.codecs.is_empty() {
            return Err(LzhError::ConfigError(
                "at least one codec is required (e.g. lzw, huffman)".to_string(),
            ));
        }
        if self.codecs.len() > u8::MAX as usize {
            return Err(LzhError::ConfigError(format!(
                "too many codec stages: {}",
                self.codecs.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codec_kind() {
        assert_eq!("lzw".parse::<CodecKind>().unwrap(), CodecKind::Lzw);
        assert_eq!("Huffman".parse::<CodecKind>().unwrap(), CodecKind::Huffman);
        assert!(matches!("zip".parse::<CodecKind>(), Err(LzhError::ConfigError(_))));
    }

    #[test]
    fn test_codec_id_mapping() {
        for kind in [CodecKind::Lzw, CodecKind::Huffman] {
            assert_eq!(CodecKind::from_id(kind.id()).unwrap(), kind);
        }
        assert!(CodecKind::from_id(7).is_err());
    }

    #[test]
    fn test_empty_chain_rejected() {
        let config = PipelineConfig::default().with_codecs(Vec::new());
        assert!(config.validate().is_err());
        assert!(PipelineConfig::default().validate().is_ok());
    }
}
