use std::io::Read;

use crate::smc::{Result, SmcError};

/// Upper bound on a decompressed key dump.
pub const MAX_DUMP_BYTES: u64 = 64 * 1024 * 1024;

/// How a dump file is stored on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Plain JSON text.
	None,
	/// zstd-compressed JSON.
	Zstd,
}

impl Compression {
	const ZSTD_FRAME: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

	/// Sniff the storage mode from leading bytes.
	///
	/// JSON is recognized by its first non-whitespace byte being `{` or `[`.
	pub fn detect(bytes: &[u8]) -> Option<Self> {
		if bytes.starts_with(&Self::ZSTD_FRAME) {
			return Some(Self::Zstd);
		}
		match bytes.iter().find(|byte| !byte.is_ascii_whitespace()) {
			Some(b'{' | b'[') => Some(Self::None),
			_ => None,
		}
	}

	/// Stable lowercase label used in CLI output.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}

	fn inflate(self, raw: Vec<u8>, limit: u64) -> Result<Vec<u8>> {
		match self {
			Self::None => Ok(raw),
			Self::Zstd => {
				let decoder = zstd::stream::read::Decoder::new(raw.as_slice())?;
				let mut out = Vec::new();
				decoder.take(limit + 1).read_to_end(&mut out)?;
				if out.len() as u64 > limit {
					return Err(SmcError::DecompressedTooLarge { limit: limit as usize });
				}
				tracing::debug!(compressed = raw.len(), decompressed = out.len(), "inflated zstd dump");
				Ok(out)
			}
		}
	}
}

/// Detect storage mode and return `(mode, json_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	decode_bytes_with_limit(raw, MAX_DUMP_BYTES)
}

pub(crate) fn decode_bytes_with_limit(raw: Vec<u8>, limit: u64) -> Result<(Compression, Vec<u8>)> {
	let Some(mode) = Compression::detect(&raw) else {
		let mut magic = [0_u8; 4];
		raw.iter().zip(magic.iter_mut()).for_each(|(src, dst)| *dst = *src);
		return Err(SmcError::UnknownMagic { magic });
	};
	Ok((mode, mode.inflate(raw, limit)?))
}
