use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SmcError>;

/// Errors produced while decoding SMC buffers and loading key dumps.
#[derive(Debug, Error)]
pub enum SmcError {
	/// Buffer width does not match the decoder width.
	#[error("{kind} expects {expected} bytes, got {actual}")]
	LengthMismatch {
		/// Decoder that rejected the buffer.
		kind: &'static str,
		/// Required byte count.
		expected: usize,
		/// Actual byte count.
		actual: usize,
	},
	/// String cannot be packed into a four-character code.
	#[error("invalid four-character code {value:?}: {reason}")]
	InvalidFormat {
		/// User-provided string.
		value: String,
		/// Why the string was rejected.
		reason: &'static str,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Dump document is not valid JSON for the expected shape.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Unknown leading dump file magic.
	#[error("unsupported compression or not a key dump (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Fixed-point layout does not describe a 16-bit field.
	#[error("unsupported fixed-point layout: signed={signed}, int_bits={int_bits}, frac_bits={frac_bits}")]
	UnsupportedFixedPoint {
		/// Whether a sign bit is present.
		signed: bool,
		/// Integer bits, excluding the sign bit.
		int_bits: u8,
		/// Fractional bits.
		frac_bits: u8,
	},
	/// Hex payload literal was malformed.
	#[error("invalid hex data: {value}")]
	InvalidHex {
		/// User-provided hex string.
		value: String,
	},
}

impl SmcError {
	/// Stable numeric code for this error kind.
	pub fn code(&self) -> i64 {
		match self {
			Self::LengthMismatch { .. } => 1,
			Self::InvalidFormat { .. } => 2,
			Self::Io(_) => 3,
			Self::Json(_) => 4,
			Self::UnknownMagic { .. } => 5,
			Self::DecompressedTooLarge { .. } => 6,
			Self::InvalidHex { .. } => 7,
			Self::UnsupportedFixedPoint { .. } => 8,
		}
	}

	/// Short human-readable title for this error kind.
	pub fn title(&self) -> &'static str {
		match self {
			Self::LengthMismatch { .. } => "Length mismatch",
			Self::InvalidFormat { .. } => "Invalid format",
			Self::Io(_) => "I/O error",
			Self::Json(_) => "Malformed dump",
			Self::UnknownMagic { .. } => "Unknown file type",
			Self::DecompressedTooLarge { .. } => "Dump too large",
			Self::InvalidHex { .. } => "Invalid hex data",
			Self::UnsupportedFixedPoint { .. } => "Unsupported fixed-point layout",
		}
	}

	/// Convert into a presentable report.
	pub fn report(&self) -> ErrorReport {
		error_with_title(self.title(), self.to_string(), self.code())
	}
}

/// User-presentable error carrying a title, a message, and a numeric code.
#[derive(Debug, Clone, PartialEq, Eq, Error, serde::Serialize)]
#[error("{title}: {message} (code {code})")]
pub struct ErrorReport {
	/// Short summary line.
	pub title: String,
	/// Detailed description.
	pub message: String,
	/// Numeric error code.
	pub code: i64,
}

/// Build an [`ErrorReport`] from its parts.
pub fn error_with_title(title: impl Into<String>, message: impl Into<String>, code: i64) -> ErrorReport {
	ErrorReport {
		title: title.into(),
		message: message.into(),
		code,
	}
}
