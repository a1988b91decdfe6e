use std::fmt;
use std::str::FromStr;

use crate::smc::{Result, SmcError};

/// Render a packed code as four characters, most significant byte first.
pub fn fourcc_string(value: u32) -> String {
	value.to_be_bytes().into_iter().map(char::from).collect()
}

/// Pack up to four printable ASCII characters, padding with spaces.
pub fn fourcc(value: &str) -> Result<u32> {
	let invalid = |reason| SmcError::InvalidFormat {
		value: value.to_owned(),
		reason,
	};

	if value.is_empty() {
		return Err(invalid("empty string"));
	}
	if !value.bytes().all(is_printable) {
		return Err(invalid("contains characters outside printable ASCII"));
	}
	if value.len() > 4 {
		return Err(invalid("longer than 4 characters"));
	}

	let mut out = [b' '; 4];
	out[..value.len()].copy_from_slice(value.as_bytes());
	Ok(u32::from_be_bytes(out))
}

pub(crate) fn is_printable(byte: u8) -> bool {
	byte.is_ascii_graphic() || byte == b' '
}

/// Four-character code used for SMC key names and data type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FourCc(pub u32);

impl FourCc {
	/// Packed big-endian value.
	pub fn value(self) -> u32 {
		self.0
	}

	/// Raw bytes in wire order.
	pub fn bytes(self) -> [u8; 4] {
		self.0.to_be_bytes()
	}
}

impl From<u32> for FourCc {
	fn from(value: u32) -> Self {
		Self(value)
	}
}

impl FromStr for FourCc {
	type Err = SmcError;

	fn from_str(value: &str) -> Result<Self> {
		fourcc(value).map(Self)
	}
}

impl fmt::Display for FourCc {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&fourcc_string(self.0))
	}
}

impl serde::Serialize for FourCc {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.serialize_str(&fourcc_string(self.0))
	}
}

impl<'de> serde::Deserialize<'de> for FourCc {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests;
