use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::smc::compression::decode_bytes;
use crate::smc::{Compression, FourCc, Result, SmcError, SmcValue, value_for_data};

/// One SMC key as read from the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmcRecord {
	/// Key name, for example `TC0P`.
	pub key: FourCc,
	/// Data type tag, for example `sp78`.
	#[serde(rename = "type")]
	pub data_type: FourCc,
	/// Raw payload in wire order.
	#[serde(with = "hex_bytes")]
	pub data: Vec<u8>,
}

impl SmcRecord {
	/// Decode the payload according to the record's type tag.
	pub fn value(&self) -> Result<Option<SmcValue>> {
		value_for_data(&self.data, self.data_type.value())
	}
}

/// A loaded key dump with optional machine details.
#[derive(Debug, Clone)]
pub struct DumpFile {
	/// Compression of the source file.
	pub compression: Compression,
	/// `(label, value)` pairs describing the machine.
	pub machine: Vec<(String, String)>,
	/// Key records in file order.
	pub records: Vec<SmcRecord>,
}

#[derive(Deserialize)]
struct DumpDocument {
	#[serde(default)]
	machine: Vec<(String, String)>,
	keys: Vec<SmcRecord>,
}

impl DumpFile {
	/// Read and parse a dump file, decompressing zstd input.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		tracing::debug!(path = %path.display(), bytes = raw.len(), "read key dump");
		Self::from_bytes(raw)
	}

	/// Parse a dump from raw (possibly compressed) bytes.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		let doc: DumpDocument = serde_json::from_slice(&bytes)?;
		tracing::debug!(records = doc.keys.len(), compression = compression.as_str(), "parsed key dump");

		Ok(Self {
			compression,
			machine: doc.machine,
			records: doc.keys,
		})
	}
}

/// Parse a hex literal such as `2A80`, `0x2a80`, or `2a 80`.
pub fn parse_hex(value: &str) -> Result<Vec<u8>> {
	let trimmed = value.trim();
	let body = trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")).unwrap_or(trimmed);
	let digits: String = body.chars().filter(|ch| !ch.is_ascii_whitespace()).collect();
	hex::decode(digits).map_err(|_| SmcError::InvalidHex { value: value.to_owned() })
}

/// Render bytes as uppercase hex, two digits per byte.
pub fn hex_string(data: &[u8]) -> String {
	hex::encode_upper(data)
}

mod hex_bytes {
	use serde::{Deserialize, Deserializer, Serializer};

	pub(super) fn serialize<S: Serializer>(data: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&super::hex_string(data))
	}

	pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
		let raw = String::deserialize(deserializer)?;
		super::parse_hex(&raw).map_err(serde::de::Error::custom)
	}
}
