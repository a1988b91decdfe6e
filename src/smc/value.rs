use std::fmt;

use crate::smc::Result;
use crate::smc::codec::{self, FixedPoint};

/// SMC data types recognized by [`value_for_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
	/// `ui8 `
	UInt8,
	/// `ui16`
	UInt16,
	/// `ui32`
	UInt32,
	/// `ui64`
	UInt64,
	/// `si8 `
	Int8,
	/// `si16`
	Int16,
	/// `si32`
	Int32,
	/// `si64`
	Int64,
	/// `flt `
	Float32,
	/// `flag`, one byte where nonzero means set.
	Flag,
	/// `ioft`
	IoFloat,
	/// `sp78`
	Sp78,
	/// Any other `fpXY` / `spXY` layout.
	Fixed(FixedPoint),
	/// `ch8*` or `str `, NUL-padded text.
	String,
}

impl DataType {
	/// Resolve a packed type tag, or `None` when the tag is not supported.
	pub fn from_tag(tag: u32) -> Option<Self> {
		let kind = match &tag.to_be_bytes() {
			b"ui8 " => Self::UInt8,
			b"ui16" => Self::UInt16,
			b"ui32" => Self::UInt32,
			b"ui64" => Self::UInt64,
			b"si8 " => Self::Int8,
			b"si16" => Self::Int16,
			b"si32" => Self::Int32,
			b"si64" => Self::Int64,
			b"flt " => Self::Float32,
			b"flag" => Self::Flag,
			b"ioft" => Self::IoFloat,
			b"sp78" => Self::Sp78,
			b"ch8*" | b"str " => Self::String,
			_ => return FixedPoint::from_tag(tag).map(Self::Fixed),
		};
		Some(kind)
	}

	/// Required buffer width, or `None` for variable-width text.
	pub fn width(self) -> Option<usize> {
		match self {
			Self::UInt8 | Self::Int8 | Self::Flag => Some(1),
			Self::UInt16 | Self::Int16 | Self::IoFloat | Self::Sp78 | Self::Fixed(_) => Some(2),
			Self::UInt32 | Self::Int32 | Self::Float32 => Some(4),
			Self::UInt64 | Self::Int64 => Some(8),
			Self::String => None,
		}
	}

	/// Decode `data` as this type.
	pub fn decode(self, data: &[u8]) -> Result<Option<SmcValue>> {
		let value = match self {
			Self::UInt8 => SmcValue::U8(codec::uint8(data)?),
			Self::UInt16 => SmcValue::U16(codec::uint16(data)?),
			Self::UInt32 => SmcValue::U32(codec::uint32(data)?),
			Self::UInt64 => SmcValue::U64(codec::uint64(data)?),
			Self::Int8 => SmcValue::I8(codec::int8(data)?),
			Self::Int16 => SmcValue::I16(codec::int16(data)?),
			Self::Int32 => SmcValue::I32(codec::int32(data)?),
			Self::Int64 => SmcValue::I64(codec::int64(data)?),
			Self::Float32 => SmcValue::F32(codec::float32(data)?),
			Self::Flag => SmcValue::Flag(codec::uint8(data)? != 0),
			Self::IoFloat => SmcValue::Fixed(codec::io_float(data)?),
			Self::Sp78 => SmcValue::Fixed(codec::sp78(data)?),
			Self::Fixed(format) => SmcValue::Fixed(codec::fixed_point(data, format)?),
			Self::String => return Ok(codec::string_with_data(data).map(SmcValue::Str)),
		};
		Ok(Some(value))
	}
}

/// Decoded SMC value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum SmcValue {
	/// Signed 8-bit integer.
	I8(i8),
	/// Signed 16-bit integer.
	I16(i16),
	/// Signed 32-bit integer.
	I32(i32),
	/// Signed 64-bit integer.
	I64(i64),
	/// Unsigned 8-bit integer.
	U8(u8),
	/// Unsigned 16-bit integer.
	U16(u16),
	/// Unsigned 32-bit integer.
	U32(u32),
	/// Unsigned 64-bit integer.
	U64(u64),
	/// IEEE-754 single precision.
	F32(f32),
	/// Fixed-point field widened to `f64`.
	Fixed(f64),
	/// Boolean flag.
	Flag(bool),
	/// Text field.
	Str(String),
}

/// Floats default to two decimals; `{:.N}` overrides the precision.
impl fmt::Display for SmcValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let precision = f.precision().unwrap_or(2);
		match self {
			Self::I8(v) => write!(f, "{v}"),
			Self::I16(v) => write!(f, "{v}"),
			Self::I32(v) => write!(f, "{v}"),
			Self::I64(v) => write!(f, "{v}"),
			Self::U8(v) => write!(f, "{v}"),
			Self::U16(v) => write!(f, "{v}"),
			Self::U32(v) => write!(f, "{v}"),
			Self::U64(v) => write!(f, "{v}"),
			Self::F32(v) => write!(f, "{v:.precision$}"),
			Self::Fixed(v) => write!(f, "{v:.precision$}"),
			Self::Flag(v) => f.write_str(if *v { "True" } else { "False" }),
			Self::Str(v) => f.write_str(v),
		}
	}
}

/// Decode `data` according to the packed `type_tag`.
///
/// `Ok(None)` means no value: the tag is unknown, or a text field held
/// nothing decodable. Width errors are reported as `Err`.
pub fn value_for_data(data: &[u8], type_tag: u32) -> Result<Option<SmcValue>> {
	match DataType::from_tag(type_tag) {
		Some(kind) => kind.decode(data),
		None => Ok(None),
	}
}
