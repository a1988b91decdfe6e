//! Pure decoders for SMC wire buffers.
//!
//! Every numeric field on the SMC wire is big-endian and has a fixed width.
//! Decoders reject buffers of any other length instead of truncating or
//! zero-padding them.

use crate::smc::fourcc::is_printable;
use crate::smc::{Result, SmcError};

fn exact<const N: usize>(data: &[u8], kind: &'static str) -> Result<[u8; N]> {
	<[u8; N]>::try_from(data).map_err(|_| SmcError::LengthMismatch {
		kind,
		expected: N,
		actual: data.len(),
	})
}

/// Decode a 1-byte signed integer.
pub fn int8(data: &[u8]) -> Result<i8> {
	exact(data, "int8").map(i8::from_be_bytes)
}

/// Decode a 2-byte big-endian signed integer.
pub fn int16(data: &[u8]) -> Result<i16> {
	exact(data, "int16").map(i16::from_be_bytes)
}

/// Decode a 4-byte big-endian signed integer.
pub fn int32(data: &[u8]) -> Result<i32> {
	exact(data, "int32").map(i32::from_be_bytes)
}

/// Decode an 8-byte big-endian signed integer.
pub fn int64(data: &[u8]) -> Result<i64> {
	exact(data, "int64").map(i64::from_be_bytes)
}

/// Decode a 1-byte unsigned integer.
pub fn uint8(data: &[u8]) -> Result<u8> {
	exact(data, "uint8").map(u8::from_be_bytes)
}

/// Decode a 2-byte big-endian unsigned integer.
pub fn uint16(data: &[u8]) -> Result<u16> {
	exact(data, "uint16").map(u16::from_be_bytes)
}

/// Decode a 4-byte big-endian unsigned integer.
pub fn uint32(data: &[u8]) -> Result<u32> {
	exact(data, "uint32").map(u32::from_be_bytes)
}

/// Decode an 8-byte big-endian unsigned integer.
pub fn uint64(data: &[u8]) -> Result<u64> {
	exact(data, "uint64").map(u64::from_be_bytes)
}

/// Decode a 4-byte big-endian IEEE-754 float.
pub fn float32(data: &[u8]) -> Result<f32> {
	exact(data, "float32").map(f32::from_be_bytes)
}

/// Decode an 8-byte big-endian IEEE-754 float.
pub fn float64(data: &[u8]) -> Result<f64> {
	exact(data, "float64").map(f64::from_be_bytes)
}

/// Decode the 2-byte `ioft` format: 14 signed integer bits, 2 fractional bits.
pub fn io_float(data: &[u8]) -> Result<f64> {
	decode_fixed(data, FixedPoint::IO_FLOAT, "ioFloat")
}

/// Decode the 2-byte `sp78` format: sign, 7 integer bits, 8 fractional bits.
pub fn sp78(data: &[u8]) -> Result<f64> {
	decode_fixed(data, FixedPoint::SP78, "sp78")
}

/// Decode a 2-byte fixed-point value in the given layout.
pub fn fixed_point(data: &[u8], format: FixedPoint) -> Result<f64> {
	decode_fixed(data, format, "fixed point")
}

fn decode_fixed(data: &[u8], format: FixedPoint, kind: &'static str) -> Result<f64> {
	if format.bit_count() != 16 {
		return Err(SmcError::UnsupportedFixedPoint {
			signed: format.signed,
			int_bits: format.int_bits,
			frac_bits: format.frac_bits,
		});
	}
	let raw = exact::<2>(data, kind)?;
	let mantissa = if format.signed {
		f64::from(i16::from_be_bytes(raw))
	} else {
		f64::from(u16::from_be_bytes(raw))
	};
	Ok(mantissa / f64::from(1_u32 << format.frac_bits))
}

/// Layout of a 16-bit SMC fixed-point field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPoint {
	/// Two's-complement when `true`.
	pub signed: bool,
	/// Integer bits, excluding the sign bit.
	pub int_bits: u8,
	/// Fractional bits.
	pub frac_bits: u8,
}

impl FixedPoint {
	/// `sp78`: signed, 7 integer bits, 8 fractional bits.
	pub const SP78: Self = Self {
		signed: true,
		int_bits: 7,
		frac_bits: 8,
	};

	/// `ioft`: signed, 14 integer bits (sign included), 2 fractional bits.
	pub const IO_FLOAT: Self = Self {
		signed: true,
		int_bits: 13,
		frac_bits: 2,
	};

	/// Total bits the layout occupies, sign bit included.
	pub fn bit_count(self) -> u32 {
		u32::from(self.signed) + u32::from(self.int_bits) + u32::from(self.frac_bits)
	}

	/// Parse an `fpXY` or `spXY` tag where `X` and `Y` are hex digit counts.
	///
	/// `fp` layouts fill all 16 bits unsigned. An `fp` tag whose digits only
	/// cover 15 bits carries an implied sign bit, so `fp78` matches `sp78`.
	pub fn from_tag(tag: u32) -> Option<Self> {
		let [p0, p1, x, y] = tag.to_be_bytes();
		let int_bits = char::from(x).to_digit(16)? as u8;
		let frac_bits = char::from(y).to_digit(16)? as u8;

		let signed = match (&[p0, p1], int_bits + frac_bits) {
			(b"fp", 16) => false,
			(b"fp", 15) | (b"sp", 15) => true,
			_ => return None,
		};

		Some(Self { signed, int_bits, frac_bits })
	}
}

/// Return a copy of `data` with the byte order reversed.
pub fn reversed_data(data: &[u8]) -> Vec<u8> {
	data.iter().rev().copied().collect()
}

fn trim_nul(data: &[u8]) -> &[u8] {
	let end = data.iter().rposition(|byte| *byte != 0).map_or(0, |idx| idx + 1);
	&data[..end]
}

/// Decode a NUL-padded UTF-8 field.
///
/// Returns `None` when nothing remains after trimming or the bytes are not UTF-8.
pub fn string_with_data(data: &[u8]) -> Option<String> {
	let trimmed = trim_nul(data);
	if trimmed.is_empty() {
		return None;
	}
	std::str::from_utf8(trimmed).ok().map(str::to_owned)
}

/// Render a NUL-padded field as printable ASCII, replacing other bytes with `.`.
pub fn printable_string(data: &[u8]) -> Option<String> {
	let trimmed = trim_nul(data);
	if trimmed.is_empty() {
		return None;
	}
	Some(
		trimmed
			.iter()
			.map(|byte| if is_printable(*byte) { char::from(*byte) } else { '.' })
			.collect(),
	)
}
