use proptest::prelude::*;

use crate::smc::{FourCc, SmcError, fourcc, fourcc_string};

#[test]
fn packs_most_significant_byte_first() {
	assert_eq!(fourcc("TC0P").expect("valid code"), 0x5443_3050);
	assert_eq!(fourcc_string(0x5443_3050), "TC0P");
}

#[test]
fn short_codes_are_space_padded() {
	assert_eq!(fourcc("ui8").expect("valid code"), fourcc("ui8 ").expect("valid code"));
	assert_eq!(fourcc("#").expect("valid code"), 0x2320_2020);
}

#[test]
fn rejects_long_empty_and_non_printable_strings() {
	for bad in ["TC0PX", "", "a\tb", "fl\u{e9}t"] {
		let err = fourcc(bad).expect_err("string should be rejected");
		assert!(matches!(err, SmcError::InvalidFormat { .. }), "unexpected error for {bad:?}: {err}");
	}
}

#[test]
fn non_printable_bytes_still_render() {
	assert_eq!(fourcc_string(0x0000_0041).chars().count(), 4);
	assert!(fourcc_string(0x0000_0041).ends_with('A'));
}

#[test]
fn newtype_parses_displays_and_serializes_as_text() {
	let code: FourCc = "flt ".parse().expect("valid code");
	assert_eq!(code.to_string(), "flt ");
	assert_eq!(code.bytes(), *b"flt ");

	let json = serde_json::to_string(&code).expect("serializes");
	assert_eq!(json, "\"flt \"");
	let back: FourCc = serde_json::from_str(&json).expect("deserializes");
	assert_eq!(back, code);

	assert!(serde_json::from_str::<FourCc>("\"toolong\"").is_err());
}

proptest! {
	#[test]
	fn printable_codes_round_trip(bytes in proptest::array::uniform4(0x20_u8..=0x7E)) {
		let value = u32::from_be_bytes(bytes);
		prop_assert_eq!(fourcc(&fourcc_string(value)).expect("printable code packs"), value);
	}
}
