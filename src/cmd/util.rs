use smckit::smc::Result;

/// Print a value as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string_pretty(value)?);
	Ok(())
}

/// Parse decimal or `0x`-prefixed hex literal.
pub(crate) fn parse_number(value: &str) -> Option<u32> {
	if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		return u32::from_str_radix(stripped, 16).ok();
	}
	if value.bytes().all(|byte| byte.is_ascii_digit()) {
		return value.parse().ok();
	}
	None
}

/// Render a packed code as `0x`-prefixed hex.
pub(crate) fn code_hex(value: u32) -> String {
	format!("0x{value:08X}")
}
