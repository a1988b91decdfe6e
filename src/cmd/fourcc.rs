use smckit::smc::{Result, fourcc, fourcc_string};

use crate::cmd::util::{code_hex, emit_json, parse_number};

#[derive(clap::Args)]
pub struct Args {
	/// Code text (`TC0P`) or packed value (`1413689424`, `0x54433050`).
	///
	/// All-digit or `0x`-prefixed input is read as a packed value; pass
	/// `--string` to pack text such as `1234` instead.
	pub value: String,
	/// Always treat `value` as code text, even when it looks numeric.
	#[arg(long)]
	pub string: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print both forms of a four-character code.
pub fn run(args: Args) -> Result<()> {
	let Args { value, string, json } = args;

	let packed = match parse_number(&value) {
		Some(number) if !string => number,
		_ => fourcc(&value)?,
	};
	let text = fourcc_string(packed);
	tracing::debug!(input = %value, packed, "converted four-character code");

	if json {
		return emit_json(&FourccJson {
			fourcc: text,
			value: packed,
			hex: code_hex(packed),
		});
	}

	println!("fourcc: {text:?}");
	println!("value: {packed}");
	println!("hex: {}", code_hex(packed));
	Ok(())
}

#[derive(serde::Serialize)]
struct FourccJson {
	fourcc: String,
	value: u32,
	hex: String,
}
