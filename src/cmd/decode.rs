use smckit::smc::{DataType, Result, SmcValue, fourcc, fourcc_string, hex_string, parse_hex, value_for_data};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Payload bytes as hex, for example `2A80`.
	pub hex: String,
	/// SMC type tag, for example `sp78` or `ui32`.
	#[arg(long = "type")]
	pub data_type: String,
	/// Decimal places for float and fixed-point values.
	#[arg(long, default_value_t = 2)]
	pub precision: usize,
	#[arg(long)]
	pub json: bool,
}

/// Decode one payload and print the value.
pub fn run(args: Args) -> Result<()> {
	let Args {
		hex,
		data_type,
		precision,
		json,
	} = args;

	let tag = fourcc(&data_type)?;
	let data = parse_hex(&hex)?;
	let known_type = DataType::from_tag(tag).is_some();
	if !known_type {
		tracing::warn!(tag = %fourcc_string(tag), "unsupported type tag");
	}
	let value = value_for_data(&data, tag)?;

	if json {
		return emit_json(&DecodeJson {
			data_type: fourcc_string(tag),
			known_type,
			length: data.len(),
			data: hex_string(&data),
			value,
		});
	}

	println!("type: {:?}", fourcc_string(tag));
	println!("length: {}", data.len());
	println!("data: {}", hex_string(&data));
	match value {
		Some(value) => println!("value: {value:.precision$}"),
		None => println!("value: absent"),
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson {
	#[serde(rename = "type")]
	data_type: String,
	known_type: bool,
	length: usize,
	data: String,
	value: Option<SmcValue>,
}
