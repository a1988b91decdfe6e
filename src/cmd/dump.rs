use std::path::PathBuf;

use smckit::smc::{DumpFile, DumpRow, RenderOptions, Result, dump_rows, render_dump};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Dump file: JSON, optionally zstd-compressed.
	pub path: PathBuf,
	/// Decimal places for float and fixed-point values.
	#[arg(long, default_value_t = 2)]
	pub precision: usize,
	/// Omit the `#` banner.
	#[arg(long)]
	pub no_header: bool,
	#[arg(long)]
	pub json: bool,
}

/// Print every key of a dump as a table or JSON.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		precision,
		no_header,
		json,
	} = args;

	let dump = DumpFile::open(&path)?;
	tracing::info!(path = %path.display(), keys = dump.records.len(), "loaded key dump");

	let options = RenderOptions {
		precision,
		include_header: !no_header,
	};

	if json {
		return emit_json(&DumpJson {
			path: path.display().to_string(),
			compression: dump.compression.as_str(),
			machine: dump
				.machine
				.iter()
				.map(|(label, value)| MachineJson {
					label: label.clone(),
					value: value.clone(),
				})
				.collect(),
			keys: dump_rows(&dump.records, options),
		});
	}

	let table = render_dump(&dump, options);
	if !table.is_empty() {
		println!("{table}");
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct MachineJson {
	label: String,
	value: String,
}

#[derive(serde::Serialize)]
struct DumpJson {
	path: String,
	compression: &'static str,
	machine: Vec<MachineJson>,
	keys: Vec<DumpRow>,
}
