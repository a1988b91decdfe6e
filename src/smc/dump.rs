use crate::smc::codec::printable_string;
use crate::smc::record::hex_string;
use crate::smc::{DataType, DumpFile, SmcRecord};

/// Formatting options for key dump tables.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
	/// Decimal places for float and fixed-point values.
	pub precision: usize,
	/// Emit the `#` banner with machine details.
	pub include_header: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			precision: 2,
			include_header: true,
		}
	}
}

/// One rendered row of a key dump.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DumpRow {
	/// Key name.
	pub key: String,
	/// Type tag.
	#[serde(rename = "type")]
	pub data_type: String,
	/// Payload size label, `1 byte` or `N bytes`.
	pub length: String,
	/// Decoded value, empty when nothing could be decoded.
	pub value: String,
	/// Uppercase hex payload.
	pub data: String,
}

/// Build rows sorted by key, ignoring case.
pub fn dump_rows(records: &[SmcRecord], options: RenderOptions) -> Vec<DumpRow> {
	let mut sorted: Vec<&SmcRecord> = records.iter().collect();
	sorted.sort_by_cached_key(|record| record.key.to_string().to_lowercase());

	sorted
		.into_iter()
		.map(|record| DumpRow {
			key: record.key.to_string(),
			data_type: record.data_type.to_string(),
			length: length_label(record.data.len()),
			value: value_label(record, options.precision),
			data: hex_string(&record.data),
		})
		.collect()
}

fn length_label(len: usize) -> String {
	if len == 1 { "1 byte".to_owned() } else { format!("{len} bytes") }
}

fn value_label(record: &SmcRecord, precision: usize) -> String {
	if DataType::from_tag(record.data_type.value()) == Some(DataType::String) {
		return printable_string(&record.data).unwrap_or_default();
	}

	match record.value() {
		Ok(Some(value)) => format!("{value:.precision$}"),
		Ok(None) => String::new(),
		Err(err) => {
			tracing::debug!(key = %record.key, error = %err, "value not decodable");
			String::new()
		}
	}
}

/// Render a dump as a tab-separated table with a `#` banner.
///
/// Returns an empty string when the dump has no records.
pub fn render_dump(dump: &DumpFile, options: RenderOptions) -> String {
	let rows = dump_rows(&dump.records, options);
	if rows.is_empty() {
		return String::new();
	}

	let width = |column: fn(&DumpRow) -> &str| rows.iter().map(|row| column(row).chars().count()).max().unwrap_or(0);
	let l1 = width(|row| row.key.as_str());
	let l2 = width(|row| row.data_type.as_str());
	let l3 = width(|row| row.length.as_str());
	let l4 = width(|row| row.value.as_str());
	let l5 = width(|row| row.data.as_str());

	let lines = rows
		.iter()
		.map(|row| format!("{:<l1$}\t{:<l2$}\t{:<l3$}\t{:<l4$}\t{}", row.key, row.data_type, row.length, row.value, row.data))
		.collect::<Vec<_>>()
		.join("\n");

	if !options.include_header {
		return lines;
	}

	let separator = "#".repeat(l1 + l2 + l3 + l4 + l5 + 16);
	let header = header_lines(&dump.machine)
		.into_iter()
		.map(|line| format!("# {line}"))
		.collect::<Vec<_>>()
		.join("\n");

	format!("{separator}\n{header}\n{separator}\n{lines}")
}

fn header_lines(machine: &[(String, String)]) -> Vec<String> {
	let label_width = machine.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0) + 1;

	let mut out = vec!["smc-dump".to_owned(), String::new()];
	out.extend(machine.iter().map(|(label, value)| format!("{:<label_width$}\t{value}", format!("{label}:"))));
	out
}
