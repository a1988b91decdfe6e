#![allow(missing_docs)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;

#[test]
fn fourcc_json_packs_text_codes() {
	let json = run_json(&["fourcc", "TC0P", "--json"]);
	assert_eq!(json["fourcc"], "TC0P");
	assert_eq!(json["value"], 0x5443_3050_u32);
	assert_eq!(json["hex"], "0x54433050");
}

#[test]
fn fourcc_json_unpacks_numeric_values() {
	let json = run_json(&["fourcc", "0x73703738", "--json"]);
	assert_eq!(json["fourcc"], "sp78");

	let json = run_json(&["fourcc", "1234", "--string", "--json"]);
	assert_eq!(json["fourcc"], "1234");
	assert_eq!(json["hex"], "0x31323334");
}

#[test]
fn fourcc_numeric_text_defaults_to_packed_value() {
	let json = run_json(&["fourcc", "1234", "--json"]);
	assert_eq!(json["value"], 1234);
	assert_eq!(json["hex"], "0x000004D2");

	let output = run(&["fourcc", "--help"]);
	assert!(output.status.success());
	let help = String::from_utf8_lossy(&output.stdout);
	assert!(help.contains("--string"), "help: {help}");
	assert!(help.contains("read as a packed value"), "help: {help}");
}

#[test]
fn decode_json_reports_value_and_layout() {
	let json = run_json(&["decode", "--type", "sp78", "2A80", "--json"]);
	assert_eq!(json["type"], "sp78");
	assert_eq!(json["known_type"], true);
	assert_eq!(json["length"], 2);
	assert_eq!(json["data"], "2A80");
	assert_eq!(json["value"], 42.5);
}

#[test]
fn decode_unknown_type_is_absent() {
	let json = run_json(&["decode", "--type", "zzzz", "0102", "--json"]);
	assert_eq!(json["known_type"], false);
	assert!(json["value"].is_null());

	let output = run(&["decode", "--type", "zzzz", "0102"]);
	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stdout).contains("value: absent"));
}

#[test]
fn decode_wrong_width_fails_with_report() {
	let output = run(&["decode", "--type", "si32", "0102"]);
	assert!(!output.status.success(), "width mismatch should fail");
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("Length mismatch"), "stderr: {stderr}");
	assert!(stderr.contains("int32 expects 4 bytes, got 2"), "stderr: {stderr}");
}

#[test]
fn decode_text_output_uses_precision() {
	let output = run(&["decode", "--type", "flt ", "3FA00000", "--precision", "3"]);
	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stdout).contains("value: 1.250"));
}

#[test]
fn dump_json_lists_sorted_keys() {
	let fixture = fixture_path("macbook_air_m2.json").display().to_string();
	let json = run_json(&["dump", &fixture, "--json"]);

	assert_eq!(json["compression"], "none");
	assert_eq!(json["machine"][1]["label"], "Model Identifier");

	let keys = json["keys"].as_array().expect("keys array");
	assert_eq!(keys.len(), 10);
	assert_eq!(keys[0]["key"], "#KEY");
	assert_eq!(keys[0]["value"], "1234");

	let find = |name: &str| keys.iter().find(|row| row["key"] == name).expect("key present").clone();
	assert_eq!(find("TC0P")["value"], "42.50");
	assert_eq!(find("MSLD")["value"], "True");
	assert_eq!(find("MSLD")["length"], "1 byte");
	assert_eq!(find("RPlt")["value"], "j413");
	assert_eq!(find("PSTR")["value"], "25.00");
	assert_eq!(find("VD0R")["value"], "1.50");
	assert_eq!(find("F0Ac")["value"], "2000.00");
	assert_eq!(find("B0AC")["value"], "-200");
	assert_eq!(find("zUNK")["value"], "");
}

#[test]
fn dump_text_has_banner_and_machine_details() {
	let fixture = fixture_path("macbook_air_m2.json").display().to_string();
	let output = run(&["dump", &fixture]);
	assert!(output.status.success());

	let stdout = String::from_utf8_lossy(&output.stdout);
	let lines: Vec<_> = stdout.lines().collect();
	assert!(lines[0].chars().all(|ch| ch == '#'));
	assert_eq!(lines[1], "# smc-dump");
	assert!(lines.iter().any(|line| line.starts_with("# Chip:") && line.ends_with("\tApple M2")));
	assert!(lines.iter().any(|line| line.starts_with("TC0P\tsp78\t2 bytes\t42.50")));
}

#[test]
fn dump_reads_zstd_compressed_files() {
	let raw = std::fs::read(fixture_path("macbook_air_m2.json")).expect("fixture reads");
	let compressed = zstd::encode_all(&raw[..], 3).expect("zstd encodes");
	let path = std::env::temp_dir().join(format!("smckit-dump-{}.json.zst", std::process::id()));
	std::fs::write(&path, compressed).expect("temp file writes");

	let json = run_json(&["dump", &path.display().to_string(), "--json"]);
	let _ = std::fs::remove_file(&path);

	assert_eq!(json["compression"], "zstd");
	assert_eq!(json["keys"].as_array().map(Vec::len), Some(10));
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_smckit")).args(args).output().expect("command executes")
}

fn run_json(args: &[&str]) -> Value {
	let output = run(args);
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn fixture_path(name: &str) -> PathBuf {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}
