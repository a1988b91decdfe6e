#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "smckit", about = "Apple SMC data decoding tools")]
struct Cli {
	/// Increase log verbosity (-v debug, -vv trace). `SMCKIT_LOG` overrides.
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Convert between four-character codes and their packed value.
	Fourcc(cmd::fourcc::Args),
	/// Decode one hex buffer with an SMC type tag.
	Decode(cmd::decode::Args),
	/// Render a key dump file as a table.
	Dump(cmd::dump::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {}", err.report());
		std::process::exit(1);
	}
}

fn run(command: Commands) -> smckit::smc::Result<()> {
	match command {
		Commands::Fourcc(args) => cmd::fourcc::run(args),
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Dump(args) => cmd::dump::run(args),
	}
}

fn init_tracing(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_env("SMCKIT_LOG").unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
