#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;
mod error;

use crate::error::Result;

#[derive(Parser)]
#[command(name = "plistenc", about = "Property-list XML encoding tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Encode a JSON document as a plist.
	Encode(cmd::encode::Args),
	/// Print a sample record as a plist.
	Demo(cmd::demo::Args),
}

fn main() {
	env_logger::init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Encode(args) => cmd::encode::run(args),
		Commands::Demo(args) => cmd::demo::run(args),
	}
}
