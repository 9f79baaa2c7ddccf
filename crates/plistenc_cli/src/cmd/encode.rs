use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use log::debug;
use plistenc::EncodeOptions;

use crate::cmd::json::{JsonOptions, json_to_value};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// JSON input file; `-` or nothing reads stdin.
	pub path: Option<PathBuf>,
	/// Emit one unbroken line with no indentation.
	#[arg(long)]
	pub compact: bool,
	/// Text prepended to every output line.
	#[arg(long, default_value = "")]
	pub prefix: String,
	/// Text repeated once per nesting level.
	#[arg(long, default_value = "\t")]
	pub indent: String,
	/// Sort mapping keys.
	#[arg(long = "sort-keys")]
	pub sort_keys: bool,
	/// Escape `&`, `<` and `>` in text.
	#[arg(long = "escape-text")]
	pub escape_text: bool,
	/// Encode RFC 3339 strings as dates.
	#[arg(long = "detect-dates")]
	pub detect_dates: bool,
	/// Fail when nesting goes deeper than this.
	#[arg(long = "max-depth")]
	pub max_depth: Option<usize>,
}

/// Read JSON and write the equivalent plist document to stdout.
pub fn run(args: Args) -> Result<()> {
	let input = read_input(args.path.as_ref())?;
	let json: serde_json::Value = serde_json::from_slice(&input)?;
	let value = json_to_value(
		&json,
		JsonOptions {
			detect_dates: args.detect_dates,
		},
	);

	let bytes = plistenc::encode(&value, &encode_options(&args))?;
	debug!("writing {} bytes of plist output", bytes.len());

	let mut stdout = io::stdout().lock();
	stdout.write_all(&bytes)?;
	stdout.flush()?;
	Ok(())
}

pub(crate) fn encode_options(args: &Args) -> EncodeOptions {
	let base = if args.compact {
		EncodeOptions::compact()
	} else {
		EncodeOptions::indented(args.prefix.as_str(), args.indent.as_str())
	};

	EncodeOptions {
		escape_text: args.escape_text,
		sort_keys: args.sort_keys,
		max_depth: args.max_depth,
		..base
	}
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
	match path {
		Some(path) if path.as_os_str() != "-" => Ok(fs::read(path)?),
		_ => {
			let mut buf = Vec::new();
			io::stdin().lock().read_to_end(&mut buf)?;
			Ok(buf)
		}
	}
}

#[cfg(test)]
mod tests;
