use std::io::{self, Write};

use chrono::{TimeZone, Utc};
use plistenc::{EncodeOptions, MapValue, StructValue, Value};

use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Emit one unbroken line with no indentation.
	#[arg(long)]
	pub compact: bool,
}

/// Encode a fixed sample record and print it.
pub fn run(args: Args) -> Result<()> {
	let opt = if args.compact {
		EncodeOptions::compact()
	} else {
		EncodeOptions::indented("", "\t")
	};

	let bytes = plistenc::encode(&sample_person(), &opt)?;
	let mut stdout = io::stdout().lock();
	stdout.write_all(&bytes)?;
	stdout.flush()?;
	Ok(())
}

pub(crate) fn sample_person() -> Value {
	let birth = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single();

	let mut scores = MapValue::new();
	scores.insert("math", 91.5_f64);
	scores.insert("art", 78_i32);

	Value::Struct(
		StructValue::new("Person")
			.field("Name", "John Doe")
			.tagged("Birth", "BirthDate", birth)
			.field("Visible", true)
			.field("Height", 180.5_f32)
			.tagged("Hidden", "-", "x")
			.field("Tags", ["admin", "ops"])
			.field("Avatar", [0x89_u8, b'P', b'N', b'G'])
			.field("FingerPrints", [vec![1_u8, 2], vec![3_u8, 4]])
			.field("Scores", scores)
			.private("password", "hunter2"),
	)
}
