use clap::Parser;

use super::{Args, encode_options};

#[derive(Parser)]
struct Harness {
	#[command(flatten)]
	args: Args,
}

fn parse(argv: &[&str]) -> Args {
	Harness::parse_from(std::iter::once("encode").chain(argv.iter().copied())).args
}

#[test]
fn default_options_indent_with_tabs() {
	let opt = encode_options(&parse(&[]));
	assert_eq!(opt.indent, "\t");
	assert_eq!(opt.newline, "\n");
	assert!(!opt.sort_keys && !opt.escape_text);
	assert_eq!(opt.max_depth, None);
}

#[test]
fn compact_flag_clears_whitespace_but_keeps_switches() {
	let opt = encode_options(&parse(&["--compact", "--indent", "  ", "--sort-keys", "--escape-text", "--max-depth", "4"]));
	assert!(opt.prefix.is_empty() && opt.indent.is_empty() && opt.newline.is_empty());
	assert!(opt.sort_keys);
	assert!(opt.escape_text);
	assert_eq!(opt.max_depth, Some(4));
}
