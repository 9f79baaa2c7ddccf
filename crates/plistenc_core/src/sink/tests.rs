use super::LineSink;

#[test]
fn compact_sink_concatenates_without_separators() {
	let mut sink = LineSink::default();
	sink.write_line(0, "<dict>");
	sink.write_line(3, "<key>a</key>");
	sink.write_line(0, "</dict>");

	assert_eq!(sink.bytes(), b"<dict><key>a</key></dict>");
}

#[test]
fn indented_sink_repeats_indent_per_depth_after_prefix() {
	let mut sink = LineSink::new("# ", "  ", "\n");
	sink.write_line(0, "a");
	sink.write_line(2, "b");

	assert_eq!(String::from_utf8(sink.into_bytes()).expect("utf8"), "# a\n#     b\n");
}

#[test]
fn empty_content_still_writes_prefix_and_newline() {
	let mut sink = LineSink::new(">", "\t", "\r\n");
	assert!(sink.is_empty());

	sink.write_line(1, "");
	assert_eq!(sink.bytes(), b">\t\r\n");
	assert_eq!(sink.len(), 4);
}
