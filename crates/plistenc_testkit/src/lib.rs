//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// XML declaration line every document starts with.
pub const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
/// DOCTYPE line following the XML declaration.
pub const DOCTYPE_DECL: &str = r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Expected compact document for an already-compact body.
pub fn compact_document(body: &str) -> String {
	format!("{XML_DECL}{DOCTYPE_DECL}<plist version=\"1.0\">{body}</plist>")
}

/// Lines between `<plist version="1.0">` and `</plist>` of a `\n`-separated document.
///
/// Panics when the wrapper lines are missing.
pub fn indented_body(document: &[u8]) -> Vec<String> {
	let text = std::str::from_utf8(document).expect("document is utf8");
	let lines: Vec<&str> = text.lines().collect();
	assert!(lines.len() >= 4, "document too short: {text:?}");
	assert_eq!(lines[0], XML_DECL);
	assert_eq!(lines[1], DOCTYPE_DECL);
	assert_eq!(lines[2], r#"<plist version="1.0">"#);
	assert_eq!(lines[lines.len() - 1], "</plist>");
	lines[3..lines.len() - 1].iter().map(|line| (*line).to_owned()).collect()
}
