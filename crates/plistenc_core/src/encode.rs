use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::SecondsFormat;
use log::{debug, trace};

use crate::convert::ToPlist;
use crate::error::{PlistError, Result};
use crate::sink::LineSink;
use crate::value::Value;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const DOCTYPE_DECL: &str = r#"<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">"#;
const PLIST_OPEN: &str = r#"<plist version="1.0">"#;
const PLIST_CLOSE: &str = "</plist>";

/// Line formatting and behavior switches for plist encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
	/// Text prepended to every line.
	pub prefix: String,
	/// Text repeated once per nesting level.
	pub indent: String,
	/// Line terminator; empty for compact output.
	pub newline: String,
	/// Escape `&`, `<` and `>` in string and key content.
	pub escape_text: bool,
	/// Emit mapping keys in lexicographic order instead of iteration order.
	pub sort_keys: bool,
	/// Deepest allowed value nesting; the root value sits at depth 1.
	pub max_depth: Option<usize>,
}

impl EncodeOptions {
	/// Single unbroken stream with no prefix, indentation, or newlines.
	pub fn compact() -> Self {
		Self::default()
	}

	/// One element per `\n`-terminated line, indented by `indent` per level.
	pub fn indented(prefix: impl Into<String>, indent: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			indent: indent.into(),
			newline: "\n".to_owned(),
			..Self::default()
		}
	}
}

/// Encode a value as a complete plist XML document.
///
/// Nothing is returned on error; the partially written buffer is dropped.
pub fn encode(value: &Value, opt: &EncodeOptions) -> Result<Vec<u8>> {
	debug!("encoding plist document: root kind={}, compact={}", value.kind_name(), opt.newline.is_empty());

	let mut encoder = Encoder {
		opt,
		sink: LineSink::new(opt.prefix.as_str(), opt.indent.as_str(), opt.newline.as_str()),
	};
	encoder.sink.write_line(0, XML_DECL);
	encoder.sink.write_line(0, DOCTYPE_DECL);
	encoder.sink.write_line(0, PLIST_OPEN);
	encoder.encode_value(1, value)?;
	encoder.sink.write_line(0, PLIST_CLOSE);

	trace!("encoded plist document: {} bytes", encoder.sink.len());
	Ok(encoder.sink.into_bytes())
}

/// Encode any [`ToPlist`] value as a compact document.
pub fn to_bytes<T: ToPlist + ?Sized>(value: &T) -> Result<Vec<u8>> {
	encode(&value.to_plist(), &EncodeOptions::compact())
}

/// Encode any [`ToPlist`] value with `\n` line breaks, `prefix` on every line, and `indent` per level.
pub fn to_bytes_indented<T: ToPlist + ?Sized>(value: &T, prefix: &str, indent: &str) -> Result<Vec<u8>> {
	encode(&value.to_plist(), &EncodeOptions::indented(prefix, indent))
}

/// Encode any [`ToPlist`] value with explicit options.
pub fn to_bytes_with<T: ToPlist + ?Sized>(value: &T, opt: &EncodeOptions) -> Result<Vec<u8>> {
	encode(&value.to_plist(), opt)
}

/// Encode any [`ToPlist`] value into a `String`.
pub fn to_string_with<T: ToPlist + ?Sized>(value: &T, opt: &EncodeOptions) -> Result<String> {
	let bytes = to_bytes_with(value, opt)?;
	String::from_utf8(bytes).map_err(|err| PlistError::Custom(err.to_string()))
}

struct Encoder<'a> {
	opt: &'a EncodeOptions,
	sink: LineSink,
}

impl Encoder<'_> {
	fn encode_value(&mut self, depth: usize, value: &Value) -> Result<()> {
		if let Some(max_depth) = self.opt.max_depth.filter(|max| depth > *max) {
			return Err(PlistError::DepthExceeded { max_depth });
		}

		match value {
			Value::Ptr(Some(inner)) => self.encode_value(depth, inner)?,
			Value::Ptr(None) => return Err(PlistError::NilReference { depth }),
			Value::Date(ts) => {
				let line = format!("<date>{}</date>", ts.to_rfc3339_opts(SecondsFormat::Secs, true));
				self.sink.write_line(depth, &line);
			}
			Value::Bool(true) => self.sink.write_line(depth, "<true/>"),
			Value::Bool(false) => self.sink.write_line(depth, "<false/>"),
			Value::I64(v) => self.sink.write_line(depth, &format!("<integer>{v}</integer>")),
			Value::U64(v) => self.sink.write_line(depth, &format!("<integer>{v}</integer>")),
			Value::F32(v) => self.sink.write_line(depth, &format!("<real>{}</real>", format_real(f64::from(*v)))),
			Value::F64(v) => self.sink.write_line(depth, &format!("<real>{}</real>", format_real(*v))),
			Value::Bytes(bytes) => self.sink.write_line(depth, &format!("<data>{}</data>", STANDARD.encode(bytes))),
			Value::Array(items) if items.is_empty() => self.sink.write_line(depth, "<array/>"),
			Value::Array(items) => {
				self.sink.write_line(depth, "<array>");
				for item in items {
					self.encode_value(depth + 1, item)?;
				}
				self.sink.write_line(depth, "</array>");
			}
			Value::String(text) => {
				let line = format!("<string>{}</string>", self.text(text));
				self.sink.write_line(depth, &line);
			}
			Value::Struct(record) => {
				self.sink.write_line(depth, "<dict>");
				for (key, item) in record.visible_fields() {
					self.encode_entry(depth + 1, key, item)?;
				}
				self.sink.write_line(depth, "</dict>");
			}
			Value::Map(map) => {
				let mut entries: Vec<_> = map.entries.iter().collect();
				if self.opt.sort_keys {
					entries.sort_by(|left, right| left.0.cmp(&right.0));
				}

				self.sink.write_line(depth, "<dict>");
				for (key, item) in entries {
					self.encode_entry(depth + 1, key, item)?;
				}
				self.sink.write_line(depth, "</dict>");
			}
			Value::Unsupported(opaque) => {
				return Err(PlistError::UnsupportedKind {
					kind: opaque.kind,
					type_name: opaque.type_name.to_string(),
					value: opaque.repr.to_string(),
				});
			}
		}

		Ok(())
	}

	fn encode_entry(&mut self, depth: usize, key: &str, value: &Value) -> Result<()> {
		let line = format!("<key>{}</key>", self.text(key));
		self.sink.write_line(depth, &line);
		self.encode_value(depth, value)
	}

	fn text<'t>(&self, raw: &'t str) -> Cow<'t, str> {
		if self.opt.escape_text { escape_xml(raw) } else { Cow::Borrowed(raw) }
	}
}

/// Fixed six-decimal rendering; non-finite values use `NaN`, `+Inf`, `-Inf`.
fn format_real(v: f64) -> String {
	if v.is_nan() {
		"NaN".to_owned()
	} else if v.is_infinite() {
		if v > 0.0 { "+Inf".to_owned() } else { "-Inf".to_owned() }
	} else {
		format!("{v:.6}")
	}
}

fn escape_xml(raw: &str) -> Cow<'_, str> {
	if !raw.contains(['&', '<', '>']) {
		return Cow::Borrowed(raw);
	}

	let mut out = String::with_capacity(raw.len() + 8);
	for ch in raw.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			c => out.push(c),
		}
	}
	Cow::Owned(out)
}
