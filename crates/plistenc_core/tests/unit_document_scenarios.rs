#![allow(missing_docs)]

use std::collections::HashMap;
use std::thread;

use chrono::{DateTime, TimeZone, Utc};
use plistenc::{EncodeOptions, MapValue, PlistError, StructValue, ToPlist, Value, to_bytes, to_bytes_indented, to_bytes_with};
use plistenc_testkit::{DOCTYPE_DECL, XML_DECL, compact_document, indented_body};
use pretty_assertions::assert_eq;

struct Person {
	name: String,
	birth: DateTime<Utc>,
	visible: bool,
	hidden: String,
	avatar: Vec<u8>,
	tags: Vec<String>,
	manager: Option<Box<Person>>,
}

impl ToPlist for Person {
	fn to_plist(&self) -> Value {
		let mut record = StructValue::new("Person")
			.field("Name", &self.name)
			.tagged("Birth", "BirthDate", self.birth)
			.field("Visible", self.visible)
			.tagged("Hidden", "-", &self.hidden)
			.field("Avatar", &self.avatar)
			.field("Tags", &self.tags);
		if self.manager.is_some() {
			record = record.field("Manager", &self.manager);
		}
		Value::Struct(record)
	}
}

fn john() -> Person {
	Person {
		name: "John Doe".to_owned(),
		birth: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single().expect("valid date"),
		visible: true,
		hidden: "x".to_owned(),
		avatar: vec![0xde, 0xad, 0xbe, 0xef],
		tags: Vec::new(),
		manager: None,
	}
}

#[test]
fn person_record_encodes_compact_document() {
	let bytes = to_bytes(&john()).expect("encode succeeds");

	assert_eq!(
		String::from_utf8(bytes).expect("utf8 output"),
		compact_document(concat!(
			"<dict>",
			"<key>Name</key><string>John Doe</string>",
			"<key>BirthDate</key><date>2020-01-01T00:00:00Z</date>",
			"<key>Visible</key><true/>",
			"<key>Avatar</key><data>3q2+7w==</data>",
			"<key>Tags</key><array/>",
			"</dict>",
		))
	);
}

#[test]
fn nested_person_encodes_indented_document() {
	let mut employee = john();
	employee.name = "Jane Roe".to_owned();
	employee.tags = vec!["ops".to_owned()];
	employee.manager = Some(Box::new(john()));

	let bytes = to_bytes_indented(&employee, "", "\t").expect("encode succeeds");
	let text = String::from_utf8(bytes.clone()).expect("utf8 output");
	assert!(text.starts_with(&format!("{XML_DECL}\n{DOCTYPE_DECL}\n<plist version=\"1.0\">\n")));

	assert_eq!(
		indented_body(&bytes),
		vec![
			"\t<dict>",
			"\t\t<key>Name</key>",
			"\t\t<string>Jane Roe</string>",
			"\t\t<key>BirthDate</key>",
			"\t\t<date>2020-01-01T00:00:00Z</date>",
			"\t\t<key>Visible</key>",
			"\t\t<true/>",
			"\t\t<key>Avatar</key>",
			"\t\t<data>3q2+7w==</data>",
			"\t\t<key>Tags</key>",
			"\t\t<array>",
			"\t\t\t<string>ops</string>",
			"\t\t</array>",
			"\t\t<key>Manager</key>",
			"\t\t<dict>",
			"\t\t\t<key>Name</key>",
			"\t\t\t<string>John Doe</string>",
			"\t\t\t<key>BirthDate</key>",
			"\t\t\t<date>2020-01-01T00:00:00Z</date>",
			"\t\t\t<key>Visible</key>",
			"\t\t\t<true/>",
			"\t\t\t<key>Avatar</key>",
			"\t\t\t<data>3q2+7w==</data>",
			"\t\t\t<key>Tags</key>",
			"\t\t\t<array/>",
			"\t\t</dict>",
			"\t</dict>",
		]
	);
}

#[test]
fn empty_string_keyed_mapping_encodes_open_and_close_lines() {
	let empty: HashMap<String, i32> = HashMap::new();
	let bytes = to_bytes_indented(&empty, "", "  ").expect("encode succeeds");
	assert_eq!(indented_body(&bytes), vec!["  <dict>", "  </dict>"]);
}

#[test]
fn function_value_returns_error_and_no_document() {
	fn callback() -> u8 {
		1
	}

	let mut map = MapValue::new();
	map.insert("ok", 1_i32);
	map.insert("callback", callback as fn() -> u8);

	let result = to_bytes(&map);
	assert!(matches!(result, Err(PlistError::UnsupportedKind { .. })), "got {result:?}");
}

#[test]
fn unset_optional_field_is_reported() {
	let record = StructValue::new("T").field("Maybe", None::<String>);
	let err = to_bytes(&record).expect_err("unset reference fails");
	assert!(matches!(err, PlistError::NilReference { depth: 2 }));
}

#[test]
fn independent_threads_encode_without_coordination() {
	let handles: Vec<_> = (0..4_i64)
		.map(|n| {
			thread::spawn(move || {
				let value = vec![n; 3];
				to_bytes_with(&value, &EncodeOptions::indented("", " ")).expect("encode succeeds")
			})
		})
		.collect();

	for (n, handle) in handles.into_iter().enumerate() {
		let bytes = handle.join().expect("thread completes");
		let body = indented_body(&bytes);
		assert_eq!(body.len(), 5);
		assert_eq!(body[1], format!("  <integer>{n}</integer>"));
	}
}
