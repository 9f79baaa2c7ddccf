use super::{FieldValue, MapValue, StructValue, UnsupportedKind, Value};

#[test]
fn untagged_exported_field_uses_declared_name() {
	let field = FieldValue::new("Name", "John Doe");
	assert_eq!(field.plist_key(), Some("Name"));
}

#[test]
fn tag_overrides_declared_name() {
	let record = StructValue::new("Person").tagged("Birth", "BirthDate", 1_i32);
	assert_eq!(record.fields[0].plist_key(), Some("BirthDate"));
}

#[test]
fn skip_tag_and_private_fields_are_omitted() {
	let record = StructValue::new("Person")
		.field("Visible", true)
		.tagged("Hidden", "-", "x")
		.private("secret", "y");

	let keys: Vec<&str> = record.visible_fields().map(|(key, _)| key).collect();
	assert_eq!(keys, vec!["Visible"]);
}

#[test]
fn private_field_ignores_tag() {
	let mut field = FieldValue::new("inner", 1_u8);
	field.exported = false;
	field.tag = Some("Inner".into());
	assert_eq!(field.plist_key(), None);
}

#[test]
fn empty_tag_falls_back_to_declared_name() {
	let record = StructValue::new("T").tagged("Count", "", 3_u32);
	assert_eq!(record.fields[0].plist_key(), Some("Count"));
}

#[test]
fn map_value_keeps_insertion_order_and_duplicates() {
	let mut map = MapValue::new();
	map.insert("b", 1_i64);
	map.insert("a", 2_i64);
	map.insert("b", 3_i64);

	let keys: Vec<&str> = map.entries.iter().map(|(key, _)| key.as_str()).collect();
	assert_eq!(keys, vec!["b", "a", "b"]);
	assert_eq!(map.len(), 3);
}

#[test]
fn kind_names_are_stable() {
	assert_eq!(Value::nil().kind_name(), "ptr");
	assert_eq!(Value::F32(1.0).kind_name(), "float");
	assert_eq!(Value::Map(MapValue::new()).kind_name(), "map");
	assert_eq!(UnsupportedKind::Function.to_string(), "func");
}
