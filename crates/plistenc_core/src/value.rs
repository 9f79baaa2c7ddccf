use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::convert::ToPlist;

/// Runtime value consumed by the plist encoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// Opaque byte payload, emitted as base64 `<data>`.
	Bytes(Vec<u8>),
	/// UTF-8 text.
	String(String),
	/// Timestamp, emitted as RFC 3339 `<date>`.
	Date(DateTime<FixedOffset>),
	/// Homogeneous sequence.
	Array(Vec<Value>),
	/// Record with named fields in declaration order.
	Struct(StructValue),
	/// String-keyed associative mapping.
	Map(MapValue),
	/// Indirect reference; `None` when unset.
	Ptr(Option<Box<Value>>),
	/// Value whose kind has no encoding rule.
	Unsupported(Opaque),
}

impl Value {
	/// Wrap a value in a set indirect reference.
	pub fn ptr(value: Value) -> Self {
		Self::Ptr(Some(Box::new(value)))
	}

	/// Unset indirect reference.
	pub fn nil() -> Self {
		Self::Ptr(None)
	}

	/// Stable lowercase kind label.
	pub fn kind_name(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::I64(_) => "int",
			Self::U64(_) => "uint",
			Self::F32(_) | Self::F64(_) => "float",
			Self::Bytes(_) => "bytes",
			Self::String(_) => "string",
			Self::Date(_) => "date",
			Self::Array(_) => "array",
			Self::Struct(_) => "struct",
			Self::Map(_) => "map",
			Self::Ptr(_) => "ptr",
			Self::Unsupported(opaque) => opaque.kind.as_str(),
		}
	}
}

/// Record value with field metadata preserved.
#[derive(Debug, Clone, PartialEq)]
pub struct StructValue {
	/// Host type name, used for diagnostics only.
	pub type_name: Box<str>,
	/// Field values in declaration order.
	pub fields: Vec<FieldValue>,
}

impl StructValue {
	/// Create an empty record.
	pub fn new(type_name: impl Into<Box<str>>) -> Self {
		Self {
			type_name: type_name.into(),
			fields: Vec::new(),
		}
	}

	/// Append an exported field keyed by its declared name.
	pub fn field(mut self, name: impl Into<Box<str>>, value: impl ToPlist) -> Self {
		self.fields.push(FieldValue::new(name, value));
		self
	}

	/// Append an exported field with a name override tag.
	///
	/// A tag of `-` drops the field from output.
	pub fn tagged(mut self, name: impl Into<Box<str>>, tag: impl Into<Box<str>>, value: impl ToPlist) -> Self {
		let mut field = FieldValue::new(name, value);
		field.tag = Some(tag.into());
		self.fields.push(field);
		self
	}

	/// Append a non-exported field. It is carried but never encoded.
	pub fn private(mut self, name: impl Into<Box<str>>, value: impl ToPlist) -> Self {
		let mut field = FieldValue::new(name, value);
		field.exported = false;
		self.fields.push(field);
		self
	}

	/// Iterate `(key, value)` pairs for fields that appear in output.
	pub fn visible_fields(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields.iter().filter_map(|field| field.plist_key().map(|key| (key, &field.value)))
	}
}

/// Named record field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Declared field identifier.
	pub name: Box<str>,
	/// Optional name override; `-` means skip.
	pub tag: Option<Box<str>>,
	/// Whether the field is publicly visible.
	pub exported: bool,
	/// Field payload.
	pub value: Value,
}

impl FieldValue {
	/// Sentinel tag that removes a field from output.
	pub const SKIP_TAG: &'static str = "-";

	/// Create an exported, untagged field.
	pub fn new(name: impl Into<Box<str>>, value: impl ToPlist) -> Self {
		Self {
			name: name.into(),
			tag: None,
			exported: true,
			value: value.to_plist(),
		}
	}

	/// Output key for this field, or `None` when the field is omitted.
	pub fn plist_key(&self) -> Option<&str> {
		if !self.exported {
			return None;
		}

		match self.tag.as_deref() {
			Some(tag) if !tag.is_empty() => (tag != Self::SKIP_TAG).then_some(tag),
			_ => Some(&*self.name),
		}
	}
}

/// String-keyed mapping in the source container's iteration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapValue {
	/// Entries in iteration order.
	pub entries: Vec<(String, Value)>,
}

impl MapValue {
	/// Create an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one entry. Duplicate keys are kept as-is.
	pub fn insert(&mut self, key: impl Into<String>, value: impl ToPlist) {
		self.entries.push((key.into(), value.to_plist()));
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the mapping has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K: Into<String>, V: ToPlist> FromIterator<(K, V)> for MapValue {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(key, value)| (key.into(), value.to_plist())).collect(),
		}
	}
}

/// Structural kinds without an encoding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedKind {
	/// Callable value.
	Function,
	/// Channel or other concurrency primitive.
	Channel,
	/// Complex number.
	Complex,
	/// Unit or empty tuple.
	Unit,
	/// Anything else.
	Other,
}

impl UnsupportedKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Function => "func",
			Self::Channel => "chan",
			Self::Complex => "complex",
			Self::Unit => "unit",
			Self::Other => "other",
		}
	}
}

impl fmt::Display for UnsupportedKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Placeholder for a value that cannot be encoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque {
	/// Structural kind.
	pub kind: UnsupportedKind,
	/// Host type name.
	pub type_name: Box<str>,
	/// Short rendering used in error messages.
	pub repr: Box<str>,
}

impl Opaque {
	/// Create an opaque placeholder.
	pub fn new(kind: UnsupportedKind, type_name: impl Into<Box<str>>, repr: impl Into<Box<str>>) -> Self {
		Self {
			kind,
			type_name: type_name.into(),
			repr: repr.into(),
		}
	}
}

impl From<StructValue> for Value {
	fn from(value: StructValue) -> Self {
		Self::Struct(value)
	}
}

impl From<MapValue> for Value {
	fn from(value: MapValue) -> Self {
		Self::Map(value)
	}
}

impl From<Opaque> for Value {
	fn from(value: Opaque) -> Self {
		Self::Unsupported(value)
	}
}

#[cfg(test)]
mod tests;
