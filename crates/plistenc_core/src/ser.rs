use chrono::DateTime;
use serde::Serialize;
use serde::ser::{self, Impossible};

use crate::date::DATE_TOKEN;
use crate::encode::{EncodeOptions, encode};
use crate::error::{PlistError, Result};
use crate::value::{FieldValue, MapValue, Opaque, StructValue, UnsupportedKind, Value};

/// Build a [`Value`] tree from any `Serialize` type.
///
/// Struct fields keep declaration order; `#[serde(rename)]` picks the key and
/// `#[serde(skip)]` drops the field. Non-empty sequences of `u8` become byte
/// blobs; an empty one stays an array unless it goes through `serialize_bytes`.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
	value.serialize(ValueSerializer)
}

/// Serialize and encode in one step.
pub fn serialize_to_bytes<T: Serialize + ?Sized>(value: &T, opt: &EncodeOptions) -> Result<Vec<u8>> {
	encode(&to_value(value)?, opt)
}

struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
	type Ok = Value;
	type Error = PlistError;

	type SerializeSeq = SerializeVec;
	type SerializeTuple = SerializeVec;
	type SerializeTupleStruct = SerializeVec;
	type SerializeTupleVariant = SerializeTupleVariant;
	type SerializeMap = SerializeMap;
	type SerializeStruct = SerializeStruct;
	type SerializeStructVariant = SerializeStructVariant;

	fn serialize_bool(self, v: bool) -> Result<Value> {
		Ok(Value::Bool(v))
	}

	fn serialize_i8(self, v: i8) -> Result<Value> {
		Ok(Value::I64(v.into()))
	}

	fn serialize_i16(self, v: i16) -> Result<Value> {
		Ok(Value::I64(v.into()))
	}

	fn serialize_i32(self, v: i32) -> Result<Value> {
		Ok(Value::I64(v.into()))
	}

	fn serialize_i64(self, v: i64) -> Result<Value> {
		Ok(Value::I64(v))
	}

	fn serialize_u8(self, v: u8) -> Result<Value> {
		Ok(Value::U64(v.into()))
	}

	fn serialize_u16(self, v: u16) -> Result<Value> {
		Ok(Value::U64(v.into()))
	}

	fn serialize_u32(self, v: u32) -> Result<Value> {
		Ok(Value::U64(v.into()))
	}

	fn serialize_u64(self, v: u64) -> Result<Value> {
		Ok(Value::U64(v))
	}

	fn serialize_f32(self, v: f32) -> Result<Value> {
		Ok(Value::F32(v))
	}

	fn serialize_f64(self, v: f64) -> Result<Value> {
		Ok(Value::F64(v))
	}

	fn serialize_char(self, v: char) -> Result<Value> {
		Ok(Value::String(v.to_string()))
	}

	fn serialize_str(self, v: &str) -> Result<Value> {
		Ok(Value::String(v.to_owned()))
	}

	fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
		Ok(Value::Bytes(v.to_vec()))
	}

	fn serialize_none(self) -> Result<Value> {
		Ok(Value::nil())
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Value> {
		Ok(Value::ptr(value.serialize(self)?))
	}

	fn serialize_unit(self) -> Result<Value> {
		Ok(Value::Unsupported(Opaque::new(UnsupportedKind::Unit, "()", "()")))
	}

	fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
		Ok(Value::Unsupported(Opaque::new(UnsupportedKind::Unit, name, name)))
	}

	fn serialize_unit_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str) -> Result<Value> {
		Ok(Value::String(variant.to_owned()))
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(self, name: &'static str, value: &T) -> Result<Value> {
		if name != DATE_TOKEN {
			return value.serialize(self);
		}

		match value.serialize(self)? {
			Value::String(text) => DateTime::parse_from_rfc3339(&text)
				.map(Value::Date)
				.map_err(|err| PlistError::Custom(format!("invalid plist date {text:?}: {err}"))),
			other => Err(PlistError::Custom(format!("plist date must serialize as a string, got {}", other.kind_name()))),
		}
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(
		self,
		_name: &'static str,
		_variant_index: u32,
		variant: &'static str,
		value: &T,
	) -> Result<Value> {
		let mut map = MapValue::new();
		map.entries.push((variant.to_owned(), value.serialize(self)?));
		Ok(Value::Map(map))
	}

	fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
		Ok(SerializeVec {
			items: Vec::new(),
			bytes: Some(Vec::with_capacity(len.unwrap_or(0))),
		})
	}

	fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
		self.serialize_seq(Some(len))
	}

	fn serialize_tuple_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str, len: usize) -> Result<SerializeTupleVariant> {
		Ok(SerializeTupleVariant {
			variant,
			items: Vec::with_capacity(len),
		})
	}

	fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
		Ok(SerializeMap {
			map: MapValue {
				entries: Vec::with_capacity(len.unwrap_or(0)),
			},
			next_key: None,
		})
	}

	fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeStruct> {
		let mut record = StructValue::new(name);
		record.fields.reserve(len);
		Ok(SerializeStruct { record })
	}

	fn serialize_struct_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str, len: usize) -> Result<SerializeStructVariant> {
		let mut record = StructValue::new(variant);
		record.fields.reserve(len);
		Ok(SerializeStructVariant { variant, record })
	}
}

/// Collects sequence elements.
///
/// Elements are gathered as raw bytes while every one arrives through
/// `serialize_u8`; the first other element turns the collected bytes back into
/// integers. An empty sequence has no elements to inspect and stays an array.
struct SerializeVec {
	items: Vec<Value>,
	bytes: Option<Vec<u8>>,
}

impl ser::SerializeSeq for SerializeVec {
	type Ok = Value;
	type Error = PlistError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		if let Some(bytes) = self.bytes.as_mut() {
			if let Ok(byte) = value.serialize(ByteSerializer) {
				bytes.push(byte);
				return Ok(());
			}

			self.items = bytes.drain(..).map(|byte| Value::U64(byte.into())).collect();
			self.bytes = None;
		}

		self.items.push(value.serialize(ValueSerializer)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		match self.bytes {
			Some(bytes) if !bytes.is_empty() => Ok(Value::Bytes(bytes)),
			_ => Ok(Value::Array(self.items)),
		}
	}
}

impl ser::SerializeTuple for SerializeVec {
	type Ok = Value;
	type Error = PlistError;

	fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		ser::SerializeSeq::serialize_element(self, value)
	}

	fn end(self) -> Result<Value> {
		ser::SerializeSeq::end(self)
	}
}

impl ser::SerializeTupleStruct for SerializeVec {
	type Ok = Value;
	type Error = PlistError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		ser::SerializeSeq::serialize_element(self, value)
	}

	fn end(self) -> Result<Value> {
		ser::SerializeSeq::end(self)
	}
}

struct SerializeTupleVariant {
	variant: &'static str,
	items: Vec<Value>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
	type Ok = Value;
	type Error = PlistError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		self.items.push(value.serialize(ValueSerializer)?);
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(single_entry(self.variant, Value::Array(self.items)))
	}
}

struct SerializeMap {
	map: MapValue,
	next_key: Option<String>,
}

impl ser::SerializeMap for SerializeMap {
	type Ok = Value;
	type Error = PlistError;

	fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<()> {
		self.next_key = Some(key.serialize(MapKeySerializer)?);
		Ok(())
	}

	fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
		let key = self
			.next_key
			.take()
			.ok_or_else(|| PlistError::Custom("map value serialized before its key".to_owned()))?;
		self.map.entries.push((key, value.serialize(ValueSerializer)?));
		Ok(())
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Map(self.map))
	}
}

struct SerializeStruct {
	record: StructValue,
}

impl ser::SerializeStruct for SerializeStruct {
	type Ok = Value;
	type Error = PlistError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
		push_field(&mut self.record, key, value)
	}

	fn end(self) -> Result<Value> {
		Ok(Value::Struct(self.record))
	}
}

struct SerializeStructVariant {
	variant: &'static str,
	record: StructValue,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
	type Ok = Value;
	type Error = PlistError;

	fn serialize_field<T: Serialize + ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()> {
		push_field(&mut self.record, key, value)
	}

	fn end(self) -> Result<Value> {
		Ok(single_entry(self.variant, Value::Struct(self.record)))
	}
}

fn push_field<T: Serialize + ?Sized>(record: &mut StructValue, key: &'static str, value: &T) -> Result<()> {
	record.fields.push(FieldValue {
		name: key.into(),
		tag: None,
		exported: true,
		value: value.serialize(ValueSerializer)?,
	});
	Ok(())
}

fn single_entry(key: &str, value: Value) -> Value {
	Value::Map(MapValue {
		entries: vec![(key.to_owned(), value)],
	})
}

/// Renders mapping keys as text.
struct MapKeySerializer;

impl MapKeySerializer {
	fn reject(kind: &'static str) -> PlistError {
		PlistError::KeyMustBeString { kind }
	}
}

impl ser::Serializer for MapKeySerializer {
	type Ok = String;
	type Error = PlistError;

	type SerializeSeq = Impossible<String, PlistError>;
	type SerializeTuple = Impossible<String, PlistError>;
	type SerializeTupleStruct = Impossible<String, PlistError>;
	type SerializeTupleVariant = Impossible<String, PlistError>;
	type SerializeMap = Impossible<String, PlistError>;
	type SerializeStruct = Impossible<String, PlistError>;
	type SerializeStructVariant = Impossible<String, PlistError>;

	fn serialize_bool(self, _v: bool) -> Result<String> {
		Err(Self::reject("bool"))
	}

	fn serialize_i8(self, v: i8) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_i16(self, v: i16) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_i32(self, v: i32) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_i64(self, v: i64) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_u8(self, v: u8) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_u16(self, v: u16) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_u32(self, v: u32) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_u64(self, v: u64) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_f32(self, _v: f32) -> Result<String> {
		Err(Self::reject("float"))
	}

	fn serialize_f64(self, _v: f64) -> Result<String> {
		Err(Self::reject("float"))
	}

	fn serialize_char(self, v: char) -> Result<String> {
		Ok(v.to_string())
	}

	fn serialize_str(self, v: &str) -> Result<String> {
		Ok(v.to_owned())
	}

	fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
		Err(Self::reject("bytes"))
	}

	fn serialize_none(self) -> Result<String> {
		Err(Self::reject("none"))
	}

	fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
		value.serialize(self)
	}

	fn serialize_unit(self) -> Result<String> {
		Err(Self::reject("unit"))
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<String> {
		Err(Self::reject("unit struct"))
	}

	fn serialize_unit_variant(self, _name: &'static str, _variant_index: u32, variant: &'static str) -> Result<String> {
		Ok(variant.to_owned())
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _name: &'static str, value: &T) -> Result<String> {
		value.serialize(self)
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_value: &T,
	) -> Result<String> {
		Err(Self::reject("enum variant"))
	}

	fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
		Err(Self::reject("sequence"))
	}

	fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
		Err(Self::reject("tuple"))
	}

	fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeTupleStruct> {
		Err(Self::reject("tuple struct"))
	}

	fn serialize_tuple_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeTupleVariant> {
		Err(Self::reject("enum variant"))
	}

	fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
		Err(Self::reject("map"))
	}

	fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
		Err(Self::reject("struct"))
	}

	fn serialize_struct_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStructVariant> {
		Err(Self::reject("enum variant"))
	}
}

/// Accepts exactly one `u8`; every other shape is refused.
struct ByteSerializer;

impl ByteSerializer {
	fn refuse() -> PlistError {
		PlistError::Custom("not a byte".to_owned())
	}
}

impl ser::Serializer for ByteSerializer {
	type Ok = u8;
	type Error = PlistError;

	type SerializeSeq = Impossible<u8, PlistError>;
	type SerializeTuple = Impossible<u8, PlistError>;
	type SerializeTupleStruct = Impossible<u8, PlistError>;
	type SerializeTupleVariant = Impossible<u8, PlistError>;
	type SerializeMap = Impossible<u8, PlistError>;
	type SerializeStruct = Impossible<u8, PlistError>;
	type SerializeStructVariant = Impossible<u8, PlistError>;

	fn serialize_u8(self, v: u8) -> Result<u8> {
		Ok(v)
	}

	fn serialize_bool(self, _v: bool) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_i8(self, _v: i8) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_i16(self, _v: i16) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_i32(self, _v: i32) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_i64(self, _v: i64) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_u16(self, _v: u16) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_u32(self, _v: u32) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_u64(self, _v: u64) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_f32(self, _v: f32) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_f64(self, _v: f64) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_char(self, _v: char) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_str(self, _v: &str) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_bytes(self, _v: &[u8]) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_none(self) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_some<T: Serialize + ?Sized>(self, _value: &T) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_unit(self) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_unit_struct(self, _name: &'static str) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_unit_variant(self, _name: &'static str, _variant_index: u32, _variant: &'static str) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_newtype_struct<T: Serialize + ?Sized>(self, _name: &'static str, _value: &T) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_newtype_variant<T: Serialize + ?Sized>(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_value: &T,
	) -> Result<u8> {
		Err(Self::refuse())
	}

	fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
		Err(Self::refuse())
	}

	fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
		Err(Self::refuse())
	}

	fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeTupleStruct> {
		Err(Self::refuse())
	}

	fn serialize_tuple_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeTupleVariant> {
		Err(Self::refuse())
	}

	fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
		Err(Self::refuse())
	}

	fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
		Err(Self::refuse())
	}

	fn serialize_struct_variant(
		self,
		_name: &'static str,
		_variant_index: u32,
		_variant: &'static str,
		_len: usize,
	) -> Result<Self::SerializeStructVariant> {
		Err(Self::refuse())
	}
}
