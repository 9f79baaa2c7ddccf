use std::any::type_name;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::time::SystemTime;

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

use crate::value::{MapValue, Opaque, StructValue, UnsupportedKind, Value};

/// Conversion of host values into the encoder's [`Value`] tree.
pub trait ToPlist {
	/// Build the plist value for `self`.
	fn to_plist(&self) -> Value;

	/// Build the plist value for a sequence of `Self`.
	///
	/// Element types override this to change how whole sequences are classified;
	/// `u8` turns sequences into byte blobs.
	fn slice_to_plist(items: &[Self]) -> Value
	where
		Self: Sized,
	{
		Value::Array(items.iter().map(ToPlist::to_plist).collect())
	}
}

impl ToPlist for Value {
	fn to_plist(&self) -> Value {
		self.clone()
	}
}

impl ToPlist for StructValue {
	fn to_plist(&self) -> Value {
		Value::Struct(self.clone())
	}
}

impl ToPlist for MapValue {
	fn to_plist(&self) -> Value {
		Value::Map(self.clone())
	}
}

impl ToPlist for bool {
	fn to_plist(&self) -> Value {
		Value::Bool(*self)
	}
}

macro_rules! signed_to_plist {
	($($ty:ty),*) => {$(
		impl ToPlist for $ty {
			fn to_plist(&self) -> Value {
				Value::I64(*self as i64)
			}
		}
	)*};
}

macro_rules! unsigned_to_plist {
	($($ty:ty),*) => {$(
		impl ToPlist for $ty {
			fn to_plist(&self) -> Value {
				Value::U64(*self as u64)
			}
		}
	)*};
}

signed_to_plist!(i8, i16, i32, i64, isize);
unsigned_to_plist!(u16, u32, u64, usize);

impl ToPlist for u8 {
	fn to_plist(&self) -> Value {
		Value::U64(u64::from(*self))
	}

	fn slice_to_plist(items: &[Self]) -> Value {
		Value::Bytes(items.to_vec())
	}
}

impl ToPlist for f32 {
	fn to_plist(&self) -> Value {
		Value::F32(*self)
	}
}

impl ToPlist for f64 {
	fn to_plist(&self) -> Value {
		Value::F64(*self)
	}
}

impl ToPlist for str {
	fn to_plist(&self) -> Value {
		Value::String(self.to_owned())
	}
}

impl ToPlist for String {
	fn to_plist(&self) -> Value {
		Value::String(self.clone())
	}
}

impl ToPlist for Cow<'_, str> {
	fn to_plist(&self) -> Value {
		Value::String(self.clone().into_owned())
	}
}

impl ToPlist for char {
	fn to_plist(&self) -> Value {
		Value::String(self.to_string())
	}
}

impl<T: ToPlist> ToPlist for [T] {
	fn to_plist(&self) -> Value {
		T::slice_to_plist(self)
	}
}

impl<T: ToPlist, const N: usize> ToPlist for [T; N] {
	fn to_plist(&self) -> Value {
		T::slice_to_plist(self.as_slice())
	}
}

impl<T: ToPlist> ToPlist for Vec<T> {
	fn to_plist(&self) -> Value {
		T::slice_to_plist(self)
	}
}

impl<T: ToPlist> ToPlist for VecDeque<T> {
	fn to_plist(&self) -> Value {
		let (front, back) = self.as_slices();
		let head = T::slice_to_plist(front);
		if back.is_empty() {
			return head;
		}

		match (head, T::slice_to_plist(back)) {
			(Value::Bytes(mut left), Value::Bytes(right)) => {
				left.extend_from_slice(&right);
				Value::Bytes(left)
			}
			(Value::Array(mut left), Value::Array(right)) => {
				left.extend(right);
				Value::Array(left)
			}
			_ => Value::Array(self.iter().map(ToPlist::to_plist).collect()),
		}
	}
}

impl<T: ToPlist> ToPlist for Option<T> {
	fn to_plist(&self) -> Value {
		match self {
			Some(inner) => Value::ptr(inner.to_plist()),
			None => Value::nil(),
		}
	}
}

impl<T: ToPlist + ?Sized> ToPlist for &T {
	fn to_plist(&self) -> Value {
		(**self).to_plist()
	}
}

impl<T: ToPlist + ?Sized> ToPlist for Box<T> {
	fn to_plist(&self) -> Value {
		(**self).to_plist()
	}
}

impl<T: ToPlist + ?Sized> ToPlist for Rc<T> {
	fn to_plist(&self) -> Value {
		(**self).to_plist()
	}
}

impl<T: ToPlist + ?Sized> ToPlist for Arc<T> {
	fn to_plist(&self) -> Value {
		(**self).to_plist()
	}
}

impl<K: AsRef<str>, V: ToPlist, S: BuildHasher> ToPlist for HashMap<K, V, S> {
	fn to_plist(&self) -> Value {
		Value::Map(self.iter().map(|(key, value)| (<K as AsRef<str>>::as_ref(key), value)).collect())
	}
}

impl<K: AsRef<str>, V: ToPlist> ToPlist for BTreeMap<K, V> {
	fn to_plist(&self) -> Value {
		Value::Map(self.iter().map(|(key, value)| (<K as AsRef<str>>::as_ref(key), value)).collect())
	}
}

impl<Tz: TimeZone> ToPlist for DateTime<Tz> {
	fn to_plist(&self) -> Value {
		Value::Date(self.fixed_offset())
	}
}

/// Naive timestamps are taken as UTC.
impl ToPlist for NaiveDateTime {
	fn to_plist(&self) -> Value {
		Value::Date(self.and_utc().fixed_offset())
	}
}

impl ToPlist for SystemTime {
	fn to_plist(&self) -> Value {
		Value::Date(DateTime::<Utc>::from(*self).fixed_offset())
	}
}

impl ToPlist for () {
	fn to_plist(&self) -> Value {
		Value::Unsupported(Opaque::new(UnsupportedKind::Unit, "()", "()"))
	}
}

impl<R> ToPlist for fn() -> R {
	fn to_plist(&self) -> Value {
		Value::Unsupported(Opaque::new(UnsupportedKind::Function, type_name::<Self>(), format!("{:p}", *self)))
	}
}

macro_rules! channel_to_plist {
	($($ty:ident),*) => {$(
		impl<T> ToPlist for $ty<T> {
			fn to_plist(&self) -> Value {
				Value::Unsupported(Opaque::new(UnsupportedKind::Channel, type_name::<Self>(), "chan"))
			}
		}
	)*};
}

channel_to_plist!(Sender, SyncSender, Receiver);

#[cfg(test)]
mod tests;
