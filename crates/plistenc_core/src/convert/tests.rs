use std::collections::{BTreeMap, HashMap, VecDeque};
use std::rc::Rc;
use std::sync::mpsc;
use std::time::{Duration, SystemTime};

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

use super::ToPlist;
use crate::value::{MapValue, UnsupportedKind, Value};

#[test]
fn integer_widths_collapse_to_signed_or_unsigned() {
	assert_eq!((-5_i8).to_plist(), Value::I64(-5));
	assert_eq!(i64::MIN.to_plist(), Value::I64(i64::MIN));
	assert_eq!(7_u16.to_plist(), Value::U64(7));
	assert_eq!(u64::MAX.to_plist(), Value::U64(u64::MAX));
	assert_eq!(200_u8.to_plist(), Value::U64(200));
}

#[test]
fn byte_sequences_become_blobs() {
	assert_eq!(vec![1_u8, 2, 3].to_plist(), Value::Bytes(vec![1, 2, 3]));
	assert_eq!([9_u8; 2].to_plist(), Value::Bytes(vec![9, 9]));
	assert_eq!(Vec::<u8>::new().to_plist(), Value::Bytes(Vec::new()));
	assert_eq!(b"hi".as_slice().to_plist(), Value::Bytes(b"hi".to_vec()));
}

#[test]
fn other_sequences_become_arrays() {
	assert_eq!(vec![1_u16, 2].to_plist(), Value::Array(vec![Value::U64(1), Value::U64(2)]));
	assert_eq!(["a", "b"].to_plist(), Value::Array(vec![Value::String("a".into()), Value::String("b".into())]));
	assert_eq!(Vec::<i32>::new().to_plist(), Value::Array(Vec::new()));
}

#[test]
fn wrapped_deque_keeps_byte_classification() {
	let mut deque: VecDeque<u8> = VecDeque::with_capacity(4);
	deque.push_back(2);
	deque.push_back(3);
	deque.push_front(1);

	assert_eq!(deque.to_plist(), Value::Bytes(vec![1, 2, 3]));
}

#[test]
fn option_maps_to_indirect_reference() {
	assert_eq!(Some(true).to_plist(), Value::ptr(Value::Bool(true)));
	assert_eq!(None::<bool>.to_plist(), Value::nil());
}

#[test]
fn smart_pointers_are_transparent() {
	assert_eq!(Box::new(1.5_f64).to_plist(), Value::F64(1.5));
	assert_eq!(Rc::new("x".to_owned()).to_plist(), Value::String("x".into()));
}

#[test]
fn btree_map_keeps_sorted_iteration_order() {
	let map: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
	let Value::Map(MapValue { entries }) = map.to_plist() else {
		panic!("expected map");
	};
	assert_eq!(entries, vec![("a".to_owned(), Value::I64(1)), ("b".to_owned(), Value::I64(2))]);
}

#[test]
fn hash_map_carries_every_entry() {
	let map: HashMap<String, bool> = [("on".to_owned(), true), ("off".to_owned(), false)].into_iter().collect();
	let Value::Map(converted) = map.to_plist() else {
		panic!("expected map");
	};
	assert_eq!(converted.len(), 2);
	assert!(converted.entries.contains(&("on".to_owned(), Value::Bool(true))));
}

#[test]
fn timestamps_become_dates() {
	let utc = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).single().expect("valid date");
	assert_eq!(utc.to_plist(), Value::Date(utc.fixed_offset()));

	let offset = FixedOffset::east_opt(3600).expect("valid offset");
	let local = offset.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).single().expect("valid date");
	assert_eq!(local.to_plist(), Value::Date(local));

	let naive = NaiveDate::from_ymd_opt(2020, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0)).expect("valid date");
	assert_eq!(naive.to_plist(), Value::Date(utc.fixed_offset()));

	let system = SystemTime::UNIX_EPOCH + Duration::from_secs(1_577_836_800);
	assert_eq!(system.to_plist(), Value::Date(utc.fixed_offset()));
}

#[test]
fn functions_channels_and_unit_are_unsupported() {
	fn answer() -> i32 {
		42
	}

	let func = answer as fn() -> i32;
	let (tx, rx) = mpsc::channel::<i32>();

	for (value, kind) in [
		(func.to_plist(), UnsupportedKind::Function),
		(tx.to_plist(), UnsupportedKind::Channel),
		(rx.to_plist(), UnsupportedKind::Channel),
		(().to_plist(), UnsupportedKind::Unit),
	] {
		let Value::Unsupported(opaque) = value else {
			panic!("expected unsupported value");
		};
		assert_eq!(opaque.kind, kind);
	}
}
