//! Serde helper that marks a chrono timestamp as a plist `<date>`.
//!
//! ```ignore
//! #[derive(serde::Serialize)]
//! struct Entry {
//!     #[serde(with = "plistenc::date")]
//!     created: chrono::DateTime<chrono::Utc>,
//! }
//! ```
//!
//! Other serializers see an RFC 3339 string.

use chrono::{DateTime, TimeZone};
use serde::Serializer;

pub(crate) const DATE_TOKEN: &str = "$__plistenc_private_Date";

/// Serialize a timestamp so [`crate::to_value`] produces [`crate::Value::Date`].
pub fn serialize<Tz: TimeZone, S: Serializer>(value: &DateTime<Tz>, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_newtype_struct(DATE_TOKEN, &value.fixed_offset().to_rfc3339())
}
