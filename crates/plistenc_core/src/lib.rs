//! Public library API for encoding values as property-list XML documents.

mod convert;
/// Serde `with` helper for plist timestamps.
pub mod date;
mod encode;
mod error;
mod ser;
mod sink;
mod value;

/// Host-type conversion trait.
pub use convert::ToPlist;
/// Document encoding entry points and options.
pub use encode::{EncodeOptions, encode, to_bytes, to_bytes_indented, to_bytes_with, to_string_with};
/// Error and result aliases.
pub use error::{PlistError, Result};
/// Serde bridge entry points.
pub use ser::{serialize_to_bytes, to_value};
/// Line-oriented output buffer.
pub use sink::LineSink;
/// Encoder input value types.
pub use value::{FieldValue, MapValue, Opaque, StructValue, UnsupportedKind, Value};
