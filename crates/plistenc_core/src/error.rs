use std::fmt::Display;

use thiserror::Error;

use crate::value::UnsupportedKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PlistError>;

/// Errors produced while building or encoding property-list values.
#[derive(Debug, Error)]
pub enum PlistError {
	/// Value kind has no property-list encoding rule.
	#[error("unable to encode \"{value}\" of type \"{type_name}\" ({kind})")]
	UnsupportedKind {
		/// Structural kind of the offending value.
		kind: UnsupportedKind,
		/// Host type name of the offending value.
		type_name: String,
		/// Short rendering of the offending value.
		value: String,
	},
	/// Indirect reference was unset when it had to be dereferenced.
	#[error("nil reference at depth {depth}")]
	NilReference {
		/// Output nesting depth where the reference was met.
		depth: usize,
	},
	/// Value nesting exceeded the configured depth ceiling.
	#[error("encode depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
	},
	/// Mapping key could not be rendered as text.
	#[error("mapping key must be a string, got {kind}")]
	KeyMustBeString {
		/// Logical kind of the rejected key.
		kind: &'static str,
	},
	/// Free-form error raised by a `Serialize` implementation.
	#[error("{0}")]
	Custom(String),
}

impl serde::ser::Error for PlistError {
	fn custom<T: Display>(msg: T) -> Self {
		Self::Custom(msg.to_string())
	}
}
