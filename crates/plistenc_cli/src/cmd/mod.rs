/// Sample record command.
pub mod demo;
/// JSON-to-plist encode command.
pub mod encode;
/// JSON value conversion.
pub mod json;
