use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Reading input or writing output failed.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Encoding failed.
	#[error("plist: {0}")]
	Plist(#[from] plistenc::PlistError),
}
