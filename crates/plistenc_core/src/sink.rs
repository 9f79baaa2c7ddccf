/// Append-only line buffer with prefix, per-depth indentation, and line terminator.
///
/// The sink does no tag matching; nesting is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct LineSink {
	prefix: String,
	indent: String,
	newline: String,
	buf: Vec<u8>,
}

impl LineSink {
	/// Create an empty sink with the given line formatting.
	pub fn new(prefix: impl Into<String>, indent: impl Into<String>, newline: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			indent: indent.into(),
			newline: newline.into(),
			buf: Vec::new(),
		}
	}

	/// Append `prefix + indent * depth + content + newline`.
	pub fn write_line(&mut self, depth: usize, content: &str) {
		self.buf.extend_from_slice(self.prefix.as_bytes());
		for _ in 0..depth {
			self.buf.extend_from_slice(self.indent.as_bytes());
		}
		self.buf.extend_from_slice(content.as_bytes());
		self.buf.extend_from_slice(self.newline.as_bytes());
	}

	/// Bytes written so far.
	pub fn bytes(&self) -> &[u8] {
		&self.buf
	}

	/// Consume the sink and return its buffer.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}

	/// Number of bytes written so far.
	pub fn len(&self) -> usize {
		self.buf.len()
	}

	/// Whether nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.buf.is_empty()
	}
}

#[cfg(test)]
mod tests;
