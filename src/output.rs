//! Output sinks for emitted fragments.

use std::io::Write;

/// Destination for fragments rendered in emit mode.
///
/// The contract is infallible; implementations that can fail internally
/// log and swallow the error.
pub trait OutputSink {
	/// Write a rendered fragment
	fn write(&mut self, html: &str);
}

/// Collects emitted markup in memory.
///
/// # Examples
///
/// ```
/// use controlkit::{BufferSink, OutputSink};
///
/// let mut sink = BufferSink::new();
/// sink.write("<input>");
/// sink.write("<select>");
/// assert_eq!(sink.contents(), "<input><select>");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BufferSink {
	buffer: String,
}

impl BufferSink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Everything emitted so far
	pub fn contents(&self) -> &str {
		&self.buffer
	}

	pub fn into_string(self) -> String {
		self.buffer
	}
}

impl OutputSink for BufferSink {
	fn write(&mut self, html: &str) {
		self.buffer.push_str(html);
	}
}

/// Streams emitted markup to any [`Write`] destination, e.g. a response
/// body or stdout.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
	writer: W,
}

impl<W: Write> WriterSink<W> {
	pub fn new(writer: W) -> Self {
		Self { writer }
	}

	pub fn into_inner(self) -> W {
		self.writer
	}
}

impl<W: Write> OutputSink for WriterSink<W> {
	fn write(&mut self, html: &str) {
		if let Err(error) = self.writer.write_all(html.as_bytes()) {
			tracing::warn!(%error, "output sink write failed");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_writer_sink_streams_bytes() {
		let mut sink = WriterSink::new(Vec::new());
		sink.write("<div>");
		sink.write("</div>");
		assert_eq!(sink.into_inner(), b"<div></div>");
	}
}
