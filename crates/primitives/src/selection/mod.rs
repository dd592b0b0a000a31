use ropey::RopeSlice;

use crate::range::{CharIdx, Range};


/// A non-empty range of document text captured at selection time.
///
/// A selection is a transient reference: it is only meaningful against the
/// exact content it was captured from, so owners clear it whenever that
/// content changes. The captured `text` is what scoped rewrites operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
	range: Range,
	text: String,
}

impl Selection {
	/// Captures the text covered by `range`.
	///
	/// Returns `None` when the range is collapsed or reaches past the end of
	/// `text`; callers treat both the same way as the user clearing the
	/// selection.
	pub fn capture(text: RopeSlice, range: Range) -> Option<Self> {
		if range.is_empty() || !range.fits(text.len_chars()) {
			return None;
		}
		Some(Self {
			range,
			text: text.slice(range.span()).to_string(),
		})
	}

	/// Start of the selected extent (inclusive).
	pub fn start(&self) -> CharIdx {
		self.range.from()
	}

	/// End of the selected extent (exclusive).
	pub fn end(&self) -> CharIdx {
		self.range.to()
	}

	/// The range as reported by the host, direction preserved.
	pub fn range(&self) -> Range {
		self.range
	}

	/// The captured text.
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Checks that the selection still describes `text` exactly.
	pub fn matches(&self, text: RopeSlice) -> bool {
		self.range.fits(text.len_chars()) && text.slice(self.range.span()) == self.text.as_str()
	}
}
