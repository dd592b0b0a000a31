/// Selection direction (anchor to head).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// Head is after anchor (normal selection).
	Forward,
	/// Head is before anchor (reverse selection).
	Backward,
}

/// A position in the text, measured in characters (not bytes).
///
/// This is the canonical coordinate space for documents: hosts report
/// selection offsets in chars and every splice is performed in chars.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
pub type CharLen = usize;

/// A text range defined by anchor and head positions.
///
/// The anchor is the fixed end, and the head moves while the user drags.
/// A text-input selection made right-to-left has `head < anchor`; the
/// covered extent is always `from()..to()` regardless of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (cursor position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (cursor) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Start of the covered extent (inclusive).
	#[inline]
	pub fn from(&self) -> CharIdx {
		self.anchor.min(self.head)
	}

	/// End of the covered extent (exclusive).
	#[inline]
	pub fn to(&self) -> CharIdx {
		self.anchor.max(self.head)
	}

	/// Returns the length of the range in characters.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.to() - self.from()
	}

	/// Returns true if anchor equals head (zero-width cursor).
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	/// Returns the direction of this range.
	#[inline]
	pub fn direction(&self) -> Direction {
		if self.head < self.anchor {
			Direction::Backward
		} else {
			Direction::Forward
		}
	}

	/// Returns a new range with anchor and head swapped.
	pub fn flip(&self) -> Self {
		Self {
			anchor: self.head,
			head: self.anchor,
		}
	}

	/// Returns the covered extent as a std range, suitable for rope slicing.
	pub fn span(&self) -> std::ops::Range<CharIdx> {
		self.from()..self.to()
	}

	/// Returns true if the whole extent lies within a text of `len_chars`.
	pub fn fits(&self, len_chars: CharLen) -> bool {
		self.to() <= len_chars
	}

	/// Applies a function to both anchor and head.
	pub fn map(self, mut f: impl FnMut(CharIdx) -> CharIdx) -> Self {
		Self {
			anchor: f(self.anchor),
			head: f(self.head),
		}
	}

	/// Clamps anchor and head to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_char),
			head: self.head.min(max_char),
		}
	}
}

impl Default for Range {
	fn default() -> Self {
		Self::point(0)
	}
}

impl From<std::ops::Range<CharIdx>> for Range {
	fn from(r: std::ops::Range<CharIdx>) -> Self {
		Self::new(r.start, r.end)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_range_basics() {
		let r = Range::new(5, 10);
		assert_eq!(r.from(), 5);
		assert_eq!(r.to(), 10);
		assert_eq!(r.len(), 5);
		assert!(!r.is_empty());
		assert_eq!(r.direction(), Direction::Forward);
	}

	#[test]
	fn test_range_backward_covers_same_extent() {
		let r = Range::new(10, 5);
		assert_eq!(r.direction(), Direction::Backward);
		assert_eq!(r.span(), 5..10);
		assert_eq!(r.len(), 5);
	}

	#[test]
	fn test_range_point() {
		let r = Range::point(5);
		assert!(r.is_empty());
		assert_eq!(r.len(), 0);
	}

	#[test]
	fn test_range_fits() {
		assert!(Range::new(0, 5).fits(5));
		assert!(!Range::new(2, 6).fits(5));
		assert!(!Range::new(6, 2).fits(5));
	}

	#[test]
	fn test_range_clamp() {
		let r = Range::new(3, 40).clamp(10);
		assert_eq!(r, Range::new(3, 10));
	}

	#[test]
	fn test_range_flip_and_map() {
		let r = Range::new(1, 3).flip().map(|p| p + 2);
		assert_eq!(r, Range::new(5, 3));
	}
}
