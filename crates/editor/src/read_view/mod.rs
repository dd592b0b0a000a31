//! Read-mode page navigation.
//!
//! Pages are recomputed from the whole document after every mutation. When
//! there is at least one page, navigation covers one extra slot past the
//! last page: the closing disclaimer the host renders after the document.


use lexdraft_editor_core::{Page, paginate};
use lexdraft_primitives::{CharLen, Rope};

/// What the read pane shows at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot<'a> {
	/// A page of document text.
	Page(&'a Page),
	/// The closing disclaimer after the last page.
	Disclaimer,
	/// The document has no text.
	Empty,
}

/// Paginated read-mode view of the document.
#[derive(Debug, Clone)]
pub struct ReadView {
	pages: Vec<Page>,
	current: usize,
	page_size: CharLen,
}

impl ReadView {
	pub fn new(page_size: CharLen) -> Self {
		Self {
			pages: Vec::new(),
			current: 0,
			page_size,
		}
	}

	/// Repaginates `content` and clamps the current position.
	pub fn refresh(&mut self, content: &Rope) {
		self.pages = paginate(content.slice(..), self.page_size);
		self.clamp();
		tracing::trace!(pages = self.pages.len(), current = self.current, "read_view.refresh");
	}

	pub fn pages(&self) -> &[Page] {
		&self.pages
	}

	pub fn page_count(&self) -> usize {
		self.pages.len()
	}

	pub fn page_size(&self) -> CharLen {
		self.page_size
	}

	/// Number of navigable slots: every page plus the disclaimer, or zero.
	pub fn slot_count(&self) -> usize {
		if self.pages.is_empty() { 0 } else { self.pages.len() + 1 }
	}

	pub fn current_index(&self) -> usize {
		self.current
	}

	pub fn current_slot(&self) -> PageSlot<'_> {
		match self.pages.get(self.current) {
			Some(page) => PageSlot::Page(page),
			None if self.pages.is_empty() => PageSlot::Empty,
			None => PageSlot::Disclaimer,
		}
	}

	/// Moves forward one slot. Returns `false` at the last slot.
	pub fn next_page(&mut self) -> bool {
		self.go_to(self.current + 1)
	}

	/// Moves back one slot. Returns `false` at the first slot.
	pub fn prev_page(&mut self) -> bool {
		match self.current.checked_sub(1) {
			Some(index) => self.go_to(index),
			None => false,
		}
	}

	/// Jumps to `index`. Returns `false` if it is not a valid slot.
	pub fn go_to(&mut self, index: usize) -> bool {
		if index >= self.slot_count() || index == self.current {
			return false;
		}
		self.current = index;
		true
	}

	fn clamp(&mut self) {
		self.current = self.current.min(self.slot_count().saturating_sub(1));
	}
}
