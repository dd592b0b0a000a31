use chrono::NaiveDate;
use lexdraft_editor_core::EditError;
use lexdraft_primitives::{Range, Selection};

use super::DraftEditor;

/// `strftime` pattern of the date stamp: day and month without padding.
const DATE_STAMP_FORMAT: &str = "%-d/%-m/%Y";

impl DraftEditor {
	/// Replaces the live text from a keystroke without recording a snapshot.
	pub fn input(&mut self, text: &str) {
		self.document.input(text);
		self.refresh();
	}

	/// Replaces the whole text and records a snapshot.
	pub fn commit_text(&mut self, text: &str) {
		self.document.commit(text);
		self.refresh();
	}

	/// Records the live text as a snapshot.
	///
	/// Returns `false` when it already matches the current snapshot.
	pub fn commit_snapshot(&mut self) -> bool {
		self.document.commit_current()
	}

	/// Wraps `range` in `prefix`/`suffix` (bold, italics, headings, list
	/// markers) and records a snapshot.
	///
	/// Returns the range the host should re-select.
	pub fn insert_formatting(&mut self, range: Range, prefix: &str, suffix: &str) -> Result<Range, EditError> {
		let range = self.document.wrap_range(range, prefix, suffix)?;
		self.refresh();
		Ok(range)
	}

	/// Replaces `range` with `text` (paste, insert at cursor) and records a
	/// snapshot.
	///
	/// Returns the collapsed cursor just after the inserted text.
	pub fn insert_at(&mut self, range: Range, text: &str) -> Result<Range, EditError> {
		let cursor = self.document.replace_range(range, text)?;
		self.refresh();
		Ok(cursor)
	}

	/// Inserts a `||| d/m/yyyy` signature line for `date` at `range`.
	pub fn insert_date_stamp(&mut self, range: Range, date: NaiveDate) -> Result<Range, EditError> {
		let stamp = format!("\n\n||| {}\n", date.format(DATE_STAMP_FORMAT));
		self.insert_at(range, &stamp)
	}

	/// [`insert_date_stamp`](Self::insert_date_stamp) with today's local date.
	pub fn insert_date_stamp_today(&mut self, range: Range) -> Result<Range, EditError> {
		self.insert_date_stamp(range, chrono::Local::now().date_naive())
	}

	/// Restores the previous snapshot. Returns `false` at the oldest one.
	pub fn undo(&mut self) -> bool {
		if !self.document.undo() {
			return false;
		}
		self.refresh();
		true
	}

	/// Restores the next snapshot. Returns `false` at the newest one.
	pub fn redo(&mut self) -> bool {
		if !self.document.redo() {
			return false;
		}
		self.refresh();
		true
	}

	/// Observes the host's selection.
	///
	/// A collapsed or out-of-bounds range clears the selection. Returns
	/// whether a selection is now held.
	pub fn select(&mut self, range: Range) -> bool {
		self.selection = Selection::capture(self.document.content().slice(..), range);
		self.selection.is_some()
	}

	pub fn clear_selection(&mut self) {
		self.selection = None;
	}

	pub fn selection(&self) -> Option<&Selection> {
		self.selection.as_ref()
	}

	/// Stores the pending magic-edit instruction typed by the user.
	pub fn set_magic_instruction(&mut self, instruction: impl Into<String>) {
		self.magic.instruction = instruction.into();
	}

	pub fn magic_instruction(&self) -> &str {
		&self.magic.instruction
	}

	/// Whether a magic edit is in flight for the current document.
	pub fn is_magic_busy(&self) -> bool {
		self.magic.busy
	}
}
