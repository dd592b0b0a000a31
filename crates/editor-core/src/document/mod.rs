//! Document - the working text buffer under edit.
//!
//! A [`Document`] owns the live text, its title, and its snapshot history.
//! The live buffer and the history are deliberately allowed to diverge:
//! keystrokes go through [`Document::input`] and only touch the buffer,
//! while discrete actions (formatting, pastes, accepted rewrites, loads) go
//! through the commit methods and record a snapshot.
//!
//! # Stamps
//!
//! [`DocumentId`] is minted fresh for every document, so it doubles as the
//! generation stamp for work started against an older document. `version`
//! increments on every content mutation and stamps work that must see the
//! exact text it was started from.

#[cfg(test)]
mod tests;

use std::sync::atomic::{AtomicU64, Ordering};

use lexdraft_primitives::{CharLen, Range, Rope, trimmed_char_len};
use thiserror::Error;

use crate::history::{DEFAULT_HISTORY_LIMIT, SnapshotHistory};

/// Counter for generating unique document IDs.
static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

impl DocumentId {
	/// Generates a new unique document ID.
	pub fn next() -> Self {
		Self(NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed))
	}
}

/// Errors from range-based document mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
	/// The range reaches past the end of the document.
	#[error("range {start}..{end} is out of bounds for a document of {len} chars")]
	OutOfBounds {
		/// Start of the offending range.
		start: usize,
		/// End of the offending range.
		end: usize,
		/// Document length in chars.
		len: usize,
	},
}

/// The single mutable text buffer under edit.
#[derive(Debug)]
pub struct Document {
	/// Unique identifier for this document.
	pub id: DocumentId,

	title: String,

	/// The live text, including uncommitted keystrokes.
	content: Rope,

	history: SnapshotHistory,

	/// Incremented on every content mutation.
	version: u64,
}

impl Document {
	/// Creates a document whose history starts with `content` as its only snapshot.
	pub fn new(title: impl Into<String>, content: &str) -> Self {
		Self::with_history_limit(title, content, DEFAULT_HISTORY_LIMIT)
	}

	/// Like [`Document::new`] with an explicit history retention limit.
	pub fn with_history_limit(title: impl Into<String>, content: &str, limit: usize) -> Self {
		let content = Rope::from_str(content);
		let mut history = SnapshotHistory::new(limit);
		history.push(content.clone());
		Self {
			id: DocumentId::next(),
			title: title.into(),
			content,
			history,
			version: 0,
		}
	}

	/// Creates an empty, untitled document.
	pub fn scratch() -> Self {
		Self::new(String::new(), "")
	}

	/// Returns the live text.
	pub fn content(&self) -> &Rope {
		&self.content
	}

	/// Returns the live text as an owned string.
	pub fn text(&self) -> String {
		self.content.to_string()
	}

	/// Returns the document title.
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Renames the document. Titles are not part of the history.
	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
	}

	/// Returns the document version.
	pub fn version(&self) -> u64 {
		self.version
	}

	/// Returns the length of the live text in chars.
	pub fn len_chars(&self) -> CharLen {
		self.content.len_chars()
	}

	/// Returns whether the live text is empty.
	pub fn is_empty(&self) -> bool {
		self.content.len_chars() == 0
	}

	/// Returns the char count of the live text with surrounding whitespace trimmed.
	pub fn trimmed_len(&self) -> CharLen {
		trimmed_char_len(self.content.slice(..))
	}

	/// Returns the snapshot history.
	pub fn history(&self) -> &SnapshotHistory {
		&self.history
	}

	/// Replaces the live text without recording a snapshot.
	///
	/// This is the keystroke path: hosts coalesce typing into discrete
	/// commits, so per-character input never grows the history.
	pub fn input(&mut self, text: &str) {
		self.content = Rope::from_str(text);
		self.bump_version();
	}

	/// Replaces the whole text and records it as a new snapshot.
	pub fn commit(&mut self, text: &str) {
		self.content = Rope::from_str(text);
		self.record();
	}

	/// Records the live text as a snapshot.
	///
	/// Returns `false` without recording when the live text already equals
	/// the current snapshot.
	pub fn commit_current(&mut self) -> bool {
		if self.history.current() == Some(&self.content) {
			return false;
		}
		self.history.push(self.content.clone());
		tracing::trace!(doc_id = ?self.id, version = self.version, "document.snapshot");
		true
	}

	/// Replaces the text covered by `range` and records a snapshot.
	///
	/// Returns the collapsed cursor position just after the inserted text.
	pub fn replace_range(&mut self, range: Range, text: &str) -> Result<Range, EditError> {
		self.check_range(range)?;
		let from = range.from();
		self.content.remove(range.span());
		self.content.insert(from, text);
		self.record();
		Ok(Range::point(from + text.chars().count()))
	}

	/// Surrounds the text covered by `range` with `prefix` and `suffix`.
	///
	/// Returns the range of the original text at its new position, so the
	/// host can keep it selected.
	pub fn wrap_range(&mut self, range: Range, prefix: &str, suffix: &str) -> Result<Range, EditError> {
		self.check_range(range)?;
		let shift = prefix.chars().count();
		self.content.insert(range.to(), suffix);
		self.content.insert(range.from(), prefix);
		self.record();
		Ok(Range::new(range.from() + shift, range.to() + shift))
	}

	/// Returns whether [`undo`](Self::undo) would change anything.
	pub fn can_undo(&self) -> bool {
		self.history.can_undo()
	}

	/// Returns whether [`redo`](Self::redo) would change anything.
	pub fn can_redo(&self) -> bool {
		self.history.can_redo()
	}

	/// Restores the previous snapshot.
	///
	/// Returns `false` and leaves the text untouched when there is nothing to undo.
	pub fn undo(&mut self) -> bool {
		let Some(snapshot) = self.history.undo() else {
			return false;
		};
		self.content = snapshot.clone();
		self.bump_version();
		true
	}

	/// Restores the next snapshot.
	///
	/// Returns `false` and leaves the text untouched when there is nothing to redo.
	pub fn redo(&mut self) -> bool {
		let Some(snapshot) = self.history.redo() else {
			return false;
		};
		self.content = snapshot.clone();
		self.bump_version();
		true
	}

	fn check_range(&self, range: Range) -> Result<(), EditError> {
		let len = self.content.len_chars();
		if range.fits(len) {
			Ok(())
		} else {
			Err(EditError::OutOfBounds {
				start: range.from(),
				end: range.to(),
				len,
			})
		}
	}

	fn record(&mut self) {
		self.history.push(self.content.clone());
		self.bump_version();
		tracing::trace!(doc_id = ?self.id, version = self.version, "document.commit");
	}

	fn bump_version(&mut self) {
		self.version = self.version.wrapping_add(1);
	}
}
