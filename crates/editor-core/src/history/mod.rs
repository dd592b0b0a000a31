//! Linear undo/redo history over full-text snapshots.
//!
//! Every entry is a complete copy of the document text at a commit point.
//! Ropes share structure between clones, so a snapshot costs roughly the
//! size of the edit that produced it rather than the size of the document.
//!
//! # Cursor
//!
//! The history is an ordered list of snapshots plus a cursor pointing at the
//! snapshot the document currently reflects. Pushing truncates everything
//! after the cursor, so an undone future is never redo-able once a new
//! commit lands.


use lexdraft_primitives::Rope;

/// Default maximum number of snapshots retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Snapshot-based linear undo history.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
	entries: Vec<Rope>,
	/// Index of the current snapshot; `None` only while `entries` is empty.
	cursor: Option<usize>,
	limit: usize,
}

impl Default for SnapshotHistory {
	fn default() -> Self {
		Self::new(DEFAULT_HISTORY_LIMIT)
	}
}

impl SnapshotHistory {
	/// Creates an empty history retaining at most `limit` snapshots.
	///
	/// A limit of zero is treated as one: the current snapshot is always kept.
	pub fn new(limit: usize) -> Self {
		Self {
			entries: Vec::new(),
			cursor: None,
			limit: limit.max(1),
		}
	}

	/// Returns the number of retained snapshots.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether no snapshot has been pushed yet.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the cursor index, or `None` for an empty history.
	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	/// Returns the retention limit.
	pub fn limit(&self) -> usize {
		self.limit
	}

	/// Returns the snapshot the cursor points at.
	pub fn current(&self) -> Option<&Rope> {
		self.cursor.map(|i| &self.entries[i])
	}

	/// Returns whether [`undo`](Self::undo) would move the cursor.
	pub fn can_undo(&self) -> bool {
		self.cursor.is_some_and(|c| c > 0)
	}

	/// Returns whether [`redo`](Self::redo) would move the cursor.
	pub fn can_redo(&self) -> bool {
		self.cursor.is_some_and(|c| c + 1 < self.entries.len())
	}

	/// Iterates over all retained snapshots, oldest first.
	pub fn iter(&self) -> impl Iterator<Item = &Rope> {
		self.entries.iter()
	}

	/// Records a new snapshot and makes it current.
	///
	/// Drops any redo-able future first, then evicts the oldest entries
	/// until the retention limit holds.
	pub fn push(&mut self, snapshot: Rope) -> &Rope {
		let keep = self.cursor.map_or(0, |c| c + 1);
		self.entries.truncate(keep);
		self.entries.push(snapshot);

		let overflow = self.entries.len().saturating_sub(self.limit);
		if overflow > 0 {
			self.entries.drain(..overflow);
			tracing::trace!(evicted = overflow, limit = self.limit, "history.evict");
		}

		let last = self.entries.len() - 1;
		self.cursor = Some(last);
		&self.entries[last]
	}

	/// Steps the cursor back one snapshot.
	///
	/// Returns `None` without moving when the cursor is already at the
	/// oldest snapshot (or the history is empty).
	pub fn undo(&mut self) -> Option<&Rope> {
		let cursor = self.cursor.filter(|&c| c > 0)? - 1;
		self.cursor = Some(cursor);
		Some(&self.entries[cursor])
	}

	/// Steps the cursor forward one snapshot.
	///
	/// Returns `None` without moving when the cursor is already at the
	/// newest snapshot (or the history is empty).
	pub fn redo(&mut self) -> Option<&Rope> {
		let cursor = self.cursor.filter(|&c| c + 1 < self.entries.len())? + 1;
		self.cursor = Some(cursor);
		Some(&self.entries[cursor])
	}

	/// Discards every snapshot.
	pub fn clear(&mut self) {
		self.entries.clear();
		self.cursor = None;
	}
}
