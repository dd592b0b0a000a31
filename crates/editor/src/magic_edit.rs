//! Selection-scoped rewrite ("magic edit") state.

use crate::tasks::TaskId;

/// Result of asking for a magic edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicEditOutcome {
	/// The rewrite request was issued.
	Started(TaskId),
	/// Nothing happened.
	Ignored(IgnoreReason),
}

/// Why a magic edit was not issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
	/// No non-empty selection is active.
	NoSelection,
	/// The instruction is blank.
	EmptyInstruction,
	/// Another magic edit is still in flight for this document.
	Busy,
}

/// Pending instruction text and the single-flight flag.
#[derive(Debug, Clone, Default)]
pub(crate) struct MagicEdit {
	pub(crate) instruction: String,
	pub(crate) busy: bool,
}

impl MagicEdit {
	/// Resolves the instruction to use, preferring a non-blank explicit one.
	pub(crate) fn resolve(&self, explicit: Option<&str>) -> Option<String> {
		let instruction = explicit
			.filter(|s| !s.trim().is_empty())
			.unwrap_or(self.instruction.as_str())
			.trim();
		(!instruction.is_empty()).then(|| instruction.to_string())
	}

	pub(crate) fn reset(&mut self) {
		*self = Self::default();
	}
}
