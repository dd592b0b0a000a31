//! Smart-trigger gate for auxiliary analyses.
//!
//! Decides, from state alone, whether an analysis request may be issued.
//! Automatic requests fire at most once per document and kind, only while
//! the matching tab is active and only for documents long enough to be
//! worth analysing. Manual requests skip the once-only rules but keep the
//! length threshold.


use crate::analysis::{AnalysisKind, AnalysisSlot};
use crate::view::Tab;

/// Minimum trimmed document length (chars) for any analysis request.
pub const MIN_CHARS_FOR_SMART_ANALYSIS: usize = 300;

/// Who is asking for the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
	/// State changed (tab switch, edit, load) and the editor is checking on its own.
	Automatic,
	/// The user explicitly asked to (re)run the analysis.
	Manual,
}

/// Why the gate refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
	/// This kind is never fetched automatically.
	NotAutomatic,
	/// The kind's tab is not the active tab.
	TabInactive,
	/// A request for this kind is already in flight.
	InFlight,
	/// The panel already holds a result.
	AlreadyPopulated,
	/// An automatic request already ran for this document.
	AlreadyAttempted,
	/// The trimmed document is shorter than the threshold.
	BelowThreshold { len: usize, required: usize },
	/// A deep analysis was requested without a usable instruction.
	EmptyInstruction,
}

/// Outcome of [`evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
	/// The request should be issued now.
	Fire,
	/// The request must not be issued, for the given reason.
	Skip(SkipReason),
}

impl GateDecision {
	/// Whether the caller should issue the request.
	pub fn fires(self) -> bool {
		self == Self::Fire
	}
}

/// State the gate reads.
#[derive(Debug, Clone, Copy)]
pub struct GateInput<'a> {
	/// Tab currently shown; automatic requests only fire for their own tab.
	pub active_tab: Tab,
	/// Panel state for the requested kind.
	pub slot: &'a AnalysisSlot,
	/// Trimmed document length in chars.
	pub trimmed_len: usize,
	/// Smallest `trimmed_len` any request accepts.
	pub min_chars: usize,
}

/// Decides whether a `kind` request may be issued now.
pub fn evaluate(kind: AnalysisKind, trigger: Trigger, input: GateInput<'_>) -> GateDecision {
	if trigger == Trigger::Automatic {
		if !kind.is_automatic() {
			return GateDecision::Skip(SkipReason::NotAutomatic);
		}
		if input.active_tab != kind.tab() {
			return GateDecision::Skip(SkipReason::TabInactive);
		}
	}
	if input.slot.is_loading() {
		return GateDecision::Skip(SkipReason::InFlight);
	}
	if trigger == Trigger::Automatic {
		if input.slot.is_populated() {
			return GateDecision::Skip(SkipReason::AlreadyPopulated);
		}
		if input.slot.auto_attempted() {
			return GateDecision::Skip(SkipReason::AlreadyAttempted);
		}
	}
	if !meets_threshold(input.trimmed_len, input.min_chars) {
		return GateDecision::Skip(SkipReason::BelowThreshold {
			len: input.trimmed_len,
			required: input.min_chars,
		});
	}
	GateDecision::Fire
}

/// Whether a document of `trimmed_len` chars is long enough to analyse.
pub fn meets_threshold(trimmed_len: usize, min_chars: usize) -> bool {
	trimmed_len >= min_chars
}
