//! Auxiliary analysis panels.
//!
//! Each panel holds the last result for its kind plus a loading flag and an
//! `auto_attempted` latch. The latch is what makes automatic fetching
//! single-fire per document: it is set when the gate fires automatically
//! and only cleared when a new document is loaded, so an empty or failed
//! result is never fetched again without an explicit user action.

#[cfg(test)]
mod tests;

use crate::backend::Citation;
use crate::view::Tab;

/// Which auxiliary analysis a panel or request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
	/// Ratio decidendi: the core legal rationale of the document.
	Ratio,
	/// Legislation citations applicable to the document.
	Semantic,
	/// Deep analysis in a user-selected mode.
	Deep,
}

impl AnalysisKind {
	/// Kinds the smart-trigger gate may fire without user action.
	pub const AUTOMATIC: [AnalysisKind; 2] = [AnalysisKind::Ratio, AnalysisKind::Semantic];

	pub fn tab(self) -> Tab {
		match self {
			Self::Ratio => Tab::Ratio,
			Self::Semantic => Tab::Semantic,
			Self::Deep => Tab::Analysis,
		}
	}

	pub fn is_automatic(self) -> bool {
		Self::AUTOMATIC.contains(&self)
	}
}

/// Deep-analysis perspective requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepAnalysisMode {
	/// Opposing counsel hunting contradictions and weak points.
	Inconsistencies,
	/// Factual, legal, and evidentiary case theory.
	CaseTheory,
	/// How the deciding authority would likely rule.
	Authority,
	/// Free-form user instruction.
	Custom(String),
}

/// Content of an analysis panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisContent {
	/// Nothing fetched yet.
	#[default]
	Empty,
	/// Prose result (ratio, deep analysis).
	Text(String),
	/// Structured citation list (semantic analysis).
	Citations(Vec<Citation>),
	/// The document is too short to analyse; `required` is the char threshold.
	Insufficient { required: usize },
	/// The last request failed; the message is user-facing.
	Failed(String),
}

impl AnalysisContent {
	/// Whether the panel has a usable result.
	///
	/// Blank text and empty citation lists count as unpopulated.
	pub fn is_populated(&self) -> bool {
		match self {
			Self::Text(text) => !text.trim().is_empty(),
			Self::Citations(citations) => !citations.is_empty(),
			Self::Empty | Self::Insufficient { .. } | Self::Failed(_) => false,
		}
	}
}

/// State of one analysis panel.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSlot {
	content: AnalysisContent,
	loading: bool,
	auto_attempted: bool,
}

impl AnalysisSlot {
	pub fn content(&self) -> &AnalysisContent {
		&self.content
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub fn is_populated(&self) -> bool {
		self.content.is_populated()
	}

	pub fn auto_attempted(&self) -> bool {
		self.auto_attempted
	}

	/// Marks a request as in flight.
	pub(crate) fn begin(&mut self, automatic: bool) {
		self.loading = true;
		self.auto_attempted |= automatic;
	}

	/// Stores a finished result.
	pub(crate) fn finish(&mut self, content: AnalysisContent) {
		self.loading = false;
		self.content = content;
	}

	/// Ends a failed request, leaving the previous content in place.
	pub(crate) fn abort(&mut self) {
		self.loading = false;
	}

	pub(crate) fn set_content(&mut self, content: AnalysisContent) {
		self.content = content;
	}

	pub(crate) fn reset(&mut self) {
		*self = Self::default();
	}
}

/// The three analysis panels of a document.
#[derive(Debug, Clone, Default)]
pub struct AnalysisPanels {
	ratio: AnalysisSlot,
	semantic: AnalysisSlot,
	deep: AnalysisSlot,
}

impl AnalysisPanels {
	pub fn get(&self, kind: AnalysisKind) -> &AnalysisSlot {
		match kind {
			AnalysisKind::Ratio => &self.ratio,
			AnalysisKind::Semantic => &self.semantic,
			AnalysisKind::Deep => &self.deep,
		}
	}

	pub(crate) fn get_mut(&mut self, kind: AnalysisKind) -> &mut AnalysisSlot {
		match kind {
			AnalysisKind::Ratio => &mut self.ratio,
			AnalysisKind::Semantic => &mut self.semantic,
			AnalysisKind::Deep => &mut self.deep,
		}
	}

	/// Clears every panel, including the automatic-fetch latches.
	pub(crate) fn reset(&mut self) {
		self.ratio.reset();
		self.semantic.reset();
		self.deep.reset();
	}
}
