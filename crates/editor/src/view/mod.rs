//! View-mode state: edit/read mode, active side tab, split flag.
//!
//! The state space is a plain product of the three fields; every
//! transition is allowed. Entering the ratio or semantic tab is what gives
//! the smart-trigger gate a chance to fire, which [`crate::DraftEditor`]
//! handles after each call here.

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisKind;

/// Whether the document pane shows the editable buffer or paginated pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
	#[default]
	Edit,
	Read,
}

impl ViewMode {
	/// Returns the other mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Edit => Self::Read,
			Self::Read => Self::Edit,
		}
	}
}

/// Side panel tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
	/// Project overview.
	Project,
	/// Document statistics.
	#[default]
	Analytics,
	/// Ratio decidendi (core legal rationale).
	Ratio,
	/// Semantic legislation citations.
	Semantic,
	/// Deep analysis with selectable modes.
	Analysis,
}

impl Tab {
	pub const ALL: [Tab; 5] = [Tab::Project, Tab::Analytics, Tab::Ratio, Tab::Semantic, Tab::Analysis];

	/// The analysis panel rendered under this tab, if any.
	pub fn analysis_kind(self) -> Option<AnalysisKind> {
		match self {
			Self::Ratio => Some(AnalysisKind::Ratio),
			Self::Semantic => Some(AnalysisKind::Semantic),
			Self::Analysis => Some(AnalysisKind::Deep),
			Self::Project | Self::Analytics => None,
		}
	}
}

/// Current view configuration of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
	mode: ViewMode,
	tab: Tab,
	split: bool,
}

impl Default for ViewState {
	fn default() -> Self {
		Self::new(Tab::default(), true)
	}
}

impl ViewState {
	pub fn new(tab: Tab, split: bool) -> Self {
		Self {
			mode: ViewMode::Edit,
			tab,
			split,
		}
	}

	pub fn mode(&self) -> ViewMode {
		self.mode
	}

	pub fn tab(&self) -> Tab {
		self.tab
	}

	/// Whether the side panel renders next to the document pane.
	pub fn split_enabled(&self) -> bool {
		self.split
	}

	pub fn is_editing(&self) -> bool {
		self.mode == ViewMode::Edit
	}

	pub fn set_mode(&mut self, mode: ViewMode) {
		self.mode = mode;
	}

	pub fn toggle_mode(&mut self) -> ViewMode {
		self.mode = self.mode.toggled();
		self.mode
	}

	/// Switches tab, returning whether the tab actually changed.
	pub fn set_tab(&mut self, tab: Tab) -> bool {
		let changed = self.tab != tab;
		self.tab = tab;
		changed
	}

	pub fn set_split(&mut self, split: bool) {
		self.split = split;
	}

	pub fn toggle_split(&mut self) -> bool {
		self.split = !self.split;
		self.split
	}

	/// Applies the transition forced by loading a new document.
	///
	/// Mode returns to editing and the tab moves to `tab`; the split flag
	/// is left alone.
	pub fn reset_for_load(&mut self, tab: Tab) {
		self.mode = ViewMode::Edit;
		self.tab = tab;
	}
}
