use super::*;

#[test]
fn default_view_edits_with_split() {
	let view = ViewState::default();
	assert_eq!(view.mode(), ViewMode::Edit);
	assert_eq!(view.tab(), Tab::Analytics);
	assert!(view.split_enabled());
}

#[test]
fn mode_toggles_between_edit_and_read() {
	let mut view = ViewState::default();
	assert_eq!(view.toggle_mode(), ViewMode::Read);
	assert!(!view.is_editing());
	assert_eq!(view.toggle_mode(), ViewMode::Edit);
}

#[test]
fn split_is_orthogonal_to_mode_and_tab() {
	let mut view = ViewState::new(Tab::Ratio, false);
	view.set_mode(ViewMode::Read);
	assert!(view.toggle_split());
	assert_eq!(view.mode(), ViewMode::Read);
	assert_eq!(view.tab(), Tab::Ratio);
}

#[test]
fn set_tab_reports_changes() {
	let mut view = ViewState::default();
	assert!(view.set_tab(Tab::Semantic));
	assert!(!view.set_tab(Tab::Semantic));
}

#[test]
fn load_forces_edit_mode_and_given_tab() {
	let mut view = ViewState::new(Tab::Semantic, false);
	view.set_mode(ViewMode::Read);
	view.reset_for_load(Tab::Project);
	assert_eq!(view.mode(), ViewMode::Edit);
	assert_eq!(view.tab(), Tab::Project);
	assert!(!view.split_enabled());
}

#[test]
fn every_transition_is_allowed() {
	let mut view = ViewState::default();
	for tab in Tab::ALL {
		for mode in [ViewMode::Edit, ViewMode::Read] {
			view.set_tab(tab);
			view.set_mode(mode);
			assert_eq!((view.tab(), view.mode()), (tab, mode));
		}
	}
}

#[test]
fn tabs_map_to_analysis_panels() {
	assert_eq!(Tab::Ratio.analysis_kind(), Some(AnalysisKind::Ratio));
	assert_eq!(Tab::Semantic.analysis_kind(), Some(AnalysisKind::Semantic));
	assert_eq!(Tab::Analysis.analysis_kind(), Some(AnalysisKind::Deep));
	assert_eq!(Tab::Project.analysis_kind(), None);
}
