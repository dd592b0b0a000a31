use super::*;

fn citation() -> Citation {
	Citation {
		law: "Código Civil Federal".into(),
		article: "1910".into(),
		quote: None,
		relevance: "responsabilidad extracontractual".into(),
	}
}

#[test]
fn populated_requires_meaningful_content() {
	assert!(!AnalysisContent::Empty.is_populated());
	assert!(!AnalysisContent::Text("  \n".into()).is_populated());
	assert!(!AnalysisContent::Citations(vec![]).is_populated());
	assert!(!AnalysisContent::Insufficient { required: 300 }.is_populated());
	assert!(!AnalysisContent::Failed("x".into()).is_populated());
	assert!(AnalysisContent::Text("ratio".into()).is_populated());
	assert!(AnalysisContent::Citations(vec![citation()]).is_populated());
}

#[test]
fn automatic_begin_latches_attempt() {
	let mut slot = AnalysisSlot::default();
	slot.begin(false);
	assert!(slot.is_loading());
	assert!(!slot.auto_attempted());

	slot.abort();
	slot.begin(true);
	slot.finish(AnalysisContent::Citations(vec![]));
	assert!(!slot.is_loading());
	assert!(slot.auto_attempted());
	assert!(!slot.is_populated());
}

#[test]
fn abort_keeps_previous_content() {
	let mut slot = AnalysisSlot::default();
	slot.finish(AnalysisContent::Text("previa".into()));
	slot.begin(false);
	slot.abort();
	assert_eq!(slot.content(), &AnalysisContent::Text("previa".into()));
}

#[test]
fn reset_clears_panels_and_latches() {
	let mut panels = AnalysisPanels::default();
	panels.get_mut(AnalysisKind::Ratio).begin(true);
	panels.get_mut(AnalysisKind::Ratio).finish(AnalysisContent::Text("r".into()));
	panels.reset();
	let ratio = panels.get(AnalysisKind::Ratio);
	assert_eq!(ratio.content(), &AnalysisContent::Empty);
	assert!(!ratio.auto_attempted());
}

#[test]
fn only_ratio_and_semantic_are_automatic() {
	assert!(AnalysisKind::Ratio.is_automatic());
	assert!(AnalysisKind::Semantic.is_automatic());
	assert!(!AnalysisKind::Deep.is_automatic());
	assert_eq!(AnalysisKind::Deep.tab(), Tab::Analysis);
}
