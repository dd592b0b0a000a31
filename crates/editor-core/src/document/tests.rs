use super::*;

#[test]
fn new_document_seeds_history() {
	let doc = Document::new("Demanda", "texto inicial");
	assert_eq!(doc.title(), "Demanda");
	assert_eq!(doc.text(), "texto inicial");
	assert_eq!(doc.history().len(), 1);
	assert_eq!(doc.history().cursor(), Some(0));
	assert!(!doc.can_undo());
}

#[test]
fn ids_are_unique() {
	assert_ne!(Document::scratch().id, Document::scratch().id);
}

#[test]
fn input_updates_buffer_without_snapshot() {
	let mut doc = Document::new("", "a");
	doc.input("ab");
	doc.input("abc");
	assert_eq!(doc.text(), "abc");
	assert_eq!(doc.history().len(), 1);
	assert_eq!(doc.version(), 2);
}

#[test]
fn commit_current_records_typed_text_once() {
	let mut doc = Document::new("", "a");
	doc.input("abc");
	assert!(doc.commit_current());
	assert!(!doc.commit_current());
	assert_eq!(doc.history().len(), 2);

	assert!(doc.undo());
	assert_eq!(doc.text(), "a");
}

#[test]
fn undo_at_start_leaves_text_unchanged() {
	let mut doc = Document::new("", "a");
	let version = doc.version();
	assert!(!doc.undo());
	assert_eq!(doc.text(), "a");
	assert_eq!(doc.version(), version);
}

#[test]
fn redo_at_end_leaves_text_unchanged() {
	let mut doc = Document::new("", "a");
	doc.commit("b");
	assert!(!doc.redo());
	assert_eq!(doc.text(), "b");
}

#[test]
fn undo_redo_restore_snapshots_and_bump_version() {
	let mut doc = Document::new("", "a");
	doc.commit("b");
	let v = doc.version();
	assert!(doc.undo());
	assert_eq!(doc.text(), "a");
	assert!(doc.version() > v);
	assert!(doc.redo());
	assert_eq!(doc.text(), "b");
}

#[test]
fn commit_after_undo_discards_future() {
	let mut doc = Document::new("", "a");
	doc.commit("b");
	doc.undo();
	doc.commit("c");
	assert!(!doc.can_redo());
	assert!(doc.undo());
	assert_eq!(doc.text(), "a");
	assert!(doc.redo());
	assert_eq!(doc.text(), "c");
}

#[test]
fn replace_range_splices_selection() {
	let mut doc = Document::new("", "ABCDE");
	let cursor = doc.replace_range(Range::new(1, 3), "XY").unwrap();
	assert_eq!(doc.text(), "AXYDE");
	assert_eq!(cursor, Range::point(3));
	assert_eq!(doc.history().len(), 2);
}

#[test]
fn replace_range_handles_backward_ranges_and_multibyte_text() {
	let mut doc = Document::new("", "el señor juez");
	doc.replace_range(Range::new(8, 3), "C.").unwrap();
	assert_eq!(doc.text(), "el C. juez");
}

#[test]
fn replace_range_rejects_out_of_bounds() {
	let mut doc = Document::new("", "abc");
	let err = doc.replace_range(Range::new(2, 9), "x").unwrap_err();
	assert_eq!(err, EditError::OutOfBounds { start: 2, end: 9, len: 3 });
	assert_eq!(doc.text(), "abc");
	assert_eq!(doc.history().len(), 1);
}

#[test]
fn collapsed_replace_inserts_at_cursor() {
	let mut doc = Document::new("", "abc");
	let cursor = doc.replace_range(Range::point(3), "def").unwrap();
	assert_eq!(doc.text(), "abcdef");
	assert_eq!(cursor, Range::point(6));
}

#[test]
fn wrap_range_surrounds_and_shifts_selection() {
	let mut doc = Document::new("", "hola mundo");
	let sel = doc.wrap_range(Range::new(5, 10), "**", "**").unwrap();
	assert_eq!(doc.text(), "hola **mundo**");
	assert_eq!(sel, Range::new(7, 12));
}

#[test]
fn wrap_collapsed_range_inserts_prefix() {
	let mut doc = Document::new("", "abc");
	let sel = doc.wrap_range(Range::point(0), "\n# ", "").unwrap();
	assert_eq!(doc.text(), "\n# abc");
	assert_eq!(sel, Range::point(3));
}

#[test]
fn trimmed_len_ignores_surrounding_whitespace() {
	let doc = Document::new("", "  \n abc \n");
	assert_eq!(doc.trimmed_len(), 3);
}

#[test]
fn history_limit_is_respected() {
	let mut doc = Document::with_history_limit("", "0", 2);
	doc.commit("1");
	doc.commit("2");
	assert_eq!(doc.history().len(), 2);
	assert!(doc.undo());
	assert_eq!(doc.text(), "1");
	assert!(!doc.undo());
}
