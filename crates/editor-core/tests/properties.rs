use lexdraft_editor_core::{Document, SnapshotHistory, join_pages, paginate_str};
use lexdraft_primitives::{Range, Rope};
use proptest::prelude::*;

fn document_text() -> impl Strategy<Value = String> {
	prop::collection::vec(prop_oneof!["[a-zñ \r\u{2028}]{0,40}", Just(String::new()), "[A-Z]{50,90}"], 0..30)
		.prop_map(|lines| lines.join("\n"))
}

proptest! {
	#[test]
	fn pages_reconstruct_content(text in document_text(), size in 1usize..120) {
		let pages = paginate_str(&text, size);
		prop_assert_eq!(join_pages(&pages), text);
	}

	#[test]
	fn pages_are_indexed_in_order(text in document_text(), size in 1usize..120) {
		let pages = paginate_str(&text, size);
		for (i, page) in pages.iter().enumerate() {
			prop_assert_eq!(page.index, i);
			prop_assert!(!page.text.is_empty());
		}
	}

	#[test]
	fn repagination_is_idempotent(text in "[a-z \n]{0,400}", size in 40usize..120) {
		let pages = paginate_str(&text, size);
		prop_assert_eq!(paginate_str(&join_pages(&pages), size), pages);
	}

	#[test]
	fn pages_respect_budget_unless_single_line(text in "[a-z \n]{0,400}", size in 1usize..60) {
		for page in paginate_str(&text, size) {
			let lines = page.text.split_inclusive('\n').count();
			let body = page.text.strip_suffix('\n').unwrap_or(&page.text).chars().count();
			prop_assert!(lines == 1 || body <= size + 1, "page {:?} over budget {}", page.text, size);
		}
	}

	#[test]
	fn history_cursor_stays_in_bounds(ops in prop::collection::vec(0u8..3, 0..60), limit in 1usize..8) {
		let mut history = SnapshotHistory::new(limit);
		history.push(Rope::from("seed"));
		for (i, op) in ops.into_iter().enumerate() {
			match op {
				0 => { history.push(Rope::from(i.to_string().as_str())); }
				1 => { history.undo(); }
				_ => { history.redo(); }
			}
			let cursor = history.cursor().unwrap();
			prop_assert!(cursor < history.len());
			prop_assert!(history.len() <= limit);
		}
	}

	#[test]
	fn splice_matches_string_slicing(text in "[a-e]{1,30}", a in 0usize..30, b in 0usize..30, repl in "[x-z]{0,5}") {
		let len = text.chars().count();
		let (start, end) = (a.min(b).min(len), a.max(b).min(len));
		let mut doc = Document::new("", &text);
		doc.replace_range(Range::new(start, end), &repl).unwrap();
		let expected = format!("{}{}{}", &text[..start], repl, &text[end..]);
		prop_assert_eq!(doc.text(), expected);
	}
}
