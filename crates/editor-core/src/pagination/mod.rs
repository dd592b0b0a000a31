//! Read-mode pagination.
//!
//! Splits document text into bounded pages on line boundaries. Only `\n`
//! ends a line, so bare `\r` and Unicode separators stay inside their
//! paragraph. A line is never split: one longer than the page budget gets a
//! page to itself and overflows it. Pages keep their line terminators, so
//! joining every page reproduces the input exactly.


use lexdraft_primitives::{CharLen, Rope, RopeSlice, lf_lines, line_body_len};

/// Default page budget in chars.
pub const DEFAULT_PAGE_SIZE: CharLen = 3000;

/// One page of read-mode text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
	/// Zero-based position of the page.
	pub index: usize,
	/// Page text, line terminators included.
	pub text: String,
}

/// Splits `text` into pages of at most `page_size` chars.
///
/// Lines accumulate into the current page until the next line's body
/// (its terminator excluded) would push the page past `page_size`; the page
/// is then closed and the line starts a new one. Empty text yields no pages.
pub fn paginate(text: RopeSlice, page_size: CharLen) -> Vec<Page> {
	let mut pages = Vec::new();
	let mut buf = String::new();
	let mut buf_chars: CharLen = 0;

	for line in lf_lines(text) {
		if !buf.is_empty() && buf_chars + line_body_len(line) > page_size {
			pages.push(Page {
				index: pages.len(),
				text: std::mem::take(&mut buf),
			});
			buf_chars = 0;
		}
		buf.extend(line.chunks());
		buf_chars += line.len_chars();
	}

	if !buf.is_empty() {
		pages.push(Page {
			index: pages.len(),
			text: buf,
		});
	}

	pages
}

/// Convenience wrapper over [`paginate`] for plain strings.
pub fn paginate_str(text: &str, page_size: CharLen) -> Vec<Page> {
	paginate(Rope::from_str(text).slice(..), page_size)
}

/// Concatenates page texts back into the document text.
pub fn join_pages(pages: &[Page]) -> String {
	pages.iter().map(|p| p.text.as_str()).collect()
}
