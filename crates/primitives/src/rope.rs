//! Rope utilities and extensions.

use ropey::RopeSlice;

use crate::range::CharLen;

/// Returns the length of a line in chars, excluding its line terminator.
///
/// Only `\n` and `\r\n` terminators are stripped; a line without a
/// terminator (the last line of a text) is measured whole.
pub fn line_body_len(line: RopeSlice) -> CharLen {
	let len = line.len_chars();
	if len == 0 || line.char(len - 1) != '\n' {
		return len;
	}
	if len >= 2 && line.char(len - 2) == '\r' {
		len - 2
	} else {
		len - 1
	}
}

/// Iterates over the `\n`-terminated lines of `text`, terminators included.
///
/// Unlike [`RopeSlice::lines`], only `\n` ends a line: bare `\r`, form
/// feeds and Unicode line/paragraph separators stay inside the line. The
/// last line has no terminator and is skipped when empty, so the yielded
/// slices concatenate back to `text` exactly.
pub fn lf_lines(text: RopeSlice<'_>) -> impl Iterator<Item = RopeSlice<'_>> {
	let len = text.len_chars();
	let mut chars = text.chars().enumerate();
	let mut start = 0;
	std::iter::from_fn(move || {
		if start >= len {
			return None;
		}
		let end = chars.by_ref().find(|&(_, c)| c == '\n').map_or(len, |(i, _)| i + 1);
		let line = text.slice(start..end);
		start = end;
		Some(line)
	})
}

/// Returns the char count of the text with leading and trailing whitespace removed.
///
/// Walks inward from both ends instead of materializing the text, so this is
/// cheap enough to run after every keystroke.
pub fn trimmed_char_len(text: RopeSlice) -> CharLen {
	let len = text.len_chars();
	let leading = text.chars().take_while(|c| c.is_whitespace()).count();
	if leading == len {
		return 0;
	}
	let trailing = text.chars_at(len).reversed().take_while(|c| c.is_whitespace()).count();
	len - leading - trailing
}
