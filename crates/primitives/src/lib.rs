//! Core value types shared by the drafting editor: char ranges, captured
//! selections, and a non-blocking poll helper.

/// Non-blocking future polling.
pub mod future;
/// Char-indexed text ranges.
pub mod range;
/// Rope helpers for char/line measurements.
pub mod rope;
/// Captured text selections.
pub mod selection;

pub use future::poll_once;
pub use range::{CharIdx, CharLen, Direction, Range};
pub use rope::{lf_lines, line_body_len, trimmed_char_len};
pub use ropey::{Rope, RopeSlice};
pub use selection::Selection;
