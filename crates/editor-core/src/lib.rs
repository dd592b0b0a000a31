//! Headless drafting core.
//!
//! Owns the working text buffer ([`Document`]), its linear snapshot history
//! ([`SnapshotHistory`]), and the read-mode pagination engine. Nothing here
//! knows about view modes, analyses, or remote collaborators; that lives in
//! `lexdraft-editor`.

pub mod document;
pub mod history;
pub mod pagination;

pub use document::{Document, DocumentId, EditError};
pub use history::{DEFAULT_HISTORY_LIMIT, SnapshotHistory};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, join_pages, paginate, paginate_str};
