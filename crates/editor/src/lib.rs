#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Drafting editor engine.
//!
//! This crate wraps the headless [`lexdraft_editor_core::Document`] in the
//! state a drafting UI needs, independent of any UI toolkit:
//!
//! - [`DraftEditor`] - owns the document and coordinates everything below
//! - [`ViewState`] - edit/read mode, active side tab, split flag
//! - [`ReadView`] - read-mode pages and page navigation
//! - [`gate`] - pure guard deciding when an auxiliary analysis may run
//! - [`DraftingBackend`] - the remote collaborator (rewrites, analyses,
//!   digitization, chat)
//!
//! # Architecture
//!
//! ```text
//! host event ─► DraftEditor ─► Document (+ SnapshotHistory)
//!                   │              │
//!                   │              └─► ReadView::refresh (every mutation)
//!                   │
//!                   ├─► gate::evaluate ─► TaskCollector::spawn ─► DraftingBackend
//!                   │                            │
//!                   └◄── poll_tasks / settle ◄───┘  (stamped with DocStamp)
//! ```
//!
//! Backend calls run as tokio tasks. Their results are only applied when
//! the host drains them, and every result is checked against the document
//! stamp it was issued for.

pub mod analysis;
pub mod backend;
pub mod chat;
pub mod config;
pub mod editor;
pub mod gate;
pub mod magic_edit;
pub mod notifications;
pub mod read_view;
pub mod tasks;
pub mod view;

#[cfg(test)]
mod testing;

pub use analysis::{AnalysisContent, AnalysisKind, AnalysisPanels, AnalysisSlot, DeepAnalysisMode};
pub use backend::{
	AnalysisRequest, BackendError, ChatReply, ChatRequest, Citation, DocumentSource, DraftingBackend, FileUpload,
	Generated, LoadedDocument, RewriteRequest, TokenUsage, UsageTotals,
};
pub use chat::{ChatIntent, ChatLog, ChatMessage, ChatMode, ChatRole};
pub use config::{ConfigError, EditorConfig};
pub use editor::DraftEditor;
pub use gate::{GateDecision, SkipReason, Trigger};
pub use magic_edit::{IgnoreReason, MagicEditOutcome};
pub use notifications::{Level, Notification, NotificationCenter};
pub use read_view::{PageSlot, ReadView};
pub use tasks::{DocStamp, TaskId};
pub use view::{Tab, ViewMode, ViewState};
