//! Drafting editor state and coordination.
//!
//! [`DraftEditor`] owns the single [`Document`] under edit and everything
//! derived from it. Implementation is split across focused modules:
//!
//! - [`editing`] - keystrokes, commits, splices, undo/redo, selection
//! - [`requests`] - issuing backend calls (rewrites, analyses, uploads, chat)
//! - [`apply`] - applying finished calls behind the document stamp guards
//!
//! Every method that can issue a backend call spawns a tokio task, so the
//! editor must be driven from inside a tokio runtime.

/// Application of finished backend tasks.
mod apply;
/// Text editing operations.
mod editing;
/// Backend request issuing.
mod requests;


use std::sync::Arc;

use lexdraft_editor_core::Document;
use lexdraft_primitives::Selection;

use crate::analysis::{AnalysisContent, AnalysisKind, AnalysisPanels, DeepAnalysisMode};
use crate::backend::{DocumentSource, DraftingBackend, FileUpload, LoadedDocument, UsageTotals};
use crate::chat::{ChatLog, ChatMode};
use crate::config::EditorConfig;
use crate::gate::{self, GateInput, Trigger};
use crate::magic_edit::MagicEdit;
use crate::notifications::{Notification, NotificationCenter};
use crate::read_view::{PageSlot, ReadView};
use crate::tasks::{DocStamp, TaskCollector};
use crate::view::{Tab, ViewMode, ViewState};

/// The drafting editor.
pub struct DraftEditor {
	backend: Arc<dyn DraftingBackend>,
	config: EditorConfig,

	document: Document,
	/// Who wrote the current document; forwarded to ratio extraction.
	source: DocumentSource,
	read_view: ReadView,
	view: ViewState,

	/// Captured selection; cleared on every content change.
	selection: Option<Selection>,
	magic: MagicEdit,
	analyses: AnalysisPanels,
	/// Mode of the last deep analysis, reused by manual reruns.
	deep_mode: Option<DeepAnalysisMode>,
	chat: ChatLog,

	tasks: TaskCollector,
	notifications: NotificationCenter,
	usage: UsageTotals,
}

impl std::fmt::Debug for DraftEditor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DraftEditor")
			.field("document", &self.document)
			.field("view", &self.view)
			.field("selection", &self.selection)
			.field("pending_tasks", &self.tasks.pending_count())
			.finish_non_exhaustive()
	}
}

impl DraftEditor {
	/// Creates an editor holding an empty, untitled document.
	pub fn new(backend: Arc<dyn DraftingBackend>, config: EditorConfig) -> Self {
		let document = Document::with_history_limit(String::new(), "", config.history_limit);
		let mut read_view = ReadView::new(config.page_size);
		read_view.refresh(document.content());

		Self {
			backend,
			view: ViewState::new(config.default_tab, config.split),
			config,
			document,
			source: DocumentSource::User,
			read_view,
			selection: None,
			magic: MagicEdit::default(),
			analyses: AnalysisPanels::default(),
			deep_mode: None,
			chat: ChatLog::default(),
			tasks: TaskCollector::default(),
			notifications: NotificationCenter::new(),
			usage: UsageTotals::default(),
		}
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	/// Returns the live text as an owned string.
	pub fn text(&self) -> String {
		self.document.text()
	}

	pub fn source(&self) -> DocumentSource {
		self.source
	}

	pub fn view(&self) -> &ViewState {
		&self.view
	}

	pub fn read_view(&self) -> &ReadView {
		&self.read_view
	}

	pub fn current_page(&self) -> PageSlot<'_> {
		self.read_view.current_slot()
	}

	pub fn analyses(&self) -> &AnalysisPanels {
		&self.analyses
	}

	pub fn chat(&self) -> &ChatLog {
		&self.chat
	}

	/// Token totals over every successful backend call.
	pub fn usage(&self) -> UsageTotals {
		self.usage
	}

	pub fn notifications(&self) -> &NotificationCenter {
		&self.notifications
	}

	/// Drains queued notifications for display.
	pub fn take_notifications(&mut self) -> Vec<Notification> {
		self.notifications.take_pending()
	}

	/// Number of backend calls still in flight.
	pub fn pending_tasks(&self) -> usize {
		self.tasks.pending_count()
	}

	/// Replaces the document with `loaded`.
	///
	/// Mints a new document (fresh id and history), resets every analysis
	/// panel and seeds the ratio panel from `loaded.ratio`. Also drops the
	/// selection and any pending magic edit, then returns the view to edit
	/// mode on `tab`. Calls still in flight for the previous document are
	/// discarded when they land.
	pub fn load_document(&mut self, loaded: LoadedDocument, tab: Tab) {
		let LoadedDocument {
			text,
			title,
			ratio,
			source,
		} = loaded;

		let previous = self.document.id;
		self.document = Document::with_history_limit(title, &text, self.config.history_limit);
		self.source = source;

		self.analyses.reset();
		self.deep_mode = None;
		if let Some(ratio) = ratio.filter(|r| !r.trim().is_empty()) {
			self.analyses
				.get_mut(AnalysisKind::Ratio)
				.set_content(AnalysisContent::Text(ratio));
		}

		self.selection = None;
		self.magic.reset();
		self.view.reset_for_load(tab);
		self.read_view = ReadView::new(self.config.page_size);

		tracing::debug!(
			previous = ?previous,
			doc_id = ?self.document.id,
			chars = self.document.len_chars(),
			?tab,
			"editor.load"
		);
		self.refresh();
	}

	/// Replaces the document with an empty, untitled one.
	pub fn new_document(&mut self) {
		let blank = LoadedDocument {
			source: DocumentSource::User,
			..LoadedDocument::default()
		};
		self.load_document(blank, self.config.default_tab);
	}

	pub fn set_mode(&mut self, mode: ViewMode) {
		self.view.set_mode(mode);
	}

	pub fn toggle_mode(&mut self) -> ViewMode {
		self.view.toggle_mode()
	}

	/// Switches the side tab and re-checks the automatic analyses.
	pub fn set_tab(&mut self, tab: Tab) {
		if self.view.set_tab(tab) {
			tracing::trace!(?tab, "editor.tab");
		}
		self.evaluate_triggers();
	}

	pub fn set_split(&mut self, split: bool) {
		self.view.set_split(split);
	}

	pub fn toggle_split(&mut self) -> bool {
		self.view.toggle_split()
	}

	pub fn next_page(&mut self) -> bool {
		self.read_view.next_page()
	}

	pub fn prev_page(&mut self) -> bool {
		self.read_view.prev_page()
	}

	pub fn go_to_page(&mut self, index: usize) -> bool {
		self.read_view.go_to(index)
	}

	pub fn set_chat_mode(&mut self, mode: ChatMode) {
		self.chat.set_mode(mode);
	}

	pub fn clear_chat(&mut self) {
		self.chat.clear();
	}

	/// Queues a file for the next chat turn.
	pub fn attach_chat_file(&mut self, file: FileUpload) {
		tracing::debug!(name = %file.name, bytes = file.bytes.len(), "chat.attach");
		self.chat.attach(file);
	}

	/// Drops a queued attachment; files riding on the turn in flight stay.
	pub fn remove_chat_attachment(&mut self, index: usize) -> Option<FileUpload> {
		self.chat.detach(index)
	}

	pub fn chat_attachments(&self) -> &[FileUpload] {
		self.chat.attachments()
	}

	/// Applies every backend call that has already finished.
	///
	/// Never blocks. Returns the number of tasks applied.
	pub fn poll_tasks(&mut self) -> usize {
		let done = self.tasks.drain_finished();
		let count = done.len();
		for task in done {
			self.apply(task);
		}
		count
	}

	/// Waits for every in-flight call and applies it.
	///
	/// Applying a result can issue follow-up calls (a digitized upload
	/// triggers analyses on load); those are awaited too. Returns the number
	/// of tasks applied.
	pub async fn settle(&mut self) -> usize {
		let mut count = 0;
		while !self.tasks.is_idle() {
			for task in self.tasks.join_all().await {
				self.apply(task);
				count += 1;
			}
		}
		count
	}

	fn stamp(&self) -> DocStamp {
		DocStamp {
			doc_id: self.document.id,
			version: self.document.version(),
		}
	}

	/// Runs after every content mutation.
	fn refresh(&mut self) {
		self.selection = None;
		self.read_view.refresh(self.document.content());
		self.evaluate_triggers();
	}

	/// Fires the automatic analyses whose gate currently passes.
	fn evaluate_triggers(&mut self) {
		let trimmed_len = self.document.trimmed_len();
		for kind in AnalysisKind::AUTOMATIC {
			let decision = gate::evaluate(
				kind,
				Trigger::Automatic,
				GateInput {
					active_tab: self.view.tab(),
					slot: self.analyses.get(kind),
					trimmed_len,
					min_chars: self.config.min_chars_for_smart_analysis,
				},
			);
			tracing::trace!(?kind, ?decision, trimmed_len, "gate.evaluate");
			if decision.fires() {
				self.spawn_analysis(kind, None, true);
			}
		}
	}
}
