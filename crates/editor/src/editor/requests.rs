use crate::analysis::{AnalysisContent, AnalysisKind, DeepAnalysisMode};
use crate::backend::{AnalysisRequest, ChatRequest, FileUpload, RewriteRequest};
use crate::chat::{ChatIntent, ChatMessage};
use crate::gate::{self, GateDecision, GateInput, SkipReason, Trigger};
use crate::magic_edit::{IgnoreReason, MagicEditOutcome};
use crate::tasks::{TaskId, TaskKind, TaskOutcome};

use super::DraftEditor;

const DEFAULT_ANALYSIS_REQUEST: &str = "Analyse contradictions and weak points.";

impl DraftEditor {
	/// Asks the backend to rewrite the current selection.
	///
	/// `instruction` overrides the stored instruction when it is not blank.
	/// Ignored without a selection, without an instruction, or while
	/// another rewrite is in flight; none of these touch any state.
	pub fn execute_magic_edit(&mut self, instruction: Option<&str>) -> MagicEditOutcome {
		let Some(selection) = self
			.selection
			.clone()
			.filter(|s| s.matches(self.document.content().slice(..)))
		else {
			return MagicEditOutcome::Ignored(IgnoreReason::NoSelection);
		};
		let Some(instruction) = self.magic.resolve(instruction) else {
			return MagicEditOutcome::Ignored(IgnoreReason::EmptyInstruction);
		};
		if self.magic.busy {
			tracing::debug!(doc_id = ?self.document.id, "magic_edit.busy");
			return MagicEditOutcome::Ignored(IgnoreReason::Busy);
		}

		let request = RewriteRequest {
			full_text: self.document.text(),
			selected_text: selection.text().to_string(),
			instruction,
		};
		let stamp = self.stamp();
		let backend = self.backend.clone();
		self.magic.busy = true;

		let kind = TaskKind::MagicEdit(selection.clone());
		let id = self.tasks.spawn(stamp, kind, async move {
			let result = backend.rewrite_selection(request).await;
			TaskOutcome::MagicEdit { selection, result }
		});
		MagicEditOutcome::Started(id)
	}

	/// Explicitly (re)runs an analysis, bypassing the once-per-document rule.
	///
	/// The deep analysis reruns its last mode and is skipped with
	/// [`SkipReason::EmptyInstruction`] if none has run on this document.
	pub fn rerun_analysis(&mut self, kind: AnalysisKind) -> GateDecision {
		match kind {
			AnalysisKind::Deep => match self.deep_mode.clone() {
				Some(mode) => self.run_deep_analysis(mode),
				None => GateDecision::Skip(SkipReason::EmptyInstruction),
			},
			AnalysisKind::Ratio | AnalysisKind::Semantic => self.run_manual(kind, None),
		}
	}

	/// Runs a deep analysis in `mode`. Never triggered automatically.
	pub fn run_deep_analysis(&mut self, mode: DeepAnalysisMode) -> GateDecision {
		if let DeepAnalysisMode::Custom(instruction) = &mode
			&& instruction.trim().is_empty()
		{
			return GateDecision::Skip(SkipReason::EmptyInstruction);
		}
		self.deep_mode = Some(mode.clone());
		self.run_manual(AnalysisKind::Deep, Some(mode))
	}

	/// Sends a chat turn about the current document.
	///
	/// Pending attachments travel with the turn, and a turn may consist of
	/// attachments alone. Ignored (returns `None`) when there is neither text
	/// nor an attachment, for an empty document, or while a chat reply is
	/// pending.
	pub fn send_chat(&mut self, message: &str) -> Option<TaskId> {
		self.start_chat(message.trim(), ChatIntent::Chat)
	}

	/// Asks the chat for a critical review of the document.
	///
	/// `focus` replaces the default request when it is not blank.
	pub fn send_chat_analysis(&mut self, focus: Option<&str>) -> Option<TaskId> {
		let message = focus
			.map(str::trim)
			.filter(|m| !m.is_empty())
			.unwrap_or(DEFAULT_ANALYSIS_REQUEST);
		self.start_chat(message, ChatIntent::Analysis)
	}

	fn start_chat(&mut self, message: &str, intent: ChatIntent) -> Option<TaskId> {
		let attachments = self.chat.attachments().to_vec();
		if (message.is_empty() && attachments.is_empty())
			|| self.document.trimmed_len() == 0
			|| self.chat.is_busy()
		{
			return None;
		}

		let entry = ChatMessage::user_with_attachments(message, &attachments);
		let request = ChatRequest {
			document: self.document.text(),
			history: self.chat.messages().to_vec(),
			message: message.to_string(),
			mode: self.chat.mode(),
			intent,
			attachments,
		};
		self.chat.push(entry);
		self.chat.begin_turn();
		tracing::debug!(?intent, attachments = request.attachments.len(), "chat.send");

		let stamp = self.stamp();
		let backend = self.backend.clone();
		Some(self.tasks.spawn(stamp, TaskKind::Chat, async move {
			let result = backend.chat(request).await;
			TaskOutcome::Chat { result }
		}))
	}

	/// Digitizes an uploaded file; the result is loaded as a new document.
	pub fn open_file(&mut self, file: FileUpload) -> TaskId {
		tracing::debug!(name = %file.name, mime = %file.mime, bytes = file.bytes.len(), "editor.open_file");
		let stamp = self.stamp();
		let backend = self.backend.clone();
		self.tasks.spawn(stamp, TaskKind::Digitize, async move {
			let result = backend.digitize_file(file).await;
			TaskOutcome::Digitize { result }
		})
	}

	fn run_manual(&mut self, kind: AnalysisKind, mode: Option<DeepAnalysisMode>) -> GateDecision {
		let decision = gate::evaluate(
			kind,
			Trigger::Manual,
			GateInput {
				active_tab: self.view.tab(),
				slot: self.analyses.get(kind),
				trimmed_len: self.document.trimmed_len(),
				min_chars: self.config.min_chars_for_smart_analysis,
			},
		);
		tracing::trace!(?kind, ?decision, "gate.manual");

		match decision {
			GateDecision::Fire => {
				if kind == AnalysisKind::Deep {
					self.analyses.get_mut(kind).set_content(AnalysisContent::Empty);
				}
				self.spawn_analysis(kind, mode, false);
			}
			GateDecision::Skip(SkipReason::BelowThreshold { required, .. }) => {
				self.analyses
					.get_mut(kind)
					.set_content(AnalysisContent::Insufficient { required });
			}
			GateDecision::Skip(_) => {}
		}
		decision
	}

	pub(super) fn spawn_analysis(
		&mut self,
		kind: AnalysisKind,
		mode: Option<DeepAnalysisMode>,
		automatic: bool,
	) -> TaskId {
		let text = self.document.text();
		let request = match (kind, mode) {
			(AnalysisKind::Ratio, _) => AnalysisRequest::Ratio {
				text,
				source: self.source,
			},
			(AnalysisKind::Semantic, _) => AnalysisRequest::Semantic { text },
			(AnalysisKind::Deep, mode) => AnalysisRequest::Deep {
				text,
				mode: mode.unwrap_or(DeepAnalysisMode::Inconsistencies),
			},
		};

		self.analyses.get_mut(kind).begin(automatic);
		let stamp = self.stamp();
		let backend = self.backend.clone();
		self.tasks.spawn(stamp, TaskKind::Analysis(kind), async move {
			let result = backend.auxiliary_analysis(request).await;
			TaskOutcome::Analysis { kind, result }
		})
	}
}
