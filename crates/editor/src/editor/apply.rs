use lexdraft_primitives::Selection;

use crate::analysis::{AnalysisContent, AnalysisKind};
use crate::backend::{BackendError, ChatReply, Generated, LoadedDocument, TokenUsage};
use crate::chat::ChatMessage;
use crate::notifications::Notification;
use crate::tasks::{DocStamp, TaskDone, TaskOutcome};

use super::DraftEditor;

/// Transcript entry left in place of a reply that never arrived.
const CHAT_FAILURE_REPLY: &str = "Could not reach the drafting service.";

impl DraftEditor {
	pub(super) fn apply(&mut self, task: TaskDone) {
		let TaskDone {
			id,
			stamp,
			outcome,
			elapsed,
		} = task;
		tracing::trace!(task = ?id, elapsed_ms = elapsed.as_millis() as u64, "task.apply");
		match outcome {
			TaskOutcome::MagicEdit { selection, result } => self.apply_magic_edit(stamp, selection, result),
			TaskOutcome::Analysis { kind, result } => self.apply_analysis(stamp, kind, result),
			TaskOutcome::Digitize { result } => self.apply_digitize(stamp, result),
			TaskOutcome::Chat { result } => self.apply_chat(stamp, result),
		}
	}

	fn apply_magic_edit(
		&mut self,
		stamp: DocStamp,
		selection: Selection,
		result: Result<Generated<String>, BackendError>,
	) {
		if stamp.doc_id != self.document.id {
			self.record_usage(result.as_ref().ok().and_then(|g| g.usage.as_ref()));
			tracing::debug!(stamp = ?stamp, doc_id = ?self.document.id, "magic_edit.stale_document");
			return;
		}
		self.magic.busy = false;

		let replacement = match result {
			Ok(generated) => {
				self.record_usage(generated.usage.as_ref());
				generated.value
			}
			Err(e) => {
				tracing::warn!(error = %e, "magic_edit.failed");
				self.notifications
					.push(Notification::error(format!("Could not rewrite the selection: {e}")));
				return;
			}
		};

		if stamp.version != self.document.version() {
			tracing::debug!(
				stamp = stamp.version,
				version = self.document.version(),
				"magic_edit.stale_version"
			);
			self.notifications.push(Notification::warn(
				"The document changed while the rewrite was running; the rewrite was discarded.",
			));
			return;
		}

		match self.document.replace_range(selection.range(), &replacement) {
			Ok(_) => {
				self.magic.instruction.clear();
				self.refresh();
			}
			Err(e) => {
				tracing::warn!(error = %e, "magic_edit.splice_failed");
				self.notifications
					.push(Notification::error(format!("Could not apply the rewrite: {e}")));
			}
		}
	}

	fn apply_analysis(
		&mut self,
		stamp: DocStamp,
		kind: AnalysisKind,
		result: Result<Generated<AnalysisContent>, BackendError>,
	) {
		if stamp.doc_id != self.document.id {
			self.record_usage(result.as_ref().ok().and_then(|g| g.usage.as_ref()));
			tracing::debug!(?kind, stamp = ?stamp, doc_id = ?self.document.id, "analysis.stale_document");
			return;
		}

		match result {
			Ok(generated) => {
				self.record_usage(generated.usage.as_ref());
				self.analyses.get_mut(kind).finish(generated.value);
			}
			Err(e) => {
				tracing::warn!(?kind, error = %e, "analysis.failed");
				let slot = self.analyses.get_mut(kind);
				if kind == AnalysisKind::Deep {
					slot.finish(AnalysisContent::Failed(e.to_string()));
				} else {
					slot.abort();
				}
				self.notifications
					.push(Notification::error(format!("Analysis could not be completed: {e}")));
			}
		}
	}

	fn apply_digitize(&mut self, stamp: DocStamp, result: Result<Generated<LoadedDocument>, BackendError>) {
		match result {
			Ok(generated) => {
				self.record_usage(generated.usage.as_ref());
				if stamp.doc_id != self.document.id {
					tracing::debug!(stamp = ?stamp, doc_id = ?self.document.id, "digitize.stale_document");
					return;
				}
				let loaded = generated.value;
				self.notifications
					.push(Notification::info(format!("Loaded \"{}\".", loaded.title)));
				self.load_document(loaded, self.config.default_tab);
			}
			Err(e) => {
				tracing::warn!(error = %e, "digitize.failed");
				self.notifications
					.push(Notification::error(format!("Could not read the file: {e}")));
			}
		}
	}

	fn apply_chat(&mut self, stamp: DocStamp, result: Result<Generated<String>, BackendError>) {
		self.chat.end_turn(result.is_ok());

		let raw = match result {
			Ok(generated) => {
				self.record_usage(generated.usage.as_ref());
				generated.value
			}
			Err(e) => {
				tracing::warn!(error = %e, "chat.failed");
				self.chat.push(ChatMessage::model(CHAT_FAILURE_REPLY));
				self.notifications
					.push(Notification::error(format!("Chat request failed: {e}")));
				return;
			}
		};

		let reply = ChatReply::parse(&raw);
		self.chat.push(ChatMessage::model(reply.message));

		let Some(update) = reply.document_update else {
			return;
		};
		if stamp.doc_id != self.document.id || stamp.version != self.document.version() {
			tracing::debug!(stamp = ?stamp, doc_id = ?self.document.id, version = self.document.version(), "chat.stale_update");
			self.notifications.push(Notification::warn(
				"The document changed before the chat update arrived; the update was not applied.",
			));
			return;
		}
		self.document.commit(&update);
		self.refresh();
	}

	fn record_usage(&mut self, usage: Option<&TokenUsage>) {
		if let Some(usage) = usage {
			self.usage.record(usage);
		}
	}
}
