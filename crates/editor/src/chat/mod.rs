//! Document chat log.
//!
//! The chat panel talks about the current document. In construction mode
//! the backend is asked to answer with a full rewrite wrapped in
//! `DOC_UPDATE` markers, which the editor commits through history.
//! Files can be attached to the next turn; they stay pending until a
//! request carrying them succeeds.


use crate::backend::FileUpload;

/// How the backend should treat chat turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatMode {
	/// Questions and advice; the document is not touched.
	#[default]
	Consultation,
	/// Drafting requests answered with a document update.
	Construction,
}

/// What a chat turn asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatIntent {
	/// An ordinary conversational turn.
	#[default]
	Chat,
	/// A critical review of the document (contradictions, weak points).
	Analysis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
	User,
	Model,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
	pub role: ChatRole,
	pub text: String,
}

impl ChatMessage {
	pub fn user(text: impl Into<String>) -> Self {
		Self {
			role: ChatRole::User,
			text: text.into(),
		}
	}

	pub fn model(text: impl Into<String>) -> Self {
		Self {
			role: ChatRole::Model,
			text: text.into(),
		}
	}

	/// The transcript entry for a user turn; attachments are listed by name.
	pub(crate) fn user_with_attachments(message: &str, attachments: &[FileUpload]) -> Self {
		if attachments.is_empty() {
			return Self::user(message);
		}
		let names = attachments.iter().map(|f| f.name.as_str()).collect::<Vec<_>>().join(", ");
		if message.is_empty() {
			Self::user(format!("[Attachments: {names}]"))
		} else {
			Self::user(format!("{message}\n\n[Attachments: {names}]"))
		}
	}
}

/// Chat transcript, pending attachments and the single-flight flag.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
	messages: Vec<ChatMessage>,
	mode: ChatMode,
	attachments: Vec<FileUpload>,
	/// Leading attachments carried by the turn in flight.
	sent: usize,
	busy: bool,
}

impl ChatLog {
	pub fn messages(&self) -> &[ChatMessage] {
		&self.messages
	}

	pub fn mode(&self) -> ChatMode {
		self.mode
	}

	pub fn set_mode(&mut self, mode: ChatMode) {
		self.mode = mode;
	}

	/// Files queued for the next turn.
	pub fn attachments(&self) -> &[FileUpload] {
		&self.attachments
	}

	pub(crate) fn attach(&mut self, file: FileUpload) {
		self.attachments.push(file);
	}

	/// Removes a pending attachment. Files already sent with the turn in
	/// flight cannot be removed.
	pub(crate) fn detach(&mut self, index: usize) -> Option<FileUpload> {
		(index >= self.sent && index < self.attachments.len()).then(|| self.attachments.remove(index))
	}

	pub fn is_busy(&self) -> bool {
		self.busy
	}

	/// Marks a turn as in flight, carrying every pending attachment.
	pub(crate) fn begin_turn(&mut self) {
		self.busy = true;
		self.sent = self.attachments.len();
	}

	/// Ends the turn in flight. A delivered turn drops the attachments it
	/// carried; a failed one leaves them queued for a retry.
	pub(crate) fn end_turn(&mut self, delivered: bool) {
		if delivered {
			self.attachments.drain(..self.sent);
		}
		self.sent = 0;
		self.busy = false;
	}

	pub(crate) fn push(&mut self, message: ChatMessage) {
		self.messages.push(message);
	}

	pub fn clear(&mut self) {
		self.messages.clear();
	}
}
