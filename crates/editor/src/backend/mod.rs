//! Remote drafting collaborator.
//!
//! [`DraftingBackend`] is the only seam between the editor and the
//! generative-AI service. Requests carry owned data so calls can run on
//! spawned tasks. Responses are typed at this boundary: structured results
//! are parsed here and loose JSON never reaches editor state.


use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::{AnalysisContent, AnalysisKind, DeepAnalysisMode};
use crate::chat::{ChatIntent, ChatMessage, ChatMode};

/// Marks the start of a document rewrite embedded in a chat reply.
pub const DOC_UPDATE_START: &str = ":::DOC_UPDATE_START:::";
/// Marks the end of a document rewrite embedded in a chat reply.
pub const DOC_UPDATE_END: &str = ":::DOC_UPDATE_END:::";

/// Errors surfaced by a [`DraftingBackend`].
#[derive(Debug, Error)]
pub enum BackendError {
	/// Transport or service failure.
	#[error("request failed: {0}")]
	Request(String),

	/// No API credentials are configured.
	#[error("backend credentials are not configured")]
	MissingCredentials,

	/// The service answered with something that does not parse.
	#[error("malformed response: {0}")]
	InvalidResponse(#[from] serde_json::Error),

	/// The backend cannot serve this kind of request.
	#[error("unsupported request: {0}")]
	Unsupported(String),
}

/// Token accounting reported by the service for one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
	#[serde(rename = "promptTokenCount")]
	pub prompt: u64,
	#[serde(rename = "candidatesTokenCount")]
	pub candidates: u64,
	#[serde(rename = "totalTokenCount")]
	pub total: u64,
	#[serde(default)]
	pub model: Option<String>,
}

/// Running token totals across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UsageTotals {
	pub prompt: u64,
	pub candidates: u64,
	pub total: u64,
	/// Number of calls that reported usage.
	pub calls: u64,
}

impl UsageTotals {
	pub fn record(&mut self, usage: &TokenUsage) {
		self.prompt += usage.prompt;
		self.candidates += usage.candidates;
		self.total += usage.total;
		self.calls += 1;
	}
}

/// A backend result with optional token accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated<T> {
	pub value: T,
	pub usage: Option<TokenUsage>,
}

impl<T> Generated<T> {
	pub fn new(value: T) -> Self {
		Self { value, usage: None }
	}

	pub fn with_usage(mut self, usage: TokenUsage) -> Self {
		self.usage = Some(usage);
		self
	}
}

/// One legislative citation found by semantic analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
	pub law: String,
	pub article: String,
	/// Fragment of the document where the provision applies.
	#[serde(default)]
	pub quote: Option<String>,
	/// Why the provision applies to the document.
	#[serde(default)]
	pub relevance: String,
}

#[derive(Deserialize)]
struct CitationEnvelope {
	#[serde(default)]
	citations: Vec<Citation>,
}

/// Parses a semantic-analysis JSON payload (`{"citations": [...]}`).
///
/// A missing `citations` key yields an empty list; anything that is not an
/// object of that shape is [`BackendError::InvalidResponse`].
pub fn parse_citations(raw: &str) -> Result<Vec<Citation>, BackendError> {
	let envelope: CitationEnvelope = serde_json::from_str(raw)?;
	Ok(envelope.citations)
}

/// Who wrote the document text; ratio extraction treats the two differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentSource {
	/// Written or uploaded by the user.
	User,
	/// Produced by the generation flow.
	#[default]
	Generated,
}

/// A document produced by a generation flow or by digitizing an upload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedDocument {
	pub text: String,
	pub title: String,
	/// Ratio decidendi produced alongside the text, if any.
	pub ratio: Option<String>,
	pub source: DocumentSource,
}

impl LoadedDocument {
	pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			title: title.into(),
			ratio: None,
			source: DocumentSource::default(),
		}
	}
}

/// A user-supplied file to digitize into plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
	pub name: String,
	pub mime: String,
	pub bytes: Vec<u8>,
}

/// Scoped rewrite of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
	pub full_text: String,
	pub selected_text: String,
	pub instruction: String,
}

/// Request for one auxiliary analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
	Ratio { text: String, source: DocumentSource },
	Semantic { text: String },
	Deep { text: String, mode: DeepAnalysisMode },
}

impl AnalysisRequest {
	pub fn kind(&self) -> AnalysisKind {
		match self {
			Self::Ratio { .. } => AnalysisKind::Ratio,
			Self::Semantic { .. } => AnalysisKind::Semantic,
			Self::Deep { .. } => AnalysisKind::Deep,
		}
	}

	pub fn text(&self) -> &str {
		match self {
			Self::Ratio { text, .. } | Self::Semantic { text } | Self::Deep { text, .. } => text,
		}
	}
}

/// A chat turn about the current document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
	pub document: String,
	pub history: Vec<ChatMessage>,
	/// Typed text; empty when the turn only carries attachments.
	pub message: String,
	pub mode: ChatMode,
	pub intent: ChatIntent,
	pub attachments: Vec<FileUpload>,
}

/// A chat reply split into its conversational part and an optional rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
	pub message: String,
	/// Full replacement text for the document.
	pub document_update: Option<String>,
}

impl ChatReply {
	/// Reply text used when the model only sent a document update.
	pub const UPDATED_PLACEHOLDER: &'static str = "Document updated.";

	/// Extracts a `DOC_UPDATE` block from a raw reply.
	///
	/// Text around the block becomes the message. Without a complete,
	/// correctly ordered marker pair the whole reply is the message.
	pub fn parse(raw: &str) -> Self {
		let Some((before, rest)) = raw.split_once(DOC_UPDATE_START) else {
			return Self::plain(raw);
		};
		let Some((update, after)) = rest.split_once(DOC_UPDATE_END) else {
			return Self::plain(raw);
		};

		let message = format!("{before}{after}").trim().to_string();
		Self {
			message: if message.is_empty() {
				Self::UPDATED_PLACEHOLDER.to_string()
			} else {
				message
			},
			document_update: Some(update.trim().to_string()),
		}
	}

	fn plain(raw: &str) -> Self {
		Self {
			message: raw.to_string(),
			document_update: None,
		}
	}
}

/// The generative drafting service.
///
/// Implementations own prompt construction, model choice, and transport.
#[async_trait]
pub trait DraftingBackend: Send + Sync {
	/// Rewrites `selected_text` following `instruction`; returns only the replacement.
	async fn rewrite_selection(&self, request: RewriteRequest) -> Result<Generated<String>, BackendError>;

	/// Produces one auxiliary analysis of the document.
	async fn auxiliary_analysis(&self, request: AnalysisRequest) -> Result<Generated<AnalysisContent>, BackendError>;

	/// Extracts plain text (and a title) from an uploaded file.
	async fn digitize_file(&self, file: FileUpload) -> Result<Generated<LoadedDocument>, BackendError>;

	/// Answers a chat turn; the raw reply may embed a `DOC_UPDATE` block.
	async fn chat(&self, request: ChatRequest) -> Result<Generated<String>, BackendError>;
}
