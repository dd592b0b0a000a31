//! Test doubles shared by the editor unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Semaphore;

use crate::analysis::{AnalysisContent, AnalysisKind};
use crate::backend::{
	AnalysisRequest, BackendError, ChatRequest, DraftingBackend, FileUpload, Generated, LoadedDocument,
	RewriteRequest, TokenUsage,
};

/// Installs a test-writer subscriber once per process.
pub(crate) fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::TRACE)
		.try_init();
}

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
	Rewrite(RewriteRequest),
	Analysis(AnalysisRequest),
	Digitize(String),
	Chat(ChatRequest),
}

#[derive(Debug, Default)]
struct Replies {
	rewrite: String,
	ratio: String,
	semantic: AnalysisContent,
	deep: String,
	digitized: LoadedDocument,
	chat: String,
	usage: Option<TokenUsage>,
	fail: bool,
	panic: bool,
}

/// Scriptable in-memory [`DraftingBackend`].
///
/// Every call is logged before it (optionally) waits on the hold gate, so
/// tests can count requests while they are still in flight.
#[derive(Debug)]
pub(crate) struct MockBackend {
	calls: Mutex<Vec<Call>>,
	replies: Mutex<Replies>,
	gate: Option<Semaphore>,
}

impl MockBackend {
	pub(crate) fn new() -> Arc<Self> {
		Arc::new(Self::build(None))
	}

	/// A backend whose calls block until [`release`](Self::release).
	pub(crate) fn held() -> Arc<Self> {
		Arc::new(Self::build(Some(Semaphore::new(0))))
	}

	fn build(gate: Option<Semaphore>) -> Self {
		Self {
			calls: Mutex::new(Vec::new()),
			replies: Mutex::new(Replies {
				rewrite: "XY".to_string(),
				ratio: "The court held that the contract was void.".to_string(),
				deep: "No inconsistencies found.".to_string(),
				chat: "Noted.".to_string(),
				..Replies::default()
			}),
			gate,
		}
	}

	/// Lets `n` held calls complete.
	pub(crate) fn release(&self, n: usize) {
		if let Some(gate) = &self.gate {
			gate.add_permits(n);
		}
	}

	pub(crate) fn set_rewrite(&self, reply: &str) {
		self.replies.lock().rewrite = reply.to_string();
	}

	pub(crate) fn set_semantic(&self, content: AnalysisContent) {
		self.replies.lock().semantic = content;
	}

	pub(crate) fn set_digitized(&self, loaded: LoadedDocument) {
		self.replies.lock().digitized = loaded;
	}

	pub(crate) fn set_chat(&self, reply: &str) {
		self.replies.lock().chat = reply.to_string();
	}

	pub(crate) fn set_usage(&self, usage: TokenUsage) {
		self.replies.lock().usage = Some(usage);
	}

	pub(crate) fn fail(&self, fail: bool) {
		self.replies.lock().fail = fail;
	}

	/// Makes every later call panic inside the backend task.
	pub(crate) fn set_panic(&self, panic: bool) {
		self.replies.lock().panic = panic;
	}

	pub(crate) fn calls(&self) -> Vec<Call> {
		self.calls.lock().clone()
	}

	pub(crate) fn analysis_calls(&self, kind: AnalysisKind) -> usize {
		self.calls
			.lock()
			.iter()
			.filter(|c| matches!(c, Call::Analysis(r) if r.kind() == kind))
			.count()
	}

	pub(crate) fn rewrite_calls(&self) -> usize {
		self.calls.lock().iter().filter(|c| matches!(c, Call::Rewrite(_))).count()
	}

	async fn respond<T>(&self, call: Call, value: impl FnOnce(&Replies) -> T) -> Result<Generated<T>, BackendError> {
		self.calls.lock().push(call);
		if let Some(gate) = &self.gate {
			gate.acquire()
				.await
				.map_err(|e| BackendError::Request(e.to_string()))?
				.forget();
		}

		let replies = self.replies.lock();
		if replies.panic {
			drop(replies);
			panic!("mock backend panicked");
		}
		if replies.fail {
			return Err(BackendError::Request("service unavailable".to_string()));
		}
		let generated = Generated::new(value(&replies));
		Ok(match replies.usage.clone() {
			Some(usage) => generated.with_usage(usage),
			None => generated,
		})
	}
}

#[async_trait]
impl DraftingBackend for MockBackend {
	async fn rewrite_selection(&self, request: RewriteRequest) -> Result<Generated<String>, BackendError> {
		self.respond(Call::Rewrite(request), |r| r.rewrite.clone()).await
	}

	async fn auxiliary_analysis(&self, request: AnalysisRequest) -> Result<Generated<AnalysisContent>, BackendError> {
		let kind = request.kind();
		self.respond(Call::Analysis(request), |r| match kind {
			AnalysisKind::Ratio => AnalysisContent::Text(r.ratio.clone()),
			AnalysisKind::Semantic => r.semantic.clone(),
			AnalysisKind::Deep => AnalysisContent::Text(r.deep.clone()),
		})
		.await
	}

	async fn digitize_file(&self, file: FileUpload) -> Result<Generated<LoadedDocument>, BackendError> {
		self.respond(Call::Digitize(file.name), |r| r.digitized.clone()).await
	}

	async fn chat(&self, request: ChatRequest) -> Result<Generated<String>, BackendError> {
		self.respond(Call::Chat(request), |r| r.chat.clone()).await
	}
}
