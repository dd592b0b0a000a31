//! Background backend calls.
//!
//! Every call runs on its own tokio task and is stamped with the
//! [`DocStamp`] of the document it was issued against. The collector never
//! applies anything itself; the editor drains finished tasks and decides
//! per outcome whether the stamp is still current.

use std::future::Future;
use std::time::{Duration, Instant};

use lexdraft_editor_core::DocumentId;
use lexdraft_primitives::{Selection, poll_once};
use rustc_hash::FxHashMap;
use tokio::task::{JoinError, JoinHandle};

use crate::analysis::{AnalysisContent, AnalysisKind};
use crate::backend::{BackendError, Generated, LoadedDocument};

/// Unique identifier for a background task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub(crate) u64);

/// Document identity and version at the time a request was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocStamp {
	pub doc_id: DocumentId,
	pub version: u64,
}

/// What a finished task produced.
#[derive(Debug)]
pub(crate) enum TaskOutcome {
	MagicEdit {
		selection: Selection,
		result: Result<Generated<String>, BackendError>,
	},
	Analysis {
		kind: AnalysisKind,
		result: Result<Generated<AnalysisContent>, BackendError>,
	},
	Digitize {
		result: Result<Generated<LoadedDocument>, BackendError>,
	},
	Chat {
		result: Result<Generated<String>, BackendError>,
	},
}

/// What a task was issued for.
///
/// Kept next to the join handle so a task that dies without producing an
/// outcome (a panicking backend) still reports a failure for its slot.
#[derive(Debug, Clone)]
pub(crate) enum TaskKind {
	MagicEdit(Selection),
	Analysis(AnalysisKind),
	Digitize,
	Chat,
}

impl TaskKind {
	fn label(&self) -> &'static str {
		match self {
			Self::MagicEdit(_) => "magic_edit",
			Self::Analysis(_) => "analysis",
			Self::Digitize => "digitize",
			Self::Chat => "chat",
		}
	}

	/// The outcome reported when the task ended without one.
	fn failed(self, error: BackendError) -> TaskOutcome {
		match self {
			Self::MagicEdit(selection) => TaskOutcome::MagicEdit {
				selection,
				result: Err(error),
			},
			Self::Analysis(kind) => TaskOutcome::Analysis {
				kind,
				result: Err(error),
			},
			Self::Digitize => TaskOutcome::Digitize { result: Err(error) },
			Self::Chat => TaskOutcome::Chat { result: Err(error) },
		}
	}
}

/// Output of a completed background task.
#[derive(Debug)]
pub(crate) struct TaskDone {
	pub(crate) id: TaskId,
	pub(crate) stamp: DocStamp,
	pub(crate) outcome: TaskOutcome,
	pub(crate) elapsed: Duration,
}

#[derive(Debug)]
struct PendingTask {
	kind: TaskKind,
	stamp: DocStamp,
	started: Instant,
	handle: JoinHandle<TaskOutcome>,
}

impl PendingTask {
	fn finish(self, id: u64, joined: Result<TaskOutcome, JoinError>) -> TaskDone {
		let label = self.kind.label();
		let outcome = match joined {
			Ok(outcome) => outcome,
			Err(e) => {
				tracing::error!(task = id, kind = label, error = %e, "Backend task join error");
				self.kind
					.failed(BackendError::Request(format!("backend task ended abnormally: {e}")))
			}
		};
		let elapsed = self.started.elapsed();
		tracing::debug!(
			task = id,
			kind = label,
			doc_id = ?self.stamp.doc_id,
			elapsed_ms = elapsed.as_millis() as u64,
			"task.done"
		);
		TaskDone {
			id: TaskId(id),
			stamp: self.stamp,
			outcome,
			elapsed,
		}
	}
}

/// Owner of in-flight backend tasks.
#[derive(Debug, Default)]
pub(crate) struct TaskCollector {
	next_id: u64,
	tasks: FxHashMap<u64, PendingTask>,
}

impl TaskCollector {
	/// Spawns `work` on the current tokio runtime.
	///
	/// Must be called from within a runtime context.
	pub(crate) fn spawn<F>(&mut self, stamp: DocStamp, kind: TaskKind, work: F) -> TaskId
	where
		F: Future<Output = TaskOutcome> + Send + 'static,
	{
		let id = self.next_id;
		self.next_id = self.next_id.wrapping_add(1);

		tracing::debug!(task = id, kind = kind.label(), doc_id = ?stamp.doc_id, version = stamp.version, "task.spawn");
		self.tasks.insert(
			id,
			PendingTask {
				kind,
				stamp,
				started: Instant::now(),
				handle: tokio::spawn(work),
			},
		);
		TaskId(id)
	}

	pub(crate) fn pending_count(&self) -> usize {
		self.tasks.len()
	}

	pub(crate) fn is_idle(&self) -> bool {
		self.tasks.is_empty()
	}

	/// Collects every task that has already finished, in spawn order.
	pub(crate) fn drain_finished(&mut self) -> Vec<TaskDone> {
		let mut finished: Vec<u64> = self
			.tasks
			.iter()
			.filter(|(_, task)| task.handle.is_finished())
			.map(|(id, _)| *id)
			.collect();
		finished.sort_unstable();

		let mut done = Vec::with_capacity(finished.len());
		for id in finished {
			let Some(mut task) = self.tasks.remove(&id) else {
				continue;
			};
			match poll_once(&mut task.handle) {
				Some(joined) => done.push(task.finish(id, joined)),
				None => {
					self.tasks.insert(id, task);
				}
			}
		}
		done
	}

	/// Waits for every in-flight task, in spawn order.
	pub(crate) async fn join_all(&mut self) -> Vec<TaskDone> {
		let mut ids: Vec<u64> = self.tasks.keys().copied().collect();
		ids.sort_unstable();

		let mut done = Vec::with_capacity(ids.len());
		for id in ids {
			let Some(mut task) = self.tasks.remove(&id) else {
				continue;
			};
			let joined = (&mut task.handle).await;
			done.push(task.finish(id, joined));
		}
		done
	}
}
