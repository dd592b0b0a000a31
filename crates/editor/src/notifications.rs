//! Transient user-facing messages.
//!
//! Owns typed notification queueing for the host. The host decides how long
//! a notification stays on screen and how it looks.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
	Info,
	Warn,
	Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub level: Level,
	pub message: String,
}

impl Notification {
	pub fn info(message: impl Into<String>) -> Self {
		Self {
			level: Level::Info,
			message: message.into(),
		}
	}

	pub fn warn(message: impl Into<String>) -> Self {
		Self {
			level: Level::Warn,
			message: message.into(),
		}
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self {
			level: Level::Error,
			message: message.into(),
		}
	}
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
	pending: VecDeque<Notification>,
}

impl NotificationCenter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	pub fn len(&self) -> usize {
		self.pending.len()
	}

	pub fn clear(&mut self) {
		self.pending.clear();
	}

	pub fn push(&mut self, notification: Notification) {
		self.pending.push_back(notification);
	}

	pub fn take_pending(&mut self) -> Vec<Notification> {
		self.pending.drain(..).collect()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Notification> {
		self.pending.iter()
	}
}
