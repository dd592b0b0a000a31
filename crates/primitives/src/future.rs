use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

/// Polls a future once without registering for wakeups.
///
/// Only use this if you know the future is ready or
/// if you are intentionally performing a non-blocking check.
pub fn poll_once<F: Future + Unpin>(mut fut: F) -> Option<F::Output> {
	let mut cx = Context::from_waker(Waker::noop());
	match Pin::new(&mut fut).poll(&mut cx) {
		Poll::Ready(res) => Some(res),
		Poll::Pending => None,
	}
}
