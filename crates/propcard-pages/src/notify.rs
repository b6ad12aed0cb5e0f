//! Modal notices shown to the user.
//!
//! Components never talk to `window.alert` directly. They receive a
//! [`Notifier`] (usually captured inside a callback) and call
//! [`Notifier::notify`].

use std::sync::{Arc, Mutex, PoisonError};

use crate::info_log;
#[cfg(not(target_arch = "wasm32"))]
use crate::warn_log;

/// A sink for user-facing notices.
pub trait Notifier: Send + Sync {
	/// Shows `message` to the user.
	fn notify(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
	fn notify(&self, message: &str) {
		(**self).notify(message)
	}
}

/// Blocking browser alert.
///
/// Outside the browser there is no modal to show, so the message is
/// logged as a warning instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
	#[cfg(target_arch = "wasm32")]
	fn notify(&self, message: &str) {
		match web_sys::window() {
			Some(window) => {
				if window.alert_with_message(message).is_err() {
					crate::error_log!("window.alert failed for: {}", message);
				}
			}
			None => crate::error_log!("no window to alert: {}", message),
		}
	}

	#[cfg(not(target_arch = "wasm32"))]
	fn notify(&self, message: &str) {
		warn_log!("alert (no browser): {}", message);
	}
}

/// Writes every notice to the log at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
	fn notify(&self, message: &str) {
		info_log!("notice: {}", message);
	}
}

/// Keeps every notice in memory, in order.
///
/// Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
	messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a snapshot of the notices shown so far.
	pub fn messages(&self) -> Vec<String> {
		self.messages
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	/// Number of notices shown so far.
	pub fn len(&self) -> usize {
		self.messages
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Notifier for RecordingNotifier {
	fn notify(&self, message: &str) {
		self.messages
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.push(message.to_string());
	}
}
