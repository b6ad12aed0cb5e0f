//! Logging for propcard pages.
//!
//! The `*_log!` macros take `format!`-style arguments and work on both
//! targets:
//!
//! | Macro | Native | WASM |
//! |-------|--------|------|
//! | `debug_log!` | `tracing::debug!` | `console.debug` |
//! | `info_log!` | `tracing::info!` | `console.info` |
//! | `warn_log!` | `tracing::warn!` | `console.warn` |
//! | `error_log!` | `tracing::error!` | `console.error` |
//!
//! Native output only appears once a subscriber is installed, e.g. with
//! [`init`].
//!
//! ## Example
//!
//! ```ignore
//! use propcard_pages::{info_log, warn_log};
//!
//! info_log!("mounted {}", "HomePage");
//! warn_log!("no greeting callback for {}", name);
//! ```

/// Logs a debug message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::debug!($($arg)*);
	}};
}

/// Logs a debug message.
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::info!($($arg)*);
	}};
}

/// Logs an info message.
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::warn!($($arg)*);
	}};
}

/// Logs a warning.
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs an error.
#[macro_export]
#[cfg(not(target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::tracing::error!($($arg)*);
	}};
}

/// Logs an error.
#[macro_export]
#[cfg(target_arch = "wasm32")]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Installs a global `tracing` subscriber with a compact formatter.
///
/// `RUST_LOG` wins when set. Otherwise propcard crates log at `info`, or
/// `debug` when `verbose` is true. Returns `false` if a global subscriber
/// was already installed.
///
/// The library crates never install a subscriber themselves; binaries and
/// test harnesses that embed propcard call this once at startup.
///
/// ```
/// propcard_pages::logging::init(false);
/// // A second call leaves the first subscriber in place.
/// assert!(!propcard_pages::logging::init(true));
/// ```
#[cfg(not(target_arch = "wasm32"))]
pub fn init(verbose: bool) -> bool {
	use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

	let default_directives = if verbose {
		"propcard=debug,propcard_pages=debug,warn"
	} else {
		"propcard=info,propcard_pages=info,warn"
	};
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(false)
				.with_thread_ids(false)
				.compact(),
		)
		.try_init()
		.is_ok()
}
