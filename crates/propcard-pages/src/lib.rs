//! # propcard-pages
//!
//! The component layer of propcard: components render their props into a
//! [`Page`](propcard_core::Page), parents hand behavior down as
//! [`Callback`]s, and the same tree is either rendered to HTML
//! ([`ssr`]) or mounted into the browser (`dom`, wasm only).
//!
//! ## Modules
//!
//! - [`component`]: `Component` and `Props` traits
//! - [`callback`]: `Callback` and event handler conversion
//! - [`notify`]: modal notices (`window.alert` and test doubles)
//! - [`ssr`]: server-side rendering
//! - [`logging`]: `*_log!` macros and subscriber setup
//!
//! ## Example
//!
//! ```ignore
//! use propcard_pages::prelude::*;
//!
//! struct Hello {
//!     name: String,
//! }
//!
//! impl Component for Hello {
//!     fn render(&self) -> Page {
//!         PageElement::new("h2")
//!             .child(format!("Name: {}", self.name))
//!             .into_page()
//!     }
//!
//!     fn name() -> &'static str {
//!         "Hello"
//!     }
//! }
//!
//! let html = SsrRenderer::new().render(&Hello { name: "Ana".into() });
//! ```

pub mod callback;
pub mod component;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod logging;
pub mod notify;
pub mod ssr;

pub use callback::{Callback, IntoEventHandler, event_handler, into_event_handler};
pub use component::{Component, Props};
pub use notify::{BrowserAlert, LogNotifier, Notifier, RecordingNotifier};
pub use ssr::{SsrOptions, SsrRenderer};

#[doc(hidden)]
pub mod __private {
	#[cfg(not(target_arch = "wasm32"))]
	pub use tracing;
	#[cfg(target_arch = "wasm32")]
	pub use web_sys;
}

/// Common imports for writing components.
pub mod prelude {
	pub use crate::callback::{Callback, IntoEventHandler, event_handler};
	#[cfg(not(target_arch = "wasm32"))]
	pub use crate::component::DummyEvent;
	pub use crate::component::{
		Component, EventType, IntoPage, Page, PageElement, PageEventHandler, Props,
	};
	pub use crate::notify::Notifier;
	pub use crate::ssr::{SsrOptions, SsrRenderer};
	pub use crate::{debug_log, error_log, info_log, warn_log};
}
