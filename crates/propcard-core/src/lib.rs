//! # propcard-core
//!
//! The renderable page tree shared by the server-side renderer and the
//! browser mount path.
//!
//! ## Example
//!
//! ```
//! use propcard_core::page::{IntoPage, PageElement};
//!
//! let page = PageElement::new("div")
//!     .attr("class", "card")
//!     .child("Hello")
//!     .into_page();
//!
//! assert_eq!(page.render_to_string(), "<div class=\"card\">Hello</div>");
//! ```

pub mod page;

#[cfg(not(target_arch = "wasm32"))]
pub use page::DummyEvent;
pub use page::{
	EventType, IntoPage, MountError, Page, PageElement, PageEventHandler, UnknownEventType,
};
