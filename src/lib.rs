//! # propcard
//!
//! How a parent component hands data and behavior to its children, shown in
//! three steps on one host page:
//!
//! 1. the card receives a single name
//! 2. the card receives a whole [`User`] record
//! 3. the card also receives a greeting callback, and clicking its button
//!    makes the host page show `Hello, {name}!`
//!
//! [`PageSettings`] picks the step and the display language. The same
//! [`HomePage`] renders on the server through [`render_document`] and mounts
//! in the browser when built for `wasm32`.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use propcard::{PageSettings, render_document};
//! use propcard_pages::LogNotifier;
//!
//! propcard_pages::logging::init(false);
//!
//! let html = render_document(&PageSettings::default(), Arc::new(LogNotifier));
//! assert!(html.contains("Name: Ana García"));
//! ```

pub mod components;
pub mod home;
pub mod locale;
pub mod settings;
pub mod user;

#[cfg(target_arch = "wasm32")]
mod app;

pub use components::{NameCard, UserCard, UserCardProps};
pub use home::{HomePage, render_document};
pub use locale::{Labels, Locale};
pub use settings::{PageSettings, SettingsError, Variant};
pub use user::User;

pub use propcard_core::Page;

/// Id of the element the home page is rendered into.
pub const MOUNT_ID: &str = "app";

pub mod prelude {
	pub use crate::components::{NameCard, UserCard, UserCardProps};
	pub use crate::home::{HomePage, render_document};
	pub use crate::locale::Locale;
	pub use crate::settings::{PageSettings, Variant};
	pub use crate::user::User;
	pub use propcard_pages::prelude::*;
}
