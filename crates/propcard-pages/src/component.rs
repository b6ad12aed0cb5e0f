//! Component system.
//!
//! - [`Component`]: a value that renders its props into a [`Page`]
//! - [`Props`]: props that can be rebuilt from string attributes
//!
//! Page types are re-exported from `propcard-core` so components only
//! need this module.

mod props;
mod r#trait;

#[cfg(not(target_arch = "wasm32"))]
pub use propcard_core::DummyEvent;
pub use propcard_core::{EventType, IntoPage, MountError, Page, PageElement, PageEventHandler};
pub use props::{Props, serialize_props};
pub use r#trait::Component;
