//! Callback types and event handler conversion.
//!
//! A [`Callback`] is how a parent hands behavior to a child: the child
//! stores it as part of its props and calls it, nothing more.
//!
//! ## Example
//!
//! ```ignore
//! use propcard_pages::Callback;
//!
//! let on_greet = Callback::new(|name: String| {
//!     info_log!("greeting {}", name);
//! });
//!
//! // later, inside the child's click handler
//! on_greet.call("Ana García".to_string());
//! ```

use std::sync::Arc;

use propcard_core::PageEventHandler;

#[cfg(target_arch = "wasm32")]
type EventArg = web_sys::Event;

#[cfg(not(target_arch = "wasm32"))]
type EventArg = propcard_core::DummyEvent;

/// A cloneable, `Arc`-backed function wrapper.
///
/// - `Args`: what the callback receives (defaults to the DOM event)
/// - `Ret`: what it returns (defaults to `()`)
#[cfg(target_arch = "wasm32")]
pub struct Callback<Args = EventArg, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + 'static>,
}

/// A cloneable, `Arc`-backed function wrapper (native version).
///
/// Requires `Send + Sync` so that rendered pages can cross threads on the
/// server.
#[cfg(not(target_arch = "wasm32"))]
pub struct Callback<Args = EventArg, Ret = ()> {
	inner: Arc<dyn Fn(Args) -> Ret + Send + Sync + 'static>,
}

#[cfg(target_arch = "wasm32")]
impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the wrapped function.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<Args, Ret> Callback<Args, Ret> {
	/// Wraps a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Calls the wrapped function.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

/// Conversion into a [`PageEventHandler`].
///
/// Implemented for closures over the event type, for
/// `Callback<Event, ()>`, and for `PageEventHandler` itself.
pub trait IntoEventHandler {
	fn into_event_handler(self) -> PageEventHandler;
}

#[cfg(target_arch = "wasm32")]
impl<F> IntoEventHandler for F
where
	F: Fn(web_sys::Event) + 'static,
{
	fn into_event_handler(self) -> PageEventHandler {
		Arc::new(self)
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl<F> IntoEventHandler for F
where
	F: Fn(propcard_core::DummyEvent) + Send + Sync + 'static,
{
	fn into_event_handler(self) -> PageEventHandler {
		Arc::new(self)
	}
}

impl IntoEventHandler for Callback<EventArg, ()> {
	fn into_event_handler(self) -> PageEventHandler {
		self.inner
	}
}

impl IntoEventHandler for PageEventHandler {
	fn into_event_handler(self) -> PageEventHandler {
		self
	}
}

/// Converts any [`IntoEventHandler`] into a [`PageEventHandler`].
pub fn into_event_handler<H: IntoEventHandler>(handler: H) -> PageEventHandler {
	handler.into_event_handler()
}

/// Builds a handler from a closure whose argument type is inferred.
#[cfg(target_arch = "wasm32")]
pub fn event_handler(f: impl Fn(web_sys::Event) + 'static) -> PageEventHandler {
	Arc::new(f)
}

/// Builds a handler from a closure whose argument type is inferred.
#[cfg(not(target_arch = "wasm32"))]
pub fn event_handler(
	f: impl Fn(propcard_core::DummyEvent) + Send + Sync + 'static,
) -> PageEventHandler {
	Arc::new(f)
}

#[cfg(test)]
mod tests {
	use super::*;
	use propcard_core::{DummyEvent, EventType, PageElement};
	use rstest::rstest;
	use std::sync::Mutex;

	#[rstest]
	fn test_callback_call_returns_value() {
		let double = Callback::new(|x: i32| x * 2);
		assert_eq!(double.call(21), 42);
	}

	#[rstest]
	fn test_clones_share_the_same_function() {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let record = Callback::new({
			let seen = Arc::clone(&seen);
			move |name: String| seen.lock().unwrap().push(name)
		});
		let copy = record.clone();

		record.call("Ana".to_string());
		copy.call("Luis".to_string());

		assert_eq!(*seen.lock().unwrap(), vec!["Ana", "Luis"]);
	}

	#[rstest]
	fn test_debug_hides_function() {
		let callback = Callback::new(|_: ()| {});
		assert_eq!(format!("{:?}", callback), "Callback { inner: \"<function>\" }");
	}

	#[rstest]
	fn test_callback_as_click_handler() {
		let clicks = Arc::new(Mutex::new(0));
		let on_click = Callback::new({
			let clicks = Arc::clone(&clicks);
			move |_: DummyEvent| *clicks.lock().unwrap() += 1
		});
		let button = PageElement::new("button").on(EventType::Click, on_click.into_event_handler());

		button.dispatch(EventType::Click);
		button.dispatch(EventType::Click);

		assert_eq!(*clicks.lock().unwrap(), 2);
	}

	#[rstest]
	fn test_event_handler_helpers() {
		let handler = event_handler(|_| {});
		handler(DummyEvent);
		let same = into_event_handler(Arc::clone(&handler));
		assert!(Arc::ptr_eq(&handler, &same));
	}
}
