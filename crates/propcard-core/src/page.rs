//! Page types for component rendering.
//!
//! [`Page`] is the tree every component renders into. The same tree is
//! serialized to HTML on the server ([`Page::render_to_string`]) and turned
//! into live DOM nodes in the browser (`Page::mount`, wasm only).
//!
//! ## Example
//!
//! ```
//! use propcard_core::page::{IntoPage, Page, PageElement};
//!
//! let page = PageElement::new("ul")
//!     .children(["one", "two"].map(|item| PageElement::new("li").child(item)))
//!     .into_page();
//!
//! assert_eq!(page.render_to_string(), "<ul><li>one</li><li>two</li></ul>");
//! ```

pub mod event;
mod util;

pub use event::{EventType, UnknownEventType};
pub use util::{BOOLEAN_ATTRS, html_escape, is_boolean_attr_truthy};

use std::borrow::Cow;
use std::sync::Arc;

/// Type alias for event handler functions.
#[cfg(target_arch = "wasm32")]
pub type PageEventHandler = Arc<dyn Fn(web_sys::Event) + 'static>;

/// Stand-in for `web_sys::Event` outside the browser.
///
/// Handlers keep a single signature (`|_| { ... }`) on both targets; on
/// native targets they receive this value when [`PageElement::dispatch`]
/// fires them.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyEvent;

#[cfg(not(target_arch = "wasm32"))]
impl DummyEvent {
	/// No-op, mirrors `web_sys::Event::prevent_default`.
	pub fn prevent_default(&self) {}
}

/// Type alias for event handler functions (native targets).
#[cfg(not(target_arch = "wasm32"))]
pub type PageEventHandler = Arc<dyn Fn(DummyEvent) + Send + Sync + 'static>;

/// Error type for mounting pages to the DOM.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
	#[error("Window object not available")]
	NoWindow,
	#[error("Document object not available")]
	NoDocument,
	#[error("Mount target `{0}` not found")]
	TargetNotFound(String),
	#[error("Failed to create element")]
	CreateElementFailed,
	#[error("Failed to set attribute")]
	SetAttributeFailed,
	#[error("Failed to append child")]
	AppendChildFailed,
	#[error("Failed to attach `{0}` listener")]
	AddListenerFailed(EventType),
}

/// A unified representation of renderable content.
#[derive(Debug)]
pub enum Page {
	/// A DOM element.
	Element(PageElement),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several nodes without a wrapper element.
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

/// Represents a DOM element in the page tree.
pub struct PageElement {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<Page>,
	is_void: bool,
	event_handlers: Vec<(EventType, PageEventHandler)>,
}

impl std::fmt::Debug for PageElement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PageElement")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("event_handlers_count", &self.event_handlers.len())
			.finish()
	}
}

impl PageElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			event_handlers: Vec::new(),
		}
	}

	/// Adds an attribute.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Adds a child.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple children.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Adds an event handler.
	pub fn on(mut self, event_type: EventType, handler: PageEventHandler) -> Self {
		self.event_handlers.push((event_type, handler));
		self
	}

	/// Adds an event handler by DOM event name.
	///
	/// # Errors
	///
	/// Returns [`UnknownEventType`] if `event_name` is not a known event.
	#[cfg(target_arch = "wasm32")]
	pub fn listener<F>(self, event_name: &str, handler: F) -> Result<Self, UnknownEventType>
	where
		F: Fn(web_sys::Event) + 'static,
	{
		let event_type = event_name.parse::<EventType>()?;
		Ok(self.on(event_type, Arc::new(handler)))
	}

	/// Adds an event handler by DOM event name.
	///
	/// # Errors
	///
	/// Returns [`UnknownEventType`] if `event_name` is not a known event.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn listener<F>(self, event_name: &str, handler: F) -> Result<Self, UnknownEventType>
	where
		F: Fn(DummyEvent) + Send + Sync + 'static,
	{
		let event_type = event_name.parse::<EventType>()?;
		Ok(self.on(event_type, Arc::new(handler)))
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in insertion order.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the first attribute called `name`.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| &**v)
	}

	/// Returns the children.
	pub fn child_pages(&self) -> &[Page] {
		&self.children
	}

	/// Concatenated text of this element's descendants.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		for child in &self.children {
			child.text_content_inner(&mut out);
		}
		out
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns the event handlers.
	pub fn event_handlers(&self) -> &[(EventType, PageEventHandler)] {
		&self.event_handlers
	}

	/// Returns whether a handler is registered for `event_type`.
	pub fn listens_to(&self, event_type: EventType) -> bool {
		self.event_handlers.iter().any(|(t, _)| *t == event_type)
	}

	/// Fires every handler registered for `event_type`, in registration
	/// order, and returns how many ran.
	///
	/// Handlers run synchronously on the calling thread. Children are not
	/// visited; there is no bubbling.
	#[cfg(not(target_arch = "wasm32"))]
	pub fn dispatch(&self, event_type: EventType) -> usize {
		let mut fired = 0;
		for (registered, handler) in &self.event_handlers {
			if *registered == event_type {
				handler(DummyEvent);
				fired += 1;
			}
		}
		fired
	}

	/// Consumes the element and returns (tag, attrs, children, is_void, event_handlers).
	#[allow(clippy::type_complexity)] // Tuple decomposition is intentional for destructuring
	pub fn into_parts(
		self,
	) -> (
		Cow<'static, str>,
		Vec<(Cow<'static, str>, Cow<'static, str>)>,
		Vec<Page>,
		bool,
		Vec<(EventType, PageEventHandler)>,
	) {
		(
			self.tag,
			self.attrs,
			self.children,
			self.is_void,
			self.event_handlers,
		)
	}
}

impl Page {
	/// Creates an element.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> PageElement {
		PageElement::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Creates an empty page.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns the first element, in document order, matching `predicate`.
	pub fn find_element<F>(&self, predicate: F) -> Option<&PageElement>
	where
		F: Fn(&PageElement) -> bool,
	{
		self.find_element_inner(&predicate)
	}

	fn find_element_inner(&self, predicate: &dyn Fn(&PageElement) -> bool) -> Option<&PageElement> {
		match self {
			Page::Element(el) => {
				if predicate(el) {
					return Some(el);
				}
				el.children
					.iter()
					.find_map(|child| child.find_element_inner(predicate))
			}
			Page::Fragment(children) => children
				.iter()
				.find_map(|child| child.find_element_inner(predicate)),
			Page::Text(_) | Page::Empty => None,
		}
	}

	/// Returns every element, in document order, matching `predicate`.
	pub fn find_all<F>(&self, predicate: F) -> Vec<&PageElement>
	where
		F: Fn(&PageElement) -> bool,
	{
		let mut found = Vec::new();
		self.collect_into(&predicate, &mut found);
		found
	}

	fn collect_into<'a>(
		&'a self,
		predicate: &dyn Fn(&PageElement) -> bool,
		found: &mut Vec<&'a PageElement>,
	) {
		match self {
			Page::Element(el) => {
				if predicate(el) {
					found.push(el);
				}
				for child in &el.children {
					child.collect_into(predicate, found);
				}
			}
			Page::Fragment(children) => {
				for child in children {
					child.collect_into(predicate, found);
				}
			}
			Page::Text(_) | Page::Empty => {}
		}
	}

	/// Concatenated, unescaped text of every text node in the tree.
	pub fn text_content(&self) -> String {
		let mut out = String::new();
		self.text_content_inner(&mut out);
		out
	}

	fn text_content_inner(&self, out: &mut String) {
		match self {
			Page::Element(el) => {
				for child in &el.children {
					child.text_content_inner(out);
				}
			}
			Page::Text(text) => out.push_str(text),
			Page::Fragment(children) => {
				for child in children {
					child.text_content_inner(out);
				}
			}
			Page::Empty => {}
		}
	}

	/// Renders the page to an HTML string.
	///
	/// Output depends only on the tree, so rendering the same tree twice
	/// yields the same string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			Page::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					let name: &str = name;
					if BOOLEAN_ATTRS.contains(&name) && !is_boolean_attr_truthy(value) {
						continue;
					}
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					output.push_str(&html_escape(value));
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
				} else {
					output.push('>');
					for child in el.child_pages() {
						child.render_to_string_inner(output);
					}
					output.push_str("</");
					output.push_str(el.tag_name());
					output.push('>');
				}
			}
			Page::Text(text) => output.push_str(&html_escape(text)),
			Page::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			Page::Empty => {}
		}
	}

	/// Builds DOM nodes for this page and appends them to `parent`.
	///
	/// Event handlers become `addEventListener` closures that live for the
	/// rest of the page's lifetime.
	#[cfg(target_arch = "wasm32")]
	pub fn mount(self, parent: &web_sys::Element) -> Result<(), MountError> {
		let window = web_sys::window().ok_or(MountError::NoWindow)?;
		let document = window.document().ok_or(MountError::NoDocument)?;
		self.mount_inner(&document, parent)
	}

	#[cfg(target_arch = "wasm32")]
	fn mount_inner(self, document: &web_sys::Document, parent: &web_sys::Node) -> Result<(), MountError> {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		match self {
			Page::Element(el) => {
				let (tag, attrs, children, _, handlers) = el.into_parts();
				let element = document
					.create_element(&tag)
					.map_err(|_| MountError::CreateElementFailed)?;

				for (name, value) in &attrs {
					let name: &str = name;
					if BOOLEAN_ATTRS.contains(&name) && !is_boolean_attr_truthy(value) {
						continue;
					}
					element
						.set_attribute(name, value)
						.map_err(|_| MountError::SetAttributeFailed)?;
				}

				for (event_type, handler) in handlers {
					let closure =
						Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
							handler(event)
						});
					element
						.add_event_listener_with_callback(
							event_type.as_str(),
							closure.as_ref().unchecked_ref(),
						)
						.map_err(|_| MountError::AddListenerFailed(event_type))?;
					closure.forget();
				}

				for child in children {
					child.mount_inner(document, &element)?;
				}

				parent
					.append_child(&element)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			Page::Text(text) => {
				let node = document.create_text_node(&text);
				parent
					.append_child(&node)
					.map_err(|_| MountError::AppendChildFailed)?;
			}
			Page::Fragment(children) => {
				for child in children {
					child.mount_inner(document, parent)?;
				}
			}
			Page::Empty => {}
		}

		Ok(())
	}
}

/// Types that can be placed in a page tree.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_void_element_detection() {
		assert!(PageElement::new("br").is_void());
		assert!(PageElement::new("input").is_void());
		assert!(!PageElement::new("div").is_void());
	}

	#[rstest]
	fn test_render_nested_elements() {
		let page = PageElement::new("div")
			.attr("class", "card")
			.child(PageElement::new("h2").child("Name: Ana"))
			.child(PageElement::new("br"))
			.into_page();
		assert_eq!(
			page.render_to_string(),
			"<div class=\"card\"><h2>Name: Ana</h2><br /></div>"
		);
	}

	#[rstest]
	fn test_render_escapes_text_and_attrs() {
		let page = PageElement::new("p")
			.attr("title", "\"quoted\"")
			.child("<script>")
			.into_page();
		assert_eq!(
			page.render_to_string(),
			"<p title=\"&quot;quoted&quot;\">&lt;script&gt;</p>"
		);
	}

	#[rstest]
	#[case("", false)]
	#[case("false", false)]
	#[case("true", true)]
	fn test_falsy_boolean_attrs_are_dropped(#[case] value: &'static str, #[case] rendered: bool) {
		let html = PageElement::new("button")
			.attr("disabled", value)
			.into_page()
			.render_to_string();
		assert_eq!(html.contains("disabled"), rendered);
	}

	#[rstest]
	fn test_into_page_variants() {
		assert_eq!(None::<String>.into_page().render_to_string(), "");
		assert_eq!(vec!["a", "b"].into_page().render_to_string(), "ab");
		assert_eq!(("x", "y", "z").into_page().render_to_string(), "xyz");
		assert_eq!(().into_page().render_to_string(), "");
	}

	#[rstest]
	fn test_find_element_is_document_order() {
		let page = PageElement::new("main")
			.child(PageElement::new("p").attr("id", "first"))
			.child(PageElement::new("p").attr("id", "second"))
			.into_page();

		let first = page.find_element(|el| el.tag_name() == "p").unwrap();
		assert_eq!(first.attr_value("id"), Some("first"));
		assert_eq!(page.find_all(|el| el.tag_name() == "p").len(), 2);
		assert!(page.find_element(|el| el.tag_name() == "button").is_none());
	}

	#[rstest]
	fn test_text_content_is_unescaped() {
		let page = PageElement::new("div")
			.child(PageElement::new("h2").child("A & B"))
			.child(" / ")
			.child(PageElement::new("p").child("C"))
			.into_page();
		assert_eq!(page.text_content(), "A & B / C");

		let heading = page.find_element(|el| el.tag_name() == "h2").unwrap();
		assert_eq!(heading.text_content(), "A & B");
	}

	#[rstest]
	fn test_dispatch_runs_matching_handlers_only() {
		let clicks = Arc::new(AtomicUsize::new(0));
		let focuses = Arc::new(AtomicUsize::new(0));
		let button = PageElement::new("button")
			.on(EventType::Click, {
				let clicks = Arc::clone(&clicks);
				Arc::new(move |_| {
					clicks.fetch_add(1, Ordering::SeqCst);
				})
			})
			.on(EventType::Focus, {
				let focuses = Arc::clone(&focuses);
				Arc::new(move |_| {
					focuses.fetch_add(1, Ordering::SeqCst);
				})
			});

		assert_eq!(button.dispatch(EventType::Click), 1);
		assert_eq!(button.dispatch(EventType::Submit), 0);
		assert_eq!(clicks.load(Ordering::SeqCst), 1);
		assert_eq!(focuses.load(Ordering::SeqCst), 0);
		assert!(button.listens_to(EventType::Focus));
	}

	#[rstest]
	fn test_listener_rejects_unknown_event() {
		let err = PageElement::new("button")
			.listener("tap", |_| {})
			.unwrap_err();
		assert_eq!(err, UnknownEventType("tap".to_string()));
	}

	#[rstest]
	fn test_mount_error_display() {
		assert_eq!(
			MountError::TargetNotFound("#app".to_string()).to_string(),
			"Mount target `#app` not found"
		);
		assert_eq!(
			MountError::AddListenerFailed(EventType::Click).to_string(),
			"Failed to attach `click` listener"
		);
	}
}
