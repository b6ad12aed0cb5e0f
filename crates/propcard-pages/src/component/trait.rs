//! Component trait definition.

use propcard_core::Page;

/// Trait for reusable UI components.
///
/// A component is a value holding its props; `render` turns those props
/// into a [`Page`]. Rendering must not mutate anything, so calling it twice
/// yields the same tree.
///
/// # Example
///
/// ```ignore
/// struct Greeting {
///     name: String,
/// }
///
/// impl Component for Greeting {
///     fn render(&self) -> Page {
///         PageElement::new("p")
///             .child(format!("Hello, {}!", self.name))
///             .into_page()
///     }
///
///     fn name() -> &'static str {
///         "Greeting"
///     }
/// }
/// ```
pub trait Component: 'static {
	/// Renders the component to a Page.
	fn render(&self) -> Page;

	/// Returns the component's name for logging and SSR markers.
	fn name() -> &'static str
	where
		Self: Sized;
}
