//! Server-side rendering of components to HTML.

use std::collections::HashMap;

use propcard_core::page::html_escape;
use propcard_core::{IntoPage, Page, PageElement};

use crate::component::{Component, Props, serialize_props};
use crate::debug_log;

/// Attribute naming the component inside a marker wrapper.
pub const MARKER_ATTR_COMPONENT: &str = "data-component";

/// Prefix of the per-prop attributes inside a marker wrapper.
pub const MARKER_ATTR_PROP_PREFIX: &str = "data-prop-";

/// Options for SSR rendering.
#[derive(Debug, Clone)]
pub struct SsrOptions {
	/// `lang` attribute of the `<html>` element.
	pub lang: String,
	/// Document title, if any.
	pub title: Option<String>,
	/// `id` of the element the page body is rendered into.
	pub mount_id: String,
}

impl Default for SsrOptions {
	fn default() -> Self {
		Self {
			lang: "en".to_string(),
			title: None,
			mount_id: "app".to_string(),
		}
	}
}

impl SsrOptions {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the language.
	pub fn lang(mut self, lang: impl Into<String>) -> Self {
		self.lang = lang.into();
		self
	}

	/// Sets the document title.
	pub fn title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// Sets the id of the mount element.
	pub fn mount_id(mut self, id: impl Into<String>) -> Self {
		self.mount_id = id.into();
		self
	}
}

/// The SSR renderer.
#[derive(Debug, Clone, Default)]
pub struct SsrRenderer {
	options: SsrOptions,
}

impl SsrRenderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	pub fn with_options(options: SsrOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &SsrOptions {
		&self.options
	}

	/// Renders a component to an HTML fragment.
	pub fn render<C: Component>(&self, component: &C) -> String {
		debug_log!("ssr render {}", C::name());
		self.render_view(&component.render())
	}

	/// Renders a page tree to an HTML fragment.
	pub fn render_view(&self, view: &Page) -> String {
		view.render_to_string()
	}

	/// Renders a component to a full HTML document.
	pub fn render_page<C: Component>(&self, component: &C) -> String {
		let content = self.render(component);
		self.wrap_in_html(&content)
	}

	/// Wraps body content in a full HTML document.
	pub fn wrap_in_html(&self, content: &str) -> String {
		let mut html = String::with_capacity(content.len() + 256);

		html.push_str("<!DOCTYPE html>\n");
		html.push_str(&format!(
			"<html lang=\"{}\">\n",
			html_escape(&self.options.lang)
		));

		html.push_str("<head>\n");
		html.push_str("<meta charset=\"UTF-8\">\n");
		html.push_str(
			"<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
		);
		if let Some(ref title) = self.options.title {
			html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
		}
		html.push_str("</head>\n");

		html.push_str("<body>\n");
		html.push_str(&format!(
			"<div id=\"{}\">",
			html_escape(&self.options.mount_id)
		));
		html.push_str(content);
		html.push_str("</div>\n");
		html.push_str("</body>\n");
		html.push_str("</html>");

		html
	}

	/// Renders a component inside a `div` that records its name and props.
	///
	/// The wrapper carries `data-component="{name}"` and one
	/// `data-prop-{key}` attribute per serialized prop, so the props can be
	/// rebuilt with [`props_from_marker`].
	pub fn render_with_marker<C, P>(&self, component: &C, props: &P) -> Result<Page, serde_json::Error>
	where
		C: Component,
		P: serde::Serialize,
	{
		let mut attrs: Vec<(String, String)> = serialize_props(props)?.into_iter().collect();
		attrs.sort();

		let mut wrapper = PageElement::new("div").attr(MARKER_ATTR_COMPONENT, C::name());
		for (key, value) in attrs {
			wrapper = wrapper.attr(format!("{MARKER_ATTR_PROP_PREFIX}{key}"), value);
		}
		Ok(wrapper.child(component.render()).into_page())
	}
}

/// Rebuilds props from the `data-prop-*` attributes of a marker wrapper.
pub fn props_from_marker<P: Props>(marker: &PageElement) -> P {
	let attrs: HashMap<String, String> = marker
		.attrs()
		.iter()
		.filter_map(|(name, value)| {
			name.strip_prefix(MARKER_ATTR_PROP_PREFIX)
				.map(|key| (key.to_string(), value.to_string()))
		})
		.collect();
	P::from_attrs(&attrs)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use serde::Serialize;

	#[derive(Debug, Default, PartialEq, Serialize)]
	struct TagProps {
		label: String,
		weight: u32,
	}

	impl Props for TagProps {
		fn from_attrs(attrs: &HashMap<String, String>) -> Self {
			Self {
				label: attrs.get("label").cloned().unwrap_or_default(),
				weight: attrs.get("weight").and_then(|v| v.parse().ok()).unwrap_or(0),
			}
		}
	}

	struct Tag(TagProps);

	impl Component for Tag {
		fn render(&self) -> Page {
			PageElement::new("em")
				.child(format!("{} ({})", self.0.label, self.0.weight))
				.into_page()
		}

		fn name() -> &'static str {
			"Tag"
		}
	}

	#[fixture]
	fn tag() -> Tag {
		Tag(TagProps {
			label: "rust".to_string(),
			weight: 7,
		})
	}

	#[rstest]
	fn test_render_fragment(tag: Tag) {
		assert_eq!(SsrRenderer::new().render(&tag), "<em>rust (7)</em>");
	}

	#[rstest]
	fn test_render_page_document(tag: Tag) {
		let renderer = SsrRenderer::with_options(SsrOptions::new().lang("es").title("Tags & more"));
		let html = renderer.render_page(&tag);

		assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"es\">"));
		assert!(html.contains("<title>Tags &amp; more</title>"));
		assert!(html.contains("<div id=\"app\"><em>rust (7)</em></div>"));
		assert!(html.ends_with("</html>"));
	}

	#[rstest]
	fn test_document_without_title(tag: Tag) {
		let html = SsrRenderer::new().render_page(&tag);
		assert!(!html.contains("<title>"));
	}

	#[rstest]
	fn test_custom_mount_id(tag: Tag) {
		let renderer = SsrRenderer::with_options(SsrOptions::new().mount_id("root"));
		let html = renderer.render_page(&tag);
		assert!(html.contains("<div id=\"root\"><em>rust (7)</em></div>"));
	}

	#[rstest]
	fn test_document_escapes_like_page_text(tag: Tag) {
		let title = "O'Brien <3> & \"co\"";
		let html = SsrRenderer::with_options(SsrOptions::new().title(title)).render_page(&tag);

		let escaped = Page::text(title).render_to_string();
		assert_eq!(escaped, "O&#x27;Brien &lt;3&gt; &amp; &quot;co&quot;");
		assert!(html.contains(&format!("<title>{escaped}</title>")));
	}

	#[rstest]
	fn test_marker_round_trips_props(tag: Tag) {
		let renderer = SsrRenderer::new();
		let page = renderer.render_with_marker(&tag, &tag.0).unwrap();

		assert_eq!(
			page.render_to_string(),
			"<div data-component=\"Tag\" data-prop-label=\"rust\" data-prop-weight=\"7\"><em>rust (7)</em></div>"
		);

		let marker = page
			.find_element(|el| el.attr_value(MARKER_ATTR_COMPONENT) == Some("Tag"))
			.unwrap();
		let props: TagProps = props_from_marker(marker);
		assert_eq!(props, tag.0);
	}
}
