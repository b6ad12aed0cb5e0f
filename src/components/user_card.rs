//! Card that receives a grouped record and, optionally, a greeting callback.

use std::collections::HashMap;

use propcard_pages::prelude::*;

use super::{BUTTON_CLASS, CARD_CLASS, HEADING_CLASS};
use crate::locale::Locale;
use crate::user::User;

/// Props of [`UserCard`].
#[derive(Debug, Clone, Default)]
pub struct UserCardProps {
	pub user: User,
	pub locale: Locale,
	/// Called with the user's name when the greet button is clicked.
	/// No button is rendered when this is `None`.
	pub on_greet: Option<Callback<String>>,
}

impl Props for UserCardProps {
	fn from_attrs(attrs: &HashMap<String, String>) -> Self {
		let text = |key: &str| attrs.get(key).cloned().unwrap_or_default();
		Self {
			user: User {
				name: text("name"),
				age: attrs.get("age").and_then(|v| v.parse().ok()).unwrap_or(0),
				city: text("city"),
			},
			locale: match attrs.get("locale").map(String::as_str) {
				Some("es") => Locale::Es,
				_ => Locale::En,
			},
			on_greet: None,
		}
	}
}

/// Shows a user's name, age and city, plus a greet button when a
/// greeting callback was supplied.
#[derive(Debug, Clone, Default)]
pub struct UserCard {
	props: UserCardProps,
}

impl UserCard {
	pub fn new(user: User) -> Self {
		Self::from_props(UserCardProps {
			user,
			..UserCardProps::default()
		})
	}

	pub fn from_props(props: UserCardProps) -> Self {
		Self { props }
	}

	pub fn locale(mut self, locale: Locale) -> Self {
		self.props.locale = locale;
		self
	}

	pub fn on_greet(mut self, callback: Callback<String>) -> Self {
		self.props.on_greet = Some(callback);
		self
	}

	pub fn props(&self) -> &UserCardProps {
		&self.props
	}

	fn greet_button(&self, on_greet: &Callback<String>) -> PageElement {
		let on_greet = on_greet.clone();
		let name = self.props.user.name.clone();
		PageElement::new("button")
			.attr("type", "button")
			.attr("class", BUTTON_CLASS)
			.on(
				EventType::Click,
				event_handler(move |_| {
					debug_log!("greet clicked for {}", name);
					on_greet.call(name.clone());
				}),
			)
			.child(self.props.locale.labels().greet)
	}
}

impl Component for UserCard {
	fn render(&self) -> Page {
		let labels = self.props.locale.labels();
		let user = &self.props.user;

		PageElement::new("div")
			.attr("class", CARD_CLASS)
			.child(
				PageElement::new("h2")
					.attr("class", HEADING_CLASS)
					.child(format!("{}: {}", labels.name, user.name)),
			)
			.child(PageElement::new("p").child(format!("{}: {}", labels.age, user.age)))
			.child(PageElement::new("p").child(format!("{}: {}", labels.city, user.city)))
			.child(
				self.props
					.on_greet
					.as_ref()
					.map(|on_greet| self.greet_button(on_greet)),
			)
			.into_page()
	}

	fn name() -> &'static str {
		"UserCard"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};
	use std::sync::{Arc, Mutex};

	#[fixture]
	fn ana() -> User {
		User::sample()
	}

	fn greet_button(page: &Page) -> Option<&PageElement> {
		page.find_element(|el| el.tag_name() == "button")
	}

	#[rstest]
	fn test_renders_record_lines(ana: User) {
		let html = UserCard::new(ana).render().render_to_string();
		assert_eq!(
			html,
			format!(
				"<div class=\"{CARD_CLASS}\">\
				<h2 class=\"{HEADING_CLASS}\">Name: Ana García</h2>\
				<p>Age: 25</p>\
				<p>City: Madrid</p>\
				</div>"
			)
		);
	}

	#[rstest]
	fn test_button_only_with_callback(ana: User) {
		let without = UserCard::new(ana.clone()).render();
		assert!(greet_button(&without).is_none());

		let with = UserCard::new(ana).on_greet(Callback::new(|_| {})).render();
		let button = greet_button(&with).unwrap();
		assert_eq!(button.attr_value("type"), Some("button"));
		assert!(button.listens_to(EventType::Click));
		assert!(with.render_to_string().contains(">Greet</button>"));
	}

	#[rstest]
	fn test_click_passes_the_name(ana: User) {
		let received = Arc::new(Mutex::new(Vec::new()));
		let card = UserCard::new(ana).on_greet(Callback::new({
			let received = Arc::clone(&received);
			move |name: String| received.lock().unwrap().push(name)
		}));

		let page = card.render();
		assert_eq!(greet_button(&page).unwrap().dispatch(EventType::Click), 1);

		assert_eq!(*received.lock().unwrap(), vec!["Ana García".to_string()]);
	}

	#[rstest]
	fn test_spanish_labels(ana: User) {
		let page = UserCard::new(ana)
			.locale(Locale::Es)
			.on_greet(Callback::new(|_| {}))
			.render();
		assert_eq!(
			page.text_content(),
			"Nombre: Ana GarcíaEdad: 25Ciudad: MadridSaludar"
		);
	}

	#[rstest]
	fn test_name_is_escaped() {
		let user = User::new("<b>Eve</b> & co", 30, "Lyon");
		let html = UserCard::new(user).render().render_to_string();
		assert!(html.contains("Name: &lt;b&gt;Eve&lt;/b&gt; &amp; co"));
		assert!(!html.contains("<b>"));
	}

	#[rstest]
	fn test_props_from_attrs() {
		let attrs = HashMap::from([
			("name".to_string(), "Luis".to_string()),
			("age".to_string(), "41".to_string()),
			("city".to_string(), "Sevilla".to_string()),
			("locale".to_string(), "es".to_string()),
		]);
		let props = UserCardProps::from_attrs(&attrs);
		assert_eq!(props.user, User::new("Luis", 41, "Sevilla"));
		assert_eq!(props.locale, Locale::Es);
		assert!(props.on_greet.is_none());
	}

	#[rstest]
	fn test_missing_attrs_render_blank_values() {
		let attrs = HashMap::from([("age".to_string(), "-3".to_string())]);
		let page = UserCard::from_props(UserCardProps::from_attrs(&attrs)).render();
		assert_eq!(page.text_content(), "Name: Age: 0City: ");
	}
}
