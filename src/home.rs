//! The host page: builds the user record and the greeting, then hands
//! both to a card.

use std::sync::Arc;

use propcard_pages::prelude::*;

use crate::components::{NameCard, UserCard};
use crate::settings::{PageSettings, Variant};
use crate::user::User;

const MAIN_CLASS: &str = "container mx-auto p-4";
const TITLE_CLASS: &str = "text-3xl font-bold mb-4";

/// Composition root of the walkthrough.
///
/// Owns one fixed [`User`] and renders exactly one card for it. Which card
/// (and whether it gets a greeting callback) depends on
/// [`PageSettings::variant`].
pub struct HomePage {
	settings: PageSettings,
	user: User,
	notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for HomePage {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("HomePage")
			.field("settings", &self.settings)
			.field("user", &self.user)
			.field("notifier", &"<notifier>")
			.finish()
	}
}

impl HomePage {
	/// `notifier` receives the greeting notice when the greet button is
	/// clicked.
	pub fn new(settings: PageSettings, notifier: Arc<dyn Notifier>) -> Self {
		Self {
			settings,
			user: User::sample(),
			notifier,
		}
	}

	pub fn user(&self) -> &User {
		&self.user
	}

	pub fn settings(&self) -> &PageSettings {
		&self.settings
	}

	/// The behavior handed to the card: show the localized greeting for
	/// the name it is called with.
	pub fn greeting(&self) -> Callback<String> {
		let notifier = Arc::clone(&self.notifier);
		let locale = self.settings.locale;
		Callback::new(move |name: String| {
			debug_log!("greeting {}", name);
			notifier.notify(&locale.greeting(&name));
		})
	}

	fn card(&self) -> Page {
		let locale = self.settings.locale;
		match self.settings.variant {
			Variant::NameOnly => NameCard::new(self.user.name.clone())
				.locale(locale)
				.render(),
			Variant::Record => UserCard::new(self.user.clone()).locale(locale).render(),
			Variant::RecordWithGreeting => UserCard::new(self.user.clone())
				.locale(locale)
				.on_greet(self.greeting())
				.render(),
		}
	}
}

impl Component for HomePage {
	fn render(&self) -> Page {
		PageElement::new("main")
			.attr("class", MAIN_CLASS)
			.child(
				PageElement::new("h1")
					.attr("class", TITLE_CLASS)
					.child(self.settings.title().to_string()),
			)
			.child(self.card())
			.into_page()
	}

	fn name() -> &'static str {
		"HomePage"
	}
}

/// Renders the home page as a complete HTML document.
#[tracing::instrument(skip(notifier), fields(variant = ?settings.variant, locale = ?settings.locale))]
pub fn render_document(settings: &PageSettings, notifier: Arc<dyn Notifier>) -> String {
	let renderer = SsrRenderer::with_options(
		SsrOptions::new()
			.lang(settings.lang())
			.title(settings.title())
			.mount_id(crate::MOUNT_ID),
	);
	let html = renderer.render_page(&HomePage::new(settings.clone(), notifier));
	info_log!("rendered home page ({} bytes)", html.len());
	html
}
