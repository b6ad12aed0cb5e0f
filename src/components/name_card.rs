//! Card that receives a single primitive prop.

use propcard_pages::prelude::*;

use super::{CARD_CLASS, HEADING_CLASS};
use crate::locale::Locale;

/// Shows only a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCard {
	name: String,
	locale: Locale,
}

impl NameCard {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			locale: Locale::default(),
		}
	}

	pub fn locale(mut self, locale: Locale) -> Self {
		self.locale = locale;
		self
	}
}

impl Component for NameCard {
	fn render(&self) -> Page {
		let labels = self.locale.labels();
		PageElement::new("div")
			.attr("class", CARD_CLASS)
			.child(
				PageElement::new("h2")
					.attr("class", HEADING_CLASS)
					.child(format!("{}: {}", labels.name, self.name)),
			)
			.into_page()
	}

	fn name() -> &'static str {
		"NameCard"
	}
}
