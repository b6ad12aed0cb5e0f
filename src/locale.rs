//! Display text for the cards and the greeting.

use serde::{Deserialize, Serialize};

/// Language of the card labels and the greeting notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
	#[default]
	En,
	Es,
}

/// Fixed labels used by the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
	pub name: &'static str,
	pub age: &'static str,
	pub city: &'static str,
	pub greet: &'static str,
}

const EN: Labels = Labels {
	name: "Name",
	age: "Age",
	city: "City",
	greet: "Greet",
};

const ES: Labels = Labels {
	name: "Nombre",
	age: "Edad",
	city: "Ciudad",
	greet: "Saludar",
};

impl Locale {
	pub fn labels(self) -> Labels {
		match self {
			Locale::En => EN,
			Locale::Es => ES,
		}
	}

	/// The notice shown when someone is greeted.
	pub fn greeting(self, name: &str) -> String {
		match self {
			Locale::En => format!("Hello, {name}!"),
			Locale::Es => format!("¡Hola, {name}!"),
		}
	}

	/// BCP 47 tag for the `<html lang>` attribute.
	pub fn lang(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Es => "es",
		}
	}

	/// Page heading used when the settings carry no title. The Spanish one
	/// leaves out the name of the web framework the walkthrough once used.
	pub fn default_title(self) -> &'static str {
		match self {
			Locale::En => "Props Activity",
			Locale::Es => "Actividad de Props",
		}
	}
}
