//! Host page configuration.
//!
//! Settings come from TOML. Every field is optional:
//!
//! ```toml
//! locale = "es"                  # "en" (default) or "es"
//! variant = "record"             # "name-only", "record" or "record-with-greeting" (default)
//! title = "Mi página"            # defaults to the locale's title
//! lang = "es-ES"                 # defaults to the locale's language tag
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Which stage of the props walkthrough the host page renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
	/// The card receives only the name.
	NameOnly,
	/// The card receives the whole user record.
	Record,
	/// The card receives the record and a greeting callback.
	#[default]
	RecordWithGreeting,
}

/// Errors raised while loading [`PageSettings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("failed to read settings file {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid settings: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("failed to serialize settings: {0}")]
	Serialize(#[from] toml::ser::Error),
}

/// Configuration of the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSettings {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub lang: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub title: Option<String>,
	pub locale: Locale,
	pub variant: Variant,
}

impl PageSettings {
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses settings from a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self, SettingsError> {
		Ok(toml::from_str(source)?)
	}

	/// Reads and parses a TOML settings file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.display().to_string(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	pub fn to_toml_string(&self) -> Result<String, SettingsError> {
		Ok(toml::to_string(self)?)
	}

	pub fn with_locale(mut self, locale: Locale) -> Self {
		self.locale = locale;
		self
	}

	pub fn with_variant(mut self, variant: Variant) -> Self {
		self.variant = variant;
		self
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	/// `lang` attribute for the document.
	pub fn lang(&self) -> &str {
		self.lang.as_deref().unwrap_or(self.locale.lang())
	}

	/// Page heading and document title.
	pub fn title(&self) -> &str {
		self.title
			.as_deref()
			.unwrap_or(self.locale.default_title())
	}
}
