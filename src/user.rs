//! The person record handed from the host page to the card.

use serde::{Deserialize, Serialize};

/// A person shown on a card.
///
/// Built once by the host page and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
	pub name: String,
	pub age: u32,
	pub city: String,
}

impl User {
	pub fn new(name: impl Into<String>, age: u32, city: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			age,
			city: city.into(),
		}
	}

	/// The record the home page is built around.
	pub fn sample() -> Self {
		Self::new("Ana García", 25, "Madrid")
	}
}
