//! Props: the read-only input a parent hands to a child component.

use std::collections::HashMap;

/// Trait for component properties.
///
/// Props are normally built in code by the parent. `from_attrs` rebuilds
/// them from string attributes (for instance the `data-prop-*` attributes
/// written by [`SsrRenderer::render_with_marker`](crate::ssr::SsrRenderer::render_with_marker)).
/// Missing or malformed attributes fall back to defaults instead of failing.
///
/// # Example
///
/// ```ignore
/// #[derive(Default)]
/// struct BadgeProps {
///     label: String,
///     count: u32,
/// }
///
/// impl Props for BadgeProps {
///     fn from_attrs(attrs: &HashMap<String, String>) -> Self {
///         Self {
///             label: attrs.get("label").cloned().unwrap_or_default(),
///             count: attrs.get("count").and_then(|v| v.parse().ok()).unwrap_or(0),
///         }
///     }
/// }
/// ```
pub trait Props: Default {
	/// Constructs props from string attributes.
	fn from_attrs(attrs: &HashMap<String, String>) -> Self;
}

/// Flattens serializable props into string attributes.
///
/// Strings are stored as-is, numbers and booleans through `to_string`,
/// nested values as JSON. `null` fields are skipped.
pub fn serialize_props<P: serde::Serialize>(
	props: &P,
) -> Result<HashMap<String, String>, serde_json::Error> {
	let mut attrs = HashMap::new();
	if let serde_json::Value::Object(map) = serde_json::to_value(props)? {
		for (key, value) in map {
			let value = match value {
				serde_json::Value::String(s) => s,
				serde_json::Value::Bool(b) => b.to_string(),
				serde_json::Value::Number(n) => n.to_string(),
				serde_json::Value::Null => continue,
				other => other.to_string(),
			};
			attrs.insert(key, value);
		}
	}
	Ok(attrs)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde::Serialize;

	#[derive(Debug, Default, PartialEq, Serialize)]
	struct BadgeProps {
		label: String,
		count: u32,
		pinned: bool,
		note: Option<String>,
	}

	impl Props for BadgeProps {
		fn from_attrs(attrs: &HashMap<String, String>) -> Self {
			Self {
				label: attrs.get("label").cloned().unwrap_or_default(),
				count: attrs.get("count").and_then(|v| v.parse().ok()).unwrap_or(0),
				pinned: attrs.get("pinned").is_some_and(|v| v == "true"),
				note: attrs.get("note").cloned(),
			}
		}
	}

	#[rstest]
	fn test_serialized_props_come_back_through_from_attrs() {
		let props = BadgeProps {
			label: "Inbox".to_string(),
			count: 3,
			pinned: true,
			note: None,
		};

		let attrs = serialize_props(&props).unwrap();
		assert_eq!(attrs.get("count").map(String::as_str), Some("3"));
		assert!(!attrs.contains_key("note"));
		assert_eq!(BadgeProps::from_attrs(&attrs), props);
	}

	#[rstest]
	fn test_malformed_attrs_fall_back_to_defaults() {
		let attrs = HashMap::from([("count".to_string(), "many".to_string())]);
		assert_eq!(BadgeProps::from_attrs(&attrs), BadgeProps::default());
	}
}
