//! Escaping and attribute helpers used by the HTML serializer.

use std::borrow::Cow;

/// Escapes `& < > " '` for use in text nodes and quoted attribute values.
///
/// Borrows the input when nothing needs escaping.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if !s.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(s);
	}

	let mut out = String::with_capacity(s.len() + 8);
	for c in s.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			_ => out.push(c),
		}
	}
	Cow::Owned(out)
}

/// Attributes whose mere presence switches them on.
///
/// The serializer drops these when their value is falsy, because
/// `disabled="false"` would still disable the element.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"autofocus",
	"checked",
	"disabled",
	"hidden",
	"multiple",
	"open",
	"readonly",
	"required",
	"selected",
];

/// `false` for `""`, `"false"` and `"0"`, `true` otherwise.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!matches!(value, "" | "false" | "0")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_plain_text_is_borrowed() {
		assert!(matches!(html_escape("Ana García"), Cow::Borrowed("Ana García")));
	}

	#[rstest]
	#[case("Tom & Jerry", "Tom &amp; Jerry")]
	#[case("<b>", "&lt;b&gt;")]
	#[case("say \"hi\"", "say &quot;hi&quot;")]
	#[case("O'Brien", "O&#x27;Brien")]
	fn test_metacharacters_are_escaped(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(html_escape(input), expected);
	}

	#[rstest]
	#[case("", false)]
	#[case("false", false)]
	#[case("0", false)]
	#[case("true", true)]
	#[case("disabled", true)]
	fn test_boolean_attr_truthiness(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_boolean_attr_truthy(value), expected);
	}
}
