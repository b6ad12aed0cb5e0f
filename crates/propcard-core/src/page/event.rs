//! DOM event types that can be attached to a [`PageElement`](super::PageElement).

use std::fmt;
use std::str::FromStr;

/// A DOM event a handler can listen for.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
	Click,
	DblClick,
	Input,
	Change,
	Submit,
	Focus,
	Blur,
	KeyDown,
	KeyUp,
	MouseEnter,
	MouseLeave,
}

impl EventType {
	/// Returns the DOM event name (e.g. `"click"`).
	pub fn as_str(&self) -> &'static str {
		match self {
			EventType::Click => "click",
			EventType::DblClick => "dblclick",
			EventType::Input => "input",
			EventType::Change => "change",
			EventType::Submit => "submit",
			EventType::Focus => "focus",
			EventType::Blur => "blur",
			EventType::KeyDown => "keydown",
			EventType::KeyUp => "keyup",
			EventType::MouseEnter => "mouseenter",
			EventType::MouseLeave => "mouseleave",
		}
	}
}

impl fmt::Display for EventType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when an event name does not map to any [`EventType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type: {0}")]
pub struct UnknownEventType(pub String);

impl FromStr for EventType {
	type Err = UnknownEventType;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"click" => Ok(EventType::Click),
			"dblclick" => Ok(EventType::DblClick),
			"input" => Ok(EventType::Input),
			"change" => Ok(EventType::Change),
			"submit" => Ok(EventType::Submit),
			"focus" => Ok(EventType::Focus),
			"blur" => Ok(EventType::Blur),
			"keydown" => Ok(EventType::KeyDown),
			"keyup" => Ok(EventType::KeyUp),
			"mouseenter" => Ok(EventType::MouseEnter),
			"mouseleave" => Ok(EventType::MouseLeave),
			other => Err(UnknownEventType(other.to_string())),
		}
	}
}
