use crate::descriptor::JsonObject;

use serde::{Deserialize, Serialize};

/// A layer of laid out text. The attributed string is required; a text descriptor without one
/// has no convertible shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLayer {
	#[serde(rename = "attributedString")]
	pub attributed_string: AttributedString,
	/// Inline styling (fills, borders, text attributes) kept as the host delivered it.
	#[serde(default)]
	pub style: Option<JsonObject>,
}

/// The text content plus the per-range attribute runs that style it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributedString {
	pub string: String,
	#[serde(default)]
	pub attributes: Vec<JsonObject>,
}

impl TextLayer {
	pub fn text(&self) -> &str {
		&self.attributed_string.string
	}
}
