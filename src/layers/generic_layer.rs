use crate::descriptor::JsonObject;

use serde::{Deserialize, Serialize};

/// The fallback layer kind: groups, shapes, artboards, and any class the importer does not
/// recognize. Carries the style (with its fill list) when one is present; a descriptor whose
/// `style` field is not an object is still a malformed shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericLayer {
	#[serde(default)]
	pub style: Option<LayerStyle>,
}

/// The subset of inline styling the importer understands, with everything else carried along.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
	#[serde(default)]
	pub fills: Vec<JsonObject>,
	#[serde(flatten)]
	pub other: JsonObject,
}

impl GenericLayer {
	pub fn fills(&self) -> &[JsonObject] {
		self.style.as_ref().map(|style| style.fills.as_slice()).unwrap_or_default()
	}
}
