use serde::{Deserialize, Serialize};

/// A vector image layer holding its raw SVG definition. The SVG text is carried verbatim;
/// parsing and rasterization belong to the host renderer, not to the import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorLayer {
	#[serde(rename = "rawSVGString")]
	pub raw_svg_string: String,
}
