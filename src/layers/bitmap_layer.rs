use crate::descriptor::JsonObject;

use serde::{Deserialize, Serialize};

/// A raster image layer. The image reference (a URL or embedded original data) is required and
/// kept as delivered; resolving it into pixel data is the bitmap fixup hook's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitmapLayer {
	pub image: JsonObject,
	#[serde(default)]
	pub style: Option<JsonObject>,
}
