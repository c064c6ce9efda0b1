//! # Layers
//! The native side of a converted layer tree. A [Page](crate::document::Page) owns a forest of
//! [Layers](layer_info::Layer); each layer owns its children exclusively, so the tree has no
//! sharing and no cycles. There are currently these different kinds of layers:
//! * [Text layers](text_layer::TextLayer), which contain an attributed string
//! * [Vector layers](vector_layer::VectorLayer), which contain a raw SVG definition
//! * [Bitmap layers](bitmap_layer::BitmapLayer), which reference raster image data
//! * [Generic layers](generic_layer::GenericLayer), which cover every other descriptor kind,
//!   including groups and unrecognized classes
//!
//! Structural conversion ([Layer::from_descriptor](layer_info::Layer::from_descriptor)) builds the
//! shell for a single childless descriptor; the tree converter composes children back in
//! afterwards. A shell that cannot be built yields a [ConversionError], the only recoverable
//! failure kind in the crate.

/// Contains the [BitmapLayer](bitmap_layer::BitmapLayer) type referencing raster image data.
pub mod bitmap_layer;
/// Contains the [GenericLayer](generic_layer::GenericLayer) fallback kind used for groups and
/// unrecognized classes.
pub mod generic_layer;
/// Contains the base [Layer](layer_info::Layer) type, an abstraction over the different kinds of layers.
pub mod layer_info;
/// Contains the [TextLayer](text_layer::TextLayer) type.
pub mod text_layer;
/// Contains the [VectorLayer](vector_layer::VectorLayer) type.
pub mod vector_layer;

use thiserror::Error;

/// Why a single descriptor could not be structurally converted into a native layer shell.
/// Non-fatal to an import: the converter records the failing layer's name, drops the subtree,
/// and continues with its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
	#[error("the descriptor has no name")]
	MissingName,
	#[error("the descriptor has no _class tag")]
	MissingClass,
	#[error("malformed {class} descriptor: {reason}")]
	MalformedPayload { class: String, reason: String },
}
