use super::bitmap_layer::BitmapLayer;
use super::generic_layer::GenericLayer;
use super::text_layer::TextLayer;
use super::vector_layer::VectorLayer;
use super::ConversionError;
use crate::descriptor::{ClassTag, LayerDescriptor};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =====
// Layer
// =====

/// One native layer: a named shell plus the children attached to it.
/// Sibling order is meaningful and matches the order of the source descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
	pub name: String,
	/// The kind-specific content of the layer.
	pub data: LayerDataType,
	/// The layers owned by this layer, rendered in the order they are stored.
	#[serde(default)]
	pub children: Vec<Layer>,
}

impl Layer {
	pub fn new(name: impl Into<String>, data: LayerDataType) -> Self {
		Self {
			name: name.into(),
			data,
			children: Vec::new(),
		}
	}

	/// Builds the native shell for a single childless descriptor.
	///
	/// This step never looks at children; the tree converter detaches them first and composes
	/// the converted children back in afterwards. Fails when the descriptor is missing its name
	/// or `_class` tag, or when the kind-specific payload does not have the expected shape.
	pub fn from_descriptor(descriptor: &LayerDescriptor) -> Result<Self, ConversionError> {
		let name = descriptor.name().ok_or(ConversionError::MissingName)?.to_string();
		let class = descriptor.class().ok_or(ConversionError::MissingClass)?.to_string();

		let payload = Value::Object(descriptor.fields().clone());
		let malformed = |error: serde_json::Error| ConversionError::MalformedPayload {
			class: class.clone(),
			reason: error.to_string(),
		};

		let data = match ClassTag::from_class(&class) {
			ClassTag::Text => LayerDataType::Text(serde_json::from_value(payload).map_err(malformed)?),
			ClassTag::Vector => LayerDataType::Vector(serde_json::from_value(payload).map_err(malformed)?),
			ClassTag::Bitmap => LayerDataType::Bitmap(serde_json::from_value(payload).map_err(malformed)?),
			ClassTag::Generic => LayerDataType::Generic(serde_json::from_value(payload).map_err(malformed)?),
		};

		Ok(Self { name, data, children: Vec::new() })
	}

	pub fn add_child(&mut self, child: Layer) {
		self.children.push(child);
	}

	/// Iterate over this layer and all of its descendants, depth first.
	pub fn iter(&self) -> LayerIter<'_> {
		LayerIter { stack: vec![self] }
	}
}

// =============
// LayerDataType
// =============

/// Represents the different kinds of native layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayerDataType {
	/// A layer that wraps a [TextLayer] struct.
	Text(TextLayer),
	/// A layer that wraps a [VectorLayer] struct.
	Vector(VectorLayer),
	/// A layer that wraps a [BitmapLayer] struct.
	Bitmap(BitmapLayer),
	/// A layer that wraps a [GenericLayer] struct: groups and every unrecognized class.
	Generic(GenericLayer),
}

impl Default for LayerDataType {
	fn default() -> Self {
		LayerDataType::Generic(Default::default())
	}
}

// =========================
// LayerDataTypeDiscriminant
// =========================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LayerDataTypeDiscriminant {
	Text,
	Vector,
	Bitmap,
	Generic,
}

impl fmt::Display for LayerDataTypeDiscriminant {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			LayerDataTypeDiscriminant::Text => write!(f, "Text"),
			LayerDataTypeDiscriminant::Vector => write!(f, "Vector"),
			LayerDataTypeDiscriminant::Bitmap => write!(f, "Bitmap"),
			LayerDataTypeDiscriminant::Generic => write!(f, "Generic"),
		}
	}
}

impl From<&LayerDataType> for LayerDataTypeDiscriminant {
	fn from(data: &LayerDataType) -> Self {
		use LayerDataType::*;

		match data {
			Text(_) => LayerDataTypeDiscriminant::Text,
			Vector(_) => LayerDataTypeDiscriminant::Vector,
			Bitmap(_) => LayerDataTypeDiscriminant::Bitmap,
			Generic(_) => LayerDataTypeDiscriminant::Generic,
		}
	}
}

// =========
// LayerIter
// =========

/// An iterator over a layer and its descendants.
/// See [Layer::iter] for more information.
#[derive(Debug, Default)]
pub struct LayerIter<'a> {
	pub stack: Vec<&'a Layer>,
}

impl<'a> Iterator for LayerIter<'a> {
	type Item = &'a Layer;

	fn next(&mut self) -> Option<Self::Item> {
		self.stack.pop().map(|layer| {
			self.stack.extend(layer.children.as_slice());
			layer
		})
	}
}
