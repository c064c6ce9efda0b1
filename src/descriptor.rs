//! Source-side descriptor types: the JSON-shaped representation of a document, page, layer, or
//! shared style prior to conversion. Descriptors are discriminated by their `_class` tag and are
//! deliberately loose; only the native side decides whether a shape is convertible.

use crate::ImportError;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The JSON object type all descriptors wrap.
pub type JsonObject = Map<String, Value>;

/// The fallback name recorded for layers whose descriptor carries no usable name.
pub const UNNAMED_LAYER: &str = "Unnamed layer";

// ========
// ClassTag
// ========

/// The closed set of layer kinds that receive a dedicated pre-conversion fixup.
/// Every `_class` value outside the set is treated as a generic image-bearing kind;
/// unrecognized kinds are never a conversion failure by themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassTag {
	Text,
	Vector,
	Bitmap,
	Generic,
}

impl ClassTag {
	pub fn from_class(class: &str) -> Self {
		match class {
			"text" => ClassTag::Text,
			"svg" => ClassTag::Vector,
			"bitmap" => ClassTag::Bitmap,
			_ => ClassTag::Generic,
		}
	}
}

impl fmt::Display for ClassTag {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ClassTag::Text => write!(f, "Text"),
			ClassTag::Vector => write!(f, "Vector"),
			ClassTag::Bitmap => write!(f, "Bitmap"),
			ClassTag::Generic => write!(f, "Generic"),
		}
	}
}

// ===============
// LayerDescriptor
// ===============

/// One node of the source layer tree: an untyped JSON object with a `name`, a `_class` tag,
/// kind-specific content fields, and an ordered `layers` array of child descriptors.
///
/// Children only exist as a field on the descriptor. [LayerDescriptor::take_children] detaches
/// them, after which the descriptor is a childless shell ready for structural conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerDescriptor {
	fields: JsonObject,
}

impl LayerDescriptor {
	pub fn new(fields: JsonObject) -> Self {
		Self { fields }
	}

	/// Wraps a JSON value, or `None` if the value is not an object.
	pub fn from_value(value: Value) -> Option<Self> {
		match value {
			Value::Object(fields) => Some(Self { fields }),
			_ => None,
		}
	}

	pub fn name(&self) -> Option<&str> {
		self.fields.get("name").and_then(Value::as_str)
	}

	/// The name recorded in failure reports: the `name` field, or a fixed fallback.
	pub fn display_name(&self) -> String {
		self.name().unwrap_or(UNNAMED_LAYER).to_string()
	}

	pub fn class(&self) -> Option<&str> {
		self.fields.get("_class").and_then(Value::as_str)
	}

	pub fn class_tag(&self) -> ClassTag {
		ClassTag::from_class(self.class().unwrap_or_default())
	}

	/// Detaches and returns the `layers` array, leaving an empty one behind so that structural
	/// conversion only ever sees a childless shell. Child entries stay untyped here; a child
	/// that is not even a JSON object is handled by the converter like any other failing node.
	pub fn take_children(&mut self) -> Vec<Value> {
		match self.fields.insert("layers".to_string(), Value::Array(Vec::new())) {
			Some(Value::Array(children)) => children,
			_ => Vec::new(),
		}
	}

	pub fn has_children(&self) -> bool {
		matches!(self.fields.get("layers"), Some(Value::Array(children)) if !children.is_empty())
	}

	pub fn fields(&self) -> &JsonObject {
		&self.fields
	}

	/// Mutable access for fixup hooks, which normalize a descriptor's own fields in place
	/// before structural conversion.
	pub fn fields_mut(&mut self) -> &mut JsonObject {
		&mut self.fields
	}

	/// Mutable access to the node's own `style.fills` list, if it has one.
	/// Convenience for fixup hooks that resolve image fills.
	pub fn style_fills_mut(&mut self) -> Option<&mut Vec<Value>> {
		match self.fields.get_mut("style")?.get_mut("fills")? {
			Value::Array(fills) => Some(fills),
			_ => None,
		}
	}
}

// ======================
// Page-level descriptors
// ======================

/// A page description: a name and an ordered sequence of top-level layer descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageDescriptor {
	pub name: String,
	#[serde(default)]
	pub layers: Vec<LayerDescriptor>,
}

// ==========================
// Document-level descriptors
// ==========================

/// A document-level description carrying the shared assets: color assets and named text styles.
/// Either collection may be absent from the input, which still wipes the corresponding native
/// collection on import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
	#[serde(default)]
	pub assets: AssetsDescriptor,
	#[serde(default, rename = "layerTextStyles")]
	pub layer_text_styles: SharedStylesDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetsDescriptor {
	/// Ordered color asset descriptors, decoded by the document reconciler.
	#[serde(default)]
	pub colors: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedStylesDescriptor {
	#[serde(default)]
	pub objects: Vec<SharedStyleDescriptor>,
}

/// A named shared text style: the `value` object is the style definition the host registers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedStyleDescriptor {
	pub name: String,
	pub value: JsonObject,
}

// ===========
// AsketchFile
// ===========

/// One parsed input unit. A JSON object whose `_class` is `"document"` carries shared assets;
/// every other unit is treated as a page description.
#[derive(Debug, Clone, PartialEq)]
pub enum AsketchFile {
	Document(DocumentDescriptor),
	Page(PageDescriptor),
}

impl AsketchFile {
	pub fn from_value(value: Value) -> Result<Self, ImportError> {
		let is_document = value.get("_class").and_then(Value::as_str) == Some("document");
		if is_document {
			serde_json::from_value(value)
				.map(AsketchFile::Document)
				.map_err(|error| ImportError::MalformedDocumentDescriptor(error.to_string()))
		} else {
			serde_json::from_value(value)
				.map(AsketchFile::Page)
				.map_err(|error| ImportError::MalformedPageDescriptor(error.to_string()))
		}
	}
}
