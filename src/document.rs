//! The native side of an import: [Document], its [Page]s, and the document-owned shared asset
//! collections (text styles and colors). The converter and importer only touch this module
//! through its public surface, which mirrors what the host application exposes: page
//! enumeration/removal/addition/activation, layer attachment, and bulk-clearable shared
//! collections with the registration forms the host supports.

use crate::descriptor::JsonObject;
use crate::layers::layer_info::{Layer, LayerDataType};
use crate::ImportError;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The name the host gives a freshly added page before the import renames it.
pub const BLANK_PAGE_NAME: &str = "Page";

// ================
// HostCapabilities
// ================

/// Which optional host behaviors this document exhibits. Resolved once when the document is
/// created; callers pick strategies up front instead of probing per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostCapabilities {
	/// The host accepts the combined add-by-name-and-first-instance style registration call.
	pub combined_style_registration: bool,
	/// The two-step style allocator accepts the first-instance initializer.
	pub first_instance_initializer: bool,
	/// The two-step style allocator accepts the plain style initializer.
	pub style_initializer: bool,
	/// Freshly added blank pages come seeded with a default layer that imports must clear.
	pub seeds_blank_page_layer: bool,
}

impl Default for HostCapabilities {
	fn default() -> Self {
		Self {
			combined_style_registration: true,
			first_instance_initializer: true,
			style_initializer: true,
			seeds_blank_page_layer: false,
		}
	}
}

// =====
// Color
// =====

/// An RGBA color with `f32` channels in `0.0..=1.0`, decoded from an asketch color object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
	pub red: f32,
	pub green: f32,
	pub blue: f32,
	#[serde(default = "Color::default_alpha")]
	pub alpha: f32,
}

impl Color {
	fn default_alpha() -> f32 {
		1.
	}
}

// ==========
// ColorAsset
// ==========

/// A document-owned shared color, optionally named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAsset {
	#[serde(default)]
	pub name: Option<String>,
	#[serde(flatten)]
	pub color: Color,
}

impl ColorAsset {
	/// Decodes a color asset descriptor. Malformed color descriptors are a hard failure,
	/// unlike layer conversion which isolates failures per node.
	pub fn from_value(value: &Value) -> Result<Self, ImportError> {
		serde_json::from_value(value.clone()).map_err(|error| ImportError::MalformedColorAsset(error.to_string()))
	}
}

// ===========
// SharedStyle
// ===========

/// The decoded definition of a shared text style: the host's native style object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleValue {
	#[serde(rename = "_class")]
	pub class: String,
	#[serde(default, rename = "textStyle")]
	pub text_style: Option<JsonObject>,
	#[serde(flatten)]
	pub other: JsonObject,
}

impl StyleValue {
	pub fn from_object(object: JsonObject) -> Result<Self, ImportError> {
		serde_json::from_value(Value::Object(object)).map_err(|error| ImportError::MalformedSharedStyle(error.to_string()))
	}
}

/// A named, document-owned shared text style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedStyle {
	pub name: String,
	pub value: StyleValue,
}

impl SharedStyle {
	/// First step of the two-step registration form: allocate, then initialize with one of the
	/// initializer shapes the host supports.
	pub fn alloc() -> SharedStyleAllocation {
		SharedStyleAllocation
	}
}

/// An allocated-but-uninitialized shared style, consumed by exactly one initializer.
#[derive(Debug)]
pub struct SharedStyleAllocation;

impl SharedStyleAllocation {
	pub fn init_with_name_first_instance(self, name: impl Into<String>, value: StyleValue) -> SharedStyle {
		SharedStyle { name: name.into(), value }
	}

	/// Older initializer shape; takes the style definition directly rather than a first instance.
	pub fn init_with_name_style(self, name: impl Into<String>, value: StyleValue) -> SharedStyle {
		SharedStyle { name: name.into(), value }
	}
}

// ====
// Page
// ====

/// A native page: a named forest of layers owned exclusively by the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
	pub name: String,
	layers: Vec<Layer>,
}

impl Page {
	pub fn new(name: impl Into<String>) -> Self {
		Self { name: name.into(), layers: Vec::new() }
	}

	pub fn layers(&self) -> &[Layer] {
		&self.layers
	}

	pub fn add_layer(&mut self, layer: Layer) {
		self.layers.push(layer);
	}

	pub fn remove_all_layers(&mut self) {
		self.layers.clear();
	}
}

// ========
// Document
// ========

/// The native document: the sole owner of its pages and shared asset collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
	pages: Vec<Page>,
	current_page: Option<usize>,
	layer_text_styles: Vec<SharedStyle>,
	color_assets: Vec<ColorAsset>,
	capabilities: HostCapabilities,
}

impl Document {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capabilities(capabilities: HostCapabilities) -> Self {
		Self { capabilities, ..Self::default() }
	}

	pub fn capabilities(&self) -> &HostCapabilities {
		&self.capabilities
	}

	pub fn pages(&self) -> &[Page] {
		&self.pages
	}

	pub fn page_count(&self) -> usize {
		self.pages.len()
	}

	/// Appends a page that already exists on the host side (for example a seeded default page).
	pub fn add_page(&mut self, page: Page) {
		self.pages.push(page);
		self.current_page = Some(self.pages.len() - 1);
	}

	/// Appends a new blank page and makes it the current page. Depending on the host, the fresh
	/// page may come seeded with a default layer.
	pub fn add_blank_page(&mut self) -> &mut Page {
		let mut page = Page::new(BLANK_PAGE_NAME);
		if self.capabilities.seeds_blank_page_layer {
			page.add_layer(Layer::new("Layer", LayerDataType::default()));
		}
		self.pages.push(page);
		let index = self.pages.len() - 1;
		self.current_page = Some(index);
		&mut self.pages[index]
	}

	pub fn current_page(&self) -> Option<&Page> {
		self.current_page.and_then(|index| self.pages.get(index))
	}

	pub fn current_page_mut(&mut self) -> Option<&mut Page> {
		self.current_page.and_then(|index| self.pages.get_mut(index))
	}

	/// Removes and returns the page at `index`, keeping the current-page marker pointing at the
	/// same page when one survives.
	pub fn remove_page(&mut self, index: usize) -> Option<Page> {
		if index >= self.pages.len() {
			return None;
		}
		let page = self.pages.remove(index);
		self.current_page = match self.current_page {
			Some(current) if current == index => None,
			Some(current) if current > index => Some(current - 1),
			current => current,
		};
		Some(page)
	}

	pub fn layer_text_styles(&self) -> &[SharedStyle] {
		&self.layer_text_styles
	}

	pub fn remove_all_shared_styles(&mut self) {
		self.layer_text_styles.clear();
	}

	/// The combined single-call style registration form.
	pub fn add_shared_style_with_name_first_instance(&mut self, name: impl Into<String>, value: StyleValue) {
		self.layer_text_styles.push(SharedStyle { name: name.into(), value });
	}

	/// Registers a shared style built through the two-step allocate-then-initialize form.
	pub fn add_shared_object(&mut self, style: SharedStyle) {
		self.layer_text_styles.push(style);
	}

	pub fn color_assets(&self) -> &[ColorAsset] {
		&self.color_assets
	}

	pub fn remove_all_color_assets(&mut self) {
		self.color_assets.clear();
	}

	pub fn add_color_asset(&mut self, asset: ColorAsset) {
		self.color_assets.push(asset);
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use serde_json::json;

	#[test]
	fn blank_pages_become_current_and_respect_seeding() {
		let mut document = Document::new();
		document.add_blank_page();
		assert_eq!(document.page_count(), 1);
		assert!(document.current_page().unwrap().layers().is_empty());

		let mut seeding_host = Document::with_capabilities(HostCapabilities {
			seeds_blank_page_layer: true,
			..Default::default()
		});
		seeding_host.add_blank_page();
		assert_eq!(seeding_host.current_page().unwrap().layers().len(), 1);
	}

	#[test]
	fn removing_pages_keeps_the_current_marker_consistent() {
		let mut document = Document::new();
		document.add_page(Page::new("First"));
		document.add_page(Page::new("Second"));
		document.add_page(Page::new("Third"));
		assert_eq!(document.current_page().unwrap().name, "Third");

		document.remove_page(0);
		assert_eq!(document.current_page().unwrap().name, "Third");

		document.remove_page(1);
		assert!(document.current_page().is_none());
		assert_eq!(document.pages()[0].name, "Second");

		assert!(document.remove_page(7).is_none());
	}

	#[test]
	fn color_assets_decode_with_a_default_alpha() {
		let asset = ColorAsset::from_value(&json!({ "_class": "color", "red": 1.0, "green": 0.5, "blue": 0.0 })).unwrap();
		assert_eq!(asset.color.alpha, 1.);

		let result = ColorAsset::from_value(&json!({ "_class": "color", "red": "opaque" }));
		assert!(matches!(result, Err(ImportError::MalformedColorAsset(_))));
	}

	#[test]
	fn style_values_require_a_class_tag() {
		let value = StyleValue::from_object(json!({ "_class": "style", "textStyle": {} }).as_object().unwrap().clone()).unwrap();
		assert_eq!(value.class, "style");

		let result = StyleValue::from_object(json!({ "textStyle": {} }).as_object().unwrap().clone());
		assert!(matches!(result, Err(ImportError::MalformedSharedStyle(_))));
	}

	#[test]
	fn both_registration_forms_store_the_same_style() {
		let value = StyleValue::from_object(json!({ "_class": "style" }).as_object().unwrap().clone()).unwrap();

		let mut document = Document::new();
		document.add_shared_style_with_name_first_instance("Heading", value.clone());
		document.add_shared_object(SharedStyle::alloc().init_with_name_first_instance("Heading", value.clone()));
		document.add_shared_object(SharedStyle::alloc().init_with_name_style("Heading", value));

		assert_eq!(document.layer_text_styles().len(), 3);
		assert!(document.layer_text_styles().windows(2).all(|pair| pair[0] == pair[1]));
	}
}
