//! The pre-conversion hook seam. Before a descriptor is structurally converted, exactly one
//! kind-specific hook runs on it and may normalize its own fields in place (text attributes,
//! SVG payloads, bitmap references, or the generic image-fill list). Hooks never see children;
//! the tree converter detaches those before the shell is built.
//!
//! The concrete normalizations are host concerns, so the trait ships with empty default bodies
//! and hosts override only the hooks they need.

use crate::descriptor::{LayerDescriptor, SharedStyleDescriptor};

/// The per-kind fixup hooks invoked before structural conversion.
pub trait LayerFixups {
	/// Runs on `text` layers before conversion.
	fn fix_text_layer(&self, _layer: &mut LayerDescriptor) {}

	/// Runs on `svg` layers before conversion.
	fn fix_vector_layer(&self, _layer: &mut LayerDescriptor) {}

	/// Runs on `bitmap` layers before conversion.
	fn fix_bitmap_layer(&self, _layer: &mut LayerDescriptor) {}

	/// Runs on every other layer kind before conversion, resolving image fills across the
	/// node's own fill list (see [LayerDescriptor::style_fills_mut]).
	fn fix_image_fills(&self, _layer: &mut LayerDescriptor) {}

	/// Runs on each shared text style before the document reconciler registers it; operates on
	/// the style's embedded value the way [Self::fix_text_layer] operates on a text layer.
	fn fix_shared_style(&self, _style: &mut SharedStyleDescriptor) {}
}

/// A host that needs no descriptor normalization at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFixups;

impl LayerFixups for NoFixups {}
