//! The layer tree converter: turns one source descriptor (and its descendants) into one native
//! [Layer]. Conversion is two explicit phases per node: build the childless shell, then
//! recursively compose the converted children back in. A node that fails the shell step
//! contributes nothing but its name in the failure list; its whole subtree is dropped while
//! siblings and ancestors continue unaffected.

use crate::descriptor::{ClassTag, LayerDescriptor, UNNAMED_LAYER};
use crate::fixups::LayerFixups;
use crate::layers::layer_info::Layer;

/// Converts a layer descriptor into a native layer, consuming the descriptor.
///
/// Exactly one kind-specific fixup hook runs first and may normalize the node's own fields in
/// place. The children are then detached so structural conversion only sees the flat shell;
/// each detached child is converted with the same `failing_layers` sink and surviving children
/// are attached in their original order.
///
/// Returns `None` when the shell cannot be built, after recording the node's name.
pub fn convert_layer(mut descriptor: LayerDescriptor, fixups: &dyn LayerFixups, failing_layers: &mut Vec<String>) -> Option<Layer> {
	match descriptor.class_tag() {
		ClassTag::Text => fixups.fix_text_layer(&mut descriptor),
		ClassTag::Vector => fixups.fix_vector_layer(&mut descriptor),
		ClassTag::Bitmap => fixups.fix_bitmap_layer(&mut descriptor),
		ClassTag::Generic => fixups.fix_image_fills(&mut descriptor),
	}

	// Detach the children so one malformed descendant can never abort the shell step,
	// and so the shell step never tries to build child representations itself
	let children = descriptor.take_children();

	let mut layer = match Layer::from_descriptor(&descriptor) {
		Ok(layer) => layer,
		Err(error) => {
			let name = descriptor.display_name();
			warn!("Layer failed to import: {name} ({error})");
			failing_layers.push(name);
			return None;
		}
	};

	for child in children {
		match LayerDescriptor::from_value(child) {
			Some(child) => {
				if let Some(native_child) = convert_layer(child, fixups, failing_layers) {
					layer.add_child(native_child);
				}
			}
			None => {
				warn!("Layer failed to import: child of {} is not an object", layer.name);
				failing_layers.push(UNNAMED_LAYER.to_string());
			}
		}
	}

	Some(layer)
}
