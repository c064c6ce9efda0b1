//! Document-level reconciliation: replaces the document's shared color assets and shared text
//! styles wholesale with the sets the input declares. Both collections are wiped
//! unconditionally, even when the input declares nothing, so no prior-import residue remains.
//!
//! Unlike layer conversion there is no per-entry failure isolation here: a malformed color or
//! style descriptor is a schema violation and propagates as a hard [ImportError].

use crate::descriptor::DocumentDescriptor;
use crate::document::{ColorAsset, Document, HostCapabilities, SharedStyle, StyleValue};
use crate::fixups::LayerFixups;
use crate::ImportError;

// =================
// StyleRegistration
// =================

/// The shared-style registration forms that various host versions expose, tried in preference
/// order. The shape is resolved once per reconciliation from the document's capabilities rather
/// than probed before every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRegistration {
	/// The combined "add by name and first instance" call.
	AddByNameAndInstance,
	/// Allocate, then the first-instance initializer, then add.
	AllocateInitFirstInstance,
	/// Allocate, then the older plain-style initializer, then add.
	AllocateInitStyle,
}

impl StyleRegistration {
	const PREFERENCE_ORDER: [Self; 3] = [Self::AddByNameAndInstance, Self::AllocateInitFirstInstance, Self::AllocateInitStyle];

	fn supported_by(self, capabilities: &HostCapabilities) -> bool {
		match self {
			Self::AddByNameAndInstance => capabilities.combined_style_registration,
			Self::AllocateInitFirstInstance => capabilities.first_instance_initializer,
			Self::AllocateInitStyle => capabilities.style_initializer,
		}
	}

	/// Picks the most preferred registration form the host supports.
	pub fn resolve(capabilities: &HostCapabilities) -> Result<Self, ImportError> {
		Self::PREFERENCE_ORDER
			.into_iter()
			.find(|form| form.supported_by(capabilities))
			.ok_or(ImportError::StyleRegistrationUnsupported)
	}

	/// Registers `value` under `name` as a document-level shared style using this form.
	pub fn register(self, document: &mut Document, name: &str, value: StyleValue) {
		match self {
			Self::AddByNameAndInstance => document.add_shared_style_with_name_first_instance(name, value),
			Self::AllocateInitFirstInstance => document.add_shared_object(SharedStyle::alloc().init_with_name_first_instance(name, value)),
			Self::AllocateInitStyle => document.add_shared_object(SharedStyle::alloc().init_with_name_style(name, value)),
		}
	}
}

/// Replaces the document's shared color assets and shared text styles with the sets declared by
/// `descriptor`, preserving input order.
pub fn reconcile_assets(document: &mut Document, descriptor: &DocumentDescriptor, fixups: &dyn LayerFixups) -> Result<(), ImportError> {
	document.remove_all_color_assets();
	document.remove_all_shared_styles();

	for color in &descriptor.assets.colors {
		let asset = ColorAsset::from_value(color)?;
		document.add_color_asset(asset);
	}
	if !descriptor.assets.colors.is_empty() {
		info!("Shared colors added: {}", descriptor.assets.colors.len());
	}

	let registration = StyleRegistration::resolve(document.capabilities())?;
	for style in &descriptor.layer_text_styles.objects {
		let mut style = style.clone();
		fixups.fix_shared_style(&mut style);

		let value = StyleValue::from_object(style.value)?;
		registration.register(document, &style.name, value);
	}
	if !descriptor.layer_text_styles.objects.is_empty() {
		info!("Shared text styles added: {}", descriptor.layer_text_styles.objects.len());
	}

	Ok(())
}
