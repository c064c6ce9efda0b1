//! Top-level orchestration of a full-document import: existing pages are cleared, each input
//! unit is dispatched to the document reconciler or converted into a fresh page, and the
//! notifications for each page are queued for the host to present.

use crate::converter::convert_layer;
use crate::descriptor::{AsketchFile, PageDescriptor};
use crate::document::Document;
use crate::fixups::LayerFixups;
use crate::reconciler::reconcile_assets;
use crate::response::ImportResponse;
use crate::ImportError;

use std::collections::VecDeque;

/// Replaces the document's pages and shared assets with the contents of `files`, in input order.
///
/// The first pre-existing page survives as a placeholder until the end of the pass (a document
/// is never left pageless mid-import) and is removed as the final step, so the terminal state
/// holds only pages built from this input. Per-layer conversion failures are aggregated and
/// reported once per page through `responses`; they never abort the import.
///
/// The import is best-effort and non-transactional: a hard error (malformed document descriptor
/// or unsupported host) propagates immediately and already-applied page and asset replacements
/// stay in place.
pub fn import_asketch_files(
	document: &mut Document,
	files: Vec<AsketchFile>,
	fixups: &dyn LayerFixups,
	responses: &mut VecDeque<ImportResponse>,
) -> Result<(), ImportError> {
	// Delete all pre-existing pages but the placeholder, in reverse order so the shrinking
	// page sequence never shifts an index we still have to visit
	let placeholder_retained = document.page_count() > 0;
	for index in (1..document.page_count()).rev() {
		document.remove_page(index);
	}

	for file in files {
		match file {
			AsketchFile::Document(descriptor) => reconcile_assets(document, &descriptor, fixups)?,
			AsketchFile::Page(descriptor) => import_page(document, descriptor, fixups, responses),
		}
	}

	// The placeholder sat in front of every page this import appended
	if placeholder_retained {
		document.remove_page(0);
	}

	Ok(())
}

/// Converts one page descriptor into a fresh native page appended to the document.
fn import_page(document: &mut Document, descriptor: PageDescriptor, fixups: &dyn LayerFixups, responses: &mut VecDeque<ImportResponse>) {
	let PageDescriptor { name, layers } = descriptor;

	{
		let page = document.add_blank_page();
		// The host may seed a default layer on the fresh page
		page.remove_all_layers();
		page.name = name.clone();
	}

	let mut failing_layers = Vec::new();
	let converted: Vec<_> = layers.into_iter().filter_map(|layer| convert_layer(layer, fixups, &mut failing_layers)).collect();

	if let Some(page) = document.current_page_mut() {
		for layer in converted {
			page.add_layer(layer);
		}
	}

	match failing_layers.len() {
		0 => responses.push_back(ImportResponse::ImportSucceeded { page: name.clone() }),
		count => {
			warn!("{count} layer(s) failed to import on page '{name}': {failing_layers:?}");
			responses.push_back(ImportResponse::ImportFailuresAlert { page: name.clone(), count });
		}
	}
	responses.push_back(ImportResponse::FitViewportToPage { page: name });
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::document::{ColorAsset, HostCapabilities, Page};
	use crate::fixups::NoFixups;

	use serde_json::{json, Value};

	fn init_logger() {
		let _ = env_logger::builder().is_test(true).try_init();
	}

	fn units(values: Vec<Value>) -> Vec<AsketchFile> {
		values.into_iter().map(|value| AsketchFile::from_value(value).unwrap()).collect()
	}

	fn text(name: &str) -> Value {
		json!({ "_class": "text", "name": name, "attributedString": { "string": name } })
	}

	fn invalid(name: &str) -> Value {
		json!({ "_class": "group", "name": name, "style": 7 })
	}

	fn import(document: &mut Document, values: Vec<Value>) -> VecDeque<ImportResponse> {
		init_logger();
		let mut responses = VecDeque::new();
		import_asketch_files(document, units(values), &NoFixups, &mut responses).unwrap();
		responses
	}

	#[test]
	fn survivors_keep_their_order_and_failures_alert_once() {
		let mut document = Document::new();
		let responses = import(
			&mut document,
			vec![json!({ "_class": "page", "name": "Home", "layers": [text("A"), invalid("B"), text("C")] })],
		);

		assert_eq!(document.page_count(), 1);
		let page = &document.pages()[0];
		assert_eq!(page.name, "Home");
		let names: Vec<&str> = page.layers().iter().map(|layer| layer.name.as_str()).collect();
		assert_eq!(names, ["A", "C"]);

		assert_eq!(
			responses,
			[
				ImportResponse::ImportFailuresAlert { page: "Home".into(), count: 1 },
				ImportResponse::FitViewportToPage { page: "Home".into() },
			]
		);
		assert_eq!(responses[0].to_string(), "One layer couldn't be imported and was skipped.");
	}

	#[test]
	fn all_failures_produce_the_plural_alert_and_an_empty_page() {
		let mut document = Document::new();
		let responses = import(
			&mut document,
			vec![json!({ "_class": "page", "name": "Busted", "layers": [invalid("X"), invalid("Y"), invalid("Z")] })],
		);

		assert!(document.pages()[0].layers().is_empty());
		assert_eq!(responses[0], ImportResponse::ImportFailuresAlert { page: "Busted".into(), count: 3 });
		assert_eq!(responses[0].to_string(), "3 layers couldn't be imported and were skipped.");
	}

	#[test]
	fn a_layerless_page_succeeds() {
		let mut document = Document::new();
		let responses = import(&mut document, vec![json!({ "_class": "page", "name": "Empty" })]);

		assert!(document.pages()[0].layers().is_empty());
		assert_eq!(
			responses,
			[
				ImportResponse::ImportSucceeded { page: "Empty".into() },
				ImportResponse::FitViewportToPage { page: "Empty".into() },
			]
		);
	}

	#[test]
	fn pre_existing_pages_are_fully_replaced() {
		let mut document = Document::new();
		document.add_page(Page::new("Old 1"));
		document.add_page(Page::new("Old 2"));
		document.add_page(Page::new("Old 3"));

		import(&mut document, vec![json!({ "_class": "page", "name": "New", "layers": [text("A")] })]);

		let names: Vec<&str> = document.pages().iter().map(|page| page.name.as_str()).collect();
		assert_eq!(names, ["New"]);
	}

	#[test]
	fn importing_twice_does_not_accumulate() {
		let input = || {
			vec![
				json!({
					"_class": "document",
					"assets": { "colors": [{ "red": 1.0, "green": 0.0, "blue": 0.0 }] },
					"layerTextStyles": { "objects": [{ "name": "Body", "value": { "_class": "style" } }] },
				}),
				json!({ "_class": "page", "name": "Home", "layers": [text("A")] }),
			]
		};

		let mut document = Document::new();
		import(&mut document, input());
		let once = document.clone();
		import(&mut document, input());

		assert_eq!(document.pages(), once.pages());
		assert_eq!(document.layer_text_styles(), once.layer_text_styles());
		assert_eq!(document.color_assets(), once.color_assets());
	}

	#[test]
	fn a_document_unit_contributes_assets_but_no_pages() {
		let mut document = Document::new();
		let responses = import(
			&mut document,
			vec![json!({
				"_class": "document",
				"assets": { "colors": [
					{ "_class": "color", "red": 1.0, "green": 0.0, "blue": 0.0 },
					{ "_class": "color", "red": 0.0, "green": 1.0, "blue": 0.0 },
				] },
			})],
		);

		assert_eq!(document.page_count(), 0);
		assert_eq!(document.color_assets().len(), 2);
		assert_eq!(document.color_assets()[0].color.red, 1.);
		assert_eq!(document.color_assets()[1].color.green, 1.);
		assert!(document.layer_text_styles().is_empty());
		assert!(responses.is_empty());
	}

	#[test]
	fn a_seeded_default_layer_on_the_fresh_page_is_cleared() {
		let mut document = Document::with_capabilities(HostCapabilities {
			seeds_blank_page_layer: true,
			..Default::default()
		});
		document.add_page(Page::new("Host default"));

		import(&mut document, vec![json!({ "_class": "page", "name": "Only", "layers": [text("A")] })]);

		assert_eq!(document.page_count(), 1);
		let layers = document.pages()[0].layers();
		assert_eq!(layers.len(), 1);
		assert_eq!(layers[0].name, "A");
	}

	#[test]
	fn an_empty_starting_document_keeps_all_imported_pages() {
		// No placeholder existed, so the final cleanup must not eat an imported page
		let mut document = Document::new();
		import(
			&mut document,
			vec![
				json!({ "_class": "page", "name": "First" }),
				json!({ "_class": "page", "name": "Second" }),
			],
		);

		let names: Vec<&str> = document.pages().iter().map(|page| page.name.as_str()).collect();
		assert_eq!(names, ["First", "Second"]);
	}

	#[test]
	fn a_hard_reconciliation_failure_leaves_prior_replacements_in_place() {
		let mut document = Document::new();
		document.add_page(Page::new("Old"));
		document.add_color_asset(ColorAsset::from_value(&json!({ "red": 0.1, "green": 0.1, "blue": 0.1 })).unwrap());

		let mut responses = VecDeque::new();
		let result = import_asketch_files(
			&mut document,
			units(vec![
				json!({ "_class": "page", "name": "Applied" }),
				json!({ "_class": "document", "assets": { "colors": [{ "red": "loud" }] } }),
			]),
			&NoFixups,
			&mut responses,
		);

		assert!(matches!(result, Err(ImportError::MalformedColorAsset(_))));
		// The already-imported page stays; the placeholder was never removed because the
		// pass aborted before its final step
		let names: Vec<&str> = document.pages().iter().map(|page| page.name.as_str()).collect();
		assert_eq!(names, ["Old", "Applied"]);
		// The wipe that precedes decoding already emptied the color collection
		assert!(document.color_assets().is_empty());
	}
}
