//! # asketch-importer
//! Converts an "asketch" document description (a JSON tree of pages containing nested drawable
//! layers, plus document-level shared colors and text styles) into a native, editable
//! [Document](document::Document) structure.
//!
//! The import is a single synchronous pass: existing pages and shared assets are replaced
//! wholesale, each layer subtree is converted with per-node fault isolation, and the names of
//! layers that could not be converted are aggregated and surfaced once per page through
//! [ImportResponse](response::ImportResponse).

// `macro_use` puts the log macros (`error!`, `warn!`, `debug!`, `info!` and `trace!`) in scope for the crate
#[macro_use]
extern crate log;

pub mod converter;
pub mod descriptor;
pub mod document;
pub mod fixups;
pub mod importer;
pub mod layers;
pub mod reconciler;
pub mod response;

#[doc(inline)]
pub use converter::convert_layer;
#[doc(inline)]
pub use descriptor::AsketchFile;
#[doc(inline)]
pub use document::Document;
#[doc(inline)]
pub use importer::import_asketch_files;
#[doc(inline)]
pub use response::ImportResponse;

use thiserror::Error;

/// A set of different errors that can occur when using this crate.
///
/// These are the unrecoverable, structural failures: a malformed document, page, or shared-asset
/// descriptor, or a host that supports no shared-style registration form. Per-layer conversion
/// failures are not errors; they are aggregated by name and reported through
/// [ImportResponse](response::ImportResponse) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
	#[error("malformed page descriptor: {0}")]
	MalformedPageDescriptor(String),
	#[error("malformed document descriptor: {0}")]
	MalformedDocumentDescriptor(String),
	#[error("malformed shared color asset: {0}")]
	MalformedColorAsset(String),
	#[error("malformed shared text style: {0}")]
	MalformedSharedStyle(String),
	#[error("the host document supports no shared style registration form")]
	StyleRegistrationUnsupported,
}
