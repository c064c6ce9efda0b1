use serde::{Deserialize, Serialize};
use std::fmt;

/// Notifications produced while importing. All of these are fire-and-forget: the host presents
/// them (as a blocking alert, a transient message, or a viewport adjustment) but none of them
/// affect the control flow of the import itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ImportResponse {
	/// One blocking alert per page with at least one failed layer, carrying the failure count.
	ImportFailuresAlert {
		page: String,
		count: usize,
	},
	/// A transient success message for a page imported without failures.
	ImportSucceeded {
		page: String,
	},
	/// A best-effort request to frame the viewport around the page's content.
	FitViewportToPage {
		page: String,
	},
}

impl fmt::Display for ImportResponse {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ImportResponse::ImportFailuresAlert { count: 1, .. } => write!(f, "One layer couldn't be imported and was skipped."),
			ImportResponse::ImportFailuresAlert { count, .. } => write!(f, "{count} layers couldn't be imported and were skipped."),
			ImportResponse::ImportSucceeded { .. } => write!(f, "Import successful"),
			ImportResponse::FitViewportToPage { page } => write!(f, "Fit viewport to page '{page}'"),
		}
	}
}
