//! The Namespace manifest.

use serde::{Deserialize, Serialize};

use crate::{Error, Metadata};

pub const API_VERSION: &str = "v1";
pub const KIND: &str = "Namespace";

/// Annotation carrying the team that requested the namespace.
pub const REQUESTER_ANNOTATION: &str = "openshift.io/requester";
/// Annotation carrying the human-readable project description.
pub const DISPLAY_NAME_ANNOTATION: &str = "openshift.io/display-name";

/// A cluster namespace owned by a team. Created once per project name and
/// never rewritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
	pub api_version: String,
	pub kind: String,
	pub metadata: Metadata,
}

impl Namespace {
	/// Create a namespace manifest for `name`, owned by `owner`.
	///
	/// The description is optional; when empty it is left out of the
	/// manifest entirely rather than written as an empty annotation.
	pub fn new(name: &str, owner: &str, description: &str) -> Result<Self, Error> {
		if name.is_empty() {
			return Err(Error::MissingField {
				kind: "namespace",
				field: "a name",
			});
		}
		if owner.is_empty() {
			return Err(Error::MissingField {
				kind: "namespace",
				field: "an owner",
			});
		}

		let mut metadata = Metadata::named(name);
		metadata
			.annotations
			.insert(REQUESTER_ANNOTATION.to_string(), owner.to_string());
		if !description.is_empty() {
			metadata
				.annotations
				.insert(DISPLAY_NAME_ANNOTATION.to_string(), description.to_string());
		}

		Ok(Self {
			api_version: API_VERSION.to_string(),
			kind: KIND.to_string(),
			metadata,
		})
	}
}
