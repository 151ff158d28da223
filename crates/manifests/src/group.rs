//! The Group manifest.
//!
//! The same shape backs two lifecycles: the repo-wide group object, which is
//! written once and never touched again, and the per-cluster membership file,
//! which is the only manifest the tool rewrites after creation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Metadata};

pub const API_VERSION: &str = "user.openshift.io/v1";
pub const KIND: &str = "Group";

/// A group of users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
	pub api_version: String,
	pub kind: String,
	pub metadata: Metadata,
	// Serialized even when empty: a fresh group manifest carries `users: []`.
	#[serde(default)]
	pub users: Vec<String>,
}

impl Group {
	pub fn new(name: &str) -> Result<Self, Error> {
		if name.is_empty() {
			return Err(Error::MissingField {
				kind: "group",
				field: "a name",
			});
		}

		Ok(Self {
			api_version: API_VERSION.to_string(),
			kind: KIND.to_string(),
			metadata: Metadata::named(name),
			users: Vec::new(),
		})
	}

	/// Decode a group manifest from the file at `path`.
	pub fn from_path(path: &Path) -> Result<Self, Error> {
		crate::from_path(path)
	}

	/// Membership test by exact name.
	pub fn contains(&self, user: &str) -> bool {
		self.users.iter().any(|u| u == user)
	}
}
