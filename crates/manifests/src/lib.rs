//! Typed manifest models for the onboarding repository.
//!
//! Each model carries the fixed apiVersion/kind pair of its manifest kind and
//! serializes with camelCase field names and omit-if-empty semantics, so the
//! written YAML matches what the GitOps sync tooling already consumes.

pub mod group;
pub mod namespace;
pub mod role_binding;
pub mod template;

use std::{
	collections::BTreeMap,
	io,
	path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

pub use group::Group;
pub use namespace::Namespace;
pub use role_binding::{RoleBinding, RoleRef, Subject};
pub use template::{NamespaceSpec, OnboardConfig, OnboardingTemplate};

/// Errors raised by manifest construction and (de)serialization.
#[derive(Debug, Error)]
pub enum Error {
	/// A required identity field was empty at construction time.
	#[error("a {kind} requires {field}")]
	MissingField {
		kind: &'static str,
		field: &'static str,
	},

	#[error("failed to read {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("malformed manifest at {}", path.display())]
	Decode {
		path: PathBuf,
		#[source]
		source: serde_yaml_with_quirks::Error,
	},

	#[error("failed to serialize manifest")]
	Encode(#[source] serde_yaml_with_quirks::Error),
}

/// Object metadata shared by every manifest kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
	pub name: String,
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub annotations: BTreeMap<String, String>,
}

impl Metadata {
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			annotations: BTreeMap::new(),
		}
	}
}

/// Serialize a manifest to its YAML document representation.
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String, Error> {
	serde_yaml_with_quirks::to_string(value).map_err(Error::Encode)
}

/// Decode a value of type `T` from the YAML file at `path`.
pub fn from_path<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
	let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
		path: path.to_path_buf(),
		source,
	})?;
	serde_yaml_with_quirks::from_str(&content).map_err(|source| Error::Decode {
		path: path.to_path_buf(),
		source,
	})
}
