//! Kustomization file primitives.
//!
//! Creating and editing the `kustomization.yaml` files that wire manifests
//! into the repository: seeding a fresh kustomization or component, and
//! appending resource/component entries to an existing one. Entries are
//! deduplicated on append and kept in first-seen order.

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const KUSTOMIZE_API: &str = "kustomize.config.k8s.io/v1beta1";
pub const COMPONENT_API: &str = "kustomize.config.k8s.io/v1alpha1";

pub const KUSTOMIZATION_FILE: &str = "kustomization.yaml";

#[derive(Debug, Error)]
pub enum Error {
	#[error("failed to read {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to write {}", path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("malformed kustomization at {}", path.display())]
	Decode {
		path: PathBuf,
		#[source]
		source: serde_yaml_with_quirks::Error,
	},

	#[error("failed to serialize kustomization for {}", path.display())]
	Encode {
		path: PathBuf,
		#[source]
		source: serde_yaml_with_quirks::Error,
	},
}

/// A kustomization (or component) manifest. Only the fields this tool
/// manages are modeled; anything else in the file is not preserved, so the
/// append primitives below decode and re-encode whole files the tool itself
/// wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kustomization {
	pub api_version: String,
	pub kind: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub resources: Vec<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub components: Vec<String>,
}

impl Kustomization {
	fn kustomization(resources: Vec<String>, components: Vec<String>) -> Self {
		Self {
			api_version: KUSTOMIZE_API.to_string(),
			kind: "Kustomization".to_string(),
			resources,
			components,
		}
	}

	fn component(resources: Vec<String>) -> Self {
		Self {
			api_version: COMPONENT_API.to_string(),
			kind: "Component".to_string(),
			resources,
			components: Vec::new(),
		}
	}
}

/// Write a fresh kustomization listing `resources` and `components` into
/// `dir/kustomization.yaml`, replacing any existing file.
pub fn write_kustomization(dir: &Path, resources: &[String], components: &[String]) -> Result<(), Error> {
	store(
		dir,
		&Kustomization::kustomization(resources.to_vec(), components.to_vec()),
	)
}

/// Write a fresh component manifest listing `resources` into
/// `dir/kustomization.yaml`.
pub fn write_component(dir: &Path, resources: &[String]) -> Result<(), Error> {
	store(dir, &Kustomization::component(resources.to_vec()))
}

/// Append `entry` to the resource list of the kustomization in `dir`.
///
/// The entry is added at most once; appending an entry that is already
/// listed leaves the file unchanged.
pub fn add_resource(dir: &Path, entry: &str) -> Result<(), Error> {
	let mut kustomization = load(dir)?;
	if !kustomization.resources.iter().any(|r| r == entry) {
		kustomization.resources.push(entry.to_string());
		store(dir, &kustomization)?;
	}
	Ok(())
}

/// Append `entry` to the component list of the kustomization in `dir`,
/// deduplicated like [`add_resource`].
pub fn add_component(dir: &Path, entry: &str) -> Result<(), Error> {
	let mut kustomization = load(dir)?;
	if !kustomization.components.iter().any(|c| c == entry) {
		kustomization.components.push(entry.to_string());
		store(dir, &kustomization)?;
	}
	Ok(())
}

/// Decode the kustomization in `dir`. A missing file is a read error here:
/// the append primitives require the kustomization to exist already.
pub fn load(dir: &Path) -> Result<Kustomization, Error> {
	let path = dir.join(KUSTOMIZATION_FILE);
	let content = fs::read_to_string(&path).map_err(|source| Error::Read {
		path: path.clone(),
		source,
	})?;
	serde_yaml_with_quirks::from_str(&content).map_err(|source| Error::Decode { path, source })
}

fn store(dir: &Path, kustomization: &Kustomization) -> Result<(), Error> {
	let path = dir.join(KUSTOMIZATION_FILE);
	let content = serde_yaml_with_quirks::to_string(kustomization).map_err(|source| Error::Encode {
		path: path.clone(),
		source,
	})?;
	fs::write(&path, content).map_err(|source| Error::Write { path, source })
}
