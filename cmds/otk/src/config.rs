//! Configuration for the onboarding toolkit.
//!
//! The app name (the top-level directory inside the repository that every
//! manifest lives under) resolves in order of precedence: the `--app-name`
//! flag, an `.otk.yaml` file found by searching from the repository directory
//! upward, then the default. Everything downstream receives the resolved
//! [`RepoConfig`] explicitly; nothing reads ambient configuration at call
//! time.

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;

/// The name of the config file otk looks for.
pub const CONFIG_FILE_NAME: &str = ".otk.yaml";

/// App directory used when neither flag nor config file supplies one.
pub const DEFAULT_APP_NAME: &str = "cluster-scope";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
	#[serde(default)]
	app_name: Option<String>,
}

/// Resolved configuration threaded through every writer.
#[derive(Debug, Clone)]
pub struct RepoConfig {
	/// Root of the GitOps repository checkout.
	pub repo_dir: PathBuf,
	/// Top-level application directory inside the repository.
	pub app_name: String,
}

impl RepoConfig {
	pub fn new(repo_dir: impl Into<PathBuf>, app_name: impl Into<String>) -> Self {
		Self {
			repo_dir: repo_dir.into(),
			app_name: app_name.into(),
		}
	}

	/// Resolve configuration for `repo_dir`, honoring an explicit app-name
	/// override.
	pub fn load(repo_dir: &Path, app_name: Option<String>) -> Result<Self> {
		if let Some(app_name) = app_name {
			return Ok(Self::new(repo_dir, app_name));
		}

		let from_file = match find_config_file(repo_dir) {
			Some(path) => load_config_file(&path)?.app_name,
			None => None,
		};

		Ok(Self::new(
			repo_dir,
			from_file.unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
		))
	}
}

fn load_config_file(path: &Path) -> Result<ConfigFile> {
	let content = fs::read_to_string(path)
		.with_context(|| format!("failed to read config file: {}", path.display()))?;
	let config: ConfigFile = serde_yaml_with_quirks::from_str(&content)
		.with_context(|| format!("failed to parse config file: {}", path.display()))?;
	Ok(config)
}

/// Search for a config file starting from `start_dir` and walking up to the
/// filesystem root.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
	let mut current = start_dir.to_path_buf();

	if let Ok(canonical) = current.canonicalize() {
		current = canonical;
	}

	loop {
		let config_path = current.join(CONFIG_FILE_NAME);
		if config_path.exists() {
			return Some(config_path);
		}

		if !current.pop() {
			return None;
		}
	}
}
