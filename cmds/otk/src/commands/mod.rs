//! Command handlers.

use std::path::PathBuf;

use clap::Args;

use crate::config::RepoConfig;

pub mod create_project;
pub mod grant_access;
pub mod onboard;

/// Arguments locating the repository checkout, shared by every command.
#[derive(Args)]
pub struct RepoArgs {
	/// Path to the GitOps repository checkout
	#[arg(long, default_value = ".")]
	pub repo_dir: PathBuf,

	/// Application directory inside the repository (overrides the config file)
	#[arg(long)]
	pub app_name: Option<String>,
}

impl RepoArgs {
	pub fn config(&self) -> anyhow::Result<RepoConfig> {
		RepoConfig::load(&self.repo_dir, self.app_name.clone())
	}
}
