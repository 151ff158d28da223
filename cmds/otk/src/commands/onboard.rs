//! Onboard command handlers.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use manifests::OnboardConfig;

use crate::{commands::RepoArgs, onboard, writers::RepoWriter};

#[derive(Args)]
pub struct OnboardArgs {
	#[command(subcommand)]
	pub command: OnboardCommands,
}

#[derive(Subcommand)]
pub enum OnboardCommands {
	/// Onboard a team onto a cluster
	///
	/// Creates the manifests necessary to onboard a team: its namespaces,
	/// the admin role binding, the team group, and the cluster membership
	/// file. Manifests that already exist are skipped or merged.
	Cluster(ClusterArgs),
}

#[derive(Args)]
pub struct ClusterArgs {
	/// Onboarding template file (required)
	#[arg(long)]
	pub onboard_config: PathBuf,

	#[command(flatten)]
	pub repo: RepoArgs,

	/// Log level (possible values: error, warn, info, debug, trace)
	#[arg(long, default_value = "info")]
	pub log_level: String,
}

/// Run the onboard command.
pub fn run(args: OnboardArgs) -> Result<()> {
	match args.command {
		OnboardCommands::Cluster(args) => run_cluster(args),
	}
}

fn run_cluster(args: ClusterArgs) -> Result<()> {
	let config = OnboardConfig::from_path(&args.onboard_config).with_context(|| {
		format!(
			"failed to load onboarding config {}",
			args.onboard_config.display()
		)
	})?;

	let writer = RepoWriter::new(args.repo.config()?);
	onboard::onboard_cluster(&writer, &config.onboarding_template)?;

	Ok(())
}
