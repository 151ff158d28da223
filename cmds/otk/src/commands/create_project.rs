//! Create-project command handler.

use anyhow::Result;
use clap::Args;

use crate::{commands::RepoArgs, writers::RepoWriter};

#[derive(Args)]
pub struct CreateProjectArgs {
	/// Name of the new project namespace
	pub project: String,

	/// Group that owns the project
	pub owner: String,

	/// Project description
	#[arg(short = 'd', long, default_value = "")]
	pub description: String,

	#[command(flatten)]
	pub repo: RepoArgs,

	/// Log level (possible values: error, warn, info, debug, trace)
	#[arg(long, default_value = "info")]
	pub log_level: String,
}

/// Run the create-project command.
///
/// Creating a project is strict: an existing namespace is an error here,
/// unlike the onboarding path. The owner group is created alongside it when
/// missing.
pub fn run(args: CreateProjectArgs) -> Result<()> {
	let writer = RepoWriter::new(args.repo.config()?);

	writer.create_namespace(&args.project, &args.owner, &args.description, false)?;
	writer.create_role_binding(&args.owner, "admin")?;
	writer.create_group(&args.owner, true)?;

	Ok(())
}
