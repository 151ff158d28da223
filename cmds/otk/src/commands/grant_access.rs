//! Grant-access command handler.

use anyhow::Result;
use clap::Args;

use crate::{commands::RepoArgs, writers::RepoWriter};

#[derive(Args)]
pub struct GrantAccessArgs {
	/// Project namespace receiving the grant
	pub project: String,

	/// Group being granted the role
	pub group: String,

	/// Role to grant (admin, view, edit)
	pub role: String,

	#[command(flatten)]
	pub repo: RepoArgs,

	/// Log level (possible values: error, warn, info, debug, trace)
	#[arg(long, default_value = "info")]
	pub log_level: String,
}

/// Run the grant-access command.
pub fn run(args: GrantAccessArgs) -> Result<()> {
	let writer = RepoWriter::new(args.repo.config()?);
	writer.add_group_rbac(&args.project, &args.group, &args.role)?;
	Ok(())
}
