//! Cluster onboarding sequence.
//!
//! Drives the writers in a fixed order to bring a team's namespaces, role
//! bindings, and group membership into existence for a target cluster. The
//! sequence fails fast: the first error aborts the run, already-written
//! files stay on disk, and an identical rerun picks up where it left off
//! through the exists-ok skip paths.

use manifests::OnboardingTemplate;
use tracing::info;

use crate::writers::{RepoWriter, WriteError};

/// The role granted to the onboarded team on its namespaces.
const TEAM_ROLE: &str = "admin";

pub fn onboard_cluster(writer: &RepoWriter, template: &OnboardingTemplate) -> Result<(), WriteError> {
	let team = &template.team_name;

	info!(
		"onboarding team {} onto cluster {}/{}",
		team, template.env, template.cluster
	);

	for namespace in &template.namespaces {
		writer.create_namespace(&namespace.name, team, &namespace.display_name, true)?;
		writer.add_namespace_to_cluster(&namespace.name, &template.env, &template.cluster)?;
	}

	writer.create_role_binding(team, TEAM_ROLE)?;
	writer.create_group(team, true)?;
	writer.add_group_to_cluster(team, &template.env, &template.cluster, &template.usernames)?;

	Ok(())
}
