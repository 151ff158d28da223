//! The onboarding template.
//!
//! A request object read once per onboarding run and never written back.
//! Missing fields take empty/zero defaults so partial templates decode
//! without error.

use std::path::Path;

use serde::Deserialize;

use crate::Error;

/// Top-level onboarding config file, wrapping the template under its
/// `onboardingTemplate` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardConfig {
	pub onboarding_template: OnboardingTemplate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingTemplate {
	pub team_name: String,
	pub namespaces: Vec<NamespaceSpec>,
	pub usernames: Vec<String>,
	pub project_description: String,
	pub env: String,
	pub cluster: String,
	// Parsed for template fidelity; encrypting cluster group files is
	// handled by tooling outside this repository.
	pub pgp_keys: Vec<String>,
}

/// One namespace requested by the template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamespaceSpec {
	pub name: String,
	pub quota: String,
	pub enable_monitoring: bool,
	pub display_name: String,
}

impl OnboardConfig {
	/// Decode an onboarding config from the file at `path`.
	pub fn from_path(path: &Path) -> Result<Self, Error> {
		crate::from_path(path)
	}
}
