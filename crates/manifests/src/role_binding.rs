//! The RoleBinding manifest.

use serde::{Deserialize, Serialize};

use crate::{Error, Metadata};

pub const API_VERSION: &str = "rbac.authorization.k8s.io/v1";
pub const KIND: &str = "RoleBinding";

const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRef {
	pub api_group: String,
	pub kind: String,
	pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
	pub api_group: String,
	pub kind: String,
	pub name: String,
}

/// A binding of groups to a cluster role on a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBinding {
	pub api_version: String,
	pub kind: String,
	pub metadata: Metadata,
	pub role_ref: RoleRef,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub subjects: Vec<Subject>,
}

impl RoleBinding {
	/// Create a role binding granting the cluster role `role`.
	pub fn new(name: &str, role: &str) -> Result<Self, Error> {
		if name.is_empty() {
			return Err(Error::MissingField {
				kind: "role binding",
				field: "a name",
			});
		}
		if role.is_empty() {
			return Err(Error::MissingField {
				kind: "role binding",
				field: "a role",
			});
		}

		Ok(Self {
			api_version: API_VERSION.to_string(),
			kind: KIND.to_string(),
			metadata: Metadata::named(name),
			role_ref: RoleRef {
				api_group: RBAC_API_GROUP.to_string(),
				kind: "ClusterRole".to_string(),
				name: role.to_string(),
			},
			subjects: Vec::new(),
		})
	}

	/// Bind a group to the role.
	pub fn add_group(&mut self, name: &str) {
		self.subjects.push(Subject {
			api_group: RBAC_API_GROUP.to_string(),
			kind: "Group".to_string(),
			name: name.to_string(),
		});
	}
}
