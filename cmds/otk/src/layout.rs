//! Repository layout convention.
//!
//! Pure mapping from (app name, resource kind, resource name, environment,
//! cluster) to the canonical location inside the GitOps repository. The path
//! segments are fixed by the directory convention the sync tooling consumes;
//! any deviation breaks repositories that already follow it.

use std::path::PathBuf;

/// Manifest file names within their resource directories.
pub const NAMESPACE_FILE: &str = "namespace.yaml";
pub const GROUP_FILE: &str = "group.yaml";
pub const RBAC_FILE: &str = "rbac.yaml";

/// The fixed path segments of the repository convention.
///
/// `component_rel_path` is the route from a namespace directory up to the
/// components tree; `app_root_rel_path` is the route from a cluster overlay
/// directory up to the app root. Both are baked into kustomize references,
/// so they must stay consistent with the absolute segments above.
#[derive(Debug, Clone)]
pub struct RepoLayout {
	pub namespace_path: &'static str,
	pub group_path: &'static str,
	pub component_path: &'static str,
	pub overlays_path: &'static str,
	pub component_rel_path: &'static str,
	pub app_root_rel_path: &'static str,
}

impl Default for RepoLayout {
	fn default() -> Self {
		Self {
			namespace_path: "base/core/namespaces",
			group_path: "base/user.openshift.io/groups",
			component_path: "components",
			overlays_path: "overlays",
			component_rel_path: "../../../../components",
			app_root_rel_path: "../../..",
		}
	}
}

impl RepoLayout {
	/// Directory holding the manifest for a project namespace.
	pub fn namespace_dir(&self, app: &str, project: &str) -> PathBuf {
		PathBuf::from(app).join(self.namespace_path).join(project)
	}

	pub fn namespace_manifest(&self, app: &str, project: &str) -> PathBuf {
		self.namespace_dir(app, project).join(NAMESPACE_FILE)
	}

	/// Directory holding the manifest for a repo-wide group.
	pub fn group_dir(&self, app: &str, group: &str) -> PathBuf {
		PathBuf::from(app).join(self.group_path).join(group)
	}

	pub fn group_manifest(&self, app: &str, group: &str) -> PathBuf {
		self.group_dir(app, group).join(GROUP_FILE)
	}

	/// Shared binding name for all grants of `role`: `project-<role>-rolebindings`.
	pub fn binding_name(&self, role: &str) -> String {
		format!("project-{role}-rolebindings")
	}

	/// Directory holding one group's binding under the shared binding name.
	pub fn role_binding_dir(&self, app: &str, role: &str, group: &str) -> PathBuf {
		PathBuf::from(app)
			.join(self.component_path)
			.join(self.binding_name(role))
			.join(group)
	}

	pub fn role_binding_manifest(&self, app: &str, role: &str, group: &str) -> PathBuf {
		self.role_binding_dir(app, role, group).join(RBAC_FILE)
	}

	/// Directory holding a cluster overlay's kustomization.
	pub fn cluster_overlay_dir(&self, app: &str, env: &str, cluster: &str) -> PathBuf {
		PathBuf::from(app)
			.join(self.overlays_path)
			.join(env)
			.join(cluster)
	}

	/// Directory holding a cluster's group membership files.
	pub fn cluster_groups_dir(&self, app: &str, env: &str, cluster: &str) -> PathBuf {
		self.cluster_overlay_dir(app, env, cluster).join("groups")
	}

	/// Membership file for `group` on a cluster.
	pub fn cluster_group_manifest(&self, app: &str, env: &str, cluster: &str, group: &str) -> PathBuf {
		self.cluster_groups_dir(app, env, cluster)
			.join(format!("{group}.enc.yaml"))
	}

	/// Kustomize resource entry pointing at a namespace from a cluster overlay.
	pub fn namespace_resource_ref(&self, project: &str) -> String {
		format!("{}/{}/{}", self.app_root_rel_path, self.namespace_path, project)
	}

	/// Kustomize component entry pointing at a role binding from a namespace
	/// directory.
	pub fn component_ref(&self, role: &str, group: &str) -> String {
		format!(
			"{}/{}/{}",
			self.component_rel_path,
			self.binding_name(role),
			group
		)
	}
}
