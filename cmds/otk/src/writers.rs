//! Idempotent manifest writers.
//!
//! Every writer follows the same state machine: resolve the canonical
//! directory for the resource, use that directory's existence as the
//! create-or-skip signal, and on create write the manifest plus the
//! kustomization entry wiring it into its parent.
//!
//! The existence check is on the directory, not the manifest file inside it.
//! A directory that exists without its manifest (for example after an
//! interrupted run) still counts as "already exists" and is skipped; reruns
//! do not repair it.

use std::{
	fs, io,
	path::{Path, PathBuf},
};

use manifests::{Group, Namespace, RoleBinding};
use thiserror::Error;
use tracing::info;

use crate::{
	config::RepoConfig,
	layout::{RepoLayout, GROUP_FILE, NAMESPACE_FILE, RBAC_FILE},
};

/// Roles a group may be granted on a namespace.
pub const VALID_ROLES: &[&str] = &["admin", "view", "edit"];

#[derive(Debug, Error)]
pub enum WriteError {
	#[error("{kind} {name} already exists")]
	AlreadyExists { kind: &'static str, name: String },

	#[error("{kind} {name} does not exist")]
	NotFound { kind: &'static str, name: String },

	#[error("no such role named {0:?}")]
	InvalidRole(String),

	#[error("failed to check {}", path.display())]
	Stat {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to create directory {}", path.display())]
	CreateDir {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to write {}", path.display())]
	WriteFile {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error(transparent)]
	Manifest(#[from] manifests::Error),

	#[error(transparent)]
	Kustomize(#[from] kustomize::Error),
}

/// Writes manifests into a GitOps repository checkout.
pub struct RepoWriter {
	config: RepoConfig,
	layout: RepoLayout,
}

impl RepoWriter {
	pub fn new(config: RepoConfig) -> Self {
		Self {
			config,
			layout: RepoLayout::default(),
		}
	}

	fn repo_path(&self, rel: PathBuf) -> PathBuf {
		self.config.repo_dir.join(rel)
	}

	fn app(&self) -> &str {
		&self.config.app_name
	}

	/// Create the namespace manifest for `project` and wire it to the admin
	/// role binding component for `owner`.
	///
	/// With `exists_ok` the writer skips an existing namespace; without it,
	/// an existing namespace is an error.
	pub fn create_namespace(
		&self,
		project: &str,
		owner: &str,
		description: &str,
		exists_ok: bool,
	) -> Result<(), WriteError> {
		let dir = self.repo_path(self.layout.namespace_dir(self.app(), project));

		if path_exists(&dir)? {
			if exists_ok {
				info!("namespace {} already exists (continuing)", project);
				return Ok(());
			}
			return Err(WriteError::AlreadyExists {
				kind: "namespace",
				name: project.to_string(),
			});
		}

		let namespace = Namespace::new(project, owner, description)?;
		let out = manifests::to_yaml(&namespace)?;

		info!("writing namespace definition to {}", dir.display());
		create_dir_all(&dir)?;
		write_file(
			&self.repo_path(self.layout.namespace_manifest(self.app(), project)),
			&out,
		)?;

		kustomize::write_kustomization(
			&dir,
			&[NAMESPACE_FILE.to_string()],
			&[self.layout.component_ref("admin", owner)],
		)?;

		Ok(())
	}

	/// Create the binding granting `role` to `group`, shared under the
	/// `project-<role>-rolebindings` component.
	///
	/// An existing binding is never an error: onboarding runs legitimately
	/// re-grant the same role.
	pub fn create_role_binding(&self, group: &str, role: &str) -> Result<(), WriteError> {
		let dir = self.repo_path(self.layout.role_binding_dir(self.app(), role, group));

		if path_exists(&dir)? {
			info!("rolebinding already exists (continuing)");
			return Ok(());
		}

		let mut rbac = RoleBinding::new(&format!("namespace-{role}-{group}"), role)?;
		rbac.add_group(group);
		let out = manifests::to_yaml(&rbac)?;

		info!("writing rbac definition to {}", dir.display());
		create_dir_all(&dir)?;
		write_file(
			&self.repo_path(self.layout.role_binding_manifest(self.app(), role, group)),
			&out,
		)?;

		kustomize::write_component(&dir, &[RBAC_FILE.to_string()])?;

		Ok(())
	}

	/// Create the repo-wide group manifest for `group`.
	pub fn create_group(&self, group: &str, exists_ok: bool) -> Result<(), WriteError> {
		let dir = self.repo_path(self.layout.group_dir(self.app(), group));

		if path_exists(&dir)? {
			if exists_ok {
				info!("group {} already exists (continuing)", group);
				return Ok(());
			}
			return Err(WriteError::AlreadyExists {
				kind: "group",
				name: group.to_string(),
			});
		}

		let manifest = Group::new(group)?;
		let out = manifests::to_yaml(&manifest)?;

		info!("writing group definition to {}", dir.display());
		create_dir_all(&dir)?;
		write_file(
			&self.repo_path(self.layout.group_manifest(self.app(), group)),
			&out,
		)?;

		kustomize::write_kustomization(&dir, &[GROUP_FILE.to_string()], &[])?;

		Ok(())
	}

	/// Grant `group` the given role on `project`.
	///
	/// Both the namespace and the group must already exist in the repository.
	/// This is a referential-integrity check, not a filesystem race guard.
	pub fn add_group_rbac(&self, project: &str, group: &str, role: &str) -> Result<(), WriteError> {
		if !VALID_ROLES.contains(&role) {
			return Err(WriteError::InvalidRole(role.to_string()));
		}

		let namespace_dir = self.repo_path(self.layout.namespace_dir(self.app(), project));
		let group_dir = self.repo_path(self.layout.group_dir(self.app(), group));

		if !path_exists(&namespace_dir)? {
			return Err(WriteError::NotFound {
				kind: "namespace",
				name: project.to_string(),
			});
		}

		if !path_exists(&group_dir)? {
			return Err(WriteError::NotFound {
				kind: "group",
				name: group.to_string(),
			});
		}

		self.create_role_binding(group, role)?;

		info!("granting {} role {} on {}", group, role, project);
		kustomize::add_component(&namespace_dir, &self.layout.component_ref(role, group))?;

		Ok(())
	}

	/// Register `namespace` as a kustomize resource in the cluster overlay,
	/// seeding the overlay kustomization when its environment directory does
	/// not exist yet.
	pub fn add_namespace_to_cluster(
		&self,
		namespace: &str,
		env: &str,
		cluster: &str,
	) -> Result<(), WriteError> {
		let overlay_dir = self.repo_path(self.layout.cluster_overlay_dir(self.app(), env, cluster));
		let namespace_ref = self.layout.namespace_resource_ref(namespace);

		// Seeding keys off the overlay's parent (the environment directory),
		// not the cluster directory itself.
		let env_exists = match overlay_dir.parent() {
			Some(parent) => path_exists(parent)?,
			None => false,
		};

		if !env_exists {
			info!("kustomization for overlay does not exist, creating");
			create_dir_all(&overlay_dir)?;
			kustomize::write_kustomization(&overlay_dir, &[namespace_ref.clone()], &[])?;
		}

		kustomize::add_resource(&overlay_dir, &namespace_ref)?;

		Ok(())
	}

	/// Merge `users` into the membership file for `group` on a cluster.
	///
	/// Existing members are preserved in place, new members are appended in
	/// first-appearance order, and nothing is ever removed. The file is
	/// created when absent, seeded with exactly the incoming users.
	pub fn add_group_to_cluster(
		&self,
		group: &str,
		env: &str,
		cluster: &str,
		users: &[String],
	) -> Result<(), WriteError> {
		let path = self.repo_path(
			self.layout
				.cluster_group_manifest(self.app(), env, cluster, group),
		);

		let manifest = if path_exists(&path)? {
			info!(
				"group {} in cluster {} already exists, appending to existing user list",
				group, cluster
			);
			let mut manifest = Group::from_path(&path)?;
			for user in users {
				if !manifest.contains(user) {
					manifest.users.push(user.clone());
				}
			}
			manifest
		} else {
			let dir = self.repo_path(self.layout.cluster_groups_dir(self.app(), env, cluster));
			if !path_exists(&dir)? {
				info!(
					"group directory for cluster not found, creating {}",
					dir.display()
				);
				create_dir_all(&dir)?;
			}
			let mut manifest = Group::new(group)?;
			manifest.users = users.to_vec();
			manifest
		};

		let out = manifests::to_yaml(&manifest)?;
		write_file(&path, &out)?;

		Ok(())
	}
}

fn path_exists(path: &Path) -> Result<bool, WriteError> {
	path.try_exists().map_err(|source| WriteError::Stat {
		path: path.to_path_buf(),
		source,
	})
}

fn create_dir_all(path: &Path) -> Result<(), WriteError> {
	fs::create_dir_all(path).map_err(|source| WriteError::CreateDir {
		path: path.to_path_buf(),
		source,
	})
}

fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
	fs::write(path, content).map_err(|source| WriteError::WriteFile {
		path: path.to_path_buf(),
		source,
	})
}
