use std::{fs, path::Path};

use indoc::indoc;
use manifests::{Group, Namespace, OnboardConfig, RoleBinding};
use otk::{config::RepoConfig, onboard::onboard_cluster, writers::RepoWriter};
use tempfile::TempDir;

/// Helper function to check that the repository contains exactly the
/// expected files.
fn check_files(dir: &Path, expected_files: &[&str]) {
	let mut actual_files: Vec<String> = Vec::new();

	for entry in walkdir::WalkDir::new(dir) {
		let entry = entry.unwrap();
		if entry.file_type().is_file() {
			let rel_path = entry
				.path()
				.strip_prefix(dir)
				.unwrap()
				.to_string_lossy()
				.to_string();
			actual_files.push(rel_path);
		}
	}

	actual_files.sort();
	let mut expected_sorted: Vec<String> = expected_files.iter().map(|s| (*s).to_string()).collect();
	expected_sorted.sort();

	assert_eq!(
		actual_files, expected_sorted,
		"\nExpected files:\n{:#?}\n\nActual files:\n{:#?}",
		expected_sorted, actual_files
	);
}

fn write_template(dir: &Path) -> std::path::PathBuf {
	let path = dir.join("onboard.yaml");
	fs::write(
		&path,
		indoc! {"
			onboardingTemplate:
			  teamName: teamx
			  namespaces:
			    - name: proj1
			      displayName: Project One
			  usernames:
			    - alice
			    - bob
			  projectDescription: Team X workloads
			  env: stage
			  cluster: c1
		"},
	)
	.unwrap();
	path
}

#[test]
fn test_onboard_cluster_end_to_end() {
	let repo = TempDir::new().unwrap();
	let config_dir = TempDir::new().unwrap();

	let template_path = write_template(config_dir.path());
	let template = OnboardConfig::from_path(&template_path)
		.unwrap()
		.onboarding_template;

	let writer = RepoWriter::new(RepoConfig::new(repo.path(), "cluster-scope"));
	onboard_cluster(&writer, &template).unwrap();

	check_files(
		repo.path(),
		&[
			"cluster-scope/base/core/namespaces/proj1/namespace.yaml",
			"cluster-scope/base/core/namespaces/proj1/kustomization.yaml",
			"cluster-scope/base/user.openshift.io/groups/teamx/group.yaml",
			"cluster-scope/base/user.openshift.io/groups/teamx/kustomization.yaml",
			"cluster-scope/components/project-admin-rolebindings/teamx/rbac.yaml",
			"cluster-scope/components/project-admin-rolebindings/teamx/kustomization.yaml",
			"cluster-scope/overlays/stage/c1/kustomization.yaml",
			"cluster-scope/overlays/stage/c1/groups/teamx.enc.yaml",
		],
	);

	// Namespace manifest carries the owning team and display name.
	let namespace: Namespace = manifests::from_path(
		&repo
			.path()
			.join("cluster-scope/base/core/namespaces/proj1/namespace.yaml"),
	)
	.unwrap();
	assert_eq!(namespace.metadata.name, "proj1");
	assert_eq!(
		namespace.metadata.annotations.get("openshift.io/requester"),
		Some(&"teamx".to_string())
	);

	// The admin role binding is named for its role and group.
	let rbac: RoleBinding = manifests::from_path(
		&repo
			.path()
			.join("cluster-scope/components/project-admin-rolebindings/teamx/rbac.yaml"),
	)
	.unwrap();
	assert_eq!(rbac.metadata.name, "namespace-admin-teamx");
	assert_eq!(rbac.subjects[0].name, "teamx");

	// The cluster overlay lists the namespace as a resource.
	let overlay = kustomize::load(&repo.path().join("cluster-scope/overlays/stage/c1")).unwrap();
	assert_eq!(
		overlay.resources,
		vec!["../../../base/core/namespaces/proj1"]
	);

	// The cluster membership file holds exactly the onboarded users.
	let membership = Group::from_path(
		&repo
			.path()
			.join("cluster-scope/overlays/stage/c1/groups/teamx.enc.yaml"),
	)
	.unwrap();
	assert_eq!(membership.users, vec!["alice", "bob"]);
}

#[test]
fn test_onboard_cluster_rerun_produces_no_changes() {
	let repo = TempDir::new().unwrap();
	let config_dir = TempDir::new().unwrap();

	let template_path = write_template(config_dir.path());
	let template = OnboardConfig::from_path(&template_path)
		.unwrap()
		.onboarding_template;

	let writer = RepoWriter::new(RepoConfig::new(repo.path(), "cluster-scope"));
	onboard_cluster(&writer, &template).unwrap();

	let snapshot: Vec<(std::path::PathBuf, String)> = walkdir::WalkDir::new(repo.path())
		.sort_by_file_name()
		.into_iter()
		.filter_map(Result::ok)
		.filter(|e| e.file_type().is_file())
		.map(|e| {
			let content = fs::read_to_string(e.path()).unwrap();
			(e.path().to_path_buf(), content)
		})
		.collect();

	onboard_cluster(&writer, &template).unwrap();

	let paths_after: Vec<std::path::PathBuf> = walkdir::WalkDir::new(repo.path())
		.sort_by_file_name()
		.into_iter()
		.filter_map(Result::ok)
		.filter(|e| e.file_type().is_file())
		.map(|e| e.path().to_path_buf())
		.collect();
	let paths_before: Vec<std::path::PathBuf> =
		snapshot.iter().map(|(path, _)| path.clone()).collect();
	assert_eq!(paths_before, paths_after);

	for (path, before) in snapshot {
		let after = fs::read_to_string(&path).unwrap();
		assert_eq!(before, after, "rerun modified {}", path.display());
	}
}
