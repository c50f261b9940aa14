//! Validation and resolution of a settings declaration.

use std::collections::{BTreeSet, HashMap, HashSet};

use settler_core::feature::FeatureFlag;
use settler_core::module_path::ModulePath;
use settler_core::repository::RepositoryDeclaration;
use settler_core::settings::SettingsDeclaration;

use crate::error::{RepositoryScope, ResolveError};
use crate::workspace::{ResolvedModule, ResolvedWorkspace};

/// Resolves settings declarations into workspaces.
///
/// Holds no state; one instance can resolve any number of independent
/// declarations, including from several threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkspaceResolver;

impl WorkspaceResolver {
    pub fn new() -> Self {
        Self
    }

    /// Validate `declaration` and build the resolved workspace.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// root name, module paths, module accessors (when type-safe project
    /// accessors are enabled), catalog names, repository locations
    /// (plugin list before dependency list), included plugin builds.
    pub fn resolve(
        &self,
        declaration: &SettingsDeclaration,
    ) -> Result<ResolvedWorkspace, ResolveError> {
        if declaration.root_name.trim().is_empty() {
            return Err(ResolveError::InvalidName);
        }

        let mut seen = HashSet::with_capacity(declaration.modules.len());
        for path in &declaration.modules {
            if !seen.insert(path) {
                return Err(ResolveError::DuplicateModule(path.to_string()));
            }
        }

        let features: BTreeSet<FeatureFlag> =
            declaration.features.iter().copied().collect();
        let accessors = features.contains(&FeatureFlag::TypesafeProjectAccessors);

        if accessors {
            let mut owners: HashMap<String, &ModulePath> =
                HashMap::with_capacity(declaration.modules.len());
            for path in &declaration.modules {
                let accessor = path.accessor();
                if let Some(first) = owners.get(&accessor) {
                    return Err(ResolveError::DuplicateAccessor {
                        accessor,
                        first: first.to_string(),
                        second: path.to_string(),
                    });
                }
                owners.insert(accessor, path);
            }
        }

        let mut seen = HashSet::with_capacity(declaration.catalogs.len());
        for catalog in &declaration.catalogs {
            if !seen.insert(catalog.name.as_str()) {
                return Err(ResolveError::DuplicateCatalog(catalog.name.clone()));
            }
        }

        check_repositories(&declaration.plugin_repositories, RepositoryScope::Plugin)?;
        check_repositories(
            &declaration.dependency_repositories,
            RepositoryScope::Dependency,
        )?;

        let mut seen = HashSet::with_capacity(declaration.plugin_builds.len());
        for build in &declaration.plugin_builds {
            if !seen.insert(build) {
                return Err(ResolveError::DuplicateIncludedBuild(
                    build.display().to_string(),
                ));
            }
        }

        let modules = declaration
            .modules
            .iter()
            .map(|path| ResolvedModule {
                path: path.clone(),
                project_dir: path.project_dir(),
                accessor: accessors.then(|| path.accessor()),
            })
            .collect();

        let catalogs = declaration
            .catalogs
            .iter()
            .map(|c| (c.name.clone(), c.source.clone()))
            .collect();

        Ok(ResolvedWorkspace {
            root_name: declaration.root_name.clone(),
            plugin_repositories: declaration.plugin_repositories.clone(),
            dependency_repositories: declaration.dependency_repositories.clone(),
            catalogs,
            features,
            modules,
            plugin_builds: declaration.plugin_builds.clone(),
        })
    }
}

fn check_repositories(
    repos: &[RepositoryDeclaration],
    scope: RepositoryScope,
) -> Result<(), ResolveError> {
    match repos.iter().position(|r| r.location.trim().is_empty()) {
        Some(index) => Err(ResolveError::InvalidRepository { scope, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use settler_core::version_catalog::CatalogDeclaration;

    fn module(path: &str) -> ModulePath {
        ModulePath::parse(path).unwrap()
    }

    #[test]
    fn empty_root_name_is_invalid() {
        let decl = SettingsDeclaration::new("");
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::InvalidName)
        );
    }

    #[test]
    fn whitespace_root_name_is_invalid() {
        let decl = SettingsDeclaration::new("   ");
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::InvalidName)
        );
    }

    #[test]
    fn name_is_checked_before_modules() {
        let mut decl = SettingsDeclaration::new("");
        decl.modules = vec![module("demo"), module("demo")];
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::InvalidName)
        );
    }

    #[test]
    fn modules_are_checked_before_catalogs() {
        let mut decl = SettingsDeclaration::new("Demo");
        decl.modules = vec![module("a"), module("a")];
        decl.catalogs = vec![
            CatalogDeclaration::new("libs", "a.toml"),
            CatalogDeclaration::new("libs", "b.toml"),
        ];
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::DuplicateModule("a".to_string()))
        );
    }

    #[test]
    fn catalogs_are_checked_before_repositories() {
        let mut decl = SettingsDeclaration::new("Demo");
        decl.catalogs = vec![
            CatalogDeclaration::new("libs", "a.toml"),
            CatalogDeclaration::new("libs", "b.toml"),
        ];
        decl.plugin_repositories = vec![RepositoryDeclaration::named("")];
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::DuplicateCatalog("libs".to_string()))
        );
    }

    #[test]
    fn plugin_repositories_are_checked_first() {
        let mut decl = SettingsDeclaration::new("Demo");
        decl.plugin_repositories = vec![
            RepositoryDeclaration::named("mavenCentral"),
            RepositoryDeclaration::url(""),
        ];
        decl.dependency_repositories = vec![RepositoryDeclaration::named("")];
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::InvalidRepository {
                scope: RepositoryScope::Plugin,
                index: 1,
            })
        );
    }

    #[test]
    fn dependency_repository_index_is_reported() {
        let mut decl = SettingsDeclaration::new("Demo");
        decl.dependency_repositories = vec![
            RepositoryDeclaration::named(" "),
            RepositoryDeclaration::named("mavenCentral"),
        ];
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::InvalidRepository {
                scope: RepositoryScope::Dependency,
                index: 0,
            })
        );
    }

    #[test]
    fn duplicate_plugin_build_is_rejected() {
        let mut decl = SettingsDeclaration::new("Demo");
        decl.plugin_builds = vec!["build-logic".into(), "build-logic".into()];
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::DuplicateIncludedBuild("build-logic".to_string()))
        );
    }

    #[test]
    fn spaced_segment_is_the_same_module() {
        let mut decl = SettingsDeclaration::new("Demo");
        decl.modules = vec![module("libs:core"), module("libs: core")];
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::DuplicateModule("libs:core".to_string()))
        );
    }

    #[test]
    fn colliding_accessors_are_rejected_with_feature() {
        let mut decl = SettingsDeclaration::new("Demo");
        decl.modules = vec![module("code-generators"), module("code_generators")];

        assert!(WorkspaceResolver::new().resolve(&decl).is_ok());

        decl.features = vec![FeatureFlag::TypesafeProjectAccessors];
        assert_eq!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::DuplicateAccessor {
                accessor: "codeGenerators".to_string(),
                first: "code-generators".to_string(),
                second: "code_generators".to_string(),
            })
        );
    }

    #[test]
    fn accessors_are_checked_before_catalogs() {
        let mut decl = SettingsDeclaration::new("Demo");
        decl.features = vec![FeatureFlag::TypesafeProjectAccessors];
        decl.modules = vec![module("json-core"), module("json_core")];
        decl.catalogs = vec![
            CatalogDeclaration::new("libs", "a.toml"),
            CatalogDeclaration::new("libs", "b.toml"),
        ];
        assert!(matches!(
            WorkspaceResolver::new().resolve(&decl),
            Err(ResolveError::DuplicateAccessor { .. })
        ));
    }

    #[test]
    fn accessors_only_with_feature() {
        let mut decl = SettingsDeclaration::new("Demo");
        decl.modules = vec![module("code-generators")];

        let plain = WorkspaceResolver::new().resolve(&decl).unwrap();
        assert!(plain.modules()[0].accessor.is_none());

        decl.features = vec![FeatureFlag::TypesafeProjectAccessors];
        let typed = WorkspaceResolver::new().resolve(&decl).unwrap();
        assert_eq!(typed.modules()[0].accessor.as_deref(), Some("codeGenerators"));
    }

    #[test]
    fn error_converts_to_settler_error() {
        let err: settler_util::errors::SettlerError =
            ResolveError::DuplicateModule("demo".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Workspace resolution failed: module 'demo' is included more than once"
        );
    }
}
