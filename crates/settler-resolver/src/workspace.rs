use serde::Serialize;
use settler_core::feature::FeatureFlag;
use settler_core::module_path::ModulePath;
use settler_core::repository::RepositoryDeclaration;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// A module of the resolved workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedModule {
    pub path: ModulePath,
    /// Source directory, relative to the workspace root.
    pub project_dir: PathBuf,
    /// Type-safe accessor name, present only when the feature is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessor: Option<String>,
}

/// The resolved build graph for one build invocation.
///
/// Only [`WorkspaceResolver`](crate::WorkspaceResolver) constructs this; it is
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedWorkspace {
    pub(crate) root_name: String,
    pub(crate) plugin_repositories: Vec<RepositoryDeclaration>,
    pub(crate) dependency_repositories: Vec<RepositoryDeclaration>,
    pub(crate) catalogs: BTreeMap<String, PathBuf>,
    pub(crate) features: BTreeSet<FeatureFlag>,
    pub(crate) modules: Vec<ResolvedModule>,
    pub(crate) plugin_builds: Vec<PathBuf>,
}

impl ResolvedWorkspace {
    pub fn root_name(&self) -> &str {
        &self.root_name
    }

    /// Plugin repositories, highest priority first.
    pub fn plugin_repositories(&self) -> &[RepositoryDeclaration] {
        &self.plugin_repositories
    }

    /// Dependency repositories, highest priority first.
    pub fn dependency_repositories(&self) -> &[RepositoryDeclaration] {
        &self.dependency_repositories
    }

    /// Catalog name to catalog source, as declared.
    pub fn catalogs(&self) -> &BTreeMap<String, PathBuf> {
        &self.catalogs
    }

    pub fn catalog(&self, name: &str) -> Option<&Path> {
        self.catalogs.get(name).map(PathBuf::as_path)
    }

    pub fn features(&self) -> &BTreeSet<FeatureFlag> {
        &self.features
    }

    pub fn has_feature(&self, flag: FeatureFlag) -> bool {
        self.features.contains(&flag)
    }

    /// Modules in declaration order.
    pub fn modules(&self) -> &[ResolvedModule] {
        &self.modules
    }

    pub fn module(&self, path: &ModulePath) -> Option<&ResolvedModule> {
        self.modules.iter().find(|m| &m.path == path)
    }

    pub fn module_paths(&self) -> impl Iterator<Item = &ModulePath> {
        self.modules.iter().map(|m| &m.path)
    }

    pub fn plugin_builds(&self) -> &[PathBuf] {
        &self.plugin_builds
    }

    /// `true` when the workspace is just the root project.
    pub fn is_single_module(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Display for ResolvedWorkspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Root project: {}", self.root_name)?;

        if !self.features.is_empty() {
            let names: Vec<&str> = self.features.iter().map(|flag| flag.as_str()).collect();
            writeln!(f, "Features: {}", names.join(", "))?;
        }

        writeln!(f, "Modules ({}):", self.modules.len())?;
        for m in &self.modules {
            write!(f, "  {} -> {}", m.path, m.project_dir.display())?;
            if let Some(accessor) = &m.accessor {
                write!(f, " (projects.{accessor})")?;
            }
            writeln!(f)?;
        }

        for (title, repos) in [
            ("Plugin repositories", &self.plugin_repositories),
            ("Dependency repositories", &self.dependency_repositories),
        ] {
            writeln!(f, "{title} ({}):", repos.len())?;
            for (i, repo) in repos.iter().enumerate() {
                writeln!(f, "  {}. {repo}", i + 1)?;
            }
        }

        if !self.plugin_builds.is_empty() {
            writeln!(f, "Included plugin builds ({}):", self.plugin_builds.len())?;
            for build in &self.plugin_builds {
                writeln!(f, "  {}", build.display())?;
            }
        }

        if !self.catalogs.is_empty() {
            writeln!(f, "Catalogs ({}):", self.catalogs.len())?;
            for (name, source) in &self.catalogs {
                writeln!(f, "  {name} -> {}", source.display())?;
            }
        }
        Ok(())
    }
}
