use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::feature::FeatureFlag;
use crate::module_path::ModulePath;
use crate::repository::RepositoryDeclaration;
use crate::version_catalog::CatalogDeclaration;

/// A parsed build-settings declaration: what a `settings.toml` says, before
/// any validation.
///
/// Lists keep their declared order. Duplicates are kept as written so the
/// resolver can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDeclaration {
    pub root_name: String,
    pub features: Vec<FeatureFlag>,
    pub plugin_repositories: Vec<RepositoryDeclaration>,
    pub dependency_repositories: Vec<RepositoryDeclaration>,
    pub catalogs: Vec<CatalogDeclaration>,
    pub modules: Vec<ModulePath>,
    /// Builds whose plugins are made available to plugin resolution.
    pub plugin_builds: Vec<PathBuf>,
}

/// On-disk layout of `settings.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SettingsFile {
    project: ProjectSection,
    #[serde(default)]
    plugin_management: PluginManagementSection,
    #[serde(default)]
    dependency_resolution: DependencyResolutionSection,
    #[serde(default)]
    catalogs: Vec<CatalogDeclaration>,
}

/// The `[project]` section.
#[derive(Debug, Clone, Deserialize)]
struct ProjectSection {
    name: String,
    #[serde(default)]
    features: Vec<FeatureFlag>,
    #[serde(default)]
    include: Vec<ModulePath>,
}

/// The `[plugin-management]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PluginManagementSection {
    #[serde(default)]
    repositories: Vec<RepositoryDeclaration>,
    #[serde(default)]
    include_builds: Vec<PathBuf>,
}

/// The `[dependency-resolution]` section.
#[derive(Debug, Clone, Default, Deserialize)]
struct DependencyResolutionSection {
    #[serde(default)]
    repositories: Vec<RepositoryDeclaration>,
}

impl From<SettingsFile> for SettingsDeclaration {
    fn from(file: SettingsFile) -> Self {
        Self {
            root_name: file.project.name,
            features: file.project.features,
            plugin_repositories: file.plugin_management.repositories,
            dependency_repositories: file.dependency_resolution.repositories,
            catalogs: file.catalogs,
            modules: file.project.include,
            plugin_builds: file.plugin_management.include_builds,
        }
    }
}

impl SettingsDeclaration {
    /// An empty declaration for the given root project.
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            root_name: root_name.into(),
            ..Self::default()
        }
    }

    /// Load and parse a settings file from the given path.
    ///
    /// `${env:VAR}` references are resolved from the process environment
    /// before parsing.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            settler_util::errors::SettlerError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        tracing::debug!("loading settings from {}", path.display());

        let resolved = crate::properties::interpolate(&content);
        Self::from_str(&resolved)
    }

    /// Parse a settings file from a string (no interpolation).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> miette::Result<Self> {
        let file: SettingsFile = toml::from_str(content).map_err(|e| {
            settler_util::errors::SettlerError::Manifest {
                message: format!("Failed to parse settings.toml: {e}"),
            }
        })?;
        let declaration = Self::from(file);
        tracing::debug!(
            root = %declaration.root_name,
            modules = declaration.modules.len(),
            catalogs = declaration.catalogs.len(),
            "parsed settings declaration"
        );
        Ok(declaration)
    }
}
