//! Version catalogs: the declaration that names one, and the catalog file it points at.
//!
//! Catalog files use the `libs.versions.toml` layout:
//!
//! ```toml
//! [versions]
//! kotlin = "2.0.0"
//!
//! [libraries]
//! kotlin-stdlib = { module = "org.jetbrains.kotlin:kotlin-stdlib", version.ref = "kotlin" }
//! gson = "com.google.code.gson:gson:2.11.0"
//!
//! [bundles]
//! kotlin = ["kotlin-stdlib"]
//!
//! [plugins]
//! kotlin-jvm = { id = "org.jetbrains.kotlin.jvm", version.ref = "kotlin" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use settler_util::errors::SettlerError;

/// A named version catalog declared in the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDeclaration {
    pub name: String,
    /// Path to the catalog file, relative to the settings directory.
    #[serde(rename = "from")]
    pub source: PathBuf,
}

impl CatalogDeclaration {
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// The parsed contents of a catalog file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogDefinition {
    #[serde(default)]
    pub versions: BTreeMap<String, String>,
    #[serde(default)]
    pub libraries: BTreeMap<String, CatalogLibrary>,
    #[serde(default)]
    pub bundles: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub plugins: BTreeMap<String, CatalogPlugin>,
}

/// A version given literally or by reference into `[versions]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VersionSpec {
    Literal(String),
    Ref {
        #[serde(rename = "ref")]
        reference: String,
    },
}

/// A library entry in `[libraries]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogLibrary {
    /// `"group:artifact:version"` or `"group:artifact"`.
    Notation(String),
    Module {
        module: String,
        #[serde(default)]
        version: Option<VersionSpec>,
    },
    Split {
        group: String,
        name: String,
        #[serde(default)]
        version: Option<VersionSpec>,
    },
}

/// A plugin entry in `[plugins]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogPlugin {
    /// `"plugin.id:version"`.
    Notation(String),
    Detailed {
        id: String,
        #[serde(default)]
        version: Option<VersionSpec>,
    },
}

/// A library with its version reference substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLibrary {
    pub alias: String,
    pub group: String,
    pub artifact: String,
    /// `None` when the catalog leaves the version to a platform or constraint.
    pub version: Option<String>,
}

impl fmt::Display for ResolvedLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}:{}:{}", self.group, self.artifact, v),
            None => write!(f, "{}:{}", self.group, self.artifact),
        }
    }
}

/// A plugin with its version reference substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlugin {
    pub alias: String,
    pub id: String,
    pub version: Option<String>,
}

/// A fully resolved catalog, ordered by alias.
#[derive(Debug, Clone, Default)]
pub struct ResolvedCatalog {
    pub libraries: Vec<ResolvedLibrary>,
    pub bundles: BTreeMap<String, Vec<String>>,
    pub plugins: Vec<ResolvedPlugin>,
}

impl ResolvedCatalog {
    /// Look up a library by alias.
    pub fn library(&self, alias: &str) -> Option<&ResolvedLibrary> {
        self.libraries.iter().find(|l| l.alias == alias)
    }
}

impl CatalogDefinition {
    /// Parse a catalog file's contents.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            SettlerError::Catalog {
                message: format!("Failed to parse catalog: {e}"),
            }
            .into()
        })
    }

    /// Load a catalog file from disk.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SettlerError::Catalog {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        tracing::debug!("loading version catalog from {}", path.display());
        Self::from_str(&content)
    }
}

/// Substitute version references and validate bundles.
///
/// A `version.ref` naming a missing `[versions]` key, a malformed notation,
/// or a bundle naming an unknown library is an error.
pub fn resolve_catalog(catalog: &CatalogDefinition) -> miette::Result<ResolvedCatalog> {
    let lookup = |alias: &str,
                  spec: &Option<VersionSpec>|
     -> Result<Option<String>, SettlerError> {
        match spec {
            None => Ok(None),
            Some(VersionSpec::Literal(v)) => Ok(Some(v.clone())),
            Some(VersionSpec::Ref { reference }) => catalog
                .versions
                .get(reference)
                .cloned()
                .map(Some)
                .ok_or_else(|| SettlerError::Catalog {
                    message: format!("'{alias}' references unknown version '{reference}'"),
                }),
        }
    };

    let mut libraries = Vec::with_capacity(catalog.libraries.len());
    for (alias, lib) in &catalog.libraries {
        let resolved = match lib {
            CatalogLibrary::Notation(notation) => parse_library_notation(alias, notation)?,
            CatalogLibrary::Module { module, version } => {
                let (group, artifact) = match module.split(':').collect::<Vec<_>>()[..] {
                    [group, artifact] => (group, artifact),
                    _ => {
                        return Err(SettlerError::Catalog {
                            message: format!(
                                "'{alias}' has module '{module}', expected 'group:artifact'"
                            ),
                        }
                        .into())
                    }
                };
                ResolvedLibrary {
                    alias: alias.clone(),
                    group: group.to_string(),
                    artifact: artifact.to_string(),
                    version: lookup(alias.as_str(), version)?,
                }
            }
            CatalogLibrary::Split {
                group,
                name,
                version,
            } => ResolvedLibrary {
                alias: alias.clone(),
                group: group.clone(),
                artifact: name.clone(),
                version: lookup(alias.as_str(), version)?,
            },
        };
        libraries.push(resolved);
    }

    for (bundle, members) in &catalog.bundles {
        if let Some(missing) = members
            .iter()
            .find(|m| !catalog.libraries.contains_key(m.as_str()))
        {
            return Err(SettlerError::Catalog {
                message: format!("bundle '{bundle}' references unknown library '{missing}'"),
            }
            .into());
        }
    }

    let mut plugins = Vec::with_capacity(catalog.plugins.len());
    for (alias, plugin) in &catalog.plugins {
        let resolved = match plugin {
            CatalogPlugin::Notation(notation) => {
                let (id, version) = match notation.split_once(':') {
                    Some((id, v)) => (id.to_string(), Some(v.to_string())),
                    None => (notation.clone(), None),
                };
                ResolvedPlugin {
                    alias: alias.clone(),
                    id,
                    version,
                }
            }
            CatalogPlugin::Detailed { id, version } => ResolvedPlugin {
                alias: alias.clone(),
                id: id.clone(),
                version: lookup(alias.as_str(), version)?,
            },
        };
        plugins.push(resolved);
    }

    Ok(ResolvedCatalog {
        libraries,
        bundles: catalog.bundles.clone(),
        plugins,
    })
}

fn parse_library_notation(alias: &str, notation: &str) -> Result<ResolvedLibrary, SettlerError> {
    let parts: Vec<&str> = notation.split(':').collect();
    let (group, artifact, version) = match parts.as_slice() {
        [g, a] => (*g, *a, None),
        [g, a, v] => (*g, *a, Some(v.to_string())),
        _ => {
            return Err(SettlerError::Catalog {
                message: format!(
                    "'{alias}' has notation '{notation}', expected 'group:artifact[:version]'"
                ),
            })
        }
    };
    Ok(ResolvedLibrary {
        alias: alias.to_string(),
        group: group.to_string(),
        artifact: artifact.to_string(),
        version,
    })
}
