//! Repository declarations for plugin and dependency resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maven Central base URL.
pub const MAVEN_CENTRAL_URL: &str = "https://repo.maven.apache.org/maven2";

/// Gradle Plugin Portal base URL.
pub const GRADLE_PLUGIN_PORTAL_URL: &str = "https://plugins.gradle.org/m2";

/// Google's Maven repository.
pub const GOOGLE_MAVEN_URL: &str = "https://dl.google.com/dl/android/maven2";

/// Repositories that can be referenced by name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellKnownRepository {
    MavenCentral,
    GradlePluginPortal,
    Google,
}

impl WellKnownRepository {
    /// Look up a well-known repository by the name used in `settings.toml`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mavenCentral" => Some(Self::MavenCentral),
            "gradlePluginPortal" => Some(Self::GradlePluginPortal),
            "google" => Some(Self::Google),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::MavenCentral => "mavenCentral",
            Self::GradlePluginPortal => "gradlePluginPortal",
            Self::Google => "google",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            Self::MavenCentral => MAVEN_CENTRAL_URL,
            Self::GradlePluginPortal => GRADLE_PLUGIN_PORTAL_URL,
            Self::Google => GOOGLE_MAVEN_URL,
        }
    }
}

/// How a repository is addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryKind {
    /// Referenced by a well-known name (`mavenCentral`).
    Named,
    /// Referenced by URL (`https://jitpack.io`).
    Url,
}

/// A repository as it appears in a settings file: a bare name or a `{ url = ... }` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RepositoryEntry {
    Named(String),
    Url { url: String },
}

/// One entry of a plugin or dependency repository list.
///
/// The priority of a declaration is its position in the declaring list:
/// the first entry is consulted first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RepositoryEntry")]
pub struct RepositoryDeclaration {
    pub kind: RepositoryKind,
    pub location: String,
}

impl RepositoryDeclaration {
    /// A repository referenced by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            kind: RepositoryKind::Named,
            location: name.into(),
        }
    }

    /// A repository referenced by URL. A trailing `/` is dropped.
    pub fn url(url: &str) -> Self {
        Self {
            kind: RepositoryKind::Url,
            location: url.trim_end_matches('/').to_string(),
        }
    }

    /// The well-known repository this declaration names, if any.
    pub fn well_known(&self) -> Option<WellKnownRepository> {
        match self.kind {
            RepositoryKind::Named => WellKnownRepository::from_name(&self.location),
            RepositoryKind::Url => None,
        }
    }

    /// The URL artifacts are fetched from, when it is known without consulting the engine.
    pub fn resolved_url(&self) -> Option<&str> {
        match self.kind {
            RepositoryKind::Url => Some(&self.location),
            RepositoryKind::Named => self.well_known().map(|r| r.url()),
        }
    }
}

impl From<RepositoryEntry> for RepositoryDeclaration {
    fn from(entry: RepositoryEntry) -> Self {
        match entry {
            RepositoryEntry::Named(name) => Self::named(name),
            RepositoryEntry::Url { url } => Self::url(&url),
        }
    }
}

impl fmt::Display for RepositoryDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.kind, self.resolved_url()) {
            (RepositoryKind::Named, Some(url)) => write!(f, "{} ({url})", self.location),
            _ => f.write_str(&self.location),
        }
    }
}
