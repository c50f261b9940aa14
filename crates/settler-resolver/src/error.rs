use miette::Diagnostic;
use settler_util::errors::SettlerError;
use std::fmt;
use thiserror::Error;

/// Which repository list a declaration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryScope {
    Plugin,
    Dependency,
}

impl fmt::Display for RepositoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryScope::Plugin => f.write_str("plugin"),
            RepositoryScope::Dependency => f.write_str("dependency"),
        }
    }
}

/// Why a settings declaration could not be resolved.
///
/// Only the first failure is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ResolveError {
    /// The root project name is empty.
    #[error("root project name must not be empty")]
    #[diagnostic(help("Set `name` in the [project] section"))]
    InvalidName,

    /// The same module path is included more than once.
    #[error("module '{0}' is included more than once")]
    DuplicateModule(String),

    /// Two modules map to the same type-safe project accessor.
    #[error("modules '{first}' and '{second}' both generate accessor 'projects.{accessor}'")]
    #[diagnostic(help("Rename one of the modules or disable TYPESAFE_PROJECT_ACCESSORS"))]
    DuplicateAccessor {
        accessor: String,
        first: String,
        second: String,
    },

    /// Two catalogs share a name.
    #[error("version catalog '{0}' is declared more than once")]
    DuplicateCatalog(String),

    /// A repository declaration has an empty location.
    #[error("{scope} repository #{index} has an empty location")]
    InvalidRepository { scope: RepositoryScope, index: usize },

    /// The same plugin build is included more than once.
    #[error("plugin build '{0}' is included more than once")]
    DuplicateIncludedBuild(String),
}

impl From<ResolveError> for SettlerError {
    fn from(err: ResolveError) -> Self {
        SettlerError::Resolution {
            message: err.to_string(),
        }
    }
}
