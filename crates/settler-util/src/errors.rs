use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for Settler operations outside the resolver itself.
#[derive(Debug, Error, Diagnostic)]
pub enum SettlerError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed settings declaration (e.g. settings.toml).
    #[error("Settings error: {message}")]
    #[diagnostic(help("Check your settings.toml for syntax errors"))]
    Manifest { message: String },

    /// The declaration parsed but could not be resolved into a workspace.
    #[error("Workspace resolution failed: {message}")]
    #[diagnostic(help("Fix the declaration in settings.toml and run again"))]
    Resolution { message: String },

    /// A version catalog file is missing, malformed, or inconsistent.
    #[error("Version catalog error: {message}")]
    Catalog { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type SettlerResult<T> = miette::Result<T>;
