//! Command dispatch and handler modules.

mod catalog;
mod modules;
mod repos;
mod resolve;

use std::path::{Path, PathBuf};

use miette::Result;

use settler_core::settings::SettingsDeclaration;
use settler_core::SETTINGS_FILE_NAME;
use settler_resolver::{ResolvedWorkspace, WorkspaceResolver};
use settler_util::errors::SettlerError;
use settler_util::fs::find_ancestor_with;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = cli.settings.as_deref();
    match cli.command {
        Command::Resolve { format } => resolve::exec(settings, format),
        Command::Modules => modules::exec(settings),
        Command::Repos { scope } => repos::exec(settings, scope),
        Command::Catalog { name } => catalog::exec(settings, &name),
    }
}

/// A resolved workspace together with the directory its settings file lives in.
pub(crate) struct LoadedWorkspace {
    pub root_dir: PathBuf,
    pub workspace: ResolvedWorkspace,
}

/// Locate, parse, and resolve the settings file.
///
/// An explicit path wins; otherwise the nearest `settings.toml` in the
/// working directory or its ancestors is used.
pub(crate) fn load_workspace(explicit: Option<&Path>) -> Result<LoadedWorkspace> {
    let settings_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().map_err(SettlerError::Io)?;
            let root = find_ancestor_with(&cwd, SETTINGS_FILE_NAME).ok_or_else(|| {
                SettlerError::Manifest {
                    message: format!(
                        "Could not find {SETTINGS_FILE_NAME} in this directory or any parent"
                    ),
                }
            })?;
            root.join(SETTINGS_FILE_NAME)
        }
    };

    let declaration = SettingsDeclaration::from_path(&settings_path)?;
    let workspace = WorkspaceResolver::new()
        .resolve(&declaration)
        .map_err(SettlerError::from)?;
    tracing::debug!(
        root = workspace.root_name(),
        modules = workspace.modules().len(),
        "resolved workspace"
    );

    let root_dir = settings_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(LoadedWorkspace {
        root_dir,
        workspace,
    })
}
