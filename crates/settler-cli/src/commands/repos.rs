//! Handler for `settler repos`.

use std::path::Path;

use miette::Result;

use settler_core::repository::RepositoryDeclaration;

use crate::cli::RepoScope;

pub fn exec(settings: Option<&Path>, scope: RepoScope) -> Result<()> {
    let loaded = super::load_workspace(settings)?;
    let ws = &loaded.workspace;

    if matches!(scope, RepoScope::Plugin | RepoScope::All) {
        print_list("Plugin repositories", ws.plugin_repositories());
    }
    if matches!(scope, RepoScope::Dependency | RepoScope::All) {
        print_list("Dependency repositories", ws.dependency_repositories());
    }
    Ok(())
}

fn print_list(title: &str, repos: &[RepositoryDeclaration]) {
    if repos.is_empty() {
        println!("{title}: none");
        return;
    }
    println!("{title}:");
    for (i, repo) in repos.iter().enumerate() {
        println!("  {}. {repo}", i + 1);
    }
}
