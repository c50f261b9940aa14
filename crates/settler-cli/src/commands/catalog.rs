//! Handler for `settler catalog`.

use std::path::Path;

use miette::Result;

use settler_core::version_catalog::{resolve_catalog, CatalogDefinition};
use settler_util::errors::SettlerError;

pub fn exec(settings: Option<&Path>, name: &str) -> Result<()> {
    let loaded = super::load_workspace(settings)?;
    let source = loaded
        .workspace
        .catalog(name)
        .ok_or_else(|| SettlerError::Catalog {
            message: format!("No catalog named '{name}' is declared"),
        })?;

    let path = loaded.root_dir.join(source);
    let definition = CatalogDefinition::from_path(&path)?;
    let catalog = resolve_catalog(&definition)?;

    println!("Catalog '{name}' ({}):", source.display());
    println!("Libraries ({}):", catalog.libraries.len());
    for lib in &catalog.libraries {
        println!("  {} = {lib}", lib.alias);
    }
    if !catalog.bundles.is_empty() {
        println!("Bundles ({}):", catalog.bundles.len());
        for (bundle, members) in &catalog.bundles {
            println!("  {bundle} = [{}]", members.join(", "));
        }
    }
    if !catalog.plugins.is_empty() {
        println!("Plugins ({}):", catalog.plugins.len());
        for plugin in &catalog.plugins {
            match &plugin.version {
                Some(v) => println!("  {} = {}:{v}", plugin.alias, plugin.id),
                None => println!("  {} = {}", plugin.alias, plugin.id),
            }
        }
    }
    Ok(())
}
