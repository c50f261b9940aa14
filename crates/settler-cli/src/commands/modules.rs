//! Handler for `settler modules`.

use std::path::Path;

use miette::Result;

pub fn exec(settings: Option<&Path>) -> Result<()> {
    let loaded = super::load_workspace(settings)?;
    let ws = &loaded.workspace;

    if ws.is_single_module() {
        println!("{} has no included modules.", ws.root_name());
        return Ok(());
    }

    for module in ws.modules() {
        let dir = loaded.root_dir.join(&module.project_dir);
        match &module.accessor {
            Some(accessor) => println!(
                "{}\t{}\tprojects.{accessor}",
                module.path,
                dir.display()
            ),
            None => println!("{}\t{}", module.path, dir.display()),
        }
    }
    Ok(())
}
