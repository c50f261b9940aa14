//! Core data types for Settler.
//!
//! This crate defines the declarative side of a multi-module build: the
//! settings declaration (root project name, included modules, plugin and
//! dependency repositories, feature previews, version catalogs) and its
//! `settings.toml` front-end, plus loading of the version catalog files a
//! declaration points at.
//!
//! Resolution of a declaration into a workspace lives in `settler-resolver`.

/// Name of the settings file looked up at the build root.
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

pub mod feature;
pub mod module_path;
pub mod properties;
pub mod repository;
pub mod settings;
pub mod version_catalog;
