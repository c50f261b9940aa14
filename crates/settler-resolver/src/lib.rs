//! Workspace composition resolver.
//!
//! Turns a parsed [`SettingsDeclaration`](settler_core::settings::SettingsDeclaration)
//! into an immutable [`ResolvedWorkspace`](workspace::ResolvedWorkspace): the
//! module tree and the ordered repository and catalog policy an external
//! build engine consumes.
//!
//! Resolution is a pure, synchronous transformation. It performs no I/O and
//! keeps no state between calls.

pub mod error;
pub mod resolver;
pub mod workspace;

pub use error::{RepositoryScope, ResolveError};
pub use resolver::WorkspaceResolver;
pub use workspace::{ResolvedModule, ResolvedWorkspace};
