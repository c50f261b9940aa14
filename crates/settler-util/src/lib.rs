//! Shared utilities for Settler.
//!
//! This crate provides the cross-cutting concerns used by the other Settler
//! crates: the unified error type and filesystem helpers for locating the
//! settings file.

pub mod errors;
pub mod fs;
