//! Paths of included modules (`code-generators`, `:libs:core`).

use serde::{Deserialize, Serialize};
use settler_util::errors::SettlerError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Path of a subproject relative to the workspace root.
///
/// Segments are separated by `:`; a leading `:` is accepted and dropped, so
/// `:demo` and `demo` are the same module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModulePath(String);

impl ModulePath {
    /// Parse and normalize a module path.
    ///
    /// Whitespace around each segment is dropped, so `libs: core` and
    /// `libs:core` are the same module.
    pub fn parse(raw: &str) -> Result<Self, SettlerError> {
        let trimmed = raw.trim();
        let path = trimmed.strip_prefix(':').unwrap_or(trimmed);
        if path.is_empty() {
            return Err(invalid(raw, "path is empty"));
        }
        let mut segments = Vec::new();
        for segment in path.split(':').map(str::trim) {
            if segment.is_empty() {
                return Err(invalid(raw, "path contains an empty segment"));
            }
            if segment.contains(['/', '\\']) {
                return Err(invalid(raw, "use ':' to separate nested modules"));
            }
            segments.push(segment);
        }
        Ok(Self(segments.join(":")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(':')
    }

    /// The module's name: its last segment.
    pub fn name(&self) -> &str {
        self.segments().last().unwrap_or(self.0.as_str())
    }

    /// Directory holding the module's sources, relative to the workspace root.
    pub fn project_dir(&self) -> PathBuf {
        self.segments().collect()
    }

    /// Accessor name generated for the module when type-safe project
    /// accessors are enabled: `code-generators` becomes `codeGenerators`,
    /// `libs:json-core` becomes `libs.jsonCore`.
    pub fn accessor(&self) -> String {
        self.segments()
            .map(camel_case)
            .collect::<Vec<_>>()
            .join(".")
    }
}

fn camel_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for (i, word) in segment
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        if i == 0 {
            out.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

fn invalid(raw: &str, reason: &str) -> SettlerError {
    SettlerError::Manifest {
        message: format!("Invalid module path '{raw}': {reason}"),
    }
}

impl FromStr for ModulePath {
    type Err = SettlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ModulePath {
    type Error = SettlerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ModulePath> for String {
    fn from(path: ModulePath) -> Self {
        path.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
