use serde::{Deserialize, Serialize};
use std::fmt;

/// An opt-in feature preview enabled from the settings declaration.
///
/// Flags are spelled the way build scripts spell feature previews
/// (`TYPESAFE_PROJECT_ACCESSORS`). Unknown names fail to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureFlag {
    /// Generate type-safe accessors (`projects.codeGenerators`) for included modules.
    TypesafeProjectAccessors,
    /// Ask the engine to treat the configuration cache as stable.
    StableConfigurationCache,
}

impl FeatureFlag {
    /// Every known flag, in declaration order.
    pub const ALL: [FeatureFlag; 2] = [
        FeatureFlag::TypesafeProjectAccessors,
        FeatureFlag::StableConfigurationCache,
    ];

    /// The identifier used in `settings.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureFlag::TypesafeProjectAccessors => "TYPESAFE_PROJECT_ACCESSORS",
            FeatureFlag::StableConfigurationCache => "STABLE_CONFIGURATION_CACHE",
        }
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
