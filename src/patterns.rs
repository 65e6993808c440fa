use regex::Regex;

use crate::error::{GitSemverError, Result};

/// Default branch classification patterns. All are case-insensitive and
/// tolerate a fork-owner prefix such as "owner:feature/x". A user-supplied
/// override replaces the default verbatim, including its case handling.
pub const DEFAULT_PATCH_PATTERN: &str = r"(?i)^(.+:)?(bugfix/.+)";
pub const DEFAULT_MINOR_PATTERN: &str = r"(?i)^(.+:)?(feature/.+)";
pub const DEFAULT_MAJOR_PATTERN: &str = r"(?i)^(.+:)?(release/.+)";
pub const DEFAULT_BUILD_PATTERN: &str = r"(?i)^(.+:)?((doc(s)?|misc)/.+)";
pub const DEFAULT_HOTFIX_PATTERN: &str = r"(?i)^(.+:)?(hotfix/.+)";

/// Compiled branch-name matchers, one per bump category.
///
/// Which matcher wins when several match is the strategy's concern; this
/// type only guarantees every pattern compiled before use.
#[derive(Debug, Clone)]
pub struct BranchPatterns {
    pub patch: Regex,
    pub minor: Regex,
    pub major: Regex,
    pub build: Regex,
    pub hotfix: Regex,
    pub exclude: Option<Regex>,
}

/// Raw pattern text read from the environment; `None` falls back to the
/// matching default (exclude has no default and stays absent).
#[derive(Debug, Clone, Default)]
pub struct PatternOverrides {
    pub patch: Option<String>,
    pub minor: Option<String>,
    pub major: Option<String>,
    pub build: Option<String>,
    pub hotfix: Option<String>,
    pub exclude: Option<String>,
}

impl BranchPatterns {
    /// Compile the default pattern set
    pub fn defaults() -> Result<Self> {
        Self::with_overrides(PatternOverrides::default())
    }

    /// Compile the pattern set with user overrides applied
    pub fn with_overrides(overrides: PatternOverrides) -> Result<Self> {
        Ok(BranchPatterns {
            patch: compile(
                "patch",
                overrides.patch.as_deref().unwrap_or(DEFAULT_PATCH_PATTERN),
            )?,
            minor: compile(
                "minor",
                overrides.minor.as_deref().unwrap_or(DEFAULT_MINOR_PATTERN),
            )?,
            major: compile(
                "major",
                overrides.major.as_deref().unwrap_or(DEFAULT_MAJOR_PATTERN),
            )?,
            build: compile(
                "build",
                overrides.build.as_deref().unwrap_or(DEFAULT_BUILD_PATTERN),
            )?,
            hotfix: compile(
                "hotfix",
                overrides.hotfix.as_deref().unwrap_or(DEFAULT_HOTFIX_PATTERN),
            )?,
            exclude: overrides
                .exclude
                .as_deref()
                .map(|pattern| compile("exclude", pattern))
                .transpose()?,
        })
    }
}

fn compile(name: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|_| GitSemverError::config(format!("invalid {} pattern value: {}", name, pattern)))
}
