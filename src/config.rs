use std::env;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use semver::{Prerelease, Version};

use crate::error::{GitSemverError, Result};
use crate::patterns::{BranchPatterns, PatternOverrides};
use crate::version;

const DEFAULT_REPO_DIR: &str = ".";
const DEFAULT_PREFIX: &str = "v";
const DEFAULT_PRERELEASE_ID: &str = "pre";
const DEFAULT_MAIN_BRANCH: &str = "master";
const DEFAULT_DEVELOP_BRANCH: &str = "develop";

/// Loose hex-hash shape accepted for the commit identifier
const COMMIT_HASH_PATTERN: &str = r"\b[0-9a-f]{5,40}\b";

/// Explicit bump override. `Auto` defers to branch-pattern classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bump {
    #[default]
    Auto,
    Major,
    Minor,
    Patch,
}

impl FromStr for Bump {
    type Err = GitSemverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Bump::Auto),
            "major" => Ok(Bump::Major),
            "minor" => Ok(Bump::Minor),
            "patch" => Ok(Bump::Patch),
            _ => Err(GitSemverError::config(format!("invalid bump value: {}", s))),
        }
    }
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bump::Auto => "auto",
            Bump::Major => "major",
            Bump::Minor => "minor",
            Bump::Patch => "patch",
        };
        write!(f, "{}", name)
    }
}

/// Branching model selecting the tagging strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchingModel {
    #[default]
    GitFlow,
    TrunkBased,
}

impl FromStr for BranchingModel {
    type Err = GitSemverError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "git-flow" => Ok(BranchingModel::GitFlow),
            "trunk-based" => Ok(BranchingModel::TrunkBased),
            _ => Err(GitSemverError::config(format!(
                "invalid branching model value: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for BranchingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BranchingModel::GitFlow => "git-flow",
            BranchingModel::TrunkBased => "trunk-based",
        };
        write!(f, "{}", name)
    }
}

/// Resolved run parameters. Built once at process start, read-only after.
#[derive(Debug, Clone)]
pub struct Config {
    pub commit_sha: String,
    pub repo_dir: String,
    pub bump: Bump,
    pub branching_model: BranchingModel,
    pub base_version: Option<Version>,
    pub prefix: String,
    pub prerelease_id: String,
    pub main_branch_name: String,
    pub develop_branch_name: String,
    pub patterns: BranchPatterns,
    pub debug: bool,
}

impl Config {
    /// All-default configuration; the environment is not consulted.
    pub fn defaults() -> Result<Self> {
        Ok(Config {
            commit_sha: String::new(),
            repo_dir: DEFAULT_REPO_DIR.to_string(),
            bump: Bump::default(),
            branching_model: BranchingModel::default(),
            base_version: None,
            prefix: DEFAULT_PREFIX.to_string(),
            prerelease_id: DEFAULT_PRERELEASE_ID.to_string(),
            main_branch_name: DEFAULT_MAIN_BRANCH.to_string(),
            develop_branch_name: DEFAULT_DEVELOP_BRANCH.to_string(),
            patterns: BranchPatterns::defaults()?,
            debug: false,
        })
    }

    /// Loads configuration from the CI environment.
    ///
    /// Each named input `x` is read from the `INPUT_X` environment variable
    /// (upper-cased, spaces replaced by underscores, surrounding whitespace
    /// trimmed, empty treated as absent); the commit identifier comes from
    /// `GITHUB_SHA`. Every validation failure is a configuration error
    /// raised before any repository access happens.
    ///
    /// # Returns
    /// * `Ok(Config)` - Validated configuration with defaults applied
    /// * `Err` - If any supplied value fails validation
    pub fn from_env() -> Result<Self> {
        let mut config = Self::defaults()?;

        let sha = env_value("GITHUB_SHA").unwrap_or_default();
        let hash_shape = Regex::new(COMMIT_HASH_PATTERN)
            .map_err(|e| GitSemverError::config(format!("invalid commit hash pattern: {}", e)))?;
        if !hash_shape.is_match(&sha) {
            return Err(GitSemverError::config(format!(
                "invalid commit-sha format: {}",
                sha
            )));
        }
        config.commit_sha = sha;

        if let Some(dir) = input("repo_dir") {
            config.repo_dir = dir;
        }

        if let Some(bump) = input("bump") {
            config.bump = bump.parse()?;
        }

        if let Some(model) = input("branching_model") {
            config.branching_model = model.parse()?;
        }

        if let Some(prefix) = input("prefix") {
            config.prefix = prefix;
        }

        if let Some(id) = input("prerelease_id") {
            Prerelease::new(&id).map_err(|_| {
                GitSemverError::config(format!("invalid prerelease_id value: {}", id))
            })?;
            config.prerelease_id = id;
        }

        if let Some(name) = input("main_branch_name") {
            config.main_branch_name = name;
        }

        if let Some(name) = input("develop_branch_name") {
            config.develop_branch_name = name;
        }

        config.patterns = BranchPatterns::with_overrides(PatternOverrides {
            patch: input("patch_pattern"),
            minor: input("minor_pattern"),
            major: input("major_pattern"),
            build: input("build_pattern"),
            hotfix: input("hotfix_pattern"),
            exclude: input("exclude_pattern"),
        })?;

        if let Some(base) = input("base_version") {
            let stripped = base.strip_prefix(&config.prefix).unwrap_or(&base);
            let parsed = version::parse(stripped).map_err(|_| {
                GitSemverError::config(format!("invalid base_version format: {}", base))
            })?;
            config.base_version = Some(parsed);
        }

        if let Some(debug) = input("debug") {
            config.debug = debug.parse().map_err(|_| {
                GitSemverError::config(format!("invalid debug argument: {}", debug))
            })?;
        }

        Ok(config)
    }

    /// One-line parameter dump for debug logging
    pub fn summary(&self) -> String {
        format!(
            "commit-sha: {:?}, repo-dir: {:?}, bump: {}, branching-model: {}, base-version: {:?}, \
             prefix: {:?}, prerelease-id: {:?}, main-branch: {:?}, develop-branch: {:?}, \
             patch-pattern: {:?}, minor-pattern: {:?}, major-pattern: {:?}, build-pattern: {:?}, \
             hotfix-pattern: {:?}, exclude-pattern: {:?}, debug: {}",
            self.commit_sha,
            self.repo_dir,
            self.bump,
            self.branching_model,
            self.base_version
                .as_ref()
                .map(Version::to_string)
                .unwrap_or_default(),
            self.prefix,
            self.prerelease_id,
            self.main_branch_name,
            self.develop_branch_name,
            self.patterns.patch.as_str(),
            self.patterns.minor.as_str(),
            self.patterns.major.as_str(),
            self.patterns.build.as_str(),
            self.patterns.hotfix.as_str(),
            self.patterns
                .exclude
                .as_ref()
                .map(|re| re.as_str())
                .unwrap_or_default(),
            self.debug,
        )
    }
}

/// Read a named CI input (`INPUT_*` convention); empty means absent
fn input(name: &str) -> Option<String> {
    env_value(&format!(
        "INPUT_{}",
        name.replace(' ', "_").to_uppercase()
    ))
}

fn env_value(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
