//! Branch-to-version-bump decision engine.
//!
//! A [`BranchStrategy`] classifies a merge by its source and destination
//! branch names, then applies the resulting bump method to the current
//! version. Two variants exist: git-flow (develop accumulates prerelease
//! builds, main receives promotions) and trunk-based (a single branch
//! accumulating build counters). The variant is selected once from the
//! configured branching model and never re-selected mid-run.

mod gitflow;
mod trunkbased;

pub use gitflow::GitFlow;
pub use trunkbased::TrunkBased;

use semver::Version;

use crate::config::{BranchingModel, Bump, Config};
use crate::error::Result;
use crate::version::VersionExt;

/// Category of version change to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpMethod {
    Build,
    Major,
    Minor,
    Patch,
    Hotfix,
    Final,
}

impl BumpMethod {
    /// Method forced by an explicit (non-auto) bump override
    pub fn from_override(bump: Bump) -> Option<Self> {
        match bump {
            Bump::Auto => None,
            Bump::Major => Some(BumpMethod::Major),
            Bump::Minor => Some(BumpMethod::Minor),
            Bump::Patch => Some(BumpMethod::Patch),
        }
    }
}

/// Forced component hint carried alongside a `Build` method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionClass {
    Major,
    Minor,
    Patch,
}

/// Outcome of branch classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpDecision {
    /// Source branch matched the exclude pattern; the run is a no-op
    Skip,
    Bump {
        method: BumpMethod,
        class: Option<VersionClass>,
    },
}

/// Inputs to a strategy's tag computation. Owns the working version,
/// which is mutated in place by exactly one increment.
#[derive(Debug)]
pub struct TagParams<'a> {
    pub method: BumpMethod,
    pub class: Option<VersionClass>,
    pub version: Version,
    pub prefix: &'a str,
    pub prerelease_id: &'a str,
}

/// Glob pair for the ancestor-tag lookup; empty strings mean unfiltered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AncestorQuery {
    pub include: String,
    pub exclude: String,
}

impl AncestorQuery {
    pub fn unfiltered() -> Self {
        Self::default()
    }
}

/// Result of a strategy's tag computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOutcome {
    /// Final prefixed tag string
    pub tag: String,
    /// Lookup the orchestrator runs against the destination branch
    pub ancestor_query: AncestorQuery,
    pub is_prerelease: bool,
}

/// The two-variant decision engine. Both operations are pure functions of
/// their inputs plus the configuration captured at construction.
pub trait BranchStrategy {
    /// Classify a merge by source and destination branch
    fn determine_bump(&self, source_branch: &str, dest_branch: &str) -> BumpDecision;

    /// Apply a bump decision to the current version
    fn tag(&self, params: TagParams<'_>) -> Result<TagOutcome>;

    fn name(&self) -> &'static str;
}

/// Build the strategy selected by the configured branching model
pub fn for_model(config: &Config) -> Box<dyn BranchStrategy> {
    match config.branching_model {
        BranchingModel::GitFlow => Box::new(GitFlow::new(config)),
        BranchingModel::TrunkBased => Box::new(TrunkBased::new(config)),
    }
}

/// Numeric increment rule shared by both variants: a forced class only
/// applies under a `Build` method; explicit methods bump their own
/// component, with `Hotfix` behaving as a patch bump.
fn apply_increment(
    version: &mut Version,
    method: BumpMethod,
    class: Option<VersionClass>,
) -> Result<()> {
    if (class == Some(VersionClass::Major) && method == BumpMethod::Build)
        || method == BumpMethod::Major
    {
        version.increment_major()
    } else if (class == Some(VersionClass::Minor) && method == BumpMethod::Build)
        || method == BumpMethod::Minor
    {
        version.increment_minor()
    } else if (class == Some(VersionClass::Patch) && method == BumpMethod::Build)
        || method == BumpMethod::Patch
        || method == BumpMethod::Hotfix
    {
        version.increment_patch()
    } else {
        Ok(())
    }
}
