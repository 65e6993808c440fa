//! Git query layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries one tag computation needs. The concrete implementations are:
//!
//! - [cli::GitCli]: shells out to the `git` binary, one short-lived
//!   process per query
//! - [mock::MockGit]: canned answers for testing
//!
//! Most code should depend on the [GitClient] trait rather than a concrete
//! implementation:
//!
//! ```rust
//! # use git_semver::git::GitClient;
//! # fn example<G: GitClient>(git: &G) -> Result<(), Box<dyn std::error::Error>> {
//! let branch = git.current_branch()?;
//! let latest = git.latest_tag();
//! println!("{} is at {}", branch, latest);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;

pub use cli::GitCli;
pub use mock::MockGit;

use crate::error::Result;

/// Read-only git queries backing one tag computation.
///
/// A run is single-threaded and owns its client exclusively, so the trait
/// carries no `Send`/`Sync` bound. Implementations map their underlying
/// failures to [crate::error::GitSemverError] variants.
pub trait GitClient {
    /// Mark the repository directory as trusted
    ///
    /// CI checkouts are often owned by a different user than the one
    /// running the job; without the trust marking every other query fails.
    fn mark_safe(&self) -> Result<()>;

    /// Whether the configured directory is inside a git work tree
    fn is_repository(&self) -> bool;

    /// Name of the currently checked-out branch
    fn current_branch(&self) -> Result<String>;

    /// Derive the source branch of the merge that produced a commit
    ///
    /// Reads the commit's message and extracts the branch from the
    /// `Merge pull request #<n> from <owner>/<branch>` form, dropping the
    /// owner segment.
    ///
    /// # Arguments
    /// * `commit_hash` - Commit whose message is inspected
    ///
    /// # Returns
    /// * `Ok(String)` - The source branch name
    /// * `Err(NoSourceBranch)` - The message is not a pull-request merge
    /// * `Err` - A merge message was found but the owner/branch segment is
    ///   malformed
    fn source_branch(&self, commit_hash: &str) -> Result<String>;

    /// Most recent tag: one pointing exactly at the current commit,
    /// falling back to the nearest reachable tag. Empty string when no tag
    /// exists anywhere in history.
    fn latest_tag(&self) -> String;

    /// Nearest reachable tag on `branch` matching `include` and not
    /// matching `exclude` (glob patterns; empty strings mean unfiltered).
    /// Falls back to the root commit identifier as a diff base; empty
    /// string when even that cannot be resolved.
    fn ancestor_tag(&self, include: &str, exclude: &str, branch: &str) -> String;
}
