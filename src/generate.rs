//! Next-tag computation: ties configuration, repository facts, and the
//! branch strategy together into a single result.

use crate::config::Config;
use crate::error::{GitSemverError, Result};
use crate::git::GitClient;
use crate::strategy::{self, BumpDecision, TagParams};
use crate::ui;
use crate::version::{self, VersionExt};

const DEFAULT_VERSION: &str = "0.0.0";

/// Everything a single run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagResult {
    pub previous_tag: String,
    pub ancestor_tag: String,
    pub semver_tag: String,
    pub is_prerelease: bool,
}

/// Compute the next tag for the repository described by `config`.
///
/// The sequence short-circuits on the first error. The one soft exit is an
/// excluded source branch, which yields an all-empty result: nothing to do,
/// but nothing went wrong either.
pub fn tag<G: GitClient>(config: &Config, git: &G) -> Result<TagResult> {
    git.mark_safe().map_err(|e| {
        GitSemverError::environment(format!(
            "failed to mark {} as a safe directory: {}",
            config.repo_dir, e
        ))
    })?;

    if !git.is_repository() {
        return Err(GitSemverError::NotARepository(config.repo_dir.clone()));
    }

    let dest = git.current_branch()?;

    if config.debug {
        ui::display_debug(&format!("dest branch: {:?}", dest));
    }

    let source = git.source_branch(&config.commit_sha)?;

    if config.debug {
        ui::display_debug(&format!("source branch: {:?}", source));
    }

    let strategy = strategy::for_model(config);

    let (method, class) = match strategy.determine_bump(&source, &dest) {
        BumpDecision::Skip => return Ok(TagResult::default()),
        BumpDecision::Bump { method, class } => (method, class),
    };

    if config.debug {
        ui::display_debug(&format!("method: {:?}, class: {:?}", method, class));
    }

    let latest_tag = git.latest_tag();

    let version = if latest_tag.is_empty() {
        version::parse(DEFAULT_VERSION)?
    } else {
        let bare = latest_tag
            .strip_prefix(&config.prefix)
            .unwrap_or(&latest_tag);
        version::parse(bare)?
    };

    // The reported previous tag always reflects the discovered latest tag,
    // even when a base version override replaces it for the computation.
    let previous_tag = version.tag_string(&config.prefix);

    let version = match &config.base_version {
        Some(base) => base.clone(),
        None => version,
    };

    let outcome = strategy.tag(TagParams {
        method,
        class,
        version,
        prefix: &config.prefix,
        prerelease_id: &config.prerelease_id,
    })?;

    let ancestor_tag = git.ancestor_tag(
        &outcome.ancestor_query.include,
        &outcome.ancestor_query.exclude,
        &dest,
    );

    Ok(TagResult {
        previous_tag,
        ancestor_tag,
        semver_tag: outcome.tag,
        is_prerelease: outcome.is_prerelease,
    })
}
