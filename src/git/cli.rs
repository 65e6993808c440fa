use std::process::Command;

use regex::Regex;

use crate::error::{GitSemverError, Result};

use super::GitClient;

/// Git queries implemented by shelling out to the `git` binary.
///
/// Every query is one short-lived process, addressed at the repository
/// with `git -C <dir>` so the tool itself never changes directory.
pub struct GitCli {
    repo_dir: String,
}

impl GitCli {
    pub fn new(repo_dir: impl Into<String>) -> Self {
        GitCli {
            repo_dir: repo_dir.into(),
        }
    }

    /// Run git with the given arguments, returning trimmed stdout.
    /// A non-zero exit becomes an error carrying git's stderr.
    fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .output()
            .map_err(|e| GitSemverError::git(format!("failed to run git: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitSemverError::git(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitClient for GitCli {
    fn mark_safe(&self) -> Result<()> {
        self.git(&[
            "config",
            "--global",
            "--add",
            "safe.directory",
            &self.repo_dir,
        ])?;
        Ok(())
    }

    fn is_repository(&self) -> bool {
        self.git(&["-C", &self.repo_dir, "rev-parse", "--is-inside-work-tree"])
            .map(|output| output == "true")
            .unwrap_or(false)
    }

    fn current_branch(&self) -> Result<String> {
        let output = self
            .git(&[
                "-C",
                &self.repo_dir,
                "rev-parse",
                "--abbrev-ref",
                "HEAD",
                "--quiet",
            ])
            .map_err(|e| GitSemverError::branch(format!("could not get current branch: {}", e)))?;
        Ok(clean(&output).to_string())
    }

    fn source_branch(&self, commit_hash: &str) -> Result<String> {
        let message = self.git(&["-C", &self.repo_dir, "log", "-1", "--pretty=%B", commit_hash])?;
        parse_merge_message(clean(&message))
    }

    fn latest_tag(&self) -> String {
        let pointing_at_head = self
            .git(&[
                "-C",
                &self.repo_dir,
                "tag",
                "--points-at",
                "HEAD",
                "--sort",
                "-version:creatordate",
            ])
            .unwrap_or_default();
        if let Some(tag) = first_line(&pointing_at_head) {
            return clean(tag).to_string();
        }

        self.git(&["-C", &self.repo_dir, "describe", "--tags", "--abbrev=0"])
            .map(|output| clean(&output).to_string())
            .unwrap_or_default()
    }

    fn ancestor_tag(&self, include: &str, exclude: &str, branch: &str) -> String {
        let mut args = vec!["-C", self.repo_dir.as_str(), "describe", "--tags", "--abbrev=0"];
        // an empty --match/--exclude is fatal to git, so empty means omitted
        if !include.is_empty() {
            args.push("--match");
            args.push(include);
        }
        if !exclude.is_empty() {
            args.push("--exclude");
            args.push(exclude);
        }
        if !branch.is_empty() {
            args.push(branch);
        }

        if let Ok(output) = self.git(&args) {
            if let Some(tag) = first_line(&output) {
                return clean(tag).to_string();
            }
        }

        // no matching tag anywhere: hand back the root commit as a diff base
        self.git(&["-C", &self.repo_dir, "rev-list", "--max-parents=0", "HEAD"])
            .ok()
            .and_then(|output| first_line(&output).map(str::to_string))
            .unwrap_or_default()
    }
}

/// Strip the surrounding single quotes some git/platform combinations emit
fn clean(value: &str) -> &str {
    value.trim().trim_matches('\'')
}

fn first_line(output: &str) -> Option<&str> {
    output.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Extract the source branch from a pull-request merge-commit message.
/// The captured segment is `<owner>/<branch>`; everything after the first
/// slash is the branch, so nested names like `owner/feature/x` survive.
fn parse_merge_message(message: &str) -> Result<String> {
    let merge_pattern = Regex::new(r"Merge pull request #\d+ from (\S+)")
        .map_err(|e| GitSemverError::git(format!("invalid merge message pattern: {}", e)))?;

    let captures = merge_pattern
        .captures(message)
        .ok_or(GitSemverError::NoSourceBranch)?;

    let segment = &captures[1];
    match segment.split_once('/') {
        Some((_, branch)) if !branch.is_empty() => Ok(branch.to_string()),
        _ => Err(GitSemverError::branch(format!(
            "commit message does not contain expected format: {}",
            segment
        ))),
    }
}
