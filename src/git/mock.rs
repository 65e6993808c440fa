use crate::error::{GitSemverError, Result};
use crate::git::GitClient;

/// Mock git client answering from canned values, for tests that exercise
/// the orchestration without a real repository.
pub struct MockGit {
    is_repository: bool,
    current_branch: String,
    source_branch: String,
    latest_tag: String,
    ancestor_tag: String,
    fail_mark_safe: bool,
    fail_current_branch: bool,
    fail_source_branch: bool,
}

impl MockGit {
    /// Create an empty mock; it does not even count as a repository yet
    pub fn new() -> Self {
        MockGit {
            is_repository: false,
            current_branch: String::new(),
            source_branch: String::new(),
            latest_tag: String::new(),
            ancestor_tag: String::new(),
            fail_mark_safe: false,
            fail_current_branch: false,
            fail_source_branch: false,
        }
    }

    pub fn set_is_repository(&mut self, value: bool) {
        self.is_repository = value;
    }

    pub fn set_current_branch(&mut self, branch: impl Into<String>) {
        self.current_branch = branch.into();
    }

    pub fn set_source_branch(&mut self, branch: impl Into<String>) {
        self.source_branch = branch.into();
    }

    pub fn set_latest_tag(&mut self, tag: impl Into<String>) {
        self.latest_tag = tag.into();
    }

    pub fn set_ancestor_tag(&mut self, tag: impl Into<String>) {
        self.ancestor_tag = tag.into();
    }

    /// Make `mark_safe` fail
    pub fn fail_mark_safe(&mut self) {
        self.fail_mark_safe = true;
    }

    /// Make `current_branch` fail
    pub fn fail_current_branch(&mut self) {
        self.fail_current_branch = true;
    }

    /// Make `source_branch` report no merge commit
    pub fn fail_source_branch(&mut self) {
        self.fail_source_branch = true;
    }
}

impl Default for MockGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitClient for MockGit {
    fn mark_safe(&self) -> Result<()> {
        if self.fail_mark_safe {
            return Err(GitSemverError::git("mock trust failure"));
        }
        Ok(())
    }

    fn is_repository(&self) -> bool {
        self.is_repository
    }

    fn current_branch(&self) -> Result<String> {
        if self.fail_current_branch {
            return Err(GitSemverError::branch("mock current branch failure"));
        }
        Ok(self.current_branch.clone())
    }

    fn source_branch(&self, _commit_hash: &str) -> Result<String> {
        if self.fail_source_branch {
            return Err(GitSemverError::NoSourceBranch);
        }
        Ok(self.source_branch.clone())
    }

    fn latest_tag(&self) -> String {
        self.latest_tag.clone()
    }

    fn ancestor_tag(&self, _include: &str, _exclude: &str, _branch: &str) -> String {
        self.ancestor_tag.clone()
    }
}
