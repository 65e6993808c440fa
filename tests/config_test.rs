// tests/config_test.rs
use git_semver::config::{BranchingModel, Bump, Config};
use serial_test::serial;
use std::env;

const SHA: &str = "81ee03dd1ae12eb28fa376410a3ba0438cafdc93";

const INPUT_VARS: &[&str] = &[
    "INPUT_REPO_DIR",
    "INPUT_BUMP",
    "INPUT_BRANCHING_MODEL",
    "INPUT_PREFIX",
    "INPUT_PRERELEASE_ID",
    "INPUT_MAIN_BRANCH_NAME",
    "INPUT_DEVELOP_BRANCH_NAME",
    "INPUT_PATCH_PATTERN",
    "INPUT_MINOR_PATTERN",
    "INPUT_MAJOR_PATTERN",
    "INPUT_BUILD_PATTERN",
    "INPUT_HOTFIX_PATTERN",
    "INPUT_EXCLUDE_PATTERN",
    "INPUT_BASE_VERSION",
    "INPUT_DEBUG",
];

fn reset_env() {
    env::remove_var("GITHUB_SHA");
    for var in INPUT_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);

    let config = Config::from_env().unwrap();

    assert_eq!(config.commit_sha, SHA);
    assert_eq!(config.repo_dir, ".");
    assert_eq!(config.bump, Bump::Auto);
    assert_eq!(config.branching_model, BranchingModel::GitFlow);
    assert_eq!(config.prefix, "v");
    assert_eq!(config.prerelease_id, "pre");
    assert_eq!(config.main_branch_name, "master");
    assert_eq!(config.develop_branch_name, "develop");
    assert!(config.base_version.is_none());
    assert!(!config.debug);
}

#[test]
#[serial]
fn test_from_env_missing_sha() {
    reset_env();

    let err = Config::from_env().unwrap_err();

    assert!(err.to_string().contains("invalid commit-sha format"));
}

#[test]
#[serial]
fn test_from_env_invalid_sha() {
    reset_env();
    env::set_var("GITHUB_SHA", "xyz");

    let err = Config::from_env().unwrap_err();

    assert!(err.to_string().contains("invalid commit-sha format: xyz"));
}

#[test]
#[serial]
fn test_from_env_short_hash_is_accepted() {
    reset_env();
    env::set_var("GITHUB_SHA", "e63c125b");

    let config = Config::from_env().unwrap();

    assert_eq!(config.commit_sha, "e63c125b");
}

#[test]
#[serial]
fn test_from_env_full_overrides() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);
    env::set_var("INPUT_REPO_DIR", "/work/repo");
    env::set_var("INPUT_BUMP", "patch");
    env::set_var("INPUT_BRANCHING_MODEL", "trunk-based");
    env::set_var("INPUT_PREFIX", "ver");
    env::set_var("INPUT_PRERELEASE_ID", "alpha");
    env::set_var("INPUT_MAIN_BRANCH_NAME", "main");
    env::set_var("INPUT_DEVELOP_BRANCH_NAME", "dev");
    env::set_var("INPUT_BASE_VERSION", "ver4.2.0");
    env::set_var("INPUT_DEBUG", "true");

    let config = Config::from_env().unwrap();

    assert_eq!(config.repo_dir, "/work/repo");
    assert_eq!(config.bump, Bump::Patch);
    assert_eq!(config.branching_model, BranchingModel::TrunkBased);
    assert_eq!(config.prefix, "ver");
    assert_eq!(config.prerelease_id, "alpha");
    assert_eq!(config.main_branch_name, "main");
    assert_eq!(config.develop_branch_name, "dev");
    assert_eq!(config.base_version, Some(semver::Version::new(4, 2, 0)));
    assert!(config.debug);

    reset_env();
}

#[test]
#[serial]
fn test_from_env_pattern_overrides() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);
    env::set_var("INPUT_MAJOR_PATTERN", r"^breaking/.+");
    env::set_var("INPUT_EXCLUDE_PATTERN", r"^wip/.+");

    let config = Config::from_env().unwrap();

    assert_eq!(config.patterns.major.as_str(), r"^breaking/.+");
    assert_eq!(
        config.patterns.exclude.as_ref().map(|re| re.as_str()),
        Some(r"^wip/.+")
    );
    // Untouched patterns keep their defaults.
    assert!(config.patterns.patch.is_match("bugfix/login"));

    reset_env();
}

#[test]
#[serial]
fn test_from_env_invalid_pattern() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);
    env::set_var("INPUT_PATCH_PATTERN", "(");

    let err = Config::from_env().unwrap_err();

    assert!(err.to_string().contains("invalid patch pattern value"));

    reset_env();
}

#[test]
#[serial]
fn test_from_env_invalid_bump() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);
    env::set_var("INPUT_BUMP", "hotfix");

    let err = Config::from_env().unwrap_err();

    assert!(err.to_string().contains("invalid bump value: hotfix"));

    reset_env();
}

#[test]
#[serial]
fn test_from_env_invalid_branching_model() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);
    env::set_var("INPUT_BRANCHING_MODEL", "gitflow");

    let err = Config::from_env().unwrap_err();

    assert!(err
        .to_string()
        .contains("invalid branching model value: gitflow"));

    reset_env();
}

#[test]
#[serial]
fn test_from_env_invalid_base_version() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);
    env::set_var("INPUT_BASE_VERSION", "not-a-version");

    let err = Config::from_env().unwrap_err();

    assert!(err
        .to_string()
        .contains("invalid base_version format: not-a-version"));

    reset_env();
}

#[test]
#[serial]
fn test_from_env_invalid_prerelease_id() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);
    env::set_var("INPUT_PRERELEASE_ID", "not/ok");

    let err = Config::from_env().unwrap_err();

    assert!(err.to_string().contains("invalid prerelease_id value"));

    reset_env();
}

#[test]
#[serial]
fn test_from_env_invalid_debug() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);
    env::set_var("INPUT_DEBUG", "yes");

    let err = Config::from_env().unwrap_err();

    assert!(err.to_string().contains("invalid debug argument: yes"));

    reset_env();
}

#[test]
#[serial]
fn test_from_env_blank_input_uses_default() {
    reset_env();
    env::set_var("GITHUB_SHA", SHA);
    env::set_var("INPUT_BUMP", "   ");

    let config = Config::from_env().unwrap();

    assert_eq!(config.bump, Bump::Auto);

    reset_env();
}
