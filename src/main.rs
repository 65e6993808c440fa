use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use git_semver::config::Config;
use git_semver::generate::{self, TagResult};
use git_semver::git::GitCli;
use git_semver::{output, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-semver",
    about = "Generate the next semantic version tag from branch merge history"
)]
struct Args {
    #[arg(long, help = "Repository directory to inspect")]
    repo_dir: Option<String>,

    #[arg(long, help = "Output file for key/value results (defaults to $GITHUB_OUTPUT)")]
    output: Option<PathBuf>,

    #[arg(long, help = "Enable debug logs")]
    debug: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("git-semver {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            ui::display_error(&format!("failed to load configuration: {}", e));
            std::process::exit(1);
        }
    };

    if let Some(repo_dir) = args.repo_dir {
        config.repo_dir = repo_dir;
    }

    if args.debug {
        config.debug = true;
    }

    if config.debug {
        ui::display_debug(&config.summary());
    }

    let git = GitCli::new(&config.repo_dir);

    let result = match generate::tag(&config, &git) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("failed to generate semver tag: {}", e));
            std::process::exit(1);
        }
    };

    report(&result, args.output)
}

/// Print the four result entries and append them to the output file,
/// if one is configured.
fn report(result: &TagResult, output_override: Option<PathBuf>) -> Result<()> {
    let is_prerelease = result.is_prerelease.to_string();
    let entries = [
        ("PREVIOUS_TAG", result.previous_tag.as_str()),
        ("ANCESTOR_TAG", result.ancestor_tag.as_str()),
        ("SEMVER_TAG", result.semver_tag.as_str()),
        ("IS_PRERELEASE", is_prerelease.as_str()),
    ];

    for (key, value) in entries {
        ui::display_output(key, value);
    }

    let output_path =
        output_override.or_else(|| std::env::var_os("GITHUB_OUTPUT").map(PathBuf::from));

    match output_path {
        Some(path) => {
            for (key, value) in entries {
                output::set_output(&path, key, value)
                    .with_context(|| format!("failed to write {} to {}", key, path.display()))?;
            }
        }
        None => ui::display_status("no output file configured, results printed only"),
    }

    Ok(())
}
