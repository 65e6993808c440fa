use semver::Version;

use crate::config::{Bump, Config};
use crate::error::Result;
use crate::patterns::BranchPatterns;
use crate::version::VersionExt;

use super::{
    apply_increment, AncestorQuery, BranchStrategy, BumpDecision, BumpMethod, TagOutcome,
    TagParams, VersionClass,
};

/// Git-flow strategy. Merges into the develop branch accumulate a
/// prerelease build counter; merging develop into the main branch promotes
/// the accumulated prerelease to a final release.
pub struct GitFlow {
    bump: Bump,
    main_branch: String,
    develop_branch: String,
    patterns: BranchPatterns,
}

impl GitFlow {
    pub fn new(config: &Config) -> Self {
        GitFlow {
            bump: config.bump,
            main_branch: config.main_branch_name.clone(),
            develop_branch: config.develop_branch_name.clone(),
            patterns: config.patterns.clone(),
        }
    }
}

impl BranchStrategy for GitFlow {
    fn determine_bump(&self, source_branch: &str, dest_branch: &str) -> BumpDecision {
        if let Some(exclude) = &self.patterns.exclude {
            if exclude.is_match(source_branch) {
                return BumpDecision::Skip;
            }
        }

        if let Some(method) = BumpMethod::from_override(self.bump) {
            return BumpDecision::Bump {
                method,
                class: None,
            };
        }

        let dest_is_develop = dest_branch == self.develop_branch;

        if self.patterns.patch.is_match(source_branch) && dest_is_develop {
            return BumpDecision::Bump {
                method: BumpMethod::Build,
                class: Some(VersionClass::Patch),
            };
        }

        if self.patterns.minor.is_match(source_branch) && dest_is_develop {
            return BumpDecision::Bump {
                method: BumpMethod::Build,
                class: Some(VersionClass::Minor),
            };
        }

        if self.patterns.major.is_match(source_branch) && dest_is_develop {
            return BumpDecision::Bump {
                method: BumpMethod::Build,
                class: Some(VersionClass::Major),
            };
        }

        if self.patterns.build.is_match(source_branch) && dest_is_develop {
            return BumpDecision::Bump {
                method: BumpMethod::Build,
                class: None,
            };
        }

        if self.patterns.hotfix.is_match(source_branch) && dest_branch == self.main_branch {
            return BumpDecision::Bump {
                method: BumpMethod::Hotfix,
                class: None,
            };
        }

        if source_branch == self.develop_branch && dest_branch == self.main_branch {
            return BumpDecision::Bump {
                method: BumpMethod::Final,
                class: None,
            };
        }

        BumpDecision::Bump {
            method: BumpMethod::Build,
            class: None,
        }
    }

    fn tag(&self, params: TagParams<'_>) -> Result<TagOutcome> {
        let TagParams {
            method,
            class,
            mut version,
            prefix,
            prerelease_id,
        } = params;

        apply_increment(&mut version, method, class)?;

        match method {
            BumpMethod::Build => {
                // Continue the running counter only when the previous tag
                // already carried one and no class was forced this round.
                let identifiers = version.prerelease_identifiers();
                let counter = if identifiers.len() > 1 && class.is_none() {
                    identifiers[1].parse::<u64>().unwrap_or(0)
                } else {
                    0
                };
                version.set_prerelease(&format!("{}.{}", prerelease_id, counter + 1))?;

                Ok(TagOutcome {
                    tag: version.tag_string(prefix),
                    ancestor_query: AncestorQuery {
                        include: prerelease_glob(prefix, prerelease_id),
                        exclude: String::new(),
                    },
                    is_prerelease: true,
                })
            }
            BumpMethod::Major | BumpMethod::Minor | BumpMethod::Patch | BumpMethod::Hotfix => {
                Ok(release_outcome(&version, prefix, prerelease_id))
            }
            BumpMethod::Final => Ok(TagOutcome {
                tag: format!("{}{}", prefix, version.finalize()),
                ancestor_query: AncestorQuery {
                    include: release_glob(prefix),
                    exclude: prerelease_glob(prefix, prerelease_id),
                },
                is_prerelease: false,
            }),
        }
    }

    fn name(&self) -> &'static str {
        "git-flow"
    }
}

/// Render a bumped release version. A version still carrying prerelease
/// identifiers keeps its prerelease standing and matches ancestor tags
/// with the prerelease glob; a clean version uses the release glob pair.
fn release_outcome(version: &Version, prefix: &str, prerelease_id: &str) -> TagOutcome {
    let is_prerelease = !version.pre.is_empty();
    let ancestor_query = if is_prerelease {
        AncestorQuery {
            include: prerelease_glob(prefix, prerelease_id),
            exclude: String::new(),
        }
    } else {
        AncestorQuery {
            include: release_glob(prefix),
            exclude: prerelease_glob(prefix, prerelease_id),
        }
    };

    TagOutcome {
        tag: version.tag_string(prefix),
        ancestor_query,
        is_prerelease,
    }
}

fn prerelease_glob(prefix: &str, prerelease_id: &str) -> String {
    format!("{}[0-9]*-{}*", prefix, prerelease_id)
}

fn release_glob(prefix: &str) -> String {
    format!("{}[0-9]*", prefix)
}
