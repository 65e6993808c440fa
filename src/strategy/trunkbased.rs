use crate::config::{Bump, Config};
use crate::error::Result;
use crate::patterns::BranchPatterns;
use crate::version::VersionExt;

use super::{
    apply_increment, AncestorQuery, BranchStrategy, BumpDecision, BumpMethod, TagOutcome,
    TagParams, VersionClass,
};

/// Trunk-based strategy. A single long-lived branch accumulates an integer
/// build counter in the version's build metadata; there is no prerelease
/// standing and no promotion step.
pub struct TrunkBased {
    bump: Bump,
    main_branch: String,
    patterns: BranchPatterns,
}

impl TrunkBased {
    pub fn new(config: &Config) -> Self {
        TrunkBased {
            bump: config.bump,
            main_branch: config.main_branch_name.clone(),
            patterns: config.patterns.clone(),
        }
    }
}

impl BranchStrategy for TrunkBased {
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

        let dest_is_main = dest_branch == self.main_branch;

        if self.patterns.patch.is_match(source_branch) && dest_is_main {
            return BumpDecision::Bump {
                method: BumpMethod::Build,
                class: Some(VersionClass::Patch),
            };
        }

        if self.patterns.minor.is_match(source_branch) && dest_is_main {
            return BumpDecision::Bump {
                method: BumpMethod::Build,
                class: Some(VersionClass::Minor),
            };
        }

        if self.patterns.major.is_match(source_branch) && dest_is_main {
            return BumpDecision::Bump {
                method: BumpMethod::Build,
                class: Some(VersionClass::Major),
            };
        }

        if self.patterns.build.is_match(source_branch) && dest_is_main {
            return BumpDecision::Bump {
                method: BumpMethod::Build,
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
            ..
        } = params;

        apply_increment(&mut version, method, class)?;

        let tag = match method {
            BumpMethod::Build => {
                let counter = if class.is_none() {
                    version
                        .last_build_identifier()
                        .and_then(|id| id.parse::<u64>().ok())
                        .unwrap_or(0)
                } else {
                    0
                };
                version.set_build_counter(counter + 1)?;
                version.tag_string(prefix)
            }
            // every explicit method renders a finalized version; unknown
            // standing (prerelease or build remnants) is stripped
            _ => format!("{}{}", prefix, version.finalize()),
        };

        Ok(TagOutcome {
            tag,
            ancestor_query: AncestorQuery::unfiltered(),
            is_prerelease: false,
        })
    }

    fn name(&self) -> &'static str {
        "trunk-based"
    }
}
