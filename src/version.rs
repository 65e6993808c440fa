use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{GitSemverError, Result};

/// Parse version text that has already had any tag prefix stripped
/// (e.g., "1.2.3-pre.1" -> Version). Strict: the text must be a full
/// major.minor.patch with optional prerelease and build segments.
pub fn parse(text: &str) -> Result<Version> {
    Version::parse(text).map_err(|e| {
        GitSemverError::parse(format!("'{}' is not a valid semantic version: {}", text, e))
    })
}

/// Increment and rendering operations layered over `semver::Version`.
///
/// Increments use checked arithmetic, reset every lower-order component
/// to zero, and drop prerelease identifiers. Build metadata is left for
/// the caller to manage.
pub trait VersionExt {
    fn increment_major(&mut self) -> Result<()>;
    fn increment_minor(&mut self) -> Result<()>;
    fn increment_patch(&mut self) -> Result<()>;

    /// Render "major.minor.patch" with prerelease and build stripped
    fn finalize(&self) -> String;

    /// Render the full version behind a tag prefix (e.g., "v1.2.3-pre.1")
    fn tag_string(&self, prefix: &str) -> String;

    /// Dot-separated prerelease identifiers, empty when final
    fn prerelease_identifiers(&self) -> Vec<&str>;

    /// Replace the prerelease suffix; empty text clears it
    fn set_prerelease(&mut self, text: &str) -> Result<()>;

    /// Last dot-separated build metadata identifier, if any
    fn last_build_identifier(&self) -> Option<&str>;

    /// Replace build metadata with a single numeric counter
    fn set_build_counter(&mut self, counter: u64) -> Result<()>;
}

impl VersionExt for Version {
    fn increment_major(&mut self) -> Result<()> {
        self.major = self
            .major
            .checked_add(1)
            .ok_or_else(|| GitSemverError::overflow("major component out of range"))?;
        self.minor = 0;
        self.patch = 0;
        self.pre = Prerelease::EMPTY;
        Ok(())
    }

    fn increment_minor(&mut self) -> Result<()> {
        self.minor = self
            .minor
            .checked_add(1)
            .ok_or_else(|| GitSemverError::overflow("minor component out of range"))?;
        self.patch = 0;
        self.pre = Prerelease::EMPTY;
        Ok(())
    }

    fn increment_patch(&mut self) -> Result<()> {
        self.patch = self
            .patch
            .checked_add(1)
            .ok_or_else(|| GitSemverError::overflow("patch component out of range"))?;
        self.pre = Prerelease::EMPTY;
        Ok(())
    }

    fn finalize(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    fn tag_string(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self)
    }

    fn prerelease_identifiers(&self) -> Vec<&str> {
        if self.pre.is_empty() {
            Vec::new()
        } else {
            self.pre.as_str().split('.').collect()
        }
    }

    fn set_prerelease(&mut self, text: &str) -> Result<()> {
        self.pre = if text.is_empty() {
            Prerelease::EMPTY
        } else {
            Prerelease::new(text).map_err(|e| {
                GitSemverError::parse(format!("'{}' is not a valid prerelease suffix: {}", text, e))
            })?
        };
        Ok(())
    }

    fn last_build_identifier(&self) -> Option<&str> {
        if self.build.is_empty() {
            None
        } else {
            self.build.as_str().split('.').next_back()
        }
    }

    fn set_build_counter(&mut self, counter: u64) -> Result<()> {
        self.build = BuildMetadata::new(&counter.to_string()).map_err(|e| {
            GitSemverError::parse(format!("'{}' is not valid build metadata: {}", counter, e))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let v = parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
        assert!(v.pre.is_empty());
        assert!(v.build.is_empty());
    }

    #[test]
    fn test_parse_with_prerelease() {
        let v = parse("1.2.3-pre.1").unwrap();
        assert_eq!(v.pre.as_str(), "pre.1");
    }

    #[test]
    fn test_parse_with_build_metadata() {
        let v = parse("1.2.3+7").unwrap();
        assert_eq!(v.build.as_str(), "7");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse("1.2").is_err());
        assert!(parse("v1.2.3").is_err());
        assert!(parse("1.2.3.4").is_err());
        assert!(parse("not-a-version").is_err());
    }

    #[test]
    fn test_parse_error_names_the_input() {
        let err = parse("bogus").unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_increment_major_zeroes_lower_and_clears_prerelease() {
        let mut v = parse("1.2.3-pre.1").unwrap();
        v.increment_major().unwrap();
        assert_eq!(v.to_string(), "2.0.0");
    }

    #[test]
    fn test_increment_minor_zeroes_patch_and_clears_prerelease() {
        let mut v = parse("1.2.3-pre.1").unwrap();
        v.increment_minor().unwrap();
        assert_eq!(v.to_string(), "1.3.0");
    }

    #[test]
    fn test_increment_patch_clears_only_prerelease() {
        let mut v = parse("1.2.3-pre.1").unwrap();
        v.increment_patch().unwrap();
        assert_eq!(v.to_string(), "1.2.4");
    }

    #[test]
    fn test_increment_overflow_is_an_error() {
        let mut v = Version::new(u64::MAX, 0, 0);
        assert!(v.increment_major().is_err());

        let mut v = Version::new(1, u64::MAX, 0);
        assert!(v.increment_minor().is_err());

        let mut v = Version::new(1, 0, u64::MAX);
        assert!(v.increment_patch().is_err());
    }

    #[test]
    fn test_finalize_strips_prerelease_and_build() {
        let v = parse("1.2.3-pre.1+42").unwrap();
        assert_eq!(v.finalize(), "1.2.3");
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let v = parse("1.2.3-pre.1").unwrap();
        let once = v.finalize();
        let twice = parse(&once).unwrap().finalize();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_tag_string() {
        let v = parse("1.2.3-pre.1").unwrap();
        assert_eq!(v.tag_string("v"), "v1.2.3-pre.1");
        assert_eq!(v.tag_string(""), "1.2.3-pre.1");
        assert_eq!(v.tag_string("ver"), "ver1.2.3-pre.1");
    }

    #[test]
    fn test_round_trip() {
        let cases = [
            "0.0.0",
            "1.2.3",
            "1.2.3-pre.1",
            "1.2.3-alpha.beta",
            "1.2.3+7",
            "1.2.3-pre.2+1",
        ];
        for text in cases {
            assert_eq!(parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_prerelease_identifiers() {
        let v = parse("1.2.3-alpha.2").unwrap();
        assert_eq!(v.prerelease_identifiers(), vec!["alpha", "2"]);

        let v = parse("1.2.3").unwrap();
        assert!(v.prerelease_identifiers().is_empty());
    }

    #[test]
    fn test_set_prerelease() {
        let mut v = parse("1.2.3").unwrap();
        v.set_prerelease("pre.4").unwrap();
        assert_eq!(v.to_string(), "1.2.3-pre.4");
    }

    #[test]
    fn test_set_prerelease_empty_clears() {
        let mut v = parse("1.2.3-pre.4").unwrap();
        v.set_prerelease("").unwrap();
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_set_prerelease_invalid() {
        let mut v = parse("1.2.3").unwrap();
        assert!(v.set_prerelease("pre_1").is_err());
    }

    #[test]
    fn test_last_build_identifier() {
        assert_eq!(parse("1.2.3+7").unwrap().last_build_identifier(), Some("7"));
        assert_eq!(
            parse("1.2.3+build.12").unwrap().last_build_identifier(),
            Some("12")
        );
        assert_eq!(parse("1.2.3").unwrap().last_build_identifier(), None);
    }

    #[test]
    fn test_set_build_counter() {
        let mut v = parse("1.2.3+7").unwrap();
        v.set_build_counter(8).unwrap();
        assert_eq!(v.to_string(), "1.2.3+8");
    }

    #[test]
    fn test_precedence_ordering() {
        // prerelease sorts below the final release
        assert!(parse("1.2.3-pre.1").unwrap() < parse("1.2.3").unwrap());
        // numeric identifiers sort below alphanumeric ones
        assert!(parse("1.2.3-1").unwrap() < parse("1.2.3-alpha").unwrap());
        // build metadata does not participate in precedence
        let a = parse("1.2.3+1").unwrap();
        let b = parse("1.2.3+2").unwrap();
        assert_eq!(a.cmp_precedence(&b), std::cmp::Ordering::Equal);
    }
}
