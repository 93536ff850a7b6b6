use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ServiceError;

// MAJOR.MINOR.PATCH with optional leading "v", prerelease and build metadata.
// Numeric components must not carry leading zeros.
static SEMVER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^v?(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-[0-9a-z-]+(?:\.[0-9a-z-]+)*)?(?:\+[0-9a-z-]+(?:\.[0-9a-z-]+)*)?$",
    )
    .expect("semver pattern compiles")
});

/// Checks a version string against the semver grammar. Pure, no side effects.
pub fn validate(version: &str) -> Result<(), ServiceError> {
    if SEMVER_RE.is_match(version) {
        Ok(())
    } else {
        Err(ServiceError::InvalidVersion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_versions() {
        for version in ["1.2.3", "0.0.0", "10.20.30", "v1.2.3"] {
            assert!(validate(version).is_ok(), "{version} should be accepted");
        }
    }

    #[test]
    fn accepts_prerelease_and_build_metadata() {
        for version in [
            "1.2.3-beta.1",
            "v1.2.3-beta.1+build5",
            "1.0.0+20130313144700",
            "2.0.0-rc-1",
        ] {
            assert!(validate(version).is_ok(), "{version} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_versions() {
        for version in ["1.02.3", "1.2", "abc", "", "1.2.3.4", "01.0.0", "1.2.3-"] {
            assert!(validate(version).is_err(), "{version} should be rejected");
        }
    }

    #[test]
    fn rejection_message_is_fixed() {
        let err = validate("1.2").unwrap_err();
        assert_eq!(err.to_string(), "version must be a valid semver string");
    }
}
