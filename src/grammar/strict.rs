//! Standard semantic-versioning grammar, see https://semver.org/#backusnaur-form-grammar-for-valid-semver-versions

use std::sync::OnceLock;

use regex::Regex;

use super::{core_from_captures, Grammar};
use crate::domain::Version;

const STRICT_PATTERN: &str = concat!(
    r"^(?P<major>0|[1-9][0-9]*)\.",
    r"(?P<minor>0|[1-9][0-9]*)\.",
    r"(?P<patch>0|[1-9][0-9]*)",
    r"(?:-(?P<prerelease>",
    r"(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*)",
    r"(?:\.(?:0|[1-9][0-9]*|[0-9]*[A-Za-z-][0-9A-Za-z-]*))*",
    r"))?",
    r"(?:\+(?P<build>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$",
);

fn strict_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STRICT_PATTERN).expect("strict version pattern must compile"))
}

/// `major.minor.patch[-prerelease][+build]`
///
/// Numeric parts and numeric pre-release identifiers may not carry leading
/// zeros. Build identifiers may.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictGrammar;

impl Grammar for StrictGrammar {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn recognize(&self, input: &str) -> Option<Version> {
        let caps = strict_regex().captures(input)?;
        let core = core_from_captures(&caps)?;
        let prerelease = caps.name("prerelease").map(|m| m.as_str().to_string());
        let build = caps.name("build").map(|m| m.as_str().to_string());

        Some(Version::from_parts(input, core, prerelease, build))
    }
}
