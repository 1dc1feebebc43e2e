//! Legacy shorthand grammar
//!
//! Accepts versions such as `1.0.1b`, `1.0.1b2` or `1.0.10rc3`: a core
//! version directly followed by an `rc` or single-letter tag with optional
//! digits. No build metadata. Tags are rewritten into strict pre-release form
//! so the precedence rules only ever see one format.

use std::sync::OnceLock;

use regex::Regex;

use super::{core_from_captures, Grammar};
use crate::domain::Version;

const COMPATIBILITY_PATTERN: &str = concat!(
    r"^(?P<major>0|[1-9][0-9]*)\.",
    r"(?P<minor>0|[1-9][0-9]*)\.",
    r"(?P<patch>0|[1-9][0-9]*)",
    r"(?P<tag>(?:rc|[A-Za-z])[0-9]*)?$",
);

const TAG_PATTERN: &str = r"^(rc|[A-Za-z])([0-9]*)$";

fn compatibility_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(COMPATIBILITY_PATTERN).expect("compatibility version pattern must compile")
    })
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TAG_PATTERN).expect("shorthand tag pattern must compile"))
}

/// Rewrite a shorthand tag into pre-release form.
///
/// The prefix is kept verbatim. Trailing digits lose their leading zeros and
/// are appended after a hyphen: `b1` -> `b-1`, `rc007` -> `rc-7`, `b` -> `b`.
/// A tag that is not `prefix + digits` is returned unchanged.
pub fn normalize_tag(tag: &str) -> String {
    let Some(caps) = tag_regex().captures(tag) else {
        return tag.to_string();
    };

    let prefix = &caps[1];
    let digits = &caps[2];
    if digits.is_empty() {
        return prefix.to_string();
    }

    let number = digits.trim_start_matches('0');
    let number = if number.is_empty() { "0" } else { number };
    format!("{}-{}", prefix, number)
}

/// `major.minor.patch[tag]` where `tag := ("rc" | letter) digits?`
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityGrammar;

impl Grammar for CompatibilityGrammar {
    fn name(&self) -> &'static str {
        "compatibility"
    }

    fn recognize(&self, input: &str) -> Option<Version> {
        let caps = compatibility_regex().captures(input)?;
        let core = core_from_captures(&caps)?;
        let prerelease = caps.name("tag").map(|m| {
            let normalized = normalize_tag(m.as_str());
            log::trace!("normalized shorthand tag '{}' to '{}'", m.as_str(), normalized);
            normalized
        });

        Some(Version::from_parts(input, core, prerelease, None))
    }
}
