use crate::domain::precedence;
use crate::domain::prerelease::Identifier;
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Parsed version value
///
/// Built once by a grammar and never mutated afterwards. Equality, ordering and
/// hashing follow semantic-versioning precedence: build metadata and the
/// original spelling are ignored.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<String>,
    build: Option<String>,
    original: String,
}

impl Version {
    pub(crate) fn from_parts(
        original: &str,
        (major, minor, patch): (u64, u64, u64),
        prerelease: Option<String>,
        build: Option<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease,
            build,
            original: original.to_string(),
        }
    }

    /// Parse a version string, trying the strict grammar first and the
    /// compatibility grammar second
    pub fn parse(input: &str) -> Result<Self> {
        crate::grammar::parse(input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The `(major, minor, patch)` triple
    pub fn core(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Normalized pre-release label, without the leading `-`
    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    /// Build metadata, without the leading `+`
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// The exact input this version was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Pre-release identifiers in order; empty for a release version
    pub fn prerelease_identifiers(&self) -> impl Iterator<Item = Identifier<'_>> + '_ {
        self.prerelease.as_deref().into_iter().flat_map(|label| Identifier::split(label))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        precedence::compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core().hash(state);
        self.is_prerelease().hash(state);
        for identifier in self.prerelease_identifiers() {
            identifier.hash(state);
        }
    }
}

impl FromStr for Version {
    type Err = crate::error::SemverCompatError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Canonical form: `major.minor.patch[-prerelease][+build]`
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.prerelease {
            write!(f, "-{}", pre)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }
        Ok(())
    }
}
