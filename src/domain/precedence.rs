//! Precedence rules for comparing versions.
//!
//! Core parts are compared numerically, left to right. When they tie, a release
//! outranks any pre-release, and two pre-releases are compared identifier by
//! identifier. Build metadata never takes part.

use crate::domain::prerelease::Identifier;
use crate::domain::version::Version;
use std::cmp::Ordering;

/// Compare `(major, minor, patch)` lexicographically.
pub fn compare_core(left: &Version, right: &Version) -> Ordering {
    left.core().cmp(&right.core())
}

/// Compare pre-release labels of two versions whose cores are equal.
///
/// A missing pre-release ranks above any present one.
pub fn compare_prerelease(left: &Version, right: &Version) -> Ordering {
    match (left.prerelease(), right.prerelease()) {
        (None, None) => Ordering::Equal,
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (Some(a), Some(b)) => compare_labels(a, b),
    }
}

/// Compare two pre-release labels identifier by identifier.
///
/// The first differing identifier decides. If one label is a prefix of the
/// other, the shorter one ranks lower.
pub fn compare_labels(left: &str, right: &str) -> Ordering {
    Identifier::split(left).cmp(Identifier::split(right))
}

/// Full three-way precedence comparison.
pub fn compare(left: &Version, right: &Version) -> Ordering {
    compare_core(left, right).then_with(|| compare_prerelease(left, right))
}
