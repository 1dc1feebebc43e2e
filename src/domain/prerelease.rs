//! Pre-release identifier handling for semantic versioning
//!
//! A pre-release label such as `alpha.1` is a dot-separated list of identifiers.
//! Each identifier is either numeric or alphanumeric, and the two kinds order
//! differently. See https://semver.org/#spec-item-11

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One dot-separated component of a pre-release label
#[derive(Debug, Clone, Copy)]
pub enum Identifier<'a> {
    /// Identifier made only of ASCII digits, compared by value
    Numeric(&'a str),
    /// Any other identifier, compared byte-wise in ASCII order
    Alphanumeric(&'a str),
}

impl<'a> Identifier<'a> {
    /// Classify a single identifier
    ///
    /// An identifier is numeric when it is non-empty and every character is an
    /// ASCII digit. Everything else is alphanumeric.
    pub fn classify(s: &'a str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(s)
        } else {
            Identifier::Alphanumeric(s)
        }
    }

    /// Split a pre-release label into classified identifiers
    pub fn split(label: &'a str) -> impl Iterator<Item = Identifier<'a>> + 'a {
        label.split('.').map(Identifier::classify)
    }

    pub fn as_str(&self) -> &'a str {
        match self {
            Identifier::Numeric(s) | Identifier::Alphanumeric(s) => s,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

/// Digits with leading zeros removed; "0" and "000" both become "".
fn significant_digits(digits: &str) -> &str {
    digits.trim_start_matches('0')
}

/// Compare two digit runs by numeric value without converting to an integer.
fn compare_numeric(left: &str, right: &str) -> Ordering {
    let left = significant_digits(left);
    let right = significant_digits(right);
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => compare_numeric(a, b),
            (Identifier::Alphanumeric(a), Identifier::Alphanumeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::Alphanumeric(_)) => Ordering::Less,
            (Identifier::Alphanumeric(_), Identifier::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Identifier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Identifier<'_> {}

impl Hash for Identifier<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Identifier::Numeric(s) => {
                0u8.hash(state);
                significant_digits(s).hash(state);
            }
            Identifier::Alphanumeric(s) => {
                1u8.hash(state);
                s.hash(state);
            }
        }
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
