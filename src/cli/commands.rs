use std::cmp::Ordering;

use crate::domain::Version;
use crate::error::Result;
use crate::grammar::Parser;

/// Result of validating one input
#[derive(Debug)]
pub enum CheckOutcome {
    Valid(Version),
    Invalid { input: String, reason: String },
}

/// Results of `check`, in input order
#[derive(Debug, Default)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn all_valid(&self) -> bool {
        self.invalid_count() == 0
    }

    pub fn invalid_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, CheckOutcome::Invalid { .. }))
            .count()
    }
}

/// Validate every input; never stops at the first failure.
pub fn run_check<I>(parser: &Parser, inputs: I) -> CheckReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let outcomes = inputs
        .into_iter()
        .map(|input| {
            let input = input.as_ref();
            match parser.parse(input) {
                Ok(version) => CheckOutcome::Valid(version),
                Err(e) => CheckOutcome::Invalid {
                    input: input.to_string(),
                    reason: e.to_string(),
                },
            }
        })
        .collect();

    CheckReport { outcomes }
}

/// Verdict of comparing two versions
#[derive(Debug, Clone)]
pub struct Comparison {
    pub left: Version,
    pub right: Version,
    pub ordering: Ordering,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self.ordering {
            Ordering::Less => "<",
            Ordering::Equal => "==",
            Ordering::Greater => ">",
        }
    }
}

pub fn run_compare(parser: &Parser, left: &str, right: &str) -> Result<Comparison> {
    let left = parser.parse(left)?;
    let right = parser.parse(right)?;
    let ordering = left.cmp(&right);
    log::debug!("{} {:?} {}", left, ordering, right);

    Ok(Comparison {
        left,
        right,
        ordering,
    })
}

/// Parse every input, failing on the first invalid one.
pub fn parse_all<I>(parser: &Parser, inputs: I) -> Result<Vec<Version>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| parser.parse(input.as_ref()))
        .collect()
}

/// Sort by precedence. Equal versions keep their input order in both directions.
pub fn run_sort<I>(parser: &Parser, inputs: I, reverse: bool) -> Result<Vec<Version>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut versions = parse_all(parser, inputs)?;
    if reverse {
        versions.sort_by(|a, b| b.cmp(a));
    } else {
        versions.sort();
    }
    Ok(versions)
}

/// Highest-precedence version; the last one wins among equals.
pub fn run_max<I>(parser: &Parser, inputs: I) -> Result<Option<Version>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Ok(parse_all(parser, inputs)?.into_iter().max())
}
