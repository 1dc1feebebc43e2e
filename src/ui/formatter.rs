//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are testable; `display_*` functions
//! print them.

use console::style;

use crate::cli::{CheckOutcome, CheckReport, Comparison};
use crate::domain::Version;

/// Label a version the way the output settings ask for.
pub fn version_label(version: &Version, canonical: bool) -> String {
    if canonical {
        version.to_string()
    } else {
        version.original().to_string()
    }
}

pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// One line per `check` outcome.
///
/// Valid inputs show the canonical form next to the input when the two differ.
pub fn format_check_outcome(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Valid(version) => {
            let canonical = version.to_string();
            if canonical == version.original() {
                format_success(version.original())
            } else {
                format_success(&format!(
                    "{} {} {}",
                    version.original(),
                    style("→").dim(),
                    canonical
                ))
            }
        }
        CheckOutcome::Invalid { reason, .. } => format_error(reason),
    }
}

/// Print a `check` report; invalid inputs go to stderr.
pub fn display_check_report(report: &CheckReport) {
    for outcome in &report.outcomes {
        let line = format_check_outcome(outcome);
        match outcome {
            CheckOutcome::Valid(_) => println!("{}", line),
            CheckOutcome::Invalid { .. } => eprintln!("{}", line),
        }
    }

    if !report.all_valid() {
        display_status(&format!(
            "{} of {} versions invalid",
            report.invalid_count(),
            report.outcomes.len()
        ));
    }
}

pub fn format_comparison(comparison: &Comparison, canonical: bool) -> String {
    format!(
        "{} {} {}",
        version_label(&comparison.left, canonical),
        style(comparison.symbol()).bold(),
        version_label(&comparison.right, canonical)
    )
}

/// Print one version per line.
pub fn display_versions(versions: &[Version], canonical: bool) {
    for version in versions {
        println!("{}", version_label(version, canonical));
    }
}
