//! User interface module - terminal output for the command-line tool.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_check_report, display_error, display_status, display_versions,
    format_check_outcome, format_comparison, version_label,
};

/// Turn colored output on or off for both stdout and stderr.
pub fn configure_colors(enabled: bool) {
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}
