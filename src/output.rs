//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. The primary display
//! for every entity (page, validation problem) is its semantic identity —
//! title or config location, with a positional index — and filesystem
//! detail is shown as indented context lines underneath.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Pages
//! 001 Home
//!     Source: index.md
//! 002 Developer Introduction
//!     Source: developer/intro.md
//!
//! Assets
//!     2 files
//! ```
//!
//! ## Check
//!
//! ```text
//! Problems
//! 001 sidebar > Developer > Missing
//!     link '/developer/nope.md' does not resolve to a content page
//!
//! Checked 13 pages, 1 problem found
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::scan::ContentInventory;
use crate::validate::ValidationReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Pluralization suffix for counted nouns.
fn plural_s(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

// ============================================================================
// Scan output
// ============================================================================

/// Format the content inventory: every page with its title and source path,
/// then an asset summary.
pub fn format_scan_output(inventory: &ContentInventory) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Pages".to_string());
    for (i, page) in inventory.pages().iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), page.title));
        lines.push(format!("    Source: {}", page.route));
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    let count = inventory.asset_count();
    lines.push(format!("    {} file{}", count, plural_s(count)));

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(inventory: &ContentInventory) {
    for line in format_scan_output(inventory) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the validation report: each problem with its config location,
/// then a summary line.
pub fn format_check_output(report: &ValidationReport, page_count: usize) -> Vec<String> {
    let mut lines = Vec::new();

    if !report.is_ok() {
        lines.push("Problems".to_string());
        for (i, problem) in report.problems().iter().enumerate() {
            lines.push(format!("{} {}", format_index(i + 1), problem.location));
            lines.push(format!("    {}", problem.message));
        }
        lines.push(String::new());
    }

    let problems = report.problem_count();
    if problems == 0 {
        lines.push(format!(
            "Checked {} page{}, configuration is valid",
            page_count,
            plural_s(page_count)
        ));
    } else {
        lines.push(format!(
            "Checked {} page{}, {} problem{} found",
            page_count,
            plural_s(page_count),
            problems,
            plural_s(problems)
        ));
    }

    lines
}

/// Print check output to stdout.
pub fn print_check_output(report: &ValidationReport, page_count: usize) {
    for line in format_check_output(report, page_count) {
        println!("{}", line);
    }
}
