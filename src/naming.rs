//! Centralized filename parsing for the ordering-prefix convention.
//!
//! Study-guide content uses a dotted numeric prefix to pin display order:
//! `2.1-content-types.md` sorts under `1.3-git.md` and ahead of
//! `2.10-web-services.md`. This module provides a single parsing function
//! that extracts the ordering key, the residual slug, and a display title
//! consistently for files and directories alike.
//!
//! ## Display Titles
//!
//! The numeric prefix stays in the display title (the study guide shows
//! "2.1 Content Types" in its sidebar) and dashes in the name portion become
//! spaces:
//! - `2.1-content-types.md` → "2.1 content types"
//! - `1.3-git/` → "1.3 git"
//! - `intro.md` → "intro"
//!
//! Display titles are only a fallback — a page's first `#` heading wins when
//! present (see [`crate::scan`]).

/// Result of parsing an entry name like `2.1-content-types`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Ordering prefix components if present (e.g., `[2, 1]` from `2.1-foo`).
    pub order: Option<Vec<u32>>,
    /// Raw name part after the prefix dash, dashes preserved. Empty if the
    /// entry is prefix-only. For unprefixed entries, this is the full input.
    pub name: String,
    /// Display title: prefix (dots restored) plus name with dashes as spaces.
    pub display_title: String,
}

/// Parse an entry name following the `N.M-name` / `N-name` convention.
///
/// Handles these patterns:
/// - `"2.1-content-types"` → order=Some([2, 1]), name="content-types", display_title="2.1 content types"
/// - `"4.4.12-services"` → order=Some([4, 4, 12]), name="services"
/// - `"7-leverage-community"` → order=Some([7]), display_title="7 leverage community"
/// - `"2.1"` → order=Some([2, 1]), name="", display_title="2.1"
/// - `"intro"` → order=None, name="intro", display_title="intro"
/// - `"site-building"` → order=None, display_title="site building"
pub fn parse_entry_name(name: &str) -> ParsedName {
    if let Some(dash_pos) = name.find('-') {
        let prefix = &name[..dash_pos];
        if let Some(order) = parse_order_prefix(prefix) {
            let raw = &name[dash_pos + 1..];
            let display_title = if raw.is_empty() {
                prefix.to_string()
            } else {
                format!("{} {}", prefix, raw.replace('-', " "))
            };
            return ParsedName {
                order: Some(order),
                name: raw.to_string(),
                display_title,
            };
        }
    }
    // Prefix-only entry, no dash (e.g. "2.1")
    if let Some(order) = parse_order_prefix(name) {
        return ParsedName {
            order: Some(order),
            name: String::new(),
            display_title: name.to_string(),
        };
    }
    // No ordering prefix
    ParsedName {
        order: None,
        name: name.to_string(),
        display_title: name.replace('-', " "),
    }
}

/// Parse a dotted numeric prefix like `2`, `2.1`, or `4.4.12`.
///
/// Every dot-separated component must be a plain number; anything else
/// (including an empty string) means the entry has no ordering prefix.
fn parse_order_prefix(prefix: &str) -> Option<Vec<u32>> {
    if prefix.is_empty() {
        return None;
    }
    prefix
        .split('.')
        .map(|part| part.parse::<u32>().ok())
        .collect()
}

impl ParsedName {
    /// Sort key: ordering components, then name. Unprefixed entries sort
    /// after all prefixed ones, alphabetically among themselves.
    pub fn sort_key(&self) -> (Vec<u32>, String) {
        match &self.order {
            Some(order) => (order.clone(), self.name.clone()),
            None => (vec![u32::MAX], self.name.clone()),
        }
    }
}

/// Compare two entry names in display order.
///
/// Convenience wrapper used when sorting directory listings.
pub fn compare_names(a: &str, b: &str) -> std::cmp::Ordering {
    parse_entry_name(a)
        .sort_key()
        .cmp(&parse_entry_name(b).sort_key())
}
