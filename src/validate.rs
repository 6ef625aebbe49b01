//! Structural validation of a site configuration against its content tree.
//!
//! Authoring mistakes are content-correctness problems, not runtime
//! failures, so validation never fails fast: every problem is collected
//! into a [`ValidationReport`] with enough location context to find the
//! offending entry (`sidebar > Developer > 4.0 Back end Dev`). The `check`
//! command prints the full report and exits non-zero if it is non-empty.
//!
//! ## Checks
//!
//! - every internal nav and sidebar link resolves to a page in the content
//!   inventory (external links and fragments pass through untouched)
//! - no link value repeats among the immediate children of one sidebar
//!   group
//! - sidebar nesting stays within [`sidebar::MAX_DEPTH`]
//! - `theme.logo` points at an existing asset
//! - social links use a known icon and an absolute external URL
//! - the edit-link pattern carries a `:path` placeholder and parses as an
//!   http(s) URL

use crate::config::SiteConfig;
use crate::link::{self, LinkKind};
use crate::scan::ContentInventory;
use crate::sidebar;
use crate::types::KNOWN_ICONS;

/// A single validation problem with its location in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Where in the config the problem sits (`sidebar > Developer > Intro`).
    pub location: String,
    /// What is wrong.
    pub message: String,
}

/// All problems found in one validation pass, in config order.
#[derive(Debug, Default)]
pub struct ValidationReport {
    problems: Vec<Problem>,
}

impl ValidationReport {
    /// True when no problems were found.
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }

    /// Problems in the order they were found.
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Number of problems found.
    pub fn problem_count(&self) -> usize {
        self.problems.len()
    }

    fn push(&mut self, location: impl Into<String>, message: impl Into<String>) {
        self.problems.push(Problem {
            location: location.into(),
            message: message.into(),
        });
    }
}

/// Validate a configuration against the scanned content inventory.
pub fn validate(config: &SiteConfig, inventory: &ContentInventory) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_theme(config, inventory, &mut report);
    check_nav(config, inventory, &mut report);
    check_sidebar(config, inventory, &mut report);
    check_social_links(config, &mut report);

    report
}

fn check_theme(config: &SiteConfig, inventory: &ContentInventory, report: &mut ValidationReport) {
    if let Some(logo) = &config.theme.logo {
        if LinkKind::is_internal(logo) && !inventory.resolve_asset_link(logo) {
            report.push(
                "theme.logo",
                format!("asset '{logo}' not found in content tree"),
            );
        }
    }

    if let Some(edit_link) = &config.theme.edit_link {
        if !edit_link.pattern.contains(":path") {
            report.push(
                "theme.edit_link",
                format!("pattern '{}' has no :path placeholder", edit_link.pattern),
            );
        } else if !is_http_url(&edit_link.pattern) {
            report.push(
                "theme.edit_link",
                format!("pattern '{}' is not an http(s) URL", edit_link.pattern),
            );
        }
    }
}

fn check_nav(config: &SiteConfig, inventory: &ContentInventory, report: &mut ValidationReport) {
    for item in &config.nav {
        if LinkKind::is_internal(&item.link) && !inventory.resolve_page_link(&item.link) {
            report.push(
                format!("nav > {}", item.text),
                format!("link '{}' does not resolve to a content page", item.link),
            );
        }
    }
}

fn check_sidebar(config: &SiteConfig, inventory: &ContentInventory, report: &mut ValidationReport) {
    // Broken links, in display order
    sidebar::walk(&config.sidebar, &mut |trail, entry| {
        if let Some(link) = entry.link() {
            if LinkKind::is_internal(link) && !inventory.resolve_page_link(link) {
                report.push(
                    sidebar_location(trail, Some(entry.text())),
                    format!("link '{link}' does not resolve to a content page"),
                );
            }
        }
    });

    // Sibling duplicates
    for dup in sidebar::duplicate_sibling_links(&config.sidebar) {
        let trail: Vec<&str> = dup.trail.iter().map(String::as_str).collect();
        report.push(
            sidebar_location(&trail, None),
            format!("duplicate link '{}' among sibling entries", dup.link),
        );
    }

    // Nesting depth
    let depth = sidebar::depth(&config.sidebar);
    if depth > sidebar::MAX_DEPTH {
        report.push(
            "sidebar",
            format!(
                "nesting depth {depth} exceeds the maximum of {}",
                sidebar::MAX_DEPTH
            ),
        );
    }
}

fn check_social_links(config: &SiteConfig, report: &mut ValidationReport) {
    for social in &config.social_links {
        let location = format!("social_links > {}", social.icon);
        if !social.icon_known() {
            report.push(
                location.as_str(),
                format!(
                    "unknown icon '{}' (known: {})",
                    social.icon,
                    KNOWN_ICONS.join(", ")
                ),
            );
        }
        if !link::is_external(&social.link) {
            report.push(
                location.as_str(),
                format!("link '{}' must be an absolute external URL", social.link),
            );
        } else if !is_web_url(&social.link) {
            report.push(
                location.as_str(),
                format!("link '{}' is not a valid URL", social.link),
            );
        }
    }
}

fn sidebar_location(trail: &[&str], entry: Option<&str>) -> String {
    let mut parts = vec!["sidebar"];
    parts.extend_from_slice(trail);
    if let Some(text) = entry {
        parts.push(text);
    }
    parts.join(" > ")
}

/// Strict http(s) URL check, used for edit-link patterns.
fn is_http_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some(),
        Err(_) => false,
    }
}

/// URL check for social links. Protocol-relative links (`//github.com/x`)
/// are reparsed with an `https:` prefix, the form the study-guide config
/// uses throughout.
fn is_web_url(value: &str) -> bool {
    if let Some(rest) = value.strip_prefix("//") {
        return is_http_url(&format!("https://{rest}"));
    }
    is_http_url(value)
}
