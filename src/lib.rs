//! # Guidebook
//!
//! A configuration toolkit for documentation study-guide sites. Your
//! `site.toml` is the single source of truth: page metadata, the top
//! navigation menu, a recursively nested sidebar tree, head-tag injections,
//! theme settings, social links, and footer text. An external documentation
//! renderer consumes the record; guidebook's job is to load it, check it
//! against the Markdown content tree, and emit it in the renderer's shape.
//!
//! # What It Deliberately Does Not Do
//!
//! Guidebook never renders anything. Markdown-to-HTML conversion, search
//! indexing, and asset processing belong to the external renderer. The only
//! Markdown parsing here is title extraction for the sidebar skeleton, and
//! the only outputs are a validation report and a normalized `site.json`.
//!
//! # Architecture
//!
//! Every command runs the same short pipeline:
//!
//! ```text
//! 1. Load     site.toml   →  SiteConfig       (defaults + overrides, typo-checked)
//! 2. Scan     docs/       →  ContentInventory (pages + assets, titles)
//! 3. Operate  config × inventory  →  report / skeleton / site.json
//! ```
//!
//! Loading and scanning are independent and pure-ish (read-only filesystem
//! access), so each stage is unit-testable on its own and `check` can report
//! every problem in one pass instead of failing at the first.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `site.toml` loading, default merging, unknown-key rejection, intrinsic validation |
//! | [`sidebar`] | recursive sidebar tree: depth, walk, sibling-duplicate detection, skeleton generation |
//! | [`scan`] | content tree walk producing the page/asset inventory and clean-URL link resolution |
//! | [`link`] | syntactic link classification (external, fragment, site-root, relative) |
//! | [`validate`] | full structural report: broken links, duplicates, depth, social/edit-link shape |
//! | [`emit`] | normalized `site.json` for the renderer, head entries in tuple form |
//! | [`naming`] | `N.M-name` ordering-prefix parser shared by scan and sidebar generation |
//! | [`types`] | shared record types (`NavItem`, `SocialLink`, `FooterConfig`) |
//! | [`output`] | CLI output formatting — information-first display of scan and check results |
//!
//! # Design Decisions
//!
//! ## Collect, Don't Fail
//!
//! A malformed link is an authoring mistake, not a program failure. The
//! validator walks the whole configuration and returns every problem with a
//! config-path location (`sidebar > Developer > 4.0 Back end Dev`), so one
//! `check` run surfaces the full cleanup list. Hard errors are reserved for
//! things that make the record unusable: unparseable TOML, unknown keys,
//! a `base` without slashes.
//!
//! ## Untagged Sidebar Entries
//!
//! A sidebar entry is either a group (has `items`) or a leaf (`text` +
//! `link`). Serde's untagged representation keeps the TOML free of tag
//! noise and matches how authors already think about the tree; groups are
//! tried first since they may carry a `link` of their own.
//!
//! ## Order Is Data
//!
//! Display order is exactly authored order — every collection is a `Vec`,
//! round-trips identically, and no operation sorts user-provided entries.
//! Only *generated* skeletons are sorted, by the `N.M-name` filename
//! convention the content tree itself uses.

pub mod config;
pub mod emit;
pub mod link;
pub mod naming;
pub mod output;
pub mod scan;
pub mod sidebar;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod test_helpers;
