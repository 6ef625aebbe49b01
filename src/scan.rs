//! Content source tree scanning.
//!
//! Walks the configured source directory (`src_dir`) and produces a
//! [`ContentInventory`]: every Markdown page with its display title, plus
//! the set of non-Markdown assets (images, favicons). The inventory is what
//! sidebar and nav links are checked against, and what the `sidebar`
//! command regroups into a skeleton tree.
//!
//! ## Directory Structure
//!
//! A study-guide content tree looks like:
//!
//! ```text
//! docs/                                # src_dir
//! ├── index.md                         # → link "/"
//! ├── about.md                         # → link "/about" (clean URLs) or "/about.md"
//! ├── images/
//! │   └── d9book.svg                   # asset, target of theme.logo
//! ├── developer/
//! │   ├── intro.md
//! │   ├── fundamentals/
//! │   │   ├── 1.1-html-css.md          # ordering prefix, see crate::naming
//! │   │   └── 1.3-git.md
//! │   └── site-building/
//! │       └── 2.1-content-types.md
//! └── backend-specialist/
//!     └── intro.md
//! ```
//!
//! ## Titles
//!
//! A page's display title is the text of its first `#` heading; pages
//! without one fall back to the filename-derived title from
//! [`crate::naming`]. The first non-empty source wins.
//!
//! ## Link Resolution
//!
//! [`ContentInventory::resolve_page_link`] implements the renderer's
//! clean-URL semantics: `/guide/intro.md` matches the file directly,
//! extensionless `/guide/intro` matches `guide/intro.md` then
//! `guide/intro/index.md`, a trailing slash matches the directory index,
//! and `/` matches the root `index.md`. Fragments and query strings are
//! stripped before resolution.

use crate::naming;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("content source directory not found: {0}")]
    MissingSourceDir(PathBuf),
}

/// A Markdown page discovered in the content tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PageEntry {
    /// Path relative to `src_dir`, always with the `.md` extension
    /// (e.g. `developer/intro.md`).
    pub route: String,
    /// Display title: first `#` heading, or filename-derived fallback.
    pub title: String,
}

/// Everything link checks need to know about the content source tree.
#[derive(Debug)]
pub struct ContentInventory {
    pages: Vec<PageEntry>,
    routes: BTreeSet<String>,
    assets: BTreeSet<String>,
}

/// Entries skipped during the walk, alongside anything hidden.
const SKIPPED_NAMES: &[&str] = &["site.toml", "site.json", "dist", "node_modules"];

impl ContentInventory {
    /// Walk `src_dir` and build the inventory.
    ///
    /// Files and directories are visited in the `N.M-name` convention's
    /// order so the page list reads like the intended sidebar.
    pub fn scan(src_dir: &Path) -> Result<Self, ScanError> {
        if !src_dir.is_dir() {
            return Err(ScanError::MissingSourceDir(src_dir.to_path_buf()));
        }

        let mut pages = Vec::new();
        let mut routes = BTreeSet::new();
        let mut assets = BTreeSet::new();

        let walker = walkdir::WalkDir::new(src_dir)
            .sort_by(|a, b| {
                naming::compare_names(
                    &a.file_name().to_string_lossy(),
                    &b.file_name().to_string_lossy(),
                )
            })
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let route = entry
                .path()
                .strip_prefix(src_dir)
                .expect("walked path is under src_dir")
                .to_string_lossy()
                .replace('\\', "/");

            if is_markdown(entry.path()) {
                let content = fs::read_to_string(entry.path())?;
                let title = resolve_title(&content, entry.path());
                routes.insert(route.clone());
                pages.push(PageEntry { route, title });
            } else {
                assets.insert(route);
            }
        }

        Ok(Self {
            pages,
            routes,
            assets,
        })
    }

    /// Discovered pages in display order.
    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    /// Number of non-Markdown assets discovered.
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Exact page route lookup (`developer/intro.md`).
    pub fn has_page(&self, route: &str) -> bool {
        self.routes.contains(route)
    }

    /// Exact asset route lookup (`images/d9book.svg`).
    pub fn has_asset(&self, route: &str) -> bool {
        self.assets.contains(route)
    }

    /// Check an internal link against the page set under clean-URL
    /// semantics. Callers are expected to have classified the link as
    /// internal already; external links and fragments resolve to `false`.
    pub fn resolve_page_link(&self, link: &str) -> bool {
        let Some(path) = normalize_link(link) else {
            return false;
        };
        if path.is_empty() {
            return self.has_page("index.md");
        }
        if let Some(stem) = path.strip_suffix(".html") {
            return self.has_page(&format!("{stem}.md"));
        }
        if path.ends_with(".md") {
            return self.has_page(&path);
        }
        if let Some(dir) = path.strip_suffix('/') {
            return self.has_page(&format!("{dir}/index.md"));
        }
        self.has_page(&format!("{path}.md")) || self.has_page(&format!("{path}/index.md"))
    }

    /// Check an internal link against the asset set (used for `theme.logo`).
    pub fn resolve_asset_link(&self, link: &str) -> bool {
        match normalize_link(link) {
            Some(path) if !path.is_empty() => self.has_asset(&path),
            _ => false,
        }
    }
}

/// Strip fragment/query, drop the leading slash, and flatten `.`/`..`
/// segments. Returns `None` when `..` escapes the content root.
fn normalize_link(link: &str) -> Option<String> {
    let end = link.find(['#', '?']).unwrap_or(link.len());
    let path = link[..end].trim_start_matches('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            other => segments.push(other),
        }
    }
    let mut joined = segments.join("/");
    // A trailing slash is significant for directory-index resolution
    if path.ends_with('/') && !joined.is_empty() {
        joined.push('/');
    }
    Some(joined)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

fn is_skipped(entry: &walkdir::DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_NAMES.contains(&name.as_ref())
}

/// Resolve a page's display title: first `#` heading, else filename.
fn resolve_title(content: &str, path: &Path) -> String {
    extract_heading(content).unwrap_or_else(|| {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        naming::parse_entry_name(&stem).display_title
    })
}

/// Extract the text of the first level-1 heading, if any.
fn extract_heading(content: &str) -> Option<String> {
    let mut in_heading = false;
    let mut title = String::new();
    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_heading = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let trimmed = title.trim();
                return if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                };
            }
            Event::Text(text) | Event::Code(text) if in_heading => title.push_str(&text),
            _ => {}
        }
    }
    None
}
