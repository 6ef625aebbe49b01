//! Sidebar tree model and operations.
//!
//! The sidebar is an ordered, recursively nestable tree: groups contain
//! further groups and plain links, display order is the authored order, and
//! a group without `collapsed` renders expanded. This module owns the tree
//! types plus the structural operations the validator and the `sidebar`
//! command need: depth measurement, a walk with group-trail context,
//! sibling duplicate detection, and skeleton generation from a scanned
//! content tree.

use crate::naming::parse_entry_name;
use crate::scan::ContentInventory;
use crate::types::NavItem;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Maximum allowed group nesting depth. Deeper trees are almost always a
/// copy-paste accident, and the renderer's layout degrades past this point.
pub const MAX_DEPTH: usize = 4;

/// One entry in a sidebar item list: either a nested group or a plain link.
///
/// Untagged so the TOML reads naturally — a table with `items` is a group,
/// a `{ text, link }` table is a leaf. Group must be tried first: groups may
/// carry a `link` of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    Group(SidebarGroup),
    Link(NavItem),
}

/// A sidebar group: a labeled, optionally collapsible list of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SidebarGroup {
    /// Display label.
    pub text: String,
    /// Optional target for the group label itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Collapsed state; absent means expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Child entries, in display order.
    pub items: Vec<SidebarEntry>,
}

impl SidebarGroup {
    /// Collapsed state with the default folded in: absent means expanded.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.unwrap_or(false)
    }
}

impl SidebarEntry {
    /// Display label of this entry.
    pub fn text(&self) -> &str {
        match self {
            Self::Group(g) => &g.text,
            Self::Link(item) => &item.text,
        }
    }

    /// Link target of this entry, if it has one.
    pub fn link(&self) -> Option<&str> {
        match self {
            Self::Group(g) => g.link.as_deref(),
            Self::Link(item) => Some(&item.link),
        }
    }
}

/// Group nesting depth of a tree. Leaves contribute nothing; an empty
/// sidebar has depth 0.
pub fn depth(entries: &[SidebarEntry]) -> usize {
    entries
        .iter()
        .map(|entry| match entry {
            SidebarEntry::Link(_) => 0,
            SidebarEntry::Group(g) => 1 + depth(&g.items),
        })
        .max()
        .unwrap_or(0)
}

/// Visit every entry in display order. The callback receives the trail of
/// enclosing group labels (outermost first) alongside the entry.
pub fn walk<'a, F>(entries: &'a [SidebarEntry], f: &mut F)
where
    F: FnMut(&[&'a str], &'a SidebarEntry),
{
    let mut trail = Vec::new();
    walk_inner(entries, &mut trail, f);
}

fn walk_inner<'a, F>(entries: &'a [SidebarEntry], trail: &mut Vec<&'a str>, f: &mut F)
where
    F: FnMut(&[&'a str], &'a SidebarEntry),
{
    for entry in entries {
        f(trail, entry);
        if let SidebarEntry::Group(group) = entry {
            trail.push(&group.text);
            walk_inner(&group.items, trail, f);
            trail.pop();
        }
    }
}

/// A link that appears more than once among the immediate children of one
/// group (or of the sidebar root).
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateLink {
    /// Trail of enclosing group labels; empty for the sidebar root.
    pub trail: Vec<String>,
    /// The repeated link value.
    pub link: String,
}

/// Find links repeated among siblings. The same link in two *different*
/// groups is legitimate (an overview page linked from several sections);
/// only repetition within one sibling list is flagged.
pub fn duplicate_sibling_links(entries: &[SidebarEntry]) -> Vec<DuplicateLink> {
    let mut duplicates = Vec::new();
    let mut trail = Vec::new();
    collect_duplicates(entries, &mut trail, &mut duplicates);
    duplicates
}

fn collect_duplicates(
    entries: &[SidebarEntry],
    trail: &mut Vec<String>,
    duplicates: &mut Vec<DuplicateLink>,
) {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for entry in entries {
        if let Some(link) = entry.link() {
            if !seen.insert(link) && reported.insert(link) {
                duplicates.push(DuplicateLink {
                    trail: trail.clone(),
                    link: link.to_string(),
                });
            }
        }
    }
    for entry in entries {
        if let SidebarEntry::Group(group) = entry {
            trail.push(group.text.clone());
            collect_duplicates(&group.items, trail, duplicates);
            trail.pop();
        }
    }
}

// ============================================================================
// Skeleton generation from the content tree
// ============================================================================

/// Intermediate directory node used while regrouping the flat page list.
#[derive(Default)]
struct DirNode {
    dirs: BTreeMap<String, DirNode>,
    /// (file name, page title), e.g. ("2.1-content-types.md", "2.1 Content Types")
    pages: Vec<(String, String)>,
}

/// Build a sidebar skeleton from the scanned content tree.
///
/// Directories become collapsed groups, Markdown pages become leaves, and
/// siblings are ordered by the `N.M-name` filename convention. A directory's
/// `index.md` becomes the group's own link instead of a child leaf. The
/// result is meant as a starting point: the `sidebar` command prints it as
/// TOML for the author to paste into `site.toml` and refine.
pub fn from_content(inventory: &ContentInventory) -> Vec<SidebarEntry> {
    let mut root = DirNode::default();
    for page in inventory.pages() {
        let mut node = &mut root;
        let mut segments: Vec<&str> = page.route.split('/').collect();
        let file = segments.pop().unwrap_or_default();
        for segment in segments {
            node = node.dirs.entry(segment.to_string()).or_default();
        }
        node.pages.push((file.to_string(), page.title.clone()));
    }
    convert_dir(&root, "")
}

fn convert_dir(node: &DirNode, route_prefix: &str) -> Vec<SidebarEntry> {
    // Sort keys pair each entry with its source name so directories and
    // pages interleave in one naming-convention order.
    let mut entries: Vec<(String, SidebarEntry)> = Vec::new();

    for (dir_name, child) in &node.dirs {
        let child_prefix = format!("{route_prefix}{dir_name}/");
        let mut items = convert_dir(child, &child_prefix);
        // index.md of the directory becomes the group's own link
        let link = extract_index_link(&mut items, &child_prefix);
        entries.push((
            dir_name.clone(),
            SidebarEntry::Group(SidebarGroup {
                text: parse_entry_name(dir_name).display_title,
                link,
                collapsed: Some(true),
                items,
            }),
        ));
    }

    for (file, title) in &node.pages {
        let stem = file.strip_suffix(".md").unwrap_or(file);
        let link = if route_prefix.is_empty() && stem == "index" {
            "/".to_string()
        } else {
            format!("/{route_prefix}{file}")
        };
        entries.push((
            stem.to_string(),
            SidebarEntry::Link(NavItem {
                text: title.clone(),
                link,
            }),
        ));
    }

    entries.sort_by(|(a, _), (b, _)| crate::naming::compare_names(a, b));
    entries.into_iter().map(|(_, entry)| entry).collect()
}

/// Render entries as the `[[sidebar]]` TOML an author pastes into
/// `site.toml`.
pub fn to_toml(entries: &[SidebarEntry]) -> Result<String, toml::ser::Error> {
    #[derive(Serialize)]
    struct Doc<'a> {
        sidebar: &'a [SidebarEntry],
    }
    toml::to_string_pretty(&Doc { sidebar: entries })
}

/// Remove an `index.md` leaf from `items` and return the group-level link
/// it should become (`/dir/` — the trailing slash resolves to the index).
fn extract_index_link(items: &mut Vec<SidebarEntry>, route_prefix: &str) -> Option<String> {
    let index_link = format!("/{route_prefix}index.md");
    let pos = items
        .iter()
        .position(|entry| entry.link() == Some(index_link.as_str()))?;
    items.remove(pos);
    Some(format!("/{route_prefix}"))
}
