//! Shared test utilities for the guidebook test suite.
//!
//! Provides fixture setup and small constructors used across module test
//! suites. The fixture tree under `fixtures/` mirrors a real study-guide
//! site: a `site.toml` plus a `docs/` content tree with ordering-prefixed
//! filenames and a couple of image assets.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::scan::ContentInventory;
use crate::sidebar::SidebarEntry;
use crate::types::NavItem;

/// Absolute path to the checked-in fixture site.
pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Copy the fixture site to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&fixtures_root(), tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Scan the checked-in fixture content tree in place.
///
/// Scanning never mutates, so read-only tests skip the temp-dir copy.
pub fn fixture_inventory() -> ContentInventory {
    ContentInventory::scan(&fixtures_root().join("docs")).unwrap()
}

/// Build a sidebar leaf entry.
pub fn leaf(text: &str, link: &str) -> SidebarEntry {
    SidebarEntry::Link(NavItem {
        text: text.to_string(),
        link: link.to_string(),
    })
}
