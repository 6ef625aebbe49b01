//! Site configuration module.
//!
//! Handles loading, validating, and merging `site.toml` files. Configuration
//! is layered: stock defaults are overridden by the user's `site.toml` at the
//! site root. The resulting record is everything the external documentation
//! renderer needs — page metadata, navigation menus, the sidebar tree, head
//! injections, theme settings, social links, and footer text.
//!
//! ## Config File Location
//!
//! Place `site.toml` at the site root, next to the content directory:
//!
//! ```text
//! studyguide/
//! ├── site.toml                # This file
//! ├── docs/                    # Content source (src_dir)
//! │   ├── index.md
//! │   └── developer/...
//! └── dist/                    # Renderer output (out_dir)
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "Drupal Study Guide"
//! description = "Acquia Drupal certification study guide"
//! base = "/studyguide/"        # Deploy path, must start and end with /
//! src_dir = "docs"
//! out_dir = "dist"
//! clean_urls = true            # Renderer drops .html from page URLs
//! last_updated = true          # Renderer shows last-commit timestamps
//!
//! [[head]]                     # Extra tags injected into <head>, in order
//! tag = "link"
//! attrs = { rel = "icon", href = "/images/favicon.ico" }
//!
//! [theme]
//! logo = "/images/d9book.svg"
//!
//! [theme.outline]
//! level = [2, 3]               # Heading levels shown in the page outline
//!
//! [theme.search]
//! provider = "local"           # "local" or "none"
//!
//! [theme.edit_link]
//! pattern = "https://github.com/org/repo/edit/main/docs/:path"
//! text = "Edit this page on GitHub"
//!
//! [[nav]]
//! text = "Home"
//! link = "/"
//!
//! [[sidebar]]
//! text = "Developer"
//! collapsed = true
//! items = [{ text = "Introduction", link = "/developer/intro.md" }]
//!
//! [[social_links]]
//! icon = "github"
//! link = "//github.com/selwynpolit"
//!
//! [footer]
//! message = '<span>Licensed under CC BY 4.0</span>'
//! ```
//!
//! ## Partial Configuration
//!
//! `site.toml` is sparse — set just the values you want; everything else
//! keeps its stock default. Unknown keys are rejected to catch typos early.

use crate::sidebar::SidebarEntry;
use crate::types::{FooterConfig, NavItem, SocialLink};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the site configuration file at the site root.
pub const CONFIG_FILENAME: &str = "site.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `site.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in the nav bar and browser tab.
    pub title: String,
    /// Site description, emitted as a meta tag.
    pub description: String,
    /// Deploy path prefix (e.g. `/studyguide/`). Must start and end with `/`.
    pub base: String,
    /// Content source directory, relative to the site root.
    pub src_dir: String,
    /// Renderer output directory, relative to the site root.
    pub out_dir: String,
    /// Whether the renderer serves pages without the `.html` extension.
    pub clean_urls: bool,
    /// Whether the renderer shows last-updated timestamps from git.
    pub last_updated: bool,
    /// Extra tags injected into `<head>`, in order. Carried verbatim —
    /// analytics snippets live here.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<HeadEntry>,
    /// Theme settings (logo, outline, search, edit link).
    pub theme: ThemeConfig,
    /// Top navigation menu, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nav: Vec<NavItem>,
    /// Sidebar tree, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sidebar: Vec<SidebarEntry>,
    /// Social links shown in the site header.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub social_links: Vec<SocialLink>,
    /// Footer content.
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base: "/".to_string(),
            src_dir: "docs".to_string(),
            out_dir: "dist".to_string(),
            clean_urls: true,
            last_updated: true,
            head: Vec::new(),
            theme: ThemeConfig::default(),
            nav: Vec::new(),
            sidebar: Vec::new(),
            social_links: Vec::new(),
            footer: FooterConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate structural config values.
    ///
    /// Content-dependent checks (broken links, duplicate sidebar entries)
    /// live in [`crate::validate`]; this rejects only values that make the
    /// record itself nonsensical.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base.starts_with('/') || !self.base.ends_with('/') {
            return Err(ConfigError::Validation(
                "base must start and end with '/'".into(),
            ));
        }
        if self.src_dir.is_empty() {
            return Err(ConfigError::Validation("src_dir must not be empty".into()));
        }
        if self.out_dir.is_empty() {
            return Err(ConfigError::Validation("out_dir must not be empty".into()));
        }
        self.theme.outline.validate()?;
        Ok(())
    }
}

/// One tag injected into `<head>`.
///
/// The renderer consumes these as `[tag, attrs]` / `[tag, attrs, body]`
/// tuples; see [`crate::emit`] for the flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadEntry {
    /// Tag name (`link`, `script`, `meta`).
    pub tag: String,
    /// Tag attributes. An empty string value emits a bare attribute
    /// (`async`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Inline tag body (e.g. an analytics bootstrap snippet).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Theme settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Site logo, a site-root asset path (`/images/d9book.svg`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Page outline settings.
    pub outline: OutlineConfig,
    /// Search settings.
    pub search: SearchConfig,
    /// "Edit this page" link settings; absent disables the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_link: Option<EditLinkConfig>,
}

/// Heading levels shown in the per-page outline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutlineConfig {
    /// `[min, max]` heading levels, each within 1..=6.
    pub level: [u32; 2],
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self { level: [2, 3] }
    }
}

impl OutlineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        let [min, max] = self.level;
        if !(1..=6).contains(&min) || !(1..=6).contains(&max) {
            return Err(ConfigError::Validation(
                "theme.outline.level values must be 1-6".into(),
            ));
        }
        if min > max {
            return Err(ConfigError::Validation(
                "theme.outline.level must be [min, max] with min <= max".into(),
            ));
        }
        Ok(())
    }
}

/// Search settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Which search implementation the renderer enables.
    pub provider: SearchProvider,
}

/// Search implementation selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Renderer-built client-side index.
    #[default]
    Local,
    /// No search UI.
    None,
}

/// "Edit this page" link settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditLinkConfig {
    /// URL pattern with a `:path` placeholder for the page's source path.
    pub pattern: String,
    /// Link label.
    #[serde(default = "default_edit_link_text")]
    pub text: String,
}

fn default_edit_link_text() -> String {
    "Edit this page".to_string()
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely — including
///   arrays, so an authored sidebar or nav never half-merges with defaults.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a `site.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `site.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `site.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `site.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Site Configuration
# ==================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults; commented blocks show the shape of
# list-valued settings, which default to empty.
# Unknown keys will cause an error.

# Site identity, shown in the nav bar, browser tab, and meta tags.
title = ""
description = ""

# Deploy path prefix. Must start and end with "/".
# Use "/studyguide/" when the site is served from a subdirectory.
base = "/"

# Content source and renderer output directories, relative to the site root.
src_dir = "docs"
out_dir = "dist"

# Serve pages without the .html extension.
clean_urls = true

# Show last-updated timestamps from git.
last_updated = true

# ---------------------------------------------------------------------------
# Head injections — extra tags added to <head>, in order
# ---------------------------------------------------------------------------
# [[head]]
# tag = "link"
# attrs = { rel = "icon", href = "/images/favicon.ico" }
#
# [[head]]
# tag = "script"
# attrs = { async = "", src = "https://www.googletagmanager.com/gtag/js?id=G-XXXXXXXX" }
#
# [[head]]
# tag = "script"
# body = """
# window.dataLayer = window.dataLayer || [];
# function gtag(){dataLayer.push(arguments);}
# gtag('js', new Date());
# gtag('config', 'G-XXXXXXXX');
# """

# ---------------------------------------------------------------------------
# Theme
# ---------------------------------------------------------------------------
[theme]
# Site logo, a path under src_dir.
# logo = "/images/logo.svg"

# Heading levels shown in the per-page outline, [min, max], each 1-6.
[theme.outline]
level = [2, 3]

# Search implementation: "local" or "none".
[theme.search]
provider = "local"

# "Edit this page" link. The :path placeholder receives the page source path.
# [theme.edit_link]
# pattern = "https://github.com/org/repo/edit/main/docs/:path"
# text = "Edit this page on GitHub"

# ---------------------------------------------------------------------------
# Top navigation menu, in display order
# ---------------------------------------------------------------------------
# [[nav]]
# text = "Home"
# link = "/"
#
# [[nav]]
# text = "Fork me"
# link = "https://github.com/org/repo/fork"

# ---------------------------------------------------------------------------
# Sidebar tree, in display order. Tables with `items` are groups and may
# nest; plain { text, link } tables are leaves. Groups render expanded
# unless collapsed = true.
# ---------------------------------------------------------------------------
# [[sidebar]]
# text = "Home"
# link = "/"
#
# [[sidebar]]
# text = "Developer"
# collapsed = true
# items = [
#     { text = "Introduction", link = "/developer/intro.md" },
# ]

# ---------------------------------------------------------------------------
# Social links shown in the site header
# ---------------------------------------------------------------------------
# [[social_links]]
# icon = "github"
# link = "//github.com/yourname"

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
# HTML fragment rendered verbatim (license text, attribution links).
message = ""
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_paths() {
        let config = SiteConfig::default();
        assert_eq!(config.base, "/");
        assert_eq!(config.src_dir, "docs");
        assert_eq!(config.out_dir, "dist");
        assert!(config.clean_urls);
    }

    #[test]
    fn default_theme() {
        let config = SiteConfig::default();
        assert_eq!(config.theme.outline.level, [2, 3]);
        assert_eq!(config.theme.search.provider, SearchProvider::Local);
        assert!(config.theme.logo.is_none());
        assert!(config.theme.edit_link.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
title = "Drupal Study Guide"
base = "/studyguide/"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.title, "Drupal Study Guide");
        assert_eq!(config.base, "/studyguide/");
        // Default values preserved
        assert_eq!(config.src_dir, "docs");
        assert_eq!(config.theme.outline.level, [2, 3]);
    }

    #[test]
    fn parse_theme_settings() {
        let toml = r#"
[theme]
logo = "/images/d9book.svg"

[theme.outline]
level = [2, 4]

[theme.search]
provider = "none"

[theme.edit_link]
pattern = "https://github.com/org/repo/edit/main/docs/:path"
text = "Edit this page on GitHub"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.logo.as_deref(), Some("/images/d9book.svg"));
        assert_eq!(config.theme.outline.level, [2, 4]);
        assert_eq!(config.theme.search.provider, SearchProvider::None);
        let edit = config.theme.edit_link.unwrap();
        assert!(edit.pattern.contains(":path"));
        assert_eq!(edit.text, "Edit this page on GitHub");
    }

    #[test]
    fn edit_link_text_defaults() {
        let toml = r#"
[theme.edit_link]
pattern = "https://example.com/edit/:path"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.theme.edit_link.unwrap().text, "Edit this page");
    }

    #[test]
    fn parse_head_entries() {
        let toml = r#"
[[head]]
tag = "link"
attrs = { rel = "icon", href = "/images/favicon.ico" }

[[head]]
tag = "script"
attrs = { async = "", src = "https://www.googletagmanager.com/gtag/js?id=G-8V22RQEJ71" }

[[head]]
tag = "script"
body = "window.dataLayer = window.dataLayer || [];"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.head.len(), 3);
        assert_eq!(config.head[0].tag, "link");
        assert_eq!(config.head[0].attrs["rel"], "icon");
        assert_eq!(config.head[1].attrs["async"], "");
        assert!(config.head[2].body.as_deref().unwrap().contains("dataLayer"));
    }

    #[test]
    fn parse_nav_preserves_order() {
        let toml = r#"
[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "About"
link = "/about"

[[nav]]
text = "Fork me"
link = "https://github.com/selwynpolit/studyguide/fork"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        let texts: Vec<&str> = config.nav.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["Home", "About", "Fork me"]);
    }

    #[test]
    fn parse_nested_sidebar() {
        let toml = r#"
[[sidebar]]
text = "Home"
link = "/"

[[sidebar]]
text = "Developer"
collapsed = true

[[sidebar.items]]
text = "Introduction"
link = "/developer/intro.md"

[[sidebar.items]]
text = "4.0 Back end Dev"
collapsed = true
items = [
    { text = "4.1 OOP", link = "/developer/back-end/4.1-oop.md" },
    { text = "4.2 Custom Modules", link = "/developer/back-end/4.2-custom-modules.md" },
]
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.sidebar.len(), 2);

        let SidebarEntry::Group(developer) = &config.sidebar[1] else {
            panic!("expected group");
        };
        assert!(developer.is_collapsed());
        assert_eq!(developer.items.len(), 2);
        assert_eq!(developer.items[0].link(), Some("/developer/intro.md"));

        let SidebarEntry::Group(backend) = &developer.items[1] else {
            panic!("expected nested group");
        };
        assert_eq!(backend.items.len(), 2);
        assert_eq!(backend.items[1].text(), "4.2 Custom Modules");
    }

    #[test]
    fn sidebar_round_trips_identically() {
        let toml = r#"
[[sidebar]]
text = "Developer"
items = [{ text = "Intro", link = "/developer/intro.md" }]
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        let serialized = toml::to_string(&config).unwrap();
        let reparsed: SiteConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed, config);
        assert_eq!(
            reparsed.sidebar[0],
            config.sidebar[0],
        );
    }

    #[test]
    fn parse_social_and_footer() {
        let toml = r#"
[[social_links]]
icon = "x"
link = "//twitter.com/selwynpolit"

[[social_links]]
icon = "github"
link = "//github.com/selwynpolit"

[footer]
message = '<span>Licensed under <a href="//creativecommons.org/licenses/by/4.0/">CC BY 4.0</a></span>'
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.social_links.len(), 2);
        assert_eq!(config.social_links[0].icon, "x");
        assert!(config.footer.message.contains("CC BY 4.0"));
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("site.toml"),
            r#"
title = "Drupal Study Guide"
base = "/studyguide/"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "Drupal Study Guide");
        assert_eq!(config.base, "/studyguide/");
        // Unspecified values should be defaults
        assert_eq!(config.out_dir, "dist");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("site.toml"), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("site.toml"), "base = \"studyguide\"").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_scalar_override() {
        let base: toml::Value = toml::from_str(r#"title = "Default""#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"title = "Mine""#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("title").unwrap().as_str(), Some("Mine"));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn merge_toml_deep_nested() {
        let base: toml::Value = toml::from_str(
            r#"
[theme.outline]
level = [2, 3]
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[theme.search]
provider = "none"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let theme = merged.get("theme").unwrap();
        assert!(theme.get("outline").is_some());
        assert!(theme.get("search").is_some());
    }

    #[test]
    fn merge_toml_arrays_replace() {
        // An authored sidebar replaces the default wholesale, never merges
        let base: toml::Value =
            toml::from_str(r#"sidebar = [{ text = "Old", link = "/old" }]"#).unwrap();
        let overlay: toml::Value =
            toml::from_str(r#"sidebar = [{ text = "New", link = "/new" }]"#).unwrap();
        let merged = merge_toml(base, overlay);
        let sidebar = merged.get("sidebar").unwrap().as_array().unwrap();
        assert_eq!(sidebar.len(), 1);
        assert_eq!(
            sidebar[0].get("text").unwrap().as_str(),
            Some("New")
        );
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("titel = \"oops\"");
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_nested_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[theme]
lgoo = "/images/logo.svg"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_key_rejected_via_load_config() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("site.toml"), "titel = \"oops\"").unwrap();
        assert!(load_config(tmp.path()).is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_base_missing_slashes() {
        let mut config = SiteConfig::default();
        config.base = "studyguide/".to_string();
        assert!(config.validate().is_err());

        config.base = "/studyguide".to_string();
        assert!(config.validate().is_err());

        config.base = "/studyguide/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_outline_bounds() {
        let mut config = SiteConfig::default();
        config.theme.outline.level = [0, 3];
        assert!(config.validate().is_err());

        config.theme.outline.level = [2, 7];
        assert!(config.validate().is_err());

        config.theme.outline.level = [4, 2];
        assert!(config.validate().is_err());

        config.theme.outline.level = [1, 6];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_dirs() {
        let mut config = SiteConfig::default();
        config.src_dir = String::new();
        assert!(config.validate().is_err());

        config.src_dir = "docs".to_string();
        config.out_dir = String::new();
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_is_valid_toml() {
        let content = stock_config_toml();
        let _: toml::Value = toml::from_str(content).expect("stock config must be valid TOML");
    }

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[theme]"));
        assert!(content.contains("[theme.outline]"));
        assert!(content.contains("[theme.search]"));
        assert!(content.contains("[footer]"));
        assert!(content.contains("[[head]]"));
        assert!(content.contains("[[sidebar]]"));
        assert!(content.contains("[[social_links]]"));
    }

    // =========================================================================
    // stock_defaults_value tests
    // =========================================================================

    #[test]
    fn stock_defaults_value_is_table() {
        assert!(stock_defaults_value().is_table());
    }

    #[test]
    fn stock_defaults_value_has_sections() {
        let val = stock_defaults_value();
        assert!(val.get("theme").is_some());
        assert!(val.get("footer").is_some());
        assert!(val.get("base").is_some());
    }
}
