//! Shared types used across the configuration model.
//!
//! These types appear both in the loaded `site.toml` and in the emitted
//! `site.json`, so they live here rather than in [`crate::config`] to keep
//! the sidebar and emit modules free of a config dependency.

use serde::{Deserialize, Serialize};

/// A labeled hyperlink, used for the top navigation menu and as sidebar
/// leaf entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavItem {
    /// Display label.
    pub text: String,
    /// Target: a site-root content path (`/developer/intro.md`) or an
    /// absolute external URL.
    pub link: String,
}

/// A social-media link shown in the site header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Icon identifier, one of [`KNOWN_ICONS`].
    pub icon: String,
    /// Absolute external URL (scheme-prefixed or protocol-relative).
    pub link: String,
}

/// Icon identifiers the renderer ships built-in artwork for.
pub const KNOWN_ICONS: &[&str] = &[
    "discord",
    "facebook",
    "github",
    "instagram",
    "linkedin",
    "mastodon",
    "slack",
    "twitter",
    "x",
    "youtube",
];

impl SocialLink {
    /// Whether the icon identifier is one the renderer knows.
    pub fn icon_known(&self) -> bool {
        KNOWN_ICONS.contains(&self.icon.as_str())
    }
}

/// Site footer content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// HTML fragment rendered verbatim in the footer (license text,
    /// attribution links).
    pub message: String,
}
