//! Link classification utilities.
//!
//! Every `link` value in the configuration falls into one of four syntactic
//! kinds. Only site-root and relative links point into the content source
//! tree and get checked against the scanned inventory; external links and
//! fragments are passed through to the renderer untouched.

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link: scheme-prefixed (https://, mailto:) or
    /// protocol-relative (//example.com).
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/developer/intro.md, /about).
    SiteRoot(&'a str),
    /// Path relative to the current page (./intro.md, ../git).
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }

    /// True for links that should resolve to a file in the content tree.
    #[inline]
    pub fn is_internal(link: &'a str) -> bool {
        matches!(
            Self::parse(link),
            Self::SiteRoot(_) | Self::Relative(_)
        )
    }
}

/// Check whether a link leaves the site entirely.
///
/// Protocol-relative links (`//twitter.com/...`) count as external — the
/// study-guide footer and social links use that form.
pub fn is_external(link: &str) -> bool {
    if link.starts_with("//") {
        return true;
    }
    match link.split_once(':') {
        Some((scheme, _)) => {
            let mut chars = scheme.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
