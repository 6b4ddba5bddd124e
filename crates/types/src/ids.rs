//! Newtype wrappers for in-page link targets.

use std::fmt;
use std::sync::Arc;

/// An in-page link target, always starting with `#`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Anchor(Arc<str>);

impl Anchor {
    /// Builds an anchor from a bare fragment (`intro` becomes `#intro`).
    pub fn from_fragment(fragment: &str) -> Self {
        Self(format!("#{fragment}").into())
    }

    /// Extracts the fragment of a link target.
    ///
    /// Only the segment between the first and second `#` is kept, so
    /// `page.html#intro` and `https://host/page#intro` both yield `#intro`.
    /// Returns `None` when the href carries no fragment at all.
    pub fn from_href(href: &str) -> Option<Self> {
        href.split('#').nth(1).map(Self::from_fragment)
    }

    /// Returns the anchor including its leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the anchor without its leading `#`.
    pub fn fragment(&self) -> &str {
        &self.0[1..]
    }
}

impl AsRef<str> for Anchor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
