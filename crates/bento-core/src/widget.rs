#![forbid(unsafe_code)]

//! Widget kinds and per-kind size limits.
//!
//! Each portfolio widget has a kind that determines how large or small
//! its grid rectangle may become. Content-heavy kinds (bio, projects)
//! permit wide, tall rectangles; a single link tile stays small. The
//! engine clamps every user-driven resize against these limits before
//! accepting it into the layout.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// WidgetKind
// ---------------------------------------------------------------------------

/// Content kind of a portfolio widget.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// About-me card.
    Bio,
    /// Project showcase.
    Projects,
    /// Skill tags.
    Skills,
    /// External link tile.
    Links,
    /// Work history.
    Experience,
    /// Single image.
    Image,
    /// Free-form text block.
    Text,
}

impl WidgetKind {
    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bio => "bio",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Links => "links",
            Self::Experience => "experience",
            Self::Image => "image",
            Self::Text => "text",
        }
    }
}

// ---------------------------------------------------------------------------
// SizeLimits
// ---------------------------------------------------------------------------

/// Inclusive width/height bounds for one widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeLimits {
    /// Minimum width in columns.
    pub min_w: u16,
    /// Maximum width in columns.
    pub max_w: u16,
    /// Minimum height in rows.
    pub min_h: u16,
    /// Maximum height in rows.
    pub max_h: u16,
}

impl SizeLimits {
    /// Fallback limits for kinds without a dedicated entry.
    pub const DEFAULT: Self = Self::new(1, 12, 1, 8);

    /// Create limits. Minimums below 1 are meaningless on a cell grid
    /// and are raised to 1; an inverted range is normalized so the
    /// maximum is never below the minimum.
    #[must_use]
    pub const fn new(min_w: u16, max_w: u16, min_h: u16, max_h: u16) -> Self {
        let min_w = if min_w == 0 { 1 } else { min_w };
        let min_h = if min_h == 0 { 1 } else { min_h };
        let max_w = if max_w < min_w { min_w } else { max_w };
        let max_h = if max_h < min_h { min_h } else { max_h };
        Self {
            min_w,
            max_w,
            min_h,
            max_h,
        }
    }

    /// Default limits for a widget kind.
    #[must_use]
    pub const fn for_kind(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Bio => Self::new(2, 12, 2, 6),
            WidgetKind::Projects => Self::new(2, 12, 2, 8),
            WidgetKind::Skills => Self::new(2, 8, 1, 4),
            WidgetKind::Links => Self::new(1, 4, 1, 2),
            WidgetKind::Experience => Self::new(2, 12, 2, 6),
            WidgetKind::Image => Self::new(1, 8, 1, 6),
            WidgetKind::Text => Self::new(1, 12, 1, 4),
        }
    }

    /// Clamp a width into this kind's range.
    #[inline]
    #[must_use]
    pub const fn clamp_w(&self, w: u16) -> u16 {
        if w < self.min_w {
            self.min_w
        } else if w > self.max_w {
            self.max_w
        } else {
            w
        }
    }

    /// Clamp a height into this kind's range.
    #[inline]
    #[must_use]
    pub const fn clamp_h(&self, h: u16) -> u16 {
        if h < self.min_h {
            self.min_h
        } else if h > self.max_h {
            self.max_h
        } else {
            h
        }
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // === WidgetKind ===

    #[test]
    fn kind_as_str_stable() {
        assert_eq!(WidgetKind::Bio.as_str(), "bio");
        assert_eq!(WidgetKind::Links.as_str(), "links");
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&WidgetKind::Experience).unwrap();
        assert_eq!(json, r#""experience""#);
        let back: WidgetKind = serde_json::from_str(r#""bio""#).unwrap();
        assert_eq!(back, WidgetKind::Bio);
    }

    // === SizeLimits ===

    #[test]
    fn bio_permits_larger_max_than_links() {
        let bio = SizeLimits::for_kind(WidgetKind::Bio);
        let links = SizeLimits::for_kind(WidgetKind::Links);
        assert!(bio.max_w > links.max_w);
        assert!(bio.max_h > links.max_h);
    }

    #[test]
    fn every_kind_has_sane_limits() {
        for kind in [
            WidgetKind::Bio,
            WidgetKind::Projects,
            WidgetKind::Skills,
            WidgetKind::Links,
            WidgetKind::Experience,
            WidgetKind::Image,
            WidgetKind::Text,
        ] {
            let limits = SizeLimits::for_kind(kind);
            assert!(limits.min_w >= 1, "{}: zero min width", kind.as_str());
            assert!(limits.min_h >= 1, "{}: zero min height", kind.as_str());
            assert!(limits.max_w >= limits.min_w, "{}: inverted width range", kind.as_str());
            assert!(limits.max_h >= limits.min_h, "{}: inverted height range", kind.as_str());
        }
    }

    #[test]
    fn clamp_w_within_range() {
        let limits = SizeLimits::new(2, 6, 1, 4);
        assert_eq!(limits.clamp_w(0), 2);
        assert_eq!(limits.clamp_w(2), 2);
        assert_eq!(limits.clamp_w(4), 4);
        assert_eq!(limits.clamp_w(9), 6);
    }

    #[test]
    fn clamp_h_within_range() {
        let limits = SizeLimits::new(2, 6, 1, 4);
        assert_eq!(limits.clamp_h(0), 1);
        assert_eq!(limits.clamp_h(4), 4);
        assert_eq!(limits.clamp_h(10), 4);
    }

    #[test]
    fn new_normalizes_degenerate_ranges() {
        let limits = SizeLimits::new(0, 0, 5, 2);
        assert_eq!(limits.min_w, 1);
        assert_eq!(limits.max_w, 1);
        assert_eq!(limits.min_h, 5);
        assert_eq!(limits.max_h, 5);
    }
}
