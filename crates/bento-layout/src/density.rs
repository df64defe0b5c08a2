#![forbid(unsafe_code)]

//! Content-density classification.
//!
//! Rendering decides how much of a widget's content to show from the
//! area its rectangle occupies: a 1×1 link tile shows an icon, a 4×4
//! bio card shows the full biography. This module maps `(kind, w, h)` to
//! one of four ordered detail tiers. The mapping is a pure function of
//! the current size, recomputed from scratch on every change; there is
//! no stored state or transition history.
//!
//! Classification is monotonic: growing a widget never drops it to a
//! lower tier.

use bento_core::WidgetKind;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ViewMode
// ---------------------------------------------------------------------------

/// Presentation-detail tier, ordered least to most detailed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Icon or title only.
    #[default]
    Compact,
    /// Title plus a one-line teaser.
    Summary,
    /// The regular card layout.
    Standard,
    /// Full content, all fields visible.
    Expanded,
}

impl ViewMode {
    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Summary => "summary",
            Self::Standard => "standard",
            Self::Expanded => "expanded",
        }
    }
}

// ---------------------------------------------------------------------------
// DensityThresholds
// ---------------------------------------------------------------------------

/// Minimum occupied areas (in cells) for each tier above compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityThresholds {
    /// Area at which a widget leaves compact.
    pub summary: u32,
    /// Area at which it shows the regular card.
    pub standard: u32,
    /// Area at which everything is shown.
    pub expanded: u32,
}

impl DensityThresholds {
    /// Universal defaults for kinds without a dedicated entry.
    pub const DEFAULT: Self = Self {
        summary: 6,
        standard: 9,
        expanded: 16,
    };

    /// Default thresholds for a widget kind.
    ///
    /// A bio card has something to say at small sizes, so it expands
    /// sooner; a link tile is an icon until it gets genuinely large.
    #[must_use]
    pub const fn for_kind(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::Bio => Self {
                summary: 4,
                standard: 8,
                expanded: 12,
            },
            WidgetKind::Links => Self {
                summary: 8,
                standard: 16,
                expanded: 32,
            },
            WidgetKind::Image => Self {
                summary: 4,
                standard: 9,
                expanded: 16,
            },
            _ => Self::DEFAULT,
        }
    }

    /// Classify an occupied area.
    ///
    /// Tiers are checked from most to least detailed, so the result is
    /// monotonic in `area` for any threshold values.
    #[must_use]
    pub const fn classify(&self, area: u32) -> ViewMode {
        if area >= self.expanded {
            ViewMode::Expanded
        } else if area >= self.standard {
            ViewMode::Standard
        } else if area >= self.summary {
            ViewMode::Summary
        } else {
            ViewMode::Compact
        }
    }
}

impl Default for DensityThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classify a widget's current size under its kind's default thresholds.
#[must_use]
pub fn view_mode(kind: WidgetKind, w: u16, h: u16) -> ViewMode {
    DensityThresholds::for_kind(kind).classify(u32::from(w) * u32::from(h))
}

// ---------------------------------------------------------------------------
// DensityTable
// ---------------------------------------------------------------------------

/// Per-kind threshold table with caller overrides.
///
/// Unlisted kinds fall back to their built-in defaults, so a caller only
/// registers the kinds it wants to re-tune.
#[derive(Debug, Clone, Default)]
pub struct DensityTable {
    overrides: FxHashMap<WidgetKind, DensityThresholds>,
}

impl DensityTable {
    /// Create an empty table (built-in defaults for every kind).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the thresholds for one widget kind.
    #[must_use]
    pub fn with_thresholds(mut self, kind: WidgetKind, thresholds: DensityThresholds) -> Self {
        self.overrides.insert(kind, thresholds);
        self
    }

    /// Effective thresholds for a widget kind.
    #[must_use]
    pub fn thresholds(&self, kind: WidgetKind) -> DensityThresholds {
        self.overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| DensityThresholds::for_kind(kind))
    }

    /// Classify a widget's current size.
    #[must_use]
    pub fn classify(&self, kind: WidgetKind, w: u16, h: u16) -> ViewMode {
        self.thresholds(kind).classify(u32::from(w) * u32::from(h))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // === ViewMode ===

    #[test]
    fn tiers_are_strictly_ordered() {
        assert!(ViewMode::Compact < ViewMode::Summary);
        assert!(ViewMode::Summary < ViewMode::Standard);
        assert!(ViewMode::Standard < ViewMode::Expanded);
    }

    #[test]
    fn as_str_stable() {
        assert_eq!(ViewMode::Compact.as_str(), "compact");
        assert_eq!(ViewMode::Expanded.as_str(), "expanded");
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ViewMode::Summary).unwrap(),
            r#""summary""#
        );
    }

    // === Default thresholds ===

    #[test]
    fn small_area_is_compact_large_is_expanded() {
        // 2×2 → compact, 4×4 → expanded under the universal defaults.
        assert_eq!(DensityThresholds::DEFAULT.classify(4), ViewMode::Compact);
        assert_eq!(DensityThresholds::DEFAULT.classify(16), ViewMode::Expanded);
    }

    #[test]
    fn default_tier_boundaries() {
        let t = DensityThresholds::DEFAULT;
        assert_eq!(t.classify(5), ViewMode::Compact);
        assert_eq!(t.classify(6), ViewMode::Summary);
        assert_eq!(t.classify(8), ViewMode::Summary);
        assert_eq!(t.classify(9), ViewMode::Standard);
        assert_eq!(t.classify(15), ViewMode::Standard);
        assert_eq!(t.classify(16), ViewMode::Expanded);
        assert_eq!(t.classify(100), ViewMode::Expanded);
    }

    #[test]
    fn bio_expands_sooner_than_links() {
        // Same 3×4 rectangle, different kinds.
        assert_eq!(view_mode(WidgetKind::Bio, 3, 4), ViewMode::Expanded);
        assert_eq!(view_mode(WidgetKind::Links, 3, 4), ViewMode::Summary);
    }

    #[test]
    fn unlisted_kind_uses_universal_defaults() {
        assert_eq!(view_mode(WidgetKind::Projects, 2, 2), ViewMode::Compact);
        assert_eq!(view_mode(WidgetKind::Projects, 4, 4), ViewMode::Expanded);
    }

    #[test]
    fn monotonic_in_area() {
        for kind in [WidgetKind::Bio, WidgetKind::Links, WidgetKind::Text] {
            let mut last = view_mode(kind, 1, 1);
            for area in 1..=64u16 {
                let mode = view_mode(kind, area, 1);
                assert!(mode >= last, "{} regressed at area {area}", kind.as_str());
                last = mode;
            }
        }
    }

    // === DensityTable ===

    #[test]
    fn table_falls_back_to_kind_defaults() {
        let table = DensityTable::new();
        assert_eq!(table.classify(WidgetKind::Bio, 3, 4), ViewMode::Expanded);
    }

    #[test]
    fn table_override_wins() {
        let table = DensityTable::new().with_thresholds(
            WidgetKind::Bio,
            DensityThresholds {
                summary: 100,
                standard: 200,
                expanded: 300,
            },
        );
        assert_eq!(table.classify(WidgetKind::Bio, 3, 4), ViewMode::Compact);
        // Other kinds keep their defaults.
        assert_eq!(table.classify(WidgetKind::Image, 4, 4), ViewMode::Expanded);
    }
}
