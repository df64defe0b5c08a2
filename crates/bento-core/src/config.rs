#![forbid(unsafe_code)]

//! Grid configuration and responsive breakpoints.
//!
//! The engine consumes, never owns, this configuration: total column
//! count, row height in pixels (for the caller's pixel↔row conversion
//! when translating drag deltas; the packing algorithms themselves work
//! purely in cells), and the gravity flag.
//!
//! [`Breakpoint`] classifies a viewport width into the column count the
//! grid uses at that width. Classification is monotonic: a wider
//! viewport never yields fewer columns.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Configuration for one grid instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Total column count. No component may extend past it.
    pub columns: u16,
    /// Height of one grid row in pixels.
    pub row_height_px: u16,
    /// Whether compaction pulls components toward row 0.
    pub gravity: bool,
}

impl GridConfig {
    /// Column count of the full-page portfolio grid.
    pub const DEFAULT_COLUMNS: u16 = 12;
    /// Column count of the narrow bento widget grid.
    pub const WIDGET_GRID_COLUMNS: u16 = 4;
    /// Default row height in pixels.
    pub const DEFAULT_ROW_HEIGHT_PX: u16 = 40;

    /// Create a config with the given column count and defaults elsewhere.
    #[must_use]
    pub const fn new(columns: u16) -> Self {
        Self {
            columns,
            row_height_px: Self::DEFAULT_ROW_HEIGHT_PX,
            gravity: true,
        }
    }

    /// The narrow 4-column bento widget grid.
    #[must_use]
    pub const fn widget_grid() -> Self {
        Self::new(Self::WIDGET_GRID_COLUMNS)
    }

    /// Set the column count.
    #[must_use]
    pub const fn with_columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    /// Set the row height in pixels.
    #[must_use]
    pub const fn with_row_height_px(mut self, px: u16) -> Self {
        self.row_height_px = px;
        self
    }

    /// Enable or disable gravity compaction.
    #[must_use]
    pub const fn with_gravity(mut self, gravity: bool) -> Self {
        self.gravity = gravity;
        self
    }

    /// Number of whole rows covered by a pixel height, rounded to nearest.
    ///
    /// Returns 0 for a zero row height.
    #[must_use]
    pub const fn rows_for_px(&self, px: u32) -> u16 {
        if self.row_height_px == 0 {
            return 0;
        }
        let row = self.row_height_px as u32;
        let rows = (px + row / 2) / row;
        if rows > u16::MAX as u32 {
            u16::MAX
        } else {
            rows as u16
        }
    }

    /// Pixel height covered by a row count.
    #[must_use]
    pub const fn px_for_rows(&self, rows: u16) -> u32 {
        rows as u32 * self.row_height_px as u32
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLUMNS)
    }
}

// ---------------------------------------------------------------------------
// Breakpoint
// ---------------------------------------------------------------------------

/// Responsive breakpoint tiers, ordered narrowest to widest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Below [`Breakpoint::TABLET_MIN_PX`].
    Mobile,
    /// Below [`Breakpoint::DESKTOP_MIN_PX`].
    Tablet,
    /// Everything wider.
    Desktop,
}

impl Breakpoint {
    /// Narrowest viewport width classified as tablet.
    pub const TABLET_MIN_PX: u32 = 640;
    /// Narrowest viewport width classified as desktop.
    pub const DESKTOP_MIN_PX: u32 = 1024;

    /// Classify a viewport width in pixels.
    #[must_use]
    pub const fn classify(viewport_px: u32) -> Self {
        if viewport_px >= Self::DESKTOP_MIN_PX {
            Self::Desktop
        } else if viewport_px >= Self::TABLET_MIN_PX {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }

    /// Column count the grid uses at this breakpoint.
    #[must_use]
    pub const fn columns(self) -> u16 {
        match self {
            Self::Mobile => 4,
            Self::Tablet => 8,
            Self::Desktop => GridConfig::DEFAULT_COLUMNS,
        }
    }

    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
