#![forbid(unsafe_code)]

//! Grid packing operations.
//!
//! All operations are pure: they take the caller's component list and
//! return new values, never mutating or retaining the input. The caller
//! owns the list and decides what to persist.
//!
//! # Direction convention
//!
//! The grid is top-anchored: row 0 is the top and `y` grows downward.
//! Gravity pulls components **up**, toward row 0 (`y` decreasing);
//! components displaced by a collision are pushed **down**, away from
//! row 0 (`y` increasing). Function names follow the visual motion:
//! [`GridEngine::can_float_up`] asks whether gravity can move a
//! component, and [`GridEngine::resolve_collisions`] pushes intruded
//! components down.
//!
//! # Invariants
//!
//! 1. [`GridEngine::compact`] output has no overlapping pair and no
//!    component that can still float up; it is idempotent.
//! 2. [`GridEngine::resolve_collisions`], on success, returns a layout
//!    with no overlapping pair in which the just-moved component kept
//!    the position the caller gave it.
//! 3. [`GridEngine::find_next_position`] is deterministic: topmost open
//!    slot first, leftmost within the row.
//! 4. Every loop is bounded: the placement scan by [`MAX_SCAN_ROWS`],
//!    the push-down cascade by [`MAX_CASCADE_STEPS`], and compaction by
//!    its fixed point (total `y` strictly decreases each productive
//!    sweep).
//!
//! # Failure Modes
//!
//! | Failure | Cause | Surface |
//! |---------|-------|---------|
//! | No open slot within the scan depth | Layout denser than [`MAX_SCAN_ROWS`] rows | `find_next_position` returns `None` |
//! | Zero-size component reaches a mutating op | Caller bug | `Err(LayoutError::InvalidGeometry)` |
//! | Cascade exceeds its step bound | Pathological displacement chain | `Err(LayoutError::CascadeOverflow)` |

use std::collections::VecDeque;
use std::fmt;

use bento_core::{GridComponent, GridConfig, GridRect, SizeLimits, WidgetId, WidgetKind};
use rustc_hash::FxHashMap;

#[cfg(feature = "tracing")]
use tracing::{trace, warn};

/// Row-scan depth cap for auto-placement.
///
/// A portfolio page is a few dozen rows; a scan that reaches this depth
/// means the layout has no open slot worth offering.
pub const MAX_SCAN_ROWS: u16 = 1000;

/// Step bound for the push-down cascade.
///
/// Each step moves one component one row down, so a legitimate cascade
/// uses on the order of (components × displaced rows) steps. The bound
/// exists to turn a pathological displacement chain into an error
/// instead of an unbounded loop.
pub const MAX_CASCADE_STEPS: usize = 10_000;

// ---------------------------------------------------------------------------
// LayoutError
// ---------------------------------------------------------------------------

/// Abnormal conditions surfaced by the mutating operations.
///
/// Fit and collision misses are ordinary boolean/optional results, not
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A component with zero width or height reached a mutating entry
    /// point. Negative coordinates are unrepresentable by construction.
    InvalidGeometry {
        /// The offending component.
        id: WidgetId,
    },
    /// The push-down cascade exceeded [`MAX_CASCADE_STEPS`].
    CascadeOverflow {
        /// Steps taken before giving up.
        steps: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGeometry { id } => {
                write!(f, "component {id} has zero width or height")
            }
            Self::CascadeOverflow { steps } => {
                write!(f, "push-down cascade did not settle after {steps} steps")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

// ---------------------------------------------------------------------------
// GridEngine
// ---------------------------------------------------------------------------

/// The packing engine for one grid configuration.
///
/// Holds the grid configuration and per-kind size-limit overrides,
/// never layout state; every operation takes the current component list
/// and returns fresh values.
#[derive(Debug, Clone)]
pub struct GridEngine {
    config: GridConfig,
    limit_overrides: FxHashMap<WidgetKind, SizeLimits>,
}

impl GridEngine {
    /// Create an engine for the given grid configuration.
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            config,
            limit_overrides: FxHashMap::default(),
        }
    }

    /// Override the size limits for one widget kind.
    #[must_use]
    pub fn with_size_limits(mut self, kind: WidgetKind, limits: SizeLimits) -> Self {
        self.limit_overrides.insert(kind, limits);
        self
    }

    /// The grid configuration this engine packs against.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Effective size limits for a widget kind: the caller's override if
    /// present, the per-kind default otherwise.
    #[must_use]
    pub fn size_limits(&self, kind: WidgetKind) -> SizeLimits {
        self.limit_overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| SizeLimits::for_kind(kind))
    }

    // -----------------------------------------------------------------------
    // Fit testing
    // -----------------------------------------------------------------------

    /// True iff `candidate` lies within the grid's columns and collides
    /// with no placed component.
    ///
    /// `exclude` skips one id, for checking a component's new position
    /// against a list that still contains its old one. Empty candidates
    /// never fit.
    #[must_use]
    pub fn fits(
        &self,
        candidate: GridRect,
        components: &[GridComponent],
        exclude: Option<WidgetId>,
    ) -> bool {
        if candidate.is_empty() || candidate.right() > self.config.columns {
            return false;
        }
        components
            .iter()
            .filter(|c| Some(c.id) != exclude)
            .all(|c| !c.rect.overlaps(&candidate))
    }

    /// Find the first open `(x, y)` for a `w × h` rectangle.
    ///
    /// Scans in row-major order (`y` outer from row 0, `x` inner from
    /// column 0), so the result is the topmost, then leftmost, open
    /// slot — deterministic for an unchanged layout. Returns `None` when
    /// the size cannot fit the grid at all or no slot opens within
    /// [`MAX_SCAN_ROWS`]; callers treat `None` as "no space found".
    #[must_use]
    pub fn find_next_position(
        &self,
        w: u16,
        h: u16,
        components: &[GridComponent],
    ) -> Option<(u16, u16)> {
        if w == 0 || h == 0 || w > self.config.columns {
            return None;
        }
        for y in 0..MAX_SCAN_ROWS {
            for x in 0..=self.config.columns - w {
                if self.fits(GridRect::new(x, y, w, h), components, None) {
                    return Some((x, y));
                }
            }
        }
        #[cfg(feature = "tracing")]
        warn!(
            w,
            h,
            components = components.len(),
            max_rows = MAX_SCAN_ROWS,
            "placement scan exhausted without an open slot"
        );
        None
    }

    // -----------------------------------------------------------------------
    // Gravity
    // -----------------------------------------------------------------------

    /// True iff gravity can move `component` one row toward row 0
    /// without colliding with any other component.
    ///
    /// `components` may include `component` itself; a component never
    /// blocks its own movement.
    #[must_use]
    pub fn can_float_up(&self, component: &GridComponent, components: &[GridComponent]) -> bool {
        if component.rect.y == 0 {
            return false;
        }
        let lifted = component.at(component.rect.x, component.rect.y - 1);
        components.iter().all(|c| !lifted.collides_with(c))
    }

    /// Compact the layout: float every component as far toward row 0 as
    /// collisions allow, eliminating vertical gaps.
    ///
    /// Components are processed in ascending `(y, x, id)` order and the
    /// sweep repeats until a full pass moves nothing, so the result is
    /// deterministic and idempotent. Only `y` changes; `x`, sizes, and
    /// ids are preserved. With `gravity` disabled in the configuration
    /// the layout is returned order-normalized but unmoved.
    #[must_use]
    pub fn compact(&self, components: &[GridComponent]) -> Vec<GridComponent> {
        let mut out: Vec<GridComponent> = components.to_vec();
        out.sort_by_key(|c| (c.rect.y, c.rect.x, c.id));
        if !self.config.gravity {
            return out;
        }

        let mut passes = 0u32;
        loop {
            let mut moved = false;
            for i in 0..out.len() {
                while self.can_float_up(&out[i], &out) {
                    out[i].rect.y -= 1;
                    moved = true;
                }
            }
            passes += 1;
            if !moved {
                break;
            }
        }

        #[cfg(feature = "tracing")]
        trace!(components = out.len(), passes, "layout compacted");
        let _ = passes;

        out
    }

    // -----------------------------------------------------------------------
    // Push-down cascade
    // -----------------------------------------------------------------------

    /// Resolve overlaps created by an explicit move or resize of the
    /// component with id `moved`, by pushing intruded components down.
    ///
    /// The moved component keeps the position the caller gave it; every
    /// component overlapping it is pushed one row down at a time, each
    /// push re-checked against the full layout so displacement chains
    /// cascade. Returns a new list; the input is untouched. If `moved`
    /// is not present the layout is returned unchanged.
    ///
    /// # Errors
    ///
    /// [`LayoutError::InvalidGeometry`] if the moved component has zero
    /// width or height; [`LayoutError::CascadeOverflow`] if the cascade
    /// exceeds [`MAX_CASCADE_STEPS`].
    pub fn resolve_collisions(
        &self,
        components: &[GridComponent],
        moved: WidgetId,
    ) -> Result<Vec<GridComponent>, LayoutError> {
        let mut out: Vec<GridComponent> = components.to_vec();
        let Some(anchor) = out.iter().position(|c| c.id == moved) else {
            return Ok(out);
        };
        if out[anchor].rect.is_empty() {
            return Err(LayoutError::InvalidGeometry { id: moved });
        }

        // Seed with everything the moved component landed on, in list
        // order for determinism.
        let mut queue: VecDeque<WidgetId> = out
            .iter()
            .filter(|c| c.collides_with(&out[anchor]))
            .map(|c| c.id)
            .collect();

        let mut steps: usize = 0;
        while let Some(id) = queue.pop_front() {
            steps += 1;
            if steps > MAX_CASCADE_STEPS {
                #[cfg(feature = "tracing")]
                warn!(steps, moved = %moved, "push-down cascade exceeded its step bound");
                return Err(LayoutError::CascadeOverflow { steps });
            }

            let Some(idx) = out.iter().position(|c| c.id == id) else {
                continue;
            };
            out[idx].rect.y = out[idx].rect.y.saturating_add(1);

            // Recompute this component's collision set at its new row.
            // Colliders at or below it are displaced in turn; if it is
            // still inside the moved component (or something above it),
            // it has not descended far enough yet.
            let mut descend_again = false;
            let mut displaced: Vec<WidgetId> = Vec::new();
            for j in 0..out.len() {
                if j == idx || !out[idx].collides_with(&out[j]) {
                    continue;
                }
                if out[j].id == moved || out[j].rect.y < out[idx].rect.y {
                    descend_again = true;
                } else if !queue.contains(&out[j].id) {
                    displaced.push(out[j].id);
                }
            }
            for displaced_id in displaced {
                queue.push_back(displaced_id);
            }
            if descend_again {
                queue.push_front(id);
            }
        }

        Ok(out)
    }

    // -----------------------------------------------------------------------
    // Clamping and remapping
    // -----------------------------------------------------------------------

    /// Clamp a component's size to its kind's limits and its position to
    /// the grid's columns.
    ///
    /// Width is additionally capped at the column count; `x` is then
    /// clamped so the component ends inside the grid. `y` has no upper
    /// bound (rows grow downward indefinitely). Applied after every
    /// user-driven move or resize before the result enters the layout.
    #[must_use]
    pub fn clamp_to_grid(&self, component: &GridComponent, kind: WidgetKind) -> GridComponent {
        let limits = self.size_limits(kind);
        let columns = self.config.columns.max(1);
        let w = limits.clamp_w(component.rect.w).min(columns);
        let h = limits.clamp_h(component.rect.h);
        let x = component.rect.x.min(columns - w);
        GridComponent::new(component.id, GridRect::new(x, component.rect.y, w, h))
    }

    /// Rescale every component's `x` and `w` for a new column count.
    ///
    /// `x` scales by `floor(x · new / old)` and `w` by
    /// `ceil(w · new / old)`, then both are re-clamped so every result
    /// satisfies `x + w ≤ new_cols`. Integer rounding can distort aspect
    /// slightly and may introduce overlaps; callers re-compact after
    /// remapping. Used when a viewport breakpoint changes the column
    /// count (desktop 12 → mobile 4).
    #[must_use]
    pub fn remap_columns(
        &self,
        components: &[GridComponent],
        old_cols: u16,
        new_cols: u16,
    ) -> Vec<GridComponent> {
        if old_cols == 0 || new_cols == 0 || old_cols == new_cols {
            return components.to_vec();
        }
        let old = u32::from(old_cols);
        let new = u32::from(new_cols);
        components
            .iter()
            .map(|c| {
                let w = (u32::from(c.rect.w) * new).div_ceil(old).clamp(1, new) as u16;
                let x = (u32::from(c.rect.x) * new / old).min(u32::from(new_cols - w)) as u16;
                GridComponent::new(c.id, GridRect::new(x, c.rect.y, w, c.rect.h))
            })
            .collect()
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
