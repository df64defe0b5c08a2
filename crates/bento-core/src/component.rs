#![forbid(unsafe_code)]

//! Widget component records.
//!
//! A [`GridComponent`] is the one entity the layout engine operates on:
//! a widget id plus the rectangle it occupies. The caller's widget store
//! owns the component list, persists it, and passes it into every engine
//! call; the engine returns new records and retains nothing.
//!
//! Records serialize flat (`{id, x, y, w, h}`) to match the persisted
//! geometry rows the store reads and writes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::GridRect;

/// Stable identifier for a widget, assigned by the caller's store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WidgetId(pub u64);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget-{}", self.0)
    }
}

/// One widget's occupied rectangle on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridComponent {
    /// Owning widget.
    pub id: WidgetId,
    /// Occupied cells.
    #[serde(flatten)]
    pub rect: GridRect,
}

impl GridComponent {
    /// Create a component record.
    #[inline]
    #[must_use]
    pub const fn new(id: WidgetId, rect: GridRect) -> Self {
        Self { id, rect }
    }

    /// True iff this component and a distinct other occupy common cells.
    ///
    /// A component never collides with itself: identical ids compare
    /// false regardless of geometry, so a moved component can be checked
    /// against a list that still contains its previous position.
    #[inline]
    #[must_use]
    pub fn collides_with(&self, other: &GridComponent) -> bool {
        self.id != other.id && self.rect.overlaps(&other.rect)
    }

    /// The same component moved to a new origin.
    #[inline]
    #[must_use]
    pub const fn at(&self, x: u16, y: u16) -> Self {
        Self {
            id: self.id,
            rect: self.rect.at(x, y),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(id: u64, x: u16, y: u16, w: u16, h: u16) -> GridComponent {
        GridComponent::new(WidgetId(id), GridRect::new(x, y, w, h))
    }

    // === Collision ===

    #[test]
    fn distinct_overlapping_components_collide() {
        let a = comp(1, 0, 0, 4, 4);
        let b = comp(2, 2, 2, 4, 4);
        assert!(a.collides_with(&b));
    }

    #[test]
    fn same_id_never_collides() {
        let before = comp(1, 0, 0, 4, 4);
        let after = comp(1, 1, 1, 4, 4);
        assert!(!before.collides_with(&after));
    }

    #[test]
    fn adjacent_components_do_not_collide() {
        let a = comp(1, 0, 0, 2, 2);
        let b = comp(2, 2, 0, 2, 2);
        assert!(!a.collides_with(&b));
    }

    // === Serde shape ===

    #[test]
    fn serializes_flat() {
        let c = comp(7, 3, 1, 6, 4);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "x": 3, "y": 1, "w": 6, "h": 4})
        );
    }

    #[test]
    fn round_trips_through_json() {
        let c = comp(42, 0, 9, 2, 3);
        let json = serde_json::to_string(&c).unwrap();
        let back: GridComponent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn deserializes_persisted_row() {
        let row = r#"{"id": 3, "x": 6, "y": 0, "w": 6, "h": 4}"#;
        let c: GridComponent = serde_json::from_str(row).unwrap();
        assert_eq!(c, comp(3, 6, 0, 6, 4));
    }

    #[test]
    fn widget_id_display() {
        assert_eq!(WidgetId(12).to_string(), "widget-12");
    }
}
