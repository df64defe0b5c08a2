#![forbid(unsafe_code)]

//! Core: grid geometry, component records, and configuration for Bento.
//!
//! # Role in Bento
//! `bento-core` is the primitive layer. It owns the cell-grid geometry
//! types, the widget component record the caller persists, and the grid
//! configuration the layout engine consumes.
//!
//! # Primary responsibilities
//! - **GridRect**: integer cell rectangles with half-open overlap tests.
//! - **GridComponent**: one widget's occupied rectangle, keyed by id.
//! - **GridConfig / Breakpoint**: column count, row height, gravity flag,
//!   and responsive breakpoint classification.
//! - **WidgetKind / SizeLimits**: per-kind minimum/maximum spans.
//!
//! # How it fits in the system
//! The layout engine (`bento-layout`) consumes these types and computes
//! placements; it depends on `bento-core`, never the reverse. The widget
//! store that persists geometry serializes `GridComponent` records
//! through serde and treats the engine's outputs as the new layout.

pub mod component;
pub mod config;
pub mod geometry;
pub mod widget;

pub use component::{GridComponent, WidgetId};
pub use config::{Breakpoint, GridConfig};
pub use geometry::GridRect;
pub use widget::{SizeLimits, WidgetKind};
