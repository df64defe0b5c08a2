#![forbid(unsafe_code)]

//! Bento-grid packing engine.
//!
//! # Role in Bento
//! `bento-layout` is the solver layer. It computes non-overlapping
//! positions for widget rectangles on a fixed-column grid: fit testing,
//! auto-placement, gravity compaction, push-down collision resolution,
//! bounds clamping, and responsive column remapping. It also classifies
//! a widget's occupied area into a presentation-density tier.
//!
//! # Primary responsibilities
//! - **GridEngine**: the stateless packing operations over
//!   `bento-core` component records.
//! - **ViewMode / DensityTable**: discrete detail tiers derived from
//!   occupied area.
//!
//! # How it fits in the system
//! The widget store holds the authoritative component list and calls in
//! before persisting any move, resize, or add. Every operation takes the
//! current list and returns fresh values; the engine performs no I/O and
//! retains nothing across calls, so it is safe to call from any number
//! of call sites without locking.

pub mod density;
pub mod engine;

pub use density::{DensityTable, DensityThresholds, ViewMode, view_mode};
pub use engine::{GridEngine, LayoutError, MAX_CASCADE_STEPS, MAX_SCAN_ROWS};
