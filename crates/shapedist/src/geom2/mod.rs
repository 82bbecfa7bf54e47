//! 2D geometry leaves shared by every metric.
//!
//! Purpose
//! - Point/segment primitives with the rounded orientation and angle tests
//!   the turning-function builder depends on.
//! - A validated closed `Ring` (vertex extraction, perimeter, area, centroid,
//!   and the transforms used to probe invariances).
//! - One rounding utility (`round3`) so every decision point rounds the same way.

pub mod rand;
mod ring;
mod types;
mod util;

pub use ring::Ring;
pub use types::{distance_sq, Orientation, Point2, Seg2};
pub use util::{round3, ROUND_DECIMALS};

#[cfg(test)]
mod tests;
