//! Turning functions: construction, cyclic alignment, and distance.
//!
//! Pipeline
//! - `build`: ring → signed-angle / normalized-length step function, with
//!   collinear vertices merged and digitization direction resolved.
//! - `align`: best cyclic shift of one function against the other, trying
//!   shifts of either side (L1 angle cost on merged breakpoints).
//! - `distance`: Euclidean angle/length evaluation of the winning shift and
//!   the symmetric CCW / clockwise-equivalent comparison of two rings.

mod align;
mod build;
mod distance;
mod types;

pub use align::align;
pub use build::{turning_function, turning_function_with};
pub use distance::{
    evaluate, turning_function_alignment, turning_function_distance,
    turning_function_distance_with,
};
pub use types::{Alignment, Digitization, EvaluatedAlignment, Turn, TurnCfg, TurningFunction};
