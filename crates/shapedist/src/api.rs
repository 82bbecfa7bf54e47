//! Curated flat API.
//!
//! One import path for the ring type, every distance, and the turning
//! function internals callers inspect (alignment, evaluation, config).

// Geometry
pub use crate::geom2::rand::{draw_ring_radial, RadialCfg, ReplayToken, VertexCount};
pub use crate::geom2::{round3, Orientation, Point2, Ring, Seg2, ROUND_DECIMALS};
// Turning function
pub use crate::turning::{
    align, evaluate, turning_function, turning_function_alignment, turning_function_distance,
    turning_function_distance_with, turning_function_with, Alignment, Digitization,
    EvaluatedAlignment, Turn, TurnCfg, TurningFunction,
};
// Vertex metrics
pub use crate::metrics::{
    centroid_distance, chamfer_distance, hausdorff_distance, perimeter_ratio, polis_distance,
    Symmetrize,
};
