//! Shape-similarity distances between two matching 2D polygons.
//!
//! Modules
//! - `geom2`: points, segments, the validated closed `Ring`, random rings.
//! - `turning`: turning functions, cyclic alignment, turning-function distance.
//! - `metrics`: Chamfer, Hausdorff and PoLiS distances, `Symmetrize`, and
//!   scalar comparisons (perimeter ratio, centroid shift).
//! - `api`: curated flat re-exports for callers that want one import path.
//!
//! Every operation is a pure function of its inputs. Failures surface as
//! `Error`; nothing panics on user-supplied geometry.

pub mod api;
pub mod error;
pub mod geom2;
pub mod metrics;
pub mod turning;

pub use error::{Error, Result};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom2::{Point2, Ring};
    pub use crate::metrics::{
        centroid_distance, chamfer_distance, hausdorff_distance, perimeter_ratio, polis_distance,
        Symmetrize,
    };
    pub use crate::turning::{turning_function, turning_function_distance, TurningFunction};
}
