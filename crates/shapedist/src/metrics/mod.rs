//! Vertex- and boundary-based distances between two rings, plus scalar
//! comparisons.
//!
//! Each vertex metric computes a directed value A→B and B→A and collapses
//! them with a `Symmetrize` policy. `Symmetrize::Directed` (the default)
//! returns A→B only.

mod scalar;
mod vertex;

pub use scalar::{centroid_distance, perimeter_ratio};
pub use vertex::{chamfer_distance, hausdorff_distance, polis_distance};

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How two directed distances become one value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Symmetrize {
    /// A→B only.
    #[default]
    Directed,
    Min,
    Max,
    /// Weighted mean; see each metric for its weights.
    Average,
}

impl Symmetrize {
    /// Collapse `(ab, ba)`; `Average` weights them by `(wa, wb)`.
    pub fn combine(self, ab: f64, ba: f64, (wa, wb): (f64, f64)) -> f64 {
        match self {
            Symmetrize::Directed => ab,
            Symmetrize::Min => ab.min(ba),
            Symmetrize::Max => ab.max(ba),
            Symmetrize::Average => (wa * ab + wb * ba) / (wa + wb),
        }
    }
}

impl FromStr for Symmetrize {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "directed" => Ok(Symmetrize::Directed),
            "min" => Ok(Symmetrize::Min),
            "max" => Ok(Symmetrize::Max),
            "average" => Ok(Symmetrize::Average),
            other => Err(Error::InvalidArgument(format!(
                "unknown symmetrize option '{other}' (expected min, max or average)"
            ))),
        }
    }
}

impl fmt::Display for Symmetrize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Symmetrize::Directed => "directed",
            Symmetrize::Min => "min",
            Symmetrize::Max => "max",
            Symmetrize::Average => "average",
        };
        f.write_str(s)
    }
}
