/// Number of decimals kept at every rounding decision point.
pub const ROUND_DECIMALS: i32 = 3;

/// Round to `ROUND_DECIMALS` places.
///
/// Rounds the exact binary value of `x`, so `0.0005` (stored slightly above
/// the tie) gives `0.001`. Exact ties go to the even neighbour.
///
/// Applied at exactly four places: the orientation cross product, the
/// cosine before `acos`, the merged alignment breakpoints, and the final
/// angle/length normalization of a turning function. Collinearity and
/// alignment tie-breaking depend on it.
pub fn round3(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    format!("{x:.prec$}", prec = ROUND_DECIMALS as usize)
        .parse()
        .unwrap_or(x)
}
