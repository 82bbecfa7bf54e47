//! Property tests over random star-shaped rings.
//!
//! Rings come from the default sampler (12 vertices, full jitter) and from a
//! wide vertex-count range, so shallow and near-straight turns show up.

use proptest::prelude::*;
use shapedist::api::*;

fn arb_ring() -> impl Strategy<Value = Ring> {
    let wide = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 3, max: 60 },
        ..RadialCfg::default()
    };
    (prop_oneof![Just(RadialCfg::default()), Just(wide)], any::<u64>(), 0u64..1000).prop_map(
        |(cfg, seed, index)| draw_ring_radial(cfg, ReplayToken { seed, index }).unwrap(),
    )
}

/// Few vertices, low jitter: no turn is close to straight, so the absolute
/// collinearity threshold cannot reclassify a vertex after scaling.
fn arb_bold_ring() -> impl Strategy<Value = Ring> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 4, max: 6 },
        angle_jitter_frac: 0.1,
        radial_jitter: 0.15,
        ..RadialCfg::default()
    };
    (any::<u64>(), 0u64..1000)
        .prop_map(move |(seed, index)| draw_ring_radial(cfg, ReplayToken { seed, index }).unwrap())
}

fn arb_square() -> impl Strategy<Value = Ring> {
    (1u32..50, -20i32..20, -20i32..20).prop_map(|(side, x, y)| {
        let (s, x, y) = (side as f64, x as f64, y as f64);
        Ring::from_xy(&[(x, y), (x + s, y), (x + s, y + s), (x, y + s)]).unwrap()
    })
}

const POLICIES: [Symmetrize; 4] = [
    Symmetrize::Directed,
    Symmetrize::Min,
    Symmetrize::Max,
    Symmetrize::Average,
];

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn turning_function_closes(r in arb_ring()) {
        let tf = turning_function(&r, true).unwrap();
        prop_assert_eq!(tf.digitization_direction(), Digitization::Ccw);
        // The rounded cosine moves each turn by at most acos(0.9995), about 1.81°.
        let bound = 2.0 * r.vertex_count() as f64;
        prop_assert!((tf.total_angle() - 360.0).abs() <= bound);
        let total_len: f64 = tf.lengths().iter().sum();
        prop_assert!((total_len - 1.0).abs() < 1e-9);
        prop_assert!(tf.breakpoints().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn self_distance_is_zero(r in arb_ring()) {
        prop_assert!(turning_function_distance(&r, &r).unwrap().abs() < 1e-12);
        for sym in POLICIES {
            prop_assert_eq!(chamfer_distance(&r, &r, sym), 0.0);
            prop_assert_eq!(hausdorff_distance(&r, &r, sym), 0.0);
            prop_assert_eq!(polis_distance(&r, &r, sym), 0.0);
        }
    }

    #[test]
    fn turning_distance_ignores_power_of_two_scale(
        r in arb_bold_ring(),
        s in prop_oneof![Just(0.25), Just(0.5), Just(2.0), Just(8.0)],
    ) {
        let scaled = r.scaled(s).unwrap();
        prop_assert!(turning_function_distance(&r, &scaled).unwrap().abs() < 1e-12);
    }

    #[test]
    fn turning_distance_is_non_negative(a in arb_ring(), b in arb_ring()) {
        let d = turning_function_distance(&a, &b).unwrap();
        prop_assert!(d >= 0.0 && d.is_finite());
    }

    #[test]
    fn symmetrized_metrics_are_bounded(a in arb_ring(), b in arb_ring()) {
        type Metric = fn(&Ring, &Ring, Symmetrize) -> f64;
        let metrics: [Metric; 3] = [chamfer_distance, hausdorff_distance, polis_distance];
        for metric in metrics {
            let ab = metric(&a, &b, Symmetrize::Directed);
            let ba = metric(&b, &a, Symmetrize::Directed);
            let lo = metric(&a, &b, Symmetrize::Min);
            let hi = metric(&a, &b, Symmetrize::Max);
            let avg = metric(&a, &b, Symmetrize::Average);
            prop_assert!(ab >= 0.0 && ba >= 0.0);
            prop_assert_eq!(lo, ab.min(ba));
            prop_assert_eq!(hi, ab.max(ba));
            prop_assert!(lo - 1e-12 <= avg && avg <= hi + 1e-12);
            prop_assert_eq!(metric(&b, &a, Symmetrize::Max), hi);
        }
    }

    #[test]
    fn squares_ignore_start_and_winding(sq in arb_square(), k in 0usize..4) {
        let shifted = sq.rotated_start(k);
        prop_assert_eq!(turning_function_distance(&sq, &shifted).unwrap(), 0.0);
        prop_assert_eq!(turning_function_distance(&sq, &sq.reversed()).unwrap(), 0.0);
        prop_assert_eq!(turning_function_distance(&sq, &shifted.reversed()).unwrap(), 0.0);
    }
}
