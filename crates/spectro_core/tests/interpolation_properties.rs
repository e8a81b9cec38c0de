//! Property-based tests for the interpolation kernels.

use proptest::prelude::*;
use spectro_core::interpolation::{interpolate_with, Method, MethodOptions};
use spectro_core::math::interpolators::{Interpolator, PchipInterpolator};

/// Strictly increasing abscissae built from positive increments.
fn abscissae(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.1f64..2.0, len).prop_map(|steps| {
        steps
            .iter()
            .scan(0.0, |acc, step| {
                *acc += step;
                Some(*acc)
            })
            .collect()
    })
}

/// Abscissae paired with arbitrary ordinates.
fn samples() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    abscissae(4..20).prop_flat_map(|xs| {
        let n = xs.len();
        (Just(xs), prop::collection::vec(-10.0f64..10.0, n))
    })
}

/// Abscissae paired with non-decreasing ordinates.
fn monotone_samples() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    abscissae(3..15).prop_flat_map(|xs| {
        let n = xs.len();
        let ys = prop::collection::vec(0.0f64..3.0, n).prop_map(|steps| {
            steps
                .iter()
                .scan(0.0, |acc, step| {
                    *acc += step;
                    Some(*acc)
                })
                .collect::<Vec<f64>>()
        });
        (Just(xs), ys)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_every_method_reproduces_knots((xs, ys) in samples()) {
        for method in Method::ALL {
            let values = interpolate_with(method, &MethodOptions::default(), &xs, &ys, &xs).unwrap();
            for (got, want) in values.iter().zip(ys.iter()) {
                prop_assert!(
                    (got - want).abs() <= 1e-7 * (1.0 + want.abs()),
                    "{} gave {} instead of {}", method, got, want
                );
            }
        }
    }

    #[test]
    fn test_pchip_preserves_monotonicity((xs, ys) in monotone_samples()) {
        let interp = PchipInterpolator::new(&xs, &ys).unwrap();
        let (lo, hi) = interp.domain();
        let mut previous = f64::NEG_INFINITY;
        for i in 0..=200 {
            let x = lo + (hi - lo) * i as f64 / 200.0;
            let y = interp.interpolate(x).unwrap();
            prop_assert!(y >= previous - 1e-9, "decrease at x = {}", x);
            previous = y;
        }
    }

    #[test]
    fn test_linear_stays_within_neighbours((xs, ys) in samples(), t in 0.0f64..1.0) {
        let values = interpolate_with(
            Method::PiecewiseLinear,
            &MethodOptions::default(),
            &xs,
            &ys,
            &[xs[1] + t * (xs[2] - xs[1])],
        )
        .unwrap();
        let lo = ys[1].min(ys[2]);
        let hi = ys[1].max(ys[2]);
        prop_assert!(values[0] >= lo - 1e-12 && values[0] <= hi + 1e-12);
    }
}
