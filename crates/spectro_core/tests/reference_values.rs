//! Fixed reference values for every interpolation kernel.
//!
//! Values were computed in exact rational arithmetic and rounded once to
//! `f64`, so they pin the end conditions and slope rules rather than just
//! the interpolation property.

use approx::assert_relative_eq;
use spectro_core::math::interpolators::{
    AkimaInterpolator, AkimaVariant, BSplineInterpolator, CubicSplineInterpolator, Interpolator,
    PchipInterpolator,
};

const EPS: f64 = 1e-12;

/// Irregular spacing with two sign changes in the secants.
const XS: [f64; 7] = [0.0, 1.0, 2.5, 3.0, 4.5, 6.0, 7.2];
const YS: [f64; 7] = [1.0, 2.5, 0.5, -1.0, 0.8, 3.1, 2.0];
const QUERIES: [f64; 6] = [0.4, 1.7, 2.75, 3.9, 5.1, 6.6];

/// Two straight runs; the Akima weights vanish at the corner.
const KINK_XS: [f64; 7] = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
const KINK_YS: [f64; 7] = [0.0, 1.0, 2.0, 3.0, 5.0, 7.0, 9.0];
const MIDPOINTS: [f64; 6] = [0.5, 1.5, 2.5, 3.5, 4.5, 5.5];

fn assert_values<I: Interpolator<f64>>(interp: &I, queries: &[f64], expected: &[f64]) {
    for (&x, &want) in queries.iter().zip(expected) {
        let got = interp.interpolate(x).unwrap();
        assert_relative_eq!(got, want, epsilon = EPS);
    }
}

fn assert_slopes(got: &[f64], expected: &[f64]) {
    assert_eq!(got.len(), expected.len());
    for (&g, &want) in got.iter().zip(expected) {
        assert_relative_eq!(g, want, epsilon = EPS);
    }
}

// ========================================
// Akima Tests
// ========================================

#[test]
fn test_akima_irregular() {
    let interp = AkimaInterpolator::new(&XS, &YS).unwrap();
    assert_slopes(
        interp.slopes(),
        &[
            2.9166666666666665,
            -0.2839506172839506,
            -2.004739336492891,
            0.5,
            1.4105263157894736,
            1.2399201596806386,
            -2.1416666666666666,
        ],
    );
    assert_values(
        &interp,
        &QUERIES,
        &[
            1.9752592592592593,
            1.8925842711238534,
            -0.4065462085308057,
            -0.06627368421052632,
            1.7357251812165144,
            3.0572380239520958,
        ],
    );
}

#[test]
fn test_akima_vanishing_weights_use_mean_slope() {
    let interp = AkimaInterpolator::new(&KINK_XS, &KINK_YS).unwrap();
    assert_relative_eq!(interp.slopes()[3], 1.5, epsilon = EPS);
    assert_values(
        &interp,
        &MIDPOINTS,
        &[0.5, 1.5, 2.4375, 3.9375, 6.0, 8.0],
    );
}

#[test]
fn test_makima_irregular() {
    let interp = AkimaInterpolator::with_variant(&XS, &YS, AkimaVariant::Makima).unwrap();
    assert_slopes(
        interp.slopes(),
        &[
            2.218599033816425,
            -0.2,
            -1.9397089397089398,
            -0.09036144578313253,
            1.4163308589607635,
            0.8713465783664459,
            -1.60625,
        ],
    );
    assert_values(
        &interp,
        &QUERIES,
        &[
            1.8666782608695651,
            1.8979700315700316,
            -0.3655842183703629,
            -0.152539513728296,
            1.7900535582507566,
            2.921639486754967,
        ],
    );
}

#[test]
fn test_makima_at_corner() {
    let interp =
        AkimaInterpolator::with_variant(&KINK_XS, &KINK_YS, AkimaVariant::Makima).unwrap();
    assert_relative_eq!(interp.slopes()[3], 4.0 / 3.0, epsilon = EPS);
    assert_values(
        &interp,
        &MIDPOINTS,
        &[
            0.5,
            1.5,
            2.4583333333333335,
            3.9166666666666665,
            6.0,
            8.0,
        ],
    );
}

// ========================================
// PCHIP Tests
// ========================================

#[test]
fn test_pchip_irregular_with_sign_changes() {
    let interp = PchipInterpolator::new(&XS, &YS).unwrap();
    assert_slopes(
        interp.slopes(),
        &[
            2.6333333333333333,
            0.0,
            -1.9726027397260273,
            0.0,
            1.3463414634146342,
            0.0,
            -2.0055555555555555,
        ],
    );
    assert_values(
        &interp,
        &QUERIES,
        &[
            1.9072,
            1.9435230847285643,
            -0.3732876712328767,
            -0.12440975609756097,
            1.900409756097561,
            2.8508333333333336,
        ],
    );
}

#[test]
fn test_pchip_at_corner() {
    let interp = PchipInterpolator::new(&KINK_XS, &KINK_YS).unwrap();
    assert_values(
        &interp,
        &MIDPOINTS,
        &[
            0.5,
            1.5,
            2.4583333333333335,
            3.9166666666666665,
            6.0,
            8.0,
        ],
    );
}

// ========================================
// Cubic Spline Tests
// ========================================

#[test]
fn test_cubic_spline_not_a_knot_irregular() {
    let interp = CubicSplineInterpolator::new(&XS, &YS).unwrap();
    assert_slopes(
        interp.slopes(),
        &[
            2.5499021170679868,
            0.41672539642587464,
            -3.1584801577313533,
            -2.0496280448583493,
            2.4724648320608553,
            0.35976871661492854,
            -2.343139245462427,
        ],
    );
    assert_values(
        &interp,
        &QUERIES,
        &[
            1.855180266800906,
            2.2331039404871773,
            -0.31930325705456275,
            -0.662798842184747,
            2.091845708532595,
            2.9554361943116034,
        ],
    );
}

#[test]
fn test_cubic_spline_not_a_knot_at_corner() {
    let interp = CubicSplineInterpolator::new(&KINK_XS, &KINK_YS).unwrap();
    assert_values(
        &interp,
        &MIDPOINTS,
        &[
            0.4732142857142857,
            1.5267857142857142,
            2.419642857142857,
            3.919642857142857,
            6.026785714285714,
            7.973214285714286,
        ],
    );
}

// ========================================
// B-spline Tests
// ========================================

#[test]
fn test_quadratic_bspline_irregular() {
    let interp = BSplineInterpolator::new(&XS, &YS, 2).unwrap();
    assert_values(
        &interp,
        &QUERIES,
        &[
            1.8747146805591457,
            2.1878730422275687,
            -0.3081938741524328,
            -0.5262287486826669,
            2.004296394981209,
            2.9195215843789146,
        ],
    );
}

#[test]
fn test_quadratic_bspline_at_corner() {
    let interp = BSplineInterpolator::new(&KINK_XS, &KINK_YS, 2).unwrap();
    assert_values(
        &interp,
        &MIDPOINTS,
        &[
            0.4956896551724138,
            1.5129310344827587,
            2.4267241379310347,
            3.9267241379310347,
            6.012931034482759,
            7.995689655172414,
        ],
    );
}

#[test]
fn test_cubic_bspline_matches_not_a_knot_spline() {
    let interp = BSplineInterpolator::new(&XS, &YS, 3).unwrap();
    assert_values(
        &interp,
        &QUERIES,
        &[
            1.855180266800906,
            2.2331039404871773,
            -0.31930325705456275,
            -0.662798842184747,
            2.091845708532595,
            2.9554361943116034,
        ],
    );
}

#[test]
fn test_quintic_bspline_irregular() {
    let interp = BSplineInterpolator::new(&XS, &YS, 5).unwrap();
    assert_values(
        &interp,
        &QUERIES,
        &[
            0.7873885659442071,
            2.8859315775867627,
            -0.3410232427448262,
            -0.9428191409587091,
            2.6074274750830564,
            1.9561909065021357,
        ],
    );
}

#[test]
fn test_quintic_bspline_at_corner() {
    let interp = BSplineInterpolator::new(&KINK_XS, &KINK_YS, 5).unwrap();
    assert_values(
        &interp,
        &MIDPOINTS,
        &[
            0.3153409090909091,
            1.5852272727272727,
            2.4005681818181817,
            3.9005681818181817,
            6.0852272727272725,
            7.815340909090909,
        ],
    );
}
