//! Fundamental arguments of the ELP theory.
//!
//! Three families of angular arguments drive every series of the solution:
//!
//! a) **ELP arguments** W₁, W₂, W₃, T and ϖ′ — polynomials of time. W₁ is
//!    also added directly to the accumulated longitude of the Moon.
//! b) **Delaunay arguments** D, l′, l and F — derived algebraically from
//!    the ELP arguments; they build the argument of the sine (or cosine)
//!    of the Fourier and Poisson series.
//! c) **Planetary arguments**, the mean longitudes of the eight planets,
//!    used by the planetary perturbation series.
//!
//! Each argument is a polynomial of time,
//!
//! ```text
//! λ = λ₀ + λ₁t + λ₂t² + λ₃t³ + λ₄t⁴
//! ```
//!
//! with `t` in Julian centuries since J2000.0. The Main Problem uses the
//! full five-coefficient polynomials; every perturbation series uses the
//! linear two-coefficient truncation. Planetary arguments only exist in
//! linear form. All inputs and outputs are in arcseconds.
//!
//! Coefficients: M. Chapront-Touzé, J. Chapront, G. Francou, Lunar
//! Solution ELP version ELP 2000-82B (1985, rev. 2001), pp. 4-10.

use crate::constants::{ArcSec, JulianCenturies};

/// Number of ELP arguments (W₁, W₂, W₃, T, ϖ′).
pub const ELP_ARGUMENTS: usize = 5;
/// Number of Delaunay arguments (D, l′, l, F).
pub const DELAUNAY_ARGUMENTS: usize = 4;
/// Number of planetary arguments (Mercury .. Neptune).
pub const PLANETARY_ARGUMENTS: usize = 8;

/// Series length of the full quartic polynomials.
pub const FULL_SERIES_TERMS: usize = 5;
/// Series length of the linear truncation used outside the Main Problem.
pub const LINEAR_SERIES_TERMS: usize = 2;

/// Precession constant p in J2000, arcseconds per Julian century.
const PRECESSION_CONSTANT: f64 = 5029.0966;

/// 180° expressed in arcseconds; keeps D in the conventional positive range.
const HALF_TURN: ArcSec = 180.0 * 3600.0;

/// Polynomial coefficients of the ELP arguments, arcseconds. The quartic
/// coefficient of ϖ′ (0.0) is kept so all rows share one width.
///
/// Rows: W₁ (mean mean longitude of the Moon), W₂ (mean longitude of the
/// lunar perigee), W₃ (mean longitude of the lunar ascending node), T
/// (mean heliocentric mean longitude of the Earth-Moon barycenter), ϖ′
/// (mean longitude of the perihelion of the Earth-Moon barycenter).
const ELP_COEFFICIENTS: [[f64; FULL_SERIES_TERMS]; ELP_ARGUMENTS] = [
    [785939.95571, 1732559343.73604, -5.8883, 0.006604, -0.00003169],
    [300071.67475, 14643420.2632, -38.2776, -0.045047, 0.00021301],
    [450160.39816, -6967919.3622, 6.3622, 0.007625, -0.00003586],
    [361679.22059, 129597742.2758, -0.0202, 0.000009, 0.00000015],
    [370574.42753, 1161.2283, 0.5327, -0.000138, 0.0],
];

/// Planetary mean longitudes in J2000 and mean motions, arcseconds and
/// arcseconds per Julian century (VSOP82 values, Mercury .. Neptune).
/// The Earth row equals the T row of [`ELP_COEFFICIENTS`].
const PLANETARY_COEFFICIENTS: [[f64; LINEAR_SERIES_TERMS]; PLANETARY_ARGUMENTS] = [
    [908103.25986, 538101628.68898],
    [655127.28305, 210664136.43355],
    [361679.22059, 129597742.2758],
    [1279559.78866, 68905077.59284],
    [123665.34212, 10925660.42861],
    [180278.89694, 4399609.65932],
    [1130598.01841, 1542481.19393],
    [1095655.19575, 786550.32074],
];

/// Evaluate the first `n_terms` coefficients of one polynomial row at `t`.
fn polynomial(coefficients: &[f64; FULL_SERIES_TERMS], t: JulianCenturies, n_terms: usize) -> f64 {
    coefficients[..n_terms]
        .iter()
        .rev()
        .fold(0.0, |acc, c| acc * t + c)
}

/// Compute the precession argument ζ used by the Earth figure, tidal,
/// Moon figure, relativistic and solar-eccentricity series.
///
/// ζ is W₁ reduced to its linear terms plus the precession rate:
/// ζ = W₁⁽¹⁾(t) + p·t. The linear truncation is used regardless of the
/// precision requested elsewhere for the same date.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
///
/// Return
/// ------
/// * ζ in arcseconds.
pub fn precession_argument(t: JulianCenturies) -> ArcSec {
    polynomial(&ELP_COEFFICIENTS[0], t, LINEAR_SERIES_TERMS) + PRECESSION_CONSTANT * t
}

/// Compute the ELP arguments W₁, W₂, W₃, T and ϖ′.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
/// * `n_terms`: number of polynomial coefficients to use, normally
///   [`FULL_SERIES_TERMS`] for the Main Problem and
///   [`LINEAR_SERIES_TERMS`] for every perturbation series.
///
/// Return
/// ------
/// * `[W₁, W₂, W₃, T, ϖ′]` in arcseconds.
///
/// Panics
/// ------
/// * If `n_terms` exceeds [`FULL_SERIES_TERMS`]: requesting more
///   coefficients than the theory publishes is a caller error.
pub fn elp_arguments(t: JulianCenturies, n_terms: usize) -> [ArcSec; ELP_ARGUMENTS] {
    assert!(
        n_terms <= FULL_SERIES_TERMS,
        "ELP argument series have {FULL_SERIES_TERMS} coefficients, {n_terms} requested"
    );

    std::array::from_fn(|i| polynomial(&ELP_COEFFICIENTS[i], t, n_terms))
}

/// Compute the Delaunay arguments D, l′, l and F.
///
/// The arguments are derived from the ELP arguments of the same date and
/// precision:
///
/// ```text
/// D  = W₁ - T + 180°      (mean solar elongation of the Moon)
/// l′ = T - ϖ′             (mean anomaly of the Sun)
/// l  = W₁ - W₂            (mean anomaly of the Moon)
/// F  = W₁ - W₃            (mean argument of latitude of the Moon)
/// ```
///
/// The theory also publishes direct polynomial coefficients for the
/// Delaunay arguments; they disagree with the combinations above (l′
/// differs by a full turn already in its constant term) and are not used.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
/// * `n_terms`: number of polynomial coefficients to use for the
///   underlying ELP arguments.
///
/// Return
/// ------
/// * `[D, l′, l, F]` in arcseconds.
///
/// Panics
/// ------
/// * If `n_terms` exceeds [`FULL_SERIES_TERMS`].
pub fn delaunay_arguments(t: JulianCenturies, n_terms: usize) -> [ArcSec; DELAUNAY_ARGUMENTS] {
    let [w1, w2, w3, te, obp] = elp_arguments(t, n_terms);

    [w1 - te + HALF_TURN, te - obp, w1 - w2, w1 - w3]
}

/// Compute the planetary arguments, the mean longitudes of Mercury
/// through Neptune.
///
/// Each longitude is strictly linear, λ = λ₀ + λ₁·t; the theory defines
/// no higher-degree terms for the planets.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
///
/// Return
/// ------
/// * `[Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, Neptune]`
///   in arcseconds.
pub fn planetary_arguments(t: JulianCenturies) -> [ArcSec; PLANETARY_ARGUMENTS] {
    std::array::from_fn(|i| PLANETARY_COEFFICIENTS[i][0] + PLANETARY_COEFFICIENTS[i][1] * t)
}
