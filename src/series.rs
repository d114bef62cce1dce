//! Fourier and Poisson series summation for the ELP 2000-82B solution.
//!
//! Every perturbation category of the theory is the sum of a term table,
//!
//! ```text
//! Σ A·sin(i₁a₁ + i₂a₂ + ... + φ)
//! ```
//!
//! where the aᵢ are fundamental arguments in arcseconds, the iᵢ small
//! signed integer multipliers, and φ an optional phase in degrees. The
//! categories differ only in which arguments participate:
//!
//! - **Main Problem**: the four Delaunay arguments, no phase; sine for
//!   longitude and latitude, cosine for distance (the real and imaginary
//!   parts of the disturbing-function expansion).
//! - **ζ series** (Earth figure, tidal, Moon figure, relativistic,
//!   solar eccentricity): the precession argument ζ plus the four
//!   Delaunay arguments, with phase.
//! - **Planetary, first kind**: the eight planetary longitudes plus
//!   D, l and F, with phase. l′ is excluded: it is linearly dependent on
//!   the other arguments of that expansion.
//! - **Planetary, second kind**: the planetary longitudes Mercury
//!   through Uranus plus all four Delaunay arguments, with phase.
//!   Neptune's direct perturbation is negligible at this order.
//!
//! Each kernel is a deterministic fold over its table, front to back; an
//! empty table sums to exactly 0.0.

use crate::arguments::{DELAUNAY_ARGUMENTS, PLANETARY_ARGUMENTS};
use crate::constants::{ArcSec, Degree, RADEG, RADSEC};

/// Number of multiplier slots of a ζ-series term (ζ, D, l′, l, F).
pub const ZETA_MULTIPLIERS: usize = 1 + DELAUNAY_ARGUMENTS;
/// Number of multiplier slots of a planetary term (8 planets + 3 or 4
/// Delaunay arguments, depending on the kind).
pub const PLANETARY_MULTIPLIERS: usize = 11;

/// One term of a Main Problem series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MainProblemTerm {
    /// Multipliers of the Delaunay arguments D, l′, l, F.
    pub delaunay: [i8; DELAUNAY_ARGUMENTS],
    /// Amplitude: arcseconds for longitude and latitude, kilometers for
    /// distance.
    pub amplitude: f64,
}

/// One term of a perturbation series with an explicit phase.
///
/// `N` is the number of multiplier slots; their meaning is fixed by the
/// kernel the table is fed to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbationTerm<const N: usize> {
    /// Signed integer multipliers of the fundamental arguments.
    pub multipliers: [i8; N],
    /// Phase φ in degrees.
    pub phase: Degree,
    /// Amplitude: arcseconds for longitude and latitude, kilometers for
    /// distance.
    pub amplitude: f64,
    /// Approximate period in years. Not used in any computation; kept
    /// for consistency with the ELP data files.
    pub period: f64,
}

/// A term of the ζ series: multipliers (ζ, D, l′, l, F).
pub type ZetaTerm = PerturbationTerm<ZETA_MULTIPLIERS>;
/// A term of a planetary series: eleven multiplier slots.
pub type PlanetaryTerm = PerturbationTerm<PLANETARY_MULTIPLIERS>;

/// Signed integer linear combination of fundamental arguments.
fn combination(multipliers: &[i8], arguments: &[ArcSec]) -> ArcSec {
    multipliers
        .iter()
        .zip(arguments)
        .map(|(&m, &a)| f64::from(m) * a)
        .sum()
}

/// Fold a phase series: Σ A·sin(argument + φ), arguments in arcseconds,
/// phases in degrees.
fn phase_series<const N: usize>(
    table: &[PerturbationTerm<N>],
    argument: impl Fn(&[i8; N]) -> ArcSec,
) -> f64 {
    table
        .iter()
        .map(|term| {
            term.amplitude * (RADSEC * argument(&term.multipliers) + RADEG * term.phase).sin()
        })
        .sum()
}

/// Sine Fourier series of the Main Problem,
/// Σ A·sin(i₁D + i₂l′ + i₃l + i₄F). Used for longitude and latitude.
///
/// Arguments
/// ---------
/// * `delaunay`: Delaunay arguments `[D, l′, l, F]` in arcseconds.
/// * `table`: term table; slice order fixes the summation order.
///
/// Return
/// ------
/// * The accumulated sum, in the unit of the table amplitudes.
pub fn main_problem_sin(delaunay: &[ArcSec; DELAUNAY_ARGUMENTS], table: &[MainProblemTerm]) -> f64 {
    table
        .iter()
        .map(|term| term.amplitude * (RADSEC * combination(&term.delaunay, delaunay)).sin())
        .sum()
}

/// Cosine Fourier series of the Main Problem,
/// Σ A·cos(i₁D + i₂l′ + i₃l + i₄F). Used for distance.
///
/// Arguments
/// ---------
/// * `delaunay`: Delaunay arguments `[D, l′, l, F]` in arcseconds.
/// * `table`: term table; slice order fixes the summation order.
///
/// Return
/// ------
/// * The accumulated sum, in the unit of the table amplitudes.
pub fn main_problem_cos(delaunay: &[ArcSec; DELAUNAY_ARGUMENTS], table: &[MainProblemTerm]) -> f64 {
    table
        .iter()
        .map(|term| term.amplitude * (RADSEC * combination(&term.delaunay, delaunay)).cos())
        .sum()
}

/// Poisson series over the precession argument and the Delaunay
/// arguments, Σ A·sin(i₁ζ + i₂D + i₃l′ + i₄l + i₅F + φ).
///
/// Used by the Earth figure, tidal, Moon figure, relativistic and
/// solar-eccentricity categories.
///
/// Arguments
/// ---------
/// * `zeta`: precession argument ζ in arcseconds.
/// * `delaunay`: Delaunay arguments `[D, l′, l, F]` in arcseconds.
/// * `table`: term table; slice order fixes the summation order.
///
/// Return
/// ------
/// * The accumulated sum, in the unit of the table amplitudes.
pub fn zeta_series(
    zeta: ArcSec,
    delaunay: &[ArcSec; DELAUNAY_ARGUMENTS],
    table: &[ZetaTerm],
) -> f64 {
    phase_series(table, |m| {
        f64::from(m[0]) * zeta + combination(&m[1..], delaunay)
    })
}

/// Planetary perturbation series of the first kind,
/// Σ A·sin(i₁Me + i₂V + i₃T + i₄Ma + i₅J + i₆S + i₇U + i₈N + i₉D + i₁₀l + i₁₁F + φ).
///
/// All eight planetary longitudes participate; of the Delaunay arguments
/// only D, l and F do.
///
/// Arguments
/// ---------
/// * `planetary`: planetary arguments Mercury .. Neptune in arcseconds.
/// * `delaunay`: Delaunay arguments `[D, l′, l, F]` in arcseconds.
/// * `table`: term table; slice order fixes the summation order.
///
/// Return
/// ------
/// * The accumulated sum, in the unit of the table amplitudes.
pub fn planetary_first(
    planetary: &[ArcSec; PLANETARY_ARGUMENTS],
    delaunay: &[ArcSec; DELAUNAY_ARGUMENTS],
    table: &[PlanetaryTerm],
) -> f64 {
    phase_series(table, |m| {
        combination(&m[..PLANETARY_ARGUMENTS], planetary)
            + f64::from(m[8]) * delaunay[0]
            + f64::from(m[9]) * delaunay[2]
            + f64::from(m[10]) * delaunay[3]
    })
}

/// Planetary perturbation series of the second kind,
/// Σ A·sin(i₁Me + i₂V + i₃T + i₄Ma + i₅J + i₆S + i₇U + i₈D + i₉l′ + i₁₀l + i₁₁F + φ).
///
/// The planetary longitudes Mercury through Uranus participate, Neptune
/// does not; all four Delaunay arguments do.
///
/// Arguments
/// ---------
/// * `planetary`: planetary arguments Mercury .. Neptune in arcseconds.
/// * `delaunay`: Delaunay arguments `[D, l′, l, F]` in arcseconds.
/// * `table`: term table; slice order fixes the summation order.
///
/// Return
/// ------
/// * The accumulated sum, in the unit of the table amplitudes.
pub fn planetary_second(
    planetary: &[ArcSec; PLANETARY_ARGUMENTS],
    delaunay: &[ArcSec; DELAUNAY_ARGUMENTS],
    table: &[PlanetaryTerm],
) -> f64 {
    phase_series(table, |m| {
        combination(&m[..PLANETARY_ARGUMENTS - 1], planetary) + combination(&m[7..], delaunay)
    })
}
