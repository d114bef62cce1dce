//! Planetary perturbations of the first kind (ELP files 10-15).
//!
//! Planetary-series tables, multipliers (Mercury, Venus, Earth, Mars,
//! Jupiter, Saturn, Uranus, Neptune, D, l, F) — l′ does not participate
//! in this kind. Truncated to the dominant terms: the great Venus family
//! with argument 18V − 16T − l, by far the largest planetary inequality
//! of the lunar longitude. Every term of the distance component and of
//! the components in t (ELP12-15) falls below the truncation threshold,
//! so those tables are empty; the composer still evaluates them.

use crate::series::PlanetaryTerm;

const fn t(multipliers: [i8; 11], phase: f64, amplitude: f64, period: f64) -> PlanetaryTerm {
    PlanetaryTerm {
        multipliers,
        phase,
        amplitude,
        period,
    }
}

/// Longitude, constant component (ELP10).
pub static LONGITUDE_0: [PlanetaryTerm; 1] =
    [t([0, 18, -16, 0, 0, 0, 0, 0, 0, -1, 0], 26.54, 14.2488, 273.0)];

/// Latitude, constant component (ELP11).
pub static LATITUDE_0: [PlanetaryTerm; 2] = [
    t([0, 18, -16, 0, 0, 0, 0, 0, 0, -1, -1], 26.54, 0.6300, 0.075),
    t([0, 18, -16, 0, 0, 0, 0, 0, 0, -1, 1], 26.54, 0.6300, 0.074),
];

/// Distance, constant component (ELP12).
pub static DISTANCE_0: [PlanetaryTerm; 0] = [];

/// Longitude, component in t (ELP13).
pub static LONGITUDE_1: [PlanetaryTerm; 0] = [];

/// Latitude, component in t (ELP14).
pub static LATITUDE_1: [PlanetaryTerm; 0] = [];

/// Distance, component in t (ELP15).
pub static DISTANCE_1: [PlanetaryTerm; 0] = [];
