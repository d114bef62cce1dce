//! Earth figure perturbations (ELP files 4-9).
//!
//! ζ-series tables, multipliers (ζ, D, l′, l, F). Truncated to the
//! dominant terms, all of which carry the precession argument ζ (the
//! signature of the oblateness perturbation). Every term of the distance
//! component and of the components in t (ELP6-9) falls below the
//! truncation threshold, so those tables are empty; the composer still
//! evaluates them.

use crate::series::ZetaTerm;

const fn t(multipliers: [i8; 5], phase: f64, amplitude: f64, period: f64) -> ZetaTerm {
    ZetaTerm {
        multipliers,
        phase,
        amplitude,
        period,
    }
}

/// Longitude, constant component (ELP4).
pub static LONGITUDE_0: [ZetaTerm; 1] = [t([1, 0, 0, 0, -1], 0.0, 7.0632, 18.613)];

/// Latitude, constant component (ELP5).
pub static LATITUDE_0: [ZetaTerm; 3] = [
    t([1, 0, 0, 0, 0], 180.0, 8.0460, 0.075),
    t([1, 0, 0, -1, 0], 0.0, 0.4572, 8.850),
    t([1, 0, 0, 1, 0], 180.0, 0.4140, 0.038),
];

/// Distance, constant component (ELP6).
pub static DISTANCE_0: [ZetaTerm; 0] = [];

/// Longitude, component in t (ELP7).
pub static LONGITUDE_1: [ZetaTerm; 0] = [];

/// Latitude, component in t (ELP8).
pub static LATITUDE_1: [ZetaTerm; 0] = [];

/// Distance, component in t (ELP9).
pub static DISTANCE_1: [ZetaTerm; 0] = [];
