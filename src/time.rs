//! Time-scale helpers for the ELP 2000-82B solution.
//!
//! Every public function of this crate takes the time parameter `t`, the
//! number of Julian centuries elapsed since J2000.0 in the TT scale:
//!
//! ```text
//! t = (JD - 2451545.0) / 36525
//! ```
//!
//! `t` is negative for dates before 1.5 January 2000 and positive after.
//! This module converts the usual epoch representations to `t`.

use hifitime::Epoch;

use crate::constants::{JulianCenturies, DAYS_PER_CENTURY, JDTOMJD, JD_J2000, T2000};

/// Convert a [`hifitime::Epoch`] to Julian centuries TT since J2000.0.
///
/// Arguments
/// ---------
/// * `epoch`: the epoch of interest, in any time scale hifitime supports.
///
/// Return
/// ------
/// * Julian centuries elapsed since J2000.0 in the TT scale.
pub fn julian_centuries(epoch: Epoch) -> JulianCenturies {
    (epoch.to_mjd_tt_days() - T2000) / DAYS_PER_CENTURY
}

/// Convert a Julian Date (TT scale) to Julian centuries since J2000.0.
///
/// Arguments
/// ---------
/// * `jd`: Julian Date in the TT scale.
///
/// Return
/// ------
/// * Julian centuries elapsed since J2000.0.
pub fn julian_centuries_from_jd(jd: f64) -> JulianCenturies {
    (jd - JD_J2000) / DAYS_PER_CENTURY
}

/// Convert a Modified Julian Date (TT scale) to Julian centuries since J2000.0.
///
/// Arguments
/// ---------
/// * `mjd`: Modified Julian Date in the TT scale.
///
/// Return
/// ------
/// * Julian centuries elapsed since J2000.0.
pub fn julian_centuries_from_mjd(mjd: f64) -> JulianCenturies {
    julian_centuries_from_jd(mjd + JDTOMJD)
}
