//! Reference-frame transformations for the lunar position.
//!
//! The accumulated series produce spherical coordinates referred to the
//! ELP 2000 frame: the internal mean ecliptic of date and the departure
//! point ♈′₂₀₀₀. This module converts that position to rectangular
//! coordinates and rotates it into the other supported frames:
//!
//! - mean ecliptic and equinox **of date** (longitude-only precession
//!   correction, a side branch that never feeds the chain below),
//! - mean dynamical ecliptic and inertial equinox of **J2000** (Laskar's
//!   p, q reduction of the instantaneous reference plane),
//! - **FK5** equator (mean equator and rotational mean equinox of J2000),
//!   one fixed rotation away from the J2000 ecliptic frame.
//!
//! All rotations are pure functions returning nalgebra matrices; apply
//! them as `rot * xyz`.

use nalgebra::{Matrix3, Vector3};

use crate::constants::{ArcSec, JulianCenturies, RADSEC};
use crate::position::SphericalCoord;

/// Accumulated lunisolar precession between J2000 and the date `t`.
///
/// Adding this to the ecliptic longitude refers the position to the mean
/// ecliptic and equinox of date.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
///
/// Return
/// ------
/// * Accumulated precession in arcseconds.
pub fn accumulated_precession(t: JulianCenturies) -> ArcSec {
    (((-0.00002353 * t + 0.000077) * t + 1.1120) * t + 5029.0966) * t
}

/// Convert a spherical position (arcseconds, arcseconds, kilometers) to
/// rectangular coordinates in kilometers, same frame.
pub fn to_cartesian(position: &SphericalCoord) -> Vector3<f64> {
    let longitude = position.longitude * RADSEC;
    let latitude = position.latitude * RADSEC;

    Vector3::new(
        position.distance * longitude.cos() * latitude.cos(),
        position.distance * longitude.sin() * latitude.cos(),
        position.distance * latitude.sin(),
    )
}

/// Convert a rectangular position in kilometers back to spherical
/// coordinates (arcseconds, arcseconds, kilometers), same frame.
///
/// The longitude comes out in (−648000″, 648000″]; for a degenerate
/// input of zero length, longitude and latitude are NaN.
pub fn to_spherical(position: &Vector3<f64>) -> SphericalCoord {
    let distance = position.norm();

    SphericalCoord {
        longitude: position.y.atan2(position.x) / RADSEC,
        latitude: (position.z / distance).asin() / RADSEC,
        distance,
    }
}

/// Rotation from the ELP 2000 frame to the mean dynamical ecliptic and
/// inertial equinox of J2000.
///
/// The two small parameters p and q are Laskar's series for the motion
/// of the ecliptic pole, truncated to degree five.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
///
/// Return
/// ------
/// * The 3×3 rotation matrix.
pub fn laskar_rotation(t: JulianCenturies) -> Matrix3<f64> {
    let p = ((((0.463486e-14 * t - 0.2507948e-11) * t - 0.5417367e-9) * t + 0.47020439e-6) * t
        + 0.10180391e-4)
        * t;
    let q = ((((-0.320334e-14 * t - 0.1371808e-11) * t + 0.12654170e-8) * t + 0.12372674e-6) * t
        - 0.113469002e-3)
        * t;

    // |p| and |q| stay far below 1 for any epoch the theory covers; the
    // clamp keeps the square root defined for absurd t.
    let w = (1.0 - p * p - q * q).max(0.0).sqrt();

    Matrix3::new(
        1.0 - 2.0 * p * p,
        2.0 * p * q,
        2.0 * p * w,
        2.0 * p * q,
        1.0 - 2.0 * q * q,
        -2.0 * q * w,
        -2.0 * p * w,
        2.0 * q * w,
        1.0 - 2.0 * p * p - 2.0 * q * q,
    )
}

/// Rotation from the mean ecliptic and equinox of J2000 to the FK5
/// equator (mean equator and rotational mean equinox of J2000).
///
/// Constants from the ELP 2000-82B explanatory note, 12 significant
/// digits.
pub fn ecliptic_to_fk5() -> Matrix3<f64> {
    Matrix3::new(
        1.000000000000,
        0.000000437913,
        -0.000000189859,
        -0.000000477299,
        0.917482137607,
        -0.397776981791,
        0.000000000000,
        0.397776981701,
        0.917482137607,
    )
}

#[cfg(test)]
mod ref_frame_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accumulated_precession_vanishes_at_epoch() {
        assert_eq!(accumulated_precession(0.0), 0.0);
    }

    #[test]
    fn test_accumulated_precession_one_century() {
        // 5029.0966 + 1.1120 + 0.000077 - 0.00002353
        assert_relative_eq!(accumulated_precession(1.0), 5030.20865347, epsilon = 1e-6);
    }

    #[test]
    fn test_cartesian_round_trip() {
        let original = SphericalCoord {
            longitude: 503708.0,
            latitude: 18461.0,
            distance: 385000.0,
        };
        let recovered = to_spherical(&to_cartesian(&original));

        assert_relative_eq!(recovered.longitude, original.longitude, max_relative = 1e-9);
        assert_relative_eq!(recovered.latitude, original.latitude, max_relative = 1e-9);
        assert_relative_eq!(recovered.distance, original.distance, max_relative = 1e-12);
    }

    #[test]
    fn test_cartesian_round_trip_negative_latitude() {
        let original = SphericalCoord {
            longitude: -123456.0,
            latitude: -17000.0,
            distance: 402000.0,
        };
        let recovered = to_spherical(&to_cartesian(&original));

        assert_relative_eq!(recovered.longitude, original.longitude, max_relative = 1e-9);
        assert_relative_eq!(recovered.latitude, original.latitude, max_relative = 1e-9);
        assert_relative_eq!(recovered.distance, original.distance, max_relative = 1e-12);
    }

    #[test]
    fn test_laskar_rotation_is_identity_at_epoch() {
        let rot = laskar_rotation(0.0);
        assert_relative_eq!(rot, Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn test_laskar_rotation_is_orthonormal() {
        for &t in &[-10.0, -1.0, 0.5, 10.0] {
            let rot = laskar_rotation(t);
            let product = rot * rot.transpose();
            assert_relative_eq!(product, Matrix3::identity(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fk5_rotation_preserves_norm() {
        let v = Vector3::new(300000.0, -200000.0, 90000.0);
        let rotated = ecliptic_to_fk5() * v;
        assert_relative_eq!(rotated.norm(), v.norm(), max_relative = 1e-9);
    }
}
