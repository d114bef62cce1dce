//! Geocentric position of the Moon.
//!
//! The composer accumulates, for one time instant, the Main Problem and
//! every perturbation category of the theory into a spherical position,
//! then adds the mean mean longitude of the Moon (W₁) to turn the
//! perturbation sum into an actual ecliptic longitude.
//!
//! Five entry points are provided, one per output frame:
//!
//! - [`spherical_position`] — spherical coordinates, ELP 2000 frame;
//! - [`spherical_position_of_date`] — spherical coordinates, mean
//!   ecliptic and equinox of date;
//! - [`cartesian_position`] — rectangular coordinates, ELP 2000 frame;
//! - [`cartesian_position_j2000`] — rectangular coordinates, mean
//!   dynamical ecliptic and inertial equinox of J2000;
//! - [`cartesian_position_fk5`] — rectangular coordinates, FK5 equator.
//!
//! Each takes `t`, the time of interest in Julian centuries since
//! J2000.0 (see [`crate::time`]), and is a pure function: all
//! intermediate argument vectors are call-local and the term tables are
//! read-only statics, so calls for different epochs are independent.
//!
//! The accuracy of solution ELP 2000-82B against the JPL numerical
//! ephemerides is ±800″ in longitude, ±100″ in latitude and ±0.1 km in
//! distance over 1900-2000 A.D., degrading outside that span.

use nalgebra::Vector3;

use crate::arguments::{
    delaunay_arguments, elp_arguments, planetary_arguments, precession_argument,
    DELAUNAY_ARGUMENTS, FULL_SERIES_TERMS, LINEAR_SERIES_TERMS, PLANETARY_ARGUMENTS,
};
use crate::constants::{ArcSec, JulianCenturies, Kilometer};
use crate::ref_frame;
use crate::series::{
    main_problem_cos, main_problem_sin, planetary_first, planetary_second, zeta_series,
    PlanetaryTerm, ZetaTerm,
};
use crate::tables::{
    earth_figure, main_problem, moon_figure, planetary1, planetary2, relativistic,
    solar_eccentricity, tidal,
};

/// A point in spherical coordinates: longitude and latitude in
/// arcseconds, radial distance in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoord {
    /// Ecliptic longitude (azimuth), arcseconds.
    pub longitude: ArcSec,
    /// Ecliptic latitude (elevation), arcseconds.
    pub latitude: ArcSec,
    /// Radial distance, kilometers.
    pub distance: Kilometer,
}

/// Longitude/latitude/distance table triple of one perturbation
/// component.
type ZetaTables = (
    &'static [ZetaTerm],
    &'static [ZetaTerm],
    &'static [ZetaTerm],
);
type PlanetaryTables = (
    &'static [PlanetaryTerm],
    &'static [PlanetaryTerm],
    &'static [PlanetaryTerm],
);

/// Accumulate one ζ-series component, scaled by the power of t the
/// theory assigns to it.
fn add_zeta_component(
    position: &mut SphericalCoord,
    zeta: ArcSec,
    delaunay: &[ArcSec; DELAUNAY_ARGUMENTS],
    tables: ZetaTables,
    scale: f64,
) {
    position.longitude += zeta_series(zeta, delaunay, tables.0) * scale;
    position.latitude += zeta_series(zeta, delaunay, tables.1) * scale;
    position.distance += zeta_series(zeta, delaunay, tables.2) * scale;
}

/// Accumulate one planetary component of the first kind.
fn add_planetary1_component(
    position: &mut SphericalCoord,
    planetary: &[ArcSec; PLANETARY_ARGUMENTS],
    delaunay: &[ArcSec; DELAUNAY_ARGUMENTS],
    tables: PlanetaryTables,
    scale: f64,
) {
    position.longitude += planetary_first(planetary, delaunay, tables.0) * scale;
    position.latitude += planetary_first(planetary, delaunay, tables.1) * scale;
    position.distance += planetary_first(planetary, delaunay, tables.2) * scale;
}

/// Accumulate one planetary component of the second kind.
fn add_planetary2_component(
    position: &mut SphericalCoord,
    planetary: &[ArcSec; PLANETARY_ARGUMENTS],
    delaunay: &[ArcSec; DELAUNAY_ARGUMENTS],
    tables: PlanetaryTables,
    scale: f64,
) {
    position.longitude += planetary_second(planetary, delaunay, tables.0) * scale;
    position.latitude += planetary_second(planetary, delaunay, tables.1) * scale;
    position.distance += planetary_second(planetary, delaunay, tables.2) * scale;
}

/// Geocentric position of the Moon in spherical coordinates referred to
/// the ELP 2000 reference frame.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0 (negative before the epoch).
///
/// Return
/// ------
/// * Longitude and latitude in arcseconds, distance in kilometers.
pub fn spherical_position(t: JulianCenturies) -> SphericalCoord {
    // Main Problem, with the fundamental arguments at full precision.
    let delaunay = delaunay_arguments(t, FULL_SERIES_TERMS);
    let mut position = SphericalCoord {
        longitude: main_problem_sin(&delaunay, &main_problem::LONGITUDE),
        latitude: main_problem_sin(&delaunay, &main_problem::LATITUDE),
        distance: main_problem_cos(&delaunay, &main_problem::DISTANCE),
    };

    // Every perturbation series uses the linear truncation of the
    // fundamental arguments.
    let delaunay = delaunay_arguments(t, LINEAR_SERIES_TERMS);
    let planetary = planetary_arguments(t);
    let zeta = precession_argument(t);

    // Earth figure, constant and linear components. The linear component
    // reads its own tables (ELP7-9), not the constant ones.
    add_zeta_component(
        &mut position,
        zeta,
        &delaunay,
        (
            &earth_figure::LONGITUDE_0,
            &earth_figure::LATITUDE_0,
            &earth_figure::DISTANCE_0,
        ),
        1.0,
    );
    add_zeta_component(
        &mut position,
        zeta,
        &delaunay,
        (
            &earth_figure::LONGITUDE_1,
            &earth_figure::LATITUDE_1,
            &earth_figure::DISTANCE_1,
        ),
        t,
    );

    // Planetary perturbations of the first kind, constant and linear.
    add_planetary1_component(
        &mut position,
        &planetary,
        &delaunay,
        (
            &planetary1::LONGITUDE_0,
            &planetary1::LATITUDE_0,
            &planetary1::DISTANCE_0,
        ),
        1.0,
    );
    add_planetary1_component(
        &mut position,
        &planetary,
        &delaunay,
        (
            &planetary1::LONGITUDE_1,
            &planetary1::LATITUDE_1,
            &planetary1::DISTANCE_1,
        ),
        t,
    );

    // Planetary perturbations of the second kind, constant and linear.
    add_planetary2_component(
        &mut position,
        &planetary,
        &delaunay,
        (
            &planetary2::LONGITUDE_0,
            &planetary2::LATITUDE_0,
            &planetary2::DISTANCE_0,
        ),
        1.0,
    );
    add_planetary2_component(
        &mut position,
        &planetary,
        &delaunay,
        (
            &planetary2::LONGITUDE_1,
            &planetary2::LATITUDE_1,
            &planetary2::DISTANCE_1,
        ),
        t,
    );

    // Tidal effects, constant and linear components.
    add_zeta_component(
        &mut position,
        zeta,
        &delaunay,
        (
            &tidal::LONGITUDE_0,
            &tidal::LATITUDE_0,
            &tidal::DISTANCE_0,
        ),
        1.0,
    );
    add_zeta_component(
        &mut position,
        zeta,
        &delaunay,
        (
            &tidal::LONGITUDE_1,
            &tidal::LATITUDE_1,
            &tidal::DISTANCE_1,
        ),
        t,
    );

    // Moon figure perturbations.
    add_zeta_component(
        &mut position,
        zeta,
        &delaunay,
        (
            &moon_figure::LONGITUDE,
            &moon_figure::LATITUDE,
            &moon_figure::DISTANCE,
        ),
        1.0,
    );

    // Relativistic perturbations.
    add_zeta_component(
        &mut position,
        zeta,
        &delaunay,
        (
            &relativistic::LONGITUDE,
            &relativistic::LATITUDE,
            &relativistic::DISTANCE,
        ),
        1.0,
    );

    // Planetary perturbations of the second order (solar eccentricity),
    // quadratic in time.
    add_zeta_component(
        &mut position,
        zeta,
        &delaunay,
        (
            &solar_eccentricity::LONGITUDE_2,
            &solar_eccentricity::LATITUDE_2,
            &solar_eccentricity::DISTANCE_2,
        ),
        t * t,
    );

    // The accumulated longitude is a perturbation sum; adding the mean
    // mean longitude of the Moon makes it an ecliptic longitude.
    let elp = elp_arguments(t, FULL_SERIES_TERMS);
    position.longitude += elp[0];

    position
}

/// Geocentric position of the Moon in spherical coordinates referred to
/// the mean ecliptic and equinox of date.
///
/// Arguments
/// ---------
/// * `t`: Julian centuries since J2000.0.
///
/// Return
/// ------
/// * Longitude and latitude in arcseconds, distance in kilometers.
pub fn spherical_position_of_date(t: JulianCenturies) -> SphericalCoord {
    let mut position = spherical_position(t);
    position.longitude += ref_frame::accumulated_precession(t);

    position
}

/// Geocentric position of the Moon in rectangular coordinates referred
/// to the ELP 2000 reference frame, kilometers.
pub fn cartesian_position(t: JulianCenturies) -> Vector3<f64> {
    ref_frame::to_cartesian(&spherical_position(t))
}

/// Geocentric position of the Moon in rectangular coordinates referred
/// to the mean dynamical ecliptic and inertial equinox of J2000,
/// kilometers.
pub fn cartesian_position_j2000(t: JulianCenturies) -> Vector3<f64> {
    ref_frame::laskar_rotation(t) * cartesian_position(t)
}

/// Geocentric position of the Moon in rectangular coordinates referred
/// to the FK5 equator (mean equator and rotational mean equinox of
/// J2000), kilometers.
pub fn cartesian_position_fk5(t: JulianCenturies) -> Vector3<f64> {
    ref_frame::ecliptic_to_fk5() * cartesian_position_j2000(t)
}
