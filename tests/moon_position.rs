use approx::assert_relative_eq;

use elp2000::arguments::{
    delaunay_arguments, elp_arguments, planetary_arguments, precession_argument,
    FULL_SERIES_TERMS, LINEAR_SERIES_TERMS,
};
use elp2000::constants::{ArcSec, RADEG, RADSEC, SECDEG};
use elp2000::series::{MainProblemTerm, PlanetaryTerm, ZetaTerm};
use elp2000::tables::{
    earth_figure, main_problem, moon_figure, planetary1, planetary2, relativistic,
    solar_eccentricity, tidal,
};
use elp2000::{
    cartesian_position, cartesian_position_fk5, cartesian_position_j2000, ref_frame,
    spherical_position, spherical_position_of_date,
};

/// Straightforward re-evaluation of a Main Problem series, written
/// independently of the production kernels.
fn naive_main_sum(delaunay: &[ArcSec; 4], table: &[MainProblemTerm], cosine: bool) -> f64 {
    let mut acc = 0.0;
    for term in table {
        let mut arg = 0.0;
        for k in 0..4 {
            arg += f64::from(term.delaunay[k]) * delaunay[k];
        }
        let arg = arg * RADSEC;
        acc += term.amplitude * if cosine { arg.cos() } else { arg.sin() };
    }
    acc
}

fn naive_zeta_sum(zeta: ArcSec, delaunay: &[ArcSec; 4], table: &[ZetaTerm]) -> f64 {
    let mut acc = 0.0;
    for term in table {
        let mut arg = f64::from(term.multipliers[0]) * zeta;
        for k in 0..4 {
            arg += f64::from(term.multipliers[k + 1]) * delaunay[k];
        }
        acc += term.amplitude * (arg * RADSEC + term.phase * RADEG).sin();
    }
    acc
}

fn naive_planetary1_sum(
    planetary: &[ArcSec; 8],
    delaunay: &[ArcSec; 4],
    table: &[PlanetaryTerm],
) -> f64 {
    let mut acc = 0.0;
    for term in table {
        let mut arg = 0.0;
        for k in 0..8 {
            arg += f64::from(term.multipliers[k]) * planetary[k];
        }
        arg += f64::from(term.multipliers[8]) * delaunay[0];
        arg += f64::from(term.multipliers[9]) * delaunay[2];
        arg += f64::from(term.multipliers[10]) * delaunay[3];
        acc += term.amplitude * (arg * RADSEC + term.phase * RADEG).sin();
    }
    acc
}

fn naive_planetary2_sum(
    planetary: &[ArcSec; 8],
    delaunay: &[ArcSec; 4],
    table: &[PlanetaryTerm],
) -> f64 {
    let mut acc = 0.0;
    for term in table {
        let mut arg = 0.0;
        for k in 0..7 {
            arg += f64::from(term.multipliers[k]) * planetary[k];
        }
        for k in 0..4 {
            arg += f64::from(term.multipliers[7 + k]) * delaunay[k];
        }
        acc += term.amplitude * (arg * RADSEC + term.phase * RADEG).sin();
    }
    acc
}

/// Independent longitude assembly following the published accumulation
/// sequence, used as an oracle against the production composer.
fn naive_longitude(t: f64) -> ArcSec {
    let full = delaunay_arguments(t, FULL_SERIES_TERMS);
    let mut longitude = naive_main_sum(&full, &main_problem::LONGITUDE, false);

    let delaunay = delaunay_arguments(t, LINEAR_SERIES_TERMS);
    let planetary = planetary_arguments(t);
    let zeta = precession_argument(t);

    longitude += naive_zeta_sum(zeta, &delaunay, &earth_figure::LONGITUDE_0);
    longitude += naive_zeta_sum(zeta, &delaunay, &earth_figure::LONGITUDE_1) * t;
    longitude += naive_planetary1_sum(&planetary, &delaunay, &planetary1::LONGITUDE_0);
    longitude += naive_planetary1_sum(&planetary, &delaunay, &planetary1::LONGITUDE_1) * t;
    longitude += naive_planetary2_sum(&planetary, &delaunay, &planetary2::LONGITUDE_0);
    longitude += naive_planetary2_sum(&planetary, &delaunay, &planetary2::LONGITUDE_1) * t;
    longitude += naive_zeta_sum(zeta, &delaunay, &tidal::LONGITUDE_0);
    longitude += naive_zeta_sum(zeta, &delaunay, &tidal::LONGITUDE_1) * t;
    longitude += naive_zeta_sum(zeta, &delaunay, &moon_figure::LONGITUDE);
    longitude += naive_zeta_sum(zeta, &delaunay, &relativistic::LONGITUDE);
    longitude += naive_zeta_sum(zeta, &delaunay, &solar_eccentricity::LONGITUDE_2) * t * t;
    longitude += elp_arguments(t, FULL_SERIES_TERMS)[0];

    longitude
}

#[test]
fn test_epoch_position_in_known_ranges() {
    // Geocentric Moon at J2000 (JD 2451545.0): longitude ≈ 223.3°,
    // latitude ≈ 5.18°, distance ≈ 402 400 km.
    let position = spherical_position(0.0);

    let longitude_deg = position.longitude / SECDEG;
    let latitude_deg = position.latitude / SECDEG;
    assert!(
        (longitude_deg - 223.32).abs() < 0.25,
        "longitude {longitude_deg} deg"
    );
    assert!(
        (latitude_deg - 5.175).abs() < 0.05,
        "latitude {latitude_deg} deg"
    );
    assert!(
        position.distance > 401_000.0 && position.distance < 404_000.0,
        "distance {} km",
        position.distance
    );
}

#[test]
fn test_positions_stay_physical_across_a_century() {
    for k in -10..=10 {
        let t = f64::from(k) * 0.1;
        let position = spherical_position(t);

        // Geocentric distance between perigee and apogee extremes.
        assert!(
            position.distance > 356_000.0 && position.distance < 407_000.0,
            "distance {} km at t = {t}",
            position.distance
        );
        // Latitude bounded by the orbit inclination plus perturbations.
        assert!(
            position.latitude.abs() < 5.6 * SECDEG,
            "latitude {} arcsec at t = {t}",
            position.latitude
        );
    }
}

#[test]
fn test_composer_matches_naive_reassembly() {
    for &t in &[-1.2, -0.477905544147844, 0.0, 0.25, 1.0] {
        let position = spherical_position(t);
        assert_relative_eq!(position.longitude, naive_longitude(t), epsilon = 1e-6);
    }
}

#[test]
fn test_cartesian_agrees_with_spherical() {
    let t = 0.0619;
    let spherical = spherical_position(t);
    let recovered = ref_frame::to_spherical(&cartesian_position(t));

    // The composed longitude sits outside the principal value range;
    // compare modulo a full turn.
    let turn = 1_296_000.0;
    let delta = (recovered.longitude - spherical.longitude).rem_euclid(turn);
    assert!(delta < 1e-6 || turn - delta < 1e-6, "delta {delta} arcsec");
    assert_relative_eq!(recovered.latitude, spherical.latitude, epsilon = 1e-6);
    assert_relative_eq!(recovered.distance, spherical.distance, max_relative = 1e-12);
}

#[test]
fn test_frame_chain_preserves_distance() {
    for &t in &[-0.5, 0.0, 0.7] {
        let distance = spherical_position(t).distance;
        assert_relative_eq!(cartesian_position(t).norm(), distance, max_relative = 1e-12);
        assert_relative_eq!(
            cartesian_position_j2000(t).norm(),
            distance,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            cartesian_position_fk5(t).norm(),
            distance,
            max_relative = 1e-6
        );
    }
}

#[test]
fn test_j2000_frame_reduces_to_elp_frame_at_epoch() {
    // At t = 0 the Laskar rotation is the identity: both rectangular
    // frames coincide.
    let elp = cartesian_position(0.0);
    let j2000 = cartesian_position_j2000(0.0);
    assert_relative_eq!(elp, j2000, epsilon = 1e-9);
}

#[test]
fn test_of_date_branch_does_not_feed_the_fk5_chain() {
    let t = 0.42;
    let of_date = spherical_position_of_date(t);
    let base = spherical_position(t);
    let fk5 = cartesian_position_fk5(t);

    // The FK5 chain starts from the non-precessed position: rebuilding it
    // from the of-date longitude would land tens of arcminutes away.
    let from_base = ref_frame::ecliptic_to_fk5()
        * (ref_frame::laskar_rotation(t) * ref_frame::to_cartesian(&base));
    assert_relative_eq!(fk5, from_base, epsilon = 1e-9);

    let from_of_date = ref_frame::ecliptic_to_fk5()
        * (ref_frame::laskar_rotation(t) * ref_frame::to_cartesian(&of_date));
    assert!((fk5 - from_of_date).norm() > 1_000.0);
}
