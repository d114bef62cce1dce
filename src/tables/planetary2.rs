//! Planetary perturbations of the second kind (ELP files 16-21).
//!
//! Planetary-series tables, multipliers (Mercury, Venus, Earth, Mars,
//! Jupiter, Saturn, Uranus, D, l′, l, F) — Neptune does not participate
//! in this kind. Every term of the category falls below the truncation
//! threshold of the shipped data set, so all six tables are empty; the
//! composer still wires and evaluates them, and refreshing the data is a
//! pure data change.

use crate::series::PlanetaryTerm;

/// Longitude, constant component (ELP16).
pub static LONGITUDE_0: [PlanetaryTerm; 0] = [];

/// Latitude, constant component (ELP17).
pub static LATITUDE_0: [PlanetaryTerm; 0] = [];

/// Distance, constant component (ELP18).
pub static DISTANCE_0: [PlanetaryTerm; 0] = [];

/// Longitude, component in t (ELP19).
pub static LONGITUDE_1: [PlanetaryTerm; 0] = [];

/// Latitude, component in t (ELP20).
pub static LATITUDE_1: [PlanetaryTerm; 0] = [];

/// Distance, component in t (ELP21).
pub static DISTANCE_1: [PlanetaryTerm; 0] = [];
