//! Geocentric position of the Moon from the semi-analytical lunar
//! theory ELP, version ELP 2000-82B (Chapront-Touzé, Chapront, Francou).
//!
//! ```
//! use elp2000::{spherical_position, time};
//!
//! // 2000-01-01 12:00 TT
//! let t = time::julian_centuries_from_jd(2451545.0);
//! let moon = spherical_position(t);
//! assert!(moon.distance > 356_000.0 && moon.distance < 407_000.0);
//! ```

pub mod arguments;
pub mod constants;
pub mod position;
pub mod ref_frame;
pub mod series;
pub mod tables;
pub mod time;

pub use position::{
    cartesian_position, cartesian_position_fk5, cartesian_position_j2000, spherical_position,
    spherical_position_of_date, SphericalCoord,
};
