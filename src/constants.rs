//! # Constants and type definitions for the ELP 2000-82B solution
//!
//! This module centralizes the **conversion factors** and **common type
//! definitions** used throughout the `elp2000` library.
//!
//! ## Overview
//!
//! - Angle conversions (degrees ↔ radians, arcseconds ↔ radians)
//! - Time-scale constants (J2000 epoch, Julian century)
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules: argument generation,
//! series summation, and reference-frame transformations.

// -------------------------------------------------------------------------------------------------
// Conversion factors
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Arcseconds per degree
pub const SECDEG: f64 = 3600.0;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const JD_J2000: f64 = 2_451_545.0;

/// MJD of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

/// Number of days in one Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Time in Julian centuries elapsed since J2000.0 (TT scale, negative before the epoch)
pub type JulianCenturies = f64;
