//! Main Problem of the lunar theory (ELP files 1-3).
//!
//! Fourier series over the four Delaunay arguments, no phase; sine form
//! for longitude and latitude, cosine form for distance. Truncated to
//! the dominant terms of the full solution (amplitudes down to ≈ 0.4″ in
//! longitude/latitude and ≈ 1 km in distance); the omitted tail of each
//! series totals a few arcseconds. Longitude and latitude amplitudes in
//! arcseconds, distance amplitudes in kilometers.
//!
//! The distance series carries the theory's constant term of
//! 385000.52899 km as its leading record (all multipliers zero).

use crate::series::MainProblemTerm;

const fn t(delaunay: [i8; 4], amplitude: f64) -> MainProblemTerm {
    MainProblemTerm {
        delaunay,
        amplitude,
    }
}

/// Longitude (ELP1), multipliers (D, l′, l, F), arcseconds.
pub static LONGITUDE: [MainProblemTerm; 59] = [
    t([0, 0, 1, 0], 22639.5864),
    t([2, 0, -1, 0], 4586.4972),
    t([2, 0, 0, 0], 2369.9304),
    t([0, 0, 2, 0], 769.0248),
    t([0, 1, 0, 0], -666.4176),
    t([0, 0, 0, 2], -411.5952),
    t([2, 0, -2, 0], 211.6548),
    t([2, -1, -1, 0], 205.4376),
    t([2, 0, 1, 0], 191.9592),
    t([2, -1, 0, 0], 164.7288),
    t([0, 1, -1, 0], -147.3228),
    t([1, 0, 0, 0], -124.9920),
    t([0, 1, 1, 0], -109.3788),
    t([2, 0, 0, -2], 55.1772),
    t([0, 0, 1, 2], -45.1008),
    t([0, 0, 1, -2], 39.5280),
    t([4, 0, -1, 0], 38.4300),
    t([0, 0, 3, 0], 36.1224),
    t([4, 0, -2, 0], 30.7728),
    t([2, 1, -1, 0], -28.3968),
    t([2, 1, 0, 0], -24.3576),
    t([1, 0, -1, 0], -18.5868),
    t([1, 1, 0, 0], 17.9532),
    t([2, -1, 1, 0], 14.5296),
    t([2, 0, 2, 0], 14.3784),
    t([4, 0, 0, 0], 13.8996),
    t([2, 0, -3, 0], 13.1940),
    t([0, 1, -2, 0], -9.6804),
    t([2, 0, -1, 2], -9.3672),
    t([2, -1, -2, 0], 8.6040),
    t([1, 0, 1, 0], -8.4528),
    t([2, -2, 0, 0], 8.0496),
    t([0, 1, 2, 0], -7.6320),
    t([0, 2, 0, 0], -7.4484),
    t([2, -2, -1, 0], 7.3728),
    t([2, 0, 1, -2], -6.3828),
    t([2, 0, 0, 2], -5.7420),
    t([4, -1, -1, 0], 4.3740),
    t([0, 0, 2, 2], -3.9960),
    t([3, 0, -1, 0], -3.2112),
    t([2, 1, 1, 0], -2.9160),
    t([4, -1, -2, 0], 2.7324),
    t([0, 2, -1, 0], -2.5668),
    t([2, 2, -1, 0], -2.5200),
    t([2, 1, -2, 0], 2.4876),
    t([2, -1, 0, -2], 2.1456),
    t([4, 0, 1, 0], 1.9764),
    t([0, 0, 4, 0], 1.9332),
    t([4, -1, 0, 0], 1.8720),
    t([1, 0, -2, 0], -1.7532),
    t([2, 1, 0, -2], -1.4364),
    t([0, 0, 2, -2], -1.3716),
    t([1, 1, 1, 0], 1.2636),
    t([3, 0, -2, 0], -1.2240),
    t([4, 0, -3, 0], 1.1880),
    t([2, -1, 2, 0], 1.1772),
    t([0, 2, 1, 0], -1.1628),
    t([1, 1, -1, 0], 1.0764),
    t([2, 0, 3, 0], 1.0584),
];

/// Latitude (ELP2), multipliers (D, l′, l, F), arcseconds.
pub static LATITUDE: [MainProblemTerm; 60] = [
    t([0, 0, 0, 1], 18461.2392),
    t([0, 0, 1, 1], 1010.1672),
    t([0, 0, 1, -1], 999.6948),
    t([2, 0, 0, -1], 623.6532),
    t([2, 0, -1, 1], 199.4868),
    t([2, 0, -1, -1], 166.5756),
    t([2, 0, 0, 1], 117.2628),
    t([0, 0, 2, 1], 61.9128),
    t([2, 0, 1, -1], 33.3576),
    t([0, 0, 2, -1], 31.7592),
    t([2, -1, 0, -1], 29.5776),
    t([2, 0, -2, -1], 15.5664),
    t([2, 0, 1, 1], 15.1200),
    t([2, 1, 0, -1], -12.0924),
    t([2, -1, -1, 1], 8.8668),
    t([2, -1, 0, 1], 7.9596),
    t([2, -1, -1, -1], 7.4340),
    t([0, 1, -1, -1], -6.7320),
    t([4, 0, -1, -1], 6.5808),
    t([0, 1, 0, 1], -6.4584),
    t([0, 0, 0, 3], -6.2964),
    t([0, 1, -1, 1], -5.6340),
    t([1, 0, 0, 1], -5.3676),
    t([0, 1, 1, 1], -5.3100),
    t([0, 1, 1, -1], -5.0760),
    t([0, 1, 0, -1], -4.8384),
    t([1, 0, 0, -1], -4.8060),
    t([0, 0, 3, 1], 3.9852),
    t([4, 0, 0, -1], 3.6756),
    t([4, 0, -1, 1], 2.9988),
    t([0, 0, 1, -3], 2.7972),
    t([4, 0, -2, 1], 2.4156),
    t([2, 0, 0, -3], 2.1852),
    t([2, 0, 2, -1], 2.1456),
    t([2, -1, 1, -1], 1.7676),
    t([2, 0, -2, 1], -1.6236),
    t([0, 0, 3, -1], 1.5804),
    t([2, 0, 2, 1], 1.5192),
    t([2, 0, -3, -1], 1.5156),
    t([2, 1, -1, 1], -1.3176),
    t([2, 1, 0, 1], -1.2636),
    t([4, 0, 0, 1], 1.1916),
    t([2, -1, 1, 1], 1.1340),
    t([2, -2, 0, -1], 1.0872),
    t([0, 0, 1, 3], -1.0188),
    t([2, 1, 1, -1], -0.8244),
    t([1, 1, 0, -1], 0.8028),
    t([1, 1, 0, 1], 0.8028),
    t([0, 1, -2, -1], -0.7920),
    t([2, 1, -1, -1], -0.7920),
    t([1, 0, 1, -1], -0.6660),
    t([2, -1, -2, -1], 0.6516),
    t([0, 1, 2, 1], -0.6372),
    t([4, 0, -2, -1], 0.6336),
    t([4, -1, -1, -1], 0.5976),
    t([1, 0, 1, 1], -0.5904),
    t([4, 0, 1, -1], 0.4752),
    t([1, 0, -1, -1], -0.4284),
    t([4, -1, 0, -1], 0.4140),
    t([2, -2, 0, 1], 0.3852),
];

/// Distance (ELP3), multipliers (D, l′, l, F), kilometers.
pub static DISTANCE: [MainProblemTerm; 47] = [
    t([0, 0, 0, 0], 385000.52899),
    t([0, 0, 1, 0], -20905.355),
    t([2, 0, -1, 0], -3699.111),
    t([2, 0, 0, 0], -2955.968),
    t([0, 0, 2, 0], -569.925),
    t([0, 1, 0, 0], 48.888),
    t([0, 0, 0, 2], -3.149),
    t([2, 0, -2, 0], 246.158),
    t([2, -1, -1, 0], -152.138),
    t([2, 0, 1, 0], -170.733),
    t([2, -1, 0, 0], -204.586),
    t([0, 1, -1, 0], -129.620),
    t([1, 0, 0, 0], 108.743),
    t([0, 1, 1, 0], 104.755),
    t([2, 0, 0, -2], 10.321),
    t([0, 0, 1, -2], 79.661),
    t([4, 0, -1, 0], -34.782),
    t([0, 0, 3, 0], -23.210),
    t([4, 0, -2, 0], -21.636),
    t([2, 1, -1, 0], 24.208),
    t([2, 1, 0, 0], 30.824),
    t([1, 0, -1, 0], -8.379),
    t([1, 1, 0, 0], -16.675),
    t([2, -1, 1, 0], -12.831),
    t([2, 0, 2, 0], -10.445),
    t([4, 0, 0, 0], -11.650),
    t([2, 0, -3, 0], 14.403),
    t([0, 1, -2, 0], -7.003),
    t([2, -1, -2, 0], 10.056),
    t([1, 0, 1, 0], 6.322),
    t([2, -2, 0, 0], -9.884),
    t([0, 1, 2, 0], 5.751),
    t([2, -2, -1, 0], -4.950),
    t([2, 0, 1, -2], 4.130),
    t([4, -1, -1, 0], -3.958),
    t([3, 0, -1, 0], 3.258),
    t([2, 1, 1, 0], 2.616),
    t([4, -1, -2, 0], -1.897),
    t([0, 2, -1, 0], -2.117),
    t([2, 2, -1, 0], 2.354),
    t([4, 0, 1, 0], -1.423),
    t([0, 0, 4, 0], -1.117),
    t([4, -1, 0, 0], -1.571),
    t([1, 0, -2, 0], -1.739),
    t([0, 0, 2, -2], -4.421),
    t([0, 2, 1, 0], 1.165),
    t([2, 0, -1, -2], 8.752),
];
