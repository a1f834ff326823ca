//! ITS-90 coefficient tables for the Type E thermocouple.
//!
//! Both lookups are the piecewise polynomial approximations published by
//! NIST. The direct table gives thermoelectric voltage in millivolts from
//! temperature in Celsius; the inverse table gives temperature from
//! voltage. Each table is split into two sub-ranges meeting at 0 degrees /
//! 0 mV, with one coefficient set per sub-range.

/// Smallest signal the inverse lookup accepts, millivolts.
pub const MV_MIN: f64 = -8.825;
/// Largest signal the inverse lookup accepts, millivolts.
pub const MV_MAX: f64 = 76.373;

/// Lowest temperature the direct lookup accepts, Celsius.
pub const C_MIN: f64 = -270.0;
/// Highest temperature the direct lookup accepts, Celsius.
pub const C_MAX: f64 = 1000.0;

/// Fahrenheit bounds, derived once from the Celsius bounds.
pub const F_MIN: f64 = crate::units::celsius_to_fahrenheit(C_MIN);
pub const F_MAX: f64 = crate::units::celsius_to_fahrenheit(C_MAX);

/// mV brackets (min, max) for the inverse lookup sub-ranges.
pub const RANGE_INV: [(f64, f64); 2] = [(-8.825, 0.000), (0.000, 76.373)];

/// Celsius brackets (min, max) for the direct lookup sub-ranges.
pub const RANGE_DIR: [(f64, f64); 2] = [(-270.0, 0.0), (0.0, 1000.0)];

/// Inverse lookup coefficients (given mV, find C), one row per sub-range.
pub const COEFF_INV: [[f64; 10]; 2] = [
    // -8.825 mV .. 0.000 mV
    [
        0.0000000e0,
        1.6977288e1,
        -4.3514970e-1,
        -1.5859697e-1,
        -9.2502871e-2,
        -2.6084314e-2,
        -4.1360199e-3,
        -3.4034030e-4,
        -1.1564890e-5,
        0.0000000e0,
    ],
    // 0.000 mV .. 76.373 mV
    [
        0.0000000e0,
        1.7057035e1,
        -2.3301759e-1,
        6.5435585e-3,
        -7.3562749e-5,
        -1.7896001e-6,
        8.4036165e-8,
        -1.3735879e-9,
        1.0629823e-11,
        -3.2447087e-14,
    ],
];

/// Direct lookup coefficients (given C, find mV) for -270 C .. 0 C.
pub const COEFF_DIR_NEG: [f64; 14] = [
    0.000000000000e0,
    0.586655087080e-1,
    0.454109771240e-4,
    -0.779980486860e-6,
    -0.258001608430e-7,
    -0.594525830570e-9,
    -0.932140586670e-11,
    -0.102876055340e-12,
    -0.803701236210e-15,
    -0.439794973910e-17,
    -0.164147763550e-19,
    -0.396736195160e-22,
    -0.558273287210e-25,
    -0.346578420130e-28,
];

/// Direct lookup coefficients for 0 C .. 1000 C.
///
/// First ten terms of the NIST series; the trailing c10 term is not
/// carried, so direct-lookup accuracy falls off above roughly 300 C.
pub const COEFF_DIR_POS: [f64; 10] = [
    0.000000000000e0,
    0.586655087100e-1,
    0.450322755820e-4,
    0.289084072120e-7,
    -0.330568966520e-9,
    0.650244032700e-12,
    -0.191974955040e-15,
    -0.125366004970e-17,
    0.214892175690e-20,
    -0.143880417820e-23,
];
