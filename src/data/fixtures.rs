//! Literal values of the course data set.

use super::SugarCategory::{self, S1, S2, S3, S4, S5};

pub(super) const SAMPLE1_CARBOHYDRATE: [f64; 20] = [
    0.0, 0.5828941, 0.3446297, 0.8746759, 0.7594357,
    0.2882526, 0.5139232, 0.3035117, 0.0900429, 0.0,
    0.2730349, 0.6271103, 0.6465281, 0.2710423, 0.2093983,
    0.8799682, 0.1590199, 0.015354, 0.3267429, 0.560843,
];

pub(super) const SAMPLE2_CARBOHYDRATE: [f64; 20] = [
    0.6345148, 0.7040639, 0.1798345, 0.874227, 0.0,
    0.4785168, 0.4525529, 0.0683345, 0.8617566, 0.4486331,
    0.7137571, 0.5152995, 0.6669823, 0.5733728, 0.7582929,
    0.5227957, 0.0622677, 0.8860243, 0.4320573, 0.1829008,
];

pub(super) const SAMPLE1_SUGAR: [SugarCategory; 20] = [
    S1, S2, S1, S2, S3, S1, S1, S1, S1, S1,
    S1, S1, S4, S3, S2, S1, S2, S1, S1, S5,
];

pub(super) const SAMPLE2_SUGAR: [SugarCategory; 20] = [
    S2, S2, S4, S4, S3, S3, S2, S1, S2, S4,
    S1, S4, S4, S2, S1, S1, S3, S1, S3, S1,
];

pub(super) const PROTEIN: [f64; 20] = [
    10.06, 22.79, 4.14, 9.78, 18.15, 0.68, 5.09, 23.19, 0.14, 4.08,
    5.69, 18.03, 7.11, 27.65, 19.64, 11.94, 20.27, 19.46, 2.56, 20.45,
];

pub(super) const FAT: [f64; 20] = [
    22.812, 29.678, 26.96, 4.1, 2.374, 31.173, 17.137, 33.848, 20.267, 30.879,
    0.98, 30.195, 20.556, 7.032, 30.107, 6.77, 29.617, 2.446, 9.378, 6.266,
];

pub(super) const VITAMIN_B12: [f64; 20] = [
    0.94, 2.7, 0.0, 0.22, 4.08, 1.81, 3.16, 0.0, 1.5, 3.15,
    2.96, 0.0, 3.85, 2.64, 2.3, 0.0, 0.18, 2.33, 0.0, 1.29,
];

pub(super) const MAGNESIUM: [f64; 20] = [
    24.0, 118.0, 73.0, 15.0, 14.0, 105.0, 33.0, 112.0, 21.0, 80.0,
    32.0, 88.0, 114.0, 115.0, 19.0, 74.0, 42.0, 79.0, 33.0, 10.0,
];

/// `Medias_Muestrales_30`: precomputed sample means, stored as given.
pub(super) const SAMPLE_MEANS: [f64; 30] = [
    28.0, 51.6, 89.8, 78.8, 55.0, 64.4, 64.2, 59.4, 45.6, 72.8,
    73.6, 52.4, 36.8, 40.6, 56.8, 44.4, 69.4, 42.6, 82.0, 70.2,
    55.4, 49.4, 50.8, 70.0, 39.4, 48.2, 62.8, 36.4, 53.4, 53.0,
];

/// `Proporciones_Muestrales_30`: precomputed sample proportions in `[0, 1]`.
pub(super) const SAMPLE_PROPORTIONS: [f64; 30] = [
    0.5, 0.7, 0.8, 0.5, 0.4, 0.5, 0.5, 0.8, 0.3, 0.5,
    0.8, 0.5, 0.4, 0.5, 0.7, 0.6, 0.4, 0.3, 0.6, 0.5,
    0.4, 0.5, 0.7, 0.3, 0.5, 0.7, 0.4, 0.4, 0.9, 0.9,
];
