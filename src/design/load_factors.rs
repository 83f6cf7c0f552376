//! Load factors and combinations

use serde::{Deserialize, Serialize};

use crate::fem::LoadCombination;

/// Dead and live load factors of one combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadFactors {
    pub dead: f64,
    pub live: f64,
}

impl LoadFactors {
    pub const fn new(dead: f64, live: f64) -> Self {
        Self { dead, live }
    }
}

/// Eurocode ultimate limit state combinations
pub const EC_COMBINATIONS: [(&str, LoadFactors); 3] = [
    ("ULS_01", LoadFactors::new(1.35, 1.5)),
    ("ULS_02", LoadFactors::new(1.0, 1.5)),
    ("ULS_03", LoadFactors::new(1.35, 0.0)),
];

/// AREMA service load (SLD) and load factor (LFD) groups, keyed by case
/// label: D dead, L live, I impact, CF centrifugal, E earth pressure,
/// B buoyancy, SF stream flow, W wind, WL wind on live load,
/// LF longitudinal, F friction
pub const AREMA_COMBINATIONS: [(&str, &[(&str, f64)]); 5] = [
    (
        "SLD_G1",
        &[("D", 1.0), ("L", 1.0), ("I", 1.0), ("CF", 1.0), ("E", 1.0), ("B", 1.0), ("SF", 1.0)],
    ),
    ("SLD_G2", &[("D", 1.0), ("E", 1.0), ("B", 1.0), ("SF", 1.0), ("W", 1.0)]),
    (
        "SLD_G3",
        &[
            ("D", 1.0),
            ("L", 1.0),
            ("I", 1.0),
            ("CF", 1.0),
            ("E", 1.0),
            ("B", 1.0),
            ("SF", 1.0),
            ("W", 0.5),
            ("WL", 1.0),
            ("LF", 1.0),
            ("F", 1.0),
        ],
    ),
    (
        "LFD_G1",
        &[
            ("D", 1.4),
            ("L", 1.4 * 5.0 / 3.0),
            ("I", 1.4 * 5.0 / 3.0),
            ("CF", 1.4),
            ("E", 1.4),
            ("B", 1.4),
            ("SF", 1.4),
        ],
    ),
    (
        "LFD_G2",
        &[("D", 1.8), ("L", 1.8), ("I", 1.8), ("CF", 1.8), ("E", 1.8), ("B", 1.8), ("SF", 1.8)],
    ),
];

pub fn factor_load(factors: LoadFactors, dead: f64, live: f64) -> f64 {
    factors.dead * dead + factors.live * live
}

/// Governing factored load over the Eurocode combinations
pub fn max_factored_load(dead: f64, live: f64) -> f64 {
    EC_COMBINATIONS
        .iter()
        .map(|(_, factors)| factor_load(*factors, dead, live))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Eurocode combinations as solver combinations over the given case names
pub fn eurocode_combinations(dead_case: &str, live_case: &str) -> Vec<LoadCombination> {
    EC_COMBINATIONS
        .iter()
        .map(|(name, factors)| {
            LoadCombination::new(name)
                .with_case(dead_case, factors.dead)
                .with_case(live_case, factors.live)
        })
        .collect()
}

/// One AREMA group as a solver combination
pub fn arema_combination(name: &str) -> Option<LoadCombination> {
    AREMA_COMBINATIONS
        .iter()
        .find(|(group, _)| group.eq_ignore_ascii_case(name))
        .map(|(group, factors)| {
            factors
                .iter()
                .fold(LoadCombination::new(group), |combo, (case, factor)| combo.with_case(case, *factor))
        })
}

pub fn arema_combinations() -> Vec<LoadCombination> {
    AREMA_COMBINATIONS
        .iter()
        .filter_map(|(group, _)| arema_combination(group))
        .collect()
}
