//! Steel column buckling to EN 1993-1-1 §6.3.1

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

use super::load_factors::max_factored_load;
use super::{DesignError, DesignResult};
use crate::parse::parse_number;

/// Column bending axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl FromStr for Axis {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Axis::X),
            "Y" => Ok(Axis::Y),
            _ => Err(DesignError::InvalidAxis(s.to_string())),
        }
    }
}

/// Buckling curve selecting the imperfection factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucklingCurve {
    A0,
    A,
    #[default]
    B,
    C,
    D,
}

impl BucklingCurve {
    pub fn imperfection_factor(&self) -> f64 {
        match self {
            BucklingCurve::A0 => 0.13,
            BucklingCurve::A => 0.21,
            BucklingCurve::B => 0.34,
            BucklingCurve::C => 0.49,
            BucklingCurve::D => 0.76,
        }
    }
}

impl FromStr for BucklingCurve {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a0" => Ok(BucklingCurve::A0),
            "a" => Ok(BucklingCurve::A),
            "b" => Ok(BucklingCurve::B),
            "c" => Ok(BucklingCurve::C),
            "d" => Ok(BucklingCurve::D),
            _ => Err(DesignError::UnknownBucklingCurve(s.to_string())),
        }
    }
}

/// Euler critical load of a column of height `h` with effective length
/// factor `k`
pub fn euler_buckling_load(h: f64, e: f64, i: f64, k: f64) -> f64 {
    PI.powi(2) * e * i / (k * h).powi(2)
}

pub fn radius_of_gyration(i: f64, a: f64) -> f64 {
    (i / a).sqrt()
}

/// Non-dimensional slenderness. `a_w` is the area (or section modulus)
/// and `pcr_mcr` the matching elastic critical load (or moment).
pub fn slenderness(a_w: f64, fy: f64, pcr_mcr: f64) -> f64 {
    (a_w * fy / pcr_mcr).sqrt()
}

/// Buckling reduction factor, capped at 1.0
pub fn reduction_factor(lambda: f64, curve: BucklingCurve) -> f64 {
    let alpha = curve.imperfection_factor();
    let phi = 0.5 * (1.0 + alpha * (lambda - 0.2) + lambda.powi(2));
    let chi = 1.0 / (phi + (phi.powi(2) - lambda.powi(2)).sqrt());
    chi.min(1.0)
}

/// Column geometry and stiffness
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub h: f64,
    pub e: f64,
    pub a: f64,
    pub ix: f64,
    pub iy: f64,
    pub kx: f64,
    pub ky: f64,
}

impl Column {
    pub fn critical_buckling_load(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => euler_buckling_load(self.h, self.e, self.ix, self.kx),
            Axis::Y => euler_buckling_load(self.h, self.e, self.iy, self.ky),
        }
    }

    pub fn radius_of_gyration(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => radius_of_gyration(self.ix, self.a),
            Axis::Y => radius_of_gyration(self.iy, self.a),
        }
    }
}

/// A steel column with yield strength and partial factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelColumn {
    #[serde(flatten)]
    pub column: Column,
    pub fy: f64,
    pub gamma_m1: f64,
}

impl SteelColumn {
    pub fn new(column: Column, fy: f64) -> Self {
        Self {
            column,
            fy,
            gamma_m1: 1.0,
        }
    }

    pub fn with_gamma_m1(mut self, gamma_m1: f64) -> Self {
        self.gamma_m1 = gamma_m1;
        self
    }

    /// Flexural buckling resistance about the weaker axis
    pub fn factored_compressive_resistance(&self, curve: BucklingCurve) -> f64 {
        let pcr = self
            .column
            .critical_buckling_load(Axis::X)
            .min(self.column.critical_buckling_load(Axis::Y));
        let lambda = slenderness(self.column.a, self.fy, pcr);
        reduction_factor(lambda, curve) * self.column.a * self.fy / self.gamma_m1
    }

    pub fn factored_crushing_load(&self) -> f64 {
        self.column.a * self.fy / self.gamma_m1
    }

    pub fn capacity(&self, curve: BucklingCurve) -> f64 {
        self.factored_compressive_resistance(curve)
            .min(self.factored_crushing_load())
    }
}

/// Demand against capacity for one scheduled column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnCheck {
    pub tag: String,
    pub column: SteelColumn,
    pub factored_load: f64,
    pub capacity: f64,
    pub demand_capacity_ratio: f64,
}

fn column_value(row: usize, record: &[&str], column: usize) -> DesignResult<f64> {
    let text = record
        .get(column)
        .ok_or(DesignError::MissingColumn { row, column })?;
    parse_number(text).ok_or_else(|| DesignError::MalformedColumn {
        row,
        column,
        value: text.trim().to_string(),
    })
}

/// Column schedule record: tag, A, h, Ix, Iy, fy, E, kx, ky, D, L
pub fn record_to_steel_column(row: usize, record: &[&str]) -> DesignResult<SteelColumn> {
    let value = |column| column_value(row, record, column);
    let column = Column {
        a: value(1)?,
        h: value(2)?,
        ix: value(3)?,
        iy: value(4)?,
        e: value(6)?,
        kx: value(7)?,
        ky: value(8)?,
    };
    Ok(SteelColumn::new(column, value(5)?))
}

/// Governing Eurocode factored load of a schedule record
pub fn factored_record_load(row: usize, record: &[&str]) -> DesignResult<f64> {
    let dead = column_value(row, record, 9)?;
    let live = column_value(row, record, 10)?;
    Ok(max_factored_load(dead, live))
}

/// Check every column of a comma-separated schedule. The first row is a
/// header; blank rows are skipped.
pub fn run_all_columns(schedule: &str, curve: BucklingCurve) -> DesignResult<Vec<ColumnCheck>> {
    let mut checks = Vec::new();
    for (index, line) in schedule.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let row = index + 1;
        let record: Vec<&str> = line.split(',').map(str::trim).collect();
        let column = record_to_steel_column(row, &record)?;
        let factored_load = factored_record_load(row, &record)?;
        let capacity = column.capacity(curve);

        checks.push(ColumnCheck {
            tag: record[0].to_string(),
            column,
            factored_load,
            capacity,
            demand_capacity_ratio: factored_load / capacity,
        });
    }
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn column() -> Column {
        Column {
            h: 3000.0,
            e: 200e3,
            a: 10000.0,
            ix: 2e8,
            iy: 5e7,
            kx: 1.0,
            ky: 1.0,
        }
    }

    #[test]
    fn test_euler_buckling_load() {
        assert_relative_eq!(euler_buckling_load(1.0, 1.0, 1.0, 1.0), PI * PI);
        assert_relative_eq!(
            column().critical_buckling_load(Axis::Y),
            PI * PI * 200e3 * 5e7 / 9e6,
            max_relative = 1e-12
        );
        assert!(column().critical_buckling_load(Axis::X) > column().critical_buckling_load(Axis::Y));
    }

    #[test]
    fn test_axis_and_curve_parsing() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("Z".parse::<Axis>(), Err(DesignError::InvalidAxis("Z".to_string())));
        assert_eq!("A0".parse::<BucklingCurve>().unwrap(), BucklingCurve::A0);
        assert!("e".parse::<BucklingCurve>().is_err());
        assert_eq!(BucklingCurve::default().imperfection_factor(), 0.34);
    }

    #[test]
    fn test_reduction_factor() {
        // stocky columns are not reduced
        assert_eq!(reduction_factor(0.0, BucklingCurve::B), 1.0);
        assert_eq!(reduction_factor(0.2, BucklingCurve::D), 1.0);
        // EN 1993-1-1 table value for curve b at slenderness 1.0
        assert_relative_eq!(reduction_factor(1.0, BucklingCurve::B), 0.5970, epsilon = 1e-3);
        assert!(reduction_factor(1.0, BucklingCurve::D) < reduction_factor(1.0, BucklingCurve::A0));
    }

    #[test]
    fn test_steel_column_resistance() {
        let steel = SteelColumn::new(column(), 355.0);
        assert_relative_eq!(steel.factored_crushing_load(), 3.55e6);
        let resistance = steel.factored_compressive_resistance(BucklingCurve::B);
        assert!(resistance < steel.factored_crushing_load());
        assert_eq!(steel.capacity(BucklingCurve::B), resistance);
        assert_relative_eq!(
            steel.with_gamma_m1(1.1).factored_crushing_load(),
            3.55e6 / 1.1,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_run_all_columns() {
        let schedule = "Tag, A, h, Ix, Iy, fy, E, kx, ky, D, L\n\
                        C1, 10000, 3000, 2e8, 5e7, 355, 200000, 1.0, 1.0, 1000000, 500000\n\
                        \n\
                        C2, 10000, 3000, 2e8, 5e7, 355, 200000, 1.0, 1.0, 100, 0\n";
        let checks = run_all_columns(schedule, BucklingCurve::B).unwrap();
        assert_eq!(checks.len(), 2);
        assert_eq!(checks[0].tag, "C1");
        assert_relative_eq!(checks[0].factored_load, 1.35e6 + 0.75e6);
        assert_relative_eq!(
            checks[0].demand_capacity_ratio,
            checks[0].factored_load / checks[0].capacity
        );
        assert_relative_eq!(checks[1].factored_load, 135.0);
    }

    #[test]
    fn test_malformed_schedule() {
        let schedule = "Tag, A\nC1, ten";
        assert_eq!(
            run_all_columns(schedule, BucklingCurve::B),
            Err(DesignError::MalformedColumn {
                row: 2,
                column: 1,
                value: "ten".to_string()
            })
        );
        assert_eq!(
            run_all_columns("Tag\nC1, 1", BucklingCurve::B),
            Err(DesignError::MissingColumn { row: 2, column: 2 })
        );
    }
}
