//! EN 1998-1 horizontal elastic response spectrum and single-degree-of-
//! freedom demand/capacity curves

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

use super::{DesignError, DesignResult};

/// Longest period covered by the spectrum, seconds
pub const MAX_PERIOD: f64 = 4.0;

/// Period increment of the demand curve, seconds
pub const PERIOD_STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpectrumType {
    #[default]
    Type1,
    Type2,
}

impl TryFrom<u8> for SpectrumType {
    type Error = DesignError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SpectrumType::Type1),
            2 => Ok(SpectrumType::Type2),
            other => Err(DesignError::UnknownSpectrumType(other)),
        }
    }
}

/// Ground type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SoilType {
    A,
    B,
    #[default]
    C,
    D,
    E,
}

impl FromStr for SoilType {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(SoilType::A),
            "B" => Ok(SoilType::B),
            "C" => Ok(SoilType::C),
            "D" => Ok(SoilType::D),
            "E" => Ok(SoilType::E),
            _ => Err(DesignError::UnknownSoilType(s.to_string())),
        }
    }
}

/// Soil factor and corner periods of a spectrum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectrumParameters {
    pub s: f64,
    pub tb: f64,
    pub tc: f64,
    pub td: f64,
}

impl SpectrumParameters {
    pub fn new(spectrum_type: SpectrumType, soil_type: SoilType) -> Self {
        let (s, tb, tc, td) = match (spectrum_type, soil_type) {
            (SpectrumType::Type1, SoilType::A) => (1.0, 0.15, 0.4, 2.0),
            (SpectrumType::Type1, SoilType::B) => (1.2, 0.15, 0.5, 2.0),
            (SpectrumType::Type1, SoilType::C) => (1.15, 0.2, 0.6, 2.0),
            (SpectrumType::Type1, SoilType::D) => (1.35, 0.2, 0.8, 2.0),
            (SpectrumType::Type1, SoilType::E) => (1.4, 0.15, 0.5, 2.0),
            (SpectrumType::Type2, SoilType::A) => (1.0, 0.05, 0.25, 1.2),
            (SpectrumType::Type2, SoilType::B) => (1.35, 0.05, 0.25, 1.2),
            (SpectrumType::Type2, SoilType::C) => (1.5, 0.1, 0.25, 1.2),
            (SpectrumType::Type2, SoilType::D) => (1.8, 0.1, 0.3, 1.2),
            (SpectrumType::Type2, SoilType::E) => (1.6, 0.05, 0.25, 1.2),
        };
        Self { s, tb, tc, td }
    }
}

/// Damping correction factor, never below 0.55. `damping` in percent.
pub fn damping_correction(damping: f64) -> f64 {
    (10.0 / (5.0 + damping)).sqrt().max(0.55)
}

/// Elastic response spectrum for a design ground acceleration `ag`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResponseSpectrum {
    pub ag: f64,
    #[serde(default)]
    pub spectrum_type: SpectrumType,
    #[serde(default)]
    pub soil_type: SoilType,
    /// Viscous damping, percent
    #[serde(default = "default_damping")]
    pub damping: f64,
}

fn default_damping() -> f64 {
    5.0
}

impl ResponseSpectrum {
    pub fn new(ag: f64) -> Self {
        Self {
            ag,
            spectrum_type: SpectrumType::default(),
            soil_type: SoilType::default(),
            damping: default_damping(),
        }
    }

    pub fn with_spectrum_type(mut self, spectrum_type: SpectrumType) -> Self {
        self.spectrum_type = spectrum_type;
        self
    }

    pub fn with_soil_type(mut self, soil_type: SoilType) -> Self {
        self.soil_type = soil_type;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn parameters(&self) -> SpectrumParameters {
        SpectrumParameters::new(self.spectrum_type, self.soil_type)
    }

    /// Spectral acceleration Se(T)
    pub fn acceleration(&self, period: f64) -> DesignResult<f64> {
        let SpectrumParameters { s, tb, tc, td } = self.parameters();
        let eta = damping_correction(self.damping);
        let plateau = self.ag * s * 2.5 * eta;

        if (0.0..=tb).contains(&period) {
            Ok(self.ag * s * (1.0 + period / tb * (2.5 * eta - 1.0)))
        } else if period > tb && period <= tc {
            Ok(plateau)
        } else if period > tc && period <= td {
            Ok(plateau * tc / period)
        } else if period > td && period <= MAX_PERIOD {
            Ok(plateau * tc * td / period.powi(2))
        } else {
            Err(DesignError::PeriodOutOfRange(period))
        }
    }

    /// Spectral displacement Sd(T)
    pub fn displacement(&self, period: f64) -> DesignResult<f64> {
        Ok(self.acceleration(period)? * (period / (2.0 * PI)).powi(2))
    }
}

/// A point on a force-displacement curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub displacement: f64,
    pub force: f64,
}

/// Demand curve of a single-degree-of-freedom system of `mass`, sampled
/// every [`PERIOD_STEP`] from 0 s up to [`MAX_PERIOD`]
pub fn system_demand(mass: f64, spectrum: &ResponseSpectrum) -> DesignResult<Vec<CurvePoint>> {
    let steps = (MAX_PERIOD / PERIOD_STEP).round() as usize;
    (0..steps)
        .map(|step| {
            let period = step as f64 * PERIOD_STEP;
            Ok(CurvePoint {
                displacement: spectrum.displacement(period)?,
                force: mass * spectrum.acceleration(period)?,
            })
        })
        .collect()
}

/// Lateral force-displacement behaviour of the system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StiffnessModel {
    Linear { k1: f64 },
    /// Stiffness `k1` up to force `f1_max`, `k2` beyond
    MultiLinear { k1: f64, k2: f64, f1_max: f64 },
}

impl StiffnessModel {
    pub fn force_at(&self, displacement: f64) -> f64 {
        match *self {
            StiffnessModel::Linear { k1 } => k1 * displacement,
            StiffnessModel::MultiLinear { k1, k2, f1_max } => {
                let elastic = k1 * displacement;
                if elastic <= f1_max {
                    elastic
                } else {
                    f1_max + k2 * (displacement - f1_max / k1)
                }
            }
        }
    }
}

/// Capacity curve evaluated at the given displacements
pub fn system_capacity(model: StiffnessModel, displacements: &[f64]) -> Vec<CurvePoint> {
    displacements
        .iter()
        .map(|&displacement| CurvePoint {
            displacement,
            force: model.force_at(displacement),
        })
        .collect()
}

/// Where demand meets capacity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub displacement: f64,
    pub force: f64,
    /// Secant period at the performance point
    pub period: f64,
    pub acceleration: f64,
}

/// First crossing of the demand curve by the capacity curve.
///
/// Both curves are sampled at the demand displacements and interpolated
/// linearly between samples.
pub fn performance_point(
    mass: f64,
    spectrum: &ResponseSpectrum,
    model: StiffnessModel,
) -> DesignResult<PerformancePoint> {
    let demand = system_demand(mass, spectrum)?;
    let displacements: Vec<f64> = demand.iter().map(|p| p.displacement).collect();
    let capacity = system_capacity(model, &displacements);

    let gaps: Vec<f64> = demand
        .iter()
        .zip(&capacity)
        .map(|(d, c)| d.force - c.force)
        .collect();

    let crossing = gaps
        .windows(2)
        .position(|pair| pair[0] > 0.0 && pair[1] <= 0.0)
        .ok_or(DesignError::NoIntersection)?;

    let (g0, g1) = (gaps[crossing], gaps[crossing + 1]);
    let (p0, p1) = (demand[crossing], demand[crossing + 1]);
    let t = g0 / (g0 - g1);
    let displacement = p0.displacement + t * (p1.displacement - p0.displacement);
    let force = p0.force + t * (p1.force - p0.force);

    if displacement <= 0.0 || force <= 0.0 {
        return Err(DesignError::NoIntersection);
    }

    Ok(PerformancePoint {
        displacement,
        force,
        period: 2.0 * PI * (mass / (force / displacement)).sqrt(),
        acceleration: force / mass,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spectrum() -> ResponseSpectrum {
        ResponseSpectrum::new(0.2 * 9.81)
    }

    #[test]
    fn test_parameters_and_parsing() {
        let p = SpectrumParameters::new(SpectrumType::Type2, SoilType::D);
        assert_eq!(p, SpectrumParameters { s: 1.8, tb: 0.1, tc: 0.3, td: 1.2 });
        assert_eq!(SpectrumType::try_from(2).unwrap(), SpectrumType::Type2);
        assert_eq!(SpectrumType::try_from(3), Err(DesignError::UnknownSpectrumType(3)));
        assert_eq!("e".parse::<SoilType>().unwrap(), SoilType::E);
        assert!("F".parse::<SoilType>().is_err());
    }

    #[test]
    fn test_spectrum_settings() {
        let s = ResponseSpectrum::new(1.0)
            .with_spectrum_type(SpectrumType::Type2)
            .with_soil_type(SoilType::A)
            .with_damping(10.0);
        assert_eq!(s.parameters(), SpectrumParameters { s: 1.0, tb: 0.05, tc: 0.25, td: 1.2 });
        // plateau scaled by eta = sqrt(10 / 15)
        assert_relative_eq!(s.acceleration(0.2).unwrap(), 2.5 * (10.0f64 / 15.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_damping_correction() {
        assert_relative_eq!(damping_correction(5.0), 1.0);
        assert_relative_eq!(damping_correction(100.0), 0.55);
    }

    #[test]
    fn test_acceleration_branches() {
        let s = spectrum();
        let ag_s = 1.962 * 1.15;
        assert_relative_eq!(s.acceleration(0.0).unwrap(), ag_s, epsilon = 1e-9);
        assert_relative_eq!(s.acceleration(0.1).unwrap(), ag_s * 1.75, epsilon = 1e-9);
        assert_relative_eq!(s.acceleration(0.4).unwrap(), ag_s * 2.5, epsilon = 1e-9);
        assert_relative_eq!(s.acceleration(1.0).unwrap(), ag_s * 2.5 * 0.6, epsilon = 1e-9);
        assert_relative_eq!(s.acceleration(3.0).unwrap(), ag_s * 2.5 * 1.2 / 9.0, epsilon = 1e-9);
        assert_eq!(s.acceleration(4.5), Err(DesignError::PeriodOutOfRange(4.5)));
        assert!(s.acceleration(-0.1).is_err());
    }

    #[test]
    fn test_displacement() {
        let s = spectrum();
        let t = PI / 2.0;
        assert_relative_eq!(
            s.displacement(t).unwrap(),
            s.acceleration(t).unwrap() / 16.0,
            epsilon = 1e-12
        );
        assert_eq!(s.displacement(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_system_demand() {
        let demand = system_demand(1000.0, &spectrum()).unwrap();
        assert_eq!(demand.len(), 400);
        assert_eq!(demand[0].displacement, 0.0);
        assert_relative_eq!(demand[0].force, 1000.0 * 1.962 * 1.15, epsilon = 1e-9);
    }

    #[test]
    fn test_multi_linear_capacity() {
        let model = StiffnessModel::MultiLinear { k1: 100.0, k2: 10.0, f1_max: 50.0 };
        let curve = system_capacity(model, &[0.0, 0.25, 0.5, 1.5]);
        let forces: Vec<f64> = curve.iter().map(|p| p.force).collect();
        assert_eq!(forces, vec![0.0, 25.0, 50.0, 60.0]);
    }

    #[test]
    fn test_performance_point_linear() {
        let (mass, k) = (4000.0, 350000.0);
        let point = performance_point(mass, &spectrum(), StiffnessModel::Linear { k1: k }).unwrap();

        // a linear system responds at its natural period
        let natural = 2.0 * PI * (mass / k).sqrt();
        assert_relative_eq!(point.period, natural, epsilon = 1e-2);
        assert_relative_eq!(point.force / point.displacement, k, max_relative = 1e-6);
        let expected = spectrum().acceleration(natural).unwrap();
        assert_relative_eq!(point.acceleration, expected, max_relative = 1e-2);
    }

    #[test]
    fn test_no_intersection() {
        let spectrum = ResponseSpectrum::new(0.0);
        assert_eq!(
            performance_point(1000.0, &spectrum, StiffnessModel::Linear { k1: 1.0 }),
            Err(DesignError::NoIntersection)
        );
    }
}
