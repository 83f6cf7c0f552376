//! Closed-form beam formulas

use crate::beam::BeamDescription;
use crate::error::ModelResult;
use crate::parse::{BeamAttributes, DistributedLoadSpec, LoadSpec, RestraintCode, SupportMap};

/// Load case given to generated uniform loads
pub const UNIFORM_CASE: &str = "Case 1";

/// Shear modulus of a linear elastic isotropic material
pub fn shear_modulus(nu: f64, e: f64) -> f64 {
    e / (2.0 * (1.0 + nu))
}

/// Reactions `(R1, R2)` of a simply supported beam with a cantilever
/// overhang under a uniform load `w`.
///
/// `b` is the backspan and `a` the cantilever length; R1 acts at the
/// cantilever support and R2 at the backspan end.
pub fn beam_reactions_ss_cant(w: f64, b: f64, a: f64) -> (f64, f64) {
    let total = a + b;
    let r1 = w * total.powi(2) / (2.0 * b);
    let r2 = w * total - r1;
    (r1, r2)
}

/// Backspan and cantilever lengths `(b, a)` for a beam supported at 0.0 and
/// at `cant_support_loc`
pub fn spans(beam_length: f64, cant_support_loc: f64) -> (f64, f64) {
    (cant_support_loc, beam_length - cant_support_loc)
}

/// A beam spanning `b` with a cantilever `a`, carrying a uniform local `Fy`
/// load of `w` along its whole length.
///
/// The origin support is declared fixed so it also carries torsion; the
/// backspan support is a pin.
pub fn ss_cantilever_description(
    name: &str,
    w: f64,
    b: f64,
    a: f64,
    attributes: BeamAttributes,
) -> ModelResult<BeamDescription> {
    let length = b + a;
    let attributes = BeamAttributes { length, ..attributes };

    let supports: SupportMap = [(0.0, RestraintCode::Fixed), (b, RestraintCode::Pin)]
        .into_iter()
        .collect();

    let load = LoadSpec::Distributed(DistributedLoadSpec {
        direction: "Fy".to_string(),
        start_magnitude: w,
        end_magnitude: w,
        start_location: 0.0,
        end_location: length,
        case: UNIFORM_CASE.to_string(),
    });

    BeamDescription::new(name, attributes, supports, vec![load])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shear_modulus() {
        assert_relative_eq!(shear_modulus(0.3, 200e3), 76923.076923, epsilon = 1e-6);
        assert_relative_eq!(shear_modulus(0.25, 1.0), 0.4);
    }

    #[test]
    fn test_beam_reactions_ss_cant() {
        let (r1, r2) = beam_reactions_ss_cant(50.0, 4500.0, 2350.0);
        assert_relative_eq!(r1, 260680.5556, epsilon = 1e-3);
        assert_relative_eq!(r2, 81819.4444, epsilon = 1e-3);

        let (r1, r2) = beam_reactions_ss_cant(10.0, 10.0, 0.0);
        assert_relative_eq!(r1, 50.0);
        assert_relative_eq!(r2, 50.0);
    }

    #[test]
    fn test_spans() {
        assert_eq!(spans(10.0, 7.0), (7.0, 3.0));
        assert_eq!(spans(6850.0, 4500.0), (4500.0, 2350.0));
    }

    #[test]
    fn test_ss_cantilever_description() {
        let beam = ss_cantilever_description("SS", -50.0, 4500.0, 2350.0, BeamAttributes::default()).unwrap();
        assert_eq!(beam.length(), 6850.0);
        assert_eq!(beam.support_locations(), vec![0.0, 4500.0]);
        assert_eq!(beam.supports.get(4500.0), Some(RestraintCode::Pin));
        assert_eq!(beam.loads.len(), 1);
        assert_eq!(beam.loads[0].direction(), "Fy");
    }
}
