//! Parsing of the textual beam format
//!
//! ```text
//! Beam 1
//! 10.0, 200000, 437e6, 22e6, 9000, 3e5, 0.3, 7.85e-9
//! 0.0P, 7.0P, 10.0F
//! POINT-FY, -25, 3.5, Case=LIVE
//! DIST-FY, -10, -10, 0.0, 10.0, Case=DEAD
//! ```

pub mod attributes;
pub mod loads;
pub mod record;
pub mod scalar;
pub mod supports;

pub use attributes::{map_attributes, BeamAttributes, ATTRIBUTE_NAMES};
pub use loads::{parse_load_record, parse_loads, DistributedLoadSpec, LoadKind, LoadSpec, PointLoadSpec};
pub use record::{classify, separate_lines, structure, structure_fields, tokenize_line, Record};
pub use scalar::{parse_integer, parse_number, parse_scalar, Scalar};
pub use supports::{parse_support_token, parse_supports, RestraintCode, RestraintVector, SupportMap};
