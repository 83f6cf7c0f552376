//! Structured beam description assembled from classified records

use log::debug;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};
use crate::parse::{
    map_attributes, parse_loads, parse_supports, separate_lines, BeamAttributes, LoadSpec, Record,
    SupportMap,
};

/// A fully parsed beam: name, attributes, supports and loads.
///
/// Built once per input and not modified afterwards. Supports always lie
/// within `[0, length]` and `length` is finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamDescription {
    pub name: String,
    pub attributes: BeamAttributes,
    pub supports: SupportMap,
    pub loads: Vec<LoadSpec>,
}

impl BeamDescription {
    /// Validated constructor
    pub fn new(
        name: &str,
        attributes: BeamAttributes,
        supports: SupportMap,
        loads: Vec<LoadSpec>,
    ) -> ModelResult<Self> {
        let description = Self {
            name: name.to_string(),
            attributes,
            supports,
            loads,
        };
        description.validate(3)?;
        Ok(description)
    }

    /// Parse the lines of a beam file
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> ModelResult<Self> {
        let records = crate::parse::classify(lines)?;
        Self::from_records(&records)
    }

    /// Assemble a description from classified records
    pub fn from_records(records: &[Record]) -> ModelResult<Self> {
        let mut name = None;
        let mut attributes = None;
        let mut supports = SupportMap::new();
        let mut support_line = 3;
        let mut load_records = Vec::new();

        for record in records {
            match record {
                Record::Name { name: value, .. } => name = Some(value.clone()),
                Record::Attributes { values, .. } => attributes = Some(map_attributes(values)),
                Record::Supports { line, tokens } => {
                    support_line = *line;
                    supports = parse_supports(*line, tokens)?;
                }
                Record::Load { line, fields } => load_records.push((*line, fields.as_slice())),
            }
        }

        let name = name.ok_or_else(|| ModelError::missing(1, "name"))?;
        let attributes = attributes.ok_or_else(|| ModelError::missing(2, "attributes"))?;
        let loads = parse_loads(load_records)?;

        let description = Self {
            name,
            attributes,
            supports,
            loads,
        };
        description.validate(support_line)?;

        debug!(
            "Parsed beam '{}': L={}, {} support(s), {} load(s)",
            description.name,
            description.length(),
            description.supports.len(),
            description.loads.len()
        );
        Ok(description)
    }

    fn validate(&self, support_line: usize) -> ModelResult<()> {
        let length = self.length();
        if !length.is_finite() || length <= 0.0 {
            return Err(ModelError::empty_topology(format!(
                "beam length must be positive, got {}",
                length
            )));
        }
        for (location, _) in self.supports.iter() {
            if !(0.0..=length).contains(&location) {
                return Err(ModelError::SupportOutOfRange {
                    line: support_line,
                    location,
                    length,
                });
            }
        }
        Ok(())
    }

    pub fn length(&self) -> f64 {
        self.attributes.length
    }

    /// Shear modulus derived from E and nu
    pub fn shear_modulus(&self) -> f64 {
        self.attributes.shear_modulus()
    }

    /// Declared support locations in declaration order
    pub fn support_locations(&self) -> Vec<f64> {
        self.supports.locations()
    }
}

impl FromStr for BeamDescription {
    type Err = ModelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_lines(&separate_lines(text))
    }
}
