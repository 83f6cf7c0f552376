//! Load records: `POINT-<dir>` and `DIST-<dir>` lines

use log::warn;
use serde::{Deserialize, Serialize};

use super::scalar::Scalar;
use crate::error::{ModelError, ModelResult};

/// Prefix carried by the load case label
pub const CASE_PREFIX: &str = "Case=";

/// A concentrated load on the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLoadSpec {
    /// Two-character direction label, e.g. `FY`
    pub direction: String,
    pub magnitude: f64,
    /// Absolute position along the beam
    pub location: f64,
    pub case: String,
}

/// A linearly varying load between two absolute positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoadSpec {
    pub direction: String,
    pub start_magnitude: f64,
    pub end_magnitude: f64,
    pub start_location: f64,
    pub end_location: f64,
    pub case: String,
}

/// A load parsed from one load record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadSpec {
    Point(PointLoadSpec),
    Distributed(DistributedLoadSpec),
}

impl LoadSpec {
    pub fn direction(&self) -> &str {
        match self {
            LoadSpec::Point(load) => &load.direction,
            LoadSpec::Distributed(load) => &load.direction,
        }
    }

    pub fn case(&self) -> &str {
        match self {
            LoadSpec::Point(load) => &load.case,
            LoadSpec::Distributed(load) => &load.case,
        }
    }
}

/// Load kind named by the leading tag of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadKind {
    Point,
    Distributed,
}

impl LoadKind {
    /// Classify a tag such as `POINT-FY`. The last three characters are the
    /// separator and the two-character direction.
    pub fn from_tag(tag: &str) -> Option<LoadKind> {
        split_tag(tag).and_then(|(kind, _)| match kind.trim().to_uppercase().as_str() {
            "POINT" => Some(LoadKind::Point),
            "DIST" => Some(LoadKind::Distributed),
            _ => None,
        })
    }

    fn field_names(&self) -> &'static [&'static str] {
        match self {
            LoadKind::Point => &["magnitude", "location", "case"],
            LoadKind::Distributed => &[
                "start magnitude",
                "end magnitude",
                "start location",
                "end location",
                "case",
            ],
        }
    }
}

/// Split a tag into (kind, direction)
fn split_tag(tag: &str) -> Option<(&str, &str)> {
    let tag = tag.trim();
    let boundaries: Vec<usize> = tag.char_indices().map(|(idx, _)| idx).collect();
    if boundaries.len() < 3 {
        return None;
    }
    let kind_end = boundaries[boundaries.len() - 3];
    let direction_start = boundaries[boundaries.len() - 2];
    Some((&tag[..kind_end], &tag[direction_start..]))
}

fn case_label(field: &Scalar) -> String {
    let label = field.to_string();
    let label = label.trim();
    match label.get(..CASE_PREFIX.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(CASE_PREFIX) => {
            label[CASE_PREFIX.len()..].trim().to_string()
        }
        _ => label.to_string(),
    }
}

struct LoadFields<'a> {
    line: usize,
    kind: LoadKind,
    fields: &'a [Scalar],
}

impl LoadFields<'_> {
    fn get(&self, index: usize) -> ModelResult<&Scalar> {
        self.fields
            .get(index + 1)
            .ok_or_else(|| ModelError::missing(self.line, self.kind.field_names()[index]))
    }

    fn number(&self, index: usize) -> ModelResult<f64> {
        let field = self.get(index)?;
        field.as_f64().ok_or_else(|| {
            ModelError::malformed(self.line, self.kind.field_names()[index], field.to_string())
        })
    }

    fn case(&self, index: usize) -> ModelResult<String> {
        self.get(index).map(case_label)
    }
}

/// Parse one load record.
///
/// Returns `Ok(None)` when the leading tag is neither `POINT` nor `DIST`;
/// such records are dropped rather than rejected.
pub fn parse_load_record(line: usize, fields: &[Scalar]) -> ModelResult<Option<LoadSpec>> {
    let Some(tag) = fields.first().and_then(Scalar::as_text) else {
        return Ok(None);
    };
    let (Some(kind), Some((_, direction))) = (LoadKind::from_tag(tag), split_tag(tag)) else {
        return Ok(None);
    };

    let record = LoadFields { line, kind, fields };
    let direction = direction.to_string();
    let load = match kind {
        LoadKind::Point => LoadSpec::Point(PointLoadSpec {
            direction,
            magnitude: record.number(0)?,
            location: record.number(1)?,
            case: record.case(2)?,
        }),
        LoadKind::Distributed => LoadSpec::Distributed(DistributedLoadSpec {
            direction,
            start_magnitude: record.number(0)?,
            end_magnitude: record.number(1)?,
            start_location: record.number(2)?,
            end_location: record.number(3)?,
            case: record.case(4)?,
        }),
    };
    Ok(Some(load))
}

/// Parse load records in order, dropping unrecognised tags
pub fn parse_loads<'a, I>(records: I) -> ModelResult<Vec<LoadSpec>>
where
    I: IntoIterator<Item = (usize, &'a [Scalar])>,
{
    let mut loads = Vec::new();
    for (line, fields) in records {
        match parse_load_record(line, fields)? {
            Some(load) => loads.push(load),
            None => warn!(
                "Line {}: dropping record with unrecognised load tag '{}'",
                line,
                fields.first().map(ToString::to_string).unwrap_or_default()
            ),
        }
    }
    Ok(loads)
}
