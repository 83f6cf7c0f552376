//! Record tokenizing, numeric structuring and line classification
//!
//! A beam file is positional: the name line, the attribute line, the support
//! line and then one load per line. [`classify`] turns that layout into a list
//! of tagged [`Record`]s up front so the later stages never index into raw
//! line lists.

use serde::Serialize;

use super::attributes::ATTRIBUTE_NAMES;
use super::loads::LoadKind;
use super::scalar::{parse_number, parse_scalar, Scalar};
use crate::error::{ModelError, ModelResult};

/// Field delimiter between tokens on one line
pub const FIELD_DELIMITER: char = ',';

/// One classified line of a beam file. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Name { line: usize, name: String },
    Attributes { line: usize, values: Vec<f64> },
    Supports { line: usize, tokens: Vec<String> },
    Load { line: usize, fields: Vec<Scalar> },
}

impl Record {
    pub fn line(&self) -> usize {
        match self {
            Record::Name { line, .. }
            | Record::Attributes { line, .. }
            | Record::Supports { line, .. }
            | Record::Load { line, .. } => *line,
        }
    }
}

/// Split file contents into physical lines
pub fn separate_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Split one line into trimmed fields. Trailing empty fields are dropped and
/// a blank line yields no fields.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut fields: Vec<String> = line
        .split(FIELD_DELIMITER)
        .map(|field| field.trim().to_string())
        .collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Convert every line to a numeric record, one record per line.
///
/// This is the flat numeric view of a whole file. [`classify`] converts load
/// records through the same [`structure_fields`] step. The first field of the
/// first record is the beam name and is never converted.
pub fn structure<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<Scalar>> {
    lines
        .iter()
        .enumerate()
        .map(|(row, line)| {
            let fields = tokenize_line(line.as_ref());
            match (row, fields.split_first()) {
                (0, Some((name, rest))) => std::iter::once(Scalar::Text(name.clone()))
                    .chain(structure_fields(rest))
                    .collect(),
                _ => structure_fields(&fields),
            }
        })
        .collect()
}

/// Convert already tokenized fields, numbers where they parse and text
/// otherwise
pub fn structure_fields(fields: &[String]) -> Vec<Scalar> {
    fields.iter().map(|field| parse_scalar(field)).collect()
}

fn is_load_line(fields: &[String]) -> bool {
    fields
        .first()
        .is_some_and(|tag| LoadKind::from_tag(tag).is_some())
}

fn attribute_values(line: usize, fields: &[String]) -> ModelResult<Vec<f64>> {
    fields
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            parse_number(field).ok_or_else(|| {
                let name = ATTRIBUTE_NAMES
                    .get(idx)
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| format!("attribute {}", idx + 1));
                ModelError::malformed(line, name, field.as_str())
            })
        })
        .collect()
}

/// Classify raw lines into tagged records.
///
/// Line 1 is the name and line 2 the attribute list; both are required.
/// Line 3 holds the supports unless it already carries a load tag, in which
/// case the beam has no supports. Every later non-blank line is a load
/// record; whether its tag is recognised is decided by the load parser.
pub fn classify<S: AsRef<str>>(lines: &[S]) -> ModelResult<Vec<Record>> {
    let mut tokenized = lines
        .iter()
        .map(|line| tokenize_line(line.as_ref()))
        .enumerate()
        .map(|(idx, fields)| (idx + 1, fields));

    let mut records = Vec::new();

    let name = tokenized
        .next()
        .and_then(|(_, fields)| fields.into_iter().next())
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ModelError::missing(1, "name"))?;
    records.push(Record::Name { line: 1, name });

    let (line, fields) = tokenized
        .next()
        .ok_or_else(|| ModelError::missing(2, "attributes"))?;
    if fields.is_empty() {
        return Err(ModelError::missing(line, ATTRIBUTE_NAMES[0]));
    }
    records.push(Record::Attributes {
        line,
        values: attribute_values(line, &fields)?,
    });

    if let Some((line, fields)) = tokenized.next() {
        if is_load_line(&fields) {
            records.push(Record::Supports {
                line,
                tokens: Vec::new(),
            });
            records.push(Record::Load {
                line,
                fields: structure_fields(&fields),
            });
        } else {
            records.push(Record::Supports {
                line,
                tokens: fields,
            });
        }
    }

    for (line, fields) in tokenized {
        if fields.is_empty() {
            continue;
        }
        records.push(Record::Load {
            line,
            fields: structure_fields(&fields),
        });
    }

    Ok(records)
}
