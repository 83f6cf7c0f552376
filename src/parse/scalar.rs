//! Scalar parsing: numeric tokens become numbers, everything else passes through

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field of a beam record after numeric conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Numeric value, if the token converted
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(value) => Some(*value),
            Scalar::Text(_) => None,
        }
    }

    /// Text value, if the token did not convert
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Number(_) => None,
            Scalar::Text(text) => Some(text),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Scalar::Number(_))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Number(value) => write!(f, "{}", value),
            Scalar::Text(text) => f.write_str(text),
        }
    }
}

/// Convert a token to a number, or hand it back unchanged.
///
/// Surrounding whitespace is ignored for the conversion but kept in the
/// returned text when the token is not numeric. Never fails.
pub fn parse_scalar(token: &str) -> Scalar {
    match parse_number(token) {
        Some(value) => Scalar::Number(value),
        None => Scalar::Text(token.to_string()),
    }
}

/// Floating point or integer conversion of a trimmed token
pub fn parse_number(token: &str) -> Option<f64> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value as f64);
    }
    trimmed.parse::<f64>().ok()
}

/// Integer conversion of a trimmed token
pub fn parse_integer(token: &str) -> Option<i64> {
    token.trim().parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_tokens() {
        assert_eq!(parse_scalar("43"), Scalar::Number(43.0));
        assert!(parse_scalar("43").is_number());
        assert_eq!(parse_scalar("13.4"), Scalar::Number(13.4));
        assert_eq!(parse_scalar(" 200000"), Scalar::Number(200000.0));
        assert_eq!(parse_scalar("756e6"), Scalar::Number(756e6));
        assert_eq!(parse_scalar("-10"), Scalar::Number(-10.0));
    }

    #[test]
    fn test_text_passes_through_unchanged() {
        assert_eq!(parse_scalar("Case=DEAD"), Scalar::Text("Case=DEAD".to_string()));
        assert_eq!(parse_scalar(" 10.0P"), Scalar::Text(" 10.0P".to_string()));
        assert_eq!(parse_scalar(""), Scalar::Text(String::new()));
    }

    #[test]
    fn test_integer_parse() {
        assert_eq!(parse_integer("43"), Some(43));
        assert_eq!(parse_integer(" 13 "), Some(13));
        assert_eq!(parse_integer("13.4"), None);
    }
}
