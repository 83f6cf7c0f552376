//! Support tokens, restraint codes and restraint vectors

use serde::{Deserialize, Serialize};
use std::fmt;

use super::scalar::parse_number;
use crate::error::{ModelError, ModelResult};

/// Which of the six nodal degrees of freedom are fixed.
///
/// Slot order: DX, DY, DZ, RX, RY, RZ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestraintVector(pub [bool; 6]);

impl RestraintVector {
    pub const FREE: RestraintVector = RestraintVector([false; 6]);
    /// All three translations
    pub const PIN: RestraintVector = RestraintVector([true, true, true, false, false, false]);
    /// DY, DZ and RX
    pub const FIXED: RestraintVector = RestraintVector([false, true, true, true, false, false]);
    /// All six
    pub const RIGID: RestraintVector = RestraintVector([true; 6]);

    /// DOFs restrained by either vector
    pub fn union(self, other: RestraintVector) -> RestraintVector {
        let mut slots = self.0;
        for (slot, restrained) in slots.iter_mut().zip(other.0) {
            *slot |= restrained;
        }
        RestraintVector(slots)
    }

    pub fn as_array(&self) -> [bool; 6] {
        self.0
    }

    pub fn num_restrained(&self) -> usize {
        self.0.iter().filter(|restrained| **restrained).count()
    }

    pub fn is_free(&self) -> bool {
        self.num_restrained() == 0
    }
}

/// Support type declared on the support line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RestraintCode {
    Pin,
    Fixed,
    Rigid,
}

impl RestraintCode {
    /// Look up a code from its one-letter symbol (case-insensitive)
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'P' => Some(RestraintCode::Pin),
            'F' => Some(RestraintCode::Fixed),
            'R' => Some(RestraintCode::Rigid),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            RestraintCode::Pin => 'P',
            RestraintCode::Fixed => 'F',
            RestraintCode::Rigid => 'R',
        }
    }

    pub fn restraint(&self) -> RestraintVector {
        match self {
            RestraintCode::Pin => RestraintVector::PIN,
            RestraintCode::Fixed => RestraintVector::FIXED,
            RestraintCode::Rigid => RestraintVector::RIGID,
        }
    }
}

impl fmt::Display for RestraintCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Declared supports keyed by location, in first-declaration order.
///
/// Re-declaring a location replaces its code but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportMap {
    entries: Vec<(f64, RestraintCode)>,
}

impl SupportMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, location: f64, code: RestraintCode) {
        match self.entries.iter_mut().find(|(loc, _)| *loc == location) {
            Some(entry) => entry.1 = code,
            None => self.entries.push((location, code)),
        }
    }

    /// Code declared at exactly `location`
    pub fn get(&self, location: f64) -> Option<RestraintCode> {
        self.entries
            .iter()
            .find(|(loc, _)| *loc == location)
            .map(|(_, code)| *code)
    }

    pub fn locations(&self) -> Vec<f64> {
        self.entries.iter().map(|(loc, _)| *loc).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, RestraintCode)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(f64, RestraintCode)> for SupportMap {
    fn from_iter<I: IntoIterator<Item = (f64, RestraintCode)>>(iter: I) -> Self {
        let mut map = SupportMap::new();
        for (location, code) in iter {
            map.insert(location, code);
        }
        map
    }
}

/// Parse a `<location><code>` token such as `7.0P` or `7.0:P`.
///
/// The code is the final character. One separator character (punctuation
/// other than `.`, or whitespace) between location and code is dropped.
pub fn parse_support_token(line: usize, token: &str) -> ModelResult<(f64, RestraintCode)> {
    let token = token.trim();
    let mut chars = token.chars();
    let symbol = chars
        .next_back()
        .ok_or_else(|| ModelError::missing(line, "support"))?;
    let mut location = chars.as_str();
    if let Some(last) = location.chars().last() {
        if last.is_whitespace() || (last.is_ascii_punctuation() && last != '.') {
            location = &location[..location.len() - last.len_utf8()];
        }
    }

    let location = parse_number(location)
        .ok_or_else(|| ModelError::malformed(line, "support location", token))?;
    let code = RestraintCode::from_symbol(symbol).ok_or_else(|| ModelError::UnknownRestraintCode {
        line,
        token: token.to_string(),
        code: symbol.to_string(),
    })?;

    Ok((location, code))
}

/// Parse every token of the support line into a [`SupportMap`]
pub fn parse_supports<S: AsRef<str>>(line: usize, tokens: &[S]) -> ModelResult<SupportMap> {
    let mut supports = SupportMap::new();
    for token in tokens.iter().map(AsRef::as_ref) {
        if token.trim().is_empty() {
            continue;
        }
        let (location, code) = parse_support_token(line, token)?;
        supports.insert(location, code);
    }
    Ok(supports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restraint_lookup_table() {
        assert_eq!(
            RestraintCode::Pin.restraint().as_array(),
            [true, true, true, false, false, false]
        );
        assert_eq!(
            RestraintCode::Fixed.restraint().as_array(),
            [false, true, true, true, false, false]
        );
        assert_eq!(RestraintCode::Rigid.restraint().num_restrained(), 6);
        assert!(RestraintVector::FREE.is_free());
    }

    #[test]
    fn test_union() {
        let merged = RestraintVector::FIXED.union(RestraintVector::PIN);
        assert_eq!(merged.as_array(), [true, true, true, true, false, false]);
        assert_eq!(RestraintVector::RIGID.union(RestraintVector::PIN), RestraintVector::RIGID);
    }

    #[test]
    fn test_parse_support_tokens() {
        assert_eq!(parse_support_token(3, "0.0P").unwrap(), (0.0, RestraintCode::Pin));
        assert_eq!(parse_support_token(3, "10.0F").unwrap(), (10.0, RestraintCode::Fixed));
        assert_eq!(parse_support_token(3, "7.5:R").unwrap(), (7.5, RestraintCode::Rigid));
        assert_eq!(parse_support_token(3, "7.5P").unwrap(), (7.5, RestraintCode::Pin));
        assert_eq!(parse_support_token(3, " 4500p").unwrap(), (4500.0, RestraintCode::Pin));
        // only the code character is dropped, so a bare integer keeps its digits
        assert_eq!(parse_support_token(3, "10P").unwrap(), (10.0, RestraintCode::Pin));
    }

    #[test]
    fn test_malformed_location() {
        let err = parse_support_token(3, "abcP").unwrap_err();
        assert_eq!(err, ModelError::malformed(3, "support location", "abcP"));
    }

    #[test]
    fn test_unknown_code() {
        let err = parse_support_token(3, "5.0X").unwrap_err();
        assert!(matches!(err, ModelError::UnknownRestraintCode { code, .. } if code == "X"));
    }

    #[test]
    fn test_duplicate_location_keeps_later_code() {
        let supports = parse_supports(3, &["0.0P", "5.0P", "0.0R"]).unwrap();
        assert_eq!(supports.len(), 2);
        assert_eq!(supports.get(0.0), Some(RestraintCode::Rigid));
        assert_eq!(supports.locations(), vec![0.0, 5.0]);
    }

    #[test]
    fn test_empty_support_line() {
        let tokens: [&str; 0] = [];
        assert!(parse_supports(3, &tokens).unwrap().is_empty());
    }
}
