//! Detect and repair discontinuities between the parts of a multi-line.

use geo::{Coord, LineString, MultiLineString};

/// Outcome of chaining the parts of a [`MultiLineString`].
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizationResult {
    /// Every part starts where the previous one ends, after reversing the parts that
    /// pointed backwards. Safe to encode as one flat vertex sequence.
    Continuous(MultiLineString),

    /// The parts do not chain. These are the original parts, untouched, to be encoded
    /// and drawn independently.
    Disjoint(Vec<LineString>),
}

impl NormalizationResult {
    /// True when the parts chain and can be encoded as one flat vertex sequence.
    pub fn is_continuous(&self) -> bool {
        matches!(self, Self::Continuous(_))
    }

    /// The lines to encode: the whole multi-line when continuous, else every part.
    pub fn into_line_strings(self) -> Vec<LineString> {
        match self {
            Self::Continuous(multi_line_string) => vec![LineString::new(
                multi_line_string
                    .into_iter()
                    .flat_map(|line| line.0)
                    .collect(),
            )],
            Self::Disjoint(parts) => parts,
        }
    }
}

fn first_coord(line: &LineString) -> Option<Coord> {
    line.0.first().copied()
}

fn last_coord(line: &LineString) -> Option<Coord> {
    line.0.last().copied()
}

fn reversed(line: &LineString) -> LineString {
    LineString::new(line.0.iter().rev().copied().collect())
}

/// Chain the parts of a multi-line end-to-start.
///
/// Parts are visited left to right, each compared against the previous part as already
/// adjusted:
/// - a part ending where the previous part ends is reversed;
/// - a part touching neither end of its own with the previous part's end aborts, and the
///   original parts are returned as [`NormalizationResult::Disjoint`], discarding any
///   reversal made so far;
/// - otherwise the part already starts where the previous one ends and is kept.
///
/// Coordinates are compared exactly, without tolerance. A part without vertices cannot
/// chain with its neighbours.
///
/// ```
/// use geo::{line_string, MultiLineString};
/// use geoplot::algorithm::{normalize, NormalizationResult};
///
/// let ml = MultiLineString::new(vec![
///     line_string![(x: 0., y: 0.), (x: 5., y: 2.)],
///     line_string![(x: 10., y: 10.), (x: 5., y: 2.)],
/// ]);
/// let expected = MultiLineString::new(vec![
///     line_string![(x: 0., y: 0.), (x: 5., y: 2.)],
///     line_string![(x: 5., y: 2.), (x: 10., y: 10.)],
/// ]);
/// assert_eq!(normalize(&ml), NormalizationResult::Continuous(expected));
/// ```
pub fn normalize(multi_line_string: &MultiLineString) -> NormalizationResult {
    match chain_parts(&multi_line_string.0) {
        Some(parts) => NormalizationResult::Continuous(MultiLineString::new(parts)),
        None => NormalizationResult::Disjoint(multi_line_string.0.clone()),
    }
}

/// The parts with backwards ones reversed, or `None` as soon as the chain breaks.
fn chain_parts(parts: &[LineString]) -> Option<Vec<LineString>> {
    let mut chained: Vec<LineString> = Vec::with_capacity(parts.len());
    for part in parts {
        let Some(previous) = chained.last() else {
            chained.push(part.clone());
            continue;
        };

        let previous_end = last_coord(previous)?;
        let (start, end) = (first_coord(part)?, last_coord(part)?);

        if end == previous_end {
            chained.push(reversed(part));
        } else if start == previous_end {
            chained.push(part.clone());
        } else {
            return None;
        }
    }
    Some(chained)
}

/// Chain the parts of multi-part lines, see [`normalize`].
pub trait ChainLines {
    fn normalize(&self) -> NormalizationResult;
}

impl ChainLines for MultiLineString {
    fn normalize(&self) -> NormalizationResult {
        normalize(self)
    }
}
