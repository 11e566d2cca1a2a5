use geo::{Geometry, MultiLineString};
use tracing::debug;

use crate::algorithm::continuity::{normalize, NormalizationResult};

/// Explode geometries into rows that the codec can encode and the plot can draw.
pub trait Explode {
    type Output;

    /// Returns the exploded geometries and, if an explode needs to happen, the row indices
    /// that attribute columns need to be taken at to stay aligned with them.
    fn explode(&self) -> Self::Output;
}

/// Lines whose multi-part rows were chained by [`normalize`].
///
/// Continuous multi-lines stay a single row (with backwards parts reversed), disjoint ones
/// become one `LineString` row per part.
pub struct SplitDiscontinuousLines<'a>(pub &'a [Geometry]);

/// Points where every `MultiPoint` row became one row per point.
pub struct SplitMultiPoints<'a>(pub &'a [Geometry]);

impl Explode for SplitDiscontinuousLines<'_> {
    type Output = (Vec<Geometry>, Option<Vec<usize>>);

    fn explode(&self) -> Self::Output {
        explode_rows(self.0, |row, geometry| match geometry {
            Geometry::MultiLineString(multi_line_string) => {
                match normalize(multi_line_string) {
                    NormalizationResult::Continuous(chained) => {
                        if &chained != multi_line_string {
                            debug!(row, "reversed backwards parts of multi-line");
                        }
                        vec![Geometry::MultiLineString(chained)]
                    }
                    NormalizationResult::Disjoint(parts) => {
                        debug!(row, parts = parts.len(), "split discontinuous multi-line");
                        parts.into_iter().map(Geometry::LineString).collect()
                    }
                }
            }
            other => vec![other.clone()],
        })
    }
}

impl Explode for SplitMultiPoints<'_> {
    type Output = (Vec<Geometry>, Option<Vec<usize>>);

    fn explode(&self) -> Self::Output {
        explode_rows(self.0, |_, geometry| match geometry {
            Geometry::MultiPoint(multi_point) => {
                multi_point.iter().copied().map(Geometry::Point).collect()
            }
            other => vec![other.clone()],
        })
    }
}

/// Replace every row with zero or more rows, recording the source row of each output.
///
/// The indices are omitted when every row maps to exactly one row.
fn explode_rows<F>(geometries: &[Geometry], split: F) -> (Vec<Geometry>, Option<Vec<usize>>)
where
    F: Fn(usize, &Geometry) -> Vec<Geometry>,
{
    let mut exploded = Vec::with_capacity(geometries.len());
    let mut take_indices = Vec::with_capacity(geometries.len());
    for (row, geometry) in geometries.iter().enumerate() {
        for out in split(row, geometry) {
            exploded.push(out);
            take_indices.push(row);
        }
    }

    if take_indices.iter().copied().eq(0..geometries.len()) {
        (exploded, None)
    } else {
        (exploded, Some(take_indices))
    }
}

impl Explode for MultiLineString {
    type Output = Vec<Geometry>;

    fn explode(&self) -> Self::Output {
        normalize(self)
            .into_line_strings()
            .into_iter()
            .map(Geometry::LineString)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, multilinestring, multipoint, point, polygon};

    #[test]
    fn split_disjoint_lines() {
        let geoms: Vec<Geometry> = vec![
            linestring::ls0().into(),
            multilinestring::ml_disjoint().into(),
            multilinestring::ml_backwards().into(),
        ];
        let (exploded, take_indices) = SplitDiscontinuousLines(&geoms).explode();

        assert_eq!(exploded.len(), 4);
        assert_eq!(take_indices, Some(vec![0, 1, 1, 2]));
        assert_eq!(
            exploded[1],
            Geometry::LineString(multilinestring::ml_disjoint().0[0].clone())
        );
        assert_eq!(
            exploded[2],
            Geometry::LineString(multilinestring::ml_disjoint().0[1].clone())
        );
        assert!(matches!(exploded[3], Geometry::MultiLineString(_)));
        assert_ne!(exploded[3], geoms[2]);
    }

    #[test]
    fn continuous_lines_need_no_take() {
        let geoms: Vec<Geometry> = vec![
            multilinestring::ml_continuous().into(),
            linestring::ls1().into(),
        ];
        let (exploded, take_indices) = SplitDiscontinuousLines(&geoms).explode();
        assert_eq!(exploded, geoms);
        assert_eq!(take_indices, None);
    }

    #[test]
    fn split_multi_points() {
        let geoms: Vec<Geometry> = vec![multipoint::mp0().into(), point::p2().into()];
        let (exploded, take_indices) = SplitMultiPoints(&geoms).explode();
        assert_eq!(
            exploded,
            vec![
                Geometry::Point(point::p0()),
                Geometry::Point(point::p1()),
                Geometry::Point(point::p2()),
                Geometry::Point(point::p2()),
            ]
        );
        assert_eq!(take_indices, Some(vec![0, 0, 0, 1]));
    }

    #[test]
    fn other_kinds_pass_through() {
        let geoms: Vec<Geometry> = vec![polygon::p0().into()];
        let (exploded, take_indices) = SplitMultiPoints(&geoms).explode();
        assert_eq!(exploded, geoms);
        assert_eq!(take_indices, None);
    }

    #[test]
    fn explode_multi_line_string() {
        assert_eq!(multilinestring::ml_disjoint().explode().len(), 2);
        assert_eq!(multilinestring::ml_continuous().explode().len(), 1);
    }
}
