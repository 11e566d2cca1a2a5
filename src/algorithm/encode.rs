//! Convert geometries into the nested coordinate arrays of the plotting collaborator.

use geo::{Coord, Geometry, LineString, MultiLineString, MultiPolygon, Point, Polygon};

use crate::datatypes::CoordAxis;
use crate::encoded::Encoded;
use crate::error::{GeoPlotError, Result};
use crate::util::geometry_type_name;

/// Encode any supported geometry.
///
/// `MultiPoint` and `GeometryCollection`, as well as the `Line`, `Rect` and `Triangle`
/// kinds, have no flat encoding and fail with
/// [`UnsupportedGeometryKind`][GeoPlotError::UnsupportedGeometryKind].
///
/// ```
/// use geo::line_string;
/// use geoplot::algorithm::encode;
/// use geoplot::datatypes::CoordAxis;
/// use geoplot::encoded::Encoded;
///
/// let line = line_string![(x: 0., y: 0.), (x: 1., y: 2.)];
/// let xs = encode(&line.into(), CoordAxis::X).unwrap();
/// assert_eq!(xs, Encoded::List(vec![Encoded::Scalar(0.), Encoded::Scalar(1.)]));
/// ```
pub fn encode(geometry: &Geometry, axis: CoordAxis) -> Result<Encoded> {
    match geometry {
        Geometry::Point(point) => Ok(encode_point(point, axis)),
        Geometry::LineString(line_string) => Ok(encode_line_string(line_string, axis)),
        Geometry::Polygon(polygon) => Ok(encode_polygon(polygon, axis)),
        Geometry::MultiLineString(multi_line_string) => {
            Ok(encode_multi_line_string(multi_line_string, axis))
        }
        Geometry::MultiPolygon(multi_polygon) => Ok(encode_multi_polygon(multi_polygon, axis)),
        other => Err(GeoPlotError::UnsupportedGeometryKind(
            geometry_type_name(other).to_string(),
        )),
    }
}

/// Encode a geometry with an axis given by its string selector (`xy`, `x` or `y`).
pub fn encode_with_selector(geometry: &Geometry, selector: &str) -> Result<Encoded> {
    encode(geometry, selector.parse()?)
}

fn encode_coord(coord: Coord, axis: CoordAxis) -> Encoded {
    match axis {
        CoordAxis::Both => Encoded::Pair(coord.x, coord.y),
        CoordAxis::X => Encoded::Scalar(coord.x),
        CoordAxis::Y => Encoded::Scalar(coord.y),
    }
}

/// A point is the only kind encoded as a leaf rather than a list.
pub fn encode_point(point: &Point, axis: CoordAxis) -> Encoded {
    encode_coord(point.0, axis)
}

/// One leaf per vertex, in vertex order. Also used for polygon rings.
pub fn encode_line_string(line_string: &LineString, axis: CoordAxis) -> Encoded {
    Encoded::List(encode_vertices(line_string, axis))
}

fn encode_vertices(line_string: &LineString, axis: CoordAxis) -> Vec<Encoded> {
    line_string
        .coords()
        .map(|coord| encode_coord(*coord, axis))
        .collect()
}

/// `[[exterior]]` without holes, `[[exterior], [hole, hole, ...]]` with holes.
pub fn encode_polygon(polygon: &Polygon, axis: CoordAxis) -> Encoded {
    let mut out = Vec::with_capacity(2);
    out.push(Encoded::List(vec![encode_line_string(polygon.exterior(), axis)]));

    if !polygon.interiors().is_empty() {
        let interiors = polygon
            .interiors()
            .iter()
            .map(|interior| encode_line_string(interior, axis))
            .collect();
        out.push(Encoded::List(interiors));
    }

    Encoded::List(out)
}

/// The vertices of every part concatenated into one list; part boundaries are lost.
///
/// Parts that do not chain end-to-start get joined by a straight segment once drawn, see
/// [`normalize`][crate::algorithm::normalize] to detect and repair that.
pub fn encode_multi_line_string(multi_line_string: &MultiLineString, axis: CoordAxis) -> Encoded {
    let capacity = multi_line_string.iter().map(|line| line.0.len()).sum();
    let mut out = Vec::with_capacity(capacity);
    for line_string in multi_line_string.iter() {
        out.extend(encode_vertices(line_string, axis));
    }
    Encoded::List(out)
}

/// One polygon encoding per part; part boundaries are kept.
pub fn encode_multi_polygon(multi_polygon: &MultiPolygon, axis: CoordAxis) -> Encoded {
    Encoded::List(
        multi_polygon
            .iter()
            .map(|polygon| encode_polygon(polygon, axis))
            .collect(),
    )
}

/// Encode geometries into the nested coordinate arrays of the plotting collaborator.
pub trait EncodeCoords {
    type Output;

    fn encode_coords(&self, axis: CoordAxis) -> Self::Output;
}

macro_rules! infallible_impl {
    ($type:ty, $func:ident) => {
        impl EncodeCoords for $type {
            type Output = Encoded;

            fn encode_coords(&self, axis: CoordAxis) -> Self::Output {
                $func(self, axis)
            }
        }
    };
}

infallible_impl!(Point, encode_point);
infallible_impl!(LineString, encode_line_string);
infallible_impl!(Polygon, encode_polygon);
infallible_impl!(MultiLineString, encode_multi_line_string);
infallible_impl!(MultiPolygon, encode_multi_polygon);

impl EncodeCoords for Geometry {
    type Output = Result<Encoded>;

    fn encode_coords(&self, axis: CoordAxis) -> Self::Output {
        encode(self, axis)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{linestring, multilinestring, multipoint, point, polygon};
    use geo::{line_string, GeometryCollection, Rect};

    fn scalars(values: &[f64]) -> Encoded {
        Encoded::List(values.iter().copied().map(Encoded::Scalar).collect())
    }

    fn pairs(values: &[(f64, f64)]) -> Encoded {
        Encoded::List(values.iter().map(|(x, y)| Encoded::Pair(*x, *y)).collect())
    }

    #[test]
    fn point() {
        let geom: Geometry = point::p0().into();
        assert_eq!(encode(&geom, CoordAxis::Both).unwrap(), Encoded::Pair(0., 1.));
        assert_eq!(encode(&geom, CoordAxis::X).unwrap(), Encoded::Scalar(0.));
        assert_eq!(encode(&geom, CoordAxis::Y).unwrap(), Encoded::Scalar(1.));
    }

    #[test]
    fn line_string() {
        let geom: Geometry = linestring::ls0().into();
        assert_eq!(
            encode(&geom, CoordAxis::Both).unwrap(),
            pairs(&[(0., 0.), (1., 2.)])
        );
        assert_eq!(encode(&geom, CoordAxis::X).unwrap(), scalars(&[0., 1.]));
        assert_eq!(encode(&geom, CoordAxis::Y).unwrap(), scalars(&[0., 2.]));
    }

    #[test]
    fn line_string_lengths_match_vertex_count() {
        let line = linestring::ls1();
        let xs = line.encode_coords(CoordAxis::X);
        let ys = line.encode_coords(CoordAxis::Y);
        assert_eq!(xs.len(), 3);
        assert_eq!(ys.len(), 3);
        assert_eq!(xs, scalars(&[3., 5., 7.]));
    }

    #[test]
    fn empty_line_string() {
        let line = LineString::new(vec![]);
        assert_eq!(line.encode_coords(CoordAxis::Both), Encoded::List(vec![]));
    }

    #[test]
    fn polygon_without_holes() {
        let geom: Geometry = polygon::p0().into();
        let out = encode(&geom, CoordAxis::Both).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(
            out,
            Encoded::List(vec![Encoded::List(vec![pairs(&[
                (0., 0.),
                (1., 1.),
                (1., 0.),
                (0., 0.)
            ])])])
        );

        assert_eq!(
            encode(&geom, CoordAxis::X).unwrap(),
            Encoded::List(vec![Encoded::List(vec![scalars(&[0., 1., 1., 0.])])])
        );
        assert_eq!(
            encode(&geom, CoordAxis::Y).unwrap(),
            Encoded::List(vec![Encoded::List(vec![scalars(&[0., 1., 0., 0.])])])
        );
    }

    #[test]
    fn polygon_with_holes() {
        let geom: Geometry = polygon::p_with_holes().into();

        let out = encode(&geom, CoordAxis::X).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.as_list().unwrap()[1].len(), 2);
        assert_eq!(
            out,
            Encoded::List(vec![
                Encoded::List(vec![scalars(&[0., 10., 10., 0., 0.])]),
                Encoded::List(vec![
                    scalars(&[1., 5., 5., 1., 1.]),
                    scalars(&[9., 9., 8., 8., 9.]),
                ]),
            ])
        );

        let out = encode(&geom, CoordAxis::Y).unwrap();
        assert_eq!(
            out,
            Encoded::List(vec![
                Encoded::List(vec![scalars(&[0., 0., 10., 10., 0.])]),
                Encoded::List(vec![
                    scalars(&[2., 2., 1., 1., 2.]),
                    scalars(&[9., 8., 8., 9., 9.]),
                ]),
            ])
        );
    }

    #[test]
    fn multi_line_string_flattens_parts() {
        let geom: Geometry = multilinestring::ml_disjoint().into();
        assert_eq!(
            encode(&geom, CoordAxis::Both).unwrap(),
            pairs(&[(0., 0.), (5., 2.), (6., 0.), (10., 10.)])
        );
        assert_eq!(
            encode(&geom, CoordAxis::X).unwrap(),
            scalars(&[0., 5., 6., 10.])
        );
        assert_eq!(
            encode(&geom, CoordAxis::Y).unwrap(),
            scalars(&[0., 2., 0., 10.])
        );
    }

    #[test]
    fn multi_line_string_length_is_sum_of_parts() {
        let ml = MultiLineString::new(vec![
            linestring::ls0(),
            linestring::ls1(),
            line_string![(x: 1., y: 1.), (x: 2., y: 2.), (x: 3., y: 3.), (x: 4., y: 4.)],
        ]);
        assert_eq!(ml.encode_coords(CoordAxis::Both).len(), 2 + 3 + 4);
    }

    #[test]
    fn multi_polygon_nests_parts() {
        let geom: Geometry = polygon::mp0().into();
        let out = encode(&geom, CoordAxis::Both).unwrap();
        assert_eq!(out.len(), 2);

        let parts = out.as_list().unwrap();
        assert_eq!(parts[0], polygon::p0().encode_coords(CoordAxis::Both));
        assert_eq!(parts[0].len(), 1);
        assert_eq!(parts[1], polygon::p_with_holes().encode_coords(CoordAxis::Both));
        assert_eq!(parts[1].len(), 2);
    }

    #[test]
    fn leaf_count_matches_vertex_count() {
        let geoms: Vec<(Geometry, usize)> = vec![
            (point::p0().into(), 1),
            (linestring::ls1().into(), 3),
            (polygon::p_with_holes().into(), 15),
            (multilinestring::ml_backwards().into(), 4),
            (polygon::mp0().into(), 19),
        ];
        for (geom, vertices) in geoms {
            for axis in [CoordAxis::Both, CoordAxis::X, CoordAxis::Y] {
                assert_eq!(geom.encode_coords(axis).unwrap().leaf_count(), vertices);
            }
        }
    }

    #[test]
    fn unsupported_kinds() {
        let geoms: Vec<Geometry> = vec![
            multipoint::mp0().into(),
            Geometry::GeometryCollection(GeometryCollection::new_from(vec![
                point::p0().into()
            ])),
            Rect::new((0., 0.), (1., 1.)).into(),
        ];
        for geom in geoms {
            for axis in [CoordAxis::Both, CoordAxis::X, CoordAxis::Y] {
                assert!(matches!(
                    encode(&geom, axis),
                    Err(GeoPlotError::UnsupportedGeometryKind(_))
                ));
            }
        }
    }

    #[test]
    fn string_selector() {
        let geom: Geometry = point::p1().into();
        assert_eq!(
            encode_with_selector(&geom, "xy").unwrap(),
            Encoded::Pair(1., 2.)
        );
        assert!(matches!(
            encode_with_selector(&geom, "z"),
            Err(GeoPlotError::InvalidAxisSelector(_))
        ));
    }
}
