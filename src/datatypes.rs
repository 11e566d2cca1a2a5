//! Selectors and classifications shared by the codec and the table layer.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use geo::Geometry;
use serde::{Deserialize, Serialize};

use crate::error::{GeoPlotError, Result};
use crate::util::geometry_type_name;

/// Which coordinates of each vertex to emit when encoding a geometry.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoordAxis {
    /// Emit `(x, y)` pairs.
    #[default]
    #[serde(rename = "xy")]
    Both,
    /// Emit only x values.
    #[serde(rename = "x")]
    X,
    /// Emit only y values.
    #[serde(rename = "y")]
    Y,
}

impl CoordAxis {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "xy",
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl FromStr for CoordAxis {
    type Err = GeoPlotError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let out = match s {
            "xy" => Self::Both,
            "x" => Self::X,
            "y" => Self::Y,
            other => return Err(GeoPlotError::InvalidAxisSelector(other.to_string())),
        };
        Ok(out)
    }
}

impl Display for CoordAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Groups of geometry kinds that can be drawn by the same kind of plot layer.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GeometryFamily {
    /// `Point`
    Point,
    /// `MultiPoint`
    MultiPoint,
    /// `LineString` and `MultiLineString`
    Lines,
    /// `Polygon` and `MultiPolygon`
    Polygons,
}

impl GeometryFamily {
    /// The family of a single geometry, failing for kinds that no family contains.
    pub fn of(geometry: &Geometry) -> Result<Self> {
        let family = match geometry {
            Geometry::Point(_) => Self::Point,
            Geometry::MultiPoint(_) => Self::MultiPoint,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => Self::Lines,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => Self::Polygons,
            other => {
                return Err(GeoPlotError::UnsupportedGeometryKind(
                    geometry_type_name(other).to_string(),
                ))
            }
        };
        Ok(family)
    }

    /// The single family shared by every geometry.
    ///
    /// Returns `Ok(None)` when there are no geometries at all.
    pub fn infer<'a>(geometries: impl IntoIterator<Item = &'a Geometry>) -> Result<Option<Self>> {
        let mut families = BTreeSet::new();
        for geometry in geometries {
            families.insert(Self::of(geometry)?);
        }

        let mut iter = families.iter();
        match (iter.next(), iter.next()) {
            (None, _) => Ok(None),
            (Some(family), None) => Ok(Some(*family)),
            _ => Err(GeoPlotError::MixedGeometryFamilies(
                families
                    .iter()
                    .map(|family| family.to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            )),
        }
    }
}

impl Display for GeometryFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use GeometryFamily::*;
        match self {
            Point => write!(f, "point"),
            MultiPoint => write!(f, "multipoint"),
            Lines => write!(f, "lines"),
            Polygons => write!(f, "polygons"),
        }
    }
}
