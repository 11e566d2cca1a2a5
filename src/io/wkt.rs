//! Read feature tables from Well-Known Text (WKT) geometries.

use std::str::FromStr;

use geo::Geometry;
use indexmap::IndexMap;
use serde_json::Value;
use wkt::Wkt;

use crate::error::{GeoPlotError, Result};
use crate::table::FeatureTable;

/// Parse one WKT string into a geometry.
pub fn parse_wkt(input: &str) -> Result<Geometry> {
    let wkt = Wkt::<f64>::from_str(input).map_err(|err| GeoPlotError::Wkt(err.to_string()))?;
    Geometry::try_from(wkt).map_err(|err| GeoPlotError::Wkt(err.to_string()))
}

/// Read a list of WKT strings into a [`FeatureTable`] without attribute columns.
pub fn read_wkt<S: AsRef<str>>(geometries: impl IntoIterator<Item = S>) -> Result<FeatureTable> {
    let geometry = geometries
        .into_iter()
        .map(|input| parse_wkt(input.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    Ok(FeatureTable::from_geometry(geometry))
}

/// Read columns where `geometry_column` holds WKT strings into a [`FeatureTable`].
///
/// The WKT column becomes the geometry column; every other column is kept as an attribute
/// column, in order.
pub fn read_wkt_column(
    mut columns: IndexMap<String, Vec<Value>>,
    geometry_column: &str,
) -> Result<FeatureTable> {
    let Some(wkt_values) = columns.shift_remove(geometry_column) else {
        return Err(GeoPlotError::InvalidTable(format!(
            "geometry column {geometry_column:?} not found"
        )));
    };

    let geometry = wkt_values
        .iter()
        .enumerate()
        .map(|(row, value)| match value {
            Value::String(input) => parse_wkt(input),
            other => Err(GeoPlotError::Wkt(format!(
                "row {row} of column {geometry_column:?} is not a string: {other}"
            ))),
        })
        .collect::<Result<Vec<_>>>()?;

    FeatureTable::try_new(geometry, columns)
}
