use std::borrow::Cow;

use geo::Geometry;
use indexmap::IndexMap;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, debug_span};

use crate::algorithm::encode::encode;
use crate::algorithm::explode::{Explode, SplitDiscontinuousLines, SplitMultiPoints};
use crate::datatypes::{CoordAxis, GeometryFamily};
use crate::encoded::Encoded;
use crate::error::{GeoPlotError, Result};
use crate::table::{take_values, ColumnDataOptions, FeatureTable};

/// One column of [`ColumnData`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Column {
    /// Encoded coordinates, one value per row.
    Coords(Vec<Encoded>),
    /// Attribute values copied from the feature table.
    Values(Vec<Value>),
}

impl Column {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            Column::Coords(values) => values.len(),
            Column::Values(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The encoded values of a coordinate column, `None` for an attribute column.
    pub fn as_coords(&self) -> Option<&[Encoded]> {
        match self {
            Column::Coords(values) => Some(values),
            Column::Values(_) => None,
        }
    }

    /// The values of an attribute column, `None` for a coordinate column.
    pub fn as_values(&self) -> Option<&[Value]> {
        match self {
            Column::Values(values) => Some(values),
            Column::Coords(_) => None,
        }
    }

    fn empty_like(&self) -> Self {
        match self {
            Column::Coords(_) => Column::Coords(vec![]),
            Column::Values(_) => Column::Values(vec![]),
        }
    }
}

/// Column-oriented data in the layout consumed by the plotting collaborator.
///
/// Serializes to a JSON object mapping each column name to its array of values, the
/// coordinate columns first followed by the attribute columns in table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnData {
    #[serde(flatten)]
    columns: IndexMap<String, Column>,
    #[serde(skip)]
    family: GeometryFamily,
}

impl ColumnData {
    /// Encode the geometry column of `table` into x and y columns, next to its attribute
    /// columns.
    ///
    /// Rows may be split first according to `options`; attributes are repeated for every
    /// row split off the same feature. A table without rows has no geometry family to draw
    /// and fails with [`InvalidTable`][GeoPlotError::InvalidTable].
    pub fn try_from_table(table: &FeatureTable, options: &ColumnDataOptions) -> Result<Self> {
        let span = debug_span!("column_data", rows = table.len());
        let _enter = span.enter();

        if options.x_column == options.y_column {
            return Err(GeoPlotError::ColumnNameConflict(options.x_column.clone()));
        }
        if let Some(name) = table
            .attributes()
            .keys()
            .find(|name| **name == options.x_column || **name == options.y_column)
        {
            return Err(GeoPlotError::ColumnNameConflict(name.clone()));
        }

        let family = GeometryFamily::infer(table.geometry())?
            .ok_or_else(|| GeoPlotError::InvalidTable("feature table is empty".to_string()))?;
        let (geometry, take_indices): (Cow<[Geometry]>, Option<Vec<usize>>) = match family {
            GeometryFamily::Lines if options.split_discontinuous_lines => {
                let (exploded, take_indices) = SplitDiscontinuousLines(table.geometry()).explode();
                (Cow::Owned(exploded), take_indices)
            }
            GeometryFamily::MultiPoint if options.explode_multi_points => {
                let (exploded, take_indices) = SplitMultiPoints(table.geometry()).explode();
                (Cow::Owned(exploded), take_indices)
            }
            _ => (Cow::Borrowed(table.geometry()), None),
        };

        let mut columns = IndexMap::with_capacity(table.attributes().len() + 2);
        columns.insert(
            options.x_column.clone(),
            Column::Coords(encode_column(&geometry, CoordAxis::X)?),
        );
        columns.insert(
            options.y_column.clone(),
            Column::Coords(encode_column(&geometry, CoordAxis::Y)?),
        );
        for (name, values) in table.attributes() {
            let values = match &take_indices {
                Some(indices) => take_values(values, indices),
                None => values.clone(),
            };
            columns.insert(name.clone(), Column::Values(values));
        }

        debug!(
            family = %family,
            rows = geometry.len(),
            "built column data"
        );
        Ok(Self { columns, family })
    }

    /// The same columns without any rows.
    pub fn empty_like(&self) -> Self {
        Self {
            columns: self
                .columns
                .iter()
                .map(|(name, column)| (name.clone(), column.empty_like()))
                .collect(),
            family: self.family,
        }
    }

    /// Number of rows. Every column has the same length.
    pub fn len(&self) -> usize {
        self.columns.values().next().map_or(0, Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The geometry family of the encoded rows.
    pub fn family(&self) -> GeometryFamily {
        self.family
    }

    /// The column named `name`.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Column names, coordinate columns first.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

fn encode_column(geometry: &[Geometry], axis: CoordAxis) -> Result<Vec<Encoded>> {
    #[cfg(feature = "rayon")]
    {
        geometry.par_iter().map(|geom| encode(geom, axis)).collect()
    }

    #[cfg(not(feature = "rayon"))]
    {
        geometry.iter().map(|geom| encode(geom, axis)).collect()
    }
}
