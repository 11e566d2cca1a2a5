//! Row-oriented feature tables and the column-oriented data handed to the plotting
//! collaborator.

mod column_data;
mod options;

pub use column_data::{Column, ColumnData};
pub use options::ColumnDataOptions;

use geo::Geometry;
use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{GeoPlotError, Result};

/// Geometries with their attribute columns, one row per feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureTable {
    geometry: Vec<Geometry>,
    attributes: IndexMap<String, Vec<Value>>,
}

impl FeatureTable {
    /// Create a table, checking that every attribute column has one value per geometry.
    pub fn try_new(
        geometry: Vec<Geometry>,
        attributes: IndexMap<String, Vec<Value>>,
    ) -> Result<Self> {
        for (name, column) in attributes.iter() {
            if column.len() != geometry.len() {
                return Err(GeoPlotError::InvalidTable(format!(
                    "attribute column {name:?} has {} rows, geometry column has {}",
                    column.len(),
                    geometry.len()
                )));
            }
        }
        Ok(Self {
            geometry,
            attributes,
        })
    }

    /// A table without attribute columns.
    pub fn from_geometry(geometry: Vec<Geometry>) -> Self {
        Self {
            geometry,
            attributes: IndexMap::new(),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.geometry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The geometry column.
    pub fn geometry(&self) -> &[Geometry] {
        &self.geometry
    }

    /// The attribute columns, in table order.
    pub fn attributes(&self) -> &IndexMap<String, Vec<Value>> {
        &self.attributes
    }

    /// A new table holding the rows at `indices`, in that order.
    pub fn take(&self, indices: &[usize]) -> Result<Self> {
        if let Some(index) = indices.iter().find(|index| **index >= self.len()) {
            return Err(GeoPlotError::InvalidTable(format!(
                "row index {index} out of bounds for table of {} rows",
                self.len()
            )));
        }

        let geometry = indices
            .iter()
            .map(|index| self.geometry[*index].clone())
            .collect();
        let attributes = self
            .attributes
            .iter()
            .map(|(name, column)| (name.clone(), take_values(column, indices)))
            .collect();
        Ok(Self {
            geometry,
            attributes,
        })
    }
}

pub(crate) fn take_values(column: &[Value], indices: &[usize]) -> Vec<Value> {
    indices.iter().map(|index| column[*index].clone()).collect()
}
