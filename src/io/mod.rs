//! Readers of feature tables and writers of plot-ready column data.

pub mod geojson;
pub mod json;
pub mod wkt;
