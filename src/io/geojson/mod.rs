//! Read feature tables from [GeoJSON](https://geojson.org/).

pub use reader::read_geojson;

mod reader;
