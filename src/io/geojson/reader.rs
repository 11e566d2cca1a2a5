use std::io::Read;

use geo::Geometry;
use geojson::{GeoJson, JsonObject};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::table::FeatureTable;

/// Read a GeoJSON FeatureCollection, Feature or bare Geometry into a [`FeatureTable`].
///
/// Attribute columns are the union of all feature property names, in the order they are
/// first seen; features lacking a property get `null` there. Features without a geometry
/// are skipped.
///
/// Note: coordinates are kept as found, nothing is reprojected.
pub fn read_geojson<R: Read>(reader: R) -> Result<FeatureTable> {
    let geojson: GeoJson = serde_json::from_reader(reader)?;
    let features: Vec<(Option<geojson::Geometry>, Option<JsonObject>)> = match geojson {
        GeoJson::FeatureCollection(collection) => collection
            .features
            .into_iter()
            .map(|feature| (feature.geometry, feature.properties))
            .collect(),
        GeoJson::Feature(feature) => vec![(feature.geometry, feature.properties)],
        GeoJson::Geometry(geometry) => vec![(Some(geometry), None)],
    };

    let mut geometry_column = Vec::with_capacity(features.len());
    let mut rows = Vec::with_capacity(features.len());
    for (index, (geometry, properties)) in features.into_iter().enumerate() {
        let Some(geometry) = geometry else {
            warn!(feature = index, "skipping feature without geometry");
            continue;
        };
        geometry_column.push(Geometry::<f64>::try_from(geometry.value)?);
        rows.push(properties.unwrap_or_default());
    }

    let mut attributes: IndexMap<String, Vec<Value>> = IndexMap::new();
    for properties in rows.iter() {
        for name in properties.keys() {
            if !attributes.contains_key(name) {
                attributes.insert(name.clone(), Vec::with_capacity(rows.len()));
            }
        }
    }
    for properties in rows.iter() {
        for (name, column) in attributes.iter_mut() {
            column.push(properties.get(name).cloned().unwrap_or(Value::Null));
        }
    }

    FeatureTable::try_new(geometry_column, attributes)
}
