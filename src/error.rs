//! Defines [`GeoPlotError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoPlotError {
    /// The geometry kind has no flat coordinate encoding (e.g. `MultiPoint`,
    /// `GeometryCollection`).
    #[error("Unsupported geometry kind: {0}")]
    UnsupportedGeometryKind(String),

    /// The coordinate axis selector is not one of `xy`, `x` or `y`.
    #[error("Coordinate axis selector {0:?} not supported")]
    InvalidAxisSelector(String),

    /// Geometries of a single layer span more than one geometry family.
    #[error("Geometries belong to more than one geometry family: {0}")]
    MixedGeometryFamilies(String),

    /// Columns of a feature table disagree on their row count.
    #[error("Invalid feature table: {0}")]
    InvalidTable(String),

    /// An attribute column has the same name as an encoded coordinate column.
    #[error("Attribute column {0:?} conflicts with a coordinate column")]
    ColumnNameConflict(String),

    /// [geojson::Error]
    #[error(transparent)]
    GeoJson(#[from] geojson::Error),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    /// WKT Error
    #[error("WKT error: {0}")]
    Wkt(String),

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoPlotError>;
