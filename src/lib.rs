//! Convert vector geometries and their attributes into the column-oriented, nested-array
//! layout read by interactive plotting libraries.
//!
//! The core is the geometry codec in [`algorithm::encode`], which turns one geometry into
//! nested coordinate arrays, and the multi-line normalizer in [`algorithm::continuity`],
//! which chains the parts of multi-lines so that their flat encoding draws correctly.
//! [`table::ColumnData`] applies both to every row of a [`table::FeatureTable`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use algorithm::{encode, normalize, NormalizationResult};
pub use datatypes::{CoordAxis, GeometryFamily};
pub use encoded::Encoded;
pub use error::{GeoPlotError, Result};

pub mod algorithm;
pub mod datatypes;
pub mod encoded;
pub mod error;
pub mod io;
pub mod table;
mod util;
