//! Algorithms turning geometries into plot-ready coordinates.

pub mod continuity;
pub mod encode;
pub mod explode;

pub use continuity::{normalize, ChainLines, NormalizationResult};
pub use encode::{encode, encode_with_selector, EncodeCoords};
pub use explode::{Explode, SplitDiscontinuousLines, SplitMultiPoints};
