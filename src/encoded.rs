//! The nested coordinate values produced by the geometry codec.

use serde::Serialize;

/// A geometry encoded into the nested-array layout of the plotting collaborator.
///
/// The nesting mirrors the structure of the encoded geometry: a point is a leaf
/// ([`Encoded::Pair`] or [`Encoded::Scalar`] depending on the axis), every other kind
/// is a [`Encoded::List`]. Serialized with serde, a scalar becomes a JSON number, a
/// pair becomes `[x, y]` and a list becomes a JSON array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Encoded {
    Scalar(f64),
    Pair(f64, f64),
    List(Vec<Encoded>),
}

impl Encoded {
    /// Number of elements in a list. Leaves count as a single element.
    pub fn len(&self) -> usize {
        match self {
            Encoded::List(items) => items.len(),
            _ => 1,
        }
    }

    /// True only for a list without elements.
    pub fn is_empty(&self) -> bool {
        matches!(self, Encoded::List(items) if items.is_empty())
    }

    /// The elements of a list, `None` for a leaf.
    pub fn as_list(&self) -> Option<&[Encoded]> {
        match self {
            Encoded::List(items) => Some(items),
            _ => None,
        }
    }

    /// Number of scalars or pairs reachable from this value.
    ///
    /// For any supported geometry this equals its total vertex count.
    pub fn leaf_count(&self) -> usize {
        match self {
            Encoded::List(items) => items.iter().map(Encoded::leaf_count).sum(),
            _ => 1,
        }
    }

    /// All leaves in depth-first order.
    pub fn leaves(&self) -> Vec<&Encoded> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Encoded>) {
        match self {
            Encoded::List(items) => items.iter().for_each(|item| item.collect_leaves(out)),
            leaf => out.push(leaf),
        }
    }
}

impl From<f64> for Encoded {
    fn from(value: f64) -> Self {
        Encoded::Scalar(value)
    }
}

impl From<(f64, f64)> for Encoded {
    fn from((x, y): (f64, f64)) -> Self {
        Encoded::Pair(x, y)
    }
}

impl<E: Into<Encoded>> From<Vec<E>> for Encoded {
    fn from(value: Vec<E>) -> Self {
        Encoded::List(value.into_iter().map(Into::into).collect())
    }
}
