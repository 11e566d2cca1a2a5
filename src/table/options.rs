/// Options for building [`ColumnData`][super::ColumnData] from a feature table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDataOptions {
    /// Name of the column holding the encoded x coordinates.
    pub x_column: String,

    /// Name of the column holding the encoded y coordinates.
    pub y_column: String,

    /// Chain the parts of multi-line rows, and split rows whose parts do not chain into one
    /// row per part.
    pub split_discontinuous_lines: bool,

    /// Split multi-point rows into one row per point. Multi-points cannot be encoded
    /// otherwise.
    pub explode_multi_points: bool,
}

impl ColumnDataOptions {
    pub fn new(
        x_column: impl Into<String>,
        y_column: impl Into<String>,
        split_discontinuous_lines: bool,
        explode_multi_points: bool,
    ) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
            split_discontinuous_lines,
            explode_multi_points,
        }
    }
}

impl Default for ColumnDataOptions {
    fn default() -> Self {
        Self::new("x", "y", true, true)
    }
}
