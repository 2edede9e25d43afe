// ---------------------------------------------------------------------------
// ColumnData – the typed contents of one column
// ---------------------------------------------------------------------------

/// Contents of a single column, tagged numeric or textual once at load time
/// so downstream code never re-probes cell types.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Every cell parsed as a float. Blank cells are carried as NaN.
    Numeric(Vec<f64>),
    /// At least one cell failed to parse; original text kept verbatim.
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ---------------------------------------------------------------------------
// Column – one named signal or annotation track
// ---------------------------------------------------------------------------

/// A named column of the recording table.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Numeric(_))
    }

    /// Numeric view of the column, `None` for text columns.
    pub fn numeric(&self) -> Option<&[f64]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded recording
// ---------------------------------------------------------------------------

/// The parsed recording: ordered named columns, rows aligned by position.
///
/// Invariant (enforced by the loader): every column has `n_rows` cells.
/// A `Table` is read-only after construction; analysis passes derive fresh
/// [`Series`] values from it instead of mutating in place.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table from loader output.
    ///
    /// Callers must pass equal-length columns; the loader guarantees this.
    pub(crate) fn new(columns: Vec<Column>) -> Self {
        let n_rows = columns.first().map(|c| c.data.len()).unwrap_or(0);
        debug_assert!(columns.iter().all(|c| c.data.len() == n_rows));
        Table { columns, n_rows }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by exact name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Extract a `(time, value)` series for one channel.
    ///
    /// Returns `None` when either column is missing or non-numeric.
    pub fn series(&self, time_column: &str, value_column: &str) -> Option<Series> {
        let time = self.column(time_column)?.numeric()?;
        let values = self.column(value_column)?.numeric()?;
        Some(Series {
            time: time.to_vec(),
            values: values.to_vec(),
        })
    }
}

// ---------------------------------------------------------------------------
// Series – one channel against the time axis
// ---------------------------------------------------------------------------

/// An equal-length `(time, values)` pair for a single channel.
///
/// The time axis is taken from the file as-is: it may be irregularly spaced,
/// non-monotonic, or contain duplicates. Analyzers tolerate that rather than
/// validate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub time: Vec<f64>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A new series with every value multiplied by `factor`; `self` is left
    /// untouched. Used for unit conversion (raw µV × 1e-3 → mV).
    pub fn scaled(&self, factor: f64) -> Series {
        Series {
            time: self.time.clone(),
            values: self.values.iter().map(|v| v * factor).collect(),
        }
    }
}
