use crate::errors::{AppError, AppResult};
use crate::table::element::Element;
use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::hash::Hash;

/// Closed set of field identifiers a table is built over.
///
/// Implemented by the consumer (one enum per table kind); cells and
/// sort keys are matched by field, never by position.
pub trait TableField: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Stable identifier used on the command line (`--sort name:desc`).
    fn key(&self) -> &'static str;

    fn all() -> &'static [Self];

    fn from_key(s: &str) -> AppResult<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::InvalidField(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Number(n) => write!(f, "{n}"),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        RowId::Number(n)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId::Text(s.to_string())
    }
}

/// What a cell is compared by.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(DateTime<FixedOffset>),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableColumn<F> {
    pub header_name: String,
    pub field: F,
    pub sortable: bool,
}

impl<F> TableColumn<F> {
    pub fn new(header_name: impl Into<String>, field: F, sortable: bool) -> Self {
        Self {
            header_name: header_name.into(),
            field,
            sortable,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell<F> {
    pub column: F,
    pub element: Element,
    pub value: CellValue,
    /// `Some(false)` keeps this cell out of comparisons: under an active
    /// sort on its column it compares equal to every other row. Unset means
    /// "whatever the column says". Whether a header reacts to activation
    /// is decided by the column alone.
    pub sortable: Option<bool>,
}

impl<F> Cell<F> {
    pub fn new(column: F, element: impl Into<Element>, value: CellValue) -> Self {
        Self {
            column,
            element: element.into(),
            value,
            sortable: None,
        }
    }

    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    /// Value to compare by, `None` when the cell opted out of sorting.
    pub fn sort_value(&self) -> Option<&CellValue> {
        match self.sortable {
            Some(false) => None,
            _ => Some(&self.value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<F> {
    pub id: RowId,
    pub data: Vec<Cell<F>>,
}

impl<F: TableField> TableRow<F> {
    pub fn new(id: impl Into<RowId>, data: Vec<Cell<F>>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Cell for `field`, looked up by column rather than position.
    pub fn cell(&self, field: F) -> Option<&Cell<F>> {
        self.data.iter().find(|c| c.column == field)
    }

    pub fn sort_value(&self, field: F) -> Option<&CellValue> {
        self.cell(field).and_then(Cell::sort_value)
    }
}
