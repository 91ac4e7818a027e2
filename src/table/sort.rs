//! Sort state and the type-aware row comparator.

use crate::errors::{AppError, AppResult};
use crate::table::model::{CellValue, TableField, TableRow};
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// Single-arrow glyph shown on the active column.
    pub fn glyph(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }

    fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Glyph shown on sortable columns that are not the active sort key.
pub const NEUTRAL_GLYPH: &str = "↑↓";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig<F> {
    pub key: F,
    pub direction: SortDirection,
}

impl<F> SortConfig<F> {
    pub fn asc(key: F) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: F) -> Self {
        Self {
            key,
            direction: SortDirection::Desc,
        }
    }
}

impl<F: TableField> SortConfig<F> {
    /// Parse `FIELD` or `FIELD:asc|desc`.
    pub fn parse(spec: &str) -> AppResult<Self> {
        let (field, dir) = match spec.split_once(':') {
            Some((f, d)) => {
                let dir = SortDirection::from_str_opt(d.trim())
                    .ok_or_else(|| AppError::InvalidSort(spec.to_string()))?;
                (f.trim(), dir)
            }
            None => (spec.trim(), SortDirection::Asc),
        };

        Ok(Self {
            key: F::from_key(field)?,
            direction: dir,
        })
    }
}

impl<F: TableField> fmt::Display for SortConfig<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key.key(), self.direction.as_str())
    }
}

/// Sort state after activating the header of `key`.
///
/// A new column starts ascending; the active column flips between
/// ascending and descending. There is no way back to unsorted.
pub fn next_sort<F: PartialEq>(current: Option<&SortConfig<F>>, key: F) -> SortConfig<F> {
    match current {
        Some(c) if c.key == key && c.direction == SortDirection::Asc => SortConfig::desc(key),
        _ => SortConfig::asc(key),
    }
}

/// Locale-aware-ish text comparison: accents and case are ignored first,
/// then the raw strings break ties.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    fn fold(s: &str) -> String {
        s.nfd()
            .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect()
    }

    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

/// Compare two sort values under `direction`.
///
/// Only like-typed text, number and date pairs order; everything else
/// (missing cell, mixed types, booleans, nulls) compares equal.
pub fn compare_values(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    direction: SortDirection,
) -> Ordering {
    let ord = match (a, b) {
        (Some(CellValue::Text(x)), Some(CellValue::Text(y))) => compare_text(x, y),
        (Some(CellValue::Number(x)), Some(CellValue::Number(y))) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (Some(CellValue::Date(x)), Some(CellValue::Date(y))) => {
            x.timestamp_millis().cmp(&y.timestamp_millis())
        }
        _ => Ordering::Equal,
    };
    direction.apply(ord)
}

/// Stable ordered view of `rows`; input order when `config` is `None`.
pub fn sort_rows<'a, F: TableField>(
    rows: &'a [TableRow<F>],
    config: Option<&SortConfig<F>>,
) -> Vec<&'a TableRow<F>> {
    let mut view: Vec<&TableRow<F>> = rows.iter().collect();
    if let Some(cfg) = config {
        view.sort_by(|a, b| {
            compare_values(
                a.sort_value(cfg.key),
                b.sort_value(cfg.key),
                cfg.direction,
            )
        });
    }
    view
}
