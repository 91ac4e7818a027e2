//! Generic sortable table.
//!
//! Consumers describe their columns and pre-built rows over a closed field
//! enum; [`SortableTable`] owns the only mutable state (the current sort) and
//! renders an ordered text view of the rows.

pub mod element;
pub mod model;
pub mod sort;

pub use element::Element;
pub use model::{Cell, CellValue, RowId, TableColumn, TableField, TableRow};
pub use sort::{NEUTRAL_GLYPH, SortConfig, SortDirection};

use crate::utils::table::{Table, TextCell};
use ansi_term::{Colour, Style};

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub color: bool,
    pub separator: char,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            separator: '-',
        }
    }
}

pub struct SortableTable<F: TableField> {
    columns: Vec<TableColumn<F>>,
    rows: Vec<TableRow<F>>,
    sort: Option<SortConfig<F>>,
}

impl<F: TableField> SortableTable<F> {
    pub fn new(
        columns: Vec<TableColumn<F>>,
        rows: Vec<TableRow<F>>,
        default_sort: Option<SortConfig<F>>,
    ) -> Self {
        Self {
            columns,
            rows,
            sort: default_sort,
        }
    }

    pub fn columns(&self) -> &[TableColumn<F>] {
        &self.columns
    }

    pub fn rows(&self) -> &[TableRow<F>] {
        &self.rows
    }

    pub fn sort_config(&self) -> Option<&SortConfig<F>> {
        self.sort.as_ref()
    }

    pub fn column(&self, field: F) -> Option<&TableColumn<F>> {
        self.columns.iter().find(|c| c.field == field)
    }

    /// Header activation. Returns `false` (and leaves the state alone) for
    /// fields that are not a sortable column of this table.
    pub fn request_sort(&mut self, field: F) -> bool {
        if !self.column(field).is_some_and(|c| c.sortable) {
            log::debug!("ignoring activation of non-sortable column {:?}", field);
            return false;
        }

        let next = sort::next_sort(self.sort.as_ref(), field);
        log::debug!(
            "sort {} -> {}",
            self.sort
                .as_ref()
                .map_or_else(|| "none".to_string(), ToString::to_string),
            next
        );
        self.sort = Some(next);
        true
    }

    /// Rows in display order, recomputed from the input every call.
    pub fn sorted_rows(&self) -> Vec<&TableRow<F>> {
        sort::sort_rows(&self.rows, self.sort.as_ref())
    }

    /// Arrow glyph for a column header, `None` for non-sortable columns.
    pub fn header_indicator(&self, column: &TableColumn<F>) -> Option<&'static str> {
        if !column.sortable {
            return None;
        }
        match &self.sort {
            Some(s) if s.key == column.field => Some(s.direction.glyph()),
            _ => Some(NEUTRAL_GLYPH),
        }
    }

    pub fn render(&self, opts: &RenderOptions) -> String {
        let headers = self
            .columns
            .iter()
            .map(|col| {
                let plain = match self.header_indicator(col) {
                    Some(glyph) => format!("{} {}", col.header_name, glyph),
                    None => col.header_name.clone(),
                };
                let active = self.sort.as_ref().is_some_and(|s| s.key == col.field);
                let styled = if !opts.color {
                    plain.clone()
                } else if active {
                    Colour::Cyan.bold().paint(plain.as_str()).to_string()
                } else {
                    Style::new().bold().paint(plain.as_str()).to_string()
                };
                TextCell::new(plain, styled)
            })
            .collect();

        let mut table = Table::new(headers, opts.separator);

        for row in self.sorted_rows() {
            let cells = self
                .columns
                .iter()
                .map(|col| match row.cell(col.field) {
                    Some(cell) => {
                        let plain = cell.element.plain();
                        let styled = if opts.color {
                            cell.element.styled()
                        } else {
                            plain.clone()
                        };
                        TextCell::new(plain, styled)
                    }
                    None => TextCell::default(),
                })
                .collect();
            table.add_row(cells);
        }

        table.render()
    }
}
