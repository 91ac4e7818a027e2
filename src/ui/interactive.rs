//! Prompt loop that stands in for clicking column headers.

use crate::errors::AppResult;
use crate::table::{RenderOptions, SortableTable, TableField};
use std::io::{BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
pub enum Input<F> {
    Activate(F),
    Quit,
    Skip,
    Invalid(String),
}

/// Accepts a 1-based column number, a field key, or `q`.
pub fn parse_input<F: TableField>(line: &str, table: &SortableTable<F>) -> Input<F> {
    let line = line.trim();
    if line.is_empty() {
        return Input::Skip;
    }
    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }

    if let Ok(n) = line.parse::<usize>() {
        return match n.checked_sub(1).and_then(|i| table.columns().get(i)) {
            Some(col) => Input::Activate(col.field),
            None => Input::Invalid(format!("No column number {n}")),
        };
    }

    match F::from_key(line) {
        Ok(f) => Input::Activate(f),
        Err(e) => Input::Invalid(e.to_string()),
    }
}

fn prompt<F: TableField>(table: &SortableTable<F>) -> String {
    let choices: Vec<String> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.sortable)
        .map(|(i, c)| format!("[{}] {}", i + 1, c.header_name))
        .collect();
    format!("Sort by {} (q to quit): ", choices.join("  "))
}

pub fn run<F, R, W>(
    table: &mut SortableTable<F>,
    opts: &RenderOptions,
    input: R,
    out: &mut W,
) -> AppResult<()>
where
    F: TableField,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}", prompt(table))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };

        match parse_input(&line?, table) {
            Input::Quit => break,
            Input::Skip => {}
            Input::Invalid(msg) => writeln!(out, "{msg}")?,
            Input::Activate(field) => {
                if table.request_sort(field) {
                    writeln!(out)?;
                    write!(out, "{}", table.render(opts))?;
                } else {
                    let name = table
                        .column(field)
                        .map_or(field.key(), |c| c.header_name.as_str());
                    writeln!(out, "Column {name} is not sortable")?;
                }
            }
        }
    }
    Ok(())
}
