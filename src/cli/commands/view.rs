//! Shared rendering of an absence page.

use crate::api::{AbsenceSource, FileSource, HttpSource};
use crate::cli::parser::{Cli, ViewArgs};
use crate::config::Config;
use crate::core::page::AbsencePage;
use crate::core::routes::command_for_path;
use crate::core::rows::AbsenceField;
use crate::errors::AppResult;
use crate::table::{CellValue, RenderOptions, SortConfig, SortableTable, TableField};
use crate::ui::{interactive, messages};
use crate::utils::path::expand_tilde;
use std::collections::BTreeSet;
use std::io;

/// File source when `--source` is given, the configured API otherwise.
pub fn open_source(cli: &Cli, cfg: &Config) -> AppResult<Box<dyn AbsenceSource>> {
    match &cli.source {
        Some(path) => {
            let conflicts = cli.conflicts.as_deref().map(expand_tilde);
            Ok(Box::new(FileSource::open(
                &expand_tilde(path),
                conflicts.as_deref(),
            )?))
        }
        None => Ok(Box::new(HttpSource::new(
            &cfg.api_base_url,
            cfg.timeout_secs,
        )?)),
    }
}

pub fn with_conflicts(cli: &Cli, cfg: &Config) -> bool {
    cfg.show_conflicts && !cli.no_conflicts
}

/// `--sort` wins over the configured default.
fn initial_sort(view: &ViewArgs, cfg: &Config) -> AppResult<Option<SortConfig<AbsenceField>>> {
    match &view.sort {
        Some(spec) => Ok(Some(SortConfig::parse(spec)?)),
        None => cfg.default_sort(),
    }
}

pub fn show(page: AbsencePage, view: &ViewArgs, cfg: &Config) -> AppResult<()> {
    let opts = RenderOptions {
        color: cfg.color,
        separator: cfg.separator(),
    };

    messages::header(&page.title, opts.color);
    if let Some(w) = &page.warning {
        messages::warning(w, opts.color);
    }

    let mut table = page.into_table(initial_sort(view, cfg)?);
    for key in &view.click {
        table.request_sort(AbsenceField::from_key(key)?);
    }

    if table.rows().is_empty() {
        messages::info("No absences to show.", opts.color);
        return Ok(());
    }

    print!("{}", table.render(&opts));

    if view.links {
        print_links(&table);
    }

    if view.interactive {
        let stdin = io::stdin();
        interactive::run(&mut table, &opts, stdin.lock(), &mut io::stdout())?;
    }

    Ok(())
}

fn print_links(table: &SortableTable<AbsenceField>) {
    let targets: BTreeSet<(String, String)> = table
        .sorted_rows()
        .iter()
        .filter_map(|row| {
            let cell = row.cell(AbsenceField::Name)?;
            let (to, disabled) = cell.element.link()?;
            if disabled {
                return None;
            }
            let name = match &cell.value {
                CellValue::Text(s) => s.clone(),
                _ => cell.element.plain(),
            };
            Some((name, command_for_path(to)?))
        })
        .collect();

    if targets.is_empty() {
        return;
    }

    println!();
    for (name, cmd) in targets {
        println!("  {name}: {cmd}");
    }
}
